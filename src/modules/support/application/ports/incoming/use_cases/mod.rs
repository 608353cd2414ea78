mod support_entity_types;
mod supports;

pub use support_entity_types::{
    CreateSupportEntityTypeCommand, CreateSupportEntityTypeCommandError,
    CreateSupportEntityTypeUseCase, DeleteSupportEntityTypeUseCase, ListSupportEntityTypesUseCase,
    SupportEntityTypeError,
};
pub use supports::{
    CreateSupportCommand, CreateSupportUseCase, DeleteSupportUseCase, GetSupportUseCase,
    ListOrganizationSupportsUseCase, SupportError,
};
