pub mod support_entity_type_repository;
pub mod support_repository;

pub use support_entity_type_repository::{
    SupportEntityTypeRepository, SupportEntityTypeRepositoryError,
};
pub use support_repository::{NewSupport, SupportRepository, SupportRepositoryError};
