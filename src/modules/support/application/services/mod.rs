mod support_entity_type_service;
mod support_service;

pub use support_entity_type_service::SupportEntityTypeService;
pub use support_service::SupportService;
