pub mod support_entity_types;
pub mod supports;
