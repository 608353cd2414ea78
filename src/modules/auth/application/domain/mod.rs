pub mod entities;
pub mod user_fields;
