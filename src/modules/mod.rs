pub mod auth;
pub mod support;
