pub mod app;
pub mod config;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::support;

#[cfg(test)]
mod tests;
