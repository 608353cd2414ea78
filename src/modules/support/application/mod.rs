pub mod domain;
pub mod ports;
pub mod services;
pub mod support_use_cases;

pub use support_use_cases::SupportUseCases;
