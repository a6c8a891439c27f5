//! Account registration service.

mod service;


pub use service::{NewRegistration, RegistrationService};
