//! Endpoint completing the verification workflow with an account.

pub mod register;

pub use register::register;
