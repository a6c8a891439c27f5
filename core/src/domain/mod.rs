//! Domain layer containing business entities and cache-key conventions.

pub mod entities;
pub mod keys;

// Re-export commonly used domain types
pub use entities::*;
