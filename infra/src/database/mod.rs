//! Database module - MySQL implementations using SQLx
//!
//! Connection pool management plus the repository implementation backing
//! the core `UserRepository` trait.

pub mod connection;
pub mod mysql;

// Re-export commonly used types
pub use connection::DatabasePool;
pub use mysql::MySqlUserRepository;
