//! Ephemeral store implementations
//!
//! `RedisStore` is the production store; `MemoryStore` backs development
//! runs and API integration tests. Both implement the core
//! `EphemeralStore` trait with real TTL semantics.

pub mod memory_store;
pub mod redis_store;

pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;

// Re-export commonly used types
pub use pw_shared::config::cache::CacheConfig;
