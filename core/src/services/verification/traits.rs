//! Seams between the workflow engine and its collaborators.

use async_trait::async_trait;

use crate::errors::DomainResult;

use super::types::GeneratedChallenge;

/// A single entry of a batched store write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreEntry {
    pub key: String,
    pub value: String,
    pub ttl_seconds: u64,
}

impl StoreEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>, ttl_seconds: u64) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            ttl_seconds,
        }
    }
}

/// Shared TTL-bearing key-value store for transient verification state.
///
/// Expired entries are indistinguishable from entries that never existed:
/// `get` returns `None` for both.
#[async_trait]
pub trait EphemeralStore: Send + Sync {
    /// Store a value under `key`, overwriting any existing value.
    async fn put(&self, key: &str, value: &str, ttl_seconds: u64) -> DomainResult<()>;

    /// Fetch the value under `key`; `None` when absent or expired.
    async fn get(&self, key: &str) -> DomainResult<Option<String>>;

    /// Remove the value under `key`. Removing an absent key is not an error.
    async fn delete(&self, key: &str) -> DomainResult<()>;

    /// Write several entries together.
    ///
    /// All writes are attempted as one batch; a failed batch surfaces as an
    /// error rather than leaving a silently partial state.
    async fn put_batch(&self, entries: &[StoreEntry]) -> DomainResult<()>;
}

/// Produces random challenge text plus a rendered image for it.
pub trait ChallengeGenerator: Send + Sync {
    fn generate(&self, length: usize) -> DomainResult<GeneratedChallenge>;
}
