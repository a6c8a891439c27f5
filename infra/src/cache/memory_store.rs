//! In-memory ephemeral store
//!
//! Backs development runs and API integration tests where a Redis
//! instance is not worth the setup. TTLs are honored against
//! `Instant::now()`; expired entries are dropped lazily on access.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use pw_core::errors::DomainResult;
use pw_core::services::{EphemeralStore, StoreEntry};

struct StoredValue {
    value: String,
    expires_at: Instant,
}

/// Process-local store with real TTL semantics
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, StoredValue>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert_locked(
        entries: &mut HashMap<String, StoredValue>,
        key: &str,
        value: &str,
        ttl_seconds: u64,
    ) {
        entries.insert(
            key.to_string(),
            StoredValue {
                value: value.to_string(),
                expires_at: Instant::now() + Duration::from_secs(ttl_seconds),
            },
        );
    }
}

#[async_trait]
impl EphemeralStore for MemoryStore {
    async fn put(&self, key: &str, value: &str, ttl_seconds: u64) -> DomainResult<()> {
        let mut entries = self.entries.lock().unwrap();
        Self::insert_locked(&mut entries, key, value, ttl_seconds);
        Ok(())
    }

    async fn get(&self, key: &str) -> DomainResult<Option<String>> {
        let mut entries = self.entries.lock().unwrap();
        match entries.get(key) {
            Some(stored) if stored.expires_at > Instant::now() => Ok(Some(stored.value.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, key: &str) -> DomainResult<()> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }

    async fn put_batch(&self, entries: &[StoreEntry]) -> DomainResult<()> {
        // One lock for the whole batch; readers see all entries or none.
        let mut map = self.entries.lock().unwrap();
        for entry in entries {
            Self::insert_locked(&mut map, &entry.key, &entry.value, entry.ttl_seconds);
        }
        Ok(())
    }
}
