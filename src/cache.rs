//! Keyed cache of server responses with prefix invalidation.
//!
//! Entries are indexed by a composite key such as `["issues"]` or
//! `["issues", "42"]`. A successful mutation invalidates the whole key
//! family so every dependent view refetches on next access. There is no
//! TTL; entries live until invalidated, cleared, or replaced.

use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::storage::KvStorage;

pub struct QueryCache {
    storage: Box<dyn KvStorage>,
}

impl QueryCache {
    pub fn new(storage: Box<dyn KvStorage>) -> Self {
        QueryCache { storage }
    }

    /// Cached value for `key`, or run `fetch`, store the result, and
    /// return it. Errors from `fetch` propagate and nothing is cached.
    pub fn fetch<T, F>(&self, key: &[&str], fetch: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Result<T>,
    {
        let storage_key = encode_key(key);
        if let Some(text) = self.storage.get(&storage_key) {
            if let Ok(value) = serde_json::from_str(&text) {
                tracing::debug!(key = %storage_key, "cache hit");
                return Ok(value);
            }
            // Undecodable entry: fall through to a fresh fetch.
        }

        tracing::debug!(key = %storage_key, "cache miss");
        let value = fetch()?;
        self.storage.set(&storage_key, &serde_json::to_string(&value)?)?;
        Ok(value)
    }

    /// Remove every entry whose key starts with `prefix`.
    /// `invalidate(&["issues"])` drops both the list and each per-id entry.
    pub fn invalidate(&self, prefix: &[&str]) -> Result<()> {
        for storage_key in self.storage.keys() {
            if let Some(parts) = decode_key(&storage_key) {
                if parts.len() >= prefix.len()
                    && parts.iter().zip(prefix).all(|(a, b)| a == b)
                {
                    self.storage.remove(&storage_key)?;
                }
            }
        }
        Ok(())
    }

    /// Drop everything. Used when the authorization context changes.
    pub fn clear(&self) -> Result<()> {
        for storage_key in self.storage.keys() {
            self.storage.remove(&storage_key)?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.storage.keys().is_empty()
    }
}

fn encode_key(parts: &[&str]) -> String {
    serde_json::to_string(parts).expect("key parts serialize")
}

fn decode_key(storage_key: &str) -> Option<Vec<String>> {
    serde_json::from_str(storage_key).ok()
}
