use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

pub mod memory;
pub mod rest;

pub use memory::MemoryStore;
pub use rest::RestStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record store request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("record store returned unexpected data: {0}")]
    Unexpected(String),
}

/// Key-value document store holding all persisted member state.
///
/// One handle is built at startup and injected into every handler. The
/// adapter adds no retry and no timeout beyond the transport default; any
/// underlying failure surfaces as a [`StoreError`].
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch the document at `key`, `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Write the full document at `key`, replacing whatever was there.
    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError>;

    /// Shallow-merge the top-level fields of `partial` into the document at
    /// `key`. Merging into an absent key creates a document from the partial.
    async fn merge(&self, key: &str, partial: Value) -> Result<(), StoreError>;

    /// Remove the document at `key`. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Fetch every document, keyed by its storage key.
    async fn get_all(&self) -> Result<Map<String, Value>, StoreError>;
}
