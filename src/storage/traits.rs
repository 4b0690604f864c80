use async_trait::async_trait;

use super::error::StorageResult;

/// Options applied to a single `put`.
#[derive(Debug, Clone, Default)]
pub struct PutOptions {
    /// Apply the reversible text encoding to the body before upload.
    pub encode: bool,
    /// Advisory time-to-live in seconds, forwarded to the store.
    pub ttl: Option<u64>,
    /// Extra metadata headers attached to the object.
    pub metadata: Vec<(String, String)>,
}

impl PutOptions {
    pub fn encoded() -> Self {
        PutOptions {
            encode: true,
            ..Default::default()
        }
    }

    pub fn ttl(mut self, secs: u64) -> Self {
        self.ttl = Some(secs);
        self
    }

    pub fn meta(mut self, key: &str, value: &str) -> Self {
        self.metadata.push((key.to_string(), value.to_string()));
        self
    }
}

/// Key-value object store over JSON text bodies. Typed
/// (de)serialization lives one layer up, in the persistence facade,
/// which keeps this trait object-safe.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `body` under `key`, returning a content-delivery URL.
    async fn put(&self, key: &str, body: String, options: &PutOptions) -> StorageResult<String>;

    /// Fetch the decoded body stored under `key`.
    /// Absence is `Err(StorageError::NotFound)`.
    async fn get(&self, key: &str) -> StorageResult<String>;

    /// Delete `key`. Idempotent: deleting an absent key is success.
    async fn delete(&self, key: &str) -> StorageResult<bool>;

    /// Keys whose name starts with `prefix`.
    async fn list(&self, prefix: &str) -> StorageResult<Vec<String>>;

    /// Content-delivery URL carrying an advisory `expires=` parameter.
    /// The expiry is not signed; enforcement belongs to whatever the
    /// stored object itself records.
    fn shareable_url(&self, key: &str, expires_in: u64) -> StorageResult<String>;
}
