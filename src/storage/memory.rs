use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::error::{StorageError, StorageResult};
use super::traits::{ObjectStore, PutOptions};

/// In-memory object store for tests, with switchable read/write
/// failure injection.
#[derive(Default)]
pub struct MemoryStore {
    objects: Mutex<BTreeMap<String, String>>,
    puts: Mutex<BTreeMap<String, PutOptions>>,
    fail_writes: AtomicBool,
    fail_reads: AtomicBool,
}

impl MemoryStore {
    pub fn keys(&self) -> Vec<String> {
        self.objects.lock().unwrap().keys().cloned().collect()
    }

    pub fn insert_raw(&self, key: &str, body: &str) {
        self.objects
            .lock()
            .unwrap()
            .insert(key.to_string(), body.to_string());
    }

    /// Options recorded for the last `put` of `key`.
    pub fn put_options(&self, key: &str) -> Option<PutOptions> {
        self.puts.lock().unwrap().get(key).cloned()
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn put(&self, key: &str, body: String, options: &PutOptions) -> StorageResult<String> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("write failure injected".into()));
        }
        self.objects.lock().unwrap().insert(key.to_string(), body);
        self.puts
            .lock()
            .unwrap()
            .insert(key.to_string(), options.clone());
        Ok(format!("memory://{}", key))
    }

    async fn get(&self, key: &str) -> StorageResult<String> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("read failure injected".into()));
        }
        self.objects
            .lock()
            .unwrap()
            .get(key)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(key.to_string()))
    }

    async fn delete(&self, key: &str) -> StorageResult<bool> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("write failure injected".into()));
        }
        self.objects.lock().unwrap().remove(key);
        Ok(true)
    }

    async fn list(&self, prefix: &str) -> StorageResult<Vec<String>> {
        Ok(self
            .objects
            .lock()
            .unwrap()
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect())
    }

    fn shareable_url(&self, key: &str, expires_in: u64) -> StorageResult<String> {
        Ok(format!("memory://{}?expires={}", key, expires_in))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_filters_by_prefix() {
        let store = MemoryStore::default();
        store
            .put("shared/a", "{}".to_string(), &PutOptions::default())
            .await
            .unwrap();
        store
            .put("shared/b", "{}".to_string(), &PutOptions::default())
            .await
            .unwrap();
        store
            .put("playlists/u", "[]".to_string(), &PutOptions::default())
            .await
            .unwrap();

        let keys = store.list("shared/").await.unwrap();
        assert_eq!(keys, vec!["shared/a".to_string(), "shared/b".to_string()]);
    }
}
