use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

/// Playlists collection. The suffix versions the on-disk layout.
pub const PLAYLISTS_KEY: &str = "playlists_v2";
/// Favorite track keys.
pub const FAVORITES_KEY: &str = "favorite_tracks";
/// Map of share id to shared snapshot, for cloudless sessions.
pub const SHARED_KEY: &str = "shared_playlists";
/// Cached pseudo user id.
pub const USER_ID_KEY: &str = "user_id";

/// Last-resort persistence: one JSON file per key under the app
/// directory. Loads never fail and saves never propagate errors, so
/// this store can sit at the end of a fallback chain without adding
/// failure modes of its own.
#[derive(Debug, Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        LocalStore { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Absence and parse failure both yield `default`.
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let path = self.path(key);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(_) => return default,
        };
        match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(err) => {
                warn!(key, %err, "discarding unreadable local data");
                default
            }
        }
    }

    /// Best effort: failures are logged and swallowed.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) {
        let path = self.path(key);
        if let Some(parent) = path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                warn!(key, %err, "failed to create local store directory");
                return;
            }
        }
        match serde_json::to_string_pretty(value) {
            Ok(json) => {
                if let Err(err) = fs::write(&path, json) {
                    warn!(key, %err, "failed to write local data");
                }
            }
            Err(err) => warn!(key, %err, "failed to serialize local data"),
        }
    }

    pub fn exists(&self, key: &str) -> bool {
        self.path(key).exists()
    }
}
