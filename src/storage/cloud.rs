use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::model::{Playlist, SharedPlaylistSnapshot};

use super::error::StorageResult;
use super::traits::{ObjectStore, PutOptions};

/// Default time-to-live for shared playlist snapshots.
pub const SHARED_TTL_SECS: u64 = 30 * 24 * 3600;
/// Default advisory expiry on generated share URLs.
pub const SHARE_URL_TTL_SECS: u64 = 7 * 24 * 3600;

const PLAYLIST_PREFIX: &str = "playlists/";
const SHARED_PREFIX: &str = "shared/";
const FAVORITES_PREFIX: &str = "user/favorites/";

/// Playlist-specific operations over an injected object store, applying
/// the key-namespacing conventions and default write options.
pub struct CloudStorage {
    store: Arc<dyn ObjectStore>,
}

impl CloudStorage {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        CloudStorage { store }
    }

    fn playlists_key(user_id: &str) -> String {
        format!("{}{}", PLAYLIST_PREFIX, user_id)
    }

    fn shared_key(share_id: &str) -> String {
        format!("{}{}", SHARED_PREFIX, share_id)
    }

    fn favorites_key(user_id: &str) -> String {
        format!("{}{}", FAVORITES_PREFIX, user_id)
    }

    async fn put_json<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        options: PutOptions,
    ) -> StorageResult<String> {
        let body = serde_json::to_string(value)?;
        self.store.put(key, body, &options).await
    }

    async fn get_json<T: DeserializeOwned>(&self, key: &str) -> StorageResult<T> {
        let body = self.store.get(key).await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn store_playlists(
        &self,
        user_id: &str,
        playlists: &[Playlist],
    ) -> StorageResult<String> {
        let options = PutOptions::encoded()
            .meta("data-type", "playlists")
            .meta("user-id", user_id)
            .meta("count", &playlists.len().to_string());
        self.put_json(&Self::playlists_key(user_id), &playlists, options)
            .await
    }

    pub async fn get_playlists(&self, user_id: &str) -> StorageResult<Vec<Playlist>> {
        self.get_json(&Self::playlists_key(user_id)).await
    }

    pub async fn store_shared_playlist(
        &self,
        share_id: &str,
        snapshot: &SharedPlaylistSnapshot,
    ) -> StorageResult<String> {
        let options = PutOptions::encoded()
            .ttl(SHARED_TTL_SECS)
            .meta("data-type", "shared-playlist")
            .meta("share-id", share_id)
            .meta("playlist-name", &snapshot.playlist.name);
        self.put_json(&Self::shared_key(share_id), snapshot, options)
            .await
    }

    pub async fn get_shared_playlist(
        &self,
        share_id: &str,
    ) -> StorageResult<SharedPlaylistSnapshot> {
        self.get_json(&Self::shared_key(share_id)).await
    }

    pub async fn store_favorites(
        &self,
        user_id: &str,
        favorites: &[String],
    ) -> StorageResult<String> {
        self.put_json(
            &Self::favorites_key(user_id),
            &favorites,
            PutOptions::default(),
        )
        .await
    }

    pub async fn get_favorites(&self, user_id: &str) -> StorageResult<Vec<String>> {
        self.get_json(&Self::favorites_key(user_id)).await
    }

    pub async fn delete_playlists(&self, user_id: &str) -> StorageResult<bool> {
        self.store.delete(&Self::playlists_key(user_id)).await
    }

    pub async fn delete_shared_playlist(&self, share_id: &str) -> StorageResult<bool> {
        self.store.delete(&Self::shared_key(share_id)).await
    }

    pub fn playlist_share_url(&self, share_id: &str) -> StorageResult<String> {
        self.store
            .shareable_url(&Self::shared_key(share_id), SHARE_URL_TTL_SECS)
    }
}
