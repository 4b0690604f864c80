use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::config::R2Config;
use crate::model::{
    self, Playlist, SharedPlaylistSnapshot, Track,
};
use crate::storage::{
    CloudStorage, LocalStore, R2Client, FAVORITES_KEY, PLAYLISTS_KEY, SHARED_KEY,
    SHARED_TTL_SECS, USER_ID_KEY,
};

use super::persist::{PersistSnapshot, PersistWorker};
use super::state::{reduce, Action, PlaylistState, PlaylistUpdate, TrackUpdate};

#[derive(Debug, Clone)]
pub struct StorageStatus {
    pub cloud_connected: bool,
    pub user_id: String,
}

/// Session-owned state store: applies actions through the pure reducer,
/// hands versioned snapshots to the persistence worker, and carries the
/// share/import flow. All mutation goes through `dispatch`, in dispatch
/// order.
pub struct PlaylistStore {
    state: PlaylistState,
    version: u64,
    playlists_version: u64,
    favorites_version: u64,
    tx: Option<watch::Sender<PersistSnapshot>>,
    worker: Option<JoinHandle<()>>,
    cloud: Option<Arc<CloudStorage>>,
    local: LocalStore,
    user_id: String,
}

impl PlaylistStore {
    /// Open a store rooted at `data_dir`, connecting to the object
    /// store when credentials are configured and loading the initial
    /// state (cloud preferred, local fallback).
    pub async fn open(data_dir: &Path) -> Self {
        Self::open_with(data_dir, Self::connect_cloud()).await
    }

    /// Like `open`, with an explicitly injected cloud facade.
    pub async fn open_with(data_dir: &Path, cloud: Option<Arc<CloudStorage>>) -> Self {
        let local = LocalStore::new(data_dir);
        let user_id = Self::resolve_user_id(&local);

        let (tx, rx) = watch::channel(PersistSnapshot::default());
        let worker =
            PersistWorker::new(cloud.clone(), local.clone(), user_id.clone()).spawn(rx);

        let mut store = PlaylistStore {
            state: PlaylistState::default(),
            version: 0,
            playlists_version: 0,
            favorites_version: 0,
            tx: Some(tx),
            worker: Some(worker),
            cloud,
            local,
            user_id,
        };
        store.load_initial().await;
        store
    }

    fn connect_cloud() -> Option<Arc<CloudStorage>> {
        let config = R2Config::from_env();
        if !config.is_configured() {
            debug!("object store not configured, using local persistence only");
            return None;
        }
        Some(Arc::new(CloudStorage::new(Arc::new(R2Client::new(config)))))
    }

    fn resolve_user_id(local: &LocalStore) -> String {
        let cached: Option<String> = local.load(USER_ID_KEY, None);
        if let Some(id) = cached {
            return id;
        }
        let id = model::generate_user_id();
        local.save(USER_ID_KEY, &id);
        id
    }

    async fn load_initial(&mut self) {
        self.dispatch(Action::SetLoading(true));

        match self.cloud.clone() {
            Some(cloud) => {
                let (playlists, favorites) = tokio::join!(
                    cloud.get_playlists(&self.user_id),
                    cloud.get_favorites(&self.user_id),
                );

                let failed = matches!(&playlists, Err(e) if !e.is_not_found())
                    || matches!(&favorites, Err(e) if !e.is_not_found());
                if failed {
                    if let Err(err) = &playlists {
                        warn!(%err, "cloud playlist load failed");
                    }
                    if let Err(err) = &favorites {
                        warn!(%err, "cloud favorites load failed");
                    }
                    self.dispatch(Action::SetError(Some(
                        "Failed to load playlists from cloud storage".to_string(),
                    )));
                    self.load_from_local();
                } else {
                    // Absence is a legitimate first run, not an error.
                    if let Ok(playlists) = playlists {
                        self.dispatch(Action::SetPlaylists(playlists));
                    }
                    if let Ok(favorites) = favorites {
                        self.dispatch(Action::SetFavorites(favorites));
                    }
                }
            }
            None => self.load_from_local(),
        }

        self.dispatch(Action::SetLoading(false));
    }

    fn load_from_local(&mut self) {
        let playlists: Vec<Playlist> = self.local.load(PLAYLISTS_KEY, Vec::new());
        let favorites: Vec<String> = self.local.load(FAVORITES_KEY, Vec::new());
        self.dispatch(Action::SetPlaylists(playlists));
        self.dispatch(Action::SetFavorites(favorites));
    }

    /// Apply an action through the reducer and queue the new state for
    /// persistence. Synchronous; never blocks on IO.
    pub fn dispatch(&mut self, action: Action) {
        let playlists_dirty = action.touches_playlists();
        let favorites_dirty = action.touches_favorites();

        self.state = reduce(&self.state, &action);

        if !(playlists_dirty || favorites_dirty) {
            return;
        }
        self.version += 1;
        if playlists_dirty {
            self.playlists_version = self.version;
        }
        if favorites_dirty {
            self.favorites_version = self.version;
        }

        if let Some(tx) = &self.tx {
            let snapshot = PersistSnapshot {
                playlists_version: self.playlists_version,
                favorites_version: self.favorites_version,
                playlists: self.state.playlists.clone(),
                favorites: self.state.favorites.clone(),
            };
            if tx.send(snapshot).is_err() {
                warn!("persistence worker is gone, state changes are no longer saved");
            }
        }
    }

    pub fn state(&self) -> &PlaylistState {
        &self.state
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn create_playlist(
        &mut self,
        name: &str,
        mood: &str,
        description: Option<String>,
    ) -> Result<Playlist> {
        let name = name.trim();
        if name.is_empty() {
            bail!("Playlist name cannot be empty");
        }
        let playlist = Playlist::new(name, mood, description);
        self.dispatch(Action::AddPlaylist(playlist.clone()));
        Ok(playlist)
    }

    pub fn update_playlist(&mut self, id: &str, updates: PlaylistUpdate) {
        self.dispatch(Action::UpdatePlaylist {
            id: id.to_string(),
            updates,
        });
    }

    pub fn delete_playlist(&mut self, id: &str) {
        self.dispatch(Action::DeletePlaylist(id.to_string()));
    }

    pub fn add_track(&mut self, playlist_id: &str, track: Track) {
        self.dispatch(Action::AddTrack {
            playlist_id: playlist_id.to_string(),
            track,
        });
    }

    pub fn update_track(&mut self, playlist_id: &str, track_id: &str, updates: TrackUpdate) {
        self.dispatch(Action::UpdateTrack {
            playlist_id: playlist_id.to_string(),
            track_id: track_id.to_string(),
            updates,
        });
    }

    pub fn delete_track(&mut self, playlist_id: &str, track_id: &str) {
        self.dispatch(Action::DeleteTrack {
            playlist_id: playlist_id.to_string(),
            track_id: track_id.to_string(),
        });
    }

    pub fn toggle_favorite(&mut self, key: &str) {
        self.dispatch(Action::ToggleFavorite(key.to_string()));
    }

    pub fn is_favorite(&self, key: &str) -> bool {
        self.state.favorites.iter().any(|f| f == key)
    }

    pub fn set_current_playlist(&mut self, playlist: Option<Playlist>) {
        self.dispatch(Action::SetCurrentPlaylist(playlist));
    }

    pub fn playlists_by_mood(&self, mood: &str) -> Vec<&Playlist> {
        self.state
            .playlists
            .iter()
            .filter(|p| p.mood.eq_ignore_ascii_case(mood))
            .collect()
    }

    /// Replace local state with the cloud copy. Does nothing when no
    /// cloud is configured; failures keep the current state.
    pub async fn refresh_from_cloud(&mut self) {
        let Some(cloud) = self.cloud.clone() else {
            return;
        };
        self.dispatch(Action::SetLoading(true));
        match cloud.get_playlists(&self.user_id).await {
            Ok(playlists) => self.dispatch(Action::SetPlaylists(playlists)),
            Err(err) if err.is_not_found() => {}
            Err(err) => warn!(%err, "cloud refresh failed"),
        }
        self.dispatch(Action::SetLoading(false));
    }

    pub fn storage_status(&self) -> StorageStatus {
        StorageStatus {
            cloud_connected: self.cloud.is_some(),
            user_id: self.user_id.clone(),
        }
    }

    /// Persist a denormalized snapshot of the playlist under a fresh
    /// share id and mark the playlist shared. The user is waiting on
    /// the returned id, so persistence failures propagate here instead
    /// of being swallowed.
    pub async fn share_playlist(&mut self, playlist_id: &str) -> Result<String> {
        let playlist = self
            .state
            .playlists
            .iter()
            .find(|p| p.id == playlist_id)
            .cloned()
            .with_context(|| format!("Playlist {} not found", playlist_id))?;

        let share_id = model::generate_share_id();
        let snapshot = SharedPlaylistSnapshot::new(&playlist, &share_id, SHARED_TTL_SECS);

        match &self.cloud {
            Some(cloud) => {
                cloud
                    .store_shared_playlist(&share_id, &snapshot)
                    .await
                    .context("Failed to store shared playlist")?;
            }
            None => {
                let mut shared: BTreeMap<String, SharedPlaylistSnapshot> =
                    self.local.load(SHARED_KEY, BTreeMap::new());
                shared.insert(share_id.clone(), snapshot);
                self.local.save(SHARED_KEY, &shared);
            }
        }

        self.dispatch(Action::UpdatePlaylist {
            id: playlist_id.to_string(),
            updates: PlaylistUpdate {
                is_shared: Some(true),
                share_id: Some(share_id.clone()),
                ..Default::default()
            },
        });

        Ok(share_id)
    }

    /// Read-only lookup. Absence, lookup failure, and an expired
    /// snapshot all collapse to `None`; the expiry recorded in the
    /// snapshot itself is what counts, not the URL parameter.
    pub async fn shared_playlist(&self, share_id: &str) -> Option<SharedPlaylistSnapshot> {
        let snapshot = match &self.cloud {
            Some(cloud) => match cloud.get_shared_playlist(share_id).await {
                Ok(snapshot) => Some(snapshot),
                Err(err) => {
                    if !err.is_not_found() {
                        debug!(%err, "shared playlist lookup failed");
                    }
                    None
                }
            },
            None => {
                let shared: BTreeMap<String, SharedPlaylistSnapshot> =
                    self.local.load(SHARED_KEY, BTreeMap::new());
                shared.get(share_id).cloned()
            }
        }?;

        if snapshot.is_expired(Utc::now().timestamp()) {
            debug!(share_id, "shared playlist expired");
            return None;
        }
        Some(snapshot)
    }

    /// Import a shared snapshot as a new owned playlist. Collapses all
    /// failure detail into `false`.
    pub async fn import_shared_playlist(&mut self, share_id: &str) -> bool {
        let Some(snapshot) = self.shared_playlist(share_id).await else {
            return false;
        };
        let playlist = snapshot.into_imported();
        self.dispatch(Action::AddPlaylist(playlist));
        true
    }

    /// Content-delivery URL for a shared snapshot, with the advisory
    /// expiry parameter. Only meaningful with a cloud store.
    pub fn share_url(&self, share_id: &str) -> Result<String> {
        let cloud = self
            .cloud
            .as_ref()
            .context("Cloud storage is not configured")?;
        cloud
            .playlist_share_url(share_id)
            .map_err(anyhow::Error::from)
    }

    /// Remove a previously published snapshot. Does not touch the
    /// owning playlist's share flags; re-sharing mints a new id anyway.
    pub async fn forget_shared(&self, share_id: &str) -> Result<bool> {
        match &self.cloud {
            Some(cloud) => {
                cloud
                    .delete_shared_playlist(share_id)
                    .await
                    .context("Failed to delete shared playlist")?;
                Ok(true)
            }
            None => {
                let mut shared: BTreeMap<String, SharedPlaylistSnapshot> =
                    self.local.load(SHARED_KEY, BTreeMap::new());
                let removed = shared.remove(share_id).is_some();
                self.local.save(SHARED_KEY, &shared);
                Ok(removed)
            }
        }
    }

    /// Delete this user's remotely persisted playlist collection.
    pub async fn purge_remote(&self) -> Result<bool> {
        let cloud = self
            .cloud
            .as_ref()
            .context("Cloud storage is not configured")?;
        cloud
            .delete_playlists(&self.user_id)
            .await
            .context("Failed to delete remote playlists")?;
        Ok(true)
    }

    /// Close the persistence channel and wait for the worker to flush
    /// the final state.
    pub async fn shutdown(mut self) {
        self.tx.take();
        if let Some(worker) = self.worker.take() {
            if let Err(err) = worker.await {
                warn!(%err, "persistence worker panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{favorite_key, TrackSource};
    use crate::storage::memory::MemoryStore;
    use tempfile::TempDir;

    async fn local_store(temp: &TempDir) -> PlaylistStore {
        PlaylistStore::open_with(temp.path(), None).await
    }

    fn memory_cloud() -> (Arc<MemoryStore>, Arc<CloudStorage>) {
        let mem = Arc::new(MemoryStore::default());
        let cloud = Arc::new(CloudStorage::new(mem.clone()));
        (mem, cloud)
    }

    async fn cloud_store(temp: &TempDir, cloud: &Arc<CloudStorage>) -> PlaylistStore {
        PlaylistStore::open_with(temp.path(), Some(cloud.clone())).await
    }

    #[tokio::test]
    async fn test_create_playlist_validates_name() {
        let temp = TempDir::new().unwrap();
        let mut store = local_store(&temp).await;

        assert!(store.create_playlist("   ", "relaxed", None).is_err());
        let playlist = store
            .create_playlist("  Rainy Day  ", "relaxed", None)
            .unwrap();
        assert_eq!(playlist.name, "Rainy Day");
        assert_eq!(store.state().playlists.len(), 1);
        store.shutdown().await;
    }

    #[tokio::test]
    async fn test_unique_ids_within_session() {
        let temp = TempDir::new().unwrap();
        let mut store = local_store(&temp).await;

        let mut ids = std::collections::HashSet::new();
        for i in 0..50 {
            let playlist = store
                .create_playlist(&format!("Playlist {}", i), "relaxed", None)
                .unwrap();
            assert!(ids.insert(playlist.id));
        }
        store.shutdown().await;
    }

    #[tokio::test]
    async fn test_user_id_is_stable_across_sessions() {
        let temp = TempDir::new().unwrap();
        let store = local_store(&temp).await;
        let first = store.user_id().to_string();
        assert!(first.starts_with("user_"));
        store.shutdown().await;

        let store = local_store(&temp).await;
        assert_eq!(store.user_id(), first);
        store.shutdown().await;
    }

    #[tokio::test]
    async fn test_local_only_state_survives_reload() {
        let temp = TempDir::new().unwrap();

        let mut store = local_store(&temp).await;
        let playlist = store
            .create_playlist("Rainy Day", "relaxed", None)
            .unwrap();
        store.add_track(
            &playlist.id,
            Track::new("Song A", Some("X".to_string()), TrackSource::Local, ""),
        );
        store.toggle_favorite(&favorite_key("Song A", Some("X")));
        store.shutdown().await;

        // Simulated reload: a fresh store over the same directory.
        let store = local_store(&temp).await;
        assert_eq!(store.state().playlists.len(), 1);
        assert_eq!(store.state().playlists[0].tracks.len(), 1);
        assert_eq!(store.state().favorites, vec!["Song AX".to_string()]);
        assert!(store.is_favorite("Song AX"));
        store.shutdown().await;
    }

    #[tokio::test]
    async fn test_cloud_state_survives_reload() {
        let temp = TempDir::new().unwrap();
        let (mem, cloud) = memory_cloud();

        let mut store = cloud_store(&temp, &cloud).await;
        store.create_playlist("Rainy Day", "relaxed", None).unwrap();
        store.toggle_favorite("Song AX");
        let user_id = store.user_id().to_string();
        store.shutdown().await;

        assert!(mem
            .keys()
            .contains(&format!("playlists/{}", user_id)));

        let store = cloud_store(&temp, &cloud).await;
        assert_eq!(store.state().playlists.len(), 1);
        assert_eq!(store.state().favorites, vec!["Song AX".to_string()]);
        assert!(store.state().error.is_none());
        store.shutdown().await;
    }

    #[tokio::test]
    async fn test_cloud_read_failure_falls_back_to_local() {
        let temp = TempDir::new().unwrap();
        let (mem, cloud) = memory_cloud();

        // Data already on disk from an earlier local-only session.
        let local = LocalStore::new(temp.path());
        local.save(
            PLAYLISTS_KEY,
            &vec![Playlist::new("Offline Mix", "calm", None)],
        );
        local.save(FAVORITES_KEY, &vec!["Song AX".to_string()]);

        mem.set_fail_reads(true);
        let store = cloud_store(&temp, &cloud).await;

        assert_eq!(store.state().playlists.len(), 1);
        assert_eq!(store.state().playlists[0].name, "Offline Mix");
        assert_eq!(store.state().favorites, vec!["Song AX".to_string()]);
        assert!(store.state().error.is_some());
        assert!(!store.state().is_loading);
        store.shutdown().await;
    }

    #[tokio::test]
    async fn test_share_and_lookup_scenario() {
        let temp = TempDir::new().unwrap();
        let (_, cloud) = memory_cloud();
        let mut store = cloud_store(&temp, &cloud).await;

        let playlist = store
            .create_playlist("Rainy Day", "relaxed", None)
            .unwrap();
        store.add_track(
            &playlist.id,
            Track::new("Song A", Some("X".to_string()), TrackSource::Local, ""),
        );

        let share_id = store.share_playlist(&playlist.id).await.unwrap();

        let shared = store.state().playlists[0].clone();
        assert!(shared.is_shared);
        assert_eq!(shared.share_id.as_deref(), Some(share_id.as_str()));

        let snapshot = store.shared_playlist(&share_id).await.unwrap();
        assert_eq!(snapshot.playlist.mood, "relaxed");
        assert_eq!(snapshot.playlist.tracks.len(), 1);
        assert_eq!(snapshot.playlist.tracks[0].name, "Song A");

        let url = store.share_url(&share_id).unwrap();
        assert!(url.contains(&share_id));
        store.shutdown().await;
    }

    #[tokio::test]
    async fn test_share_missing_playlist_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let (mem, cloud) = memory_cloud();
        let mut store = cloud_store(&temp, &cloud).await;

        assert!(store.share_playlist("missing").await.is_err());
        assert!(mem.keys().iter().all(|k| !k.starts_with("shared/")));
        store.shutdown().await;
    }

    #[tokio::test]
    async fn test_share_persistence_failure_propagates() {
        let temp = TempDir::new().unwrap();
        let (mem, cloud) = memory_cloud();
        let mut store = cloud_store(&temp, &cloud).await;

        let playlist = store
            .create_playlist("Rainy Day", "relaxed", None)
            .unwrap();
        mem.set_fail_writes(true);

        assert!(store.share_playlist(&playlist.id).await.is_err());
        // The playlist is not marked shared on failure.
        assert!(!store.state().playlists[0].is_shared);
        store.shutdown().await;
    }

    #[tokio::test]
    async fn test_share_works_without_cloud() {
        let temp = TempDir::new().unwrap();
        let mut store = local_store(&temp).await;

        let playlist = store
            .create_playlist("Rainy Day", "relaxed", None)
            .unwrap();
        let share_id = store.share_playlist(&playlist.id).await.unwrap();

        let snapshot = store.shared_playlist(&share_id).await.unwrap();
        assert_eq!(snapshot.playlist.name, "Rainy Day");
        // But there is no CDN URL to hand out.
        assert!(store.share_url(&share_id).is_err());
        store.shutdown().await;
    }

    #[tokio::test]
    async fn test_import_shared_playlist() {
        let temp = TempDir::new().unwrap();
        let (_, cloud) = memory_cloud();
        let mut store = cloud_store(&temp, &cloud).await;

        let playlist = store
            .create_playlist("Rainy Day", "relaxed", None)
            .unwrap();
        let share_id = store.share_playlist(&playlist.id).await.unwrap();

        assert!(store.import_shared_playlist(&share_id).await);
        assert_eq!(store.state().playlists.len(), 2);

        let imported = &store.state().playlists[1];
        assert_eq!(imported.name, "Rainy Day (Imported)");
        assert_ne!(imported.id, playlist.id);
        assert!(!imported.is_shared);
        assert!(imported.share_id.is_none());
        store.shutdown().await;
    }

    #[tokio::test]
    async fn test_import_missing_share_returns_false() {
        let temp = TempDir::new().unwrap();
        let (_, cloud) = memory_cloud();
        let mut store = cloud_store(&temp, &cloud).await;

        assert!(!store.import_shared_playlist("nope1234").await);
        assert!(store.state().playlists.is_empty());
        store.shutdown().await;
    }

    #[tokio::test]
    async fn test_expired_snapshot_yields_none() {
        let temp = TempDir::new().unwrap();
        let (mem, cloud) = memory_cloud();
        let store = cloud_store(&temp, &cloud).await;

        let playlist = Playlist::new("Rainy Day", "relaxed", None);
        let mut snapshot = SharedPlaylistSnapshot::new(&playlist, "expired1", SHARED_TTL_SECS);
        snapshot.expires_at = Some(Utc::now().timestamp() - 60);
        mem.insert_raw("shared/expired1", &serde_json::to_string(&snapshot).unwrap());

        assert!(store.shared_playlist("expired1").await.is_none());
        store.shutdown().await;
    }

    #[tokio::test]
    async fn test_refresh_from_cloud_replaces_state() {
        let temp = TempDir::new().unwrap();
        let (mem, cloud) = memory_cloud();
        let mut store = cloud_store(&temp, &cloud).await;
        let user_id = store.user_id().to_string();

        let remote = vec![
            Playlist::new("From Cloud", "happy", None),
            Playlist::new("Also Remote", "calm", None),
        ];
        mem.insert_raw(
            &format!("playlists/{}", user_id),
            &serde_json::to_string(&remote).unwrap(),
        );

        store.refresh_from_cloud().await;
        assert_eq!(store.state().playlists.len(), 2);
        assert_eq!(store.state().playlists[0].name, "From Cloud");
        assert!(!store.state().is_loading);
        store.shutdown().await;
    }

    #[tokio::test]
    async fn test_playlists_by_mood_is_case_insensitive() {
        let temp = TempDir::new().unwrap();
        let mut store = local_store(&temp).await;
        store.create_playlist("A", "Relaxed", None).unwrap();
        store.create_playlist("B", "energetic", None).unwrap();

        assert_eq!(store.playlists_by_mood("relaxed").len(), 1);
        assert_eq!(store.playlists_by_mood("RELAXED").len(), 1);
        assert!(store.playlists_by_mood("melancholy").is_empty());
        store.shutdown().await;
    }

    #[tokio::test]
    async fn test_forget_shared_and_purge_remote() {
        let temp = TempDir::new().unwrap();
        let (mem, cloud) = memory_cloud();
        let mut store = cloud_store(&temp, &cloud).await;

        let playlist = store
            .create_playlist("Rainy Day", "relaxed", None)
            .unwrap();
        let share_id = store.share_playlist(&playlist.id).await.unwrap();
        assert!(store.forget_shared(&share_id).await.unwrap());
        assert!(store.shared_playlist(&share_id).await.is_none());

        assert!(store.purge_remote().await.unwrap());
        assert!(mem
            .keys()
            .iter()
            .all(|k| !k.starts_with("playlists/")));
        store.shutdown().await;
    }

    #[tokio::test]
    async fn test_storage_status() {
        let temp = TempDir::new().unwrap();
        let store = local_store(&temp).await;
        let status = store.storage_status();
        assert!(!status.cloud_connected);
        assert_eq!(status.user_id, store.user_id());
        assert!(store.purge_remote().await.is_err());
        store.shutdown().await;
    }

    #[tokio::test]
    async fn test_track_update_and_delete() {
        let temp = TempDir::new().unwrap();
        let mut store = local_store(&temp).await;

        let playlist = store
            .create_playlist("Rainy Day", "relaxed", None)
            .unwrap();
        let track = Track::new("Song A", Some("X".to_string()), TrackSource::Local, "");
        let track_id = track.id.clone();
        store.add_track(&playlist.id, track);

        store.update_track(
            &playlist.id,
            &track_id,
            TrackUpdate {
                duration: Some(241),
                source: Some(TrackSource::External),
                uri: Some("https://example.com/a.mp3".to_string()),
                ..Default::default()
            },
        );
        let stored = &store.state().playlists[0].tracks[0];
        assert_eq!(stored.duration, Some(241));
        assert_eq!(stored.source, TrackSource::External);

        store.delete_track(&playlist.id, &track_id);
        assert!(store.state().playlists[0].tracks.is_empty());
        store.shutdown().await;
    }

    #[tokio::test]
    async fn test_delete_playlist_clears_current() {
        let temp = TempDir::new().unwrap();
        let mut store = local_store(&temp).await;

        let playlist = store
            .create_playlist("Rainy Day", "relaxed", None)
            .unwrap();
        store.set_current_playlist(Some(playlist.clone()));
        assert!(store.state().current_playlist.is_some());

        store.delete_playlist(&playlist.id);
        assert!(store.state().playlists.is_empty());
        assert!(store.state().current_playlist.is_none());
        store.shutdown().await;
    }
}
