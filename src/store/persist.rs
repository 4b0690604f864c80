use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::model::Playlist;
use crate::storage::{CloudStorage, LocalStore, FAVORITES_KEY, PLAYLISTS_KEY};

/// Versioned copy of the persistable state. The watch channel keeps
/// only the newest snapshot, so the worker always sees the latest
/// state even when dispatches outpace the network.
#[derive(Debug, Clone, Default)]
pub struct PersistSnapshot {
    /// Version of the last dispatch that touched playlists.
    pub playlists_version: u64,
    /// Version of the last dispatch that touched favorites.
    pub favorites_version: u64,
    pub playlists: Vec<Playlist>,
    pub favorites: Vec<String>,
}

/// Fire-and-forget persistence, decoupled from state transitions.
/// Writes whose version is at or below the last applied version for a
/// collection are dropped, so a slow write can never clobber a newer
/// one within the session.
pub struct PersistWorker {
    cloud: Option<Arc<CloudStorage>>,
    local: LocalStore,
    user_id: String,
    playlists_persisted: u64,
    favorites_persisted: u64,
}

impl PersistWorker {
    pub fn new(cloud: Option<Arc<CloudStorage>>, local: LocalStore, user_id: String) -> Self {
        PersistWorker {
            cloud,
            local,
            user_id,
            playlists_persisted: 0,
            favorites_persisted: 0,
        }
    }

    pub fn spawn(mut self, mut rx: watch::Receiver<PersistSnapshot>) -> JoinHandle<()> {
        tokio::spawn(async move {
            loop {
                let closed = rx.changed().await.is_err();
                let snapshot = rx.borrow_and_update().clone();
                self.persist(&snapshot).await;
                if closed {
                    // Sender dropped; final snapshot is flushed above.
                    break;
                }
            }
        })
    }

    async fn persist(&mut self, snapshot: &PersistSnapshot) {
        if snapshot.playlists_version > self.playlists_persisted {
            // Never persist an empty playlist list; an in-flight load
            // must not wipe out a previously stored collection.
            if !snapshot.playlists.is_empty() {
                self.persist_playlists(snapshot).await;
            }
            self.playlists_persisted = snapshot.playlists_version;
        }
        if snapshot.favorites_version > self.favorites_persisted {
            self.persist_favorites(snapshot).await;
            self.favorites_persisted = snapshot.favorites_version;
        }
    }

    async fn persist_playlists(&self, snapshot: &PersistSnapshot) {
        if let Some(cloud) = &self.cloud {
            match cloud.store_playlists(&self.user_id, &snapshot.playlists).await {
                Ok(_) => {
                    debug!(
                        version = snapshot.playlists_version,
                        "persisted playlists to cloud"
                    );
                    return;
                }
                Err(err) => {
                    warn!(%err, "cloud playlist write failed, falling back to local")
                }
            }
        }
        self.local.save(PLAYLISTS_KEY, &snapshot.playlists);
    }

    async fn persist_favorites(&self, snapshot: &PersistSnapshot) {
        if let Some(cloud) = &self.cloud {
            match cloud.store_favorites(&self.user_id, &snapshot.favorites).await {
                Ok(_) => {
                    debug!(
                        version = snapshot.favorites_version,
                        "persisted favorites to cloud"
                    );
                    return;
                }
                Err(err) => {
                    warn!(%err, "cloud favorites write failed, falling back to local")
                }
            }
        }
        self.local.save(FAVORITES_KEY, &snapshot.favorites);
    }
}
