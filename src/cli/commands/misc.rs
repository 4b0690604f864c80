use std::path::Path;

use anyhow::Result;

use crate::store::PlaylistStore;

pub async fn refresh(dir: &Path) -> Result<()> {
    let mut store = PlaylistStore::open(dir).await;
    if !store.storage_status().cloud_connected {
        store.shutdown().await;
        println!("Cloud storage is not configured, nothing to refresh");
        return Ok(());
    }

    store.refresh_from_cloud().await;
    let count = store.state().playlists.len();
    store.shutdown().await;

    println!("Refreshed {} playlist(s) from cloud storage", count);
    Ok(())
}

pub async fn status(dir: &Path) -> Result<()> {
    let store = PlaylistStore::open(dir).await;
    let status = store.storage_status();
    let playlists = store.state().playlists.len();
    let favorites = store.state().favorites.len();
    let error = store.state().error.clone();
    store.shutdown().await;

    println!("User ID: {}", status.user_id);
    println!(
        "Storage: {}",
        if status.cloud_connected {
            "cloud (R2) with local fallback"
        } else {
            "local only"
        }
    );
    println!("Playlists: {}", playlists);
    println!("Favorites: {}", favorites);
    if let Some(error) = error {
        println!("Last load error: {}", error);
    }
    Ok(())
}

pub async fn purge_remote(dir: &Path) -> Result<()> {
    let store = PlaylistStore::open(dir).await;
    let purged = store.purge_remote().await;
    store.shutdown().await;

    purged?;
    println!("Deleted remote playlists. Local copies are untouched.");
    Ok(())
}
