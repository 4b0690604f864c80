use std::path::Path;

use anyhow::{bail, Result};

use crate::model::{favorite_key, Track, TrackSource};
use crate::store::{PlaylistStore, TrackUpdate};

#[allow(clippy::too_many_arguments)]
pub async fn add(
    playlist_id: &str,
    name: &str,
    artist: Option<String>,
    album: Option<String>,
    duration: Option<u64>,
    source: TrackSource,
    uri: &str,
    dir: &Path,
) -> Result<()> {
    let mut store = PlaylistStore::open(dir).await;
    let found = store.state().playlists.iter().any(|p| p.id == playlist_id);

    let mut track_id = None;
    if found {
        let mut track = Track::new(name, artist, source, uri);
        track.album = album;
        track.duration = duration;
        track_id = Some(track.id.clone());
        store.add_track(playlist_id, track);
    }
    store.shutdown().await;

    if !found {
        bail!("Playlist {} not found", playlist_id);
    }
    println!("Added '{}' to playlist {}", name, playlist_id);
    if let Some(id) = track_id {
        println!("Track ID: {}", id);
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub async fn update(
    playlist_id: &str,
    track_id: &str,
    name: Option<String>,
    artist: Option<String>,
    album: Option<String>,
    duration: Option<u64>,
    source: Option<TrackSource>,
    uri: Option<String>,
    dir: &Path,
) -> Result<()> {
    let mut store = PlaylistStore::open(dir).await;
    let found = store
        .state()
        .playlists
        .iter()
        .any(|p| p.id == playlist_id && p.tracks.iter().any(|t| t.id == track_id));
    if found {
        store.update_track(
            playlist_id,
            track_id,
            TrackUpdate {
                name,
                artist,
                album,
                duration,
                source,
                uri,
                ..Default::default()
            },
        );
    }
    store.shutdown().await;

    if !found {
        bail!("Track {} not found in playlist {}", track_id, playlist_id);
    }
    println!("Updated track {}", track_id);
    Ok(())
}

pub async fn remove(playlist_id: &str, track_id: &str, dir: &Path) -> Result<()> {
    let mut store = PlaylistStore::open(dir).await;
    let found = store
        .state()
        .playlists
        .iter()
        .any(|p| p.id == playlist_id && p.tracks.iter().any(|t| t.id == track_id));
    if found {
        store.delete_track(playlist_id, track_id);
    }
    store.shutdown().await;

    if !found {
        bail!("Track {} not found in playlist {}", track_id, playlist_id);
    }
    println!("Removed track {}", track_id);
    Ok(())
}

pub async fn favorite(name: &str, artist: Option<&str>, dir: &Path) -> Result<()> {
    let key = favorite_key(name, artist);

    let mut store = PlaylistStore::open(dir).await;
    store.toggle_favorite(&key);
    let now_favorite = store.is_favorite(&key);
    store.shutdown().await;

    if now_favorite {
        println!("Added '{}' to favorites", name);
    } else {
        println!("Removed '{}' from favorites", name);
    }
    Ok(())
}

pub async fn favorites(dir: &Path) -> Result<()> {
    let store = PlaylistStore::open(dir).await;
    let favorites = store.state().favorites.clone();
    store.shutdown().await;

    if favorites.is_empty() {
        println!("No favorite tracks yet");
        return Ok(());
    }
    println!("\n{} favorite(s):\n", favorites.len());
    for key in &favorites {
        println!("  * {}", key);
    }
    Ok(())
}
