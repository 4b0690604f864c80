use std::path::Path;

use anyhow::{bail, Result};
use chrono::{TimeZone, Utc};

use crate::config::Config;
use crate::store::PlaylistStore;

use super::format_track;

pub async fn share(playlist_id: &str, dir: &Path) -> Result<()> {
    let config = Config::load_or_default(dir);

    let mut store = PlaylistStore::open(dir).await;
    let shared = store.share_playlist(playlist_id).await;
    let url = shared
        .as_ref()
        .ok()
        .and_then(|id| store.share_url(id).ok());
    store.shutdown().await;

    let share_id = shared?;
    println!("Shared playlist {}", playlist_id);
    println!("Share ID: {}", share_id);
    if let Some(base) = &config.share_base_url {
        println!("Link: {}/{}", base.trim_end_matches('/'), share_id);
    }
    if let Some(url) = url {
        println!("Direct: {}", url);
    }
    Ok(())
}

pub async fn import(share_id: &str, dir: &Path) -> Result<()> {
    let mut store = PlaylistStore::open(dir).await;
    let imported = store.import_shared_playlist(share_id).await;
    let name = store
        .state()
        .playlists
        .last()
        .map(|p| p.name.clone())
        .filter(|_| imported);
    store.shutdown().await;

    if !imported {
        bail!("Shared playlist {} not found or expired", share_id);
    }
    match name {
        Some(name) => println!("Imported '{}'", name),
        None => println!("Imported shared playlist {}", share_id),
    }
    Ok(())
}

pub async fn show(share_id: &str, dir: &Path) -> Result<()> {
    let store = PlaylistStore::open(dir).await;
    let snapshot = store.shared_playlist(share_id).await;
    store.shutdown().await;

    let Some(snapshot) = snapshot else {
        bail!("Shared playlist {} not found or expired", share_id);
    };

    let playlist = &snapshot.playlist;
    println!("\nShared playlist: {} [{}]", playlist.name, playlist.mood);
    if let Some(desc) = &playlist.description {
        println!("Description: {}", desc);
    }
    if let Some(expires_at) = snapshot.expires_at {
        if let Some(when) = Utc.timestamp_opt(expires_at, 0).single() {
            println!("Expires: {}", when.format("%Y-%m-%d %H:%M UTC"));
        }
    }
    println!("Tracks: {}\n", playlist.tracks.len());
    for (i, track) in playlist.tracks.iter().enumerate() {
        println!("{}", format_track(i, track));
    }
    println!("\nImport it with 'skylist import {}'", share_id);
    Ok(())
}

pub async fn forget(share_id: &str, dir: &Path) -> Result<()> {
    let store = PlaylistStore::open(dir).await;
    let removed = store.forget_shared(share_id).await;
    store.shutdown().await;

    if removed? {
        println!("Removed share {}", share_id);
    } else {
        println!("Share {} was not published from this machine", share_id);
    }
    Ok(())
}
