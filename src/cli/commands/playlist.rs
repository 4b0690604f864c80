use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::config::Config;
use crate::store::{PlaylistStore, PlaylistUpdate};

use super::format_track;

pub async fn create(
    name: &str,
    mood: Option<String>,
    description: Option<String>,
    dir: &Path,
) -> Result<()> {
    let config = Config::load_or_default(dir);
    let mood = mood
        .or(config.default_mood)
        .unwrap_or_else(|| "neutral".to_string());

    let mut store = PlaylistStore::open(dir).await;
    let created = store.create_playlist(name, &mood, description);
    store.shutdown().await;

    let playlist = created?;
    println!("Created playlist '{}' [{}]", playlist.name, playlist.mood);
    println!("ID: {}", playlist.id);
    Ok(())
}

pub async fn list(mood: Option<&str>, dir: &Path) -> Result<()> {
    let store = PlaylistStore::open(dir).await;

    let playlists: Vec<_> = match mood {
        Some(mood) => store
            .playlists_by_mood(mood)
            .into_iter()
            .cloned()
            .collect(),
        None => store.state().playlists.clone(),
    };
    if let Some(error) = &store.state().error {
        println!("Warning: {}", error);
    }
    store.shutdown().await;

    if playlists.is_empty() {
        match mood {
            Some(mood) => println!("No playlists with mood '{}'", mood),
            None => println!("No playlists yet. Create one with 'skylist create'."),
        }
        return Ok(());
    }

    println!("\n{} playlist(s):\n", playlists.len());
    for playlist in &playlists {
        let shared = if playlist.is_shared { " (shared)" } else { "" };
        println!(
            "{}  {} [{}] - {} track(s){}",
            playlist.id,
            playlist.name,
            playlist.mood,
            playlist.tracks.len(),
            shared
        );
    }
    Ok(())
}

pub async fn show(playlist_id: &str, dir: &Path) -> Result<()> {
    let store = PlaylistStore::open(dir).await;
    let playlist = store
        .state()
        .playlists
        .iter()
        .find(|p| p.id == playlist_id)
        .cloned();
    let favorites = store.state().favorites.clone();
    store.shutdown().await;

    let Some(playlist) = playlist else {
        bail!("Playlist {} not found", playlist_id);
    };

    println!("\nPlaylist: {} [{}]", playlist.name, playlist.mood);
    if let Some(desc) = &playlist.description {
        println!("Description: {}", desc);
    }
    if let Some(share_id) = &playlist.share_id {
        println!("Shared as: {}", share_id);
    }
    println!("Tracks: {}\n", playlist.tracks.len());

    for (i, track) in playlist.tracks.iter().enumerate() {
        let key = crate::model::favorite_key(&track.name, track.artist.as_deref());
        let star = if favorites.contains(&key) { " *" } else { "" };
        println!("{}{}", format_track(i, track), star);
        println!("     id: {}", track.id);
    }
    Ok(())
}

pub async fn edit(
    playlist_id: &str,
    name: Option<String>,
    mood: Option<String>,
    description: Option<String>,
    dir: &Path,
) -> Result<()> {
    if name.is_none() && mood.is_none() && description.is_none() {
        bail!("Nothing to change (use --name, --mood or --description)");
    }

    let mut store = PlaylistStore::open(dir).await;
    let found = store.state().playlists.iter().any(|p| p.id == playlist_id);
    if found {
        store.update_playlist(
            playlist_id,
            PlaylistUpdate {
                name,
                mood,
                description,
                ..Default::default()
            },
        );
    }
    store.shutdown().await;

    if !found {
        bail!("Playlist {} not found", playlist_id);
    }
    println!("Updated playlist {}", playlist_id);
    Ok(())
}

pub async fn delete(playlist_id: &str, dir: &Path) -> Result<()> {
    let mut store = PlaylistStore::open(dir).await;
    let name = store
        .state()
        .playlists
        .iter()
        .find(|p| p.id == playlist_id)
        .map(|p| p.name.clone());
    if name.is_some() {
        store.delete_playlist(playlist_id);
    }
    store.shutdown().await;

    let name = name.with_context(|| format!("Playlist {} not found", playlist_id))?;
    println!("Deleted playlist '{}'", name);
    Ok(())
}
