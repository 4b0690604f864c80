use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::model::TrackSource;

/// skylist - mood-tagged playlists with cloud sync and sharing
///
/// Playlists live in a local data directory and, when R2 credentials
/// are configured, sync to object storage so they follow you across
/// machines. Share ids hand a playlist to anyone who has them.
#[derive(Parser, Debug)]
#[command(name = "skylist")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Data directory for local state
    #[arg(long, global = true, default_value = ".skylist")]
    pub dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new playlist
    Create {
        /// Playlist name
        name: String,
        /// Mood tag (e.g. relaxed, energetic, melancholy);
        /// falls back to the configured default
        #[arg(short, long)]
        mood: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// List playlists, optionally filtered by mood
    List {
        #[arg(short, long)]
        mood: Option<String>,
    },
    /// Show a playlist with its tracks
    Show {
        /// Playlist ID
        playlist_id: String,
    },
    /// Edit playlist metadata
    Edit {
        /// Playlist ID
        playlist_id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        mood: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a playlist
    Delete {
        /// Playlist ID
        playlist_id: String,
    },
    /// Add a track to a playlist
    AddTrack {
        /// Playlist ID
        playlist_id: String,
        /// Track name
        name: String,
        #[arg(short, long)]
        artist: Option<String>,
        #[arg(long)]
        album: Option<String>,
        /// Duration in seconds
        #[arg(long)]
        duration: Option<u64>,
        /// Where the track comes from: local, r2, spotify, youtube or external
        #[arg(short, long, default_value = "local")]
        source: TrackSource,
        /// File path or stream URL
        #[arg(short, long, default_value = "")]
        uri: String,
    },
    /// Update a track's metadata
    UpdateTrack {
        /// Playlist ID
        playlist_id: String,
        /// Track ID
        track_id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        artist: Option<String>,
        #[arg(long)]
        album: Option<String>,
        /// Duration in seconds
        #[arg(long)]
        duration: Option<u64>,
        #[arg(long)]
        source: Option<TrackSource>,
        #[arg(long)]
        uri: Option<String>,
    },
    /// Remove a track from a playlist
    RemoveTrack {
        /// Playlist ID
        playlist_id: String,
        /// Track ID
        track_id: String,
    },
    /// Toggle a track as favorite
    Favorite {
        /// Track name
        name: String,
        #[arg(short, long)]
        artist: Option<String>,
    },
    /// List favorite tracks
    Favorites,
    /// Publish a playlist and print its share id
    Share {
        /// Playlist ID
        playlist_id: String,
    },
    /// Import a shared playlist as your own copy
    Import {
        /// Share ID from a share link
        share_id: String,
    },
    /// Show a shared playlist without importing it
    Shared {
        /// Share ID from a share link
        share_id: String,
    },
    /// Remove a previously published share
    ForgetShared {
        /// Share ID
        share_id: String,
    },
    /// Re-fetch playlists from cloud storage
    Refresh,
    /// Show storage backend and user id
    Status,
    /// Delete this user's playlists from cloud storage
    PurgeRemote,
}
