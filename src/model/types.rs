use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::ids::generate_id;

/// Determines how a track's `uri` must be dereferenced: a local file
/// path, an object-store CDN URL, a provider id, or an external URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackSource {
    Local,
    R2,
    Spotify,
    Youtube,
    External,
}

impl fmt::Display for TrackSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TrackSource::Local => "local",
            TrackSource::R2 => "r2",
            TrackSource::Spotify => "spotify",
            TrackSource::Youtube => "youtube",
            TrackSource::External => "external",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for TrackSource {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(TrackSource::Local),
            "r2" => Ok(TrackSource::R2),
            "spotify" => Ok(TrackSource::Spotify),
            "youtube" => Ok(TrackSource::Youtube),
            "external" => Ok(TrackSource::External),
            other => anyhow::bail!(
                "Unknown track source '{}' (expected local, r2, spotify, youtube or external)",
                other
            ),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    /// Duration in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
    pub source: TrackSource,
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<TrackMetadata>,
}

impl Track {
    pub fn new(name: &str, artist: Option<String>, source: TrackSource, uri: &str) -> Self {
        Track {
            id: generate_id(),
            name: name.trim().to_string(),
            artist: artist.map(|a| a.trim().to_string()),
            album: None,
            duration: None,
            source,
            uri: uri.to_string(),
            thumbnail: None,
            metadata: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub mood: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Order is play order.
    pub tracks: Vec<Track>,
    /// Unix milliseconds.
    pub created_at: i64,
    pub updated_at: i64,
    #[serde(default)]
    pub is_shared: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_id: Option<String>,
}

impl Playlist {
    pub fn new(name: &str, mood: &str, description: Option<String>) -> Self {
        let now = Utc::now().timestamp_millis();
        Playlist {
            id: generate_id(),
            name: name.trim().to_string(),
            mood: mood.to_string(),
            description,
            tracks: Vec::new(),
            created_at: now,
            updated_at: now,
            is_shared: false,
            share_id: None,
        }
    }

    /// Bump `updated_at`, strictly increasing even within one millisecond.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now().timestamp_millis().max(self.updated_at + 1);
    }
}

/// Denormalized copy of a playlist stored under the shared-id namespace.
/// Immutable after creation; re-sharing produces a new snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedPlaylistSnapshot {
    #[serde(flatten)]
    pub playlist: Playlist,
    /// Unix seconds. Checked at read time; the `expires=` parameter on
    /// share URLs is advisory only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
}

impl SharedPlaylistSnapshot {
    pub fn new(playlist: &Playlist, share_id: &str, ttl_secs: u64) -> Self {
        let mut copy = playlist.clone();
        copy.share_id = Some(share_id.to_string());
        copy.is_shared = true;
        SharedPlaylistSnapshot {
            playlist: copy,
            expires_at: Some(Utc::now().timestamp() + ttl_secs as i64),
        }
    }

    pub fn share_id(&self) -> &str {
        self.playlist.share_id.as_deref().unwrap_or_default()
    }

    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at < now)
    }

    /// Build a new owned playlist from this snapshot: fresh id and
    /// timestamps, provenance suffix on the name, share state cleared.
    pub fn into_imported(self) -> Playlist {
        let now = Utc::now().timestamp_millis();
        Playlist {
            id: generate_id(),
            name: format!("{} (Imported)", self.playlist.name),
            created_at: now,
            updated_at: now,
            is_shared: false,
            share_id: None,
            ..self.playlist
        }
    }
}
