use crate::model::{Playlist, Track, TrackSource};

/// Authoritative in-memory state for one session. Persisted copies are
/// replicas, never the source of truth while the session is live.
#[derive(Debug, Clone, Default)]
pub struct PlaylistState {
    pub playlists: Vec<Playlist>,
    /// Favorite keys (name + artist), order-preserving with set semantics.
    pub favorites: Vec<String>,
    pub current_playlist: Option<Playlist>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Partial update for a playlist. Absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct PlaylistUpdate {
    pub name: Option<String>,
    pub mood: Option<String>,
    pub description: Option<String>,
    pub is_shared: Option<bool>,
    pub share_id: Option<String>,
}

impl PlaylistUpdate {
    fn apply(&self, playlist: &mut Playlist) {
        if let Some(name) = &self.name {
            playlist.name = name.trim().to_string();
        }
        if let Some(mood) = &self.mood {
            playlist.mood = mood.clone();
        }
        if let Some(description) = &self.description {
            playlist.description = Some(description.clone());
        }
        if let Some(is_shared) = self.is_shared {
            playlist.is_shared = is_shared;
        }
        if let Some(share_id) = &self.share_id {
            playlist.share_id = Some(share_id.clone());
        }
    }
}

/// Partial update for a track inside a playlist.
#[derive(Debug, Clone, Default)]
pub struct TrackUpdate {
    pub name: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub duration: Option<u64>,
    pub source: Option<TrackSource>,
    pub uri: Option<String>,
    pub thumbnail: Option<String>,
}

impl TrackUpdate {
    fn apply(&self, track: &mut Track) {
        if let Some(name) = &self.name {
            track.name = name.trim().to_string();
        }
        if let Some(artist) = &self.artist {
            track.artist = Some(artist.clone());
        }
        if let Some(album) = &self.album {
            track.album = Some(album.clone());
        }
        if let Some(duration) = self.duration {
            track.duration = Some(duration);
        }
        if let Some(source) = self.source {
            track.source = source;
        }
        if let Some(uri) = &self.uri {
            track.uri = uri.clone();
        }
        if let Some(thumbnail) = &self.thumbnail {
            track.thumbnail = Some(thumbnail.clone());
        }
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    /// Full replace, used after initial load or a cloud refresh.
    SetPlaylists(Vec<Playlist>),
    AddPlaylist(Playlist),
    UpdatePlaylist {
        id: String,
        updates: PlaylistUpdate,
    },
    DeletePlaylist(String),
    AddTrack {
        playlist_id: String,
        track: Track,
    },
    UpdateTrack {
        playlist_id: String,
        track_id: String,
        updates: TrackUpdate,
    },
    DeleteTrack {
        playlist_id: String,
        track_id: String,
    },
    SetFavorites(Vec<String>),
    ToggleFavorite(String),
    SetCurrentPlaylist(Option<Playlist>),
    SetLoading(bool),
    SetError(Option<String>),
}

impl Action {
    pub fn touches_playlists(&self) -> bool {
        matches!(
            self,
            Action::SetPlaylists(_)
                | Action::AddPlaylist(_)
                | Action::UpdatePlaylist { .. }
                | Action::DeletePlaylist(_)
                | Action::AddTrack { .. }
                | Action::UpdateTrack { .. }
                | Action::DeleteTrack { .. }
        )
    }

    pub fn touches_favorites(&self) -> bool {
        matches!(self, Action::SetFavorites(_) | Action::ToggleFavorite(_))
    }
}

/// Pure state transition. Actions targeting an absent playlist or track
/// id are no-ops; nothing here performs IO or fails.
pub fn reduce(state: &PlaylistState, action: &Action) -> PlaylistState {
    let mut next = state.clone();
    match action {
        Action::SetPlaylists(playlists) => next.playlists = playlists.clone(),

        Action::AddPlaylist(playlist) => next.playlists.push(playlist.clone()),

        Action::UpdatePlaylist { id, updates } => {
            if let Some(playlist) = next.playlists.iter_mut().find(|p| p.id == *id) {
                updates.apply(playlist);
                playlist.touch();
            }
        }

        Action::DeletePlaylist(id) => {
            next.playlists.retain(|p| p.id != *id);
            if next.current_playlist.as_ref().is_some_and(|p| p.id == *id) {
                next.current_playlist = None;
            }
        }

        Action::AddTrack { playlist_id, track } => {
            if let Some(playlist) = next.playlists.iter_mut().find(|p| p.id == *playlist_id) {
                playlist.tracks.push(track.clone());
                playlist.touch();
            }
        }

        Action::UpdateTrack {
            playlist_id,
            track_id,
            updates,
        } => {
            if let Some(playlist) = next.playlists.iter_mut().find(|p| p.id == *playlist_id) {
                if let Some(track) = playlist.tracks.iter_mut().find(|t| t.id == *track_id) {
                    updates.apply(track);
                    playlist.touch();
                }
            }
        }

        Action::DeleteTrack {
            playlist_id,
            track_id,
        } => {
            if let Some(playlist) = next.playlists.iter_mut().find(|p| p.id == *playlist_id) {
                let before = playlist.tracks.len();
                playlist.tracks.retain(|t| t.id != *track_id);
                if playlist.tracks.len() != before {
                    playlist.touch();
                }
            }
        }

        Action::SetFavorites(favorites) => next.favorites = favorites.clone(),

        Action::ToggleFavorite(key) => {
            if let Some(pos) = next.favorites.iter().position(|f| f == key) {
                next.favorites.remove(pos);
            } else {
                next.favorites.push(key.clone());
            }
        }

        Action::SetCurrentPlaylist(playlist) => next.current_playlist = playlist.clone(),

        Action::SetLoading(loading) => next.is_loading = *loading,

        Action::SetError(error) => next.error = error.clone(),
    }
    next
}
