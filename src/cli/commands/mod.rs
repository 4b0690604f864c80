pub mod misc;
pub mod playlist;
pub mod share;
pub mod track;

use crate::model::Track;

/// Shared track line used by `show`, `shared` and `favorites` output.
pub(crate) fn format_track(index: usize, track: &Track) -> String {
    let time = match track.duration {
        Some(seconds) => format!("{:02}:{:02}", seconds / 60, seconds % 60),
        None => "--:--".to_string(),
    };
    let artist = track.artist.as_deref().unwrap_or("Unknown Artist");
    format!("{}. [{}] {} - {}", index + 1, time, track.name, artist)
}
