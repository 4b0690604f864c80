mod persist;
mod state;
#[allow(clippy::module_inception)]
mod store;

pub use state::{Action, PlaylistState, PlaylistUpdate, TrackUpdate};
pub use store::{PlaylistStore, StorageStatus};
