mod cloud;
mod error;
mod local;
mod r2;
mod traits;

#[cfg(test)]
pub mod memory;

pub use cloud::{CloudStorage, SHARED_TTL_SECS, SHARE_URL_TTL_SECS};
pub use error::{StorageError, StorageResult};
pub use local::{LocalStore, FAVORITES_KEY, PLAYLISTS_KEY, SHARED_KEY, USER_ID_KEY};
pub use r2::R2Client;
pub use traits::{ObjectStore, PutOptions};
