use chrono::Utc;
use rand::{distributions::Alphanumeric, Rng};

const SHARE_ID_LEN: usize = 8;

fn base36(mut value: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(DIGITS[(value % 36) as usize] as char);
        value /= 36;
    }
    digits.iter().rev().collect()
}

fn random_suffix(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(|b| (b as char).to_ascii_lowercase())
        .collect()
}

/// Collision-resistant opaque id: millisecond timestamp in base36
/// plus a random suffix.
pub fn generate_id() -> String {
    format!(
        "{}{}",
        base36(Utc::now().timestamp_millis() as u64),
        random_suffix(10)
    )
}

/// Short opaque identifier for shared playlist snapshots.
pub fn generate_share_id() -> String {
    random_suffix(SHARE_ID_LEN)
}

/// Stable pseudo-identity standing in for real authentication.
pub fn generate_user_id() -> String {
    format!("user_{}", generate_id())
}

/// Favorite identity is derived from name + artist, not the track id.
/// Two tracks with the same name and artist collapse to one entry.
pub fn favorite_key(name: &str, artist: Option<&str>) -> String {
    format!("{}{}", name, artist.unwrap_or(""))
}
