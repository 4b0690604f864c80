use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Optional per-directory settings, read from `config.toml` in the app
/// directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Mood applied when `create` is called without `--mood`.
    #[serde(default)]
    pub default_mood: Option<String>,
    /// Base used when printing user-facing share links.
    #[serde(default)]
    pub share_base_url: Option<String>,
}

impl Config {
    pub fn config_path(dir: &Path) -> PathBuf {
        dir.join("config.toml")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config TOML from {:?}", path))
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content =
            toml::to_string_pretty(&self).with_context(|| "Failed to serialize config to TOML")?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }

        fs::write(path, content).with_context(|| format!("Failed to write config to {:?}", path))
    }

    /// A missing or unreadable config file is not an error; defaults
    /// apply.
    pub fn load_or_default(dir: &Path) -> Self {
        let path = Self::config_path(dir);
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => config,
            Err(err) => {
                warn!(%err, "ignoring unreadable config");
                Self::default()
            }
        }
    }
}

/// Cloudflare R2 credentials, read from the environment (a `.env` file
/// is picked up at startup).
#[derive(Debug, Clone)]
pub struct R2Config {
    pub account_id: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub bucket: String,
    pub cdn_url: String,
}

impl R2Config {
    pub fn from_env() -> Self {
        let var = |name: &str| env::var(name).unwrap_or_default();
        R2Config {
            account_id: var("SKYLIST_R2_ACCOUNT_ID"),
            access_key_id: var("SKYLIST_R2_ACCESS_KEY_ID"),
            secret_access_key: var("SKYLIST_R2_SECRET_ACCESS_KEY"),
            bucket: env::var("SKYLIST_R2_BUCKET").unwrap_or_else(|_| "skylist-playlists".into()),
            cdn_url: var("SKYLIST_R2_CDN_URL"),
        }
    }

    /// Anything less degrades to local-only persistence.
    pub fn is_configured(&self) -> bool {
        !self.account_id.is_empty() && !self.access_key_id.is_empty() && !self.bucket.is_empty()
    }
}
