//! Configuration management
//!
//! Settings live in `settings.json` inside the medtrack directory:
//! ```json
//! {
//!   "app": { "sessionPolicy": "presence", "storeFile": "local_storage.json" }
//! }
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::result::Error;

/// Default file name of the local key-value store
pub const DEFAULT_STORE_FILE: &str = "local_storage.json";

/// Raw settings.json structure
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default)]
    session_policy: SessionPolicy,
    #[serde(default)]
    store_file: Option<String>,
}

/// How strictly the session guard inspects the stored session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionPolicy {
    /// Any non-empty stored value counts as logged in
    #[default]
    Presence,
    /// The stored value must parse as a session with a non-empty email
    Strict,
}

impl FromStr for SessionPolicy {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "presence" => Ok(SessionPolicy::Presence),
            "strict" => Ok(SessionPolicy::Strict),
            other => Err(Error::Config(format!(
                "Unknown session policy '{}' (expected 'presence' or 'strict')",
                other
            ))),
        }
    }
}

/// Medtrack configuration (simplified view of settings)
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub session_policy: SessionPolicy,
    pub store_file: Option<String>,
}

impl Config {
    /// Load config from the medtrack directory
    ///
    /// The session policy can be overridden with MEDTRACK_SESSION_POLICY.
    /// An unreadable settings file falls back to defaults.
    pub fn load(medtrack_dir: &Path) -> Result<Self> {
        let settings_path = medtrack_dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring unreadable {:?}: {}", settings_path, e);
                SettingsFile::default()
            })
        } else {
            SettingsFile::default()
        };

        let session_policy = policy_override(std::env::var("MEDTRACK_SESSION_POLICY").ok())?
            .unwrap_or(raw.app.session_policy);

        Ok(Self {
            session_policy,
            store_file: raw.app.store_file,
        })
    }

    /// Path of the local key-value store file
    pub fn store_path(&self, medtrack_dir: &Path) -> PathBuf {
        medtrack_dir.join(self.store_file.as_deref().unwrap_or(DEFAULT_STORE_FILE))
    }
}

/// Parse an environment override. Unset, empty and blank values mean "no override".
fn policy_override(value: Option<String>) -> std::result::Result<Option<SessionPolicy>, Error> {
    match value {
        Some(value) if !value.trim().is_empty() => value.parse().map(Some),
        _ => Ok(None),
    }
}
