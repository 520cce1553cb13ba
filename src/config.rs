//! Data directory resolution and admin credential configuration.
//!
//! The credential pair is configuration, not a security primitive: it
//! gates the dashboard commands against casual use only and is stored in
//! plain text.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment override for the data directory.
pub const DATA_DIR_ENV: &str = "ROLLCALL_DATA_DIR";

const CONFIG_FILE: &str = "config.toml";

const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self {
            username: DEFAULT_ADMIN_USERNAME.to_string(),
            password: DEFAULT_ADMIN_PASSWORD.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    admin: Option<AdminSection>,
}

#[derive(Debug, Deserialize)]
struct AdminSection {
    username: Option<String>,
    password: Option<String>,
}

/// Resolve the data directory: explicit flag, then `ROLLCALL_DATA_DIR`,
/// then the per-user data dir.
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }

    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }

    let base = dirs::data_dir().context("Could not determine a data directory; pass --data-dir")?;
    Ok(base.join("rollcall"))
}

/// Load admin credentials, applying `config.toml` overrides from the data
/// directory when present. A missing file means defaults; an unparsable
/// file is an error (unlike the record store, config is never guessed at).
pub fn load_credentials(data_dir: &Path) -> Result<AdminCredentials> {
    let path = data_dir.join(CONFIG_FILE);
    let mut creds = AdminCredentials::default();

    if !path.exists() {
        return Ok(creds);
    }

    let raw = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let parsed: ConfigFile = toml::from_str(&raw)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    if let Some(admin) = parsed.admin {
        if let Some(username) = admin.username {
            creds.username = username;
        }
        if let Some(password) = admin.password {
            creds.password = password;
        }
    }

    Ok(creds)
}
