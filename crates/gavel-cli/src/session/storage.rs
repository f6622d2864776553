//! Session storage for persisting login state.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use gavel_core::credentials::Credentials;
use gavel_core::types::{Role, ServerUrl};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// How long a stored session stays valid without a new login.
pub fn session_ttl() -> Duration {
    Duration::hours(12)
}

/// Stored session data.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    server: ServerUrl,
    token: String,
    role: Role,
    expires_at: DateTime<Utc>,
}

/// A session loaded from disk.
///
/// The server URL survives token expiry so that a stale session still
/// knows where to send the login that replaces it; `credentials` is
/// `None` once the stored expiry has passed.
#[derive(Debug)]
pub struct LoadedSession {
    pub server: ServerUrl,
    pub credentials: Option<(Credentials, Duration)>,
}

/// Get the session file path.
fn session_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "gavel").context("Could not determine config directory")?;

    let data_dir = dirs.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data directory")?;

    Ok(data_dir.join("session.json"))
}

/// Save a session to disk.
pub async fn save_session(server: &ServerUrl, credentials: &Credentials) -> Result<()> {
    save_session_to(&session_path()?, server, credentials)
}

fn save_session_to(path: &Path, server: &ServerUrl, credentials: &Credentials) -> Result<()> {
    let stored = StoredSession {
        server: server.clone(),
        token: credentials.token().to_string(),
        role: credentials.role(),
        expires_at: Utc::now() + session_ttl(),
    };

    let json = serde_json::to_string_pretty(&stored)?;
    fs::write(path, &json).context("Failed to write session file")?;

    // Set restrictive permissions (Unix only)
    #[cfg(unix)]
    {
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(path, perms)?;
    }

    Ok(())
}

/// Load a session from disk.
pub async fn load_session() -> Result<Option<LoadedSession>> {
    load_session_from(&session_path()?)
}

fn load_session_from(path: &Path) -> Result<Option<LoadedSession>> {
    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(path).context("Failed to read session file")?;
    let stored: StoredSession = serde_json::from_str(&json).context("Invalid session file")?;

    let remaining = stored.expires_at - Utc::now();
    let credentials = if remaining > Duration::zero() {
        Some((Credentials::new(stored.token, stored.role), remaining))
    } else {
        None
    };

    Ok(Some(LoadedSession {
        server: stored.server,
        credentials,
    }))
}

/// Clear the stored session.
pub async fn clear_session() -> Result<()> {
    let path = session_path()?;

    if path.exists() {
        fs::remove_file(&path).context("Failed to remove session file")?;
    }

    Ok(())
}
