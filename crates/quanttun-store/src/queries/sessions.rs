//! Query functions for the active study session.
//!
//! At most one session exists at a time; starting a new one replaces it.

use anyhow::{Context, Result};

use crate::models::StudySession;
use crate::storage::Storage;

/// Key holding the active session, if any.
pub const SESSION_KEY: &str = "active_session";

/// Fetch the active session.
pub fn get_session(storage: &dyn Storage) -> Result<Option<StudySession>> {
    match storage
        .get(SESSION_KEY)
        .context("failed to read active session")?
    {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .context("active session is not valid JSON"),
        None => Ok(None),
    }
}

/// Record a session as active, replacing any previous one.
pub fn start_session(storage: &dyn Storage, session: &StudySession) -> Result<()> {
    let raw = serde_json::to_string(session).context("failed to serialize session")?;
    storage
        .set(SESSION_KEY, &raw)
        .context("failed to write active session")
}

/// Remove the active session.
pub fn clear_session(storage: &dyn Storage) -> Result<()> {
    storage
        .remove(SESSION_KEY)
        .context("failed to remove active session")
}
