//! Study sessions.
//!
//! Starting a session records the wall-clock start so a later completion can
//! award the long-session bonus. One session is active at a time; starting
//! another replaces it.

use anyhow::{Context, Result, ensure};
use chrono::{DateTime, Utc};

use quanttun_store::models::StudySession;
use quanttun_store::queries::{routes, sessions};
use quanttun_store::storage::Storage;

/// Start a study session for an existing activity.
pub fn start_study(storage: &dyn Storage, route_id: &str, activity_id: u32) -> Result<StudySession> {
    let route = routes::get_route(storage, route_id)?
        .with_context(|| format!("route {route_id:?} not found"))?;
    ensure!(
        route
            .study_plan
            .activities
            .iter()
            .any(|a| a.id == activity_id),
        "activity {activity_id} not found in route {route_id:?}"
    );

    let session = StudySession {
        route_id: route.id,
        activity_id,
        started_at: Utc::now(),
    };
    sessions::start_session(storage, &session)?;

    tracing::info!(route_id, activity_id, "study session started");
    Ok(session)
}

/// Whole minutes elapsed since a session started.
pub fn elapsed_minutes(session: &StudySession, now: DateTime<Utc>) -> i64 {
    (now - session.started_at).num_minutes()
}
