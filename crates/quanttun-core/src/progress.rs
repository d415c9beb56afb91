//! Activity completion and route progress.

use chrono::Utc;
use thiserror::Error;

use quanttun_store::models::StudyRoute;
use quanttun_store::queries::{routes, sessions, users};
use quanttun_store::storage::Storage;

use crate::scoring;

/// Result of a completion attempt.
#[derive(Debug)]
pub enum CompletionOutcome {
    /// The activity was marked completed and points were awarded.
    Completed { points: u32, route: StudyRoute },
    /// The activity was already completed; nothing changed.
    AlreadyCompleted,
}

/// Errors from the completion flow.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("route {0:?} not found")]
    RouteNotFound(String),

    #[error("activity {activity_id} not found in route {route_id:?}")]
    ActivityNotFound { route_id: String, activity_id: u32 },

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

/// Mark an activity completed, persist the route collection, and award
/// points to the stored user.
///
/// Completing an already-completed activity is a no-op: no counter change,
/// no points, no write. The completed counter therefore never exceeds the
/// activity count.
pub fn complete_activity(
    storage: &dyn Storage,
    route_id: &str,
    activity_id: u32,
) -> Result<CompletionOutcome, CompletionError> {
    let mut all_routes = routes::list_routes(storage)?;

    let route = all_routes
        .iter_mut()
        .find(|r| r.id == route_id)
        .ok_or_else(|| CompletionError::RouteNotFound(route_id.to_owned()))?;

    let activity = route
        .study_plan
        .activities
        .iter_mut()
        .find(|a| a.id == activity_id)
        .ok_or_else(|| CompletionError::ActivityNotFound {
            route_id: route_id.to_owned(),
            activity_id,
        })?;

    if activity.completed {
        return Ok(CompletionOutcome::AlreadyCompleted);
    }

    activity.completed = true;
    let difficulty = activity.difficulty;
    route.completed_activities += 1;
    let updated = route.clone();

    routes::save_routes(storage, &all_routes)?;

    // A recorded session only counts toward the bonus when it belongs to
    // this exact activity; consuming it keeps it from counting twice.
    let elapsed = match sessions::get_session(storage)? {
        Some(session) if session.route_id == route_id && session.activity_id == activity_id => {
            sessions::clear_session(storage)?;
            Some(Utc::now() - session.started_at)
        }
        _ => None,
    };

    let points = scoring::award(difficulty, elapsed);
    users::add_points(storage, points)?;

    tracing::info!(route_id, activity_id, points, "activity completed");

    Ok(CompletionOutcome::Completed {
        points,
        route: updated,
    })
}

/// Completion percentage for display, rounded to the nearest integer.
pub fn progress_percent(route: &StudyRoute) -> u32 {
    if route.activities == 0 {
        return 0;
    }
    (route.completed_activities * 100 + route.activities / 2) / route.activities
}

#[cfg(test)]
mod tests {
    use super::*;

    use quanttun_store::models::{StudyPlan, StudyRoute};

    fn route(total: u32, completed: u32) -> StudyRoute {
        StudyRoute {
            id: "1".to_string(),
            title: String::new(),
            subject: String::new(),
            daily_time: String::new(),
            dedication: String::new(),
            activities: total,
            completed_activities: completed,
            created_at: Utc::now(),
            study_plan: StudyPlan {
                title: String::new(),
                description: String::new(),
                activities: vec![],
            },
        }
    }

    #[test]
    fn percent_rounds_to_nearest() {
        assert_eq!(progress_percent(&route(3, 1)), 33);
        assert_eq!(progress_percent(&route(3, 2)), 67);
        assert_eq!(progress_percent(&route(8, 8)), 100);
    }

    #[test]
    fn percent_of_empty_route_is_zero() {
        assert_eq!(progress_percent(&route(0, 0)), 0);
    }
}
