//! `quanttun study` and `quanttun complete` commands.

use anyhow::Result;

use quanttun_core::progress::{CompletionOutcome, complete_activity, progress_percent};
use quanttun_core::scoring::SESSION_BONUS_MINUTES;
use quanttun_core::session::start_study;
use quanttun_store::storage::Storage;

/// Start a study session for an activity.
pub fn run_study(storage: &dyn Storage, route_id: &str, activity_id: u32) -> Result<()> {
    let session = start_study(storage, route_id, activity_id)?;

    println!(
        "Study session started for activity {} at {}.",
        session.activity_id,
        session.started_at.format("%H:%M:%S UTC")
    );
    println!(
        "Study for at least {SESSION_BONUS_MINUTES} minutes to earn bonus points, then run \
         `quanttun complete {route_id} {activity_id}`."
    );

    Ok(())
}

/// Mark an activity completed and report the awarded points.
pub fn run_complete(storage: &dyn Storage, route_id: &str, activity_id: u32) -> Result<()> {
    match complete_activity(storage, route_id, activity_id)? {
        CompletionOutcome::Completed { points, route } => {
            println!("Activity {activity_id} completed. +{points} points.");
            println!(
                "Route progress: {}/{} ({}%).",
                route.completed_activities,
                route.activities,
                progress_percent(&route)
            );
            if route.completed_activities == route.activities {
                println!("Route finished. Parabéns!");
            }
        }
        CompletionOutcome::AlreadyCompleted => {
            println!("Activity {activity_id} is already completed; nothing to do.");
        }
    }

    Ok(())
}
