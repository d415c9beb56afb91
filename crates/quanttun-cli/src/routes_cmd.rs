//! `quanttun routes` and `quanttun show` commands.

use anyhow::{Context, Result};

use quanttun_core::progress::progress_percent;
use quanttun_store::models::StudyRoute;
use quanttun_store::queries::routes;
use quanttun_store::storage::Storage;

/// List all routes with a progress summary.
pub fn run_routes(storage: &dyn Storage) -> Result<()> {
    let all_routes = routes::list_routes(storage)?;

    if all_routes.is_empty() {
        println!("No routes found. Run `quanttun create` to generate one.");
        return Ok(());
    }

    println!(
        "{:<15} {:<34} {:<17} {:>9}",
        "ID", "TITLE", "CREATED", "PROGRESS"
    );
    println!("{}", "-".repeat(78));

    let mut percent_sum = 0;
    for route in &all_routes {
        // Char-based truncation; titles are Portuguese and often multibyte.
        let title_display = if route.title.chars().count() > 32 {
            let head: String = route.title.chars().take(29).collect();
            format!("{head}...")
        } else {
            route.title.clone()
        };
        let percent = progress_percent(route);
        percent_sum += percent;
        println!(
            "{:<15} {:<34} {:<17} {:>8}%",
            route.id,
            title_display,
            route.created_at.format("%Y-%m-%d %H:%M"),
            percent,
        );
    }

    println!();
    println!(
        "{} route(s), average progress {}%",
        all_routes.len(),
        percent_sum / all_routes.len() as u32
    );

    Ok(())
}

/// Show route details, or a single activity when `activity_id` is given.
pub fn run_show(storage: &dyn Storage, route_id: &str, activity_id: Option<u32>) -> Result<()> {
    let route = routes::get_route(storage, route_id)?
        .with_context(|| format!("route {route_id} not found"))?;

    match activity_id {
        Some(id) => show_activity(&route, id),
        None => {
            show_route(&route);
            Ok(())
        }
    }
}

fn show_route(route: &StudyRoute) {
    println!("Route: {} ({})", route.title, route.id);
    if !route.study_plan.description.is_empty() {
        println!("{}", route.study_plan.description);
    }
    println!("Subject: {}", route.subject);
    println!("Created: {}", route.created_at.format("%Y-%m-%d %H:%M:%S UTC"));
    println!(
        "Progress: {}/{} completed ({}%)",
        route.completed_activities,
        route.activities,
        progress_percent(route)
    );
    println!();

    println!("Activities:");
    for activity in &route.study_plan.activities {
        let status_icon = if activity.completed { "+" } else { "." };
        println!(
            "  [{}] {}. {} ({}, {}, {})",
            status_icon,
            activity.id,
            activity.title,
            activity.difficulty,
            activity.duration,
            activity.technique,
        );
    }
}

fn show_activity(route: &StudyRoute, activity_id: u32) -> Result<()> {
    let activity = route
        .study_plan
        .activities
        .iter()
        .find(|a| a.id == activity_id)
        .with_context(|| format!("activity {activity_id} not found in route {}", route.id))?;

    println!("{}. {}", activity.id, activity.title);
    if !activity.description.is_empty() {
        println!("{}", activity.description);
    }
    println!();
    println!("Technique:  {}", activity.technique);
    println!("Duration:   {}", activity.duration);
    println!("Difficulty: {}", activity.difficulty);
    println!(
        "Status:     {}",
        if activity.completed {
            "completed"
        } else {
            "pending"
        }
    );
    println!();
    println!("Content:");
    println!("{}", activity.content);
    println!();
    println!("Exercises:");
    println!("{}", activity.exercises);

    Ok(())
}
