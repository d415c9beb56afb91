//! `quanttun create` command: generate a study route.

use anyhow::Result;

use quanttun_core::generator::{
    FallbackReason, GeneratorClient, GeneratorConfig, PlanRequest, PlanSource, generate_route,
};
use quanttun_store::storage::Storage;

/// Run the generation flow and print the new route.
pub async fn run_create(
    storage: &dyn Storage,
    generator: GeneratorConfig,
    subject: &str,
    daily_time: &str,
    dedication: &str,
) -> Result<()> {
    let client = GeneratorClient::new(generator)?;
    let request = PlanRequest::new(subject, daily_time, dedication);

    let generated = generate_route(storage, &client, &request).await?;

    match generated.source {
        PlanSource::Generated => {
            println!("Study route generated.");
        }
        PlanSource::Fallback(FallbackReason::Service(err)) => {
            println!("Warning: generation service unavailable ({err}).");
            println!("A standard study plan was created instead; try again later for a personalized one.");
        }
        PlanSource::Fallback(FallbackReason::Extraction(_)) => {
            println!("Warning: the service response could not be used.");
            println!("A standard study plan was created instead; try again later for a personalized one.");
        }
    }

    let route = &generated.route;
    tracing::info!(
        route_id = %route.id,
        subject = %route.subject,
        activities = route.activities,
        "study route created"
    );

    println!();
    println!("Route: {} ({})", route.title, route.id);
    println!("Subject: {}", route.subject);
    println!("Daily time: {}  Dedication: {}", route.daily_time, route.dedication);
    println!("Activities:");
    for activity in &route.study_plan.activities {
        println!(
            "  {}. {} ({}, {})",
            activity.id, activity.title, activity.difficulty, activity.duration
        );
    }
    println!();
    println!("Next: `quanttun show {}` for details.", route.id);

    Ok(())
}
