//! Route-creation service.
//!
//! Orchestrates the full generation flow: validate, call the endpoint,
//! extract or fall back, normalize, wrap into a route, and append to the
//! stored collection. The store is written only after a plan exists, so a
//! failed attempt never touches existing routes.

use chrono::Utc;
use thiserror::Error;

use quanttun_store::models::{StudyPlan, StudyRoute};
use quanttun_store::queries::routes;
use quanttun_store::storage::Storage;

use super::client::{ClientError, TextCompletion};
use super::extract::{ExtractError, extract_plan};
use super::fallback::fallback_plan;
use super::normalize::normalize_plan;
use super::prompt::{PlanRequest, SYSTEM_MESSAGE, ValidationError, build_prompt};

/// Where the plan embedded in a generated route came from.
#[derive(Debug)]
pub enum PlanSource {
    /// Extracted from the generation service response.
    Generated,
    /// The deterministic template, with the reason the service output was
    /// not used.
    Fallback(FallbackReason),
}

/// Why generation fell back to the template plan.
#[derive(Debug)]
pub enum FallbackReason {
    /// The service could not be reached or answered with a failure status.
    /// Transient; retrying later may yield a generated plan.
    Service(ClientError),
    /// The service answered, but no plan could be extracted from the text.
    Extraction(ExtractError),
}

/// A newly created route plus the explicit generated-vs-fallback outcome.
#[derive(Debug)]
pub struct GeneratedRoute {
    pub route: StudyRoute,
    pub source: PlanSource,
}

/// Errors from [`generate_route`]. Service and extraction failures are not
/// errors here; they degrade to the fallback plan.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to persist the new route")]
    Store(#[source] anyhow::Error),
}

/// Generate a study route and append it to the stored collection.
pub async fn generate_route(
    storage: &dyn Storage,
    client: &dyn TextCompletion,
    request: &PlanRequest,
) -> Result<GeneratedRoute, GenerateError> {
    request.validate()?;

    let (mut plan, source) = match client.complete(SYSTEM_MESSAGE, &build_prompt(request)).await {
        Ok(raw) => match extract_plan(&raw) {
            Ok(plan) => (plan, PlanSource::Generated),
            Err(err) => {
                tracing::warn!(error = %err, "could not extract a plan from the response, using fallback");
                (
                    fallback_plan(request),
                    PlanSource::Fallback(FallbackReason::Extraction(err)),
                )
            }
        },
        Err(err) => {
            tracing::warn!(error = %err, "generation service unavailable, using fallback");
            (
                fallback_plan(request),
                PlanSource::Fallback(FallbackReason::Service(err)),
            )
        }
    };

    normalize_plan(&mut plan);

    let route = wrap_route(request, plan);
    routes::append_route(storage, &route).map_err(GenerateError::Store)?;

    Ok(GeneratedRoute { route, source })
}

/// Wrap a normalized plan into a new route record.
fn wrap_route(request: &PlanRequest, plan: StudyPlan) -> StudyRoute {
    let now = Utc::now();
    StudyRoute {
        id: now.timestamp_millis().to_string(),
        title: plan.title.clone(),
        subject: request.subject.clone(),
        daily_time: request.daily_time.clone(),
        dedication: request.dedication.clone(),
        activities: plan.activities.len() as u32,
        completed_activities: 0,
        created_at: now,
        study_plan: plan,
    }
}
