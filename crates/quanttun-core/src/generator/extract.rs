//! Best-effort extraction of a study plan from free-text endpoint output.
//!
//! Searches the raw response for the first greedy brace-delimited substring
//! and decodes it as a [`StudyPlan`]. Callers treat any failure here as a
//! signal to fall back; it never propagates to the user.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use quanttun_store::models::StudyPlan;

/// Errors from plan extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no JSON object found in response")]
    NoJsonObject,

    #[error("extracted JSON is not a valid study plan: {0}")]
    Json(#[from] serde_json::Error),
}

/// Greedy brace-delimited match: first `{` through last `}`.
fn json_object_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{[\s\S]*\}").expect("static pattern is valid"))
}

/// Extract and decode a study plan from raw response text.
pub fn extract_plan(raw: &str) -> Result<StudyPlan, ExtractError> {
    let matched = json_object_pattern()
        .find(raw)
        .ok_or(ExtractError::NoJsonObject)?;
    Ok(serde_json::from_str(matched.as_str())?)
}
