//! Study-plan generation: prompt construction, endpoint client, extraction,
//! fallback, normalization, and the route-creation service.

pub mod client;
pub mod extract;
pub mod fallback;
pub mod normalize;
pub mod prompt;
pub mod service;

pub use client::{ClientError, DEFAULT_ENDPOINT, GeneratorClient, GeneratorConfig, TextCompletion};
pub use extract::{ExtractError, extract_plan};
pub use fallback::fallback_plan;
pub use normalize::normalize_plan;
pub use prompt::{PlanRequest, ValidationError, build_prompt};
pub use service::{FallbackReason, GenerateError, GeneratedRoute, PlanSource, generate_route};
