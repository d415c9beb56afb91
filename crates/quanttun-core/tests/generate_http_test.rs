//! End-to-end generation tests against a mocked HTTP endpoint.

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use quanttun_core::generator::{
    FallbackReason, GenerateError, GeneratorClient, GeneratorConfig, PlanRequest, PlanSource,
    generate_route,
};
use quanttun_store::queries::routes;
use quanttun_store::storage::MemoryStorage;
use quanttun_test_utils::PLAN_RESPONSE;

fn client_for(server: &MockServer) -> GeneratorClient {
    let config = GeneratorConfig {
        endpoint: format!("{}/", server.uri()),
        ..GeneratorConfig::default()
    };
    GeneratorClient::new(config).expect("client builds")
}

fn request() -> PlanRequest {
    PlanRequest::new("Rust", "1 hora", "alto")
}

#[tokio::test]
async fn successful_response_yields_generated_route() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(json!({
            "model": "openai",
            "temperature": 0.7,
            "max_tokens": 2000
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(PLAN_RESPONSE))
        .expect(1)
        .mount(&server)
        .await;

    let storage = MemoryStorage::new();
    let generated = generate_route(&storage, &client_for(&server), &request())
        .await
        .unwrap();

    assert!(matches!(generated.source, PlanSource::Generated));
    assert_eq!(generated.route.subject, "Rust");

    // Normalization: contiguous 1-based ids, nothing completed, exercises
    // defaulted where the response omitted them.
    let activities = &generated.route.study_plan.activities;
    let ids: Vec<u32> = activities.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert!(activities.iter().all(|a| !a.completed));
    assert!(activities[2].exercises.contains("Traits e Generics"));

    let stored = routes::list_routes(&storage).unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].activities, 3);
}

#[tokio::test]
async fn server_error_falls_back_with_service_reason() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&server)
        .await;

    let storage = MemoryStorage::new();
    let generated = generate_route(&storage, &client_for(&server), &request())
        .await
        .unwrap();

    assert!(matches!(
        generated.source,
        PlanSource::Fallback(FallbackReason::Service(_))
    ));
    // The fallback still names the subject and gets persisted.
    assert!(
        generated
            .route
            .study_plan
            .activities
            .iter()
            .any(|a| a.title.contains("Rust"))
    );
    assert_eq!(routes::list_routes(&storage).unwrap().len(), 1);
}

#[tokio::test]
async fn prose_only_response_falls_back_with_extraction_reason() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("Desculpe, não consegui gerar o plano."),
        )
        .expect(1)
        .mount(&server)
        .await;

    let storage = MemoryStorage::new();
    let generated = generate_route(&storage, &client_for(&server), &request())
        .await
        .unwrap();

    assert!(matches!(
        generated.source,
        PlanSource::Fallback(FallbackReason::Extraction(_))
    ));
    assert_eq!(generated.route.study_plan.activities.len(), 3);
}

#[tokio::test]
async fn blank_input_issues_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PLAN_RESPONSE))
        .expect(0)
        .mount(&server)
        .await;

    let storage = MemoryStorage::new();
    let blank = PlanRequest::new("  ", "1 hora", "alto");

    let err = generate_route(&storage, &client_for(&server), &blank)
        .await
        .unwrap_err();

    assert!(matches!(err, GenerateError::Validation(_)));
    assert!(routes::list_routes(&storage).unwrap().is_empty());
    let received = server.received_requests().await.unwrap_or_default();
    assert!(received.is_empty());
}
