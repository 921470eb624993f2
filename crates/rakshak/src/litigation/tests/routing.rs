use super::common::*;
use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

use crate::litigation::router::{respondent_handler, NameQuery};
use crate::litigation::LitigationService;

#[tokio::test]
async fn respondent_handler_returns_internal_error_on_repository_failure() {
    let service = Arc::new(LitigationService::new(
        Arc::new(UnavailableCaseStore),
        Arc::new(MemoryAnalysisStore::default()),
        Arc::new(ScriptedModel::replying("{}")),
    ));

    let response = respondent_handler::<UnavailableCaseStore, MemoryAnalysisStore, ScriptedModel>(
        State(service),
        Query(NameQuery {
            name: Some("SafeStreet".to_string()),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload = read_json_body(response).await;
    assert_eq!(payload["message"], "Internal Analysis Engine Failure");
}

#[tokio::test]
async fn analyze_route_wraps_report() {
    let (service, _, _) = build_service(all_cases(), ScriptedModel::replying("{}"));
    let router = router_with_service(service);

    let response = router
        .oneshot(
            Request::get("/api/cases/analyze?name=SafeStreet%20Infra")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let report = &payload["vpiReport"];
    assert_eq!(report["respondentName"], "SafeStreet Infra Ltd");
    assert_eq!(report["vpiScore"], 84);
    assert_eq!(report["riskLevel"], "High Litigation Pressure Pattern");
    assert_eq!(report["foundAsPetitioner"], false);
    assert_eq!(report["stats"]["totalCases"], 5);
    assert_eq!(report["statusDistribution"][0]["Dismissed"], 4);
    assert_eq!(report["cases"][0]["cnrNumber"], "CNR-SS-005");
}

#[tokio::test]
async fn analyze_route_requires_name() {
    let (service, _, _) = build_service(all_cases(), ScriptedModel::replying("{}"));
    let router = router_with_service(service);

    let response = router
        .oneshot(
            Request::get("/api/cases/analyze?name=%20%20")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_eq!(payload["message"], "Respondent name query is required");
}

#[tokio::test]
async fn petitioner_route_returns_null_profile_for_unknown_name() {
    let (service, _, _) = build_service(all_cases(), ScriptedModel::replying("{}"));
    let router = router_with_service(service);

    let response = router
        .oneshot(
            Request::get("/api/cases/petitioner?name=Nobody")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert!(payload["petitionerProfile"].is_null());
}

#[tokio::test]
async fn petitioner_route_requires_name() {
    let (service, _, _) = build_service(all_cases(), ScriptedModel::replying("{}"));
    let router = router_with_service(service);

    let response = router
        .oneshot(
            Request::get("/api/cases/petitioner")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_eq!(payload["message"], "Petitioner name is required");
}

#[tokio::test]
async fn petitioner_route_returns_profile() {
    let (service, _, _) = build_service(all_cases(), ScriptedModel::replying("{}"));
    let router = router_with_service(service);

    let response = router
        .oneshot(
            Request::get("/api/cases/petitioner?name=anil")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let profile = &payload["petitionerProfile"];
    assert_eq!(profile["name"], "Anil Kumar");
    assert_eq!(profile["stats"]["topTarget"], "SafeStreet Infra Ltd");
    assert_eq!(profile["cases"][0]["status"], "Dismissed");
    assert_eq!(profile["cases"][0]["filingDate"], "2024-01-01");
    assert!(profile["aiAnalysis"].is_null());
}

async fn post_analysis(service: TestService, body: serde_json::Value) -> axum::response::Response {
    router_with_service(service)
        .oneshot(
            Request::post("/api/cases/analyze-petitioner")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn analyze_petitioner_route_returns_analysis() {
    let (service, _, _) = build_service(all_cases(), ScriptedModel::replying(VALID_MODEL_OUTPUT));

    let response = post_analysis(service, json!({ "name": "Anil Kumar" })).await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["message"], "Analysis completed successfully");
    assert_eq!(
        payload["aiAnalysis"]["modusOperandi"],
        "Clustered filings against a single respondent."
    );
    assert!(payload["aiAnalysis"]["lastUpdated"].is_string());
}

#[tokio::test]
async fn analyze_petitioner_route_maps_missing_name_to_bad_request() {
    let (service, _, _) = build_service(all_cases(), ScriptedModel::replying(VALID_MODEL_OUTPUT));

    let response = post_analysis(service, json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_eq!(payload["message"], "Petitioner name is required");
}

#[tokio::test]
async fn analyze_petitioner_route_maps_unknown_name_to_not_found() {
    let (service, _, _) = build_service(all_cases(), ScriptedModel::replying(VALID_MODEL_OUTPUT));

    let response = post_analysis(service, json!({ "name": "Nobody" })).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert_eq!(payload["message"], "No cases found for this petitioner");
}

#[tokio::test]
async fn analyze_petitioner_route_maps_model_failure_to_internal_error() {
    let (service, analyses, _) =
        build_service(all_cases(), ScriptedModel::failing("upstream timeout"));

    let response = post_analysis(service, json!({ "name": "Anil Kumar" })).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload = read_json_body(response).await;
    assert_eq!(payload["message"], "AI Analysis Engine Failure");
    assert!(analyses.snapshot().is_empty());
}

#[tokio::test]
async fn analyze_petitioner_route_rejects_missing_body() {
    let (service, _, model) = build_service(all_cases(), ScriptedModel::replying(VALID_MODEL_OUTPUT));

    let response = router_with_service(service)
        .oneshot(
            Request::post("/api/cases/analyze-petitioner")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_eq!(payload["message"], "Petitioner name is required");
    assert_eq!(model.call_count(), 0);
}

#[tokio::test]
async fn analyze_petitioner_route_rejects_form_body() {
    let (service, _, _) = build_service(all_cases(), ScriptedModel::replying(VALID_MODEL_OUTPUT));

    let response = router_with_service(service)
        .oneshot(
            Request::post("/api/cases/analyze-petitioner")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("name=Anil"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_eq!(payload["message"], "Petitioner name is required");
}

#[tokio::test]
async fn abandoned_analysis_still_stores_result() {
    let model = ScriptedModel::replying(VALID_MODEL_OUTPUT).after(Duration::from_millis(200));
    let (service, analyses, _) = build_service(all_cases(), model);

    let request = post_analysis(service, json!({ "name": "Anil Kumar" }));
    let abandoned = tokio::time::timeout(Duration::from_millis(50), request).await;
    assert!(abandoned.is_err());

    tokio::time::sleep(Duration::from_millis(400)).await;
    let stored = analyses.snapshot();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Anil Kumar");
}
