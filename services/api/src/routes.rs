use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json};
use rakshak::litigation::{
    case_router, CaseRepository, LitigationService, PetitionerAnalysisRepository,
    TextAnalysisModel,
};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_case_routes<C, P, M>(service: Arc<LitigationService<C, P, M>>) -> axum::Router
where
    C: CaseRepository + 'static,
    P: PetitionerAnalysisRepository + 'static,
    M: TextAnalysisModel + 'static,
{
    case_router(service)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{InMemoryCaseStore, InMemoryPetitionerStore};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use chrono::NaiveDate;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use rakshak::litigation::{CaseRecord, CaseStatus, ModelError, NameMatchPolicy};
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;

    struct OfflineModel;

    #[async_trait]
    impl TextAnalysisModel for OfflineModel {
        async fn generate(&self, _system: &str, _payload: &str) -> Result<String, ModelError> {
            Err(ModelError::Transport("model disabled in tests".to_string()))
        }
    }

    fn state(ready: bool) -> AppState {
        let recorder = PrometheusBuilder::new().build_recorder();
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(recorder.handle()),
        }
    }

    fn app(ready: bool) -> axum::Router {
        let date = |day| NaiveDate::from_ymd_opt(2024, 1, day).expect("valid date");
        let cases = InMemoryCaseStore::new(
            vec![
                CaseRecord::new("C-1", "Anil Kumar", "SafeStreet Infra Ltd")
                    .filed_on(date(1))
                    .with_status(CaseStatus::Dismissed)
                    .with_remarks("Dismissed as frivolous."),
                CaseRecord::new("C-2", "Anil Kumar", "SafeStreet Infra Ltd")
                    .filed_on(date(20))
                    .with_status(CaseStatus::Frivolous),
            ],
            NameMatchPolicy::Substring,
        );
        let service = Arc::new(LitigationService::new(
            Arc::new(cases),
            Arc::new(InMemoryPetitionerStore::new(NameMatchPolicy::Substring)),
            Arc::new(OfflineModel),
        ));
        with_case_routes(service).layer(Extension(state(ready)))
    }

    async fn get_status(router: axum::Router, uri: &str) -> StatusCode {
        router
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn health_is_always_ok() {
        assert_eq!(get_status(app(false), "/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn readiness_reflects_listener_state() {
        assert_eq!(
            get_status(app(false), "/ready").await,
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(get_status(app(true), "/ready").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn metrics_render_as_text() {
        let response = app(true)
            .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; version=0.0.4"
        );
    }

    #[tokio::test]
    async fn case_routes_are_mounted() {
        assert_eq!(
            get_status(app(true), "/api/cases/analyze?name=SafeStreet").await,
            StatusCode::OK
        );
        assert_eq!(
            get_status(app(true), "/api/cases/petitioner?name=Anil").await,
            StatusCode::OK
        );
    }

    #[tokio::test]
    async fn model_outage_surfaces_as_internal_error() {
        let response = app(true)
            .oneshot(
                Request::post("/api/cases/analyze-petitioner")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"name":"Anil Kumar"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
