use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use super::remarks::TextAnalysisModel;
use super::repository::{CaseRepository, PetitionerAnalysisRepository};
use super::service::{LitigationService, LitigationServiceError};

#[derive(Debug, Default, Deserialize)]
pub struct NameQuery {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NameBody {
    #[serde(default)]
    pub name: Option<String>,
}

/// Router builder exposing the respondent report, petitioner profile and remark analysis.
pub fn case_router<C, P, M>(service: Arc<LitigationService<C, P, M>>) -> Router
where
    C: CaseRepository + 'static,
    P: PetitionerAnalysisRepository + 'static,
    M: TextAnalysisModel + 'static,
{
    Router::new()
        .route("/api/cases/analyze", get(respondent_handler::<C, P, M>))
        .route("/api/cases/petitioner", get(petitioner_handler::<C, P, M>))
        .route(
            "/api/cases/analyze-petitioner",
            post(analyze_petitioner_handler::<C, P, M>),
        )
        .with_state(service)
}

fn message(status: StatusCode, text: &str) -> Response {
    (status, Json(json!({ "message": text }))).into_response()
}

fn present(name: Option<String>) -> Option<String> {
    name.filter(|value| !value.trim().is_empty())
}

pub(crate) async fn respondent_handler<C, P, M>(
    State(service): State<Arc<LitigationService<C, P, M>>>,
    Query(query): Query<NameQuery>,
) -> Response
where
    C: CaseRepository + 'static,
    P: PetitionerAnalysisRepository + 'static,
    M: TextAnalysisModel + 'static,
{
    let Some(name) = present(query.name) else {
        return message(StatusCode::BAD_REQUEST, "Respondent name query is required");
    };

    match service.respondent_report(&name) {
        Ok(report) => (StatusCode::OK, Json(json!({ "vpiReport": report }))).into_response(),
        Err(LitigationServiceError::MissingName) => {
            message(StatusCode::BAD_REQUEST, "Respondent name query is required")
        }
        Err(err) => {
            error!(error = %err, "respondent analysis failed");
            message(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Analysis Engine Failure",
            )
        }
    }
}

pub(crate) async fn petitioner_handler<C, P, M>(
    State(service): State<Arc<LitigationService<C, P, M>>>,
    Query(query): Query<NameQuery>,
) -> Response
where
    C: CaseRepository + 'static,
    P: PetitionerAnalysisRepository + 'static,
    M: TextAnalysisModel + 'static,
{
    let Some(name) = present(query.name) else {
        return message(StatusCode::BAD_REQUEST, "Petitioner name is required");
    };

    match service.petitioner_profile(&name) {
        Ok(profile) => (
            StatusCode::OK,
            Json(json!({ "petitionerProfile": profile })),
        )
            .into_response(),
        Err(LitigationServiceError::MissingName) => {
            message(StatusCode::BAD_REQUEST, "Petitioner name is required")
        }
        Err(err) => {
            error!(error = %err, "petitioner profile failed");
            message(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Petitioner Intelligence Failure",
            )
        }
    }
}

pub(crate) async fn analyze_petitioner_handler<C, P, M>(
    State(service): State<Arc<LitigationService<C, P, M>>>,
    body: Result<Json<NameBody>, JsonRejection>,
) -> Response
where
    C: CaseRepository + 'static,
    P: PetitionerAnalysisRepository + 'static,
    M: TextAnalysisModel + 'static,
{
    let name = body.ok().and_then(|Json(body)| present(body.name));
    let Some(name) = name else {
        return message(StatusCode::BAD_REQUEST, "Petitioner name is required");
    };

    // detached so a dropped connection still lets the upsert land
    let task = tokio::spawn(async move { service.analyze_petitioner(&name).await });
    let result = match task.await {
        Ok(result) => result,
        Err(err) => {
            error!(error = %err, "remark analysis task aborted");
            return message(StatusCode::INTERNAL_SERVER_ERROR, "AI Analysis Engine Failure");
        }
    };

    match result {
        Ok(outcome) => (
            StatusCode::OK,
            Json(json!({
                "message": outcome.message(),
                "aiAnalysis": outcome.analysis,
            })),
        )
            .into_response(),
        Err(LitigationServiceError::MissingName) => {
            message(StatusCode::BAD_REQUEST, "Petitioner name is required")
        }
        Err(LitigationServiceError::PetitionerNotFound(_)) => {
            message(StatusCode::NOT_FOUND, "No cases found for this petitioner")
        }
        Err(err) => {
            error!(error = %err, "remark analysis failed");
            message(StatusCode::INTERNAL_SERVER_ERROR, "AI Analysis Engine Failure")
        }
    }
}
