//! Route table, handlers, and HTTP error mapping.
//!
//! Every module-scoped route reloads the dataset through the store, so
//! content edits are visible without a restart. The password route never
//! fails user-visibly; lookup problems are degraded inside the evaluator.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use cybered_core::grader::{grade, GradeReport, Submission};
use cybered_core::model::ModuleDetail;
use cybered_core::ContentError;
use cybered_password::PasswordCheck;

use crate::state::AppState;

/// Build the full API router.
pub fn router(state: AppState) -> Router {
    // Open CORS on purpose: this is a public educational tool.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health))
        .route("/api/modules", get(list_modules))
        .route("/api/modules/{id}", get(get_module))
        .route("/api/modules/{id}/quiz", get(get_quiz))
        .route("/api/modules/{id}/quiz/grade", post(grade_quiz))
        .route("/api/password/check", post(check_password))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Errors a handler can surface to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Content(#[from] ContentError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Content(e) if e.is_not_found() => (StatusCode::NOT_FOUND, e.to_string()),
            ApiError::Content(e) => {
                tracing::error!(error = %e, "content store failure");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn list_modules(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    let dataset = state.store.load().await?;
    let modules: Vec<_> = dataset.modules.iter().map(|m| m.summary_view()).collect();
    Ok(Json(json!({ "modules": modules })))
}

async fn get_module(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ModuleDetail>, ApiError> {
    let module = state.store.module(&id).await?;
    Ok(Json(module.detail_view()))
}

async fn get_quiz(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let module = state.store.module(&id).await?;
    Ok(Json(json!({ "quiz": module.detail_view().quiz })))
}

async fn grade_quiz(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(submission): Json<Submission>,
) -> Result<Json<GradeReport>, ApiError> {
    let module = state.store.module(&id).await?;
    Ok(Json(grade(&module, &submission)))
}

#[derive(Debug, Deserialize)]
struct PasswordCheckRequest {
    password: String,
}

async fn check_password(
    State(state): State<AppState>,
    Json(payload): Json<PasswordCheckRequest>,
) -> Json<PasswordCheck> {
    Json(state.evaluator.evaluate(&payload.password).await)
}
