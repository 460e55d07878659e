use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use tracing::{debug, info};

use crate::constants::{SERVICE_NAME, WELCOME_MESSAGE};
use crate::error::{CatalogError, EntityKind};
use crate::state::AppState;

/// Failures surfaced to HTTP clients as `{"detail": "..."}`
#[derive(Debug)]
pub enum ApiError {
    /// Lookup miss, answered with 404
    NotFound(CatalogError),
    /// Path the router could not extract, 422
    InvalidPath(PathRejection),
    /// Scope id segment that is not an integer, 422
    InvalidScopeId(String),
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        ApiError::NotFound(err)
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidPath(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::NotFound(err) => {
                info!("{}", err);
                (StatusCode::NOT_FOUND, err.to_string())
            }
            ApiError::InvalidPath(rejection) => {
                info!("Rejected path parameters: {}", rejection.body_text());
                (StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
            }
            ApiError::InvalidScopeId(raw) => {
                info!("Rejected scope id: {}", raw);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    format!("Invalid scope id '{raw}': expected an integer"),
                )
            }
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

/// Parse a scope id path segment.
///
/// Integers outside the `i64` range cannot name any scope, so they are a
/// plain miss rather than a malformed request.
pub fn parse_scope_id(raw: &str) -> Result<i64, ApiError> {
    if let Ok(id) = raw.parse::<i64>() {
        return Ok(id);
    }
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CatalogError::NotFound(EntityKind::Scope).into());
    }
    Err(ApiError::InvalidScopeId(raw.to_string()))
}

pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": WELCOME_MESSAGE }))
}

pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn list_scopes(State(state): State<AppState>) -> Response {
    debug!("Listing scopes");
    Json(state.catalogue.list_scopes()).into_response()
}

pub async fn get_scope(
    State(state): State<AppState>,
    scope_id: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(raw) = scope_id?;
    let scope_id = parse_scope_id(&raw)?;
    let scope = state.catalogue.get_scope(scope_id)?;
    Ok(Json(scope).into_response())
}

pub async fn list_disciplines(State(state): State<AppState>) -> Response {
    debug!("Listing disciplines");
    Json(state.catalogue.list_disciplines()).into_response()
}

pub async fn get_discipline(
    State(state): State<AppState>,
    Path(discipline_id): Path<String>,
) -> Result<Response, ApiError> {
    let discipline = state.catalogue.get_discipline(&discipline_id)?;
    Ok(Json(discipline).into_response())
}

pub async fn get_recommendation(
    State(state): State<AppState>,
    params: Result<Path<(String, String)>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path((raw_scope_id, discipline_id)) = params?;
    let scope_id = parse_scope_id(&raw_scope_id)?;
    let recommendation = state
        .catalogue
        .get_recommendation(scope_id, &discipline_id)?;
    Ok(Json(recommendation).into_response())
}

/// Unknown routes get the same JSON error shape as lookup misses
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not Found" })))
}
