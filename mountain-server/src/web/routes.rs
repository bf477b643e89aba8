//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tokio::time::Instant;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::aggregate::gather;
use crate::domain::Coordinates;
use crate::resolver::ResolveError;

use super::dto::*;
use super::error::{AppError, panic_response};
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/mountain-info", get(mountain_info))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Weather, air quality and sun times for a trail.
async fn mountain_info(
    State(state): State<AppState>,
    query: Result<Query<MountainInfoQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    // A malformed query string (e.g. a repeated trailName) has no usable name.
    let query = query.map_err(|rejection| {
        debug!(%rejection, "rejected query string");
        missing_trail_name()
    })?;
    let trail_name = query.trail_name().ok_or_else(missing_trail_name)?;

    let started = Instant::now();

    let at = resolve(&state, trail_name).await?;
    let info = gather(&state.providers, at, state.timeout).await;

    info!(
        trail = trail_name,
        %at,
        complete = info.is_complete(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "mountain info gathered"
    );

    if info.is_complete() {
        return Ok(Json(info.into_data()).into_response());
    }

    let body = PartialFailureResponse {
        message: PROVIDER_ERRORS_MESSAGE,
        errors: info.errors(),
        data: info.into_data(),
    };
    Ok((StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response())
}

fn missing_trail_name() -> AppError {
    AppError::BadRequest {
        message: "trailName is required.".to_string(),
    }
}

/// Resolve a trail name within the configured timeout.
async fn resolve(state: &AppState, trail_name: &str) -> Result<Coordinates, ResolveError> {
    let at = tokio::time::timeout(state.timeout, state.resolver.resolve(trail_name))
        .await
        .map_err(|_| ResolveError::Timeout(state.timeout))??;

    at.validate()?;
    Ok(at)
}
