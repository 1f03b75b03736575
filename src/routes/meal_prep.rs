use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use log::{info, warn};
use serde_json::{json, Value};

use super::{mocks, parse_body, AppState};
use crate::error::ApiError;
use crate::upstream::Upstream;

/// Forward `payload` to `upstream`, answering with `mock` when it is
/// unreachable or returns an error status.
async fn forward_or_mock(
    upstream: &dyn Upstream,
    path: &str,
    payload: Result<Json<Value>, JsonRejection>,
    failure_detail: &'static str,
    mock: fn() -> Value,
) -> Result<Json<Value>, ApiError> {
    let body = parse_body(payload, |_| {
        ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "detail": failure_detail }),
        )
    })?;

    match upstream.post_json(path, &body).await {
        Ok(data) => {
            info!("{} answered {}", upstream.name(), path);
            Ok(Json(data))
        }
        Err(e) => {
            warn!("{} call to {} failed, serving mock data: {}", upstream.name(), path, e);
            Ok(Json(mock()))
        }
    }
}

pub async fn batch_cooking_plan(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    forward_or_mock(
        state.primary.as_ref(),
        "/meal-prep/batch-cooking-plan",
        payload,
        "An error occurred while creating batch cooking plan",
        mocks::batch_cooking_plan,
    )
    .await
}

pub async fn time_optimized_recipes(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    forward_or_mock(
        state.meal_prep.as_ref(),
        "/meal-prep/time-optimized-recipes",
        payload,
        "An error occurred while getting time-optimized recipes",
        mocks::time_optimized_recipes,
    )
    .await
}

pub async fn transform_leftovers(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    forward_or_mock(
        state.meal_prep.as_ref(),
        "/meal-prep/transform-leftovers",
        payload,
        "An error occurred while transforming leftovers",
        mocks::transform_leftovers,
    )
    .await
}
