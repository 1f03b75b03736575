use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use log::info;
use serde_json::{json, Value};

use super::parse_body;
use crate::error::ApiError;

pub async fn ping() -> impl IntoResponse {
    info!("Liveness check");
    Json(json!({ "message": "API route is working!" }))
}

pub async fn echo(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let body = parse_body(payload, |_| {
        ApiError::message(StatusCode::INTERNAL_SERVER_ERROR, "Failed to process request")
    })?;

    Ok(Json(json!({
        "message": "POST API route is working!",
        "receivedData": body,
    })))
}
