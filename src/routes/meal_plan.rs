use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use log::{error, info};
use serde::Deserialize;
use serde_json::{json, Value};

use super::{parse_body, AppState, StringOrList, GENERATE_PATH};
use crate::error::{ApiError, ProxyError};
use crate::model::MealPlan;
use crate::parsers::parse_meal_plan;

const DEFAULT_DAYS: usize = 7;
const DEFAULT_DIET: &str = "balanced";

const COLD_START_DETAIL: &str = "Failed to generate meal plan. The backend service may be \
    experiencing a cold start delay or temporary downtime. Please try again in a minute.";

#[derive(Debug, Default, Deserialize)]
pub struct MealPlanRequest {
    pub days: Option<usize>,
    pub people: Option<u32>,
    pub diet_type: Option<String>,
    pub preferences: Option<StringOrList>,
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl MealPlanRequest {
    /// Body sent to the recipe generator
    pub fn upstream_body(&self) -> Value {
        let diet_type = self
            .diet_type
            .as_deref()
            .filter(|diet| !diet.is_empty())
            .unwrap_or(DEFAULT_DIET);

        let mut preferences = self
            .preferences
            .as_ref()
            .map(|p| p.joined(", "))
            .unwrap_or_default();
        if !self.exclude.is_empty() {
            preferences.push_str(&format!(" (excluding: {})", self.exclude.join(", ")));
        }

        json!({
            "diet_type": diet_type,
            "preferences": preferences,
            "is_meal_plan": true,
        })
    }

    pub fn requested_days(&self) -> usize {
        match self.days {
            Some(days) if days > 0 => days,
            _ => DEFAULT_DAYS,
        }
    }
}

fn gateway_timeout(error: impl ToString) -> ApiError {
    ApiError::detailed(StatusCode::GATEWAY_TIMEOUT, COLD_START_DETAIL, error)
}

pub async fn generate_meal_plan(
    State(state): State<AppState>,
    payload: Result<Json<MealPlanRequest>, JsonRejection>,
) -> Result<Json<MealPlan>, ApiError> {
    let request = parse_body(payload, gateway_timeout)?;
    let body = request.upstream_body();
    info!("Generating {}-day meal plan", request.requested_days());

    let response = state
        .generator
        .post_json(GENERATE_PATH, &body)
        .await
        .map_err(|e| {
            error!("Meal plan generation failed: {}", e);
            gateway_timeout(e)
        })?;

    let markdown = response
        .get("meal_plan")
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| {
            let e = ProxyError::MissingField("meal plan");
            error!("{}", e);
            gateway_timeout(e)
        })?;

    Ok(Json(parse_meal_plan(markdown, request.requested_days())))
}
