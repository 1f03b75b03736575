mod fusion;
mod global_cuisine;
mod health;
mod lunchbox;
mod meal_plan;
mod meal_prep;
pub mod mocks;
mod recipe;

pub use fusion::{FlavorProfile, FusionPreferences, FusionRecipe, FusionRequest};
pub use global_cuisine::{Cuisine, CuisineDish};
pub use lunchbox::{Child, LunchboxPlan, LunchboxRequest};
pub use meal_plan::MealPlanRequest;
pub use recipe::{GenerateRecipeBody, RecipeRequest, RecipeResponse};

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use log::{error, info};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;

use crate::config::ProxyConfig;
use crate::error::{ApiError, ProxyError};
use crate::upstream::{HttpUpstream, ResilientUpstream, RetryPolicy, Upstream};

/// Path of the generator endpoint on the recipe backend
pub const GENERATE_PATH: &str = "/recipes/generate";

/// Backends shared by every request
#[derive(Clone)]
pub struct AppState {
    /// Recipe and meal-plan generator, with wake-up and retries
    pub generator: Arc<dyn Upstream>,
    /// Same generator, one ping and one attempt
    pub fusion: Arc<dyn Upstream>,
    /// Same host again, called directly with no ping or retry
    pub primary: Arc<dyn Upstream>,
    /// Meal-prep and cuisine backend (`BACKEND_URL`)
    pub meal_prep: Arc<dyn Upstream>,
}

impl AppState {
    pub fn from_config(config: &ProxyConfig) -> Result<Self, ProxyError> {
        let timeout = config.upstream.timeout();
        let ping_timeout = Duration::from_secs(config.retry.wakeup_timeout_secs);

        let generator: Arc<dyn Upstream> = Arc::new(HttpUpstream::new(
            "recipe-generator",
            &config.upstream.base_url,
            timeout,
            ping_timeout,
        )?);
        let meal_prep = Arc::new(HttpUpstream::new(
            "meal-prep",
            &config.upstream.meal_prep_url,
            timeout,
            ping_timeout,
        )?);

        info!("Using API URL {}", config.upstream.base_url);
        info!("Using meal-prep URL {}", config.upstream.meal_prep_url);

        Ok(Self {
            generator: Arc::new(ResilientUpstream::new(
                generator.clone(),
                RetryPolicy::from_config(&config.retry, &config.upstream),
            )),
            fusion: Arc::new(ResilientUpstream::new(
                generator.clone(),
                RetryPolicy::single_shot(timeout),
            )),
            primary: generator,
            meal_prep,
        })
    }
}

/// All proxy routes with permissive CORS
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/generate-meal-plan", post(meal_plan::generate_meal_plan))
        .route("/api/generate-recipe", post(recipe::generate_recipe))
        .route("/api/fusion-builder/generate", post(fusion::generate_fusion_recipe))
        .route(
            "/api/meal-prep/batch-cooking-plan",
            post(meal_prep::batch_cooking_plan),
        )
        .route(
            "/api/meal-prep/time-optimized-recipes",
            post(meal_prep::time_optimized_recipes),
        )
        .route(
            "/api/meal-prep/transform-leftovers",
            post(meal_prep::transform_leftovers),
        )
        .route(
            "/api/global-cuisine/explore",
            get(global_cuisine::explore_region).post(global_cuisine::explore),
        )
        .route("/api/global-cuisine/regions", get(global_cuisine::regions))
        .route("/api/global-cuisine/techniques", get(global_cuisine::techniques))
        .route(
            "/api/global-cuisine/ingredient-map",
            get(global_cuisine::ingredient_map),
        )
        .route("/api/generate-lunchbox-plan", post(lunchbox::generate_lunchbox_plan))
        .route("/api/test", get(health::ping).post(health::echo))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Run the proxy API until the process is stopped
pub async fn serve(config: &ProxyConfig) -> Result<(), ProxyError> {
    let state = AppState::from_config(config)?;
    let address = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;

    info!("Proxy API listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;
    Ok(())
}

/// Unwrap a JSON body, turning a malformed one into a route-specific error
pub(crate) fn parse_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    on_error: impl FnOnce(String) -> ApiError,
) -> Result<T, ApiError> {
    payload.map(|Json(value)| value).map_err(|rejection| {
        error!("Rejected request body: {}", rejection.body_text());
        on_error(rejection.body_text())
    })
}

pub(crate) fn internal_error(detail: &str, error: impl ToString) -> ApiError {
    ApiError::detailed(StatusCode::INTERNAL_SERVER_ERROR, detail, error)
}

/// A form field that may arrive as one string or as a list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StringOrList {
    One(String),
    Many(Vec<String>),
}

impl StringOrList {
    pub fn joined(&self, separator: &str) -> String {
        match self {
            StringOrList::One(value) => value.clone(),
            StringOrList::Many(values) => values.join(separator),
        }
    }

    pub fn first(&self) -> Option<&str> {
        match self {
            StringOrList::One(value) => Some(value.as_str()),
            StringOrList::Many(values) => values.first().map(String::as_str),
        }
        .filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_or_list() {
        let one: StringOrList = serde_json::from_str(r#""rice, beans""#).unwrap();
        let many: StringOrList = serde_json::from_str(r#"["rice", "beans"]"#).unwrap();

        assert_eq!(one.joined(", "), "rice, beans");
        assert_eq!(many.joined(", "), "rice, beans");
        assert_eq!(many.first(), Some("rice"));
        assert_eq!(StringOrList::Many(vec![]).first(), None);
        assert_eq!(StringOrList::One(String::new()).first(), None);
    }
}
