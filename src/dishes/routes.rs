use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use log::info;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use super::DishStore;
use crate::config::DishServerConfig;
use crate::error::{ApiError, DishError, ProxyError};
use crate::model::RestaurantDish;
use crate::routes::parse_body;

#[derive(Debug, Deserialize)]
struct SearchParams {
    query: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SaveRequest {
    dish_id: Option<String>,
}

pub fn router(store: Arc<DishStore>) -> Router {
    Router::new()
        .route("/api/restaurant-dishes", post(add_dish))
        .route("/api/restaurant-dishes/search", get(search_dishes))
        .route("/api/restaurant-dishes/popular", get(popular_dishes))
        .route("/api/restaurant-dishes/:id", get(get_dish))
        .route(
            "/api/user/saved-transformations",
            get(saved_transformations).post(save_transformation),
        )
        .layer(CorsLayer::permissive())
        .with_state(store)
}

/// Load the dish file and serve the demo API until the process is stopped
pub async fn serve(config: &DishServerConfig) -> Result<(), ProxyError> {
    let store = Arc::new(DishStore::open(config.data_file.clone()).await);
    let address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;

    info!("Dish server running on {}", listener.local_addr()?);
    axum::serve(listener, router(store)).await?;
    Ok(())
}

async fn search_dishes(
    State(store): State<Arc<DishStore>>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<RestaurantDish>> {
    info!("Search request received for {:?}", params.query);
    let results = store.search(params.query.as_deref()).await;
    info!("Found {} results", results.len());
    Json(results)
}

async fn popular_dishes(State(store): State<Arc<DishStore>>) -> Json<Vec<RestaurantDish>> {
    Json(store.popular().await)
}

async fn get_dish(
    State(store): State<Arc<DishStore>>,
    Path(id): Path<String>,
) -> Result<Json<RestaurantDish>, ApiError> {
    info!("Request for dish {}", id);
    store
        .get(&id)
        .await
        .map(Json)
        .ok_or_else(|| DishError::NotFound.into())
}

async fn add_dish(
    State(store): State<Arc<DishStore>>,
    payload: Result<Json<RestaurantDish>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let dish = parse_body(payload, |e| ApiError::message(StatusCode::BAD_REQUEST, e))?;
    let stored = store.add(dish).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

async fn saved_transformations(State(store): State<Arc<DishStore>>) -> impl IntoResponse {
    Json(store.saved_transformations().await)
}

async fn save_transformation(
    State(store): State<Arc<DishStore>>,
    payload: Result<Json<SaveRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request = parse_body(payload, |e| ApiError::message(StatusCode::BAD_REQUEST, e))?;
    let dish_id = request.dish_id.unwrap_or_default();
    info!("Saving transformation for dish {}", dish_id);

    store.save_transformation(&dish_id).await?;
    Ok(Json(json!({ "success": true })))
}
