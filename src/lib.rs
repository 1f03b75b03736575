pub mod config;
pub mod dishes;
pub mod error;
pub mod model;
pub mod parsers;
pub mod routes;
pub mod upstream;

pub use config::ProxyConfig;
pub use dishes::DishStore;
pub use error::{ApiError, DishError, ProxyError};
pub use model::{DayPlan, GroceryList, Meal, MealPlan, ParsedRecipe, RestaurantDish};
pub use parsers::{extract_recipe, parse_meal_plan, ExtractionProfile};
pub use routes::AppState;
pub use upstream::{HttpUpstream, ResilientUpstream, RetryPolicy, Upstream};

use std::path::Path;

/// Parse a meal-plan markdown file from disk
pub async fn parse_meal_plan_file(
    path: impl AsRef<Path>,
    days: usize,
) -> Result<MealPlan, ProxyError> {
    let markdown = tokio::fs::read_to_string(path).await?;
    Ok(parse_meal_plan(&markdown, days))
}

/// Extract a generated recipe from a markdown file on disk
pub async fn parse_recipe_file(
    path: impl AsRef<Path>,
    profile: &ExtractionProfile,
) -> Result<ParsedRecipe, ProxyError> {
    let markdown = tokio::fs::read_to_string(path).await?;
    Ok(extract_recipe(&markdown, profile))
}
