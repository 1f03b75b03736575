use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use log::{error, info};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::fusion::FlavorProfile;
use super::{internal_error, parse_body, AppState, StringOrList, GENERATE_PATH};
use crate::error::{ApiError, ProxyError};
use crate::model::Nutrition;
use crate::parsers::{extract_recipe, ExtractionProfile};

const DEFAULT_PRIMARY_CUISINE: &str = "Italian";
const DEFAULT_SECONDARY_CUISINE: &str = "Asian";
const NO_DIETARY_PREFERENCE: &str = "None";

const TIMEOUT_DETAIL: &str = "Request timed out. The backend service takes longer than \
    expected to respond. Please try again.";
const FAILURE_DETAIL: &str =
    "Failed to generate recipe. Please check the server logs for more details.";

/// Request body of the recipe generator endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GenerateRecipeBody {
    pub ingredients: String,
    pub cuisine1: String,
    pub cuisine2: String,
    pub dietary_preference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_premium: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serving_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooking_skill: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavor_profile: Option<FlavorProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<u32>,
}

impl GenerateRecipeBody {
    pub fn to_value(&self) -> Result<Value, ProxyError> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Accepts both the form field names and the generator's own names
#[derive(Debug, Default, Deserialize)]
pub struct RecipeRequest {
    pub ingredients: Option<StringOrList>,
    pub cuisine_type: Option<String>,
    pub cuisine1: Option<String>,
    pub meal_type: Option<String>,
    pub cuisine2: Option<String>,
    pub dietary_restrictions: Option<StringOrList>,
    pub dietary_preference: Option<StringOrList>,
    pub is_premium: Option<bool>,
    pub serving_size: Option<Value>,
    pub cooking_skill: Option<String>,
}

fn first_non_empty(values: [Option<&String>; 2], fallback: &str) -> String {
    values
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
        .map_or_else(|| fallback.to_string(), |value| value.to_string())
}

/// Numbers and numeric strings both count as a serving size
fn serving_size(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl RecipeRequest {
    pub fn upstream_body(&self) -> GenerateRecipeBody {
        let dietary = self
            .dietary_restrictions
            .as_ref()
            .or(self.dietary_preference.as_ref())
            .and_then(StringOrList::first)
            .unwrap_or(NO_DIETARY_PREFERENCE);

        GenerateRecipeBody {
            ingredients: self
                .ingredients
                .as_ref()
                .map(|i| i.joined(", "))
                .unwrap_or_default(),
            cuisine1: first_non_empty(
                [self.cuisine_type.as_ref(), self.cuisine1.as_ref()],
                DEFAULT_PRIMARY_CUISINE,
            ),
            cuisine2: first_non_empty(
                [self.meal_type.as_ref(), self.cuisine2.as_ref()],
                DEFAULT_SECONDARY_CUISINE,
            ),
            dietary_preference: dietary.to_string(),
            is_premium: self.is_premium,
            serving_size: self.serving_size.as_ref().and_then(serving_size),
            cooking_skill: self.cooking_skill.clone().filter(|s| !s.is_empty()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeResponse {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: u32,
    pub difficulty: String,
    pub tags: Vec<String>,
    pub nutrition_info: Nutrition,
    pub image_url: Option<String>,
}

impl RecipeResponse {
    /// Shape a generator response for the recipe page
    pub fn from_generated(body: &GenerateRecipeBody, data: &Value) -> Self {
        let markdown = data.get("recipe").and_then(Value::as_str).unwrap_or_default();
        let recipe = extract_recipe(markdown, &ExtractionProfile::GENERATED);

        let tags = [&body.cuisine1, &body.cuisine2, &body.dietary_preference]
            .into_iter()
            .filter(|tag| !tag.is_empty())
            .cloned()
            .collect();

        RecipeResponse {
            title: recipe.title,
            description: format!(
                "A {}-{} fusion recipe featuring {}.",
                body.cuisine1, body.cuisine2, body.ingredients
            ),
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
            prep_time: recipe.prep_time,
            cook_time: recipe.cook_time,
            servings: 4,
            difficulty: "medium".to_string(),
            tags,
            nutrition_info: recipe.nutrition,
            image_url: data
                .get("image_url")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }
}

fn failure(e: &ProxyError) -> ApiError {
    if e.is_timeout() {
        ApiError::detailed(StatusCode::GATEWAY_TIMEOUT, TIMEOUT_DETAIL, "Timeout Error")
    } else {
        internal_error(FAILURE_DETAIL, e)
    }
}

pub async fn generate_recipe(
    State(state): State<AppState>,
    payload: Result<Json<RecipeRequest>, JsonRejection>,
) -> Result<Json<RecipeResponse>, ApiError> {
    let request = parse_body(payload, |e| internal_error(FAILURE_DETAIL, e))?;
    let body = request.upstream_body();
    info!(
        "Generating {}-{} recipe ({})",
        body.cuisine1, body.cuisine2, body.dietary_preference
    );

    let data = match body.to_value() {
        Ok(value) => state.generator.post_json(GENERATE_PATH, &value).await,
        Err(e) => Err(e),
    }
    .map_err(|e| {
        error!("Recipe generation failed: {}", e);
        failure(&e)
    })?;

    Ok(Json(RecipeResponse::from_generated(&body, &data)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_form_names_are_mapped() {
        let request: RecipeRequest = serde_json::from_value(json!({
            "ingredients": ["chicken", "rice"],
            "cuisine_type": "Mexican",
            "meal_type": "Korean",
            "dietary_restrictions": ["gluten-free", "dairy-free"],
            "serving_size": "2",
            "cooking_skill": ""
        }))
        .unwrap();

        let body = serde_json::to_value(request.upstream_body()).unwrap();
        assert_eq!(
            body,
            json!({
                "ingredients": "chicken, rice",
                "cuisine1": "Mexican",
                "cuisine2": "Korean",
                "dietary_preference": "gluten-free",
                "serving_size": 2
            })
        );
    }

    #[test]
    fn test_defaults() {
        let body = RecipeRequest::default().upstream_body();

        assert_eq!(body.cuisine1, "Italian");
        assert_eq!(body.cuisine2, "Asian");
        assert_eq!(body.dietary_preference, "None");
        assert_eq!(body.ingredients, "");
    }

    #[test]
    fn test_generator_names_pass_through() {
        let request: RecipeRequest = serde_json::from_value(json!({
            "ingredients": "tofu",
            "cuisine1": "Thai",
            "cuisine2": "French",
            "dietary_preference": "vegan",
            "is_premium": true
        }))
        .unwrap();

        let body = request.upstream_body();
        assert_eq!(body.cuisine1, "Thai");
        assert_eq!(body.cuisine2, "French");
        assert_eq!(body.dietary_preference, "vegan");
        assert_eq!(body.is_premium, Some(true));
    }

    #[test]
    fn test_response_from_empty_recipe() {
        let body = RecipeRequest::default().upstream_body();
        let response = RecipeResponse::from_generated(&body, &json!({}));

        assert_eq!(response.title, "Delicious Recipe");
        assert_eq!(response.prep_time, "15 minutes");
        assert_eq!(response.servings, 4);
        assert_eq!(response.tags, vec!["Italian", "Asian", "None"]);
        assert!(response.ingredients.is_empty());
        assert_eq!(response.image_url, None);
    }

    #[test]
    fn test_timeout_maps_to_gateway_timeout() {
        let err = failure(&ProxyError::Timeout(std::time::Duration::from_secs(60)));
        assert_eq!(err.status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(err.body["error"], "Timeout Error");

        let err = failure(&ProxyError::MissingField("recipe"));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
