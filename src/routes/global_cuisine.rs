//! Global cuisine explorer.
//!
//! Region lookups go to the meal-prep backend and come back reshaped into
//! the explorer's cuisine card; failures answer with a canned cuisine. The
//! region, technique and ingredient-map lists are passed through as-is.

use std::collections::HashSet;
use std::sync::LazyLock;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::{error, info, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{mocks, AppState};
use crate::error::{ApiError, ProxyError};
use crate::parsers::capitalize;
use crate::upstream::Upstream;

const EXPLORE_PATH: &str = "/global-cuisine/explore";
const REGIONS_PATH: &str = "/global-cuisine/regions";
const DEFAULT_TOTAL_MINUTES: u32 = 30;

static WHITESPACE_RUN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\s+").ok());

static FIRST_NUMBER: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\d+").ok());

const QUANTITIES: [&str; 7] = [
    "1 cup",
    "2 tablespoons",
    "1/2 teaspoon",
    "3 cloves",
    "200g",
    "1/4 cup",
    "2 medium",
];

const PREPARATIONS: [&str; 7] = [
    "fresh", "minced", "chopped", "diced", "sliced", "grated", "whole",
];

const PROTEINS: [&str; 5] = ["meat", "chicken", "beef", "pork", "fish"];

const GENERIC_STEPS: [&str; 5] = [
    "Combine all ingredients in a large bowl and mix thoroughly.",
    "Heat olive oil in a pan and sauté the vegetables until tender.",
    "Simmer for 20-30 minutes to allow flavors to meld together.",
    "Garnish with fresh herbs before serving.",
    "Serve hot with your choice of side dishes.",
];

const FOOD_TYPE_TAGS: [(&str, [&str; 2]); 7] = [
    ("pasta", ["Pasta", "Italian"]),
    ("risotto", ["Rice", "Italian"]),
    ("curry", ["Spicy", "Curry"]),
    ("soup", ["Soup", "Comfort Food"]),
    ("salad", ["Fresh", "Healthy"]),
    ("grill", ["Grilled", "BBQ"]),
    ("bake", ["Baked", "Oven"]),
];

const GENERIC_TAGS: [&str; 6] = [
    "Traditional",
    "Authentic",
    "Homemade",
    "Flavorful",
    "Gourmet",
    "Classic",
];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct CuisineInfo {
    name: String,
    region: String,
    key_ingredients: Vec<String>,
    flavor_profile: String,
    historical_overview: String,
    dietary_characteristics: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RepresentativeDish {
    name: String,
    description: String,
    key_ingredients: Vec<String>,
    difficulty: String,
    preparation_time: String,
    typical_occasions: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct CulturalContext {
    cultural_significance: String,
}

/// Cuisine description as the backend returns it
#[derive(Debug, Clone, Deserialize)]
pub struct BackendCuisine {
    cuisine_info: CuisineInfo,
    representative_dishes: Vec<RepresentativeDish>,
    cultural_context: CulturalContext,
}

/// A dish card on the explorer page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CuisineDish {
    pub id: String,
    pub name: String,
    pub origin: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time: String,
    pub cook_time: String,
    pub difficulty: String,
    pub tags: Vec<String>,
    pub image_url: String,
}

/// A cuisine card on the explorer page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cuisine {
    pub cuisine_name: String,
    pub region: String,
    pub description: String,
    pub key_ingredients: Vec<String>,
    pub key_spices: Vec<String>,
    pub popular_dishes: Vec<CuisineDish>,
    pub cultural_significance: String,
    pub history: String,
}

impl BackendCuisine {
    /// Reshape into a cuisine card; `region_query` is the region the user
    /// asked for and becomes the first tag of every dish.
    pub fn into_cuisine(self, region_query: &str) -> Cuisine {
        let info = self.cuisine_info;
        let popular_dishes = self
            .representative_dishes
            .iter()
            .enumerate()
            .map(|(index, dish)| dish.to_card(index, &info.region, region_query))
            .collect();

        Cuisine {
            cuisine_name: info.name.replacen(" Cuisine", "", 1),
            description: format!("{}. {}", info.flavor_profile, info.dietary_characteristics),
            key_ingredients: info.key_ingredients.iter().map(|i| capitalize(i)).collect(),
            key_spices: regional_spices(&info.region)
                .iter()
                .take(5)
                .map(ToString::to_string)
                .collect(),
            popular_dishes,
            cultural_significance: self.cultural_context.cultural_significance,
            history: info.historical_overview,
            region: info.region,
        }
    }
}

impl RepresentativeDish {
    fn to_card(&self, index: usize, origin: &str, region_query: &str) -> CuisineDish {
        let (prep_time, cook_time) = split_preparation_time(&self.preparation_time);
        let lowered = self.name.to_lowercase();

        CuisineDish {
            id: format!("{}-{}", slug(&lowered), index),
            name: self.name.clone(),
            origin: origin.to_string(),
            description: self.description.clone(),
            ingredients: self
                .key_ingredients
                .iter()
                .enumerate()
                .map(|(i, ingredient)| {
                    format!(
                        "{} {} {}",
                        QUANTITIES[i % QUANTITIES.len()],
                        PREPARATIONS[i % PREPARATIONS.len()],
                        ingredient
                    )
                })
                .collect(),
            instructions: instructions(&self.description, &self.key_ingredients, 4 + index % 3),
            prep_time,
            cook_time,
            difficulty: self.difficulty.to_lowercase(),
            tags: self.tags(&lowered, region_query),
            image_url: format!(
                "https://source.unsplash.com/random/300x200/?{}",
                urlencoding::encode(&lowered)
            ),
        }
    }

    /// Region, difficulty, occasion and food-type tags, padded to three
    /// and capped at five
    fn tags(&self, lowercase_name: &str, region_query: &str) -> Vec<String> {
        let mut tags: Vec<&str> = Vec::new();
        if !region_query.is_empty() {
            tags.push(region_query);
        }
        tags.push(&self.difficulty);

        if self.typical_occasions.contains("special occasions") {
            tags.push("Special Occasion");
        } else if self.typical_occasions.contains("everyday") {
            tags.push("Everyday");
        }

        for (keyword, extra) in FOOD_TYPE_TAGS {
            if lowercase_name.contains(keyword) {
                tags.extend(extra);
            }
        }

        for generic in GENERIC_TAGS {
            if tags.len() >= 3 {
                break;
            }
            if !tags.contains(&generic) {
                tags.push(generic);
            }
        }

        let mut seen = HashSet::new();
        tags.into_iter()
            .filter(|tag| seen.insert(*tag))
            .take(5)
            .map(ToString::to_string)
            .collect()
    }
}

fn slug(lowercase_name: &str) -> String {
    match WHITESPACE_RUN.as_ref() {
        Some(re) => re.replace_all(lowercase_name, "-").into_owned(),
        None => lowercase_name.to_string(),
    }
}

/// Between four and six steps built from the dish's ingredients and
/// description
fn instructions(description: &str, ingredients: &[String], count: usize) -> Vec<String> {
    let has = |name: &str| ingredients.iter().any(|i| i == name);
    let first: Vec<&str> = ingredients.iter().take(3).map(String::as_str).collect();

    let mut steps = vec![format!("Prepare all ingredients: {}, etc.", first.join(", "))];
    if has("pasta") || has("rice") {
        let grain = if has("pasta") { "pasta" } else { "rice" };
        steps.push(format!(
            "Cook the {} according to package instructions until al dente.",
            grain
        ));
    }
    if PROTEINS.iter().any(|protein| has(protein)) {
        steps.push("Season and cook the protein until properly done and set aside.".to_string());
    }
    if description.contains("sauce") {
        steps.push(
            "Prepare the sauce by combining the remaining ingredients and simmering until thickened."
                .to_string(),
        );
    }

    for step in GENERIC_STEPS {
        if steps.len() >= count {
            break;
        }
        steps.push(step.to_string());
    }
    steps
}

/// Split a total like "45 minutes" into a third prep and the rest cooking
fn split_preparation_time(preparation_time: &str) -> (String, String) {
    let total = FIRST_NUMBER
        .as_ref()
        .and_then(|re| re.find(preparation_time))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .unwrap_or(DEFAULT_TOTAL_MINUTES);

    let prep = (total + 1) / 3;
    (
        format!("{} minutes", prep),
        format!("{} minutes", total - prep),
    )
}

/// Signature spices by region; unknown regions get the Italian set
fn regional_spices(region: &str) -> &'static [&'static str] {
    match region {
        "Japan" => &["Wasabi", "Shiso", "Sansho Pepper", "Yuzu", "Ginger"],
        "India" => &[
            "Cumin",
            "Turmeric",
            "Cardamom",
            "Cinnamon",
            "Cloves",
            "Coriander",
            "Garam Masala",
        ],
        "Mexico" => &[
            "Cilantro",
            "Chili Powder",
            "Cumin",
            "Mexican Oregano",
            "Cinnamon",
            "Epazote",
        ],
        "Thailand" => &[
            "Lemongrass",
            "Galangal",
            "Thai Basil",
            "Kaffir Lime Leaves",
            "Turmeric",
        ],
        "China" => &[
            "Five Spice Powder",
            "Sichuan Pepper",
            "Star Anise",
            "Ginger",
            "Cinnamon",
        ],
        "France" => &["Herbes de Provence", "Tarragon", "Thyme", "Bay Leaf", "Sage"],
        "Mediterranean" => &["Oregano", "Rosemary", "Thyme", "Bay Leaf", "Mint"],
        _ => &[
            "Basil",
            "Oregano",
            "Rosemary",
            "Thyme",
            "Sage",
            "Red Pepper Flakes",
        ],
    }
}

/// Turn a backend explore answer into a response.
///
/// An error status serves the canned cuisine for `region`; any other
/// failure serves the canned cuisine for `fallback_region` with a 500.
fn explored(
    result: Result<Value, ProxyError>,
    region: Option<&str>,
    fallback_region: Option<&str>,
) -> Response {
    let reshaped = result.and_then(|data| {
        let backend: BackendCuisine = serde_json::from_value(data)?;
        Ok(backend.into_cuisine(region.unwrap_or_default()))
    });

    match reshaped {
        Ok(cuisine) => {
            info!("Explored cuisine {}", cuisine.cuisine_name);
            Json(cuisine).into_response()
        }
        Err(ProxyError::StatusError { status, .. }) => {
            warn!("Cuisine backend answered {}, serving mock cuisine", status);
            Json(mocks::cuisine(region)).into_response()
        }
        Err(e) => {
            error!("Error exploring cuisines: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(mocks::cuisine(fallback_region)),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ExploreQuery {
    pub region: Option<String>,
}

/// GET with `?region=` explores that region; without one it lists the
/// regions the backend knows.
pub async fn explore_region(
    State(state): State<AppState>,
    Query(query): Query<ExploreQuery>,
) -> Response {
    match query.region.as_deref().filter(|r| !r.is_empty()) {
        Some(region) => {
            let result = state
                .meal_prep
                .post_json(EXPLORE_PATH, &json!({ "region": region }))
                .await;
            explored(result, Some(region), Some(region))
        }
        None => match state.meal_prep.get_json(REGIONS_PATH).await {
            Ok(data) => Json(data).into_response(),
            Err(ProxyError::StatusError { status, .. }) => {
                warn!("Region list answered {}, serving mock cuisine", status);
                Json(mocks::cuisine(None)).into_response()
            }
            Err(e) => {
                error!("Error fetching cuisine data: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, Json(mocks::cuisine(None))).into_response()
            }
        },
    }
}

/// Forward the explore filters and reshape the answer
pub async fn explore(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            error!("Rejected request body: {}", rejection.body_text());
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(mocks::cuisine(None)))
                .into_response();
        }
    };

    let region = body
        .get("region")
        .and_then(Value::as_str)
        .filter(|r| !r.is_empty())
        .map(ToString::to_string);
    let result = state.meal_prep.post_json(EXPLORE_PATH, &body).await;
    explored(result, region.as_deref(), None)
}

/// GET `path` and hand the JSON back unchanged
async fn passthrough(
    upstream: &dyn Upstream,
    path: &str,
    what: &str,
) -> Result<Json<Value>, ApiError> {
    upstream
        .get_json(path)
        .await
        .map(Json)
        .map_err(|e| lookup_failure(what, e))
}

/// An error status keeps its code and the backend's `detail`; anything
/// else, including an error body that is not JSON, is a 500.
fn lookup_failure(what: &str, error: ProxyError) -> ApiError {
    if let ProxyError::StatusError { status, body } = &error {
        if let Ok(data) = serde_json::from_str::<Value>(body) {
            let detail = data
                .get("detail")
                .filter(|d| !d.is_null() && d.as_str() != Some(""))
                .cloned()
                .unwrap_or_else(|| json!(format!("Failed to fetch {}", what)));
            let status = StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY);
            warn!("Fetching {} answered {}", what, status);
            return ApiError::new(status, json!({ "detail": detail }));
        }
    }

    error!("Error in fetching {}: {}", what, error);
    ApiError::new(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "detail": format!("An error occurred while fetching {}", what) }),
    )
}

pub async fn regions(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    passthrough(state.primary.as_ref(), REGIONS_PATH, "cuisine regions").await
}

pub async fn techniques(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    passthrough(
        state.meal_prep.as_ref(),
        "/global-cuisine/techniques",
        "cooking techniques",
    )
    .await
}

pub async fn ingredient_map(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    passthrough(
        state.primary.as_ref(),
        "/global-cuisine/ingredient-map",
        "ingredient map",
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend() -> BackendCuisine {
        serde_json::from_value(json!({
            "cuisine_info": {
                "name": "Japanese Cuisine",
                "region": "Japan",
                "countries": ["Japan"],
                "key_ingredients": ["rice", "miso", "nori"],
                "flavor_profile": "Umami-rich and delicate",
                "historical_overview": "Shaped by centuries of isolation.",
                "dietary_characteristics": "Rice and seafood at the center"
            },
            "representative_dishes": [
                {
                    "name": "Chicken  Teriyaki",
                    "description": "Glazed chicken in a sweet soy sauce",
                    "key_ingredients": ["chicken", "soy sauce", "mirin", "rice"],
                    "difficulty": "Easy",
                    "preparation_time": "About 45 minutes",
                    "typical_occasions": "everyday family dinners"
                },
                {
                    "name": "Miso Soup",
                    "description": "Light broth",
                    "key_ingredients": ["miso"],
                    "difficulty": "Easy",
                    "preparation_time": "quick",
                    "typical_occasions": "special occasions"
                }
            ],
            "cultural_context": { "cultural_significance": "Seasonality matters." },
            "techniques": []
        }))
        .unwrap()
    }

    #[test]
    fn test_cuisine_is_reshaped() {
        let cuisine = backend().into_cuisine("Japan");

        assert_eq!(cuisine.cuisine_name, "Japanese");
        assert_eq!(
            cuisine.description,
            "Umami-rich and delicate. Rice and seafood at the center"
        );
        assert_eq!(cuisine.key_ingredients, vec!["Rice", "Miso", "Nori"]);
        assert_eq!(
            cuisine.key_spices,
            vec!["Wasabi", "Shiso", "Sansho Pepper", "Yuzu", "Ginger"]
        );
        assert_eq!(cuisine.cultural_significance, "Seasonality matters.");
        assert_eq!(cuisine.history, "Shaped by centuries of isolation.");
    }

    #[test]
    fn test_dish_cards() {
        let cuisine = backend().into_cuisine("Japan");
        let teriyaki = &cuisine.popular_dishes[0];

        assert_eq!(teriyaki.id, "chicken-teriyaki-0");
        assert_eq!(teriyaki.origin, "Japan");
        assert_eq!(teriyaki.difficulty, "easy");
        assert_eq!(teriyaki.prep_time, "15 minutes");
        assert_eq!(teriyaki.cook_time, "30 minutes");
        assert_eq!(teriyaki.ingredients[0], "1 cup fresh chicken");
        assert_eq!(teriyaki.ingredients[3], "3 cloves diced rice");
        assert_eq!(
            teriyaki.instructions,
            vec![
                "Prepare all ingredients: chicken, soy sauce, mirin, etc.",
                "Cook the rice according to package instructions until al dente.",
                "Season and cook the protein until properly done and set aside.",
                "Prepare the sauce by combining the remaining ingredients and simmering until thickened.",
            ]
        );
        assert_eq!(teriyaki.tags, vec!["Japan", "Easy", "Everyday"]);
        assert_eq!(
            teriyaki.image_url,
            "https://source.unsplash.com/random/300x200/?chicken%20%20teriyaki"
        );

        let soup = &cuisine.popular_dishes[1];
        assert_eq!(soup.prep_time, "10 minutes");
        assert_eq!(soup.cook_time, "20 minutes");
        assert_eq!(soup.instructions.len(), 5);
        assert_eq!(
            soup.tags,
            vec!["Japan", "Easy", "Special Occasion", "Soup", "Comfort Food"]
        );
    }

    #[test]
    fn test_tags_are_padded_without_region() {
        let cuisine = backend().into_cuisine("");
        assert_eq!(
            cuisine.popular_dishes[0].tags,
            vec!["Easy", "Everyday", "Traditional"]
        );
    }

    #[test]
    fn test_unknown_region_uses_italian_spices() {
        assert_eq!(regional_spices("Atlantis")[0], "Basil");
        assert_eq!(regional_spices("India").len(), 7);
    }

    #[test]
    fn test_split_preparation_time() {
        assert_eq!(
            split_preparation_time("1 hour"),
            ("0 minutes".to_string(), "1 minutes".to_string())
        );
        assert_eq!(
            split_preparation_time("Ready in 50 min"),
            ("17 minutes".to_string(), "33 minutes".to_string())
        );
    }
}
