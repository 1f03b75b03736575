use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::recipe::GenerateRecipeBody;
use super::{parse_body, AppState, GENERATE_PATH};
use crate::error::{ApiError, ProxyError};
use crate::parsers::{capitalize, extract_recipe, leading_integer, ExtractionProfile};

const FALLBACK_IMAGE: &str = "/images/generated/thai-italian-fusion.jpg";
const DEFAULT_PREP_MINUTES: u32 = 30;

/// Intensity of each basic taste, as set on the builder sliders
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlavorProfile {
    pub sweet: f64,
    pub salty: f64,
    pub sour: f64,
    pub spicy: f64,
    pub umami: f64,
    pub bitter: f64,
}

impl FlavorProfile {
    fn entries(&self) -> [(&'static str, f64); 6] {
        [
            ("sweet", self.sweet),
            ("salty", self.salty),
            ("sour", self.sour),
            ("spicy", self.spicy),
            ("umami", self.umami),
            ("bitter", self.bitter),
        ]
    }

    /// The three strongest flavors, e.g. "spicy, umami, sour forward".
    /// Ties keep declaration order.
    pub fn summary(&self) -> String {
        let mut entries = self.entries();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1));

        let top: Vec<&str> = entries.iter().take(3).map(|(name, _)| *name).collect();
        format!("{} forward", top.join(", "))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FusionPreferences {
    pub dietary_restrictions: Vec<String>,
    pub meal_type: Option<String>,
    pub complexity: String,
    pub prep_time: Option<u32>,
    pub servings: Option<u32>,
}

impl FusionPreferences {
    pub fn cooking_skill(&self) -> &'static str {
        match self.complexity.as_str() {
            "easy" => "beginner",
            "hard" => "advanced",
            _ => "intermediate",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FusionRequest {
    pub cuisines: Vec<String>,
    pub techniques: Vec<String>,
    pub flavor_profile: FlavorProfile,
    pub preferences: FusionPreferences,
}

impl FusionRequest {
    pub fn upstream_body(&self) -> GenerateRecipeBody {
        let prefs = &self.preferences;

        GenerateRecipeBody {
            ingredients: self.techniques.join(", "),
            cuisine1: self.primary().to_string(),
            cuisine2: self.secondary().to_string(),
            dietary_preference: prefs
                .dietary_restrictions
                .first()
                .cloned()
                .unwrap_or_else(|| "None".to_string()),
            is_premium: Some(true),
            serving_size: prefs.servings,
            cooking_skill: Some(prefs.cooking_skill().to_string()),
            flavor_profile: Some(self.flavor_profile),
            meal_type: prefs.meal_type.clone(),
            prep_time: prefs.prep_time,
        }
    }

    fn primary(&self) -> &str {
        self.cuisines.first().map(String::as_str).unwrap_or_default()
    }

    fn secondary(&self) -> &str {
        self.cuisines.get(1).map(String::as_str).unwrap_or_default()
    }

    fn description(&self) -> String {
        let featured: Vec<&str> = self.techniques.iter().take(2).map(String::as_str).collect();
        format!(
            "A fusion recipe combining {} and {} cuisines, featuring {} techniques.",
            self.primary(),
            self.secondary(),
            featured.join(" and ")
        )
    }

    fn cuisine_fusion(&self) -> CuisineFusion {
        CuisineFusion {
            primary: self.primary().to_string(),
            secondary: self.secondary().to_string(),
            techniques: self.techniques.iter().take(3).cloned().collect(),
            flavor_profile: self.flavor_profile.summary(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FusionNutrition {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CuisineFusion {
    pub primary: String,
    pub secondary: String,
    pub techniques: Vec<String>,
    pub flavor_profile: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FusionRecipe {
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub cooking_time: String,
    pub servings: Option<u32>,
    pub difficulty_level: String,
    pub nutritional_info: FusionNutrition,
    pub cuisine_fusion: CuisineFusion,
    pub image: String,
}

impl FusionRecipe {
    /// Shape a generator response for the fusion builder
    pub fn from_generated(request: &FusionRequest, data: &Value) -> Self {
        let markdown = data.get("recipe").and_then(Value::as_str).unwrap_or_default();
        let profile = ExtractionProfile::FUSION;
        let recipe = extract_recipe(markdown, &profile);

        let grams = |value: &str, fallback: &str| {
            leading_integer(value)
                .or_else(|| leading_integer(fallback))
                .unwrap_or_default()
        };

        FusionRecipe {
            name: recipe.title,
            description: request.description(),
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
            cooking_time: recipe.cook_time,
            servings: request.preferences.servings,
            difficulty_level: capitalize(&request.preferences.complexity),
            nutritional_info: FusionNutrition {
                calories: recipe.nutrition.calories,
                protein: grams(&recipe.nutrition.protein, profile.protein),
                carbs: grams(&recipe.nutrition.carbs, profile.carbs),
                fat: grams(&recipe.nutrition.fat, profile.fat),
            },
            cuisine_fusion: request.cuisine_fusion(),
            image: data
                .get("image_url")
                .and_then(Value::as_str)
                .filter(|url| !url.is_empty())
                .unwrap_or(FALLBACK_IMAGE)
                .to_string(),
        }
    }

    /// Canned linguine curry served when the generator is unreachable
    pub fn fallback(request: &FusionRequest) -> Self {
        let prep_time = request.preferences.prep_time.unwrap_or(DEFAULT_PREP_MINUTES);

        FusionRecipe {
            name: format!("{}-{} Fusion Recipe", request.primary(), request.secondary()),
            description: request.description(),
            ingredients: to_strings(&[
                "8 oz linguine pasta",
                "1 cup coconut milk",
                "2 tbsp red curry paste",
                "1/4 cup fresh basil, chopped",
                "1/4 cup fresh cilantro, chopped",
                "2 tbsp olive oil",
                "3 cloves garlic, minced",
                "1 red bell pepper, sliced thin",
                "1 cup cherry tomatoes, halved",
                "2 tbsp fish sauce (or soy sauce for vegetarian)",
                "1 lime, juiced",
                "1/4 cup grated Parmesan cheese",
            ]),
            instructions: to_strings(&[
                "Bring a large pot of salted water to a boil. Cook linguine according to package directions until al dente.",
                "While pasta cooks, heat olive oil in a large skillet over medium heat. Add garlic and sauté until fragrant.",
                "Add red bell pepper and cherry tomatoes, cooking until softened.",
                "Stir in red curry paste and cook for 1 minute until fragrant.",
                "Pour in coconut milk and bring to a simmer. Cook for 2-3 minutes until slightly thickened.",
                "Add drained pasta to the sauce, tossing to coat.",
                "Remove from heat and stir in fresh basil, cilantro, and half of the Parmesan cheese.",
                "Season with salt, pepper, and red pepper flakes to taste.",
                "Serve immediately, garnished with remaining Parmesan cheese.",
            ]),
            cooking_time: format!("{} minutes", prep_time),
            servings: request.preferences.servings,
            difficulty_level: capitalize(&request.preferences.complexity),
            nutritional_info: FusionNutrition {
                calories: 450,
                protein: 12,
                carbs: 58,
                fat: 18,
            },
            cuisine_fusion: request.cuisine_fusion(),
            image: FALLBACK_IMAGE.to_string(),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

pub async fn generate_fusion_recipe(
    State(state): State<AppState>,
    payload: Result<Json<FusionRequest>, JsonRejection>,
) -> Result<Json<FusionRecipe>, ApiError> {
    let request = parse_body(payload, |_| {
        ApiError::message(
            StatusCode::INTERNAL_SERVER_ERROR,
            "An error occurred while generating the fusion recipe",
        )
    })?;

    if request.cuisines.len() < 2 {
        return Err(ApiError::message(
            StatusCode::BAD_REQUEST,
            "At least 2 cuisines are required",
        ));
    }

    let body = request.upstream_body();
    info!("Building {}-{} fusion recipe", body.cuisine1, body.cuisine2);

    let result: Result<Value, ProxyError> = match body.to_value() {
        Ok(value) => state.fusion.post_json(GENERATE_PATH, &value).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(data) => Ok(Json(FusionRecipe::from_generated(&request, &data))),
        Err(e) => {
            warn!("Fusion generation failed, serving fallback recipe: {}", e);
            Ok(Json(FusionRecipe::fallback(&request)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request() -> FusionRequest {
        serde_json::from_value(json!({
            "cuisines": ["Thai", "Italian", "Mexican"],
            "techniques": ["Grilling", "Braising", "Pickling", "Smoking"],
            "flavorProfile": { "sweet": 2, "salty": 5, "sour": 5, "spicy": 8, "umami": 3, "bitter": 1 },
            "preferences": {
                "dietaryRestrictions": [],
                "mealType": "dinner",
                "complexity": "hard",
                "prepTime": 45,
                "servings": 2
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_flavor_summary_is_stable_on_ties() {
        assert_eq!(request().flavor_profile.summary(), "spicy, salty, sour forward");
        assert_eq!(
            FlavorProfile::default().summary(),
            "sweet, salty, sour forward"
        );
    }

    #[test]
    fn test_upstream_body() {
        let body = request().upstream_body();

        assert_eq!(body.ingredients, "Grilling, Braising, Pickling, Smoking");
        assert_eq!(body.cuisine1, "Thai");
        assert_eq!(body.cuisine2, "Italian");
        assert_eq!(body.dietary_preference, "None");
        assert_eq!(body.cooking_skill.as_deref(), Some("advanced"));
        assert_eq!(body.is_premium, Some(true));
        assert_eq!(body.prep_time, Some(45));
    }

    #[test]
    fn test_cooking_skill_mapping() {
        let mut prefs = FusionPreferences::default();
        assert_eq!(prefs.cooking_skill(), "intermediate");
        prefs.complexity = "easy".to_string();
        assert_eq!(prefs.cooking_skill(), "beginner");
    }

    #[test]
    fn test_from_generated_uses_fusion_defaults() {
        let recipe = FusionRecipe::from_generated(&request(), &json!({ "recipe": "" }));

        assert_eq!(recipe.name, "Fusion Recipe");
        assert_eq!(recipe.cooking_time, "30 minutes");
        assert_eq!(
            recipe.nutritional_info,
            FusionNutrition { calories: 400, protein: 15, carbs: 45, fat: 15 }
        );
        assert_eq!(recipe.difficulty_level, "Hard");
        assert_eq!(recipe.image, FALLBACK_IMAGE);
        assert_eq!(recipe.cuisine_fusion.techniques.len(), 3);
    }

    #[test]
    fn test_fallback() {
        let recipe = FusionRecipe::fallback(&request());

        assert_eq!(recipe.name, "Thai-Italian Fusion Recipe");
        assert_eq!(recipe.cooking_time, "45 minutes");
        assert_eq!(
            recipe.description,
            "A fusion recipe combining Thai and Italian cuisines, featuring Grilling and Braising techniques."
        );
        assert_eq!(recipe.ingredients.len(), 12);
        assert_eq!(recipe.instructions.len(), 9);
    }
}
