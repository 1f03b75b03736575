mod meal_plan;
mod recipe;
pub mod scanner;

pub(crate) use meal_plan::capitalize;
pub use meal_plan::{ingredients_from_name, parse_meal_plan, MealSlot, GROCERY_MARKER};
pub use recipe::{extract_recipe, leading_integer, ExtractionProfile, ListStyle, RecipeSection};
