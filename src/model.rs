use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// One meal slot of a day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    pub recipe_link: String,
    pub ingredients: Vec<String>,
    pub prep_time: String,
    pub cook_time: String,
}

impl Default for Meal {
    /// Placeholder for a slot the document never filled
    fn default() -> Self {
        Meal {
            name: String::new(),
            recipe_link: "#".to_string(),
            ingredients: Vec::new(),
            prep_time: String::new(),
            cook_time: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub breakfast: Meal,
    pub lunch: Meal,
    pub dinner: Meal,
    pub snacks: Vec<Meal>,
}

/// Grocery categories in the order the document lists them.
///
/// Serializes as a JSON object whose keys keep that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroceryList {
    categories: Vec<(String, Vec<String>)>,
}

impl GroceryList {
    /// Start (or restart) a category; a repeated heading clears the
    /// earlier list but keeps its original position.
    pub fn start_category(&mut self, name: &str) -> usize {
        match self.categories.iter().position(|(n, _)| n == name) {
            Some(index) => {
                self.categories[index].1.clear();
                index
            }
            None => {
                self.categories.push((name.to_string(), Vec::new()));
                self.categories.len() - 1
            }
        }
    }

    pub fn push_item(&mut self, category: usize, item: String) {
        if let Some((_, items)) = self.categories.get_mut(category) {
            items.push(item);
        }
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, items)| items.as_slice())
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Serialize for GroceryList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for (name, items) in &self.categories {
            map.serialize_entry(name, items)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MealPlan {
    pub days: Vec<DayPlan>,
    pub grocery_list: GroceryList,
}

/// Macronutrient strings as written in the recipe, e.g. "25g"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Nutrition {
    pub calories: u32,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
}

/// A single recipe pulled out of generated markdown
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedRecipe {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time: String,
    pub cook_time: String,
    pub nutrition: Nutrition,
    pub health_score: String,
}

/// A restaurant dish and its transformations.
///
/// Only the names and id are interpreted; every other field is kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDish {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub original_name: String,
    #[serde(default)]
    pub restaurant_name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RestaurantDish {
    pub fn matches(&self, lowercase_query: &str) -> bool {
        self.original_name.to_lowercase().contains(lowercase_query)
            || self.restaurant_name.to_lowercase().contains(lowercase_query)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedTransformation {
    pub id: String,
    pub dish_id: String,
    pub saved_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_grocery_list_keeps_document_order() {
        let mut list = GroceryList::default();
        let produce = list.start_category("Produce");
        let pantry = list.start_category("Pantry");
        list.push_item(pantry, "Rice".to_string());
        list.push_item(produce, "Onions".to_string());

        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"{"Produce":["Onions"],"Pantry":["Rice"]}"#);
    }

    #[test]
    fn test_repeated_category_resets_in_place() {
        let mut list = GroceryList::default();
        let first = list.start_category("Produce");
        list.push_item(first, "Onions".to_string());
        list.start_category("Dairy");
        let again = list.start_category("Produce");

        assert_eq!(first, again);
        assert_eq!(list.get("Produce"), Some(&[][..]));
        assert_eq!(list.categories().collect::<Vec<_>>(), vec!["Produce", "Dairy"]);
    }

    #[test]
    fn test_restaurant_dish_round_trips_unknown_fields() {
        let value = json!({
            "id": "0001",
            "originalName": "Big Mac",
            "restaurantName": "McDonald's",
            "estimatedCalories": 550
        });
        let dish: RestaurantDish = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(dish.original_name, "Big Mac");
        assert_eq!(serde_json::to_value(&dish).unwrap(), value);
        assert!(dish.matches("mcdonald"));
        assert!(!dish.matches("burger king"));
    }
}
