mod routes;

pub use routes::{router, serve};

use chrono::{SecondsFormat, Utc};
use log::{error, info, warn};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

use crate::error::DishError;
use crate::model::{RestaurantDish, SavedTransformation};

const POPULAR_COUNT: usize = 3;

#[derive(Debug, Default)]
struct Dishes {
    dishes: Vec<RestaurantDish>,
    saved: Vec<SavedTransformation>,
}

/// Restaurant dishes backed by a JSON file, plus saved transformations
/// that only live in memory.
#[derive(Debug)]
pub struct DishStore {
    data_file: PathBuf,
    /// False when the data file exists but could not be loaded; it is then
    /// never written so its contents survive until someone repairs it
    persist: bool,
    inner: RwLock<Dishes>,
}

impl DishStore {
    pub fn new(data_file: impl Into<PathBuf>, dishes: Vec<RestaurantDish>) -> Self {
        Self {
            data_file: data_file.into(),
            persist: true,
            inner: RwLock::new(Dishes {
                dishes,
                saved: Vec::new(),
            }),
        }
    }

    /// Load dishes from `data_file`.
    ///
    /// A missing file is created holding `[]`. An unreadable or corrupt file
    /// is logged and left untouched: the store starts empty and later
    /// additions stay in memory only.
    pub async fn open(data_file: impl Into<PathBuf>) -> Self {
        let data_file = data_file.into();

        let (dishes, persist) = match read_dishes(&data_file).await {
            Ok(dishes) => {
                info!("Loaded {} dishes from {}", dishes.len(), data_file.display());
                (dishes, true)
            }
            Err(DishError::IoError(e)) if e.kind() == ErrorKind::NotFound => {
                match create_empty(&data_file).await {
                    Ok(()) => info!("Created empty data file {}", data_file.display()),
                    Err(e) => error!("Failed to create data file {}: {}", data_file.display(), e),
                }
                (Vec::new(), true)
            }
            Err(e) => {
                error!("Error loading dishes from {}: {}", data_file.display(), e);
                (Vec::new(), false)
            }
        };

        Self {
            persist,
            ..Self::new(data_file, dishes)
        }
    }

    /// Whether additions are written back to the data file
    pub fn persists(&self) -> bool {
        self.persist
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Dishes whose original or restaurant name contains `query`, ignoring
    /// case. No query matches everything.
    pub async fn search(&self, query: Option<&str>) -> Vec<RestaurantDish> {
        let inner = self.inner.read().await;

        match query.filter(|q| !q.is_empty()) {
            Some(query) => {
                let query = query.to_lowercase();
                inner
                    .dishes
                    .iter()
                    .filter(|dish| dish.matches(&query))
                    .cloned()
                    .collect()
            }
            None => inner.dishes.clone(),
        }
    }

    pub async fn popular(&self) -> Vec<RestaurantDish> {
        let inner = self.inner.read().await;
        inner.dishes.iter().take(POPULAR_COUNT).cloned().collect()
    }

    pub async fn get(&self, id: &str) -> Option<RestaurantDish> {
        let inner = self.inner.read().await;
        inner.dishes.iter().find(|dish| dish.id == id).cloned()
    }

    /// Assign the next id, append and persist the whole list.
    ///
    /// Write failures are logged; the dish stays in memory either way.
    pub async fn add(&self, mut dish: RestaurantDish) -> Result<RestaurantDish, DishError> {
        if dish.original_name.is_empty() || dish.restaurant_name.is_empty() {
            return Err(DishError::Invalid(
                "originalName and restaurantName are required",
            ));
        }

        let mut inner = self.inner.write().await;
        dish.id = format!("{:04}", inner.dishes.len() + 1);
        inner.dishes.push(dish.clone());
        info!("Added dish {} ({})", dish.id, dish.original_name);

        if !self.persist {
            warn!(
                "Not saving to {}: it could not be loaded at startup",
                self.data_file.display()
            );
            return Ok(dish);
        }

        match write_dishes(&self.data_file, &inner.dishes).await {
            Ok(()) => info!("Data saved to {}", self.data_file.display()),
            Err(e) => error!("Error saving dishes to {}: {}", self.data_file.display(), e),
        }

        Ok(dish)
    }

    pub async fn saved_transformations(&self) -> Vec<SavedTransformation> {
        self.inner.read().await.saved.clone()
    }

    /// Record that the transformation of `dish_id` was saved
    pub async fn save_transformation(
        &self,
        dish_id: &str,
    ) -> Result<SavedTransformation, DishError> {
        if dish_id.is_empty() {
            return Err(DishError::Invalid("dishId is required"));
        }

        let mut inner = self.inner.write().await;
        if !inner.dishes.iter().any(|dish| dish.id == dish_id) {
            return Err(DishError::NotFound);
        }

        let now = Utc::now();
        let saved = SavedTransformation {
            id: now.timestamp_millis().to_string(),
            dish_id: dish_id.to_string(),
            saved_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        inner.saved.push(saved.clone());

        Ok(saved)
    }
}

async fn read_dishes(path: &Path) -> Result<Vec<RestaurantDish>, DishError> {
    let data = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&data)?)
}

async fn write_dishes(path: &Path, dishes: &[RestaurantDish]) -> Result<(), DishError> {
    let json = serde_json::to_string_pretty(dishes)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}

async fn create_empty(path: &Path) -> Result<(), DishError> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(dir).await?;
    }
    write_dishes(path, &[]).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dish(original: &str, restaurant: &str) -> RestaurantDish {
        RestaurantDish {
            original_name: original.to_string(),
            restaurant_name: restaurant.to_string(),
            ..Default::default()
        }
    }

    fn store() -> DishStore {
        let mut tacos = dish("Fish Tacos", "Rubio's");
        tacos.id = "0001".to_string();
        let mut burger = dish("Big Mac", "McDonald's");
        burger.id = "0002".to_string();
        DishStore::new("unused.json", vec![tacos, burger])
    }

    #[tokio::test]
    async fn test_search_ignores_case() {
        let store = store();

        let hits = store.search(Some("MCDONALD")).await;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "0002");

        assert_eq!(store.search(Some("")).await.len(), 2);
        assert_eq!(store.search(None).await.len(), 2);
        assert!(store.search(Some("sushi")).await.is_empty());
    }

    #[tokio::test]
    async fn test_add_requires_names() {
        let store = store();

        let err = store.add(dish("Pad Thai", "")).await.unwrap_err();
        assert!(matches!(
            err,
            DishError::Invalid("originalName and restaurantName are required")
        ));
        assert_eq!(store.search(None).await.len(), 2);
    }

    #[tokio::test]
    async fn test_save_transformation() {
        let store = store();

        assert!(matches!(
            store.save_transformation("9999").await,
            Err(DishError::NotFound)
        ));
        assert!(matches!(
            store.save_transformation("").await,
            Err(DishError::Invalid("dishId is required"))
        ));

        let saved = store.save_transformation("0001").await.unwrap();
        assert_eq!(saved.dish_id, "0001");
        assert!(saved.saved_at.ends_with('Z'));
        assert_eq!(store.saved_transformations().await, vec![saved]);
    }

    #[test]
    fn test_extra_fields_round_trip() {
        let value = json!({
            "originalName": "Big Mac",
            "restaurantName": "McDonald's",
            "healthierVersion": { "calories": 420 }
        });
        let dish: RestaurantDish = serde_json::from_value(value).unwrap();

        assert_eq!(dish.extra["healthierVersion"]["calories"], 420);
        assert_eq!(
            serde_json::to_value(&dish).unwrap()["healthierVersion"],
            json!({ "calories": 420 })
        );
    }
}
