//! Weekly lunchbox planner.
//!
//! Built locally from age-appropriate menus with each child's allergens
//! filtered out; no backend is involved.

use std::collections::HashSet;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use log::{error, info};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use super::parse_body;
use crate::error::ApiError;
use crate::model::GroceryList;

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const GENERATION_FAILED: &str = "Failed to generate lunchbox plan";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Child {
    pub name: String,
    pub age: u32,
    pub preferences: Vec<String>,
    pub allergies: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LunchboxRequest {
    pub children: Vec<Child>,
    pub days: Option<f64>,
}

impl LunchboxRequest {
    /// Number of days to plan, or None outside one to seven
    pub fn day_count(&self) -> Option<usize> {
        self.days
            .filter(|days| (1.0..=7.0).contains(days))
            .map(|days| days.ceil() as usize)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AgeGroup {
    Toddler,
    YoungChild,
    Preteen,
    Teen,
}

impl AgeGroup {
    fn of(age: u32) -> Option<Self> {
        match age {
            3..=5 => Some(AgeGroup::Toddler),
            6..=9 => Some(AgeGroup::YoungChild),
            10..=12 => Some(AgeGroup::Preteen),
            13.. => Some(AgeGroup::Teen),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct MenuItem {
    name: &'static str,
    description: String,
    calories: u32,
    allergens: &'static [&'static str],
    prep_time: &'static str,
}

fn item(
    name: &'static str,
    description: impl Into<String>,
    calories: u32,
    allergens: &'static [&'static str],
    prep_time: &'static str,
) -> MenuItem {
    MenuItem {
        name,
        description: description.into(),
        calories,
        allergens,
        prep_time,
    }
}

#[derive(Debug, Default)]
struct Menu {
    mains: Vec<MenuItem>,
    snacks: Vec<MenuItem>,
    fruits: Vec<MenuItem>,
    vegetables: Vec<MenuItem>,
    drinks: Vec<MenuItem>,
}

impl Menu {
    fn for_group(group: AgeGroup) -> Self {
        use AgeGroup::*;
        let toddler = group == Toddler;
        let young = group == YoungChild;
        let teen = group == Teen;
        // toddler, young child, older
        let by_age = |t: u32, y: u32, o: u32| match group {
            Toddler => t,
            YoungChild => y,
            Preteen | Teen => o,
        };
        let small = |yes: &'static str, no: &'static str| if toddler { yes } else { no };

        let mut menu = Menu::default();
        match group {
            Toddler => {
                menu.mains = vec![
                    item(
                        "PB&J Sandwich (Cut into Quarters)",
                        "Simple peanut butter and jelly sandwich cut into small, manageable pieces.",
                        280,
                        &["peanuts", "wheat"],
                        "3-5 mins",
                    ),
                    item(
                        "Cheese & Crackers Plate",
                        "Small cheese cubes with whole grain crackers.",
                        220,
                        &["dairy", "wheat"],
                        "2 mins",
                    ),
                    item(
                        "Mini Turkey Wrap",
                        "Small tortilla with turkey and mild cheese.",
                        240,
                        &["dairy", "wheat"],
                        "4 mins",
                    ),
                ];
                menu.snacks = vec![
                    item("Animal Crackers", "Fun animal-shaped crackers.", 120, &["wheat"], "1 min"),
                    item("Yogurt Tube", "Kid-friendly yogurt in a tube.", 90, &["dairy"], "1 min"),
                ];
            }
            YoungChild => {
                menu.mains = vec![
                    item(
                        "Turkey & Cheese Sandwich",
                        "Classic sandwich with lean turkey and cheese.",
                        320,
                        &["dairy", "wheat"],
                        "5 mins",
                    ),
                    item(
                        "Pasta Salad with Vegetables",
                        "Cold pasta with colorful vegetables and light dressing.",
                        290,
                        &["wheat"],
                        "10 mins (prep night before)",
                    ),
                    item(
                        "Quesadilla Triangles",
                        "Cheese quesadilla cut into triangles.",
                        310,
                        &["dairy", "wheat"],
                        "7 mins",
                    ),
                ];
            }
            Preteen | Teen => {
                menu.mains = vec![
                    item(
                        "Chicken Wrap with Veggies",
                        "Tortilla wrap with grilled chicken and fresh vegetables.",
                        380,
                        &["wheat"],
                        "8 mins",
                    ),
                    item(
                        "Tuna Sandwich on Whole Grain",
                        "Tuna mixed with light mayo on whole grain bread.",
                        340,
                        &["fish", "wheat", "eggs"],
                        "7 mins",
                    ),
                    item(
                        "Quinoa Salad with Beans",
                        "Protein-packed quinoa salad with beans and vegetables.",
                        if teen { 420 } else { 360 },
                        &[],
                        "15 mins (prep night before)",
                    ),
                ];
            }
        }

        if matches!(group, YoungChild | Preteen) {
            menu.snacks = vec![
                item(
                    "Granola Bar",
                    "Whole grain granola bar with light sweetness.",
                    140,
                    &["nuts", "wheat"],
                    "1 min",
                ),
                item("String Cheese", "Fun-to-eat string cheese stick.", 80, &["dairy"], "1 min"),
            ];
        }
        if teen {
            menu.snacks = vec![
                item(
                    "Trail Mix",
                    "Energy-boosting mix of nuts, seeds, and dried fruit.",
                    200,
                    &["nuts"],
                    "1 min",
                ),
                item(
                    "Protein Bar",
                    "Protein-rich bar to support active teens.",
                    220,
                    &["nuts", "soy"],
                    "1 min",
                ),
            ];
        }

        menu.fruits = vec![
            item(
                "Apple Slices",
                format!("{} sliced apple.", small("Thinly", "Medium")),
                by_age(40, 60, 80),
                &[],
                "2 mins",
            ),
            item(
                "Banana",
                format!("{} banana.", small("Half", "Whole")),
                by_age(45, 90, 105),
                &[],
                "1 min",
            ),
            item(
                "Berries Mix",
                format!(
                    "{} portion of mixed berries.",
                    if toddler { "Small" } else if young { "Medium" } else { "Large" }
                ),
                by_age(30, 50, 70),
                &[],
                "2 mins",
            ),
            item(
                "Orange Segments",
                format!(
                    "{} orange cut into easy-to-eat segments.",
                    small("Small", "Regular")
                ),
                by_age(35, 60, 80),
                &[],
                "3 mins",
            ),
            item(
                "Grapes",
                format!(
                    "{} grapes ({}).",
                    small("Cut in half", "Whole"),
                    small("cut for safety", "washed and ready to eat")
                ),
                by_age(30, 55, 75),
                &[],
                small("4 mins", "2 mins"),
            ),
        ];

        menu.vegetables = vec![
            item(
                "Carrot Sticks",
                small("Thin carrot sticks with dip.", "Regular carrot sticks."),
                if toddler { 25 } else { 35 },
                &[],
                "3 mins",
            ),
            item(
                "Cucumber Slices",
                format!("{} cucumber slices.", small("Thin", "Regular")),
                15,
                &[],
                "2 mins",
            ),
            item(
                "Cherry Tomatoes",
                format!("{} cherry tomatoes.", small("Cut in quarters", "Whole")),
                20,
                &[],
                small("3 mins", "1 min"),
            ),
            item(
                "Bell Pepper Strips",
                format!("{} bell pepper strips.", small("Thin", "Regular")),
                20,
                &[],
                "3 mins",
            ),
            item(
                "Edamame",
                format!("{} portion of edamame.", small("Small", "Regular")),
                if toddler { 50 } else { 90 },
                &["soy"],
                "2 mins",
            ),
        ];

        menu.drinks = vec![
            item("Water", "Hydrating water in a reusable bottle.", 0, &[], "1 min"),
            item(
                "Milk",
                format!(
                    "{} milk.",
                    if toddler { "Whole" } else if teen { "Low-fat" } else { "2%" }
                ),
                by_age(100, 90, 80),
                &["dairy"],
                "1 min",
            ),
        ];
        if !toddler {
            menu.drinks.push(item(
                "Fruit-Infused Water",
                "Water with a splash of natural fruit juice.",
                15,
                &[],
                "2 mins",
            ));
        }
        if matches!(group, Preteen | Teen) {
            menu.drinks.push(item(
                "Smoothie",
                "Fruit and yogurt smoothie in a thermos.",
                if teen { 180 } else { 150 },
                &["dairy"],
                "5 mins",
            ));
        }

        menu
    }

    /// Drop every item whose allergens overlap one of `allergies`, matching
    /// substrings either way and ignoring case
    fn without_allergens(mut self, allergies: &[String]) -> Self {
        let allergies: Vec<String> = allergies
            .iter()
            .map(|a| a.trim().to_lowercase())
            .filter(|a| !a.is_empty())
            .collect();
        if allergies.is_empty() {
            return self;
        }

        let safe = |item: &MenuItem| {
            !item.allergens.iter().any(|allergen| {
                let allergen = allergen.to_lowercase();
                allergies
                    .iter()
                    .any(|allergy| allergen.contains(allergy) || allergy.contains(&allergen))
            })
        };
        for items in [
            &mut self.mains,
            &mut self.snacks,
            &mut self.fruits,
            &mut self.vegetables,
            &mut self.drinks,
        ] {
            items.retain(|item| safe(item));
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NutritionalInfo {
    pub calories: u32,
    pub protein: &'static str,
    pub carbs: &'static str,
    pub fat: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LunchItem {
    pub name: String,
    pub description: String,
    pub nutritional_info: NutritionalInfo,
    pub allergens: Vec<String>,
    pub prep_time: String,
}

impl LunchItem {
    fn from_menu(item: &MenuItem, macros: (&'static str, &'static str, &'static str)) -> Self {
        let (protein, carbs, fat) = macros;
        LunchItem {
            name: item.name.to_string(),
            description: item.description.clone(),
            nutritional_info: NutritionalInfo {
                calories: item.calories,
                protein,
                carbs,
                fat,
            },
            allergens: item.allergens.iter().map(ToString::to_string).collect(),
            prep_time: item.prep_time.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lunch {
    pub main: LunchItem,
    pub fruit: LunchItem,
    pub vegetable: LunchItem,
    pub snack: LunchItem,
    pub drink: LunchItem,
}

/// Lunches keyed by weekday, serialized as an object in week order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyLunches(Vec<(&'static str, Lunch)>);

impl DailyLunches {
    pub fn get(&self, day: &str) -> Option<&Lunch> {
        self.0.iter().find(|(d, _)| *d == day).map(|(_, lunch)| lunch)
    }

    pub fn lunches(&self) -> impl Iterator<Item = &Lunch> {
        self.0.iter().map(|(_, lunch)| lunch)
    }
}

impl Serialize for DailyLunches {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (day, lunch) in &self.0 {
            map.serialize_entry(day, lunch)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChildPlan {
    pub child_name: String,
    pub age: u32,
    pub daily_lunches: DailyLunches,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LunchboxPlan {
    pub children: Vec<ChildPlan>,
    pub grocery_list: GroceryList,
}

/// Main-course macros by age
fn main_macros(age: u32) -> (&'static str, &'static str, &'static str) {
    match age {
        0..=5 => ("5-8g", "20-25g", "6-8g"),
        6..=10 => ("8-12g", "25-35g", "8-12g"),
        _ => ("12-20g", "35-50g", "12-18g"),
    }
}

fn drink_macros(name: &str) -> (&'static str, &'static str, &'static str) {
    match name {
        "Milk" => ("8g", "12g", "2-8g"),
        "Smoothie" => ("5g", "20g", "2g"),
        _ => ("0g", "0g", "0g"),
    }
}

/// Item for `day`; rotating by day means consecutive days never repeat
/// when there is more than one choice
fn pick<'a>(items: &'a [MenuItem], day: usize, offset: usize) -> Result<&'a MenuItem, String> {
    if items.is_empty() {
        return Err("no safe option left".to_string());
    }
    Ok(&items[(day + offset) % items.len()])
}

fn plan_child(child: &Child, offset: usize, days: usize) -> Result<ChildPlan, String> {
    let group = AgeGroup::of(child.age)
        .ok_or_else(|| format!("no menu for {} at age {}", child.name, child.age))?;
    let menu = Menu::for_group(group).without_allergens(&child.allergies);

    let mut lunches = Vec::with_capacity(days);
    for day in 0..days {
        let lunch = Lunch {
            main: LunchItem::from_menu(pick(&menu.mains, day, offset)?, main_macros(child.age)),
            fruit: LunchItem::from_menu(pick(&menu.fruits, day, offset)?, ("0-1g", "15-20g", "0g")),
            vegetable: LunchItem::from_menu(
                pick(&menu.vegetables, day, offset)?,
                ("1-2g", "5-8g", "0-1g"),
            ),
            snack: LunchItem::from_menu(pick(&menu.snacks, day, offset)?, ("2-5g", "10-15g", "3-7g")),
            drink: {
                let drink = pick(&menu.drinks, day, offset)?;
                LunchItem::from_menu(drink, drink_macros(drink.name))
            },
        };
        lunches.push((WEEKDAYS[day % WEEKDAYS.len()], lunch));
    }

    Ok(ChildPlan {
        child_name: child.name.clone(),
        age: child.age,
        daily_lunches: DailyLunches(lunches),
    })
}

/// Plan `days` lunches for every child and total up the shopping
pub fn plan_lunchboxes(children: &[Child], days: usize) -> Result<LunchboxPlan, String> {
    let children = children
        .iter()
        .enumerate()
        .map(|(offset, child)| plan_child(child, offset, days))
        .collect::<Result<Vec<_>, _>>()?;
    let grocery_list = shopping_list(&children);

    Ok(LunchboxPlan {
        children,
        grocery_list,
    })
}

struct GroceryRule {
    category: &'static str,
    triggers: &'static [&'static str],
    items: &'static [(&'static [&'static str], &'static str)],
}

/// Checked in order; an item lands in the first category one of whose
/// triggers appears in its name.
const GROCERY_RULES: &[GroceryRule] = &[
    GroceryRule {
        category: "Fruits",
        triggers: &["apple", "banana", "berries", "orange", "grapes"],
        items: &[
            (&["apple"], "Apples"),
            (&["banana"], "Bananas"),
            (&["berries"], "Mixed berries"),
            (&["orange"], "Oranges"),
            (&["grapes"], "Grapes"),
        ],
    },
    GroceryRule {
        category: "Vegetables",
        triggers: &["carrot", "cucumber", "tomato", "pepper", "edamame"],
        items: &[
            (&["carrot"], "Carrots"),
            (&["cucumber"], "Cucumbers"),
            (&["tomato"], "Cherry tomatoes"),
            (&["pepper"], "Bell peppers"),
            (&["edamame"], "Edamame"),
        ],
    },
    GroceryRule {
        category: "Proteins",
        triggers: &["turkey", "chicken", "tuna", "peanut butter", "pb&j", "beans"],
        items: &[
            (&["turkey"], "Turkey slices"),
            (&["chicken"], "Chicken breast"),
            (&["tuna"], "Canned tuna"),
            (&["peanut butter", "pb&j"], "Peanut butter"),
            (&["beans"], "Beans"),
        ],
    },
    GroceryRule {
        category: "Grains",
        triggers: &["sandwich", "bread", "wrap", "quesadilla", "pasta", "crackers", "quinoa"],
        items: &[
            (&["sandwich", "bread"], "Whole grain bread"),
            (&["wrap", "quesadilla"], "Tortillas/wraps"),
            (&["pasta"], "Pasta"),
            (&["crackers"], "Whole grain crackers"),
            (&["quinoa"], "Quinoa"),
        ],
    },
    GroceryRule {
        category: "Dairy",
        triggers: &["cheese", "yogurt", "milk"],
        items: &[
            (&["cheese"], "Cheese"),
            (&["yogurt"], "Yogurt"),
            (&["milk"], "Milk"),
        ],
    },
    GroceryRule {
        category: "Snacks",
        triggers: &["granola", "animal crackers", "trail mix", "protein bar"],
        items: &[
            (&["granola"], "Granola bars"),
            (&["animal crackers"], "Animal crackers"),
            (&["trail mix"], "Trail mix"),
            (&["protein bar"], "Protein bars"),
        ],
    },
    GroceryRule {
        category: "Drinks",
        triggers: &["water", "smoothie"],
        items: &[
            (&["fruit-infused"], "Fruit juice (for infusion)"),
            (&["smoothie"], "Smoothie ingredients"),
        ],
    },
];

const OTHER: &str = "Other";

/// Everything to buy for the planned lunches, grouped by aisle with empty
/// aisles left out
fn shopping_list(children: &[ChildPlan]) -> GroceryList {
    let mut aisles: Vec<(&str, Vec<String>)> = GROCERY_RULES
        .iter()
        .map(|rule| (rule.category, Vec::new()))
        .chain([(OTHER, Vec::new())])
        .collect();
    let other = aisles.len() - 1;
    let mut added: HashSet<String> = HashSet::new();

    let items = children
        .iter()
        .flat_map(|child| child.daily_lunches.lunches())
        .flat_map(|lunch| [&lunch.main, &lunch.fruit, &lunch.vegetable, &lunch.snack, &lunch.drink]);

    for item in items {
        let name = item.name.to_lowercase();
        let matched = GROCERY_RULES
            .iter()
            .position(|rule| rule.triggers.iter().any(|t| name.contains(t)));

        match matched {
            Some(index) => {
                for (keywords, grocery) in GROCERY_RULES[index].items {
                    if keywords.iter().any(|k| name.contains(k)) && added.insert(grocery.to_string()) {
                        aisles[index].1.push(grocery.to_string());
                    }
                }
            }
            None => {
                if added.insert(name) {
                    aisles[other].1.push(item.name.clone());
                }
            }
        }
    }

    let has = |grocery: &str| added.contains(grocery);
    let mut extras = Vec::new();
    if has("Peanut butter") {
        extras.push("Jelly/Jam");
    }
    if has("Canned tuna") {
        extras.push("Mayonnaise (light)");
    }
    extras.extend(["Reusable water bottles", "Lunch containers"]);
    aisles[other].1.extend(extras.into_iter().map(ToString::to_string));

    let mut list = GroceryList::default();
    for (aisle, groceries) in aisles.into_iter().filter(|(_, g)| !g.is_empty()) {
        let index = list.start_category(aisle);
        for grocery in groceries {
            list.push_item(index, grocery);
        }
    }
    list
}

pub async fn generate_lunchbox_plan(
    payload: Result<Json<LunchboxRequest>, JsonRejection>,
) -> Result<Json<LunchboxPlan>, ApiError> {
    info!("Lunchbox plan requested");
    let request = parse_body(payload, |_| {
        ApiError::message(StatusCode::INTERNAL_SERVER_ERROR, GENERATION_FAILED)
    })?;

    if request.children.is_empty() {
        return Err(ApiError::message(
            StatusCode::BAD_REQUEST,
            "At least one child must be specified",
        ));
    }
    let days = request.day_count().ok_or_else(|| {
        ApiError::message(StatusCode::BAD_REQUEST, "Days must be between 1 and 7")
    })?;

    let plan = plan_lunchboxes(&request.children, days).map_err(|e| {
        error!("Error generating lunchbox plan: {}", e);
        ApiError::message(StatusCode::INTERNAL_SERVER_ERROR, GENERATION_FAILED)
    })?;
    info!(
        "Lunchbox plan generated for {} children over {} days",
        plan.children.len(),
        days
    );
    Ok(Json(plan))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn child(name: &str, age: u32, allergies: &[&str]) -> Child {
        Child {
            name: name.to_string(),
            age,
            preferences: Vec::new(),
            allergies: allergies.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn test_age_groups() {
        assert_eq!(AgeGroup::of(2), None);
        assert_eq!(AgeGroup::of(3), Some(AgeGroup::Toddler));
        assert_eq!(AgeGroup::of(9), Some(AgeGroup::YoungChild));
        assert_eq!(AgeGroup::of(12), Some(AgeGroup::Preteen));
        assert_eq!(AgeGroup::of(17), Some(AgeGroup::Teen));
    }

    #[test]
    fn test_menus_follow_age() {
        let toddler = Menu::for_group(AgeGroup::Toddler);
        assert_eq!(toddler.drinks.len(), 2);
        assert_eq!(toddler.vegetables[0].description, "Thin carrot sticks with dip.");
        assert_eq!(toddler.fruits[4].prep_time, "4 mins");

        let teen = Menu::for_group(AgeGroup::Teen);
        assert_eq!(teen.mains[2].calories, 420);
        assert_eq!(teen.snacks[0].name, "Trail Mix");
        assert_eq!(teen.drinks.len(), 4);
        assert_eq!(teen.drinks[1].description, "Low-fat milk.");

        let preteen = Menu::for_group(AgeGroup::Preteen);
        assert_eq!(preteen.mains[2].calories, 360);
        assert_eq!(preteen.snacks[0].name, "Granola Bar");
        assert_eq!(preteen.fruits[2].description, "Large portion of mixed berries.");
    }

    #[test]
    fn test_allergens_match_either_way() {
        let menu = Menu::for_group(AgeGroup::Preteen).without_allergens(&["Fish".to_string()]);
        assert!(menu.mains.iter().all(|m| m.name != "Tuna Sandwich on Whole Grain"));

        // "nut" is inside "nuts"; "dairy products" contains "dairy"
        let menu = Menu::for_group(AgeGroup::YoungChild)
            .without_allergens(&["nut".to_string(), "Dairy Products".to_string()]);
        assert!(menu.snacks.is_empty());
        assert_eq!(menu.mains.len(), 1);
        assert!(menu.drinks.iter().all(|d| d.name != "Milk"));

        let menu = Menu::for_group(AgeGroup::Teen).without_allergens(&[" ".to_string()]);
        assert_eq!(menu.mains.len(), 3);
    }

    #[test]
    fn test_consecutive_mains_differ() {
        let plan = plan_lunchboxes(&[child("Ava", 8, &[])], 7).unwrap();
        let mains: Vec<&str> = plan.children[0]
            .daily_lunches
            .lunches()
            .map(|lunch| lunch.main.name.as_str())
            .collect();

        assert_eq!(mains.len(), 7);
        assert!(mains.windows(2).all(|pair| pair[0] != pair[1]));
    }

    #[test]
    fn test_single_safe_main_repeats() {
        // wheat rules out every main but the quinoa salad
        let plan = plan_lunchboxes(&[child("Leo", 11, &["wheat"])], 3).unwrap();
        let lunches = &plan.children[0].daily_lunches;

        for day in ["Monday", "Tuesday", "Wednesday"] {
            assert_eq!(lunches.get(day).unwrap().main.name, "Quinoa Salad with Beans");
        }
        assert!(lunches.get("Thursday").is_none());
    }

    #[test]
    fn test_macros() {
        let plan = plan_lunchboxes(&[child("Mia", 4, &[]), child("Sam", 10, &[])], 1).unwrap();
        let toddler = plan.children[0].daily_lunches.get("Monday").unwrap();
        let older = plan.children[1].daily_lunches.get("Monday").unwrap();

        assert_eq!(toddler.main.nutritional_info.protein, "5-8g");
        assert_eq!(older.main.nutritional_info.carbs, "25-35g");
        assert_eq!(toddler.fruit.nutritional_info.fat, "0g");
        assert_eq!(older.snack.nutritional_info.fat, "3-7g");
        assert_eq!(drink_macros("Milk"), ("8g", "12g", "2-8g"));
        assert_eq!(drink_macros("Water"), ("0g", "0g", "0g"));
    }

    #[test]
    fn test_no_menu_for_infants() {
        assert!(plan_lunchboxes(&[child("Baby", 2, &[])], 2).is_err());
    }

    #[test]
    fn test_shopping_list() {
        let plan = plan_lunchboxes(&[child("Mia", 4, &[]), child("Zoe", 14, &[])], 3).unwrap();
        let list = &plan.grocery_list;

        assert_eq!(
            list.get("Proteins"),
            Some(
                &[
                    "Peanut butter".to_string(),
                    "Turkey slices".to_string(),
                    "Canned tuna".to_string(),
                    "Beans".to_string(),
                    "Chicken breast".to_string()
                ][..]
            )
        );
        assert_eq!(list.get("Grains"), Some(&["Whole grain crackers".to_string()][..]));
        assert_eq!(
            list.get("Other"),
            Some(
                &[
                    "Jelly/Jam".to_string(),
                    "Mayonnaise (light)".to_string(),
                    "Reusable water bottles".to_string(),
                    "Lunch containers".to_string()
                ][..]
            )
        );
        let categories: Vec<&str> = list.categories().collect();
        assert_eq!(categories.first(), Some(&"Fruits"));
        assert_eq!(categories.last(), Some(&"Other"));
    }

    #[test]
    fn test_day_count() {
        let request = |days| LunchboxRequest {
            children: Vec::new(),
            days,
        };
        assert_eq!(request(Some(3.0)).day_count(), Some(3));
        assert_eq!(request(Some(2.5)).day_count(), Some(3));
        assert_eq!(request(Some(0.0)).day_count(), None);
        assert_eq!(request(Some(8.0)).day_count(), None);
        assert_eq!(request(None).day_count(), None);
    }
}
