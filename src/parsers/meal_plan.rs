use log::debug;

use super::scanner::{content_lines, ScanState};
use crate::model::{DayPlan, GroceryList, Meal, MealPlan};

/// Heading that separates the daily plan from the grocery list
pub const GROCERY_MARKER: &str = "# 🛒 Weekly Grocery List";
const DAY_PREFIX: &str = "# Day ";
const CATEGORY_PREFIX: &str = "## ";
const ITEM_PREFIX: &str = "- ";

const STOP_WORDS: [&str; 6] = ["with", "and", "the", "for", "from", "over"];
const PANTRY_STAPLES: [&str; 3] = ["Salt", "Pepper", "Olive oil"];

/// Which meal of the day subsequent names belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealSlot {
    const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snacks,
    ];

    fn heading(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "## 🍳 Breakfast",
            MealSlot::Lunch => "## 🥗 Lunch",
            MealSlot::Dinner => "## 🍲 Dinner",
            MealSlot::Snacks => "## 🍌 Snacks",
        }
    }

    fn from_heading(line: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|slot| line.starts_with(slot.heading()))
    }

    /// Fixed (prep, cook) times; the document never states them
    fn times(self) -> (&'static str, &'static str) {
        match self {
            MealSlot::Breakfast => ("5 mins", "10 mins"),
            MealSlot::Lunch | MealSlot::Dinner => ("10 mins", "20 mins"),
            MealSlot::Snacks => ("5 mins", "0 mins"),
        }
    }
}

/// Parse a generated markdown meal plan, keeping at most `requested_days` days.
///
/// Never fails: missing sections produce empty days or an empty grocery list.
pub fn parse_meal_plan(markdown: &str, requested_days: usize) -> MealPlan {
    let lines = content_lines(markdown);
    let grocery_start = lines.iter().position(|line| line.contains(GROCERY_MARKER));

    let grocery_list = grocery_start
        .map(|index| parse_grocery_list(&lines[index + 1..]))
        .unwrap_or_default();
    let days = parse_days(&lines[..grocery_start.unwrap_or(lines.len())], requested_days);

    debug!(
        "Parsed meal plan: {} days, {} grocery categories",
        days.len(),
        grocery_list.len()
    );

    MealPlan { days, grocery_list }
}

fn parse_grocery_list(lines: &[&str]) -> GroceryList {
    let mut list = GroceryList::default();
    let mut state = ScanState::Seeking;

    for line in lines {
        if let Some(heading) = line.strip_prefix(CATEGORY_PREFIX) {
            state = ScanState::InSection(list.start_category(heading.trim()));
        } else if let Some(item) = line.strip_prefix(ITEM_PREFIX) {
            if let ScanState::InSection(category) = state {
                list.push_item(category, item.trim().to_string());
            }
        }
    }

    list
}

fn parse_days(lines: &[&str], requested_days: usize) -> Vec<DayPlan> {
    let mut days: Vec<DayPlan> = Vec::new();
    // Counts every day heading, including the ones past `requested_days`
    let mut day: Option<usize> = None;
    let mut slot: Option<MealSlot> = None;

    for line in lines {
        if line.starts_with(DAY_PREFIX) {
            let next = day.map_or(0, |d| d + 1);
            day = Some(next);
            slot = None;
            if next < requested_days {
                days.push(DayPlan::default());
            }
            continue;
        }

        let Some(current) = day.filter(|d| *d < requested_days) else {
            continue;
        };

        if let Some(heading) = MealSlot::from_heading(line) {
            slot = Some(heading);
            continue;
        }

        let (Some(active), Some(name)) = (slot, meal_name(line)) else {
            continue;
        };
        let Some(plan) = days.get_mut(current) else {
            continue;
        };

        let meal = build_meal(name, active);
        match active {
            MealSlot::Breakfast => plan.breakfast = meal,
            MealSlot::Lunch => plan.lunch = meal,
            MealSlot::Dinner => plan.dinner = meal,
            MealSlot::Snacks => plan.snacks.push(meal),
        }
    }

    days
}

/// A `**bold**` line names a meal
fn meal_name(line: &str) -> Option<String> {
    if line.starts_with("**") && line.ends_with("**") {
        Some(line.replace("**", "").trim().to_string())
    } else {
        None
    }
}

fn build_meal(name: String, slot: MealSlot) -> Meal {
    let (prep_time, cook_time) = slot.times();
    Meal {
        ingredients: ingredients_from_name(&name),
        name,
        recipe_link: "#".to_string(),
        prep_time: prep_time.to_string(),
        cook_time: cook_time.to_string(),
    }
}

/// Guess ingredients from the words of a meal name.
///
/// Words longer than three UTF-16 code units that are not stop words
/// become capitalized pseudo-ingredients; salt, pepper and olive oil are
/// always appended. Length is counted the way the web frontend counts it,
/// so a two-emoji word is long enough.
pub fn ingredients_from_name(meal_name: &str) -> Vec<String> {
    let lowered = meal_name.to_lowercase();
    let mut ingredients: Vec<String> = lowered
        .split(' ')
        .filter(|word| word.encode_utf16().count() > 3 && !STOP_WORDS.contains(word))
        .map(capitalize)
        .collect();

    ingredients.extend(PANTRY_STAPLES.iter().map(|s| s.to_string()));
    ingredients
}

/// Upper-case the first character
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_breakfast() {
        let plan = parse_meal_plan("# Day 1\n## 🍳 Breakfast\n**Oatmeal Bowl**\n", 1);

        assert_eq!(plan.days.len(), 1);
        let breakfast = &plan.days[0].breakfast;
        assert_eq!(breakfast.name, "Oatmeal Bowl");
        assert_eq!(breakfast.prep_time, "5 mins");
        assert_eq!(breakfast.cook_time, "10 mins");
        assert_eq!(breakfast.recipe_link, "#");
        assert_eq!(
            breakfast.ingredients,
            vec!["Oatmeal", "Bowl", "Salt", "Pepper", "Olive oil"]
        );
        assert!(plan.grocery_list.is_empty());
    }

    #[test]
    fn test_slot_times() {
        assert_eq!(MealSlot::Lunch.times(), ("10 mins", "20 mins"));
        assert_eq!(MealSlot::Dinner.times(), ("10 mins", "20 mins"));
        assert_eq!(MealSlot::Snacks.times(), ("5 mins", "0 mins"));
    }

    #[test]
    fn test_ingredients_skip_short_and_stop_words() {
        assert_eq!(
            ingredients_from_name("Grilled Salmon with Rice and Peas over Kale"),
            vec!["Grilled", "Salmon", "Rice", "Peas", "Kale", "Salt", "Pepper", "Olive oil"]
        );
        assert_eq!(ingredients_from_name(""), vec!["Salt", "Pepper", "Olive oil"]);
    }

    #[test]
    fn test_word_length_counts_utf16_units() {
        // Each strawberry is two UTF-16 code units
        assert_eq!(
            ingredients_from_name("🍓🍓 Bowl"),
            vec!["🍓🍓", "Bowl", "Salt", "Pepper", "Olive oil"]
        );
        assert_eq!(
            ingredients_from_name("Crème Brûlée"),
            vec!["Crème", "Brûlée", "Salt", "Pepper", "Olive oil"]
        );
        assert_eq!(ingredients_from_name("🍓 Tea"), vec!["Salt", "Pepper", "Olive oil"]);
    }

    #[test]
    fn test_meal_line_needs_day_and_slot() {
        let plan = parse_meal_plan("**Orphan Meal**\n# Day 1\n**No Slot Yet**\n", 3);
        assert_eq!(plan.days.len(), 1);
        assert_eq!(plan.days[0], DayPlan::default());
    }

    #[test]
    fn test_unknown_heading_keeps_current_slot() {
        let plan = parse_meal_plan(
            "# Day 1\n## 🍲 Dinner\n## Notes\n**Beef Stew**\n",
            1,
        );
        assert_eq!(plan.days[0].dinner.name, "Beef Stew");
    }

    #[test]
    fn test_grocery_items_before_first_category_are_ignored() {
        let plan = parse_meal_plan(
            "# 🛒 Weekly Grocery List\n- stray\n## Produce\n-   Onions - 5 \n## Pantry\n- Rice\n",
            7,
        );
        assert_eq!(
            plan.grocery_list.categories().collect::<Vec<_>>(),
            vec!["Produce", "Pantry"]
        );
        assert_eq!(plan.grocery_list.get("Produce").unwrap(), ["Onions - 5"]);
        assert_eq!(plan.grocery_list.get("Pantry").unwrap(), ["Rice"]);
    }
}
