use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use super::scanner::{content_lines, Section, SectionScanner};
use crate::model::{Nutrition, ParsedRecipe};

/// Bold-labelled sections of a generated recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeSection {
    Title,
    Description,
    Ingredients,
    Instructions,
    CookingTime,
    Calories,
    Macronutrients,
    HealthScore,
}

const MARKERS: [(RecipeSection, &str); 8] = [
    (RecipeSection::Title, "**Recipe Name**:"),
    (RecipeSection::Description, "**Description**:"),
    (RecipeSection::Ingredients, "**Ingredients**:"),
    (RecipeSection::Instructions, "**Instructions**:"),
    (RecipeSection::CookingTime, "**Cooking Time**:"),
    (RecipeSection::Calories, "**Calories per Serving**:"),
    (RecipeSection::Macronutrients, "**Macronutrients**:"),
    (RecipeSection::HealthScore, "**Health Score**:"),
];

static NUMBERED_STEP: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^\d+\.\s*").ok());

// Matches: "- **Vegetables**: " group labels in front of ingredient lists
static LABELLED_BULLET: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^-\s*\*\*.*?\*\*:\s*").ok());

static BULLET: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^-\s*").ok());

static LEADING_INTEGER: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^\d+").ok());

/// How list sections are turned into items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyle {
    /// Keep bullet and number prefixes; only lines that look like list
    /// entries are kept
    Verbatim,
    /// Strip bullets, group labels and step numbers; keep every non-empty line
    Clean,
}

/// Fallback values for each field, used when its section is missing or empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionProfile {
    pub title: &'static str,
    pub description: &'static str,
    pub prep_time: &'static str,
    pub cook_time: &'static str,
    pub calories: u32,
    pub protein: &'static str,
    pub carbs: &'static str,
    pub fat: &'static str,
    pub health_score: &'static str,
    pub list_style: ListStyle,
}

impl ExtractionProfile {
    /// Defaults for the plain recipe generator
    pub const GENERATED: ExtractionProfile = ExtractionProfile {
        title: "Delicious Recipe",
        description: "",
        prep_time: "15 minutes",
        cook_time: "",
        calories: 0,
        protein: "",
        carbs: "",
        fat: "",
        health_score: "",
        list_style: ListStyle::Verbatim,
    };

    /// Defaults for the fusion builder
    pub const FUSION: ExtractionProfile = ExtractionProfile {
        title: "Fusion Recipe",
        description: "",
        prep_time: "15 minutes",
        cook_time: "30 minutes",
        calories: 400,
        protein: "15g",
        carbs: "45g",
        fat: "15g",
        health_score: "",
        list_style: ListStyle::Clean,
    };
}

impl Default for ExtractionProfile {
    fn default() -> Self {
        Self::GENERATED
    }
}

/// Extract a recipe from generated markdown.
///
/// Each field is resolved on its own: a missing or unparseable section
/// falls back to the profile's value without affecting the others. Prep
/// time is never read from the document.
pub fn extract_recipe(markdown: &str, profile: &ExtractionProfile) -> ParsedRecipe {
    let lines = content_lines(markdown);
    let sections = SectionScanner::new(&MARKERS).scan(&lines);
    let find = |kind: RecipeSection| sections.iter().find(|s| s.kind == kind);

    let inline_or = |kind: RecipeSection, fallback: &str| -> String {
        find(kind)
            .map(|s| s.inline)
            .filter(|text| !text.is_empty())
            .unwrap_or(fallback)
            .to_string()
    };

    let ingredients = find(RecipeSection::Ingredients)
        .map(|s| list_items(s, profile.list_style, is_ingredient_line, strip_ingredient))
        .unwrap_or_default();
    let instructions = find(RecipeSection::Instructions)
        .map(|s| list_items(s, profile.list_style, is_step_line, strip_step))
        .unwrap_or_default();

    let calories = find(RecipeSection::Calories)
        .and_then(|s| leading_integer(s.inline))
        .unwrap_or(profile.calories);

    // Without a macronutrient heading, look through the whole document
    let macro_lines: &[&str] = match find(RecipeSection::Macronutrients) {
        Some(section) => &section.body,
        None => &lines,
    };
    let nutrition = Nutrition {
        calories,
        protein: labelled_value(macro_lines, &["Protein:"]).unwrap_or(profile.protein).to_string(),
        carbs: labelled_value(macro_lines, &["Carbs:"]).unwrap_or(profile.carbs).to_string(),
        fat: labelled_value(macro_lines, &["Fats:", "Fat:"]).unwrap_or(profile.fat).to_string(),
    };

    let recipe = ParsedRecipe {
        title: inline_or(RecipeSection::Title, profile.title),
        description: inline_or(RecipeSection::Description, profile.description),
        ingredients,
        instructions,
        prep_time: profile.prep_time.to_string(),
        cook_time: inline_or(RecipeSection::CookingTime, profile.cook_time),
        nutrition,
        health_score: inline_or(RecipeSection::HealthScore, profile.health_score),
    };

    debug!(
        "Extracted recipe '{}': {} ingredients, {} steps",
        recipe.title,
        recipe.ingredients.len(),
        recipe.instructions.len()
    );

    recipe
}

fn list_items(
    section: &Section<'_, RecipeSection>,
    style: ListStyle,
    keep: fn(&str) -> bool,
    strip: fn(&str) -> String,
) -> Vec<String> {
    match style {
        ListStyle::Verbatim => section
            .body
            .iter()
            .filter(|line| keep(line))
            .map(|line| line.to_string())
            .collect(),
        ListStyle::Clean => section
            .body
            .iter()
            .map(|line| strip(line))
            .filter(|item| !item.is_empty())
            .collect(),
    }
}

fn is_ingredient_line(line: &str) -> bool {
    line.contains('-')
}

fn is_step_line(line: &str) -> bool {
    NUMBERED_STEP
        .as_ref()
        .is_some_and(|re| re.is_match(line))
}

fn strip_prefix_with(re: &LazyLock<Option<Regex>>, line: &str) -> String {
    match re.as_ref() {
        Some(re) => re.replace(line, "").to_string(),
        None => line.to_string(),
    }
}

fn strip_ingredient(line: &str) -> String {
    let without_label = strip_prefix_with(&LABELLED_BULLET, line);
    strip_prefix_with(&BULLET, &without_label).trim().to_string()
}

fn strip_step(line: &str) -> String {
    strip_prefix_with(&NUMBERED_STEP, line).trim().to_string()
}

/// Leading decimal digits of `text`, after any whitespace
pub fn leading_integer(text: &str) -> Option<u32> {
    LEADING_INTEGER
        .as_ref()
        .and_then(|re| re.find(text.trim_start()))
        .and_then(|m| m.as_str().parse().ok())
}

/// Text after the first of `labels` found in `lines`
fn labelled_value<'a>(lines: &[&'a str], labels: &[&str]) -> Option<&'a str> {
    labels.iter().find_map(|label| {
        lines.iter().copied().find_map(|line: &'a str| {
            line.find(label)
                .map(|at| line[at + label.len()..].trim())
                .filter(|value| !value.is_empty())
        })
    })
}
