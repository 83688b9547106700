//! Read-only recipe definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::category::FoodCategory;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(label)
    }
}

/// One ingredient a recipe asks for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeIngredient {
    pub name: String,
    pub category: FoodCategory,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub optional: bool,
}

impl RecipeIngredient {
    pub fn required(name: impl Into<String>, category: FoodCategory) -> Self {
        Self {
            name: name.into(),
            category,
            optional: false,
        }
    }

    pub fn optional(name: impl Into<String>, category: FoodCategory) -> Self {
        Self {
            name: name.into(),
            category,
            optional: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub id: u32,
    pub name: String,
    pub emoji: String,
    pub time_minutes: u32,
    #[serde(default)]
    pub difficulty: Difficulty,
    pub ingredients: Vec<RecipeIngredient>,
    #[serde(default)]
    pub steps: Vec<String>,
}

impl Recipe {
    pub fn required_ingredients(&self) -> impl Iterator<Item = &RecipeIngredient> {
        self.ingredients.iter().filter(|ingredient| !ingredient.optional)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_flag_defaults_to_false() {
        let ingredient: RecipeIngredient =
            serde_json::from_str(r#"{"name":"Eggs","category":"dairy"}"#).unwrap();
        assert!(!ingredient.optional);
        let json = serde_json::to_string(&ingredient).unwrap();
        assert!(!json.contains("optional"));
    }

    #[test]
    fn required_ingredients_skip_optional() {
        let recipe = Recipe {
            id: 9,
            name: "Smoothie".into(),
            emoji: "🍌".into(),
            time_minutes: 5,
            difficulty: Difficulty::Easy,
            ingredients: vec![
                RecipeIngredient::required("Banana", FoodCategory::Fruits),
                RecipeIngredient::optional("Milk", FoodCategory::Dairy),
            ],
            steps: Vec::new(),
        };
        assert_eq!(recipe.required_ingredients().count(), 1);
    }
}
