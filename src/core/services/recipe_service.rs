//! Matches recipes against the active inventory.

use std::collections::HashSet;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::core::{errors::FoodError, expiry};
use crate::domain::{FoodItem, Recipe, RecipeIngredient};

use super::{InventoryService, ServiceResult};

/// Match percentage at or above which a recipe counts as almost ready.
pub const ALMOST_READY_PERCENT: u32 = 70;

/// An ingredient satisfied by an inventory item.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedIngredient {
    pub ingredient: RecipeIngredient,
    pub food_id: Uuid,
    pub expiring: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    Ready,
    Almost,
    Partial,
}

impl Readiness {
    pub fn from_percent(percent: u32) -> Self {
        if percent >= 100 {
            Readiness::Ready
        } else if percent >= ALMOST_READY_PERCENT {
            Readiness::Almost
        } else {
            Readiness::Partial
        }
    }
}

/// Outcome of matching one recipe against the inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeMatch {
    pub recipe: Recipe,
    pub available: Vec<MatchedIngredient>,
    pub missing: Vec<RecipeIngredient>,
    pub have_count: usize,
    pub total_required: usize,
    pub match_percent: u32,
    pub has_expiring: bool,
}

impl RecipeMatch {
    pub fn readiness(&self) -> Readiness {
        Readiness::from_percent(self.match_percent)
    }

    /// Distinct inventory items this recipe would consume, in ingredient order.
    pub fn food_ids(&self) -> Vec<Uuid> {
        let mut seen = HashSet::new();
        self.available
            .iter()
            .map(|matched| matched.food_id)
            .filter(|id| seen.insert(*id))
            .collect()
    }
}

pub struct RecipeService;

impl RecipeService {
    /// An ingredient is satisfied by the first active item whose name contains the
    /// ingredient name (case-insensitive) or that shares the ingredient's category.
    pub fn match_recipe(recipe: &Recipe, items: &[FoodItem], today: NaiveDate) -> RecipeMatch {
        let active = InventoryService::active(items);
        let mut available = Vec::new();
        let mut missing = Vec::new();

        for ingredient in &recipe.ingredients {
            let needle = ingredient.name.to_lowercase();
            let found = active.iter().find(|food| {
                food.name.to_lowercase().contains(&needle) || food.category == ingredient.category
            });
            match found {
                Some(food) => available.push(MatchedIngredient {
                    ingredient: ingredient.clone(),
                    food_id: food.id,
                    expiring: expiry::is_urgent(expiry::days_left(food.expiry_date, today)),
                }),
                None => missing.push(ingredient.clone()),
            }
        }

        let have_count = available.len();
        let total_required = recipe.required_ingredients().count();
        let match_percent = match_percent(have_count, recipe.ingredients.len());
        let has_expiring = available.iter().any(|matched| matched.expiring);

        RecipeMatch {
            recipe: recipe.clone(),
            available,
            missing,
            have_count,
            total_required,
            match_percent,
            has_expiring,
        }
    }

    /// Matches every recipe and orders them by match percentage, best first.
    /// Recipes with equal percentages keep their original order.
    pub fn rank(recipes: &[Recipe], items: &[FoodItem], today: NaiveDate) -> Vec<RecipeMatch> {
        let mut matches: Vec<RecipeMatch> = recipes
            .iter()
            .map(|recipe| Self::match_recipe(recipe, items, today))
            .collect();
        matches.sort_by(|a, b| b.match_percent.cmp(&a.match_percent));
        tracing::debug!(recipes = matches.len(), "recipes ranked");
        matches
    }

    /// Marks every item the match relies on as used. Returns how many items changed.
    pub fn cook(
        items: &mut [FoodItem],
        matched: &RecipeMatch,
        today: NaiveDate,
    ) -> ServiceResult<usize> {
        let ids = matched.food_ids();
        if ids.is_empty() {
            return Err(FoodError::InvalidInput(format!(
                "none of the ingredients for `{}` are in the inventory",
                matched.recipe.name
            ))
            .into());
        }
        for id in &ids {
            InventoryService::mark_used(items, *id, today)?;
        }
        tracing::info!(recipe = %matched.recipe.name, items = ids.len(), "recipe cooked");
        Ok(ids.len())
    }
}

/// `have / total` as a rounded percentage; a recipe without ingredients matches 0%.
pub fn match_percent(have: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((have as f64 / total as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{seed, FoodCategory, FoodStatus};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn item(name: &str, category: FoodCategory, expiry: NaiveDate) -> FoodItem {
        FoodItem::new(name, category, expiry, 10.0)
    }

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(match_percent(1, 3), 33);
        assert_eq!(match_percent(2, 3), 67);
        assert_eq!(match_percent(1, 2), 50);
        assert_eq!(match_percent(1, 8), 13);
        assert_eq!(match_percent(0, 0), 0);
        assert_eq!(match_percent(4, 4), 100);
    }

    #[test]
    fn matches_by_name_substring_case_insensitive() {
        let today = date(2025, 5, 1);
        let items = vec![item(
            "Sourdough BREAD",
            FoodCategory::Other,
            date(2025, 6, 1),
        )];
        let recipes = seed::recipes();
        let result = RecipeService::match_recipe(&recipes[0], &items, today);
        assert_eq!(result.have_count, 1);
        assert_eq!(result.available[0].ingredient.name, "Bread");
        assert_eq!(result.missing[0].name, "Cheese");
        assert_eq!(result.match_percent, 50);
        assert!(!result.has_expiring);
        assert_eq!(result.readiness(), Readiness::Partial);
    }

    #[test]
    fn matches_by_shared_category() {
        let today = date(2025, 5, 1);
        let items = vec![item("Yogurt", FoodCategory::Dairy, date(2025, 5, 2))];
        let recipes = seed::recipes();
        let omelette = RecipeService::match_recipe(&recipes[1], &items, today);
        assert_eq!(omelette.have_count, 2);
        assert_eq!(omelette.match_percent, 100);
        assert!(omelette.has_expiring);
        assert_eq!(omelette.readiness(), Readiness::Ready);
        assert_eq!(omelette.food_ids().len(), 1);
    }

    #[test]
    fn optional_ingredients_count_toward_have_but_not_required() {
        let today = date(2025, 5, 1);
        let items = vec![
            item("Banana", FoodCategory::Fruits, date(2025, 5, 10)),
            item("Milk", FoodCategory::Dairy, date(2025, 5, 10)),
        ];
        let smoothie = &seed::recipes()[3];
        let result = RecipeService::match_recipe(smoothie, &items, today);
        assert_eq!(result.have_count, 2);
        assert_eq!(result.total_required, 1);
        assert_eq!(result.match_percent, 100);
    }

    #[test]
    fn inactive_items_never_match() {
        let today = date(2025, 5, 1);
        let mut bread = item("Bread", FoodCategory::Grains, date(2025, 5, 10));
        bread.status = FoodStatus::Used;
        let result = RecipeService::match_recipe(&seed::recipes()[0], &[bread], today);
        assert_eq!(result.have_count, 0);
        assert_eq!(result.match_percent, 0);
    }

    #[test]
    fn ranking_is_descending_and_stable() {
        let today = date(2025, 5, 29);
        let items = seed::food_items();
        let ranked = RecipeService::rank(&seed::recipes(), &items, today);
        let order: Vec<(&str, u32)> = ranked
            .iter()
            .map(|m| (m.recipe.name.as_str(), m.match_percent))
            .collect();
        assert_eq!(
            order,
            vec![
                ("Grilled Cheese", 100),
                ("Cheese Omelette", 100),
                ("Veg Stir-Fry", 100),
                ("Fruit Smoothie", 50),
            ]
        );
        assert!(ranked[0].has_expiring);
    }

    #[test]
    fn ranking_moves_better_matches_ahead_of_seed_order() {
        let today = date(2025, 5, 29);
        let items = vec![item("Banana", FoodCategory::Fruits, date(2025, 6, 5))];
        let ranked = RecipeService::rank(&seed::recipes(), &items, today);
        let order: Vec<(&str, u32)> = ranked
            .iter()
            .map(|m| (m.recipe.name.as_str(), m.match_percent))
            .collect();
        assert_eq!(
            order,
            vec![
                ("Fruit Smoothie", 50),
                ("Grilled Cheese", 0),
                ("Cheese Omelette", 0),
                ("Veg Stir-Fry", 0),
            ]
        );
    }

    #[test]
    fn cook_marks_matched_items_used() {
        let today = date(2025, 5, 29);
        let mut items = seed::food_items();
        let grilled = RecipeService::match_recipe(&seed::recipes()[0], &items, today);
        let cooked = RecipeService::cook(&mut items, &grilled, today).unwrap();
        assert_eq!(cooked, 2);
        let used: Vec<&str> = InventoryService::used(&items)
            .iter()
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(used, vec!["Milk", "Bread"]);
        assert!(items
            .iter()
            .filter(|item| item.status == FoodStatus::Used)
            .all(|item| item.used_date == Some(today)));
    }

    #[test]
    fn cook_without_matches_is_rejected() {
        let today = date(2025, 5, 29);
        let mut items: Vec<FoodItem> = Vec::new();
        let nothing = RecipeService::match_recipe(&seed::recipes()[0], &items, today);
        assert!(RecipeService::cook(&mut items, &nothing, today).is_err());
    }
}
