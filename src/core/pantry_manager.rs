//! Owns the in-memory inventory and mirrors every change to the store.

use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::core::{
    clock::Clock,
    errors::{FoodError, Result},
    services::{
        ImpactFactors, ImpactStats, InventoryService, RecipeMatch, RecipeService, StatsService,
    },
};
use crate::domain::{seed, FoodItem, FoodItemDraft, Recipe};
use crate::storage::{self, KeyValueStore, FOOD_ITEMS_KEY, RECIPES_KEY};

/// Facade that coordinates inventory state, services, and persistence.
pub struct PantryManager {
    storage: Box<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    factors: ImpactFactors,
    items: Vec<FoodItem>,
    recipes: Vec<Recipe>,
}

impl PantryManager {
    /// Seeds missing keys with starter data, then loads both lists.
    pub fn open(store: Box<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Result<Self> {
        storage::seed_if_absent(store.as_ref(), FOOD_ITEMS_KEY, seed::food_items)?;
        storage::seed_if_absent(store.as_ref(), RECIPES_KEY, seed::recipes)?;
        let mut manager = Self {
            storage: store,
            clock,
            factors: ImpactFactors::default(),
            items: Vec::new(),
            recipes: Vec::new(),
        };
        manager.reload()?;
        Ok(manager)
    }

    pub fn reload(&mut self) -> Result<()> {
        self.items = storage::read_list(self.storage.as_ref(), FOOD_ITEMS_KEY)?;
        self.recipes = storage::read_list(self.storage.as_ref(), RECIPES_KEY)?;
        tracing::debug!(
            items = self.items.len(),
            recipes = self.recipes.len(),
            "pantry loaded"
        );
        Ok(())
    }

    pub fn with_factors(mut self, factors: ImpactFactors) -> Self {
        self.factors = factors;
        self
    }

    pub fn set_factors(&mut self, factors: ImpactFactors) {
        self.factors = factors;
    }

    pub fn factors(&self) -> &ImpactFactors {
        &self.factors
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn item(&self, id: Uuid) -> Option<&FoodItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn active_items(&self) -> Vec<&FoodItem> {
        InventoryService::active(&self.items)
    }

    pub fn urgent_items(&self) -> Vec<&FoodItem> {
        InventoryService::urgent(&self.items, self.today())
    }

    pub fn fresh_items(&self) -> Vec<&FoodItem> {
        InventoryService::fresh(&self.items, self.today())
    }

    pub fn home_listing(&self) -> Vec<&FoodItem> {
        InventoryService::home_listing(&self.items, self.today())
    }

    pub fn add_item(&mut self, draft: FoodItemDraft) -> Result<Uuid> {
        let default_price = self.factors.default_price;
        self.mutate(|items| Ok(InventoryService::add(items, draft, default_price)?))
    }

    pub fn mark_used(&mut self, id: Uuid) -> Result<()> {
        let today = self.today();
        self.mutate(|items| Ok(InventoryService::mark_used(items, id, today)?))
    }

    pub fn mark_wasted(&mut self, id: Uuid) -> Result<()> {
        let today = self.today();
        self.mutate(|items| Ok(InventoryService::mark_wasted(items, id, today)?))
    }

    pub fn ranked_recipes(&self) -> Vec<RecipeMatch> {
        RecipeService::rank(&self.recipes, &self.items, self.today())
    }

    pub fn recipe_match(&self, recipe_id: u32) -> Result<RecipeMatch> {
        let recipe = self
            .recipes
            .iter()
            .find(|recipe| recipe.id == recipe_id)
            .ok_or_else(|| FoodError::RecipeNotFound(recipe_id.to_string()))?;
        Ok(RecipeService::match_recipe(recipe, &self.items, self.today()))
    }

    /// Marks every item the recipe currently matches as used. Returns how many changed.
    pub fn cook(&mut self, recipe_id: u32) -> Result<usize> {
        let matched = self.recipe_match(recipe_id)?;
        let today = self.today();
        self.mutate(|items| Ok(RecipeService::cook(items, &matched, today)?))
    }

    pub fn stats(&self) -> ImpactStats {
        StatsService::summarize(&self.items, &self.factors)
    }

    /// Applies `change` to a copy of the items and commits it only once it has been written.
    fn mutate<T, F>(&mut self, change: F) -> Result<T>
    where
        F: FnOnce(&mut Vec<FoodItem>) -> Result<T>,
    {
        let mut next = self.items.clone();
        let outcome = change(&mut next)?;
        storage::write_list(self.storage.as_ref(), FOOD_ITEMS_KEY, &next)?;
        self.items = next;
        Ok(outcome)
    }
}
