//! Domain types representing logged food items.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::category::FoodCategory;

/// Price assumed for an item logged without one.
pub const DEFAULT_PRICE: f64 = 15.0;

/// Lifecycle of a food item. Items are never deleted, only moved out of `Active`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FoodStatus {
    #[default]
    Active,
    Used,
    Wasted,
}

impl fmt::Display for FoodStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FoodStatus::Active => "active",
            FoodStatus::Used => "used",
            FoodStatus::Wasted => "wasted",
        };
        f.write_str(label)
    }
}

/// A perishable item in the household inventory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodItem {
    pub id: Uuid,
    pub name: String,
    pub category: FoodCategory,
    pub expiry_date: NaiveDate,
    #[serde(default)]
    pub status: FoodStatus,
    #[serde(default)]
    pub estimated_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_date: Option<NaiveDate>,
}

impl FoodItem {
    pub fn new(
        name: impl Into<String>,
        category: FoodCategory,
        expiry_date: NaiveDate,
        estimated_price: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category,
            expiry_date,
            status: FoodStatus::Active,
            estimated_price,
            used_date: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == FoodStatus::Active
    }

    /// Price used for savings figures; zero or unset prices fall back to `default_price`.
    pub fn effective_price(&self, default_price: f64) -> f64 {
        if self.estimated_price > 0.0 {
            self.estimated_price
        } else {
            default_price
        }
    }

    pub(crate) fn retire(&mut self, status: FoodStatus, on: NaiveDate) {
        self.status = status;
        self.used_date = Some(on);
    }
}

/// User input for a new item before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodItemDraft {
    pub name: String,
    pub category: FoodCategory,
    pub expiry_date: NaiveDate,
    pub estimated_price: Option<f64>,
}

impl FoodItemDraft {
    pub fn new(name: impl Into<String>, category: FoodCategory, expiry_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            category,
            expiry_date,
            estimated_price: None,
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.estimated_price = Some(price);
        self
    }
}
