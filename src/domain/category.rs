//! Fixed set of food categories.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Categorises food items and recipe ingredients.
///
/// Values outside the known set deserialize as [`FoodCategory::Other`] so a
/// hand-edited store never fails to load over a category typo. The original
/// string is not kept: the next save writes `other`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    Dairy,
    Vegetables,
    Fruits,
    Meat,
    Seafood,
    Grains,
    Beverages,
    Snacks,
    Frozen,
    #[serde(other)]
    Other,
}

impl FoodCategory {
    pub const ALL: [FoodCategory; 10] = [
        FoodCategory::Dairy,
        FoodCategory::Vegetables,
        FoodCategory::Fruits,
        FoodCategory::Meat,
        FoodCategory::Seafood,
        FoodCategory::Grains,
        FoodCategory::Beverages,
        FoodCategory::Snacks,
        FoodCategory::Frozen,
        FoodCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodCategory::Dairy => "dairy",
            FoodCategory::Vegetables => "vegetables",
            FoodCategory::Fruits => "fruits",
            FoodCategory::Meat => "meat",
            FoodCategory::Seafood => "seafood",
            FoodCategory::Grains => "grains",
            FoodCategory::Beverages => "beverages",
            FoodCategory::Snacks => "snacks",
            FoodCategory::Frozen => "frozen",
            FoodCategory::Other => "other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            FoodCategory::Dairy => "🥛",
            FoodCategory::Vegetables => "🥬",
            FoodCategory::Fruits => "🍎",
            FoodCategory::Meat => "🥩",
            FoodCategory::Seafood => "🐟",
            FoodCategory::Grains => "🌾",
            FoodCategory::Beverages => "🥤",
            FoodCategory::Snacks => "🍪",
            FoodCategory::Frozen => "🧊",
            FoodCategory::Other => "📦",
        }
    }
}

impl Default for FoodCategory {
    fn default() -> Self {
        FoodCategory::Vegetables
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category `{0}`")]
pub struct UnknownCategory(pub String);

impl FromStr for FoodCategory {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        FoodCategory::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| UnknownCategory(value.trim().to_string()))
    }
}
