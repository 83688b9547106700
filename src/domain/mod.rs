pub mod category;
pub mod food_item;
pub mod recipe;
pub mod seed;

pub use category::FoodCategory;
pub use food_item::{FoodItem, FoodItemDraft, FoodStatus, DEFAULT_PRICE};
pub use recipe::{Difficulty, Recipe, RecipeIngredient};
