//! Starter data written to an empty store.

use chrono::NaiveDate;

use super::{
    category::FoodCategory,
    food_item::FoodItem,
    recipe::{Difficulty, Recipe, RecipeIngredient},
};

pub fn food_items() -> Vec<FoodItem> {
    [
        ("Milk", FoodCategory::Dairy, (2025, 5, 31), 12.0),
        ("Spinach", FoodCategory::Vegetables, (2025, 5, 28), 8.0),
        ("Chicken", FoodCategory::Meat, (2025, 5, 29), 35.0),
        ("Bread", FoodCategory::Grains, (2025, 6, 2), 10.0),
    ]
    .into_iter()
    .filter_map(|(name, category, (y, m, d), price)| {
        NaiveDate::from_ymd_opt(y, m, d).map(|date| FoodItem::new(name, category, date, price))
    })
    .collect()
}

pub fn recipes() -> Vec<Recipe> {
    vec![
        recipe(
            1,
            "Grilled Cheese",
            "🧀",
            10,
            vec![
                RecipeIngredient::required("Bread", FoodCategory::Grains),
                RecipeIngredient::required("Cheese", FoodCategory::Dairy),
            ],
            &[
                "Butter bread slices",
                "Add cheese between slices",
                "Grill until golden",
                "Serve hot",
            ],
        ),
        recipe(
            2,
            "Cheese Omelette",
            "🍳",
            8,
            vec![
                RecipeIngredient::required("Eggs", FoodCategory::Dairy),
                RecipeIngredient::required("Cheese", FoodCategory::Dairy),
            ],
            &[
                "Beat eggs",
                "Heat pan with oil",
                "Pour eggs and add cheese",
                "Fold and serve",
            ],
        ),
        recipe(
            3,
            "Veg Stir-Fry",
            "🥬",
            15,
            vec![RecipeIngredient::required(
                "Vegetables",
                FoodCategory::Vegetables,
            )],
            &[
                "Chop vegetables",
                "Heat oil in pan",
                "Stir-fry 5-7 minutes",
                "Season and serve",
            ],
        ),
        recipe(
            4,
            "Fruit Smoothie",
            "🍌",
            5,
            vec![
                RecipeIngredient::required("Banana", FoodCategory::Fruits),
                RecipeIngredient::optional("Milk", FoodCategory::Dairy),
            ],
            &[
                "Slice banana",
                "Add to blender with milk",
                "Blend until smooth",
                "Pour and enjoy",
            ],
        ),
    ]
}

fn recipe(
    id: u32,
    name: &str,
    emoji: &str,
    time_minutes: u32,
    ingredients: Vec<RecipeIngredient>,
    steps: &[&str],
) -> Recipe {
    Recipe {
        id,
        name: name.into(),
        emoji: emoji.into(),
        time_minutes,
        difficulty: Difficulty::Easy,
        ingredients,
        steps: steps.iter().map(|step| step.to_string()).collect(),
    }
}
