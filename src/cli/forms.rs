//! Interactive prompts for the add-item form.

use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::cli::core::{parse_date, parse_price, CommandError};
use crate::domain::{FoodCategory, FoodItemDraft};

pub struct AddItemForm<'a> {
    theme: &'a ColorfulTheme,
}

impl<'a> AddItemForm<'a> {
    pub fn new(theme: &'a ColorfulTheme) -> Self {
        Self { theme }
    }

    pub fn run(&self) -> Result<FoodItemDraft, CommandError> {
        let name: String = Input::with_theme(self.theme)
            .with_prompt("Item name (e.g. Milk, Bread)")
            .validate_with(|value: &String| -> Result<(), &str> {
                if value.trim().is_empty() {
                    Err("name is required")
                } else {
                    Ok(())
                }
            })
            .interact_text()?;

        let labels: Vec<String> = FoodCategory::ALL
            .iter()
            .map(|category| format!("{} {}", category.icon(), category))
            .collect();
        let default_index = FoodCategory::ALL
            .iter()
            .position(|category| *category == FoodCategory::default())
            .unwrap_or(0);
        let choice = Select::with_theme(self.theme)
            .with_prompt("Category")
            .items(&labels)
            .default(default_index)
            .interact()?;
        let category = FoodCategory::ALL[choice];

        let expiry: String = Input::with_theme(self.theme)
            .with_prompt("Expiry date (YYYY-MM-DD)")
            .validate_with(|value: &String| -> Result<(), String> {
                parse_date(value).map(|_| ()).map_err(|err| err.to_string())
            })
            .interact_text()?;
        let expiry_date = parse_date(&expiry)?;

        let price: String = Input::with_theme(self.theme)
            .with_prompt("Price - optional")
            .allow_empty(true)
            .validate_with(|value: &String| -> Result<(), String> {
                parse_price(value).map(|_| ()).map_err(|err| err.to_string())
            })
            .interact_text()?;

        let mut draft = FoodItemDraft::new(name.trim(), category, expiry_date);
        if let Some(price) = parse_price(&price)? {
            draft = draft.with_price(price);
        }
        Ok(draft)
    }
}
