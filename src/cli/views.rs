//! Plain-text renderings of the app's screens.
//!
//! Views return lines instead of printing so handlers decide how to emit them
//! and tests can assert on content without terminal styling.

use chrono::NaiveDate;

use crate::config::Config;
use crate::core::expiry::{self, Urgency};
use crate::core::services::{ImpactStats, Readiness, RecipeMatch};
use crate::domain::{FoodCategory, FoodItem};

const PROGRESS_WIDTH: usize = 20;

pub fn header(icon: &str, title: &str, tagline: &str) -> Vec<String> {
    vec![format!("{icon} {title}"), tagline.to_string()]
}

pub fn stats_strip(stats: &ImpactStats, config: &Config) -> String {
    format!(
        "{} Items Saved | {} {} Saved | {:.1} kg CO₂",
        stats.items_saved,
        whole_money(stats.money_saved),
        config.currency,
        stats.co2_saved_kg
    )
}

/// Money is shown in whole units with halves rounded up.
fn whole_money(amount: f64) -> f64 {
    amount.round()
}

pub fn food_card(position: usize, item: &FoodItem, today: NaiveDate) -> String {
    let days = expiry::days_left(item.expiry_date, today);
    let urgency = Urgency::classify(days);
    format!(
        "{:>2}. {} {} {} ({})",
        position,
        urgency.badge(),
        item.category.icon(),
        item.name,
        expiry::days_left_label(days)
    )
}

/// Home screen: "Use Today" urgent items, then the rest of the inventory.
/// Numbering runs across both sections so it matches `use`/`waste` references.
pub fn home(
    urgent: &[&FoodItem],
    fresh: &[&FoodItem],
    stats: &ImpactStats,
    config: &Config,
    today: NaiveDate,
) -> Vec<String> {
    let mut lines = header("🌱", "FoodSave", "Eat Smart. Waste Less.");
    lines.push(stats_strip(stats, config));

    if urgent.is_empty() && fresh.is_empty() {
        lines.push(String::new());
        lines.push("🌱 No food items yet".into());
        lines.push("Use `add` to log your first item".into());
        return lines;
    }

    let mut position = 0;
    if !urgent.is_empty() {
        lines.push(String::new());
        lines.push(format!("✨ Use Today ({})", urgent.len()));
        for item in urgent {
            position += 1;
            lines.push(food_card(position, item, today));
        }
    }
    if !fresh.is_empty() {
        lines.push(String::new());
        lines.push("Your Inventory".into());
        for item in fresh {
            position += 1;
            lines.push(food_card(position, item, today));
        }
    }
    lines
}

pub fn progress_bar(percent: u32) -> String {
    let filled = (percent.min(100) as usize * PROGRESS_WIDTH + 50) / 100;
    format!(
        "[{}{}] {}%",
        "█".repeat(filled),
        "░".repeat(PROGRESS_WIDTH - filled),
        percent
    )
}

pub fn recipe_card(position: usize, matched: &RecipeMatch) -> Vec<String> {
    let recipe = &matched.recipe;
    let mut title = format!(
        "{:>2}. {} {}  ⏱️ {} min • {}",
        position, recipe.emoji, recipe.name, recipe.time_minutes, recipe.difficulty
    );
    match matched.readiness() {
        Readiness::Ready => title.push_str("  ✓ Ready"),
        Readiness::Almost => title.push_str("  Almost there"),
        Readiness::Partial => {}
    }

    let mut availability = format!(
        "    You have {}/{} ingredients",
        matched.have_count, matched.total_required
    );
    if matched.has_expiring {
        availability.push_str("  ⚠️ Expiring");
    }

    vec![
        title,
        availability,
        format!("    {}", progress_bar(matched.match_percent)),
    ]
}

pub fn recipes(ranked: &[RecipeMatch]) -> Vec<String> {
    let mut lines = header("👨‍🍳", "Smart Recipes", "Cook what you have, waste less");
    if ranked.is_empty() {
        lines.push("No recipes available.".into());
        return lines;
    }
    for (index, matched) in ranked.iter().enumerate() {
        lines.push(String::new());
        lines.extend(recipe_card(index + 1, matched));
    }
    lines
}

pub fn recipe_detail(matched: &RecipeMatch) -> Vec<String> {
    let recipe = &matched.recipe;
    let mut lines = vec![
        format!("{} {}", recipe.emoji, recipe.name),
        format!("⏱️ {} min • {}", recipe.time_minutes, recipe.difficulty),
        String::new(),
        "Ingredients".into(),
    ];
    for available in &matched.available {
        let mut row = format!("  ✅ {}", available.ingredient.name);
        if available.expiring {
            row.push_str("  Use soon!");
        }
        lines.push(row);
    }
    for missing in &matched.missing {
        let mut row = format!("  ❌ {}", missing.name);
        if missing.optional {
            row.push_str(" (optional)");
        }
        lines.push(row);
    }

    lines.push(String::new());
    lines.push("Instructions".into());
    for (index, step) in recipe.steps.iter().enumerate() {
        lines.push(format!("  {}. {}", index + 1, step));
    }

    lines.push(String::new());
    lines.push("🌱 Environmental Impact".into());
    lines.push(format!(
        "Cooking this saves {} food items!",
        matched.available.len()
    ));
    lines
}

pub fn stats(stats: &ImpactStats, config: &Config) -> Vec<String> {
    vec![
        "Your Impact".into(),
        "See how you're helping the planet".into(),
        String::new(),
        format!("{}% Save Rate", stats.save_rate),
        format!("{} saved • {} wasted", stats.items_saved, stats.items_wasted),
        String::new(),
        format!("🍽️ {} Items Saved", stats.items_saved),
        format!(
            "💰 {} {} Money Saved",
            whole_money(stats.money_saved),
            config.currency
        ),
        format!("🌱 {:.1} kg CO₂ Avoided", stats.co2_saved_kg),
        format!("💧 {:.0} L Water Saved", stats.water_saved_l),
        String::new(),
        format!("🌱 You've saved {} meals this month!", stats.items_saved),
        format!(
            "That's equivalent to {} km not driven by car",
            stats.km_not_driven
        ),
    ]
}

pub fn categories() -> Vec<String> {
    FoodCategory::ALL
        .iter()
        .map(|category| format!("{} {}", category.icon(), category))
        .collect()
}
