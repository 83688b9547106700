mod common;

use chrono::Duration;
use foodsave::{
    config::Config,
    core::{
        expiry::{days_left, Urgency},
        services::{ImpactFactors, Readiness},
    },
    domain::{FoodCategory, FoodItemDraft, FoodStatus},
    init,
    storage::{self, KeyValueStore, FOOD_ITEMS_KEY},
};

use common::{config_manager, open_pantry, temp_base, today};

#[test]
fn fresh_store_is_seeded_once() {
    init();
    let base = temp_base();
    let mut pantry = open_pantry(&base);
    assert_eq!(pantry.items().len(), 4);

    let spinach = pantry.items()[1].id;
    pantry.mark_used(spinach).unwrap();

    let reopened = open_pantry(&base);
    assert_eq!(reopened.items().len(), 4);
    assert_eq!(reopened.item(spinach).unwrap().status, FoodStatus::Used);
}

#[test]
fn urgency_drives_the_home_listing() {
    let base = temp_base();
    let mut pantry = open_pantry(&base);
    pantry
        .add_item(FoodItemDraft::new(
            "Strawberries",
            FoodCategory::Fruits,
            today() + Duration::days(1),
        ))
        .unwrap();

    let listing: Vec<(String, Urgency)> = pantry
        .home_listing()
        .into_iter()
        .map(|item| {
            (
                item.name.clone(),
                Urgency::classify(days_left(item.expiry_date, today())),
            )
        })
        .collect();
    assert_eq!(
        listing,
        vec![
            ("Spinach".to_string(), Urgency::Expiring),
            ("Chicken".to_string(), Urgency::Expiring),
            ("Strawberries".to_string(), Urgency::Soon),
            ("Milk".to_string(), Urgency::Soon),
            ("Bread".to_string(), Urgency::Fresh),
        ]
    );
}

#[test]
fn adding_fruit_makes_the_smoothie_ready() {
    let base = temp_base();
    let mut pantry = open_pantry(&base);
    let before = pantry.recipe_match(4).unwrap();
    assert_eq!(before.match_percent, 50);

    pantry
        .add_item(FoodItemDraft::new(
            "Banana",
            FoodCategory::Fruits,
            today() + Duration::days(5),
        ))
        .unwrap();
    let after = pantry.recipe_match(4).unwrap();
    assert_eq!(after.match_percent, 100);
    assert_eq!(after.readiness(), Readiness::Ready);
    assert!(after.missing.is_empty());
}

#[test]
fn configured_factors_change_stats() {
    let base = temp_base();
    let manager = config_manager(&base);
    let mut config = Config::default();
    config.set("co2_per_item_kg", "4").unwrap();
    config.set("default_price", "20").unwrap();
    manager.save(&config).unwrap();

    let loaded = manager.load().unwrap();
    let mut pantry = open_pantry(&base).with_factors(ImpactFactors::from(&loaded));
    let id = pantry
        .add_item(FoodItemDraft::new(
            "Leftovers",
            FoodCategory::Other,
            today(),
        ))
        .unwrap();
    pantry.mark_used(id).unwrap();

    let stats = pantry.stats();
    assert_eq!(stats.money_saved, 20.0);
    assert_eq!(stats.co2_saved_kg, 4.0);
    assert_eq!(stats.save_rate, 20);
}

#[test]
fn corrupt_items_file_is_reported() {
    let base = temp_base();
    drop(open_pantry(&base));
    let store = storage::JsonStorage::new(Some(base.join("store"))).unwrap();
    store.set(FOOD_ITEMS_KEY, "[{\"name\": 3}]").unwrap();

    let reopened = foodsave::core::PantryManager::open(
        Box::new(store),
        std::sync::Arc::new(foodsave::core::FixedClock::new(today())),
    );
    assert!(reopened.is_err());
}
