#![doc(test(attr(deny(warnings))))]

//! FoodSave keeps a household food inventory, flags items that are about to
//! expire, suggests recipes from what is on hand, and reports how much food,
//! money, and CO₂ the household has saved.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("FoodSave tracing initialized.");
    });
}
