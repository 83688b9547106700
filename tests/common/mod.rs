#![allow(dead_code)]

use std::{path::PathBuf, sync::Arc, sync::Mutex};

use chrono::NaiveDate;
use foodsave::{
    config::ConfigManager,
    core::{FixedClock, PantryManager},
    storage::JsonStorage,
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub const TODAY: &str = "2025-05-29";

pub fn today() -> NaiveDate {
    NaiveDate::parse_from_str(TODAY, "%Y-%m-%d").expect("valid test date")
}

/// Creates a unique data directory that outlives the calling test.
pub fn temp_base() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Opens a pantry over a JSON store in `base`, pinned to [`TODAY`].
pub fn open_pantry(base: &PathBuf) -> PantryManager {
    let storage = JsonStorage::new(Some(base.join("store"))).expect("create json storage");
    PantryManager::open(Box::new(storage), Arc::new(FixedClock::new(today())))
        .expect("open pantry")
}

pub fn config_manager(base: &PathBuf) -> ConfigManager {
    ConfigManager::with_base_dir(base.clone()).expect("create config manager")
}

/// Script-mode invocation of the binary against `base`.
pub fn script_command(base: &PathBuf) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("foodsave").expect("binary built");
    cmd.env("FOODSAVE_HOME", base)
        .env("FOODSAVE_CLI_SCRIPT", "1")
        .env("FOODSAVE_TODAY", TODAY)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}
