//! Shared runtime state for CLI interactions and command execution.

use std::{env, sync::Arc};

use chrono::NaiveDate;
use dialoguer::theme::ColorfulTheme;

use crate::{
    cli::{commands, core::CommandError, output, registry::CommandRegistry},
    config::{Config, ConfigManager},
    core::{
        clock::{Clock, FixedClock, SystemClock},
        errors::CliError,
        services::ImpactFactors,
        PantryManager,
    },
    storage::JsonStorage,
    utils::paths::PathResolver,
};

/// Set to run commands from stdin without prompts.
pub const SCRIPT_ENV: &str = "FOODSAVE_CLI_SCRIPT";
/// Pins the clock to a `YYYY-MM-DD` date.
pub const TODAY_ENV: &str = "FOODSAVE_TODAY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub pantry: PantryManager,
    pub theme: ColorfulTheme,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub running: bool,
}

impl ShellContext {
    /// Builds a context from the environment: data directory, configuration, and clock.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let base = PathResolver::base_dir();
        let config_manager = ConfigManager::with_base_dir(base.clone())?;
        let config = config_manager.load()?;
        let storage = JsonStorage::new(Some(PathResolver::store_dir_in(&base)))?;
        let store = storage.root().display().to_string();
        let pantry = PantryManager::open(Box::new(storage), clock_from_env()?)?;
        tracing::info!(%store, ?mode, "shell context ready");
        Ok(Self::with_parts(mode, pantry, config_manager, config))
    }

    pub fn with_parts(
        mode: CliMode,
        pantry: PantryManager,
        config_manager: ConfigManager,
        config: Config,
    ) -> Self {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);
        output::set_preferences((&config).into());
        let pantry = pantry.with_factors(ImpactFactors::from(&config));

        Self {
            mode,
            registry,
            pantry,
            theme: ColorfulTheme::default(),
            config_manager,
            config,
            running: true,
        }
    }

    pub fn mode(&self) -> CliMode {
        self.mode
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn prompt(&self) -> String {
        let active = self.pantry.active_items().len();
        let urgent = self.pantry.urgent_items().len();
        if urgent > 0 {
            format!("foodsave [{active} items, {urgent} urgent]> ")
        } else {
            format!("foodsave [{active} items]> ")
        }
    }

    /// Writes the current configuration and re-applies it to output and stats.
    pub fn persist_config(&mut self) -> Result<(), CommandError> {
        self.config_manager.save(&self.config)?;
        output::set_preferences((&self.config).into());
        self.pantry.set_factors(ImpactFactors::from(&self.config));
        Ok(())
    }
}

fn clock_from_env() -> Result<Arc<dyn Clock>, CliError> {
    match env::var(TODAY_ENV) {
        Ok(raw) if !raw.trim().is_empty() => {
            let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
                CliError::Input(format!("{TODAY_ENV} must be YYYY-MM-DD, got `{raw}`"))
            })?;
            Ok(Arc::new(FixedClock::new(date)))
        }
        _ => Ok(Arc::new(SystemClock)),
    }
}
