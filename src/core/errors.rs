use std::result::Result as StdResult;

use thiserror::Error;

use crate::domain::category::UnknownCategory;

/// Unified error type for core/domain/storage layers.
#[derive(Error, Debug)]
pub enum FoodError {
    #[error("Food item not found: {0}")]
    ItemNotFound(String),
    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = StdResult<T, FoodError>;

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] FoodError),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("Command failed: {0}")]
    Command(String),
}

impl From<std::io::Error> for FoodError {
    fn from(err: std::io::Error) -> Self {
        FoodError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for FoodError {
    fn from(err: serde_json::Error) -> Self {
        FoodError::StorageError(err.to_string())
    }
}

impl From<UnknownCategory> for FoodError {
    fn from(err: UnknownCategory) -> Self {
        FoodError::InvalidInput(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Core(FoodError::from(err))
    }
}

impl From<rustyline::error::ReadlineError> for CliError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        CliError::Command(err.to_string())
    }
}

impl From<dialoguer::Error> for CliError {
    fn from(err: dialoguer::Error) -> Self {
        CliError::Input(err.to_string())
    }
}
