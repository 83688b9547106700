pub mod inventory_service;
pub mod recipe_service;
pub mod stats_service;

pub use inventory_service::InventoryService;
pub use recipe_service::{MatchedIngredient, Readiness, RecipeMatch, RecipeService};
pub use stats_service::{ImpactFactors, ImpactStats, StatsService};

use crate::core::errors::FoodError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Food(#[from] FoodError),
    #[error("{0}")]
    Invalid(String),
}

impl From<ServiceError> for FoodError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Food(inner) => inner,
            ServiceError::Invalid(message) => FoodError::InvalidInput(message),
        }
    }
}
