pub mod clock;
pub mod errors;
pub mod expiry;
pub mod pantry_manager;
pub mod services;

pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{FoodError, Result};
pub use pantry_manager::PantryManager;
