pub mod cli;
pub mod energy;
pub mod error;
pub mod interface;
pub mod ledger;
pub mod models;
pub mod plan;
pub mod server;
pub mod state;

pub use energy::{estimate, EnergyEstimate};
pub use error::{FitError, Result};
pub use ledger::aggregate;
pub use models::{DailyLedger, Meal, MealItem, Profile};
