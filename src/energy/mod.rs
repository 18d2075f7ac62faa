pub mod calculations;
pub mod constants;

pub use calculations::{
    calculate_bmr, calculate_target_calories, calculate_tdee, estimate, estimate_from_labels,
    EnergyEstimate,
};
pub use constants::*;
