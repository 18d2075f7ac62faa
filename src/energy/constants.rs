use crate::models::ActivityLevel;

// ─────────────────────────────────────────────────────────────────────────────
// BMR coefficients (Harris-Benedict variant)
// ─────────────────────────────────────────────────────────────────────────────

pub const MALE_BMR_BASE: f64 = 88.36;
pub const MALE_BMR_PER_KG: f64 = 13.4;
pub const MALE_BMR_PER_CM: f64 = 4.8;
pub const MALE_BMR_PER_YEAR: f64 = 5.7;

pub const FEMALE_BMR_BASE: f64 = 447.6;
pub const FEMALE_BMR_PER_KG: f64 = 9.2;
pub const FEMALE_BMR_PER_CM: f64 = 3.1;
pub const FEMALE_BMR_PER_YEAR: f64 = 4.3;

/// Weight-only formula for any other gender; height and age are not used.
pub const OTHER_BMR_BASE: f64 = 370.0;
pub const OTHER_BMR_PER_KG: f64 = 21.6;

// ─────────────────────────────────────────────────────────────────────────────
// Activity multipliers
// ─────────────────────────────────────────────────────────────────────────────

pub const LOW_ACTIVITY_MULT: f64 = 1.2;
pub const MODERATE_ACTIVITY_MULT: f64 = 1.55;
pub const HIGH_ACTIVITY_MULT: f64 = 1.725;

// ─────────────────────────────────────────────────────────────────────────────
// Goal adjustments
// ─────────────────────────────────────────────────────────────────────────────

/// Daily deficit applied when losing weight.
pub const WEIGHT_LOSS_DEFICIT: f64 = 500.0;

/// Lowest target ever suggested for weight loss.
pub const MIN_TARGET_CALORIES: f64 = 1200.0;

/// Daily surplus applied when gaining muscle.
pub const MUSCLE_GAIN_SURPLUS: f64 = 300.0;

/// Get the TDEE multiplier for an activity level.
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Low => LOW_ACTIVITY_MULT,
        ActivityLevel::Moderate => MODERATE_ACTIVITY_MULT,
        ActivityLevel::High => HIGH_ACTIVITY_MULT,
    }
}
