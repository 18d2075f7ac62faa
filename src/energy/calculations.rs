use serde::{Deserialize, Serialize};

use crate::energy::constants::*;
use crate::error::Result;
use crate::models::{ActivityLevel, Gender, Goal, Profile};

/// Derived daily energy figures for a profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyEstimate {
    /// Basal metabolic rate, unrounded (kcal/day).
    pub bmr: f64,
    /// Total daily energy expenditure, rounded (kcal/day).
    pub tdee: f64,
    /// Suggested daily intake for the goal, rounded (kcal/day).
    pub target_calories: f64,
}

impl EnergyEstimate {
    /// BMR as it is stored alongside a profile.
    pub fn bmr_rounded(&self) -> f64 {
        self.bmr.round()
    }
}

/// Basal metabolic rate in kcal/day.
pub fn calculate_bmr(gender: Gender, weight_kg: f64, height_cm: f64, age: f64) -> f64 {
    match gender {
        Gender::Male => {
            MALE_BMR_BASE + MALE_BMR_PER_KG * weight_kg + MALE_BMR_PER_CM * height_cm
                - MALE_BMR_PER_YEAR * age
        }
        Gender::Female => {
            FEMALE_BMR_BASE + FEMALE_BMR_PER_KG * weight_kg + FEMALE_BMR_PER_CM * height_cm
                - FEMALE_BMR_PER_YEAR * age
        }
        Gender::Other => OTHER_BMR_BASE + OTHER_BMR_PER_KG * weight_kg,
    }
}

/// TDEE: BMR scaled by the activity multiplier, rounded half away from zero.
pub fn calculate_tdee(bmr: f64, activity: ActivityLevel) -> f64 {
    (bmr * activity_multiplier(activity)).round()
}

/// Calorie target for a goal.
///
/// Weight loss never goes below `MIN_TARGET_CALORIES`.
pub fn calculate_target_calories(tdee: f64, goal: Goal) -> f64 {
    match goal {
        Goal::LoseWeight => (tdee - WEIGHT_LOSS_DEFICIT).round().max(MIN_TARGET_CALORIES),
        Goal::GainMuscle => (tdee + MUSCLE_GAIN_SURPLUS).round(),
        Goal::Maintain => tdee.round(),
    }
}

/// Run the whole BMR -> TDEE -> target chain.
pub fn estimate(
    gender: Gender,
    weight_kg: f64,
    height_cm: f64,
    age: f64,
    activity: ActivityLevel,
    goal: Goal,
) -> EnergyEstimate {
    let bmr = calculate_bmr(gender, weight_kg, height_cm, age);
    let tdee = calculate_tdee(bmr, activity);
    let target_calories = calculate_target_calories(tdee, goal);

    EnergyEstimate {
        bmr,
        tdee,
        target_calories,
    }
}

/// Same as [`estimate`], taking raw labels.
///
/// Gender and goal parse leniently; an unknown activity level is an error.
pub fn estimate_from_labels(
    gender: &str,
    weight_kg: f64,
    height_cm: f64,
    age: f64,
    activity: &str,
    goal: &str,
) -> Result<EnergyEstimate> {
    let activity: ActivityLevel = activity.parse()?;
    Ok(estimate(
        Gender::from_label(gender),
        weight_kg,
        height_cm,
        age,
        activity,
        Goal::from_label(goal),
    ))
}

impl Profile {
    pub fn estimate(&self) -> EnergyEstimate {
        estimate(
            self.gender,
            self.weight_kg,
            self.height_cm,
            self.age as f64,
            self.activity_level,
            self.goal,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FitError;

    #[test]
    fn test_bmr_male() {
        let bmr = calculate_bmr(Gender::Male, 80.0, 180.0, 30.0);
        assert_eq!(bmr, 88.36 + 13.4 * 80.0 + 4.8 * 180.0 - 5.7 * 30.0);
    }

    #[test]
    fn test_bmr_other_ignores_height_and_age() {
        let a = calculate_bmr(Gender::Other, 70.0, 175.0, 32.0);
        let b = calculate_bmr(Gender::Other, 70.0, 150.0, 60.0);
        assert_eq!(a, b);
        assert_eq!(a, 370.0 + 21.6 * 70.0);
    }

    #[test]
    fn test_tdee_rounds() {
        assert_eq!(calculate_tdee(1700.0, ActivityLevel::High), 2933.0);
        assert_eq!(calculate_tdee(1000.4, ActivityLevel::Low), 1200.0);
    }

    #[test]
    fn test_target_floor() {
        assert_eq!(calculate_target_calories(1000.0, Goal::LoseWeight), 1200.0);
        assert_eq!(calculate_target_calories(1700.0, Goal::LoseWeight), 1200.0);
        assert_eq!(calculate_target_calories(1701.0, Goal::LoseWeight), 1201.0);
    }

    #[test]
    fn test_estimate_chain() {
        let est = estimate(
            Gender::Female,
            65.0,
            170.0,
            28.0,
            ActivityLevel::Moderate,
            Goal::GainMuscle,
        );
        assert_eq!(est.tdee, calculate_tdee(est.bmr, ActivityLevel::Moderate));
        assert_eq!(est.target_calories, est.tdee + 300.0);
    }

    #[test]
    fn test_estimate_from_labels_rejects_unknown_activity() {
        let err = estimate_from_labels("male", 80.0, 180.0, 30.0, "extreme", "maintain")
            .unwrap_err();
        assert!(matches!(err, FitError::InvalidArgument(_)));
    }

    #[test]
    fn test_estimate_from_labels_lenient_gender() {
        let est = estimate_from_labels("robot", 70.0, 175.0, 32.0, "low", "whatever").unwrap();
        assert_eq!(est.bmr, 370.0 + 21.6 * 70.0);
        assert_eq!(est.target_calories, est.tdee);
    }
}
