use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::error::{FitError, Result};

/// Gender used to pick a BMR formula.
///
/// Any label other than `male`/`female` parses to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    /// Lenient parse: unknown labels fall back to `Other`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "male" => Gender::Male,
            "female" => Gender::Female,
            _ => Gender::Other,
        }
    }
}

impl From<String> for Gender {
    fn from(label: String) -> Self {
        Gender::from_label(&label)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Habitual activity level, scales BMR into TDEE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 3] = [
        ActivityLevel::Low,
        ActivityLevel::Moderate,
        ActivityLevel::High,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Low => "low",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::High => "high",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = FitError;

    fn from_str(s: &str) -> Result<Self> {
        let label = s.trim().to_lowercase();
        if let Some(level) = Self::ALL.iter().find(|l| l.as_str() == label) {
            return Ok(*level);
        }

        // Suggest the closest known label, if any is close enough
        let suggestion = Self::ALL
            .iter()
            .map(|l| (l.as_str(), jaro_winkler(l.as_str(), &label)))
            .filter(|(_, score)| *score > 0.7)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

        let message = match suggestion {
            Some((name, _)) => format!("unknown activity level '{}' (did you mean '{}'?)", s, name),
            None => format!(
                "unknown activity level '{}' (expected one of: low, moderate, high)",
                s
            ),
        };
        Err(FitError::InvalidArgument(message))
    }
}

impl TryFrom<String> for ActivityLevel {
    type Error = FitError;

    fn try_from(label: String) -> Result<Self> {
        label.parse()
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body-composition goal that shifts the calorie target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Goal {
    LoseWeight,
    Maintain,
    GainMuscle,
}

impl Goal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::LoseWeight => "lose_weight",
            Goal::Maintain => "maintain",
            Goal::GainMuscle => "gain_muscle",
        }
    }

    /// Lenient parse: unknown labels are treated as `Maintain`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "lose_weight" => Goal::LoseWeight,
            "gain_muscle" => Goal::GainMuscle,
            _ => Goal::Maintain,
        }
    }
}

impl From<String> for Goal {
    fn from(label: String) -> Self {
        Goal::from_label(&label)
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const MIN_AGE: u32 = 10;
pub const MAX_AGE: u32 = 120;
pub const MIN_HEIGHT_CM: f64 = 100.0;
pub const MAX_HEIGHT_CM: f64 = 250.0;
pub const MIN_WEIGHT_KG: f64 = 30.0;
pub const MAX_WEIGHT_KG: f64 = 250.0;

/// Profile snapshot supplied fresh for every estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub gender: Gender,
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

impl Profile {
    /// Check the ranges accepted at onboarding.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(FitError::InvalidArgument(format!(
                "age must be between {} and {}, got {}",
                MIN_AGE, MAX_AGE, self.age
            )));
        }
        check_range("height_cm", self.height_cm, MIN_HEIGHT_CM, MAX_HEIGHT_CM)?;
        check_range("weight_kg", self.weight_kg, MIN_WEIGHT_KG, MAX_WEIGHT_KG)?;
        Ok(())
    }
}

fn check_range(field: &str, value: f64, min: f64, max: f64) -> Result<()> {
    if !value.is_finite() || value < min || value > max {
        return Err(FitError::InvalidArgument(format!(
            "{} must be between {} and {}, got {}",
            field, min, max, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> Profile {
        Profile {
            gender: Gender::Female,
            age: 28,
            height_cm: 170.0,
            weight_kg: 65.0,
            activity_level: ActivityLevel::Moderate,
            goal: Goal::Maintain,
        }
    }

    #[test]
    fn test_activity_level_parse() {
        assert_eq!("low".parse::<ActivityLevel>().unwrap(), ActivityLevel::Low);
        assert_eq!("HIGH".parse::<ActivityLevel>().unwrap(), ActivityLevel::High);
    }

    #[test]
    fn test_activity_level_unknown_suggests() {
        let err = "moderat".parse::<ActivityLevel>().unwrap_err();
        assert!(matches!(err, FitError::InvalidArgument(_)));
        assert!(err.to_string().contains("did you mean 'moderate'"));

        let err = "extreme".parse::<ActivityLevel>().unwrap_err();
        assert!(err.to_string().contains("expected one of"));
    }

    #[test]
    fn test_lenient_labels() {
        assert_eq!(Gender::from_label("Male"), Gender::Male);
        assert_eq!(Gender::from_label("nonbinary"), Gender::Other);
        assert_eq!(Goal::from_label("bulk"), Goal::Maintain);
        assert_eq!(Goal::from_label("gain_muscle"), Goal::GainMuscle);
    }

    #[test]
    fn test_profile_deserialize() {
        let json = r#"{"gender":"x","age":30,"height_cm":180,"weight_kg":80,
                       "activity_level":"high","goal":"lose_weight"}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.gender, Gender::Other);
        assert_eq!(profile.goal, Goal::LoseWeight);

        let bad = json.replace("\"high\"", "\"insane\"");
        assert!(serde_json::from_str::<Profile>(&bad).is_err());
    }

    #[test]
    fn test_profile_serializes_snake_case() {
        let mut profile = sample_profile();
        profile.goal = Goal::LoseWeight;
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"goal\":\"lose_weight\""));
        assert!(json.contains("\"gender\":\"female\""));
    }

    #[test]
    fn test_validate_ranges() {
        assert!(sample_profile().validate().is_ok());

        let mut young = sample_profile();
        young.age = 9;
        assert!(young.validate().is_err());

        let mut heavy = sample_profile();
        heavy.weight_kg = 251.0;
        assert!(heavy.validate().is_err());

        let mut short = sample_profile();
        short.height_cm = f64::NAN;
        assert!(short.validate().is_err());
    }
}
