use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::energy::EnergyEstimate;
use crate::error::{FitError, Result};
use crate::ledger::parse_request;
use crate::models::{DailyLedger, LedgerRequest, Meal, Profile};
use crate::plan::ExerciseRecord;

/// A profile saved together with the energy figures derived from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub profile: Profile,
    pub bmr: f64,
    pub tdee: f64,
    pub target_calories: f64,
}

impl ProfileRecord {
    pub fn new(profile: Profile, energy: &EnergyEstimate) -> Self {
        Self {
            profile,
            bmr: energy.bmr_rounded(),
            tdee: energy.tdee,
            target_calories: energy.target_calories,
        }
    }
}

/// Load a day's meals from a JSON file.
///
/// Accepts either a bare meal array or a `{ meals, calories_burned }` object.
/// Malformed content is a `Validation` error, the same as on the endpoint.
pub fn load_meals<P: AsRef<Path>>(path: P) -> Result<LedgerRequest> {
    let content = fs::read(path)?;

    let is_array = content
        .iter()
        .find(|b| !b.is_ascii_whitespace())
        .is_some_and(|b| *b == b'[');

    if is_array {
        let meals: Vec<Meal> = serde_json::from_slice(&content)
            .map_err(|e| FitError::Validation(e.to_string()))?;
        return Ok(LedgerRequest {
            meals,
            calories_burned: None,
        });
    }

    parse_request(&content)
}

/// Load an exercise catalogue (a JSON array) for plan generation.
pub fn load_exercises<P: AsRef<Path>>(path: P) -> Result<Vec<ExerciseRecord>> {
    let content = fs::read(path)?;
    serde_json::from_slice(&content).map_err(|e| FitError::Validation(e.to_string()))
}

/// Save a profile record to a JSON file.
pub fn save_profile<P: AsRef<Path>>(path: P, record: &ProfileRecord) -> Result<()> {
    let json = serde_json::to_string_pretty(record)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load a profile record from a JSON file.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<ProfileRecord> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Export per-meal totals as CSV, one row per meal in ledger order.
pub fn write_meal_totals_csv<P: AsRef<Path>>(path: P, ledger: &DailyLedger) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["type", "time", "items", "calories", "protein", "carbs", "fats"])?;

    for entry in &ledger.meals {
        writer.write_record([
            entry.meal.kind.clone(),
            entry.meal.time.clone().unwrap_or_default(),
            entry.meal.items.len().to_string(),
            entry.totals.calories.to_string(),
            entry.totals.protein.to_string(),
            entry.totals.carbs.to_string(),
            entry.totals.fats.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, Gender, Goal, MealItem};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_meals_array() {
        let json = r#"[
            {"type": "breakfast", "time": "08:00", "items": [{"name": "Toast", "calories": 150}]}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let request = load_meals(file.path()).unwrap();
        assert_eq!(request.meals.len(), 1);
        assert_eq!(request.meals[0].time.as_deref(), Some("08:00"));
        assert_eq!(request.burned(), 0.0);
    }

    #[test]
    fn test_load_meals_object() {
        let json = r#"{"meals": [], "calories_burned": 420}"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let request = load_meals(file.path()).unwrap();
        assert!(request.meals.is_empty());
        assert_eq!(request.burned(), 420.0);
    }

    #[test]
    fn test_load_meals_malformed_is_validation() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"meals": [{"type": "lunch"}]}"#).unwrap();
        assert!(load_meals(file.path()).unwrap_err().is_validation());

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#" [{"type": "lunch", "items": [{"name": "x", "calories": "abc"}]}]"#)
            .unwrap();
        assert!(load_meals(file.path()).unwrap_err().is_validation());
    }

    #[test]
    fn test_load_exercises() {
        let json = r#"[
            {"id": "squat", "category": "lower body", "equipment": ["barbell"]},
            {"id": "burpee", "category": null, "equipment": null}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let exercises = load_exercises(file.path()).unwrap();
        assert_eq!(exercises.len(), 2);
        assert_eq!(exercises[1].category, None);
    }

    #[test]
    fn test_profile_roundtrip() {
        let profile = Profile {
            gender: Gender::Male,
            age: 30,
            height_cm: 180.0,
            weight_kg: 80.0,
            activity_level: ActivityLevel::Low,
            goal: Goal::LoseWeight,
        };
        let energy = profile.estimate();
        let record = ProfileRecord::new(profile.clone(), &energy);

        let file = NamedTempFile::new().unwrap();
        save_profile(file.path(), &record).unwrap();

        let reloaded = load_profile(file.path()).unwrap();
        assert_eq!(reloaded.profile, profile);
        assert_eq!(reloaded.bmr, energy.bmr.round());
        assert_eq!(reloaded.target_calories, energy.target_calories);
    }

    #[test]
    fn test_csv_export() {
        let meals = vec![Meal::new("snack", vec![MealItem::new("Nuts", 180.0)])];
        let ledger = crate::ledger::aggregate(&meals, 0.0).unwrap();

        let file = NamedTempFile::new().unwrap();
        write_meal_totals_csv(file.path(), &ledger).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("type,time,items,calories,protein,carbs,fats"));
        assert_eq!(lines.next(), Some("snack,,1,180,0,0,0"));
    }
}
