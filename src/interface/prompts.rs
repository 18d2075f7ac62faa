use dialoguer::{Confirm, Input, Select};

use crate::error::{FitError, Result};
use crate::models::profile::{
    MAX_AGE, MAX_HEIGHT_CM, MAX_WEIGHT_KG, MIN_AGE, MIN_HEIGHT_CM, MIN_WEIGHT_KG,
};
use crate::models::{ActivityLevel, Gender, Goal, Profile};

/// Prompt for a number within `[min, max]`.
fn prompt_number(prompt: &str, default: &str, min: f64, max: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!("{} ({}-{})", prompt, min, max))
        .default(default.to_string())
        .interact_text()?;

    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| FitError::InvalidArgument(format!("'{}' is not a number", input)))?;

    if !(min..=max).contains(&value) {
        return Err(FitError::InvalidArgument(format!(
            "{} must be between {} and {}",
            prompt, min, max
        )));
    }

    Ok(value)
}

/// Prompt for age in whole years.
pub fn prompt_age() -> Result<u32> {
    let age = prompt_number("Age", "25", MIN_AGE as f64, MAX_AGE as f64)?;
    if age.fract() != 0.0 {
        return Err(FitError::InvalidArgument("Age must be a whole number".to_string()));
    }
    Ok(age as u32)
}

pub fn prompt_gender() -> Result<Gender> {
    let options = ["male", "female", "other"];
    let selection = Select::new()
        .with_prompt("Gender")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(Gender::from_label(options[selection]))
}

pub fn prompt_activity_level() -> Result<ActivityLevel> {
    let options: Vec<&str> = ActivityLevel::ALL.iter().map(|l| l.as_str()).collect();
    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&options)
        .default(1)
        .interact()?;

    Ok(ActivityLevel::ALL[selection])
}

pub fn prompt_goal() -> Result<Goal> {
    let goals = [Goal::LoseWeight, Goal::Maintain, Goal::GainMuscle];
    let options: Vec<&str> = goals.iter().map(|g| g.as_str()).collect();
    let selection = Select::new()
        .with_prompt("Goal")
        .items(&options)
        .default(1)
        .interact()?;

    Ok(goals[selection])
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect a full profile for onboarding.
pub fn collect_profile() -> Result<Profile> {
    let age = prompt_age()?;
    let gender = prompt_gender()?;
    let height_cm = prompt_number("Height (cm)", "170", MIN_HEIGHT_CM, MAX_HEIGHT_CM)?;
    let weight_kg = prompt_number("Weight (kg)", "70", MIN_WEIGHT_KG, MAX_WEIGHT_KG)?;
    let goal = prompt_goal()?;
    let activity_level = prompt_activity_level()?;

    let profile = Profile {
        gender,
        age,
        height_cm,
        weight_kg,
        activity_level,
        goal,
    };
    profile.validate()?;

    Ok(profile)
}
