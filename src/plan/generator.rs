use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FitError, Result};
use crate::plan::constants::*;

/// Training focus of a single workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Focus {
    #[serde(rename = "full body")]
    FullBody,
    #[serde(rename = "upper body")]
    UpperBody,
    #[serde(rename = "lower body")]
    LowerBody,
    #[serde(rename = "conditioning")]
    Conditioning,
}

impl Focus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Focus::FullBody => "full body",
            Focus::UpperBody => "upper body",
            Focus::LowerBody => "lower body",
            Focus::Conditioning => "conditioning",
        }
    }

    /// Whether an exercise category fits this focus. Full body takes anything.
    fn accepts(&self, category: Option<&str>) -> bool {
        match self {
            Focus::FullBody => true,
            Focus::UpperBody => category.is_some_and(|c| c.contains("upper")),
            Focus::LowerBody => category.is_some_and(|c| c.contains("lower")),
            Focus::Conditioning => {
                category.is_some_and(|c| c.contains("cardio") || c.contains("conditioning"))
            }
        }
    }
}

impl fmt::Display for Focus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An exercise from the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseRecord {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub difficulty: Option<String>,

    #[serde(default)]
    pub equipment: Option<Vec<String>>,
}

impl ExerciseRecord {
    /// Usable with the given equipment, or needs none beyond bodyweight.
    ///
    /// An empty or missing equipment list means "anything goes".
    fn usable_with(&self, available: Option<&[String]>) -> bool {
        let Some(available) = available.filter(|a| !a.is_empty()) else {
            return true;
        };
        self.equipment.as_ref().is_some_and(|needed| {
            needed
                .iter()
                .any(|item| item == BODYWEIGHT || available.contains(item))
        })
    }
}

/// Inputs for generating a weekly plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    #[serde(default)]
    pub goal: Option<String>,

    #[serde(default)]
    pub workouts_per_week: Option<i64>,

    #[serde(default)]
    pub equipment: Option<Vec<String>>,

    #[serde(default)]
    pub exercises: Vec<ExerciseRecord>,
}

/// One exercise slot in a workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedExercise {
    pub exercise_id: String,
    pub sets: u32,
    pub reps: u32,
    pub rest_seconds: u32,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedWorkout {
    pub name: String,
    pub day_index: usize,
    pub focus: Focus,
    pub exercises: Vec<PlannedExercise>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub name: String,
    pub goal: String,
    pub workouts: Vec<PlannedWorkout>,
    /// Exercise slots across the whole week.
    pub exercise_count: usize,
}

/// Clamp the requested weekly frequency, defaulting to three.
pub fn clamp_workouts_per_week(requested: Option<i64>) -> usize {
    requested
        .unwrap_or(DEFAULT_WORKOUTS_PER_WEEK)
        .clamp(MIN_WORKOUTS_PER_WEEK, MAX_WORKOUTS_PER_WEEK) as usize
}

/// Focus for the workout at `day_index`.
pub fn focus_for_day(day_index: usize) -> Focus {
    FOCUS_ROTATION[day_index % FOCUS_ROTATION.len()]
}

/// Pick up to four exercises for a focus.
///
/// Falls back to the head of the catalogue when nothing matches.
pub fn choose_exercises<'a>(
    exercises: &'a [ExerciseRecord],
    equipment: Option<&[String]>,
    focus: Focus,
) -> Vec<&'a ExerciseRecord> {
    let filtered: Vec<&ExerciseRecord> = exercises
        .iter()
        .filter(|e| e.usable_with(equipment) && focus.accepts(e.category.as_deref()))
        .take(EXERCISES_PER_WORKOUT)
        .collect();

    if filtered.is_empty() {
        return exercises.iter().take(EXERCISES_PER_WORKOUT).collect();
    }

    filtered
}

/// Sets, reps and rest for the exercise in `slot` of a workout.
pub fn prescription(focus: Focus, slot: usize) -> (u32, u32, u32) {
    match focus {
        Focus::Conditioning => (SETS, CONDITIONING_REPS, CONDITIONING_REST_SECONDS),
        _ => (SETS, BASE_REPS + slot as u32, REST_SECONDS),
    }
}

/// Build a weekly plan from a profile's preferences and an exercise catalogue.
pub fn generate_plan(request: &PlanRequest) -> WorkoutPlan {
    let workouts_per_week = clamp_workouts_per_week(request.workouts_per_week);
    let equipment = request.equipment.as_deref();

    let workouts: Vec<PlannedWorkout> = (0..workouts_per_week)
        .map(|day_index| {
            let focus = focus_for_day(day_index);
            let exercises = choose_exercises(&request.exercises, equipment, focus)
                .into_iter()
                .enumerate()
                .map(|(slot, exercise)| {
                    let (sets, reps, rest_seconds) = prescription(focus, slot);
                    PlannedExercise {
                        exercise_id: exercise.id.clone(),
                        sets,
                        reps,
                        rest_seconds,
                        notes: focus.to_string(),
                    }
                })
                .collect();

            PlannedWorkout {
                name: format!("Workout {}", day_index + 1),
                day_index,
                focus,
                exercises,
            }
        })
        .collect();

    let exercise_count = workouts.iter().map(|w| w.exercises.len()).sum();
    let goal = request.goal.as_deref().filter(|g| !g.is_empty());

    WorkoutPlan {
        name: goal
            .map(|g| format!("Plan: {}", g))
            .unwrap_or_else(|| "Personal plan".to_string()),
        goal: goal.unwrap_or(DEFAULT_PLAN_GOAL).to_string(),
        workouts,
        exercise_count,
    }
}

/// Decode a plan request body; malformed JSON is a `Validation` error.
pub fn parse_plan_request(body: &[u8]) -> Result<PlanRequest> {
    serde_json::from_slice(body).map_err(|e| FitError::Validation(e.to_string()))
}
