use crate::plan::generator::Focus;

/// Focus rotation across the week, by workout index.
pub const FOCUS_ROTATION: [Focus; 4] = [
    Focus::FullBody,
    Focus::UpperBody,
    Focus::LowerBody,
    Focus::Conditioning,
];

pub const DEFAULT_WORKOUTS_PER_WEEK: i64 = 3;
pub const MIN_WORKOUTS_PER_WEEK: i64 = 1;
pub const MAX_WORKOUTS_PER_WEEK: i64 = 7;

/// Exercises picked for each workout.
pub const EXERCISES_PER_WORKOUT: usize = 4;

/// Equipment tag that is always usable.
pub const BODYWEIGHT: &str = "bodyweight";

// ─────────────────────────────────────────────────────────────────────────────
// Prescription
// ─────────────────────────────────────────────────────────────────────────────

pub const SETS: u32 = 3;

/// Strength reps start here and grow by one per exercise slot.
pub const BASE_REPS: u32 = 10;
pub const CONDITIONING_REPS: u32 = 12;

pub const REST_SECONDS: u32 = 75;
pub const CONDITIONING_REST_SECONDS: u32 = 45;

/// Goal recorded on a plan when the profile has none.
pub const DEFAULT_PLAN_GOAL: &str = "balanced";
