pub mod constants;
pub mod generator;

pub use generator::{
    choose_exercises, clamp_workouts_per_week, focus_for_day, generate_plan, parse_plan_request,
    prescription, ExerciseRecord, Focus, PlanRequest, PlannedExercise, PlannedWorkout,
    WorkoutPlan,
};
