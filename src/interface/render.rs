use crate::energy::EnergyEstimate;
use crate::models::{DailyLedger, Profile};
use crate::plan::WorkoutPlan;

/// Display the energy figures for a profile.
pub fn display_estimate(profile: Option<&Profile>, estimate: &EnergyEstimate) {
    println!();
    println!("=== Energy Needs ===");
    println!();

    if let Some(p) = profile {
        println!(
            "Profile: {}, {} y, {} cm, {} kg, activity {}, goal {}",
            p.gender, p.age, p.height_cm, p.weight_kg, p.activity_level, p.goal
        );
        println!();
    }

    println!("BMR:             {:>6.0} kcal", estimate.bmr);
    println!("TDEE:            {:>6.0} kcal", estimate.tdee);
    println!("Target calories: {:>6.0} kcal", estimate.target_calories);
    println!();
}

/// Display a daily ledger in a formatted table.
pub fn display_ledger(ledger: &DailyLedger) {
    println!();
    println!("=== Meals ===");
    println!();

    if ledger.meals.is_empty() {
        println!("No meals logged.");
    }

    let max_type_len = ledger
        .meals
        .iter()
        .map(|m| m.meal.kind.len())
        .max()
        .unwrap_or(10);

    for (i, entry) in ledger.meals.iter().enumerate() {
        let time = entry.meal.time.as_deref().unwrap_or("--:--");
        println!(
            "{:>3}. {:<width$} {:>5} - {:>5.0} kcal | P {:.1} C {:.1} F {:.1}",
            i + 1,
            entry.meal.kind,
            time,
            entry.totals.calories,
            entry.totals.protein,
            entry.totals.carbs,
            entry.totals.fats,
            width = max_type_len
        );

        for item in &entry.meal.items {
            println!("       {} ({:.0} kcal)", item.name, item.calories);
        }
    }

    println!();
    println!("--- Summary ---");
    println!("Consumed: {:.0} kcal", ledger.total_calories);
    println!("Burned:   {:.0} kcal", ledger.calories_burned);
    println!("Balance:  {:.0} kcal", ledger.balance);
    println!();
}

/// Display a weekly workout plan.
pub fn display_plan(plan: &WorkoutPlan) {
    println!();
    println!("=== {} ({}) ===", plan.name, plan.goal);

    for workout in &plan.workouts {
        println!();
        println!("{} - {}", workout.name, workout.focus);

        if workout.exercises.is_empty() {
            println!("  (no exercises in catalogue)");
        }

        for exercise in &workout.exercises {
            println!(
                "  {:<20} {} x {:>2}, rest {}s",
                exercise.exercise_id, exercise.sets, exercise.reps, exercise.rest_seconds
            );
        }
    }

    println!();
    println!("Total exercise slots: {}", plan.exercise_count);
    println!();
}
