use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::server::DEFAULT_PORT;

/// fit-ledger — energy-need estimates and daily meal ledgers.
#[derive(Parser, Debug)]
#[command(name = "fit-ledger")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Estimate BMR, TDEE and a calorie target.
    Estimate(EstimateArgs),

    /// Walk through onboarding and save the profile with its energy figures.
    Onboard {
        /// Path to the profile JSON file.
        #[arg(short, long, default_value = "profile.json")]
        file: PathBuf,
    },

    /// Total a day's meals and compute the energy balance.
    Balance {
        /// Path to the meals JSON file.
        #[arg(short, long, default_value = "meals.json")]
        meals: PathBuf,

        /// Calories burned today; overrides the value in the meals file.
        #[arg(long)]
        burned: Option<f64>,

        /// Ledger endpoint URL; aggregates locally when unset.
        #[arg(long, env = "FIT_LEDGER_REMOTE_URL")]
        remote: Option<String>,

        /// Export per-meal totals to this CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Generate a weekly workout plan from an exercise catalogue.
    Plan {
        /// Path to the exercises JSON file.
        #[arg(short, long, default_value = "exercises.json")]
        exercises: PathBuf,

        /// Workouts per week (clamped to 1-7).
        #[arg(short, long)]
        workouts: Option<i64>,

        /// Available equipment, comma-separated; bodyweight moves always qualify.
        #[arg(long, value_delimiter = ',')]
        equipment: Vec<String>,

        /// Goal label recorded on the plan.
        #[arg(long)]
        goal: Option<String>,

        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Serve the ledger and plan endpoints over HTTP.
    Serve {
        #[arg(short, long, env = "FIT_LEDGER_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
    },
}

/// Profile values for `estimate`, given inline or through a saved profile.
#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// Saved profile (from `onboard`); replaces the inline values.
    #[arg(
        short,
        long,
        conflicts_with_all = ["gender", "age", "height", "weight", "activity", "goal"]
    )]
    pub profile: Option<PathBuf>,

    /// male, female or other (any other value uses the weight-only formula).
    #[arg(long, required_unless_present = "profile")]
    pub gender: Option<String>,

    /// Age in years.
    #[arg(long, required_unless_present = "profile")]
    pub age: Option<u32>,

    /// Height in centimetres.
    #[arg(long, required_unless_present = "profile")]
    pub height: Option<f64>,

    /// Weight in kilograms.
    #[arg(long, required_unless_present = "profile")]
    pub weight: Option<f64>,

    /// low, moderate or high.
    #[arg(long, required_unless_present = "profile")]
    pub activity: Option<String>,

    /// lose_weight, maintain or gain_muscle.
    #[arg(long)]
    pub goal: Option<String>,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}
