use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fit_ledger_rs::cli::{Cli, Command, EstimateArgs};
use fit_ledger_rs::energy::{estimate_from_labels, EnergyEstimate};
use fit_ledger_rs::error::{FitError, Result};
use fit_ledger_rs::interface::{
    collect_profile, display_estimate, display_ledger, display_plan, prompt_yes_no,
};
use fit_ledger_rs::ledger::{
    calculate_totals, LedgerBackend, LocalLedger, RemoteLedger, DEFAULT_REMOTE_TIMEOUT,
};
use fit_ledger_rs::plan::{generate_plan, PlanRequest};
use fit_ledger_rs::server::run_server;
use fit_ledger_rs::state::{
    load_exercises, load_meals, load_profile, save_profile, write_meal_totals_csv, ProfileRecord,
};

fn main() {
    // Logs go to stderr so JSON output on stdout stays clean
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("fit_ledger_rs=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Estimate(args) => cmd_estimate(&args),
        Command::Onboard { file } => cmd_onboard(&file),
        Command::Balance {
            meals,
            burned,
            remote,
            csv,
            json,
        } => cmd_balance(&meals, burned, remote.as_deref(), csv.as_deref(), json),
        Command::Plan {
            exercises,
            workouts,
            equipment,
            goal,
            json,
        } => cmd_plan(&exercises, workouts, equipment, goal, json),
        Command::Serve { port } => cmd_serve(port),
    }
}

/// Print the energy estimate for inline values or a saved profile.
fn cmd_estimate(args: &EstimateArgs) -> Result<()> {
    let (profile, estimate) = match &args.profile {
        Some(path) => {
            let record = load_profile(path)?;
            let estimate = record.profile.estimate();
            (Some(record.profile), estimate)
        }
        None => (None, estimate_inline(args)?),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&estimate)?);
    } else {
        display_estimate(profile.as_ref(), &estimate);
    }

    Ok(())
}

fn estimate_inline(args: &EstimateArgs) -> Result<EnergyEstimate> {
    let missing =
        |flag: &str| FitError::InvalidArgument(format!("--{} is required without --profile", flag));

    let gender = args.gender.as_deref().ok_or_else(|| missing("gender"))?;
    let age = args.age.ok_or_else(|| missing("age"))?;
    let height = args.height.ok_or_else(|| missing("height"))?;
    let weight = args.weight.ok_or_else(|| missing("weight"))?;
    let activity = args.activity.as_deref().ok_or_else(|| missing("activity"))?;
    let goal = args.goal.as_deref().unwrap_or("maintain");

    estimate_from_labels(gender, weight, height, age as f64, activity, goal)
}

/// Collect a profile interactively and save it with its energy figures.
fn cmd_onboard(file: &Path) -> Result<()> {
    let profile = collect_profile()?;
    let estimate = profile.estimate();

    display_estimate(Some(&profile), &estimate);

    if file.exists() && !prompt_yes_no(&format!("Overwrite {}?", file.display()), false)? {
        println!("Profile not saved.");
        return Ok(());
    }

    save_profile(file, &ProfileRecord::new(profile, &estimate))?;
    tracing::info!(path = %file.display(), "profile saved");
    println!("Profile saved to {}.", file.display());

    Ok(())
}

/// Total the meals in a file, remotely when an endpoint is configured.
fn cmd_balance(
    meals_path: &Path,
    burned: Option<f64>,
    remote: Option<&str>,
    csv: Option<&Path>,
    json: bool,
) -> Result<()> {
    let request = load_meals(meals_path)?;
    let burned = burned.unwrap_or_else(|| request.burned());

    let remote_backend = remote
        .map(|url| RemoteLedger::new(url, DEFAULT_REMOTE_TIMEOUT))
        .transpose()?;
    let backend: &dyn LedgerBackend = match &remote_backend {
        Some(r) => r,
        None => &LocalLedger,
    };
    tracing::info!(backend = backend.name(), meals = request.meals.len(), "calculating totals");

    let ledger = calculate_totals(backend, &request.meals, burned);

    if json {
        println!("{}", serde_json::to_string_pretty(&ledger)?);
    } else {
        display_ledger(&ledger);
    }

    if let Some(path) = csv {
        write_meal_totals_csv(path, &ledger)?;
        tracing::info!(path = %path.display(), "meal totals exported");
    }

    Ok(())
}

/// Build a weekly plan from an exercise catalogue file.
fn cmd_plan(
    exercises_path: &Path,
    workouts: Option<i64>,
    equipment: Vec<String>,
    goal: Option<String>,
    json: bool,
) -> Result<()> {
    let request = PlanRequest {
        goal,
        workouts_per_week: workouts,
        equipment: Some(equipment),
        exercises: load_exercises(exercises_path)?,
    };
    tracing::info!(exercises = request.exercises.len(), "generating plan");

    let plan = generate_plan(&request);

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        display_plan(&plan);
    }

    Ok(())
}

/// Serve the ledger and plan endpoints.
fn cmd_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_server(port))
}
