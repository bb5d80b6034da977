use clap::Parser;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use health_tracker_rs::backend::{HttpBackend, SaveRequest, SaveService, Session};
use health_tracker_rs::cli::{Cli, Command};
use health_tracker_rs::error::{Result, TrackerError};
use health_tracker_rs::interface::{
    display_food_log, display_food_table, display_wellbeing, display_workout_log,
    display_workout_table, prompt_field, prompt_menu, prompt_mood, prompt_reference,
    prompt_yes_no,
};
use health_tracker_rs::models::{FoodEntry, FoodReference, WorkoutEntry, WorkoutReference};
use health_tracker_rs::state::{
    export_food_log, export_workout_log, load_food_table, load_workout_table, Ledger,
    ReferenceTable, WellBeingFlow,
};
use health_tracker_rs::tracker::{
    build_food_entry, build_workout_entry, custom_food_entry, custom_workout_entry, parse_amount,
    parse_count, parse_quantity, DEFAULT_FOODS,
};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run(cli: Cli) -> Result<()> {
    let session = cli.backend.session();

    match cli.command {
        Command::Foods { foods } => {
            let table = food_table(foods.as_deref())?;
            display_food_table(&table);
            Ok(())
        }
        Command::Diet { foods, export } => cmd_diet(foods.as_deref(), export.as_deref()),
        Command::Fitness { catalogue, export } => {
            cmd_fitness(&catalogue, export.as_deref(), session.as_ref())
        }
        Command::Wellbeing => {
            let session = session.ok_or_else(|| {
                TrackerError::InvalidInput(
                    "--user-id and --token (or HEALTH_USER_ID / HEALTH_TOKEN) are required"
                        .to_string(),
                )
            })?;
            cmd_wellbeing(&session)
        }
    }
}

fn food_table(path: Option<&Path>) -> Result<ReferenceTable<FoodReference>> {
    match path {
        Some(path) => load_food_table(path),
        None => Ok(ReferenceTable::new(DEFAULT_FOODS.clone())),
    }
}

fn workout_table(
    source: &str,
    backend: &HttpBackend,
) -> Result<ReferenceTable<WorkoutReference>> {
    if source.starts_with("http://") || source.starts_with("https://") {
        backend.fetch_workout_table(source)
    } else {
        load_workout_table(source)
    }
}

/// Interactive food log.
fn cmd_diet(foods: Option<&Path>, export: Option<&Path>) -> Result<()> {
    let table = food_table(foods)?;
    if table.is_empty() {
        println!("No foods in the food table.");
        return Ok(());
    }

    println!("Loaded {} foods", table.len());
    let mut ledger: Ledger<FoodEntry> = Ledger::new();

    loop {
        let choice = prompt_menu(
            "What next?",
            &["Add food", "Add custom food", "Show foods", "Finish"],
        )?;

        match choice {
            0 => {
                let Some(name) = prompt_reference(&table, "food")? else {
                    continue;
                };
                let grams = prompt_field("Weight in grams")?;
                let built = parse_quantity(&grams)
                    .and_then(|grams| build_food_entry(&table, &name, grams));
                if ledger.try_push(built) {
                    print_running_food_totals(&ledger);
                } else {
                    println!("Not added: enter a positive weight.");
                }
            }
            1 => {
                let name = prompt_field("Food name")?;
                let grams = prompt_field("Weight in grams")?;
                let calories = prompt_field("Calories (kcal)")?;
                let protein = prompt_field("Protein (g)")?;
                let fat = prompt_field("Fat (g)")?;

                let built = (|| {
                    custom_food_entry(
                        &name,
                        parse_quantity(&grams)?,
                        parse_amount(&calories)?,
                        parse_amount(&protein)?,
                        parse_amount(&fat)?,
                    )
                })();
                if ledger.try_push(built) {
                    print_running_food_totals(&ledger);
                } else {
                    println!("Not added: check the name and numbers.");
                }
            }
            2 => display_food_table(&table),
            _ => break,
        }
    }

    display_food_log(&ledger);

    if let Some(path) = export {
        if !ledger.is_empty() {
            export_food_log(path, &ledger)?;
            println!("Food log saved to {}.", path.display());
        }
    }

    Ok(())
}

fn print_running_food_totals(ledger: &Ledger<FoodEntry>) {
    if let Some(last) = ledger.last() {
        let totals = ledger.totals();
        println!(
            "Logged {} ({}g). Running total: {:.0} kcal, {:.1}g protein, {:.1}g fat",
            last.name, last.grams, totals.calories, totals.protein, totals.fat
        );
    }
}

/// Interactive workout log; each workout is sent to the backend when a
/// session is available.
fn cmd_fitness(catalogue: &str, export: Option<&Path>, session: Option<&Session>) -> Result<()> {
    let backend = HttpBackend::new()?;

    let table = match workout_table(catalogue, &backend) {
        Ok(table) => table,
        Err(e) => {
            warn!("could not load workout catalogue: {}", e);
            ReferenceTable::new(Vec::new())
        }
    };

    if session.is_none() {
        info!("no session configured; workouts will only be logged locally");
    }

    let mut ledger: Ledger<WorkoutEntry> = Ledger::new();

    loop {
        let choice = prompt_menu(
            "What next?",
            &["Add workout", "Add custom workout", "Show workouts", "Finish"],
        )?;

        let custom = match choice {
            0 => {
                if table.is_empty() {
                    println!("No workouts in the catalogue; add a custom workout instead.");
                    continue;
                }
                let Some(name) = prompt_reference(&table, "workout")? else {
                    continue;
                };
                let sets = prompt_field("Sets")?;
                let reps = prompt_field("Reps per set")?;
                let duration = prompt_field("Duration in minutes")?;

                let built = (|| {
                    build_workout_entry(
                        &table,
                        &name,
                        parse_count(&sets)?,
                        parse_count(&reps)?,
                        parse_count(&duration)?,
                    )
                })();
                if !ledger.try_push(built) {
                    println!("Not added: sets, reps and duration must be positive whole numbers.");
                    continue;
                }
                false
            }
            1 => {
                let name = prompt_field("Workout name")?;
                let sets = prompt_field("Sets")?;
                let reps = prompt_field("Reps per set")?;
                let duration = prompt_field("Duration in minutes")?;
                let calories = prompt_field("Calories burned (kcal)")?;

                let built = (|| {
                    custom_workout_entry(
                        &name,
                        parse_count(&sets)?,
                        parse_count(&reps)?,
                        parse_count(&duration)?,
                        parse_amount(&calories)?,
                    )
                })();
                if !ledger.try_push(built) {
                    println!("Not added: check the name and numbers.");
                    continue;
                }
                true
            }
            2 => {
                display_workout_table(&table);
                continue;
            }
            _ => break,
        };

        let Some(entry) = ledger.last() else {
            continue;
        };
        println!(
            "Logged {} ({:.0} kcal). Running total: {:.0} kcal",
            entry.name,
            entry.calories,
            ledger.totals().calories
        );

        if let Some(session) = session {
            let request = if custom {
                SaveRequest::CustomWorkout(entry)
            } else {
                SaveRequest::Workout(entry)
            };
            // Failures stay local; the workout remains in the log.
            if let Err(e) = backend.save(session, request) {
                warn!("{} not sent: {}", request.label(), e);
            }
        }
    }

    display_workout_log(&ledger);

    if let Some(path) = export {
        if !ledger.is_empty() {
            export_workout_log(path, &ledger)?;
            println!("Workout log written to {}.", path.display());
        }
    }

    if let Some(session) = session {
        if !ledger.is_empty() && prompt_yes_no("Save fitness log?", true)? {
            match backend.save(session, SaveRequest::WorkoutLog) {
                Ok(outcome) if outcome.is_success() => println!("Fitness log saved."),
                Ok(_) => println!("The backend did not accept the fitness log."),
                Err(e) => println!("Could not reach the backend: {}", e),
            }
        }
    }

    Ok(())
}

/// Well-being questionnaire; stays editable until the backend accepts it.
fn cmd_wellbeing(session: &Session) -> Result<()> {
    let backend = HttpBackend::new()?;
    let mut flow = WellBeingFlow::new();

    loop {
        while flow.sleep_hours().is_none() {
            let raw = prompt_field("How many hours did you sleep last night?")?;
            if let Err(e) = parse_amount(&raw).and_then(|hours| flow.set_sleep_hours(hours)) {
                println!("{}", e);
            }
        }
        if flow.mood().is_none() {
            let mood = prompt_mood()?;
            flow.set_mood(mood.as_str())?;
        }

        match flow.submit(&backend, session) {
            Ok(_) => break,
            Err(e) => {
                println!("{}", e);
                if !prompt_yes_no("Try again?", true)? {
                    return Ok(());
                }
            }
        }
    }

    display_wellbeing(&flow);
    Ok(())
}
