use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::error::Result;
use crate::models::{FoodEntry, FoodReference, Reference, WorkoutEntry, WorkoutReference};
use crate::state::{Ledger, ReferenceTable};

/// Parse reference items from JSON, dropping entries with invalid values.
pub(crate) fn parse_references<R, F>(json: &str, is_valid: F) -> Result<Vec<R>>
where
    R: Reference + DeserializeOwned,
    F: Fn(&R) -> bool,
{
    let items: Vec<R> = serde_json::from_str(json)?;
    Ok(items
        .into_iter()
        .filter(|item| {
            let ok = is_valid(item);
            if !ok {
                warn!("skipping reference item '{}' with invalid values", item.name());
            }
            ok
        })
        .collect())
}

/// Load a food table from a JSON file.
///
/// Expects an array of `{name, caloriesPer100g, proteinPer100g, fatPer100g}`.
pub fn load_food_table<P: AsRef<Path>>(path: P) -> Result<ReferenceTable<FoodReference>> {
    let content = fs::read_to_string(path)?;
    let foods = parse_references(&content, FoodReference::is_valid)?;
    Ok(ReferenceTable::new(foods))
}

/// Load a workout catalogue from a JSON file.
pub fn load_workout_table<P: AsRef<Path>>(path: P) -> Result<ReferenceTable<WorkoutReference>> {
    let content = fs::read_to_string(path)?;
    let workouts = parse_references(&content, WorkoutReference::is_valid)?;
    Ok(ReferenceTable::new(workouts))
}

/// Write a food log to CSV, one row per entry plus a totals row.
pub fn export_food_log<P: AsRef<Path>>(path: P, ledger: &Ledger<FoodEntry>) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path.as_ref())?;

    wtr.write_record(["name", "grams", "calories", "protein", "fat"])?;
    for entry in ledger.items() {
        wtr.write_record([
            entry.name.clone(),
            entry.grams.to_string(),
            format!("{:.0}", entry.calories),
            format!("{:.1}", entry.protein),
            format!("{:.1}", entry.fat),
        ])?;
    }

    let totals = ledger.totals();
    wtr.write_record([
        "TOTAL".to_string(),
        String::new(),
        format!("{:.0}", totals.calories),
        format!("{:.1}", totals.protein),
        format!("{:.1}", totals.fat),
    ])?;

    wtr.flush()?;
    info!("exported {} food entries to {}", ledger.len(), path.as_ref().display());
    Ok(())
}

/// Write a workout log to CSV, one row per entry plus a totals row.
pub fn export_workout_log<P: AsRef<Path>>(path: P, ledger: &Ledger<WorkoutEntry>) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path.as_ref())?;

    wtr.write_record(["name", "sets", "reps", "duration_minutes", "calories"])?;
    for entry in ledger.items() {
        wtr.write_record([
            entry.name.clone(),
            entry.sets.to_string(),
            entry.reps.to_string(),
            entry.duration_minutes.to_string(),
            format!("{:.0}", entry.calories),
        ])?;
    }

    wtr.write_record([
        "TOTAL".to_string(),
        String::new(),
        String::new(),
        String::new(),
        format!("{:.0}", ledger.totals().calories),
    ])?;

    wtr.flush()?;
    info!("exported {} workouts to {}", ledger.len(), path.as_ref().display());
    Ok(())
}
