use tracing::debug;

use crate::error::{Result, TrackerError};
use crate::models::{FoodEntry, FoodReference, WorkoutEntry, WorkoutReference};
use crate::state::ReferenceTable;
use crate::tracker::constants::*;

/// Round to the nearest 1 / `precision`.
///
/// Inputs are non-negative, so half-away-from-zero matches half-up.
#[inline]
pub fn round_to(value: f64, precision: f64) -> f64 {
    (value * precision).round() / precision
}

/// Parse a form field holding a positive amount (grams, hours of activity).
pub fn parse_quantity(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::InvalidInput("quantity is required".to_string()));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| TrackerError::InvalidInput(format!("'{}' is not a number", trimmed)))?;

    ensure_positive("quantity", value)?;
    Ok(value)
}

/// Parse a form field holding a positive whole count (sets, reps, minutes).
pub fn parse_count(raw: &str) -> Result<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::InvalidInput("count is required".to_string()));
    }

    let value: u32 = trimmed.parse().map_err(|_| {
        TrackerError::InvalidInput(format!("'{}' is not a positive whole number", trimmed))
    })?;

    if value == 0 {
        return Err(TrackerError::InvalidInput("count must be positive".to_string()));
    }
    Ok(value)
}

/// Parse a form field where zero is allowed (hours slept, kcal, grams of fat).
pub fn parse_amount(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| TrackerError::InvalidInput(format!("'{}' is not a number", trimmed)))?;

    ensure_non_negative("amount", value)?;
    Ok(value)
}

fn ensure_positive(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(TrackerError::InvalidInput(format!(
            "{} must be a positive number, got {}",
            field, value
        )));
    }
    Ok(())
}

fn ensure_non_negative(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(TrackerError::InvalidInput(format!(
            "{} must be zero or more, got {}",
            field, value
        )));
    }
    Ok(())
}

fn ensure_named(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::InvalidInput("name is required".to_string()));
    }
    Ok(trimmed.to_string())
}

fn ensure_finite(name: &str, derived: &[f64]) -> Result<()> {
    if derived.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(TrackerError::InvalidInput(format!(
            "{} quantity is too large to total",
            name
        )))
    }
}

/// Derive a food entry from its reference coefficients.
///
/// Calories round to whole kcal; protein and fat to 0.1 g.
pub fn food_entry_from(food: &FoodReference, grams: f64) -> Result<FoodEntry> {
    ensure_positive("grams", grams)?;
    if !food.is_valid() {
        return Err(TrackerError::InvalidInput(format!(
            "{} has invalid coefficients",
            food.name
        )));
    }

    let entry = FoodEntry {
        name: food.name.clone(),
        grams,
        calories: (grams * food.calories_per_100g / REFERENCE_GRAMS).round(),
        protein: round_to(grams * food.protein_per_100g / REFERENCE_GRAMS, MACRO_PRECISION),
        fat: round_to(grams * food.fat_per_100g / REFERENCE_GRAMS, MACRO_PRECISION),
    };
    ensure_finite(&entry.name, &[entry.calories, entry.protein, entry.fat])?;

    debug!(
        "{} x {}g => {} kcal, {} g protein, {} g fat",
        entry.name, grams, entry.calories, entry.protein, entry.fat
    );
    Ok(entry)
}

/// Derive a workout entry from its catalogue burn rate.
///
/// Formula: round(sets * reps * burn_rate * duration / 60)
pub fn workout_entry_from(
    workout: &WorkoutReference,
    sets: u32,
    reps: u32,
    duration_minutes: u32,
) -> Result<WorkoutEntry> {
    if sets == 0 || reps == 0 || duration_minutes == 0 {
        return Err(TrackerError::InvalidInput(
            "sets, reps and duration must all be positive".to_string(),
        ));
    }
    if !workout.is_valid() {
        return Err(TrackerError::InvalidInput(format!(
            "{} has an invalid burn rate",
            workout.name
        )));
    }

    let burned = sets as f64
        * reps as f64
        * workout.burn_rate_per_minute
        * duration_minutes as f64
        / MINUTES_PER_HOUR;
    ensure_finite(&workout.name, &[burned])?;

    let entry = WorkoutEntry {
        name: workout.name.clone(),
        sets,
        reps,
        duration_minutes,
        calories: burned.round(),
    };

    debug!(
        "{}: {} sets x {} reps, {} min => {} kcal",
        entry.name, sets, reps, duration_minutes, entry.calories
    );
    Ok(entry)
}

/// Look up a food by name and derive its entry.
pub fn build_food_entry(
    table: &ReferenceTable<FoodReference>,
    name: &str,
    grams: f64,
) -> Result<FoodEntry> {
    food_entry_from(table.lookup(name)?, grams)
}

/// Look up a workout by name and derive its entry.
pub fn build_workout_entry(
    table: &ReferenceTable<WorkoutReference>,
    name: &str,
    sets: u32,
    reps: u32,
    duration_minutes: u32,
) -> Result<WorkoutEntry> {
    workout_entry_from(table.lookup(name)?, sets, reps, duration_minutes)
}

/// A food entry whose values the user supplies directly.
pub fn custom_food_entry(
    name: &str,
    grams: f64,
    calories: f64,
    protein: f64,
    fat: f64,
) -> Result<FoodEntry> {
    let name = ensure_named(name)?;
    ensure_positive("grams", grams)?;
    ensure_non_negative("calories", calories)?;
    ensure_non_negative("protein", protein)?;
    ensure_non_negative("fat", fat)?;

    Ok(FoodEntry {
        name,
        grams,
        calories,
        protein,
        fat,
    })
}

/// A workout entry whose calorie burn the user supplies directly.
pub fn custom_workout_entry(
    name: &str,
    sets: u32,
    reps: u32,
    duration_minutes: u32,
    calories: f64,
) -> Result<WorkoutEntry> {
    let name = ensure_named(name)?;
    if sets == 0 || reps == 0 || duration_minutes == 0 {
        return Err(TrackerError::InvalidInput(
            "sets, reps and duration must all be positive".to_string(),
        ));
    }
    ensure_non_negative("calories", calories)?;

    Ok(WorkoutEntry {
        name,
        sets,
        reps,
        duration_minutes,
        calories,
    })
}
