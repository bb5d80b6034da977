use crate::models::{FoodEntry, FoodReference, WorkoutEntry, WorkoutReference};
use crate::state::{Ledger, ReferenceTable, WellBeingFlow};

/// Display the food table with its per-100 g coefficients.
pub fn display_food_table(table: &ReferenceTable<FoodReference>) {
    if table.is_empty() {
        println!("Foods: (none)");
        return;
    }

    println!();
    println!("=== Foods ({} items, per 100 g) ===", table.len());
    println!();

    let width = table.names().iter().map(|n| n.len()).max().unwrap_or(10);
    for food in table.items() {
        println!(
            "  {:<width$}  {:>5} kcal  {:>5.1} g protein  {:>5.1} g fat",
            food.name,
            food.calories_per_100g,
            food.protein_per_100g,
            food.fat_per_100g,
            width = width
        );
    }

    println!();
}

/// Display the workout catalogue with burn rates.
pub fn display_workout_table(table: &ReferenceTable<WorkoutReference>) {
    if table.is_empty() {
        println!("Workouts: (none)");
        return;
    }

    println!();
    println!("=== Workouts ({} items) ===", table.len());
    for workout in table.items() {
        println!("  {} - {} kcal/min", workout.name, workout.burn_rate_per_minute);
    }
    println!();
}

/// Display a food log with its totals.
pub fn display_food_log(ledger: &Ledger<FoodEntry>) {
    println!();
    println!("=== Food Summary ===");
    println!();

    if ledger.is_empty() {
        println!("No food items added yet.");
    }

    let width = ledger.items().iter().map(|e| e.name.len()).max().unwrap_or(10);
    for (i, entry) in ledger.items().iter().enumerate() {
        println!(
            "{:>3}. {:<width$} ({}g) - {:.0} kcal, {:.1}g protein, {:.1}g fat",
            i + 1,
            entry.name,
            entry.grams,
            entry.calories,
            entry.protein,
            entry.fat,
            width = width
        );
    }

    let totals = ledger.totals();
    println!();
    println!("--- Totals ---");
    println!("Total calories consumed: {:.0} kcal", totals.calories);
    println!("Total protein: {:.1} g", totals.protein);
    println!("Total fat: {:.1} g", totals.fat);
    println!();
}

/// Display a workout log with its totals.
pub fn display_workout_log(ledger: &Ledger<WorkoutEntry>) {
    println!();
    println!("=== Workout Summary ===");
    println!();

    if ledger.is_empty() {
        println!("No workouts added yet.");
    }

    for (i, entry) in ledger.items().iter().enumerate() {
        println!(
            "{:>3}. {} ({} sets, {} reps, {} min) - {:.0} kcal",
            i + 1,
            entry.name,
            entry.sets,
            entry.reps,
            entry.duration_minutes,
            entry.calories
        );
    }

    println!();
    println!("Total calories burned: {:.0} kcal", ledger.totals().calories);
    println!();
}

/// Display the confirmation of a submitted check-in.
pub fn display_wellbeing(flow: &WellBeingFlow) {
    let Some(advisory) = flow.advisory() else {
        println!("Check-in not submitted yet.");
        return;
    };

    println!();
    println!("Thank you for sharing!");
    if let Some(hours) = flow.sleep_hours() {
        println!("You slept {} hours last night.", hours);
    }
    if let Some(mood) = flow.mood() {
        println!("You are feeling {} today.", mood);
    }
    println!();
    println!("{}", advisory);
    println!();
}
