use std::ops::Add;

use serde::Serialize;

use crate::models::totals::{FoodTotals, WorkoutTotals};

/// A logged item whose derived values can be summed into totals.
pub trait LineItem {
    type Totals: Default + Copy + Add<Output = Self::Totals>;

    fn name(&self) -> &str;

    /// The derived values this item contributes to its ledger's totals.
    fn derived(&self) -> Self::Totals;
}

/// A portion of food with its derived energy and macros.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodEntry {
    pub name: String,
    pub grams: f64,
    /// Rounded to whole kcal.
    pub calories: f64,
    /// Rounded to 0.1 g.
    pub protein: f64,
    /// Rounded to 0.1 g.
    pub fat: f64,
}

impl LineItem for FoodEntry {
    type Totals = FoodTotals;

    fn name(&self) -> &str {
        &self.name
    }

    fn derived(&self) -> FoodTotals {
        FoodTotals {
            calories: self.calories,
            protein: self.protein,
            fat: self.fat,
        }
    }
}

/// A performed workout with its derived energy burn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutEntry {
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    pub duration_minutes: u32,
    /// Rounded to whole kcal.
    pub calories: f64,
}

impl LineItem for WorkoutEntry {
    type Totals = WorkoutTotals;

    fn name(&self) -> &str {
        &self.name
    }

    fn derived(&self) -> WorkoutTotals {
        WorkoutTotals {
            calories: self.calories,
        }
    }
}
