use std::ops::Add;

use serde::Serialize;

/// Summed derived values of a food ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FoodTotals {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
}

impl Add for FoodTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            fat: self.fat + rhs.fat,
        }
    }
}

/// Summed derived values of a workout ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct WorkoutTotals {
    pub calories: f64,
}

impl Add for WorkoutTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
        }
    }
}
