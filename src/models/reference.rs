use serde::{Deserialize, Serialize};

/// A named entry in a reference table.
pub trait Reference {
    fn name(&self) -> &str;

    /// Canonical key for lookups (lowercase name).
    fn key(&self) -> String {
        self.name().to_lowercase()
    }
}

/// Nutritional coefficients for a food, expressed per 100 g.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodReference {
    pub name: String,

    #[serde(rename = "caloriesPer100g")]
    pub calories_per_100g: f64,

    #[serde(rename = "proteinPer100g")]
    pub protein_per_100g: f64,

    #[serde(rename = "fatPer100g")]
    pub fat_per_100g: f64,
}

impl FoodReference {
    pub fn new(name: &str, calories: f64, protein: f64, fat: f64) -> Self {
        Self {
            name: name.to_string(),
            calories_per_100g: calories,
            protein_per_100g: protein,
            fat_per_100g: fat,
        }
    }

    /// Basic validation: non-empty name and finite, non-negative coefficients.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && [self.calories_per_100g, self.protein_per_100g, self.fat_per_100g]
                .iter()
                .all(|v| v.is_finite() && *v >= 0.0)
    }
}

impl Reference for FoodReference {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A workout from the exercise catalogue.
///
/// Field names follow the catalogue's JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutReference {
    #[serde(rename = "workoutId", default)]
    pub id: Option<u32>,

    #[serde(rename = "workoutName")]
    pub name: String,

    /// Calories burned per minute for one rep of one set.
    #[serde(rename = "caloriesBurned")]
    pub burn_rate_per_minute: f64,
}

impl WorkoutReference {
    pub fn new(name: &str, burn_rate_per_minute: f64) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            burn_rate_per_minute,
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && self.burn_rate_per_minute.is_finite()
            && self.burn_rate_per_minute >= 0.0
    }
}

impl Reference for WorkoutReference {
    fn name(&self) -> &str {
        &self.name
    }
}
