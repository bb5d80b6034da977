use std::sync::LazyLock;

use crate::models::FoodReference;

/// Food coefficients are quoted per this many grams.
pub const REFERENCE_GRAMS: f64 = 100.0;

/// Protein and fat are rounded to 1 / MACRO_PRECISION grams.
pub const MACRO_PRECISION: f64 = 10.0;

/// Workout burn rates are per minute; the formula divides by this.
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Sleep below this many hours counts as low sleep.
pub const LOW_SLEEP_THRESHOLD_HOURS: f64 = 6.0;

/// Advisory shown when the mood is not one of the recognized values.
pub const DEFAULT_ADVISORY: &str = "Keep taking care of yourself!";

/// Backend acknowledgement texts for the well-being report.
pub const WELLBEING_SAVED: &str = "Wellbeing saved";
pub const WELLBEING_UPDATED: &str = "Wellbeing updated";

// ─────────────────────────────────────────────────────────────────────────────
// Collaborator defaults
// ─────────────────────────────────────────────────────────────────────────────

/// Default health backend base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:9088";

/// Default exercise catalogue served as JSON.
pub const DEFAULT_WORKOUT_CATALOGUE_URL: &str =
    "https://sharunraj.github.io/fitnessApi.github.io/FitnessAPI.json";

// ─────────────────────────────────────────────────────────────────────────────
// Prompt matching
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum Jaro-Winkler score for a fuzzy name match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Maximum fuzzy candidates offered at once.
pub const MAX_FUZZY_CANDIDATES: usize = 5;

/// Built-in food table used when no food file is given.
pub static DEFAULT_FOODS: LazyLock<Vec<FoodReference>> = LazyLock::new(|| {
    vec![
        FoodReference::new("Apple", 52.0, 0.3, 0.2),
        FoodReference::new("Banana", 89.0, 1.1, 0.3),
        FoodReference::new("Salad", 15.0, 1.2, 0.2),
        FoodReference::new("Chicken Breast", 165.0, 31.0, 3.6),
        FoodReference::new("Rice", 130.0, 2.4, 0.3),
    ]
});
