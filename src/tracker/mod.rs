pub mod advisory;
pub mod aggregate;
pub mod calculations;
pub mod constants;

pub use advisory::{advice, suggest, Mood, SleepBucket};
pub use aggregate::totals;
pub use calculations::{
    build_food_entry, build_workout_entry, custom_food_entry, custom_workout_entry,
    food_entry_from, parse_amount, parse_count, parse_quantity, round_to, workout_entry_from,
};
pub use constants::*;
