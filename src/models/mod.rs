mod entry;
mod reference;
mod report;
mod totals;

pub use entry::{FoodEntry, LineItem, WorkoutEntry};
pub use reference::{FoodReference, Reference, WorkoutReference};
pub use report::WellBeingReport;
pub use totals::{FoodTotals, WorkoutTotals};
