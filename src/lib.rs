pub mod backend;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;
pub mod tracker;

pub use error::{Result, TrackerError};
pub use models::{FoodEntry, WorkoutEntry};
pub use state::{Ledger, WellBeingFlow};
