mod ledger;
mod persistence;
mod reference_table;
mod wellbeing;

pub use ledger::Ledger;
pub(crate) use persistence::parse_references;
pub use persistence::{export_food_log, export_workout_log, load_food_table, load_workout_table};
pub use reference_table::ReferenceTable;
pub use wellbeing::{FlowState, WellBeingFlow};
