use crate::backend::Session;
use crate::error::Result;
use crate::models::{WellBeingReport, WorkoutEntry};

/// What is being sent to the backend.
#[derive(Debug, Clone, Copy)]
pub enum SaveRequest<'a> {
    /// A workout built from the catalogue.
    Workout(&'a WorkoutEntry),
    /// A workout whose calories the user entered directly.
    CustomWorkout(&'a WorkoutEntry),
    /// Confirm the workouts recorded so far as the day's log.
    WorkoutLog,
    WellBeing(&'a WellBeingReport),
}

impl SaveRequest<'_> {
    pub fn label(&self) -> &'static str {
        match self {
            SaveRequest::Workout(_) => "workout",
            SaveRequest::CustomWorkout(_) => "custom workout",
            SaveRequest::WorkoutLog => "workout log",
            SaveRequest::WellBeing(_) => "well-being report",
        }
    }
}

/// The backend's verdict on a save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Acknowledged,
    Rejected(String),
}

impl SaveOutcome {
    /// Acknowledged only if the response text is exactly one of `accepted`.
    pub fn from_acknowledgement(text: &str, accepted: &[&str]) -> Self {
        if accepted.contains(&text) {
            SaveOutcome::Acknowledged
        } else {
            SaveOutcome::Rejected(text.to_string())
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SaveOutcome::Acknowledged)
    }
}

/// Remote persistence for tracked data.
///
/// Calls are made one at a time and never retried.
pub trait SaveService {
    fn save(&self, session: &Session, request: SaveRequest<'_>) -> Result<SaveOutcome>;
}
