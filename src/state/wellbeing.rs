use tracing::{debug, info, warn};

use crate::backend::{SaveOutcome, SaveRequest, SaveService, Session};
use crate::error::{Result, TrackerError};
use crate::models::WellBeingReport;
use crate::tracker::advisory::suggest;

/// Where a well-being check-in stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Editing,
    /// Terminal; holds the advisory chosen at submission.
    Submitted { advisory: &'static str },
}

/// The well-being questionnaire: collect sleep hours and mood, save them,
/// then show an advisory.
///
/// The flow only leaves `Editing` once the backend acknowledges the save.
#[derive(Debug, Clone)]
pub struct WellBeingFlow {
    sleep_hours: Option<f64>,
    mood: Option<String>,
    state: FlowState,
}

impl Default for WellBeingFlow {
    fn default() -> Self {
        Self {
            sleep_hours: None,
            mood: None,
            state: FlowState::Editing,
        }
    }
}

impl WellBeingFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.state, FlowState::Submitted { .. })
    }

    /// The advisory, once submitted.
    pub fn advisory(&self) -> Option<&'static str> {
        match self.state {
            FlowState::Submitted { advisory } => Some(advisory),
            FlowState::Editing => None,
        }
    }

    pub fn sleep_hours(&self) -> Option<f64> {
        self.sleep_hours
    }

    pub fn mood(&self) -> Option<&str> {
        self.mood.as_deref()
    }

    fn ensure_editing(&self) -> Result<()> {
        if self.is_submitted() {
            return Err(TrackerError::InvalidInput(
                "check-in already submitted".to_string(),
            ));
        }
        Ok(())
    }

    pub fn set_sleep_hours(&mut self, hours: f64) -> Result<()> {
        self.ensure_editing()?;
        if !hours.is_finite() || hours < 0.0 {
            return Err(TrackerError::InvalidInput(format!(
                "sleep hours must be zero or more, got {}",
                hours
            )));
        }
        self.sleep_hours = Some(hours);
        Ok(())
    }

    /// Any label is accepted; unrecognized moods get the default advisory.
    pub fn set_mood(&mut self, mood: &str) -> Result<()> {
        self.ensure_editing()?;
        let mood = mood.trim();
        if mood.is_empty() {
            return Err(TrackerError::InvalidInput("mood is required".to_string()));
        }
        self.mood = Some(mood.to_string());
        Ok(())
    }

    /// Save the check-in and, on acknowledgement, move to `Submitted`.
    ///
    /// On any failure the flow stays in `Editing` with its inputs intact.
    /// Submitting an already submitted flow does nothing.
    pub fn submit<S: SaveService + ?Sized>(
        &mut self,
        service: &S,
        session: &Session,
    ) -> Result<FlowState> {
        if self.is_submitted() {
            debug!("well-being check-in already submitted");
            return Ok(self.state);
        }

        let (Some(sleep_hours), Some(mood)) = (self.sleep_hours, self.mood.as_deref()) else {
            return Err(TrackerError::InvalidInput(
                "sleep hours and mood are both required".to_string(),
            ));
        };

        let report = WellBeingReport {
            sleep_hours,
            mood: mood.to_string(),
        };

        match service.save(session, SaveRequest::WellBeing(&report)) {
            Ok(SaveOutcome::Acknowledged) => {
                let advisory = suggest(mood, sleep_hours);
                self.state = FlowState::Submitted { advisory };
                info!("well-being check-in submitted ({} h, {})", sleep_hours, mood);
                Ok(self.state)
            }
            Ok(SaveOutcome::Rejected(reason)) => {
                warn!("well-being check-in not saved: {}", reason);
                Err(TrackerError::SaveFailed(reason))
            }
            Err(e) => {
                warn!("well-being check-in not saved: {}", e);
                Err(TrackerError::SaveFailed(e.to_string()))
            }
        }
    }
}
