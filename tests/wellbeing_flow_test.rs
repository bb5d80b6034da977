use std::cell::RefCell;

use health_tracker_rs::backend::{SaveOutcome, SaveRequest, SaveService, Session};
use health_tracker_rs::models::WellBeingReport;
use health_tracker_rs::state::{FlowState, WellBeingFlow};
use health_tracker_rs::tracker::{
    advice, suggest, Mood, SleepBucket, DEFAULT_ADVISORY, WELLBEING_SAVED, WELLBEING_UPDATED,
};
use health_tracker_rs::{Result, TrackerError};

/// Backend stand-in that answers every well-being save with a fixed reply.
struct FakeBackend {
    reply: Option<&'static str>,
    received: RefCell<Vec<WellBeingReport>>,
}

impl FakeBackend {
    fn replying(text: &'static str) -> Self {
        Self {
            reply: Some(text),
            received: RefCell::new(Vec::new()),
        }
    }

    fn unreachable() -> Self {
        Self {
            reply: None,
            received: RefCell::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.received.borrow().len()
    }
}

impl SaveService for FakeBackend {
    fn save(&self, _session: &Session, request: SaveRequest<'_>) -> Result<SaveOutcome> {
        let SaveRequest::WellBeing(report) = request else {
            panic!("unexpected request: {}", request.label());
        };
        self.received.borrow_mut().push(report.clone());

        match self.reply {
            Some(text) => Ok(SaveOutcome::from_acknowledgement(
                text,
                &[WELLBEING_SAVED, WELLBEING_UPDATED],
            )),
            None => Err(TrackerError::Io(std::io::Error::other("connection refused"))),
        }
    }
}

fn session() -> Session {
    Session::new("http://localhost:9088", "7", "token")
}

fn filled_flow(hours: f64, mood: &str) -> WellBeingFlow {
    let mut flow = WellBeingFlow::new();
    flow.set_sleep_hours(hours).unwrap();
    flow.set_mood(mood).unwrap();
    flow
}

#[test]
fn test_saved_reply_submits_with_advisory() {
    let backend = FakeBackend::replying("Wellbeing saved");
    let mut flow = filled_flow(5.0, "Stressed");

    let state = flow.submit(&backend, &session()).unwrap();

    let expected = advice(Mood::Stressed, SleepBucket::Low);
    assert_eq!(state, FlowState::Submitted { advisory: expected });
    assert_eq!(flow.advisory(), Some(expected));
    assert_eq!(
        backend.received.borrow()[0],
        WellBeingReport {
            sleep_hours: 5.0,
            mood: "Stressed".to_string()
        }
    );
}

#[test]
fn test_updated_reply_also_submits() {
    let backend = FakeBackend::replying("Wellbeing updated");
    let mut flow = filled_flow(6.0, "Happy");

    flow.submit(&backend, &session()).unwrap();
    assert_eq!(flow.advisory(), Some("Great to hear you're happy and well-rested!"));
}

#[test]
fn test_other_reply_keeps_editing_with_inputs() {
    let backend = FakeBackend::replying("Invalid token");
    let mut flow = filled_flow(7.5, "Sad");

    let result = flow.submit(&backend, &session());

    assert!(matches!(result, Err(TrackerError::SaveFailed(ref text)) if text == "Invalid token"));
    assert_eq!(flow.state(), FlowState::Editing);
    assert_eq!(flow.sleep_hours(), Some(7.5));
    assert_eq!(flow.mood(), Some("Sad"));
    assert!(flow.advisory().is_none());
}

#[test]
fn test_transport_error_keeps_editing() {
    let backend = FakeBackend::unreachable();
    let mut flow = filled_flow(8.0, "Relaxed");

    assert!(matches!(
        flow.submit(&backend, &session()),
        Err(TrackerError::SaveFailed(_))
    ));
    assert_eq!(flow.state(), FlowState::Editing);

    // A later successful attempt resubmits the same inputs.
    let backend = FakeBackend::replying("Wellbeing saved");
    flow.submit(&backend, &session()).unwrap();
    assert!(flow.is_submitted());
    assert_eq!(backend.received.borrow()[0].sleep_hours, 8.0);
}

#[test]
fn test_submitted_is_terminal() {
    let backend = FakeBackend::replying("Wellbeing saved");
    let mut flow = filled_flow(4.0, "Neutral");
    let first = flow.submit(&backend, &session()).unwrap();

    assert!(flow.set_mood("Happy").is_err());
    assert!(flow.set_sleep_hours(9.0).is_err());

    let second = flow.submit(&backend, &session()).unwrap();
    assert_eq!(first, second);
    assert_eq!(backend.calls(), 1);
    assert_eq!(flow.mood(), Some("Neutral"));
}

#[test]
fn test_missing_inputs_do_not_call_backend() {
    let backend = FakeBackend::replying("Wellbeing saved");

    let mut flow = WellBeingFlow::new();
    flow.set_mood("Happy").unwrap();
    assert!(matches!(
        flow.submit(&backend, &session()),
        Err(TrackerError::InvalidInput(_))
    ));

    let mut flow = WellBeingFlow::new();
    flow.set_sleep_hours(7.0).unwrap();
    assert!(flow.submit(&backend, &session()).is_err());

    assert_eq!(backend.calls(), 0);
}

#[test]
fn test_unrecognized_mood_gets_default_advisory() {
    let backend = FakeBackend::replying("Wellbeing saved");
    let mut flow = filled_flow(3.0, "Hangry");

    flow.submit(&backend, &session()).unwrap();
    assert_eq!(flow.advisory(), Some(DEFAULT_ADVISORY));
}

#[test]
fn test_selector_total_over_moods_and_hours() {
    for mood in Mood::ALL {
        for tenths in 0..=240 {
            let hours = tenths as f64 / 10.0;
            let message = suggest(mood.as_str(), hours);
            let bucket = if hours < 6.0 {
                SleepBucket::Low
            } else {
                SleepBucket::Adequate
            };
            assert_eq!(message, advice(mood, bucket));
        }
        assert_eq!(suggest(mood.as_str(), 5.0), advice(mood, SleepBucket::Low));
        assert_eq!(suggest(mood.as_str(), 6.0), advice(mood, SleepBucket::Adequate));
    }
}
