use reqwest::blocking::{Client, Response};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::backend::{SaveOutcome, SaveRequest, SaveService, Session};
use crate::error::Result;
use crate::models::{WorkoutEntry, WorkoutReference};
use crate::state::{parse_references, ReferenceTable};
use crate::tracker::constants::{WELLBEING_SAVED, WELLBEING_UPDATED};

/// Body of the custom-workout request.
#[derive(Debug, Serialize)]
struct CustomWorkoutPayload<'a> {
    #[serde(rename = "workoutName")]
    name: &'a str,
    reps: u32,
    duration: u32,
    sets: u32,
    #[serde(rename = "caloriesBurned")]
    calories: f64,
}

impl<'a> From<&'a WorkoutEntry> for CustomWorkoutPayload<'a> {
    fn from(entry: &'a WorkoutEntry) -> Self {
        Self {
            name: &entry.name,
            reps: entry.reps,
            duration: entry.duration_minutes,
            sets: entry.sets,
            calories: entry.calories,
        }
    }
}

/// [`SaveService`] backed by the health REST API.
pub struct HttpBackend {
    client: Client,
}

impl HttpBackend {
    pub fn new() -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }

    /// Fetch the exercise catalogue served as JSON at `url`.
    pub fn fetch_workout_table(&self, url: &str) -> Result<ReferenceTable<WorkoutReference>> {
        debug!("fetching workout catalogue from {}", url);
        let body = self.client.get(url).send()?.error_for_status()?.text()?;
        let workouts = parse_references(&body, WorkoutReference::is_valid)?;
        info!("loaded {} workouts from catalogue", workouts.len());
        Ok(ReferenceTable::new(workouts))
    }

    fn fitness_path(session: &Session, action: &str) -> String {
        session.endpoint(&format!("/health/fitness/{}/{}", session.user_id(), action))
    }

    fn send(&self, session: &Session, request: SaveRequest<'_>) -> Result<SaveOutcome> {
        match request {
            SaveRequest::Workout(entry) => {
                let response = self
                    .client
                    .post(Self::fitness_path(session, "add-workout"))
                    .query(&[
                        ("workoutName", entry.name.clone()),
                        ("inputReps", entry.reps.to_string()),
                        ("inputSets", entry.sets.to_string()),
                        ("inputDuration", entry.duration_minutes.to_string()),
                    ])
                    .header(CONTENT_TYPE, "application/json")
                    .bearer_auth(session.token())
                    .send()?;
                Ok(status_outcome(&response))
            }
            SaveRequest::CustomWorkout(entry) => {
                let response = self
                    .client
                    .post(Self::fitness_path(session, "add-custom-workout"))
                    .bearer_auth(session.token())
                    .json(&CustomWorkoutPayload::from(entry))
                    .send()?;
                Ok(status_outcome(&response))
            }
            SaveRequest::WorkoutLog => {
                let response = self
                    .client
                    .post(Self::fitness_path(session, "save-workouts"))
                    .header(CONTENT_TYPE, "application/json")
                    .bearer_auth(session.token())
                    .send()?;

                let outcome = status_outcome(&response);
                if !outcome.is_success() {
                    return Ok(outcome);
                }

                // A null body means the backend had nothing to save.
                let body: serde_json::Value = response.json()?;
                if body.is_null() {
                    Ok(SaveOutcome::Rejected("backend returned null".to_string()))
                } else {
                    Ok(SaveOutcome::Acknowledged)
                }
            }
            SaveRequest::WellBeing(report) => {
                // This endpoint takes the raw token, without the Bearer scheme.
                let response = self
                    .client
                    .post(session.endpoint("/wellbeing"))
                    .query(&[("userId", session.user_id())])
                    .header(AUTHORIZATION, session.token())
                    .json(report)
                    .send()?;

                let text = response.text()?;
                Ok(SaveOutcome::from_acknowledgement(
                    &text,
                    &[WELLBEING_SAVED, WELLBEING_UPDATED],
                ))
            }
        }
    }
}

impl SaveService for HttpBackend {
    fn save(&self, session: &Session, request: SaveRequest<'_>) -> Result<SaveOutcome> {
        let outcome = self.send(session, request)?;
        match &outcome {
            SaveOutcome::Acknowledged => {
                info!("{} saved for user {}", request.label(), session.user_id())
            }
            SaveOutcome::Rejected(reason) => warn!("{} rejected: {}", request.label(), reason),
        }
        Ok(outcome)
    }
}

fn status_outcome(response: &Response) -> SaveOutcome {
    let status = response.status();
    if status.is_success() {
        SaveOutcome::Acknowledged
    } else {
        SaveOutcome::Rejected(format!("HTTP {}", status))
    }
}
