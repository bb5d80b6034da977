use serde::Serialize;

/// Payload of a well-being check-in as the backend expects it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WellBeingReport {
    #[serde(rename = "sleepTime")]
    pub sleep_hours: f64,

    pub mood: String,
}
