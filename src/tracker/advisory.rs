use std::fmt;
use std::str::FromStr;

use crate::error::TrackerError;
use crate::tracker::constants::{DEFAULT_ADVISORY, LOW_SLEEP_THRESHOLD_HOURS};

/// Self-reported mood on the well-being questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Happy,
    Sad,
    Neutral,
    Stressed,
    Relaxed,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Neutral,
        Mood::Stressed,
        Mood::Relaxed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Neutral => "Neutral",
            Mood::Stressed => "Stressed",
            Mood::Relaxed => "Relaxed",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = TrackerError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Mood::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TrackerError::InvalidInput(format!("unrecognized mood '{}'", wanted)))
    }
}

/// Whether last night's sleep was enough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SleepBucket {
    Low,
    Adequate,
}

impl SleepBucket {
    /// Below 6 hours is low; exactly 6 is adequate.
    pub fn from_hours(hours: f64) -> Self {
        if hours < LOW_SLEEP_THRESHOLD_HOURS {
            SleepBucket::Low
        } else {
            SleepBucket::Adequate
        }
    }
}

/// The advisory message for a mood and sleep bucket.
pub fn advice(mood: Mood, sleep: SleepBucket) -> &'static str {
    use Mood::*;
    use SleepBucket::*;

    match (mood, sleep) {
        (Happy, Low) => {
            "Feeling happy with little sleep? Enjoy it, but aim for a regular sleep schedule!"
        }
        (Happy, Adequate) => "Great to hear you're happy and well-rested!",
        (Sad, Low) => "Low sleep can worsen sadness. Prioritize a good night's sleep tonight.",
        (Sad, Adequate) => {
            "Feeling sad even with good sleep? Consider talking to a therapist or counselor."
        }
        (Neutral, Low) => {
            "Feeling neutral with low sleep might impact your mood later. Aim for better sleep!"
        }
        (Neutral, Adequate) => {
            "Neutral mood with good sleep is a good sign! Consider activities to boost your mood further."
        }
        (Stressed, Low) => {
            "Stress and low sleep can be a vicious cycle. Try relaxation techniques before bed."
        }
        (Stressed, Adequate) => {
            "Getting good sleep despite stress is great! Consider stress management techniques."
        }
        (Relaxed, Low) => {
            "Feeling relaxed despite low sleep might be temporary. Aim for a regular sleep schedule."
        }
        (Relaxed, Adequate) => "Relaxed and well-rested sounds like a perfect combination!",
    }
}

/// Pick the advisory for a raw mood label and hours slept.
///
/// Never fails: an unrecognized mood yields [`DEFAULT_ADVISORY`].
pub fn suggest(mood: &str, sleep_hours: f64) -> &'static str {
    match mood.parse::<Mood>() {
        Ok(mood) => advice(mood, SleepBucket::from_hours(sleep_hours)),
        Err(_) => DEFAULT_ADVISORY,
    }
}
