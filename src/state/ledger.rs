use tracing::{debug, warn};

use crate::error::Result;
use crate::models::LineItem;
use crate::tracker::aggregate;

/// Ordered, append-only log of line items for one tracking session.
///
/// Totals are never stored; every call to [`Ledger::totals`] re-derives them
/// from the items.
#[derive(Debug, Clone)]
pub struct Ledger<T> {
    items: Vec<T>,
}

impl<T> Default for Ledger<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: LineItem> Ledger<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a built item.
    pub fn push(&mut self, item: T) {
        debug!("adding {} to ledger", item.name());
        self.items.push(item);
    }

    /// Append the result of a builder, or leave the ledger untouched if the
    /// builder refused.
    ///
    /// Returns whether an item was appended.
    pub fn try_push(&mut self, built: Result<T>) -> bool {
        match built {
            Ok(item) => {
                self.push(item);
                true
            }
            Err(e) => {
                warn!("line item not added: {}", e);
                false
            }
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn totals(&self) -> T::Totals {
        aggregate::totals(&self.items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrackerError;
    use crate::models::{WorkoutEntry, WorkoutTotals};

    fn workout(name: &str, calories: f64) -> WorkoutEntry {
        WorkoutEntry {
            name: name.to_string(),
            sets: 3,
            reps: 10,
            duration_minutes: 20,
            calories,
        }
    }

    #[test]
    fn test_preserves_insertion_order() {
        let mut ledger = Ledger::new();
        ledger.push(workout("Squats", 50.0));
        ledger.push(workout("Lunges", 40.0));
        ledger.push(workout("Squats", 25.0));

        let names: Vec<&str> = ledger.items().iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, ["Squats", "Lunges", "Squats"]);
        assert_eq!(ledger.totals(), WorkoutTotals { calories: 115.0 });
    }

    #[test]
    fn test_refused_item_is_noop() {
        let mut ledger = Ledger::new();
        ledger.push(workout("Squats", 50.0));

        let added = ledger.try_push(Err(TrackerError::InvalidInput("reps".to_string())));
        assert!(!added);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.totals().calories, 50.0);
    }

    #[test]
    fn test_totals_stable_across_reads() {
        let mut ledger: Ledger<WorkoutEntry> = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.totals(), WorkoutTotals::default());

        assert!(ledger.try_push(Ok(workout("Burpees", 33.0))));
        assert_eq!(ledger.totals(), ledger.totals());
        assert_eq!(ledger.last().map(|w| w.calories), Some(33.0));
    }
}
