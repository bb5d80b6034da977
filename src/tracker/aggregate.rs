use std::ops::Add;

use crate::models::LineItem;

/// Sum the derived values of every item, from scratch.
///
/// An empty slice yields all-zero totals.
pub fn totals<T: LineItem>(items: &[T]) -> T::Totals {
    items
        .iter()
        .map(LineItem::derived)
        .fold(T::Totals::default(), Add::add)
}
