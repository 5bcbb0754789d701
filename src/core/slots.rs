//! Slot selection for a single day.
//!
//! Slots fill left to right and empty right to left. Neither function reports
//! "nothing to do": both fall back to the last slot, so punching a full day
//! overwrites slot 8 and undoing an empty day clears an already-empty slot 8.

use crate::models::{DayRecord, SLOTS};

const LAST: usize = SLOTS - 1;

fn first_unset(day: &DayRecord) -> Option<usize> {
    day.slots.iter().position(Option::is_none)
}

/// Index of the slot the next punch goes into.
///
/// Returns the first unset slot, or the last slot when the day is full.
pub fn next_empty_slot(day: &DayRecord) -> usize {
    first_unset(day).unwrap_or(LAST)
}

/// Index of the slot an undo clears.
///
/// Returns the slot just before the first unset one. When slot 1 is unset
/// (nothing punched yet) or every slot is set, the last slot is returned.
pub fn last_filled_slot(day: &DayRecord) -> usize {
    match first_unset(day) {
        Some(0) | None => LAST,
        Some(i) => i - 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(fields: &[&str]) -> DayRecord {
        DayRecord::from_fields(fields)
    }

    #[test]
    fn next_slot_on_empty_day_is_first() {
        assert_eq!(next_empty_slot(&DayRecord::new()), 0);
    }

    #[test]
    fn next_slot_follows_last_punch() {
        assert_eq!(next_empty_slot(&day(&["09:00"])), 1);
        assert_eq!(next_empty_slot(&day(&["09:00", "12:00", "13:00"])), 3);
    }

    #[test]
    fn next_slot_on_full_day_is_last() {
        let full = day(&["1", "2", "3", "4", "5", "6", "7", "8"]);
        assert_eq!(next_empty_slot(&full), LAST);
    }

    #[test]
    fn last_filled_is_before_first_gap() {
        assert_eq!(last_filled_slot(&day(&["09:00", "13:00"])), 1);
        assert_eq!(last_filled_slot(&day(&["09:00"])), 0);
    }

    #[test]
    fn last_filled_on_empty_day_is_last() {
        assert_eq!(last_filled_slot(&DayRecord::new()), LAST);
    }

    #[test]
    fn last_filled_on_full_day_is_last() {
        let full = day(&["1", "2", "3", "4", "5", "6", "7", "8"]);
        assert_eq!(last_filled_slot(&full), LAST);
    }

    #[test]
    fn selection_stops_at_first_gap() {
        // slot 3 set after a gap in slot 2: the gap wins
        let holed = day(&["09:00", "", "14:00"]);
        assert_eq!(next_empty_slot(&holed), 1);
        assert_eq!(last_filled_slot(&holed), 0);
    }
}
