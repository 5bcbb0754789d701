use crate::core::slots::last_filled_slot;
use crate::models::RecordStore;

/// What an undo did to today's record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoOutcome {
    /// 0-based slot that was cleared.
    pub slot: usize,
    /// Value the slot held, `None` when the undo changed nothing.
    pub cleared: Option<String>,
}

pub struct UndoLogic;

impl UndoLogic {
    /// Clear the most recent punch of `day`. The store is not persisted here.
    pub fn apply(store: &mut RecordStore, day: u32) -> UndoOutcome {
        let record = store.day_mut(day);
        let slot = last_filled_slot(record);
        let cleared = record.get(slot).map(str::to_string);
        record.clear(slot);

        UndoOutcome { slot, cleared }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayRecord;

    #[test]
    fn undo_clears_most_recent_punch() {
        let mut store = RecordStore::with_days(3);
        *store.day_mut(3) = DayRecord::from_fields(["09:00", "13:00"]);

        let out = UndoLogic::apply(&mut store, 3);

        assert_eq!(out.slot, 1);
        assert_eq!(out.cleared.as_deref(), Some("13:00"));
        assert_eq!(
            store.day(3).unwrap().to_fields(),
            ["09:00", "", "", "", "", "", "", ""]
        );
    }

    #[test]
    fn undo_on_empty_day_is_noop_on_last_slot() {
        let mut store = RecordStore::with_days(3);
        let before = store.clone();

        let out = UndoLogic::apply(&mut store, 2);

        assert_eq!(out.slot, 7);
        assert_eq!(out.cleared, None);
        assert_eq!(store, before);
    }

    #[test]
    fn undo_on_full_day_clears_last_slot() {
        let mut store = RecordStore::new();
        *store.day_mut(1) = DayRecord::from_fields(["1", "2", "3", "4", "5", "6", "7", "8"]);

        let out = UndoLogic::apply(&mut store, 1);

        assert_eq!(out.slot, 7);
        assert_eq!(out.cleared.as_deref(), Some("8"));
        assert_eq!(store.day(1).unwrap().filled(), 7);
    }
}
