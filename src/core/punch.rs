use crate::core::slots::next_empty_slot;
use crate::models::RecordStore;
use crate::utils::time::resolve_punch_value;
use chrono::NaiveTime;

/// What a punch-in did to today's record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PunchOutcome {
    /// 0-based slot that received the value.
    pub slot: usize,
    /// Value actually stored.
    pub value: String,
    /// Previous content of the last slot when the day was already full.
    pub overwritten: Option<String>,
}

/// High-level business logic for punching in.
pub struct PunchLogic;

impl PunchLogic {
    /// Write `input` (or the current time for `now`) into the next free slot
    /// of `day`. The store is not persisted here.
    pub fn apply(store: &mut RecordStore, day: u32, input: &str, now: NaiveTime) -> PunchOutcome {
        let value = resolve_punch_value(input, now);
        let record = store.day_mut(day);

        let slot = next_empty_slot(record);
        let overwritten = if record.is_full() {
            record.get(slot).map(str::to_string)
        } else {
            None
        };
        record.set(slot, &value);

        PunchOutcome {
            slot,
            value,
            overwritten,
        }
    }
}
