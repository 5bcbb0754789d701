use super::day_record::DayRecord;

/// The month of punches held in memory for one invocation.
///
/// Index 0 is day 1. Rows are positional: the day number of a record is its
/// index plus one, there is no date column in the hours file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    days: Vec<DayRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-filled with `n` empty days.
    pub fn with_days(n: usize) -> Self {
        Self {
            days: vec![DayRecord::new(); n],
        }
    }

    pub fn from_days(days: Vec<DayRecord>) -> Self {
        Self { days }
    }

    pub fn days(&self) -> &[DayRecord] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn push(&mut self, day: DayRecord) {
        self.days.push(day);
    }

    /// Record for the 1-based `day` of the month, if present.
    pub fn day(&self, day: u32) -> Option<&DayRecord> {
        let idx = (day as usize).checked_sub(1)?;
        self.days.get(idx)
    }

    /// Mutable record for the 1-based `day`, appending empty days as needed.
    /// Day 0 is treated as day 1.
    pub fn day_mut(&mut self, day: u32) -> &mut DayRecord {
        let idx = (day as usize).saturating_sub(1);
        if self.days.len() <= idx {
            self.days.resize(idx + 1, DayRecord::new());
        }
        &mut self.days[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_is_one_based() {
        let mut store = RecordStore::with_days(3);
        store.day_mut(2).set(0, "09:00");
        assert_eq!(store.days()[1].get(0), Some("09:00"));
        assert_eq!(store.day(2).and_then(|d| d.get(0)), Some("09:00"));
        assert!(store.day(0).is_none());
    }

    #[test]
    fn day_mut_pads_short_store() {
        let mut store = RecordStore::new();
        store.day_mut(18).set(0, "08:30");
        assert_eq!(store.len(), 18);
        assert!(store.days()[..17].iter().all(DayRecord::is_empty));
        assert_eq!(store.days()[17].get(0), Some("08:30"));
    }
}
