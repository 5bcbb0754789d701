/// Number of punch slots kept for every day.
pub const SLOTS: usize = 8;

/// One day of punches: up to eight clock-in times, filled left to right.
///
/// A slot is either unset (`None`) or holds the raw string that was punched.
/// Explicit punch values are stored as typed, so a slot is usually `HH:MM`
/// but nothing enforces it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayRecord {
    pub slots: [Option<String>; SLOTS],
}

impl DayRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from raw CSV-style fields; empty strings are unset slots.
    /// Missing trailing fields are unset, extra fields are ignored.
    pub fn from_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rec = Self::new();
        for (slot, value) in rec.slots.iter_mut().zip(fields) {
            *slot = normalize(value.as_ref());
        }
        rec
    }

    /// Raw field values, unset slots as empty strings.
    pub fn to_fields(&self) -> [&str; SLOTS] {
        let mut out = [""; SLOTS];
        for (field, slot) in out.iter_mut().zip(&self.slots) {
            *field = slot.as_deref().unwrap_or("");
        }
        out
    }

    pub fn get(&self, idx: usize) -> Option<&str> {
        self.slots.get(idx).and_then(|s| s.as_deref())
    }

    /// Store `value` in slot `idx`. An empty value clears the slot.
    pub fn set(&mut self, idx: usize, value: &str) {
        if let Some(slot) = self.slots.get_mut(idx) {
            *slot = normalize(value);
        }
    }

    pub fn clear(&mut self, idx: usize) {
        if let Some(slot) = self.slots.get_mut(idx) {
            *slot = None;
        }
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

fn normalize(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fields_maps_empty_strings_to_unset() {
        let rec = DayRecord::from_fields(["09:00", "", "13:00"]);
        assert_eq!(rec.get(0), Some("09:00"));
        assert_eq!(rec.get(1), None);
        assert_eq!(rec.get(2), Some("13:00"));
        assert_eq!(rec.filled(), 2);
    }

    #[test]
    fn from_fields_ignores_extra_fields() {
        let fields = vec!["1"; SLOTS + 3];
        let rec = DayRecord::from_fields(fields);
        assert!(rec.is_full());
    }

    #[test]
    fn to_fields_renders_unset_as_empty() {
        let mut rec = DayRecord::new();
        rec.set(1, "10:15");
        assert_eq!(rec.to_fields(), ["", "10:15", "", "", "", "", "", ""]);
    }

    #[test]
    fn set_empty_value_clears_slot() {
        let mut rec = DayRecord::from_fields(["08:00"]);
        rec.set(0, "");
        assert!(rec.is_empty());
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut rec = DayRecord::new();
        rec.set(SLOTS, "09:00");
        rec.clear(SLOTS + 1);
        assert!(rec.is_empty());
        assert_eq!(rec.get(SLOTS), None);
    }
}
