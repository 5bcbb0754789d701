//! Monthly hours table.

use crate::models::{RecordStore, SLOTS};
use crate::utils::table::{Column, Table};

/// Placeholder shown for an unset slot, as wide as an `HH:MM` value.
pub const BLANK_SLOT: &str = "     ";

pub fn format_slot(slot: Option<&str>) -> &str {
    slot.unwrap_or(BLANK_SLOT)
}

/// Render every day of the store, one row per day, day numbers 1-based and
/// zero-padded to two digits.
pub fn render_hours_table(store: &RecordStore) -> String {
    let mut columns = vec![Column::new("day", 3)];
    columns.extend((1..=SLOTS).map(|n| Column::new(format!("hour {n}"), 6)));

    let mut table = Table::new(columns);
    for (i, day) in store.days().iter().enumerate() {
        let mut row = Vec::with_capacity(SLOTS + 1);
        row.push(format!("{:02}", i + 1));
        row.extend((0..SLOTS).map(|s| format_slot(day.get(s)).to_string()));
        table.add_row(row);
    }

    table.render()
}
