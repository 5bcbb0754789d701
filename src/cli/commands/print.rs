use crate::core::report::render_hours_table;
use crate::models::RecordStore;

pub fn handle(store: &RecordStore) {
    print!("{}", render_hours_table(store));
}
