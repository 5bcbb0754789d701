pub mod day_record;
pub mod record_store;

pub use day_record::{DayRecord, SLOTS};
pub use record_store::RecordStore;
