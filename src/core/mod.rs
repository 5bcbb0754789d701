pub mod punch;
pub mod report;
pub mod slots;
pub mod undo;
