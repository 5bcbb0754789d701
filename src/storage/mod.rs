pub mod audit_log;
pub mod hours_file;
