use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::storage::audit_log;
use crate::ui::messages::{header, info};
use std::path::Path;

pub fn handle(cmd: &Commands, log_path: &Path) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let lines = audit_log::read_all(log_path)?;

        if lines.is_empty() {
            info("No log entries.");
            return Ok(());
        }

        header("punchclock log");
        for line in lines {
            let mut parts = line.splitn(4, '|');
            let date = parts.next().unwrap_or("");
            let op = parts.next().unwrap_or("");
            let target = parts.next().unwrap_or("");
            let message = parts.next().unwrap_or("");
            println!("{:<32} {:<8} {:<20} {}", date, op, target, message);
        }
    }

    Ok(())
}
