use crate::errors::AppResult;
use crate::ui::messages::warning;
use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Append an internal log line: `date|operation|target|message`.
pub fn ttlog(path: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    // Timestamp locale, formattato in ISO 8601
    let now = Local::now().to_rfc3339();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}|{}|{}|{}", now, operation, target, message)?;

    Ok(())
}

/// Same as [`ttlog`], but a failure only prints a warning.
pub fn ttlog_quiet(path: &Path, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(path, operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}

/// Read back all log lines, oldest first. A missing log is empty.
pub fn read_all(path: &Path) -> AppResult<Vec<String>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)?;
    Ok(content.lines().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn lines_are_appended_in_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("punchclock.log");

        ttlog(&path, "punch", "day 3 slot 1", "09:00").unwrap();
        ttlog(&path, "undo", "day 3 slot 1", "09:00").unwrap();

        let lines = read_all(&path).unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("|punch|day 3 slot 1|09:00"));
        assert!(lines[1].ends_with("|undo|day 3 slot 1|09:00"));
    }

    #[test]
    fn missing_log_reads_empty() {
        let dir = TempDir::new().unwrap();
        assert!(read_all(&dir.path().join("none.log")).unwrap().is_empty());
    }
}
