use super::Context;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::RecordStore;
use crate::storage::{audit_log, hours_file};
use crate::ui::messages::{info, success};
use crate::utils::date;
use std::fs;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (if missing)
///  - the hours file, one empty row per day of the current month (if missing)
pub fn handle(ctx: &mut Context) -> AppResult<()> {
    println!("⚙️  Initializing punchclock…");

    if Config::init_file()? {
        success(format!("Config file: {}", Config::config_file().display()));
    } else {
        info(format!(
            "Config file already present: {}",
            Config::config_file().display()
        ));
    }

    let path = &ctx.hours_path;
    if path.exists() {
        info(format!("Hours file already present: {}", path.display()));
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let days = date::days_in_month(date::today());
    hours_file::save(path, &RecordStore::with_days(days as usize))?;

    audit_log::ttlog_quiet(
        &ctx.log_path,
        "init",
        &path.display().to_string(),
        &format!("Hours file created with {} days", days),
    );
    success(format!("Hours file:  {}", path.display()));
    Ok(())
}
