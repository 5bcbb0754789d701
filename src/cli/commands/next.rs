use super::Context;
use crate::errors::AppResult;
use crate::notify::Notification;
use crate::storage::audit_log;
use crate::ui::messages::{info, success, warning};

/// Advisory text. The times are fixed placeholders, not computed from the
/// recorded punches.
pub const ADVISORY: [&str; 3] = [
    "next punch should be at:",
    "00:00 to complete 8 hours",
    "00:00 at maximum",
];

/// Print the advisory and, if confirmed, schedule the reminder notification.
/// A notifier failure is reported and does not fail the command.
pub fn handle(ctx: &mut Context) -> AppResult<()> {
    for line in ADVISORY {
        println!("{}", line);
    }

    if !(ctx.confirm)("Place notification for next punch?")? {
        return Ok(());
    }

    let n = Notification::from_config(&ctx.cfg);
    match ctx.notifier.schedule(&n) {
        Ok(()) => {
            audit_log::ttlog_quiet(
                &ctx.log_path,
                "notify",
                &format!("in {}s", n.delay.as_secs()),
                &n.message,
            );
            success(format!(
                "Notification scheduled in {} seconds",
                n.delay.as_secs()
            ));
        }
        Err(e) => {
            warning(e);
            info("No notification will be shown.");
        }
    }

    Ok(())
}
