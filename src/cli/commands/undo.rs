use super::Context;
use crate::core::undo::UndoLogic;
use crate::errors::AppResult;
use crate::models::RecordStore;
use crate::storage::{audit_log, hours_file};
use crate::ui::messages::{info, success, warning};

/// Undo today's last punch after confirmation, then save.
pub fn handle(ctx: &mut Context, store: &mut RecordStore) -> AppResult<()> {
    if !(ctx.confirm)("Do you really want to undo the last punch?")? {
        info("Operation cancelled.");
        return Ok(());
    }

    let out = UndoLogic::apply(store, ctx.day);
    hours_file::save(&ctx.hours_path, store)?;

    match &out.cleared {
        Some(value) => {
            audit_log::ttlog_quiet(
                &ctx.log_path,
                "undo",
                &format!("day {} slot {}", ctx.day, out.slot + 1),
                value,
            );
            success(format!(
                "Removed {} from slot {} of day {:02}",
                value,
                out.slot + 1,
                ctx.day
            ));
        }
        None => warning(format!("No punch recorded for day {:02}", ctx.day)),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::testing::{RecordingNotifier, answers, context};
    use crate::models::DayRecord;
    use tempfile::TempDir;

    fn store() -> RecordStore {
        let mut store = RecordStore::with_days(4);
        *store.day_mut(4) = DayRecord::from_fields(["09:00", "13:00"]);
        store
    }

    #[test]
    fn confirmed_undo_clears_and_saves() {
        let dir = TempDir::new().unwrap();
        let notifier = RecordingNotifier::default();
        let mut confirm = answers(&[true]);
        let mut ctx = context(&dir, 4, &notifier, &mut confirm);

        let mut store = store();
        handle(&mut ctx, &mut store).unwrap();

        let saved = hours_file::load(&ctx.hours_path);
        assert_eq!(
            saved.day(4).unwrap().to_fields(),
            ["09:00", "", "", "", "", "", "", ""]
        );
    }

    #[test]
    fn declined_undo_touches_nothing() {
        let dir = TempDir::new().unwrap();
        let notifier = RecordingNotifier::default();
        let mut confirm = answers(&[false]);
        let mut ctx = context(&dir, 4, &notifier, &mut confirm);

        let mut store = store();
        handle(&mut ctx, &mut store).unwrap();

        assert_eq!(store, self::store());
        assert!(!ctx.hours_path.exists());
    }
}
