use super::Context;
use crate::core::punch::PunchLogic;
use crate::errors::AppResult;
use crate::models::RecordStore;
use crate::storage::{audit_log, hours_file};
use crate::ui::messages::{info, success, warning};
use crate::utils::time::{NOW, parse_time};

/// Punch in today with `value` (`now` or an explicit time) and save.
pub fn handle(ctx: &mut Context, store: &mut RecordStore, value: &str) -> AppResult<()> {
    if value == NOW {
        info("punching in now");
    } else {
        info(format!("punching in at {:?}", value));
        if parse_time(value).is_none() {
            warning(format!("{:?} is not a HH:MM time, storing it as typed", value));
        }
    }

    let out = PunchLogic::apply(store, ctx.day, value, ctx.now);
    println!("{}", out.value);

    if let Some(prev) = &out.overwritten {
        warning(format!(
            "All {} slots of day {:02} are set: slot {} ({}) was overwritten",
            crate::models::SLOTS,
            ctx.day,
            out.slot + 1,
            prev
        ));
    }

    hours_file::save(&ctx.hours_path, store)?;

    audit_log::ttlog_quiet(
        &ctx.log_path,
        "punch",
        &format!("day {} slot {}", ctx.day, out.slot + 1),
        &out.value,
    );

    success(format!(
        "Punched {} in slot {} of day {:02}",
        out.value,
        out.slot + 1,
        ctx.day
    ));
    Ok(())
}
