//! punchclock library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod notify;
pub mod storage;
pub mod ui;
pub mod utils;

use cli::commands::{self, Context};
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use notify::ShellNotifier;
use storage::hours_file;
use ui::prompt::ask_confirmation;
use utils::{date, time};

/// Central command dispatcher
///
/// Subcommands run alone. Otherwise the hours file is loaded and the flags
/// run in a fixed order: next advisory, undo, punch-in, print.
pub fn dispatch(cli: &Cli, ctx: &mut Context) -> AppResult<()> {
    if let Some(cmd) = &cli.command {
        return match cmd {
            Commands::Init => commands::init::handle(ctx),
            Commands::Config { .. } => commands::config::handle(cmd, &ctx.cfg),
            Commands::Log { .. } => commands::log::handle(cmd, &ctx.log_path),
        };
    }

    let mut store = hours_file::load(&ctx.hours_path);

    if cli.next {
        commands::next::handle(ctx)?;
    }

    if cli.undo {
        commands::undo::handle(ctx, &mut store)?;
    }

    if let Some(value) = &cli.punch_in {
        commands::punch::handle(ctx, &mut store, value)?;
    }

    if cli.print {
        commands::print::handle(&store);
    }

    Ok(())
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse_normalized();

    // 2️⃣ carica config UNA sola volta
    let mut cfg = Config::load()?;

    // 3️⃣ applica eventuale override del file da riga di comando
    if let Some(custom) = &cli.file {
        cfg.hours_file = custom.clone();
    }

    let notifier = ShellNotifier;
    let mut confirm = |question: &str| ask_confirmation(question);

    let mut ctx = Context {
        hours_path: cfg.hours_path(),
        log_path: Config::log_file(),
        cfg,
        day: date::today_day(),
        now: time::now(),
        notifier: &notifier,
        confirm: &mut confirm,
    };

    // 4️⃣ passa tutto al dispatcher
    dispatch(&cli, &mut ctx)
}
