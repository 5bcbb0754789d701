//! Command handlers.
//!
//! Every handler receives the [`Context`] of the invocation: the effective
//! configuration, "today", and the interactive capabilities (confirmation
//! prompt, notifier), so tests can drive them without a terminal.

pub mod config;
pub mod init;
pub mod log;
pub mod next;
pub mod print;
pub mod punch;
pub mod undo;

use crate::config::Config;
use crate::errors::AppResult;
use crate::notify::Notifier;
use chrono::NaiveTime;
use std::path::PathBuf;

pub type Confirm<'a> = dyn FnMut(&str) -> AppResult<bool> + 'a;

pub struct Context<'a> {
    pub cfg: Config,
    pub hours_path: PathBuf,
    pub log_path: PathBuf,
    /// Today's day of the month, 1-based.
    pub day: u32,
    /// Wall-clock time used for `now` punches.
    pub now: NaiveTime,
    pub notifier: &'a dyn Notifier,
    pub confirm: &'a mut Confirm<'a>,
}
