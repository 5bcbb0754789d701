//! Delayed desktop notifications.
//!
//! The advisory only talks to the [`Notifier`] trait; [`ShellNotifier`] is
//! the implementation wired in by the binary.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::process::{Command, Stdio};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    /// Sound name, honored on macOS only.
    pub sound: String,
    pub delay: Duration,
}

impl Notification {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            title: cfg.notify_title.clone(),
            message: cfg.notify_message.clone(),
            sound: cfg.notify_sound.clone(),
            delay: Duration::from_secs(cfg.notify_delay_secs),
        }
    }
}

pub trait Notifier {
    /// Arrange for `n` to be shown after its delay. Must not block for the
    /// delay: the notification outlives the calling process.
    fn schedule(&self, n: &Notification) -> AppResult<()>;
}

/// Fires notifications through a detached `sh -c "sleep N; ..."`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellNotifier;

/// Quote `s` for a POSIX shell.
fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

/// Quote `s` as an AppleScript string literal.
fn applescript_quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', r"\\").replace('"', "\\\""))
}

impl ShellNotifier {
    /// Platform command that displays `n` right away.
    pub fn display_command(n: &Notification) -> AppResult<String> {
        if cfg!(target_os = "macos") {
            let script = format!(
                "display notification {} with title {} sound name {}",
                applescript_quote(&n.message),
                applescript_quote(&n.title),
                applescript_quote(&n.sound),
            );
            Ok(format!("osascript -e {}", shell_quote(&script)))
        } else if cfg!(unix) {
            Ok(format!(
                "notify-send {} {}",
                shell_quote(&n.title),
                shell_quote(&n.message)
            ))
        } else {
            Err(AppError::Notify(
                "desktop notifications are not supported on this platform".into(),
            ))
        }
    }

    /// Full shell line: wait, then display.
    pub fn command_line(n: &Notification) -> AppResult<String> {
        Ok(format!(
            "sleep {}; {}",
            n.delay.as_secs(),
            Self::display_command(n)?
        ))
    }
}

impl Notifier for ShellNotifier {
    fn schedule(&self, n: &Notification) -> AppResult<()> {
        let line = Self::command_line(n)?;

        Command::new("sh")
            .arg("-c")
            .arg(&line)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| AppError::Notify(format!("failed to start notifier: {}", e)))?;

        Ok(())
    }
}
