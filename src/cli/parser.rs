use clap::{Parser, Subcommand};
use std::ffi::OsString;

/// Command-line interface definition for punchclock
/// CLI application to record daily clock-in times in a CSV file
#[derive(Parser, Debug)]
#[command(
    name = "punchclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A tiny punch clock: record up to 8 clock-in times per day in a CSV file",
    long_about = None
)]
pub struct Cli {
    /// Override hours file path (useful for tests or a custom file)
    #[arg(global = true, long = "file", value_name = "PATH")]
    pub file: Option<String>,

    /// Punch in: `now` or an explicit time such as 09:00 (stored as typed)
    #[arg(long = "in", value_name = "VALUE", allow_hyphen_values = true)]
    pub punch_in: Option<String>,

    /// Print the hours table
    #[arg(long = "print", help = "Print the table of recorded punches")]
    pub print: bool,

    /// Undo today's last punch (asks for confirmation)
    #[arg(long = "undo", help = "Undo today's last punch")]
    pub undo: bool,

    /// Show the next-punch advisory and optionally schedule a notification
    #[arg(long = "next", help = "Show when the next punch is due")]
    pub next: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the configuration file and an empty hours file for this month
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal operations log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log")]
        print: bool,
    },
}

/// Flags historically spelled with a single dash (`-in now`, `-print`).
const LEGACY_FLAGS: [&str; 5] = ["in", "print", "undo", "next", "file"];

/// Rewrite single-dash spellings of the long flags to their `--` form.
///
/// `-in=09:00` is rewritten too. Values are left alone: only an argument
/// that directly names a flag is touched, and nothing after `--`.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;
    let mut expect_value = false;

    for arg in args.into_iter().map(Into::into) {
        if passthrough || expect_value {
            expect_value = false;
            out.push(arg);
            continue;
        }

        let Some(s) = arg.to_str() else {
            out.push(arg);
            continue;
        };

        if s == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }

        let legacy = s
            .strip_prefix('-')
            .filter(|rest| !rest.starts_with('-'))
            .and_then(|rest| {
                let (name, inline) = match rest.split_once('=') {
                    Some((name, _)) => (name, true),
                    None => (rest, false),
                };
                let takes_value = matches!(name, "in" | "file") && !inline;
                LEGACY_FLAGS
                    .contains(&name)
                    .then(|| (format!("--{rest}"), takes_value))
            });

        match legacy {
            Some((long, takes_value)) => {
                expect_value = takes_value;
                out.push(long.into());
            }
            None => {
                expect_value = matches!(s, "--in" | "--file");
                out.push(arg);
            }
        }
    }

    out
}

impl Cli {
    /// Parse the process arguments, accepting the single-dash flag spellings.
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }
}
