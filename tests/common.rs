#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::Datelike;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const HEADER: &str = "hour1,hour2,hour3,hour4,hour5,hour6,hour7,hour8";

/// An isolated HOME plus an hours file path inside it.
pub struct Sandbox {
    pub home: TempDir,
    pub hours: PathBuf,
}

impl Sandbox {
    pub fn new() -> Self {
        let home = TempDir::new().expect("create temp home");
        let hours = home.path().join("hours.csv");
        Self { home, hours }
    }

    pub fn hours_str(&self) -> String {
        self.hours.to_string_lossy().to_string()
    }

    /// punchclock with HOME pointed at the sandbox, no `--file`.
    pub fn bare_cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("punchclock");
        cmd.env("HOME", self.home.path())
            .env_remove("EDITOR")
            .env_remove("VISUAL");
        cmd
    }

    /// punchclock with HOME pointed at the sandbox and `--file` set.
    pub fn cmd(&self) -> Command {
        let mut cmd = self.bare_cmd();
        cmd.args(["--file", self.hours_str().as_str()]);
        cmd
    }

    /// Write an hours file whose row for today holds `today_fields`.
    pub fn seed_today(&self, today_fields: &[&str]) {
        let mut content = String::from(HEADER);
        content.push('\n');
        for d in 1..=today() {
            let mut fields: Vec<&str> = vec![""; 8];
            if d == today() {
                for (i, v) in today_fields.iter().enumerate() {
                    fields[i] = *v;
                }
            }
            content.push_str(&fields.join(","));
            content.push('\n');
        }
        fs::write(&self.hours, content).expect("seed hours file");
    }

    pub fn rows(&self) -> Vec<Vec<String>> {
        read_rows(&self.hours)
    }

    /// Today's row of the hours file.
    pub fn today_row(&self) -> Vec<String> {
        self.rows()
            .get(today() as usize - 1)
            .cloned()
            .expect("row for today")
    }
}

pub fn today() -> u32 {
    chrono::Local::now().day()
}

/// Data rows of an hours file (header excluded), split on commas.
pub fn read_rows(path: &Path) -> Vec<Vec<String>> {
    let content = fs::read_to_string(path).expect("read hours file");
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some(HEADER));
    lines
        .map(|l| l.split(',').map(str::to_string).collect())
        .collect()
}
