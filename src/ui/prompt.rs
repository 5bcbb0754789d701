//! Interactive yes/no confirmation.

use crate::errors::{AppError, AppResult};
use std::io::{self, BufRead, Write};

/// True only for `y` / `yes`, any case, surrounding whitespace ignored.
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Ask `question` on `out` and read one answer line from `input`.
///
/// Anything but a yes is a no. A read error, or end of input before any
/// answer, is returned as an error.
pub fn confirm_from<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> AppResult<bool> {
    write!(out, "{} [y/n]: ", question)?;
    out.flush()?;

    let mut answer = String::new();
    let read = input.read_line(&mut answer).map_err(AppError::Confirmation)?;
    if read == 0 {
        return Err(AppError::Confirmation(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "no answer on stdin",
        )));
    }

    Ok(is_yes(&answer))
}

/// Ask a yes/no confirmation from the user on the terminal.
pub fn ask_confirmation(question: &str) -> AppResult<bool> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    confirm_from(&mut input, &mut out, question)
}
