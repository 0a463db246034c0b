//! Command implementations.

use std::io::{self, BufRead, Write};

use crossterm::style::Stylize;

pub mod card;
pub mod missing;
pub mod pao;
pub mod words;
pub mod words_summary;

/// Print `prompt` and read one trimmed line from stdin.
/// `None` on EOF or an empty line, which both end a quiz session.
fn prompt_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let line = line.trim().to_string();
    Ok(if line.is_empty() { None } else { Some(line) })
}

/// Red user-facing message for soft failures; the command still returns Ok.
fn soft_error(message: &str) {
    println!("{}", message.red());
}
