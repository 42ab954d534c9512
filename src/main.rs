use std::env;
use std::io;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};

use minire::Regex;

// Usage: echo <input_text> | minire <pattern>
//
// Exits 0 if the whole line matches the pattern, 1 otherwise.
fn main() -> Result<ExitCode> {
    let Some(pattern) = env::args().nth(1) else {
        bail!("usage: minire <pattern>");
    };

    let regex = Regex::new(&pattern).with_context(|| format!("invalid pattern {pattern:?}"))?;

    let mut input_line = String::new();
    io::stdin()
        .read_line(&mut input_line)
        .context("failed to read input line")?;

    // Trim the trailing newline so it does not count against the match.
    let trimmed_input = input_line.trim_end_matches('\n');

    if regex.is_match(trimmed_input) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
