// File:    text_io.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: Reads input text from an argument, a file or stdin, and writes results.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use log::info;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Picks the input text: the positional argument wins, then `--input`, then stdin.
pub(crate) fn read_text(text: Option<&str>, input: Option<&Path>) -> io::Result<String> {
    if let Some(text) = text {
        return Ok(text.to_owned());
    }
    if let Some(path) = input {
        info!("Reading input from '{}'", path.display());
        return fs::read_to_string(path);
    }
    info!("Reading input from stdin");
    let text = io::read_to_string(io::stdin())?;
    // A trailing newline from `echo` or a heredoc is not part of the message.
    let trimmed = text
        .strip_suffix('\n')
        .map(|s| s.strip_suffix('\r').unwrap_or(s));
    Ok(trimmed.unwrap_or(&text).to_owned())
}

/// Writes `result` to `output`, or prints it when no path is given.
pub(crate) fn write_text(result: &str, output: Option<&Path>) -> io::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, result)?;
            info!("Wrote output to '{}'", path.display());
            Ok(())
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{result}")
        }
    }
}
