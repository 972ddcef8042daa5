// File:    frequency.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: Letter frequency counting over A-Z.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Letter frequency analysis.

use crate::error::{CipherError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Count and share of one letter.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct LetterFrequency {
    /// The uppercase letter.
    pub letter: char,
    /// How many times it occurred.
    pub count: usize,
    /// Share of all counted letters, in percent. Zero when nothing was counted.
    pub percent: f64,
}

/// Letter counts for A through Z.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FrequencyTable {
    /// One entry per letter, in alphabetical order.
    pub entries: Vec<LetterFrequency>,
    /// Sum of all counts.
    pub total_letters: usize,
}

/// Counts the letters A-Z in `text`, ignoring case and every other character.
///
/// Text without letters produces the empty table (see [`FrequencyTable::is_empty`]),
/// not an error.
#[must_use]
pub fn analyze(text: &str) -> FrequencyTable {
    let mut counts = [0_usize; 26];
    for ch in text.chars().flat_map(char::to_uppercase) {
        if ch.is_ascii_uppercase() {
            counts[(ch as usize) - ('A' as usize)] += 1;
        }
    }

    let total_letters: usize = counts.iter().sum();
    debug!("frequency analysis counted {total_letters} letter(s)");

    let entries = ('A'..='Z')
        .zip(counts)
        .map(|(letter, count)| LetterFrequency {
            letter,
            count,
            percent: percent_of(count, total_letters),
        })
        .collect();

    FrequencyTable {
        entries,
        total_letters,
    }
}

#[allow(clippy::cast_precision_loss)]
fn percent_of(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

impl FrequencyTable {
    /// `true` when no letters were found.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_letters == 0
    }

    /// Returns the table, or [`CipherError::EmptyInput`] if no letters were found.
    ///
    /// # Errors
    ///
    /// Fails when the analysed text contained no A-Z letters.
    pub fn require_letters(self) -> Result<Self> {
        if self.is_empty() {
            Err(CipherError::EmptyInput)
        } else {
            Ok(self)
        }
    }

    /// Looks up the entry for a letter, in either case.
    #[must_use]
    pub fn get(&self, letter: char) -> Option<&LetterFrequency> {
        let letter = letter.to_ascii_uppercase();
        self.entries.iter().find(|entry| entry.letter == letter)
    }

    /// The most frequent letter; ties go to the earlier letter.
    /// `None` for the empty table.
    #[must_use]
    pub fn most_common(&self) -> Option<&LetterFrequency> {
        if self.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .reduce(|best, entry| if entry.count > best.count { entry } else { best })
    }
}

impl fmt::Display for FrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}  {:>5}  {:>6.2}%", entry.letter, entry.count, entry.percent)?;
        }
        write!(f, "Total letters counted: {}", self.total_letters)
    }
}
