// File:    playfair.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: Playfair digraph cipher and its 5x5 key square.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Playfair cipher.
//!
//! Letters are substituted two at a time using a 5x5 square built from a
//! keyword, with J merged into I.
//!
//! Unlike the other ciphers in this crate, Playfair is lossy: the output is
//! always uppercase letters only. Case, digits, spaces and punctuation in the
//! input are dropped, J becomes I, and filler X letters are inserted between
//! doubled letters and after a trailing odd letter.

use crate::error::{CipherError, Result};
use log::{debug, warn};
use serde::Serialize;
use std::fmt;

/// Side length of the key square.
pub const SIZE: usize = 5;

/// The 25 letters of the square in standard order (no J).
const ALPHABET: &str = "ABCDEFGHIKLMNOPQRSTUVWXYZ";

const FILLER: char = 'X';

/// Uppercases, keeps only A-Z and folds J into I.
fn clean_letters(text: &str) -> Vec<char> {
    text.chars()
        .flat_map(char::to_uppercase)
        .filter(char::is_ascii_uppercase)
        .map(|ch| if ch == 'J' { 'I' } else { ch })
        .collect()
}

/// Returns `true` when `key` contains at least one letter.
#[must_use]
pub fn is_valid_key(key: &str) -> bool {
    !clean_letters(key).is_empty()
}

/// A 5x5 Playfair key square with its reverse lookup.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct KeySquare {
    grid: [[char; SIZE]; SIZE],
    #[serde(skip)]
    positions: [Option<(usize, usize)>; 26],
}

impl KeySquare {
    /// Builds the square for `key`.
    ///
    /// The cleaned key letters come first, without repeats, followed by the
    /// remaining letters of the alphabet. An empty key yields the plain
    /// alphabet square.
    #[must_use]
    pub fn new(key: &str) -> Self {
        let mut grid = [['A'; SIZE]; SIZE];
        let mut positions = [None; 26];
        let mut placed = 0;

        for ch in clean_letters(key).into_iter().chain(ALPHABET.chars()) {
            let slot = letter_index(ch);
            if positions[slot].is_some() {
                continue;
            }
            let (row, col) = (placed / SIZE, placed % SIZE);
            grid[row][col] = ch;
            positions[slot] = Some((row, col));
            placed += 1;
        }

        Self { grid, positions }
    }

    /// The letters of the square, row by row.
    #[must_use]
    pub const fn rows(&self) -> &[[char; SIZE]; SIZE] {
        &self.grid
    }

    /// The letter at `row`, `col`, both taken modulo 5.
    #[must_use]
    pub const fn at(&self, row: usize, col: usize) -> char {
        self.grid[row % SIZE][col % SIZE]
    }

    /// Finds the `(row, col)` of a letter. J is looked up as I.
    #[must_use]
    pub fn position(&self, letter: char) -> Option<(usize, usize)> {
        let letter = match letter.to_ascii_uppercase() {
            'J' => 'I',
            other if other.is_ascii_uppercase() => other,
            _ => return None,
        };
        self.positions[letter_index(letter)]
    }

    fn locate(&self, letter: char) -> (usize, usize) {
        // Only cleaned letters reach here, and every one of them is in the square.
        self.position(letter).unwrap_or((0, 0))
    }

    fn encode_pair(&self, a: char, b: char) -> [char; 2] {
        let (ra, ca) = self.locate(a);
        let (rb, cb) = self.locate(b);
        if ra == rb {
            [self.at(ra, ca + 1), self.at(rb, cb + 1)]
        } else if ca == cb {
            [self.at(ra + 1, ca), self.at(rb + 1, cb)]
        } else {
            [self.at(ra, cb), self.at(rb, ca)]
        }
    }

    fn decode_pair(&self, a: char, b: char) -> [char; 2] {
        let (ra, ca) = self.locate(a);
        let (rb, cb) = self.locate(b);
        if ra == rb {
            [self.at(ra, ca + SIZE - 1), self.at(rb, cb + SIZE - 1)]
        } else if ca == cb {
            [self.at(ra + SIZE - 1, ca), self.at(rb + SIZE - 1, cb)]
        } else {
            [self.at(ra, cb), self.at(rb, ca)]
        }
    }
}

impl fmt::Display for KeySquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.grid.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, letter) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

fn letter_index(letter: char) -> usize {
    (letter as usize).saturating_sub('A' as usize) % 26
}

/// Returns the 5x5 key square for `key`, for previewing.
#[must_use]
pub fn build_key_square_display(key: &str) -> [[char; SIZE]; SIZE] {
    *KeySquare::new(key).rows()
}

/// Splits text into digraphs: doubled letters are split by an X and a trailing
/// single letter is padded with an X.
#[must_use]
pub fn digraphs(text: &str) -> Vec<[char; 2]> {
    let letters = clean_letters(text);
    let mut pairs = Vec::with_capacity(letters.len() / 2 + 1);
    let mut i = 0;

    while i < letters.len() {
        let a = letters[i];
        match letters.get(i + 1) {
            Some(&b) if b != a => {
                pairs.push([a, b]);
                i += 2;
            }
            _ => {
                pairs.push([a, FILLER]);
                i += 1;
            }
        }
    }
    pairs
}

pub(crate) fn check_key(key: &str) -> Result<()> {
    if is_valid_key(key) {
        Ok(())
    } else {
        Err(CipherError::invalid_key(
            "playfair key must contain at least one letter",
        ))
    }
}

fn square_for(key: &str) -> Result<KeySquare> {
    check_key(key)?;
    let square = KeySquare::new(key);
    debug!("playfair key square:\n{square}");
    Ok(square)
}

fn note_dropped(text: &str, kept: usize) {
    if kept != text.chars().count() {
        warn!("playfair dropped non-letter characters; output is uppercase letters only");
    }
}

/// Encodes `text` with the square built from `key`.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] if `key` has no letters.
pub fn encode(text: &str, key: &str) -> Result<String> {
    let square = square_for(key)?;
    let pairs = digraphs(text);
    note_dropped(text, clean_letters(text).len());

    Ok(pairs
        .into_iter()
        .flat_map(|[a, b]| square.encode_pair(a, b))
        .collect())
}

/// Decodes `text` with the square built from `key`.
///
/// The ciphertext is cleaned but not re-split by the digraph rules; an odd
/// trailing letter is paired with an X.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] if `key` has no letters.
pub fn decode(text: &str, key: &str) -> Result<String> {
    let square = square_for(key)?;
    let letters = clean_letters(text);
    note_dropped(text, letters.len());
    if letters.len() % 2 == 1 {
        warn!("playfair ciphertext has odd length; padding the last letter with X");
    }

    Ok(letters
        .chunks(2)
        .flat_map(|pair| {
            let a = pair[0];
            let b = pair.get(1).copied().unwrap_or(FILLER);
            square.decode_pair(a, b)
        })
        .collect())
}
