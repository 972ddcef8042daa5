// File:    vigenere.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: Vigenère polyalphabetic cipher driven by a letter keyword.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Vigenère cipher.
//!
//! Each letter of the input is shifted by the alphabet position of the next
//! keyword letter. Non-letters are copied through and do not consume a key
//! letter.

use crate::alphabet;
use crate::error::{CipherError, Result};
use log::debug;

/// Keeps only the letters of `key` and turns them into shift amounts.
fn key_shifts(key: &str) -> Result<Vec<i32>> {
    let shifts: Vec<i32> = key
        .chars()
        .filter_map(alphabet::offset)
        .map(i32::from)
        .collect();

    if shifts.is_empty() {
        return Err(CipherError::invalid_key(
            "vigenère key must contain at least one letter",
        ));
    }
    debug!("vigenère key normalized to {} letter(s)", shifts.len());
    Ok(shifts)
}

/// Returns `true` when `key` contains at least one letter.
#[must_use]
pub fn is_valid_key(key: &str) -> bool {
    key.chars().any(|ch| alphabet::offset(ch).is_some())
}

pub(crate) fn check_key(key: &str) -> Result<()> {
    key_shifts(key).map(drop)
}

fn apply(text: &str, key: &str, sign: i32) -> Result<String> {
    let shifts = key_shifts(key)?;
    let mut key_stream = shifts.iter().cycle();

    Ok(text
        .chars()
        .map(|ch| {
            if alphabet::offset(ch).is_none() {
                return ch;
            }
            // The cycle over a non-empty key never runs dry.
            let shift = key_stream.next().copied().unwrap_or_default();
            alphabet::shift(ch, sign * shift)
        })
        .collect())
}

/// Encodes `text` with the letters of `key`.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] if `key` has no letters.
pub fn encode(text: &str, key: &str) -> Result<String> {
    apply(text, key, 1)
}

/// Decodes `text` that was encoded with the letters of `key`.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] if `key` has no letters.
pub fn decode(text: &str, key: &str) -> Result<String> {
    apply(text, key, -1)
}
