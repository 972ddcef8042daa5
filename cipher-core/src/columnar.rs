// File:    columnar.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: Keyed columnar transposition cipher without padding.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Columnar transposition.
//!
//! The text is written row by row into a grid with one column per key
//! character, then read column by column in the alphabetical order of the key.
//! No padding is added, so the last row may be short.

use crate::error::{CipherError, Result};
use log::debug;

fn normalize_key(key: &str) -> Result<Vec<char>> {
    let key: Vec<char> = key.trim().chars().collect();
    if key.is_empty() {
        return Err(CipherError::invalid_key("columnar key must not be empty"));
    }
    Ok(key)
}

/// Returns `true` when `key` has at least one non-whitespace character.
#[must_use]
pub fn is_valid_key(key: &str) -> bool {
    !key.trim().is_empty()
}

/// Derives the column reading order from the key.
///
/// Column indices are sorted by their lower-cased key character. The sort is
/// stable, so repeated characters keep their left-to-right order.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] if the key is empty.
pub fn column_order(key: &str) -> Result<Vec<usize>> {
    let key = normalize_key(key)?;
    Ok(order_of(&key))
}

fn order_of(key: &[char]) -> Vec<usize> {
    let lowered: Vec<String> = key.iter().map(|ch| ch.to_lowercase().collect()).collect();
    let mut order: Vec<usize> = (0..key.len()).collect();
    order.sort_by(|&a, &b| lowered[a].cmp(&lowered[b]));
    order
}

/// Encodes `text` with the column order derived from `key`.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] if the key is empty.
pub fn encode(text: &str, key: &str) -> Result<String> {
    let key = normalize_key(key)?;
    let cols = key.len();
    let order = order_of(&key);
    debug!("columnar encode: {cols} column(s), order {order:?}");

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    for &col in &order {
        out.extend(chars.iter().skip(col).step_by(cols));
    }
    Ok(out)
}

/// Decodes `cipher` that was encoded with `key`.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] if the key is empty.
pub fn decode(cipher: &str, key: &str) -> Result<String> {
    let key = normalize_key(key)?;
    let cols = key.len();
    let order = order_of(&key);

    let chars: Vec<char> = cipher.chars().collect();
    let n = chars.len();
    let rows = n.div_ceil(cols);
    let base_len = n / cols;
    let extra = n % cols;
    debug!("columnar decode: {n} chars, {rows} row(s), {extra} long column(s)");

    // Row-major filling without padding makes the leftmost `extra` columns one longer.
    let column_len = |col: usize| if col < extra { base_len + 1 } else { base_len };

    let mut columns: Vec<&[char]> = vec![Default::default(); cols];
    let mut rest = chars.as_slice();
    for &col in &order {
        let (chunk, tail) = rest.split_at(column_len(col));
        columns[col] = chunk;
        rest = tail;
    }

    let mut out = String::with_capacity(cipher.len());
    for row in 0..rows {
        out.extend(columns.iter().filter_map(|column| column.get(row)));
    }
    Ok(out)
}
