// File:    rail_fence.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: Rail Fence zig-zag transposition cipher.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Rail Fence cipher.
//!
//! The text is written diagonally over a number of rails, bouncing between the
//! top and bottom rail, and read off one rail at a time. A rail count of 0 or 1
//! leaves the text unchanged.

use log::debug;

/// The rail visited by each successive character: 0, 1, .., rails-1, rails-2, .., 1, 0, ..
///
/// `rails` must be at least 2.
fn rail_sequence(rails: usize) -> impl Iterator<Item = usize> {
    (0..rails).chain((1..rails - 1).rev()).cycle()
}

/// Rails beyond the text length are never visited, so the count is capped at
/// the number of characters.
fn effective_rails(rails: usize, len: usize) -> usize {
    rails.min(len)
}

/// Encodes `text` over `rails` rails.
#[must_use]
pub fn encode(text: &str, rails: usize) -> String {
    let rails = effective_rails(rails, text.chars().count());
    if rails <= 1 {
        return text.to_owned();
    }

    let mut fence: Vec<String> = vec![String::new(); rails];
    for (ch, rail) in text.chars().zip(rail_sequence(rails)) {
        fence[rail].push(ch);
    }
    fence.concat()
}

/// Decodes `cipher` that was encoded over `rails` rails.
#[must_use]
pub fn decode(cipher: &str, rails: usize) -> String {
    let chars: Vec<char> = cipher.chars().collect();
    let n = chars.len();
    let rails = effective_rails(rails, n);
    if rails <= 1 {
        return cipher.to_owned();
    }
    debug!("rail fence decode: {n} chars over {rails} rails");

    // Which rail holds the character at each column.
    let marks: Vec<usize> = rail_sequence(rails).take(n).collect();

    // Each rail's run in the ciphertext starts where the previous one ends.
    let mut cursors = vec![0_usize; rails];
    for &rail in &marks {
        cursors[rail] += 1;
    }
    let mut start = 0;
    for cursor in &mut cursors {
        let len = *cursor;
        *cursor = start;
        start += len;
    }

    marks
        .into_iter()
        .map(|rail| {
            let ch = chars[cursors[rail]];
            cursors[rail] += 1;
            ch
        })
        .collect()
}
