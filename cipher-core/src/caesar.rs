// File:    caesar.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: Caesar shift cipher built on the shared alphabet arithmetic.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Caesar cipher: every letter is shifted by the same amount.

use crate::alphabet;

/// Shifts every letter of `text` forward by `shift` positions.
///
/// Any integer is accepted; it is used modulo 26. Case and non-letters are kept.
#[must_use]
pub fn encode(text: &str, shift: i32) -> String {
    text.chars().map(|ch| alphabet::shift(ch, shift)).collect()
}

/// Reverses [`encode`] for the same `shift`.
#[must_use]
pub fn decode(text: &str, shift: i32) -> String {
    // Negate after reduction so that i32::MIN cannot overflow.
    let inverse = -i32::from(alphabet::normalize(i64::from(shift)));
    encode(text, inverse)
}
