// File:    alphabet.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: Shared 26-letter modular arithmetic and case-preserving character classification.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The 26-letter Latin alphabet used by the substitution ciphers.
//!
//! Only ASCII `A-Z` and `a-z` take part in the arithmetic. Every other
//! character is classified as [`LetterCase::Other`] and left untouched.

/// Number of letters in the alphabet.
pub const LETTER_COUNT: u8 = 26;

/// The case class of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterCase {
    /// An ASCII uppercase letter.
    Upper,
    /// An ASCII lowercase letter.
    Lower,
    /// Anything else.
    Other,
}

impl LetterCase {
    const fn base(self) -> Option<u8> {
        match self {
            Self::Upper => Some(b'A'),
            Self::Lower => Some(b'a'),
            Self::Other => None,
        }
    }
}

/// Classifies a character as an uppercase letter, a lowercase letter or other.
#[must_use]
pub const fn classify(ch: char) -> LetterCase {
    match ch {
        'A'..='Z' => LetterCase::Upper,
        'a'..='z' => LetterCase::Lower,
        _ => LetterCase::Other,
    }
}

/// Returns the position of a letter in the alphabet (0-25), ignoring case.
#[must_use]
pub fn offset(ch: char) -> Option<u8> {
    let base = classify(ch).base()?;
    // `classify` guarantees an ASCII letter here.
    u8::try_from(ch).ok().map(|code| code - base)
}

/// Builds the letter at `offset` in the given case. `offset` is reduced modulo 26.
#[must_use]
pub fn letter(case: LetterCase, offset: u8) -> Option<char> {
    case.base()
        .map(|base| char::from(base + offset % LETTER_COUNT))
}

/// Replaces a letter by `f(offset)` while keeping its case.
///
/// Non-letters are returned unchanged and `f` is not called for them.
/// The value returned by `f` is reduced modulo 26.
pub fn map_letter(ch: char, f: impl FnOnce(u8) -> u8) -> char {
    let case = classify(ch);
    offset(ch)
        .and_then(|x| letter(case, f(x)))
        .unwrap_or(ch)
}

/// Reduces any integer shift into `[0, 26)` using floor modulo.
#[must_use]
pub fn normalize(delta: i64) -> u8 {
    // rem_euclid is always in [0, 26), so the narrowing cannot fail.
    u8::try_from(delta.rem_euclid(i64::from(LETTER_COUNT))).unwrap_or_default()
}

/// Shifts a letter by `delta` positions, wrapping around the alphabet.
///
/// Negative deltas shift backwards. Non-letters are returned unchanged.
#[must_use]
pub fn shift(ch: char, delta: i32) -> char {
    let delta = normalize(i64::from(delta));
    map_letter(ch, |x| x + delta)
}
