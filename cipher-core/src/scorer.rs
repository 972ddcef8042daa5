// File:    scorer.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: Heuristic scoring of how much a piece of text looks like English.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! English-likeness scoring.
//!
//! The score is a sum of small bonuses and penalties:
//!
//! * +2.5 for each distinct common English word present,
//! * up to +10 for a vowel ratio close to 40%,
//! * +0.6 per space, capped at 10 spaces,
//! * -0.8 per unusual symbol,
//! * +0.2 per ordinary punctuation mark, capped at 10.
//!
//! Higher is more English-like. The score may be negative.

use std::collections::HashSet;

/// The fixed list of common English words looked for by [`score`].
pub const COMMON_WORDS: [&str; 50] = [
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for", "not", "on",
    "with", "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "we",
    "say", "her", "she", "or", "an", "will", "my", "one", "all", "would", "there", "their",
    "what", "so", "up", "out", "if", "about", "who", "get", "which", "go", "me",
];

const WORD_BONUS: f64 = 2.5;
const VOWEL_WEIGHT: f64 = 10.0;
const TARGET_VOWEL_RATIO: f64 = 0.40;
const SPACE_BONUS: f64 = 0.6;
const WEIRD_PENALTY: f64 = 0.8;
const PUNCTUATION_BONUS: f64 = 0.2;
const CAP: usize = 10;

const fn is_normal_punctuation(ch: char) -> bool {
    matches!(ch, '.' | ',' | '\'' | '"' | '-' | '!' | '?')
}

/// Whitespace as matched by a regular-expression `\s`: the Unicode `White_Space` set
/// without NEL (U+0085), plus the byte-order mark (U+FEFF).
fn is_blank(ch: char) -> bool {
    match ch {
        '\u{85}' => false,
        '\u{feff}' => true,
        _ => ch.is_whitespace(),
    }
}

fn is_weird(ch: char) -> bool {
    !(ch.is_ascii_alphanumeric() || is_blank(ch) || is_normal_punctuation(ch))
}

#[allow(clippy::cast_precision_loss)]
fn capped(count: usize) -> f64 {
    count.min(CAP) as f64
}

/// Scores `text` by how closely it resembles English prose.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn score(text: &str) -> f64 {
    let lower = text.to_lowercase();

    let words: HashSet<&str> = lower
        .split(|ch: char| !ch.is_ascii_lowercase())
        .filter(|word| !word.is_empty())
        .collect();
    let hits = COMMON_WORDS.iter().filter(|word| words.contains(*word)).count();
    let mut total = hits as f64 * WORD_BONUS;

    let letters = lower.chars().filter(char::is_ascii_lowercase).count();
    let vowels = lower
        .chars()
        .filter(|&ch| matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u'))
        .count();
    if letters > 0 {
        let ratio = vowels as f64 / letters as f64;
        total += VOWEL_WEIGHT * (1.0 - (ratio - TARGET_VOWEL_RATIO).abs());
    }

    let spaces = text.chars().filter(|&ch| ch == ' ').count();
    total += capped(spaces) * SPACE_BONUS;

    let weird = text.chars().filter(|&ch| is_weird(ch)).count();
    total -= weird as f64 * WEIRD_PENALTY;

    let punctuation = text.chars().filter(|&ch| is_normal_punctuation(ch)).count();
    total += capped(punctuation) * PUNCTUATION_BONUS;

    total
}
