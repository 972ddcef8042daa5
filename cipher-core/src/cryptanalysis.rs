// File:    cryptanalysis.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: Brute-force Caesar cryptanalysis ranked by the English-likeness scorer.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Caesar brute force.
//!
//! All 26 shifts are tried and the decodings are ranked by [`scorer::score`].

use crate::alphabet::LETTER_COUNT;
use crate::{caesar, scorer};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One decoding attempt.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CandidateResult {
    /// The shift that was undone, in `0..26`.
    pub shift: u8,
    /// The ciphertext decoded with `shift`.
    pub plaintext: String,
    /// English-likeness of `plaintext`.
    pub score: f64,
}

impl fmt::Display for CandidateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Shift: {} (score: {:.2}) {}",
            self.shift, self.score, self.plaintext
        )
    }
}

/// Tries every Caesar shift and ranks the results.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaesarCryptanalyzer;

impl CaesarCryptanalyzer {
    /// Decodes `ciphertext` with each shift `0..26` and returns all 26 candidates,
    /// best score first. Equal scores keep ascending shift order.
    #[must_use]
    pub fn brute_force(ciphertext: &str) -> Vec<CandidateResult> {
        let mut candidates: Vec<CandidateResult> = (0..LETTER_COUNT)
            .map(|shift| {
                let plaintext = caesar::decode(ciphertext, i32::from(shift));
                let score = scorer::score(&plaintext);
                trace!("shift {shift:>2} scored {score:.2}");
                CandidateResult {
                    shift,
                    plaintext,
                    score,
                }
            })
            .collect();

        // sort_by is stable, which is what breaks ties by shift.
        candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

        if let Some(best) = candidates.first() {
            debug!("best caesar shift {} with score {:.2}", best.shift, best.score);
        }
        candidates
    }

    /// The top-ranked candidate for `ciphertext`.
    #[must_use]
    pub fn best(ciphertext: &str) -> CandidateResult {
        // brute_force always yields 26 entries.
        Self::brute_force(ciphertext)
            .into_iter()
            .next()
            .unwrap_or_else(|| CandidateResult {
                shift: 0,
                plaintext: ciphertext.to_owned(),
                score: scorer::score(ciphertext),
            })
    }
}

/// Shorthand for [`CaesarCryptanalyzer::brute_force`].
#[must_use]
pub fn brute_force_caesar(ciphertext: &str) -> Vec<CandidateResult> {
    CaesarCryptanalyzer::brute_force(ciphertext)
}
