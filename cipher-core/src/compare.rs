// File:    compare.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: Runs several ciphers over the same text so their outputs can be compared.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::cipher::{Cipher, CipherKind};
use crate::error::Result;
use log::debug;
use serde::Serialize;
use std::time::Instant;

/// What one cipher produced: its ciphertext, or why it could not run.
///
/// Flattened into [`Comparison`], this serializes as either an `"output"` or an
/// `"error"` field.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The ciphertext.
    Output(String),
    /// The error message for an unusable key.
    Error(String),
}

impl Outcome {
    /// The ciphertext, if the cipher ran.
    #[must_use]
    pub fn output(&self) -> Option<&str> {
        match self {
            Self::Output(text) => Some(text),
            Self::Error(_) => None,
        }
    }

    /// The error message, if the cipher failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Output(_) => None,
            Self::Error(message) => Some(message),
        }
    }
}

impl From<Result<String>> for Outcome {
    fn from(result: Result<String>) -> Self {
        result.map_or_else(|e| Self::Error(e.to_string()), Self::Output)
    }
}

/// The outcome of encoding the shared text with one cipher.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Comparison {
    /// Which cipher produced this entry.
    pub kind: CipherKind,
    /// Display name of the cipher.
    pub name: &'static str,
    /// The ciphertext, or the error message if the key was unusable.
    #[serde(flatten)]
    pub outcome: Outcome,
    /// Time spent encoding, in milliseconds.
    pub elapsed_ms: f64,
}

impl Comparison {
    /// Case-insensitive substring match on the cipher name and id.
    /// A blank query matches everything.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || format!("{} {}", self.name, self.kind.id())
                .to_lowercase()
                .contains(&query)
    }
}

/// Encodes `text` with each cipher in turn, keeping the input order.
///
/// A cipher with an unusable key records its error instead of stopping the run.
#[must_use]
pub fn run(text: &str, ciphers: &[Cipher]) -> Vec<Comparison> {
    ciphers
        .iter()
        .map(|cipher| {
            let started = Instant::now();
            let outcome = Outcome::from(cipher.encode(text));
            let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
            debug!("compare: {} finished in {elapsed_ms:.3} ms", cipher.kind());
            Comparison {
                kind: cipher.kind(),
                name: cipher.kind().name(),
                outcome,
                elapsed_ms,
            }
        })
        .collect()
}
