// File:    error.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: Error type shared by every cipher and analysis routine.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use thiserror::Error;

/// Errors reported by the cipher and analysis routines.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// The supplied key cannot be used with the requested cipher.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// The input contains no A-Z letters where at least one is required.
    #[error("no letters (A-Z) found in the input")]
    EmptyInput,
}

impl CipherError {
    pub(crate) fn invalid_key(message: impl Into<String>) -> Self {
        Self::InvalidKey(message.into())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CipherError>;
