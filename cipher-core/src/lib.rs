// File:    lib.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: The main library crate for cipher-core, exposing the classical ciphers and their analysis tools.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # Cipher Core Library
//!
//! Classical, pen-and-paper ciphers and the tools to attack them. None of
//! these ciphers offer real security; they are meant for teaching and puzzles.
//!
//! Every function here is pure: no I/O, no shared state.
//!
//! ```
//! use cipher_core::{caesar, CaesarCryptanalyzer};
//!
//! let secret = caesar::encode("Meet me at the usual place, and bring the map.", 7);
//! let best = CaesarCryptanalyzer::best(&secret);
//! assert_eq!(best.shift, 7);
//! ```

/// Shared letter arithmetic for the substitution ciphers.
pub mod alphabet;
/// Affine substitution cipher.
pub mod affine;
/// Atbash mirror cipher.
pub mod atbash;
/// Caesar shift cipher.
pub mod caesar;
/// A cipher paired with its key.
pub mod cipher;
/// Keyed columnar transposition cipher.
pub mod columnar;
/// Running several ciphers side by side.
pub mod compare;
/// Brute-force Caesar cryptanalysis.
pub mod cryptanalysis;
/// Error types.
pub mod error;
/// Letter frequency analysis.
pub mod frequency;
/// Playfair digraph cipher.
pub mod playfair;
/// Rail Fence transposition cipher.
pub mod rail_fence;
/// English-likeness scoring.
pub mod scorer;
/// Vigenère polyalphabetic cipher.
pub mod vigenere;

pub use affine::is_valid_a as is_valid_affine_a;
pub use cipher::{Cipher, CipherKind};
pub use cryptanalysis::{brute_force_caesar, CaesarCryptanalyzer, CandidateResult};
pub use error::{CipherError, Result};
pub use frequency::{analyze as analyze_frequency, FrequencyTable, LetterFrequency};
pub use playfair::{build_key_square_display, KeySquare};
