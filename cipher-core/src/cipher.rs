// File:    cipher.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: A cipher together with its key, dispatching to the individual cipher modules.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::error::{CipherError, Result};
use crate::{affine, atbash, caesar, columnar, playfair, rail_fence, vigenere};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The ciphers supported by this crate.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CipherKind {
    /// Caesar shift.
    Caesar,
    /// Atbash mirror alphabet.
    Atbash,
    /// Affine `a*x + b`.
    Affine,
    /// Vigenère keyword shifts.
    Vigenere,
    /// Rail Fence zig-zag.
    #[serde(rename = "railfence")]
    RailFence,
    /// Keyed columnar transposition.
    Columnar,
    /// Playfair digraphs.
    Playfair,
}

impl CipherKind {
    /// Every kind, in menu order.
    pub const ALL: [Self; 7] = [
        Self::Caesar,
        Self::Atbash,
        Self::Vigenere,
        Self::RailFence,
        Self::Affine,
        Self::Columnar,
        Self::Playfair,
    ];

    /// Short lowercase identifier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Caesar => "caesar",
            Self::Atbash => "atbash",
            Self::Affine => "affine",
            Self::Vigenere => "vigenere",
            Self::RailFence => "railfence",
            Self::Columnar => "columnar",
            Self::Playfair => "playfair",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Caesar => "Caesar",
            Self::Atbash => "Atbash",
            Self::Affine => "Affine",
            Self::Vigenere => "Vigenère",
            Self::RailFence => "Rail Fence",
            Self::Columnar => "Columnar Transposition",
            Self::Playfair => "Playfair",
        }
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for CipherKind {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "caesar" => Ok(Self::Caesar),
            "atbash" => Ok(Self::Atbash),
            "affine" => Ok(Self::Affine),
            "vigenere" => Ok(Self::Vigenere),
            "railfence" | "rail-fence" => Ok(Self::RailFence),
            "columnar" | "transposition" => Ok(Self::Columnar),
            "playfair" => Ok(Self::Playfair),
            other => Err(CipherError::invalid_key(format!("unknown cipher '{other}'"))),
        }
    }
}

/// A cipher with its key.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "cipher", rename_all = "lowercase")]
pub enum Cipher {
    /// Caesar with an integer shift (used modulo 26).
    Caesar {
        /// Letters to shift forward.
        shift: i32,
    },
    /// Atbash, which has no key.
    Atbash,
    /// Affine with multiplier `a` (coprime with 26) and offset `b`.
    Affine {
        /// Multiplicative key.
        a: i32,
        /// Additive key, used modulo 26.
        b: i32,
    },
    /// Vigenère with a letter keyword.
    Vigenere {
        /// Keyword; only its letters are used.
        keyword: String,
    },
    /// Rail Fence with a rail count. 0 and 1 leave text unchanged.
    #[serde(rename = "railfence")]
    RailFence {
        /// Number of rails.
        rails: usize,
    },
    /// Columnar transposition with a column key.
    Columnar {
        /// Column key; its length is the column count.
        key: String,
    },
    /// Playfair with a square keyword.
    Playfair {
        /// Keyword for the key square.
        key: String,
    },
}

impl Cipher {
    /// The parameters used by compare mode when none are given.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::Caesar { shift: 3 },
            Self::Atbash,
            Self::Vigenere {
                keyword: "KEY".to_owned(),
            },
            Self::RailFence { rails: 3 },
            Self::Affine { a: 5, b: 8 },
            Self::Columnar {
                key: "ZEBRA".to_owned(),
            },
            Self::Playfair {
                key: "MONARCHY".to_owned(),
            },
        ]
    }

    /// Which cipher this is.
    #[must_use]
    pub const fn kind(&self) -> CipherKind {
        match self {
            Self::Caesar { .. } => CipherKind::Caesar,
            Self::Atbash => CipherKind::Atbash,
            Self::Affine { .. } => CipherKind::Affine,
            Self::Vigenere { .. } => CipherKind::Vigenere,
            Self::RailFence { .. } => CipherKind::RailFence,
            Self::Columnar { .. } => CipherKind::Columnar,
            Self::Playfair { .. } => CipherKind::Playfair,
        }
    }

    /// Checks the key without transforming any text.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] for an affine `a` not coprime with 26,
    /// or an empty Vigenère, columnar or Playfair key.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Caesar { .. } | Self::Atbash | Self::RailFence { .. } => Ok(()),
            Self::Affine { a, .. } => affine::check_a(*a),
            Self::Vigenere { keyword } => vigenere::check_key(keyword),
            Self::Columnar { key } => columnar::column_order(key).map(drop),
            Self::Playfair { key } => playfair::check_key(key),
        }
    }

    /// Encodes `text`.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] when the key is unusable.
    pub fn encode(&self, text: &str) -> Result<String> {
        match self {
            Self::Caesar { shift } => Ok(caesar::encode(text, *shift)),
            Self::Atbash => Ok(atbash::transform(text)),
            Self::Affine { a, b } => affine::encode(text, *a, *b),
            Self::Vigenere { keyword } => vigenere::encode(text, keyword),
            Self::RailFence { rails } => Ok(rail_fence::encode(text, *rails)),
            Self::Columnar { key } => columnar::encode(text, key),
            Self::Playfair { key } => playfair::encode(text, key),
        }
    }

    /// Decodes `text`.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] when the key is unusable.
    pub fn decode(&self, text: &str) -> Result<String> {
        match self {
            Self::Caesar { shift } => Ok(caesar::decode(text, *shift)),
            Self::Atbash => Ok(atbash::transform(text)),
            Self::Affine { a, b } => affine::decode(text, *a, *b),
            Self::Vigenere { keyword } => vigenere::decode(text, keyword),
            Self::RailFence { rails } => Ok(rail_fence::decode(text, *rails)),
            Self::Columnar { key } => columnar::decode(text, key),
            Self::Playfair { key } => playfair::decode(text, key),
        }
    }
}
