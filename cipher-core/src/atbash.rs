// File:    atbash.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: Atbash mirror-alphabet cipher.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::alphabet::{self, LETTER_COUNT};

/// Mirrors every letter (A<->Z, B<->Y, ...). The transform is its own inverse.
#[must_use]
pub fn transform(text: &str) -> String {
    text.chars()
        .map(|ch| alphabet::map_letter(ch, |x| LETTER_COUNT - 1 - x))
        .collect()
}
