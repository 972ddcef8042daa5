// File:    affine.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: Affine cipher (y = a*x + b mod 26) with modular-inverse decoding.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Affine cipher.
//!
//! Each letter offset `x` is mapped to `(a * x + b) mod 26`. Decoding needs
//! the inverse of `a` modulo 26, which only exists when `gcd(a, 26) = 1`.
//! Only 12 residues qualify: 1, 3, 5, 7, 9, 11, 15, 17, 19, 21, 23 and 25.

use crate::alphabet;
use crate::error::{CipherError, Result};
use log::debug;

const MODULUS: i64 = 26;

const fn gcd(mut a: i64, mut b: i64) -> i64 {
    a = a.abs();
    b = b.abs();
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Extended Euclid. Returns `None` when `a` has no inverse modulo `m`.
fn mod_inverse(a: i64, m: i64) -> Option<i64> {
    let (mut t, mut new_t) = (0_i64, 1_i64);
    let (mut r, mut new_r) = (m, a.rem_euclid(m));

    while new_r != 0 {
        let q = r.div_euclid(new_r);
        (t, new_t) = (new_t, t - q * new_t);
        (r, new_r) = (new_r, r - q * new_r);
    }

    (r == 1).then(|| t.rem_euclid(m))
}

/// Returns `true` when `a` is coprime with 26 and can therefore be used as the
/// multiplicative key.
#[must_use]
pub fn is_valid_a(a: i32) -> bool {
    gcd(i64::from(a), MODULUS) == 1
}

pub(crate) fn check_a(a: i32) -> Result<()> {
    if is_valid_a(a) {
        Ok(())
    } else {
        Err(CipherError::invalid_key(format!(
            "affine key a={a} is not coprime with 26"
        )))
    }
}

fn apply(text: &str, f: impl Fn(i64) -> i64) -> String {
    text.chars()
        .map(|ch| alphabet::map_letter(ch, |x| alphabet::normalize(f(i64::from(x)))))
        .collect()
}

/// Encodes `text` with `y = (a*x + b) mod 26`.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] if `a` is not coprime with 26, since such a
/// key could never be decoded.
pub fn encode(text: &str, a: i32, b: i32) -> Result<String> {
    check_a(a)?;
    let a = i64::from(a);
    let b = i64::from(b).rem_euclid(MODULUS);
    Ok(apply(text, |x| a * x + b))
}

/// Decodes `text` with `x = a^-1 * (y - b) mod 26`.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] if `a` has no inverse modulo 26.
pub fn decode(text: &str, a: i32, b: i32) -> Result<String> {
    check_a(a)?;
    let inverse = mod_inverse(i64::from(a), MODULUS).ok_or_else(|| {
        CipherError::invalid_key(format!("affine key a={a} has no inverse modulo 26"))
    })?;
    debug!("affine decode with a={a}, a^-1={inverse}");
    let b = i64::from(b).rem_euclid(MODULUS);
    Ok(apply(text, |y| inverse * (y - b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_of_every_valid_residue() {
        for a in 0..26 {
            match mod_inverse(a, 26) {
                Some(inv) => assert_eq!((a * inv) % 26, 1, "a={a}"),
                None => assert_ne!(gcd(a, 26), 1, "a={a}"),
            }
        }
    }

    #[test]
    fn inverse_handles_negative_input() {
        assert_eq!(mod_inverse(-1, 26), Some(25));
        assert_eq!(mod_inverse(-3, 26), mod_inverse(23, 26));
    }

    #[test]
    fn twelve_valid_residues() {
        let valid: Vec<i32> = (0..26).filter(|&a| is_valid_a(a)).collect();
        assert_eq!(valid, vec![1, 3, 5, 7, 9, 11, 15, 17, 19, 21, 23, 25]);
    }
}
