#![allow(missing_docs)]
use cipher_core::{affine, atbash, caesar, is_valid_affine_a, vigenere, CipherError};

const SAMPLES: [&str; 6] = [
    "",
    "HELLO",
    "Hello, World!",
    "The quick brown fox jumps over the lazy dog.",
    "mixed CASE with 123 digits & symbols: ~@#",
    "Ünïcödé stays put: café, naïve, 東京",
];

#[test]
fn test_caesar_known_answer() {
    assert_eq!(caesar::encode("HELLO", 3), "KHOOR");
    assert_eq!(caesar::decode("KHOOR", 3), "HELLO");
    assert_eq!(caesar::encode("xyz", 3), "abc");
}

#[test]
fn test_caesar_roundtrip_any_shift() {
    for shift in (-60..=60).chain([i32::MIN, i32::MIN + 1, i32::MAX]) {
        for text in SAMPLES {
            let encoded = caesar::encode(text, shift);
            assert_eq!(caesar::decode(&encoded, shift), text, "shift {shift}");
        }
    }
}

#[test]
fn test_caesar_negative_shift_is_backwards() {
    assert_eq!(caesar::encode("abc", -1), "zab");
    assert_eq!(caesar::encode("ABC", -27), "ZAB");
    assert_eq!(caesar::encode("Hi!", 26), "Hi!");
}

#[test]
fn test_atbash_known_answer() {
    assert_eq!(atbash::transform("ABC"), "ZYX");
    assert_eq!(atbash::transform("Wizard, 42"), "Draziw, 42");
}

#[test]
fn test_atbash_is_involution() {
    for text in SAMPLES {
        assert_eq!(atbash::transform(&atbash::transform(text)), text);
    }
}

#[test]
fn test_affine_validity() {
    assert!(!is_valid_affine_a(6));
    assert!(is_valid_affine_a(5));
    assert!(!is_valid_affine_a(0));
    assert!(!is_valid_affine_a(13));
    assert!(is_valid_affine_a(-1));
    assert!(is_valid_affine_a(27));
}

#[test]
fn test_affine_known_answer() {
    // Standard textbook example with a=5, b=8.
    assert_eq!(
        affine::encode("AFFINE CIPHER", 5, 8).unwrap(),
        "IHHWVC SWFRCP"
    );
    assert_eq!(
        affine::decode("IHHWVC SWFRCP", 5, 8).unwrap(),
        "AFFINE CIPHER"
    );
}

#[test]
fn test_affine_roundtrip_all_valid_keys() {
    for a in (-30..=30).filter(|&a| is_valid_affine_a(a)) {
        for b in [-27, -1, 0, 7, 25, 26, 100] {
            for text in SAMPLES {
                let encoded = affine::encode(text, a, b).unwrap();
                assert_eq!(affine::decode(&encoded, a, b).unwrap(), text, "a={a} b={b}");
            }
        }
    }
}

#[test]
fn test_affine_b_is_normalized() {
    assert_eq!(
        affine::encode("Hello", 7, 3).unwrap(),
        affine::encode("Hello", 7, 3 + 26 * 5).unwrap()
    );
    assert_eq!(
        affine::encode("Hello", 7, -23).unwrap(),
        affine::encode("Hello", 7, 3).unwrap()
    );
}

#[test]
fn test_affine_invalid_a_fails_both_ways() {
    for a in [0, 2, 6, 13, 26, -4] {
        assert!(matches!(
            affine::encode("text", a, 1),
            Err(CipherError::InvalidKey(_))
        ));
        assert!(matches!(
            affine::decode("text", a, 1),
            Err(CipherError::InvalidKey(_))
        ));
    }
}

#[test]
fn test_vigenere_known_answer() {
    assert_eq!(vigenere::encode("HELLO", "KEY").unwrap(), "RIJVS");
    assert_eq!(vigenere::decode("RIJVS", "KEY").unwrap(), "HELLO");
    assert_eq!(
        vigenere::encode("ATTACKATDAWN", "LEMON").unwrap(),
        "LXFOPVEFRNHR"
    );
}

#[test]
fn test_vigenere_key_skips_non_letters() {
    // Spaces in the text do not consume key letters.
    assert_eq!(vigenere::encode("HE LLO", "KEY").unwrap(), "RI JVS");
    // Non-letters and case in the key are ignored.
    assert_eq!(vigenere::encode("HELLO", "k-e y!").unwrap(), "RIJVS");
    assert_eq!(vigenere::encode("hello", "KEY").unwrap(), "rijvs");
}

#[test]
fn test_vigenere_roundtrip() {
    for key in ["a", "KEY", "lemon", "Mixed Case Key", "z"] {
        for text in SAMPLES {
            let encoded = vigenere::encode(text, key).unwrap();
            assert_eq!(vigenere::decode(&encoded, key).unwrap(), text, "key {key}");
        }
    }
}

#[test]
fn test_vigenere_empty_key_is_rejected() {
    for key in ["", "   ", "1234", "!?"] {
        assert!(!vigenere::is_valid_key(key));
        assert!(matches!(
            vigenere::encode("text", key),
            Err(CipherError::InvalidKey(_))
        ));
        assert!(matches!(
            vigenere::decode("text", key),
            Err(CipherError::InvalidKey(_))
        ));
    }
    // Empty text with a bad key still fails.
    assert!(vigenere::encode("", "").is_err());
}
