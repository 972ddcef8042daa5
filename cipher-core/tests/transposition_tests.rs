#![allow(missing_docs)]
use cipher_core::{columnar, rail_fence, CipherError};

/// Text of every length from 0 to 40, with a few multi-byte characters mixed in.
fn texts() -> Vec<String> {
    let source: Vec<char> = "We are discovered, flee at once! ¿Qué? 東京 ok".chars().collect();
    (0..=source.len()).map(|n| source[..n].iter().collect()).collect()
}

#[test]
fn test_rail_fence_known_answer() {
    assert_eq!(
        rail_fence::encode("WEAREDISCOVEREDFLEEATONCE", 3),
        "WECRLTEERDSOEEFEAOCAIVDEN"
    );
    assert_eq!(
        rail_fence::decode("WECRLTEERDSOEEFEAOCAIVDEN", 3),
        "WEAREDISCOVEREDFLEEATONCE"
    );
    assert_eq!(rail_fence::encode("HELLOWORLD", 2), "HLOOLELWRD");
}

#[test]
fn test_rail_fence_roundtrip() {
    for rails in 2..=12 {
        for text in texts() {
            let encoded = rail_fence::encode(&text, rails);
            assert_eq!(encoded.chars().count(), text.chars().count());
            assert_eq!(rail_fence::decode(&encoded, rails), text, "rails {rails}");
        }
    }
}

#[test]
fn test_rail_fence_degenerate_rails_are_identity() {
    for rails in [0, 1] {
        assert_eq!(rail_fence::encode("Hello, World!", rails), "Hello, World!");
        assert_eq!(rail_fence::decode("Hello, World!", rails), "Hello, World!");
    }
    assert_eq!(rail_fence::encode("", 5), "");
    assert_eq!(rail_fence::decode("", 5), "");
}

#[test]
fn test_rail_fence_more_rails_than_text() {
    assert_eq!(rail_fence::encode("abc", 10), "abc");
    assert_eq!(rail_fence::decode("abc", 10), "abc");
}

#[test]
fn test_rail_fence_huge_rail_counts() {
    // Every rail count at or above the text length behaves like one rail per character.
    let u32_max = usize::try_from(u32::MAX).unwrap();
    let text = "WEAREDISCOVEREDFLEEATONCE";
    for rails in [u32_max, usize::MAX / 2, usize::MAX] {
        assert_eq!(rail_fence::encode(text, rails), text);
        assert_eq!(rail_fence::decode(text, rails), text);
    }

    let encoded = rail_fence::encode("HELLO", u32_max);
    assert_eq!(encoded, rail_fence::encode("HELLO", 5));
    assert_eq!(rail_fence::decode(&encoded, u32_max), "HELLO");

    for text in texts() {
        let encoded = rail_fence::encode(&text, u32_max);
        assert_eq!(rail_fence::decode(&encoded, u32_max), text);
    }
}

#[test]
fn test_columnar_known_answer() {
    assert_eq!(
        columnar::encode("WEAREDISCOVEREDFLEEATONCE", "ZEBRAS").unwrap(),
        "EVLNACDTESEAROFODEECWIREE"
    );
    assert_eq!(
        columnar::decode("EVLNACDTESEAROFODEECWIREE", "ZEBRAS").unwrap(),
        "WEAREDISCOVEREDFLEEATONCE"
    );
    assert_eq!(columnar::encode("HELLOWORLD", "ZEBRA").unwrap(), "ODLREOLLHW");
    assert_eq!(columnar::encode("attack at dawn", "KEY").unwrap(), "tcadnaa  wtkta");
}

#[test]
fn test_columnar_order_ties_are_stable() {
    assert_eq!(columnar::column_order("ZEBRA").unwrap(), vec![4, 2, 1, 3, 0]);
    assert_eq!(columnar::column_order("aAbB").unwrap(), vec![0, 1, 2, 3]);
    assert_eq!(columnar::column_order("BbAa").unwrap(), vec![2, 3, 0, 1]);
}

#[test]
fn test_columnar_roundtrip_uneven_lengths() {
    for key in ["K", "KEY", "ZEBRA", "apple", "Mississippi", "3142"] {
        for text in texts() {
            let encoded = columnar::encode(&text, key).unwrap();
            assert_eq!(columnar::decode(&encoded, key).unwrap(), text, "key {key}");
        }
    }
}

#[test]
fn test_columnar_single_column_is_identity() {
    assert_eq!(columnar::encode("Hello", "x").unwrap(), "Hello");
    assert_eq!(columnar::decode("Hello", "x").unwrap(), "Hello");
}

#[test]
fn test_columnar_empty_key_is_rejected() {
    for key in ["", "   ", "\t\n"] {
        assert!(!columnar::is_valid_key(key));
        assert!(matches!(
            columnar::encode("text", key),
            Err(CipherError::InvalidKey(_))
        ));
        assert!(matches!(
            columnar::decode("text", key),
            Err(CipherError::InvalidKey(_))
        ));
    }
}

#[test]
fn test_columnar_key_is_trimmed() {
    assert_eq!(
        columnar::encode("HELLOWORLD", "  ZEBRA ").unwrap(),
        columnar::encode("HELLOWORLD", "ZEBRA").unwrap()
    );
}
