// Concrete scenarios, verbatim from the public contract's examples.

use super::*;

#[test]
fn strasse_matches_strasse_either_direction() {
    assert_eq!(find_str("STRASSE", "straße"), Some((0, 7)));
    assert_eq!(find_str("straße", "STRASSE"), Some((0, 7)));
}

#[test]
fn ascii_substring_case_insensitive() {
    assert_eq!(find_str("HELLO, WORLD.", "world"), Some((7, 5)));
}

#[test]
fn cyrillic_substring() {
    assert_eq!(find_str("ПРИВЕТ, МИР!", "мир"), Some((14, 6)));
}

#[test]
fn case_agnostic_fast_path_on_cjk_and_symbols() {
    assert_eq!(find_str("价格：¥1234", "¥1234"), Some((9, 6)));
}

#[test]
fn fold_ascii_and_expansions() {
    assert_eq!(fold_str("HELLO"), "hello");
    assert_eq!(fold_str("ẞ"), "ss");

    let folded_dotted_i = fold_str("İ");
    let mut chars = folded_dotted_i.chars();
    assert_eq!(chars.next(), Some('i'));
    assert_eq!(chars.next(), Some('\u{0307}'));
    assert_eq!(chars.next(), None);
}

#[test]
fn order_treats_case_and_expansions_as_equal() {
    assert_eq!(order_str("Hello", "HELLO"), std::cmp::Ordering::Equal);
    assert_eq!(order_str("straße", "STRASSE"), std::cmp::Ordering::Equal);
    assert_eq!(order_str("a", "b"), std::cmp::Ordering::Less);
}

#[test]
fn is_case_agnostic_matches_the_examples() {
    assert!(is_case_agnostic_str("价格：¥1234"));
    assert!(!is_case_agnostic_str("Hello"));
    assert!(!is_case_agnostic_str("a"));
}

#[test]
fn byte_oriented_api_agrees_with_str_api() {
    assert_eq!(
        find("HELLO, WORLD.".as_bytes(), "world".as_bytes()),
        find_str("HELLO, WORLD.", "world")
    );
    assert_eq!(order("Hello".as_bytes(), "HELLO".as_bytes()), order_str("Hello", "HELLO"));
    assert!(is_case_agnostic("价格".as_bytes()));

    let mut dst = [0u8; 32];
    let n = fold(b"STRASSE", &mut dst);
    assert_eq!(&dst[..n], fold_str("STRASSE").as_bytes());
}

#[test]
fn contains_is_find_is_some() {
    assert!(contains("HELLO, WORLD.", "world"));
    assert!(!contains("HELLO, WORLD.", "xyz"));
}
