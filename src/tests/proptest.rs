// Randomized cross-checks: the dispatcher (kernel-accelerated paths) must
// always agree with the serial engine, across scripts the kernels treat
// specially and scripts they don't.

use proptest::prelude::*;

fn ascii_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(proptest::char::range('\u{20}', '\u{7E}'), 0..24)
        .prop_map(|cs| cs.into_iter().collect())
}

fn latin1_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            proptest::char::range('\u{20}', '\u{7E}'),
            proptest::char::range('\u{C0}', '\u{FF}'),
        ],
        0..24,
    )
    .prop_map(|cs| cs.into_iter().collect())
}

fn cyrillic_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            proptest::char::range('\u{20}', '\u{40}'),
            proptest::char::range('\u{410}', '\u{44F}'),
        ],
        0..24,
    )
    .prop_map(|cs| cs.into_iter().collect())
}

fn greek_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            proptest::char::range('\u{20}', '\u{40}'),
            proptest::char::range('\u{391}', '\u{3C9}'),
        ],
        0..24,
    )
    .prop_map(|cs| cs.into_iter().collect())
}

fn mixed_script_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            proptest::char::range('\u{20}', '\u{7E}'),
            proptest::char::range('\u{C0}', '\u{FF}'),
            proptest::char::range('\u{410}', '\u{44F}'),
            proptest::char::range('\u{391}', '\u{3C9}'),
            proptest::char::range('\u{530}', '\u{58F}'),
            Just('ß'),
            Just('ẞ'),
            Just('İ'),
        ],
        0..48,
    )
    .prop_map(|cs| cs.into_iter().collect())
}

fn cjk_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            proptest::char::range('\u{4E00}', '\u{4E40}'),
            proptest::char::range('\u{20}', '\u{2F}'),
        ],
        0..16,
    )
    .prop_map(|cs| cs.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn dispatcher_agrees_with_serial_ascii(haystack in ascii_strategy(), needle in ascii_strategy()) {
        prop_assert_eq!(
            crate::dispatch::find(&haystack, &needle),
            crate::serial_search::find_serial(&haystack, &needle)
        );
    }

    #[test]
    fn dispatcher_agrees_with_serial_latin1(haystack in latin1_strategy(), needle in latin1_strategy()) {
        prop_assert_eq!(
            crate::dispatch::find(&haystack, &needle),
            crate::serial_search::find_serial(&haystack, &needle)
        );
    }

    #[test]
    fn dispatcher_agrees_with_serial_cyrillic(haystack in cyrillic_strategy(), needle in cyrillic_strategy()) {
        prop_assert_eq!(
            crate::dispatch::find(&haystack, &needle),
            crate::serial_search::find_serial(&haystack, &needle)
        );
    }

    #[test]
    fn dispatcher_agrees_with_serial_greek(haystack in greek_strategy(), needle in greek_strategy()) {
        prop_assert_eq!(
            crate::dispatch::find(&haystack, &needle),
            crate::serial_search::find_serial(&haystack, &needle)
        );
    }

    #[test]
    fn dispatcher_agrees_with_serial_mixed_script(haystack in mixed_script_strategy(), needle in mixed_script_strategy()) {
        prop_assert_eq!(
            crate::dispatch::find(&haystack, &needle),
            crate::serial_search::find_serial(&haystack, &needle)
        );
    }

    #[test]
    fn dispatcher_agrees_with_serial_cjk(haystack in cjk_strategy(), needle in cjk_strategy()) {
        prop_assert_eq!(
            crate::dispatch::find(&haystack, &needle),
            crate::serial_search::find_serial(&haystack, &needle)
        );
    }

    #[test]
    fn fold_is_idempotent_over_random_inputs(s in mixed_script_strategy()) {
        let once = fold_str(&s);
        let twice = fold_str(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn order_agrees_with_fold_equality(a in mixed_script_strategy(), b in mixed_script_strategy()) {
        let equal_by_order = order_str(&a, &b) == std::cmp::Ordering::Equal;
        let equal_by_fold = fold_str(&a) == fold_str(&b);
        prop_assert_eq!(equal_by_order, equal_by_fold);
    }

    #[test]
    fn order_is_antisymmetric_over_random_inputs(a in mixed_script_strategy(), b in mixed_script_strategy()) {
        prop_assert_eq!(order_str(&a, &b).reverse(), order_str(&b, &a));
    }

    #[test]
    fn find_result_is_always_a_valid_byte_span(haystack in mixed_script_strategy(), needle in mixed_script_strategy()) {
        if let Some((start, len)) = find_str(&haystack, &needle) {
            prop_assert!(start + len <= haystack.len());
            prop_assert!(haystack.is_char_boundary(start));
            prop_assert!(haystack.is_char_boundary(start + len));
        }
    }
}
