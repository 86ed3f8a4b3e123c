use chub_masking::applier::{digit_count, strip_non_digits};
use chub_masking::{MaskExt, MaskKind};
use proptest::prelude::*;
use strum::IntoEnumIterator;

fn any_kind() -> impl Strategy<Value = MaskKind> {
    prop::sample::select(MaskKind::iter().collect::<Vec<_>>())
}

/// Keystroke-like input: digits mixed with separators and stray letters.
fn keystrokes() -> impl Strategy<Value = String> {
    "[0-9 ().,/$R-]{0,24}"
}

proptest! {
    #[test]
    fn formatting_preserves_digits(kind in any_kind(), raw in keystrokes()) {
        prop_assume!(kind != MaskKind::Currency);
        prop_assume!(digit_count(&raw) <= kind.rule().max_digits);

        let formatted = kind.apply(&raw);
        prop_assert_eq!(strip_non_digits(&formatted), strip_non_digits(&raw));
    }

    #[test]
    fn applying_twice_is_a_no_op(kind in any_kind(), raw in keystrokes()) {
        let once = kind.apply(&raw);
        let twice = kind.apply(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn output_respects_the_length_cap(kind in any_kind(), raw in keystrokes()) {
        let cap = kind.rule().max_formatted_length.unwrap_or(usize::MAX);
        prop_assert!(kind.apply(&raw).chars().count() <= cap);
    }

    #[test]
    fn validity_is_exactly_the_digit_range(kind in any_kind(), raw in keystrokes()) {
        let rule = kind.rule();
        let n = digit_count(&raw);
        prop_assert_eq!(kind.validate(&raw), rule.min_digits <= n && n <= rule.max_digits);
    }

    #[test]
    fn over_length_input_is_rejected(kind in any_kind(), extra in "[0-9]{1,6}") {
        let full = "9".repeat(kind.rule().max_digits);
        prop_assert!(kind.try_apply(&full).is_some());
        prop_assert_eq!(kind.try_apply(&format!("{full}{extra}")), None);
    }

    #[test]
    fn phone_grouping_follows_digit_count(digits in "[0-9]{10,11}") {
        let formatted = MaskKind::Phone.apply(&digits);
        let expected = if digits.len() == 10 {
            format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..])
        } else {
            format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..])
        };
        prop_assert_eq!(formatted, expected);
    }
}
