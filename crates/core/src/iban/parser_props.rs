//! Property-based tests for IBAN parsing and formatting.
//!
//! - Normalization idempotence
//! - Pretty formatting layout

use proptest::prelude::*;

use super::parser::normalize;
use super::types::Iban;

/// Strategy to generate IBAN-shaped codes with arbitrary content.
fn iban_shaped() -> impl Strategy<Value = String> {
    ("[A-Z]{2}", "[0-9]{2}", "[A-Z0-9]{11,30}").prop_map(|(cc, cd, bban)| format!("{cc}{cd}{bban}"))
}

/// Strategy to scatter whitespace and lowercase letters through a code.
fn messy(code: String) -> impl Strategy<Value = String> {
    let len = code.len();
    prop::collection::vec((any::<bool>(), prop_oneof![Just(""), Just(" "), Just("\t"), Just("  ")]), len)
        .prop_map(move |noise| {
            code.chars()
                .zip(noise)
                .map(|(c, (lower, gap))| {
                    let c = if lower { c.to_ascii_lowercase() } else { c };
                    format!("{gap}{c}")
                })
                .collect()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Parsing raw input and its normalized form agree.
    #[test]
    fn prop_parse_ignores_normalization(raw in ".{0,40}") {
        prop_assert_eq!(Iban::parse(&raw), Iban::parse(&normalize(&raw)));
    }

    /// Normalization is idempotent.
    #[test]
    fn prop_normalize_idempotent(raw in ".{0,40}") {
        let once = normalize(&raw);
        prop_assert_eq!(normalize(&once), once);
    }

    /// Whitespace and case noise never changes the parsed IBAN.
    #[test]
    fn prop_parse_tolerates_noise((code, noisy) in iban_shaped().prop_flat_map(|code| {
        let noisy = messy(code.clone());
        (Just(code), noisy)
    })) {
        let clean = Iban::parse(&code).unwrap();
        let parsed = Iban::parse(&noisy).unwrap();
        prop_assert_eq!(parsed, clean);
    }

    /// Every IBAN-shaped code parses and splits 2 / 2 / rest.
    #[test]
    fn prop_parse_splits_shape(code in iban_shaped()) {
        let iban = Iban::parse(&code).unwrap();
        prop_assert_eq!(iban.country_code(), &code[0..2]);
        prop_assert_eq!(iban.check_digits(), &code[2..4]);
        prop_assert_eq!(iban.bban(), &code[4..]);
        prop_assert_eq!(iban.code(), code);
    }

    /// Pretty code is groups of four joined by single spaces.
    #[test]
    fn prop_pretty_code_layout(code in iban_shaped()) {
        let iban = Iban::parse(&code).unwrap();
        let pretty = iban.pretty_code();
        let groups: Vec<&str> = pretty.split(' ').collect();

        let (last, full) = groups.split_last().unwrap();
        prop_assert!(full.iter().all(|g| g.len() == 4));
        prop_assert!((1..=4).contains(&last.len()));
        prop_assert_eq!(pretty.replace(' ', ""), iban.code());
    }
}
