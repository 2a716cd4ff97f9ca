//! Property-based tests for IBAN construction and validation.
//!
//! - Construction round-trip
//! - Checksum invariant
//! - Check digit range

use proptest::prelude::*;

use super::checksum::{checksum_remainder, compute_check_digits};
use super::error::IbanError;
use super::types::Iban;
use super::validation::IbanValidator;
use crate::country::default_registry;

/// Strategy to generate a domestic GB account (`4!a6!n8!n`).
fn gb_bban() -> impl Strategy<Value = String> {
    "[A-Z]{4}[0-9]{14}"
}

/// Strategy to generate a domestic DE account (`8!n10!n`).
fn de_bban() -> impl Strategy<Value = String> {
    "[0-9]{18}"
}

/// Strategy to generate a (country, bban) pair for a few registered countries.
fn domestic_account() -> impl Strategy<Value = (&'static str, String)> {
    prop_oneof![
        gb_bban().prop_map(|bban| ("GB", bban)),
        de_bban().prop_map(|bban| ("DE", bban)),
        "[A-Z]{4}[0-9]{10}".prop_map(|bban| ("NL", bban)),
        "[0-9]{5}[A-Z0-9]{12}".prop_map(|bban| ("CH", bban)),
        "[A-Z]{4}[0-9]{5}[A-Z0-9]{18}".prop_map(|bban| ("MT", bban)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Constructed IBANs validate and survive a trip through their code.
    #[test]
    fn prop_construct_round_trip((country, bban) in domestic_account()) {
        let validator = IbanValidator::new(default_registry());
        let iban = validator.construct(&bban, country).unwrap();

        prop_assert!(validator.is_valid(Some(&iban)));

        let reparsed = Iban::parse(&iban.code()).unwrap();
        prop_assert_eq!(reparsed.country_code(), iban.country_code());
        prop_assert_eq!(reparsed.check_digits(), iban.check_digits());
        prop_assert_eq!(reparsed.bban(), iban.bban());
    }

    /// Computed check digits are always two characters in 02..=98.
    #[test]
    fn prop_check_digits_two_wide(bban in "[A-Z0-9]{11,30}", country in "[A-Z]{2}") {
        let digits = compute_check_digits(&bban, &country).unwrap();
        prop_assert_eq!(digits.len(), 2);
        let value: u8 = digits.parse().unwrap();
        prop_assert!((2..=98).contains(&value));
    }

    /// Every IBAN judged valid leaves remainder 1.
    #[test]
    fn prop_valid_implies_remainder_one(code in "GB[0-9]{2}[A-Z]{4}[0-9]{14}") {
        let iban = Iban::parse(&code).unwrap();
        if IbanValidator::default().validate(&iban).is_ok() {
            prop_assert_eq!(checksum_remainder(&iban).unwrap(), 1);
        }
    }

    /// Check digits 00, 01 and 99 are always rejected.
    #[test]
    fn prop_impossible_check_digits_rejected(
        digits in prop_oneof![Just("00"), Just("01"), Just("99")],
        country in "[A-Z]{2}",
        bban in "[A-Z0-9]{11,30}",
    ) {
        let iban = Iban::parse(&format!("{country}{digits}{bban}")).unwrap();
        prop_assert!(matches!(
            IbanValidator::default().validate(&iban),
            Err(IbanError::CheckDigitsOutOfRange(_))
        ));
    }

    /// Changing one BBAN digit of a valid IBAN breaks it.
    #[test]
    fn prop_single_digit_change_detected(bban in de_bban(), position in 0usize..18, delta in 1u8..10) {
        let iban = IbanValidator::default().construct(&bban, "DE").unwrap();

        let mut altered = iban.bban().as_bytes().to_vec();
        altered[position] = b'0' + (altered[position] - b'0' + delta) % 10;
        let altered = String::from_utf8(altered).unwrap();

        let code = format!("DE{}{altered}", iban.check_digits());
        prop_assert!(!IbanValidator::default().is_valid_str(&code));
    }
}
