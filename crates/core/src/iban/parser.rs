//! Parsing raw input and constructing IBANs from domestic accounts.

use once_cell::sync::Lazy;
use regex::Regex;

use super::checksum::compute_check_digits;
use super::error::IbanError;
use super::types::Iban;
use super::validation::IbanValidator;
use crate::country::CountryRegistry;

/// Uppercases ASCII letters and drops all whitespace.
///
/// Non-ASCII characters are kept so that the shape check rejects them.
#[must_use]
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Coarse IBAN shape: two letters, two digits, 11 to 30 letters or digits.
static IBAN_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z]{2}[0-9]{2}[A-Z0-9]{11,30}$").expect("Invalid IBAN shape regex pattern")
});

static ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9]+$").expect("Invalid alphanumeric regex pattern"));

impl Iban {
    /// Parses a full IBAN such as `"GB82 WEST 1234 5698 7654 32"`.
    ///
    /// Input is normalized first (see [`normalize`]). Only the coarse shape
    /// is checked; country rules and the checksum are left to
    /// [`IbanValidator::validate`].
    ///
    /// # Errors
    ///
    /// Returns `IbanError::InvalidFormat` if the normalized input is not two
    /// letters, two digits and 11 to 30 letters or digits.
    pub fn parse(raw: &str) -> Result<Self, IbanError> {
        let code = normalize(raw);
        if !IBAN_SHAPE.is_match(&code) {
            return Err(IbanError::InvalidFormat(code));
        }

        Ok(Self::from_parts(
            code[0..2].to_string(),
            code[2..4].to_string(),
            code[4..].to_string(),
        ))
    }

    /// Builds an IBAN from a domestic account number and a country code.
    ///
    /// Check digits are computed, and the result is returned only if it
    /// passes full validation against `registry`.
    ///
    /// # Example
    ///
    /// ```
    /// use ibanlib_core::{Iban, default_registry};
    ///
    /// let iban = Iban::from_bban("WEST12345698765432", "GB", default_registry()).unwrap();
    /// assert_eq!(iban.check_digits(), "82");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `IbanError::NotAlphanumeric` for empty or non-alphanumeric
    /// input, otherwise any error raised by validation.
    pub fn from_bban(bban: &str, country: &str, registry: &CountryRegistry) -> Result<Self, IbanError> {
        let bban = normalize(bban);
        let country = normalize(country);

        if !ALPHANUMERIC.is_match(&bban) {
            return Err(IbanError::NotAlphanumeric { field: "bban" });
        }
        if !ALPHANUMERIC.is_match(&country) {
            return Err(IbanError::NotAlphanumeric { field: "country" });
        }

        let check_digits = compute_check_digits(&bban, &country)?;
        let iban = Self::from_parts(country, check_digits, bban);

        IbanValidator::new(registry).validate(&iban)?;
        Ok(iban)
    }
}
