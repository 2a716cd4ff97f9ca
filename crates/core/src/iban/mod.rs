//! IBAN parsing, construction and validation.
//!
//! This module implements:
//! - The immutable `Iban` value type and its printed forms
//! - Parsing of raw strings and construction from domestic accounts
//! - Mod-97 check digit arithmetic
//! - Validation against a country rule table
//!
//! The free functions below use the process-wide default registry. Build an
//! `IbanValidator` over your own `CountryRegistry` to use a different table.

pub mod checksum;
pub mod error;
pub mod parser;
pub mod types;
pub mod validation;

#[cfg(test)]
mod parser_props;
#[cfg(test)]
mod validation_props;

pub use checksum::{checksum_remainder, compute_check_digits};
pub use error::IbanError;
pub use parser::normalize;
pub use types::Iban;
pub use validation::IbanValidator;

/// Parses a raw string, checking only the coarse IBAN shape.
///
/// # Errors
///
/// Returns `IbanError::InvalidFormat` if the input is not IBAN shaped.
pub fn parse(raw: &str) -> Result<Iban, IbanError> {
    Iban::parse(raw)
}

/// Builds a valid IBAN from a domestic account and country code using the
/// default registry.
///
/// # Errors
///
/// Returns an error if the input is malformed or the result does not
/// validate.
pub fn construct(bban: &str, country: &str) -> Result<Iban, IbanError> {
    IbanValidator::default().construct(bban, country)
}

/// Validates an IBAN against the default registry.
///
/// # Errors
///
/// Returns the `IbanError` of the first failing check.
pub fn validate(iban: &Iban) -> Result<(), IbanError> {
    IbanValidator::default().validate(iban)
}

/// Returns true if `iban` is present and valid under the default registry.
#[must_use]
pub fn is_valid(iban: Option<&Iban>) -> bool {
    IbanValidator::default().is_valid(iban)
}

/// Returns true if `raw` parses to a valid IBAN under the default registry.
#[must_use]
pub fn is_valid_str(raw: &str) -> bool {
    IbanValidator::default().is_valid_str(raw)
}
