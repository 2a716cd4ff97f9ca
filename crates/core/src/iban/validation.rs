//! IBAN validation against country rules and the mod-97 checksum.

use tracing::{debug, trace};

use super::checksum::{VALID_REMAINDER, checksum_remainder};
use super::error::IbanError;
use super::types::Iban;
use crate::country::{CountryRegistry, default_registry};

/// Lowest check digits the mod-97 algorithm can produce.
pub const MIN_CHECK_DIGITS: u8 = 2;
/// Highest check digits the mod-97 algorithm can produce.
pub const MAX_CHECK_DIGITS: u8 = 98;

/// Validates IBANs against a country rule table.
///
/// The validator borrows its registry, so one registry can back any number
/// of validators across threads.
#[derive(Debug, Clone, Copy)]
pub struct IbanValidator<'a> {
    registry: &'a CountryRegistry,
}

impl Default for IbanValidator<'static> {
    fn default() -> Self {
        Self::new(default_registry())
    }
}

impl<'a> IbanValidator<'a> {
    /// Creates a validator backed by `registry`.
    #[must_use]
    pub fn new(registry: &'a CountryRegistry) -> Self {
        Self { registry }
    }

    /// The registry this validator consults.
    #[must_use]
    pub fn registry(&self) -> &'a CountryRegistry {
        self.registry
    }

    /// Validates an IBAN.
    ///
    /// Checks run in order and stop at the first failure:
    /// 1. Check digits lie in `02..=98`
    /// 2. Country is known, and length and BBAN match its rule
    /// 3. Mod-97 remainder of the rearranged IBAN is 1
    ///
    /// # Errors
    ///
    /// Returns the `IbanError` of the first failing check.
    pub fn validate(&self, iban: &Iban) -> Result<(), IbanError> {
        let result = self.run_checks(iban);
        match &result {
            Ok(()) => trace!(country = %iban.country_code(), "IBAN accepted"),
            Err(err) => debug!(
                country = %iban.country_code(),
                reason = err.error_code(),
                "IBAN rejected"
            ),
        }
        result
    }

    fn run_checks(&self, iban: &Iban) -> Result<(), IbanError> {
        let check_digits = iban.check_digits_value();
        if !(MIN_CHECK_DIGITS..=MAX_CHECK_DIGITS).contains(&check_digits) {
            return Err(IbanError::CheckDigitsOutOfRange(check_digits));
        }

        let country = iban.country_code();
        let rule = self
            .registry
            .lookup(country)
            .ok_or_else(|| IbanError::UnknownCountry(country.to_string()))?;

        let length = iban.code().len();
        if length != rule.length() {
            return Err(IbanError::LengthMismatch {
                country: country.to_string(),
                expected: rule.length(),
                actual: length,
            });
        }
        if !rule.matches_bban(iban.bban()) {
            return Err(IbanError::BbanFormatMismatch {
                country: country.to_string(),
            });
        }

        let remainder = checksum_remainder(iban)?;
        if remainder != VALID_REMAINDER {
            return Err(IbanError::ChecksumMismatch { remainder });
        }

        Ok(())
    }

    /// Returns true if `iban` is present and valid.
    #[must_use]
    pub fn is_valid(&self, iban: Option<&Iban>) -> bool {
        iban.is_some_and(|iban| self.validate(iban).is_ok())
    }

    /// Parses and validates a raw string; any failure yields `false`.
    #[must_use]
    pub fn is_valid_str(&self, raw: &str) -> bool {
        self.is_valid(Iban::parse(raw).ok().as_ref())
    }

    /// Parses and fully validates a raw string.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing or validation fails.
    pub fn parse_valid(&self, raw: &str) -> Result<Iban, IbanError> {
        let iban = Iban::parse(raw)?;
        self.validate(&iban)?;
        Ok(iban)
    }

    /// Builds a valid IBAN from a domestic account and country code.
    ///
    /// # Errors
    ///
    /// See [`Iban::from_bban`].
    pub fn construct(&self, bban: &str, country: &str) -> Result<Iban, IbanError> {
        Iban::from_bban(bban, country, self.registry)
    }
}
