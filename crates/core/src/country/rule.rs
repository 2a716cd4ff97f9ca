//! Structural rule for one country's IBANs.

use regex::Regex;

use super::error::RegistryError;
use super::format::BbanFormat;

/// Shortest IBAN any country can register (2 + 2 + 11).
pub const MIN_IBAN_LENGTH: usize = 15;
/// Longest IBAN any country can register (2 + 2 + 30).
pub const MAX_IBAN_LENGTH: usize = 34;

/// Expected total length and BBAN structure for one country.
#[derive(Debug, Clone)]
pub struct CountryRule {
    length: usize,
    bban_pattern: Regex,
}

impl CountryRule {
    /// Creates a rule from a raw regular expression for the BBAN.
    ///
    /// The pattern is anchored at both ends.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::InvalidPattern` if the regex does not compile.
    pub fn new(length: usize, bban_pattern: &str) -> Result<Self, RegistryError> {
        let bban_pattern = Regex::new(&format!("^(?:{bban_pattern})$"))?;
        Ok(Self { length, bban_pattern })
    }

    /// Creates a rule from IBAN registry notation such as `4!a6!n8!n`.
    ///
    /// # Errors
    ///
    /// Returns an error if the notation is malformed.
    pub fn from_format(length: usize, bban_format: &str) -> Result<Self, RegistryError> {
        let format = BbanFormat::parse(bban_format)?;
        Self::new(length, &format.to_pattern())
    }

    /// Expected total IBAN length.
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Anchored BBAN pattern.
    #[must_use]
    pub fn bban_pattern(&self) -> &Regex {
        &self.bban_pattern
    }

    /// Returns true if `bban` has this country's structure.
    #[must_use]
    pub fn matches_bban(&self, bban: &str) -> bool {
        self.bban_pattern.is_match(bban)
    }
}
