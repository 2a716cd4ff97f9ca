//! Country rule table errors.

use thiserror::Error;

/// Errors raised while building a country rule table.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Country code is not two uppercase Latin letters.
    #[error("Invalid country code: {0:?}")]
    InvalidCountryCode(String),

    /// BBAN structure notation could not be read.
    #[error("Invalid BBAN format {format:?}: {reason}")]
    InvalidFormat {
        /// The offending notation.
        format: String,
        /// What is wrong with it.
        reason: String,
    },

    /// BBAN pattern is not a valid regular expression.
    #[error("Invalid BBAN pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Registered IBAN length is outside the range any IBAN can have.
    #[error("IBAN length {length} for {country} is outside 15..=34")]
    LengthOutOfRange {
        /// Country code.
        country: String,
        /// Registered length.
        length: usize,
    },

    /// Registered IBAN length disagrees with a fixed-width BBAN format.
    #[error("IBAN length {length} for {country} does not match BBAN format length {format_length}")]
    LengthFormatMismatch {
        /// Country code.
        country: String,
        /// Registered total length.
        length: usize,
        /// BBAN length implied by the format.
        format_length: usize,
    },
}

impl RegistryError {
    /// Returns the error code for reporting.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCountryCode(_) => "INVALID_COUNTRY_CODE",
            Self::InvalidFormat { .. } => "INVALID_BBAN_FORMAT",
            Self::InvalidPattern(_) => "INVALID_BBAN_PATTERN",
            Self::LengthOutOfRange { .. } => "LENGTH_OUT_OF_RANGE",
            Self::LengthFormatMismatch { .. } => "LENGTH_FORMAT_MISMATCH",
        }
    }
}
