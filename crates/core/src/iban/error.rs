//! IBAN error types.
//!
//! Every expected failure is a variant here; the boolean façade
//! (`is_valid`, `is_valid_str`) collapses them to `false`.

use thiserror::Error;

/// Errors that can occur while parsing, constructing or validating an IBAN.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IbanError {
    // ========== Malformed Input ==========
    /// Input does not have the shape `2 letters + 2 digits + 11..30 alphanumerics`.
    #[error("Invalid IBAN format: {0:?}")]
    InvalidFormat(String),

    /// Domestic account or country code contains non-alphanumeric characters.
    #[error("{field} must be non-empty and alphanumeric")]
    NotAlphanumeric {
        /// Which input was rejected.
        field: &'static str,
    },

    // ========== Country Rules ==========
    /// Country code has no registered rule.
    #[error("Unknown country code: {0}")]
    UnknownCountry(String),

    /// Total length differs from the country's registered length.
    #[error("IBAN length for {country} must be {expected}, got {actual}")]
    LengthMismatch {
        /// Country code.
        country: String,
        /// Registered length.
        expected: usize,
        /// Actual length.
        actual: usize,
    },

    /// BBAN does not match the country's registered structure.
    #[error("BBAN does not match the structure registered for {country}")]
    BbanFormatMismatch {
        /// Country code.
        country: String,
    },

    // ========== Checksum ==========
    /// Check digits can never be produced by the mod-97 algorithm.
    #[error("Check digits {0:02} are outside 02..=98")]
    CheckDigitsOutOfRange(u8),

    /// Mod-97 remainder is not 1.
    #[error("Checksum mismatch: remainder {remainder}, expected 1")]
    ChecksumMismatch {
        /// Actual remainder.
        remainder: u32,
    },

    /// Letter-expanded account is not a decimal number.
    #[error("Account does not expand to a decimal number")]
    NonNumericExpansion,
}

impl IbanError {
    /// Returns the error code for reporting.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidFormat(_) => "INVALID_FORMAT",
            Self::NotAlphanumeric { .. } => "NOT_ALPHANUMERIC",
            Self::UnknownCountry(_) => "UNKNOWN_COUNTRY",
            Self::LengthMismatch { .. } => "LENGTH_MISMATCH",
            Self::BbanFormatMismatch { .. } => "BBAN_FORMAT_MISMATCH",
            Self::CheckDigitsOutOfRange(_) => "CHECK_DIGITS_OUT_OF_RANGE",
            Self::ChecksumMismatch { .. } => "CHECKSUM_MISMATCH",
            Self::NonNumericExpansion => "NON_NUMERIC_EXPANSION",
        }
    }

    /// Returns true if the input was rejected before any country or
    /// checksum rule was consulted.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::InvalidFormat(_) | Self::NotAlphanumeric { .. })
    }
}
