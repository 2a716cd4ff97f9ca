//! ISO 7064 MOD 97-10 arithmetic.
//!
//! The account is rearranged as `bban + country code + check digits`,
//! letters are expanded to two digits each, and the resulting decimal
//! number is reduced modulo 97. Expanded accounts run well past 64 bits, so
//! the number is held in a `BigUint`.

use ibanlib_shared::letters_to_numeric;
use num_bigint::BigUint;
use num_traits::ToPrimitive;

use super::error::IbanError;
use super::types::Iban;

/// Modulus of the IBAN checksum.
pub const MODULUS: u32 = 97;

/// Remainder a valid IBAN leaves.
pub const VALID_REMAINDER: u32 = 1;

/// Reduces a decimal digit string modulo 97.
///
/// # Errors
///
/// Returns `IbanError::NonNumericExpansion` if `digits` is empty or holds
/// anything but ASCII digits.
pub fn mod97(digits: &str) -> Result<u32, IbanError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IbanError::NonNumericExpansion);
    }

    let number = BigUint::parse_bytes(digits.as_bytes(), 10).ok_or(IbanError::NonNumericExpansion)?;
    (number % MODULUS).to_u32().ok_or(IbanError::NonNumericExpansion)
}

/// Computes the two check digits for a BBAN and country code.
///
/// The result is always two characters wide (`"06"`, not `"6"`).
///
/// # Example
///
/// ```
/// use ibanlib_core::iban::checksum::compute_check_digits;
///
/// assert_eq!(compute_check_digits("WEST12345698765432", "GB").unwrap(), "82");
/// ```
///
/// # Errors
///
/// Returns `IbanError::NonNumericExpansion` if the inputs contain characters
/// other than letters and digits.
pub fn compute_check_digits(bban: &str, country_code: &str) -> Result<String, IbanError> {
    let account = letters_to_numeric(&format!("{bban}{country_code}00"));
    let remainder = mod97(&account)?;
    Ok(format!("{:02}", 98 - remainder))
}

/// Returns the mod-97 remainder of a rearranged IBAN.
///
/// # Errors
///
/// Returns `IbanError::NonNumericExpansion` if the IBAN holds characters
/// other than letters and digits.
pub fn checksum_remainder(iban: &Iban) -> Result<u32, IbanError> {
    let rearranged = format!("{}{}{}", iban.bban(), iban.country_code(), iban.check_digits());
    mod97(&letters_to_numeric(&rearranged))
}

impl Iban {
    /// Recomputes the check digits this IBAN's BBAN and country should carry.
    ///
    /// # Errors
    ///
    /// Returns `IbanError::NonNumericExpansion` if the parts cannot be
    /// expanded to a number.
    pub fn expected_check_digits(&self) -> Result<String, IbanError> {
        compute_check_digits(self.bban(), self.country_code())
    }
}
