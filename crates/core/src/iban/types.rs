//! The IBAN value type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::IbanError;

/// Characters per group in the printed form.
const PRETTY_GROUP_SIZE: usize = 4;

/// An International Bank Account Number split into its three parts.
///
/// Values are immutable once built. Having an `Iban` only guarantees the
/// coarse shape; use an `IbanValidator` to check country rules and the
/// checksum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Iban {
    country_code: String,
    check_digits: String,
    bban: String,
}

impl Iban {
    pub(crate) fn from_parts(country_code: String, check_digits: String, bban: String) -> Self {
        Self {
            country_code,
            check_digits,
            bban,
        }
    }

    /// Two-letter country code.
    #[must_use]
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Two check digit characters, e.g. `"82"`.
    #[must_use]
    pub fn check_digits(&self) -> &str {
        &self.check_digits
    }

    /// Check digits as a number in `0..=99`.
    #[must_use]
    pub fn check_digits_value(&self) -> u8 {
        self.check_digits
            .bytes()
            .filter(u8::is_ascii_digit)
            .fold(0u8, |acc, b| acc.saturating_mul(10).saturating_add(b - b'0'))
    }

    /// Basic Bank Account Number.
    #[must_use]
    pub fn bban(&self) -> &str {
        &self.bban
    }

    /// Full IBAN without separators.
    #[must_use]
    pub fn code(&self) -> String {
        let mut code =
            String::with_capacity(self.country_code.len() + self.check_digits.len() + self.bban.len());
        code.push_str(&self.country_code);
        code.push_str(&self.check_digits);
        code.push_str(&self.bban);
        code
    }

    /// Full IBAN in groups of four separated by single spaces.
    ///
    /// The last group may be shorter.
    #[must_use]
    pub fn pretty_code(&self) -> String {
        let chars: Vec<char> = self.code().chars().collect();
        chars
            .chunks(PRETTY_GROUP_SIZE)
            .map(|group| group.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Iban {
    /// `{}` prints the flat code, `{:#}` the grouped form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(&self.pretty_code())
        } else {
            f.write_str(&self.code())
        }
    }
}

impl FromStr for Iban {
    type Err = IbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Iban {
    type Error = IbanError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Iban> for String {
    fn from(iban: Iban) -> Self {
        iban.code()
    }
}
