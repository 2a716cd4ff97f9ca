//! Country rule table.
//!
//! A `CountryRegistry` is built once and only read afterwards. The
//! process-wide default holds the built-in IBAN registry; callers that need
//! a different table (tests, configuration overrides) build their own and
//! hand it to an `IbanValidator`.

use std::collections::BTreeMap;

use ibanlib_shared::RegistryConfig;
use once_cell::sync::Lazy;
use tracing::{debug, error};

use super::error::RegistryError;
use super::format::BbanFormat;
use super::rule::{CountryRule, MAX_IBAN_LENGTH, MIN_IBAN_LENGTH};
use super::table::IBAN_REGISTRY;

static DEFAULT_REGISTRY: Lazy<CountryRegistry> = Lazy::new(CountryRegistry::standard);

/// Returns the process-wide registry built from the built-in table.
///
/// Initialised on first use; safe to call from any thread.
#[must_use]
pub fn default_registry() -> &'static CountryRegistry {
    &DEFAULT_REGISTRY
}

/// Immutable mapping from country code to `CountryRule`.
#[derive(Debug, Clone, Default)]
pub struct CountryRegistry {
    rules: BTreeMap<String, CountryRule>,
}

impl CountryRegistry {
    /// Creates a registry with no countries.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in IBAN registry entries.
    #[must_use]
    pub fn standard() -> Self {
        let mut rules = BTreeMap::new();
        for (code, length, format) in IBAN_REGISTRY {
            match CountryRule::from_format(*length, format) {
                Ok(rule) => {
                    rules.insert((*code).to_string(), rule);
                }
                Err(err) => error!(country = %code, error = %err, "Skipping built-in country rule"),
            }
        }
        Self { rules }
    }

    /// Creates a registry from explicit `(country code, rule)` pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if a country code is not two uppercase letters or a
    /// rule length is out of range.
    pub fn from_rules<I, S>(rules: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (S, CountryRule)>,
        S: Into<String>,
    {
        rules
            .into_iter()
            .try_fold(Self::empty(), |registry, (code, rule)| registry.with_rule(code, rule))
    }

    /// Adds or replaces the rule for one country.
    ///
    /// # Errors
    ///
    /// Returns an error if the country code is not two uppercase letters or
    /// the rule length is out of range.
    pub fn with_rule(mut self, code: impl Into<String>, rule: CountryRule) -> Result<Self, RegistryError> {
        let code = code.into();
        validate_country_code(&code)?;
        if !(MIN_IBAN_LENGTH..=MAX_IBAN_LENGTH).contains(&rule.length()) {
            return Err(RegistryError::LengthOutOfRange {
                country: code,
                length: rule.length(),
            });
        }
        self.rules.insert(code, rule);
        Ok(self)
    }

    /// Applies configured additions, overrides and exclusions.
    ///
    /// Country codes in the configuration are matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured code, length or format is invalid,
    /// or if a fixed-width format disagrees with the configured length.
    pub fn with_config(mut self, config: &RegistryConfig) -> Result<Self, RegistryError> {
        for (code, entry) in &config.countries {
            let code = code.to_ascii_uppercase();
            let format = BbanFormat::parse(&entry.bban_format)?;
            if format.is_fixed() && format.max_length() + 4 != entry.length {
                return Err(RegistryError::LengthFormatMismatch {
                    country: code,
                    length: entry.length,
                    format_length: format.max_length(),
                });
            }
            let rule = CountryRule::new(entry.length, &format.to_pattern())?;
            debug!(
                country = %code,
                length = entry.length,
                replaced = self.contains(&code),
                "Applying configured country rule"
            );
            self = self.with_rule(code, rule)?;
        }

        for code in &config.exclude {
            let code = code.to_ascii_uppercase();
            if self.rules.remove(&code).is_some() {
                debug!(country = %code, "Excluded country from registry");
            }
        }

        Ok(self)
    }

    /// Looks up the rule for `code`.
    ///
    /// `None` means the country is unknown, which is distinct from a known
    /// country whose rule an IBAN fails.
    #[must_use]
    pub fn lookup(&self, code: &str) -> Option<&CountryRule> {
        self.rules.get(code)
    }

    /// Returns true if `code` has a registered rule.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.rules.contains_key(code)
    }

    /// Number of registered countries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no countries are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Registered country codes in ascending order.
    pub fn country_codes(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }
}

fn validate_country_code(code: &str) -> Result<(), RegistryError> {
    if code.len() == 2 && code.bytes().all(|b| b.is_ascii_uppercase()) {
        Ok(())
    } else {
        Err(RegistryError::InvalidCountryCode(code.to_string()))
    }
}
