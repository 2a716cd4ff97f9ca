//! Country rule table configuration.
//!
//! The built-in IBAN registry can be extended, overridden or narrowed
//! without recompiling. Sources are layered the usual way: an optional
//! `config/iban` file, an optional `config/iban.{RUN_MODE}` file, then
//! `IBANLIB__*` environment variables.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Adjustments applied on top of the built-in country rule table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RegistryConfig {
    /// Countries to add, or to replace when already built in.
    ///
    /// Keys are two-letter country codes (case-insensitive).
    #[serde(default)]
    pub countries: BTreeMap<String, CountryRuleConfig>,
    /// Country codes to remove from the table.
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Structure of one country's IBAN.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountryRuleConfig {
    /// Total IBAN length including country code and check digits.
    pub length: usize,
    /// BBAN structure in IBAN registry notation, e.g. `4!a6!n8!n`.
    pub bban_format: String,
}

impl RegistryConfig {
    /// Environment variable prefix.
    pub const ENV_PREFIX: &'static str = "IBANLIB";

    /// Loads configuration from config files and the environment.
    ///
    /// Missing files are not an error; an empty configuration leaves the
    /// built-in table untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or deserialized.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/iban").required(false))
            .add_source(config::File::with_name(&format!("config/iban.{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix(Self::ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize().map(Self::with_uppercase_codes)
    }

    /// Parses configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML or does not match
    /// the expected shape.
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
            .map(Self::with_uppercase_codes)
    }

    /// Uppercases every country code.
    ///
    /// Environment keys arrive lowercased, so codes are stored in one form
    /// whatever the source.
    #[must_use]
    pub fn with_uppercase_codes(self) -> Self {
        Self {
            countries: self
                .countries
                .into_iter()
                .map(|(code, rule)| (code.to_ascii_uppercase(), rule))
                .collect(),
            exclude: self.exclude.iter().map(|code| code.to_ascii_uppercase()).collect(),
        }
    }

    /// Returns true if this configuration changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty() && self.exclude.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(RegistryConfig::default().is_empty());
    }

    #[test]
    fn test_from_toml_str() {
        let config = RegistryConfig::from_toml_str(
            r#"
            exclude = ["BR"]

            [countries.XK]
            length = 20
            bban_format = "4!n10!n2!n"
            "#,
        )
        .unwrap();

        assert_eq!(config.exclude, vec!["BR".to_string()]);
        assert!(!config.countries.contains_key("xk"));
        assert_eq!(
            config.countries.get("XK"),
            Some(&CountryRuleConfig {
                length: 20,
                bban_format: "4!n10!n2!n".to_string(),
            })
        );
        assert!(!config.is_empty());
    }

    #[test]
    fn test_from_toml_str_uppercases_codes() {
        let config = RegistryConfig::from_toml_str(
            r#"
            exclude = ["br", "Gb"]

            [countries.xk]
            length = 20
            bban_format = "4!n10!n2!n"
            "#,
        )
        .unwrap();

        assert_eq!(config.exclude, vec!["BR".to_string(), "GB".to_string()]);
        assert_eq!(config.countries.keys().map(String::as_str).collect::<Vec<_>>(), vec!["XK"]);
    }

    #[test]
    fn test_from_toml_str_empty_document() {
        let config = RegistryConfig::from_toml_str("").unwrap();
        assert!(config.is_empty());
    }

    #[test]
    fn test_from_toml_str_missing_length() {
        let result = RegistryConfig::from_toml_str(
            r#"
            [countries.XK]
            bban_format = "4!n10!n2!n"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_environment() {
        temp_env::with_vars(
            [
                ("IBANLIB__COUNTRIES__ZZ__LENGTH", Some("18")),
                ("IBANLIB__COUNTRIES__ZZ__BBAN_FORMAT", Some("14!n")),
            ],
            || {
                let config = RegistryConfig::load().unwrap();
                assert_eq!(config.countries.keys().map(String::as_str).collect::<Vec<_>>(), vec!["ZZ"]);
                assert_eq!(
                    config.countries.get("ZZ").cloned(),
                    Some(CountryRuleConfig {
                        length: 18,
                        bban_format: "14!n".to_string(),
                    })
                );
            },
        );
    }

    #[test]
    fn test_load_without_sources() {
        temp_env::with_vars_unset(
            [
                "IBANLIB__COUNTRIES__ZZ__LENGTH",
                "IBANLIB__COUNTRIES__ZZ__BBAN_FORMAT",
            ],
            || {
                let config = RegistryConfig::load().unwrap();
                assert!(config.is_empty());
            },
        );
    }
}
