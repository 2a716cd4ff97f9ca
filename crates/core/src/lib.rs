//! IBAN parsing, construction and validation.
//!
//! This crate contains pure validation logic with ZERO I/O dependencies.
//! It checks International Bank Account Numbers against the ISO 13616
//! mod-97 checksum and each country's registered structure, and computes
//! check digits for new accounts.
//!
//! # Modules
//!
//! - `country` - Per-country length and BBAN structure rules
//! - `iban` - The IBAN value type, parser, checksum and validator
//!
//! # Example
//!
//! ```
//! use ibanlib_core::{construct, is_valid_str};
//!
//! assert!(is_valid_str("GB82 WEST 1234 5698 7654 32"));
//! assert!(!is_valid_str("GB82 WEST 1234 5698 7654 33"));
//!
//! let iban = construct("WEST12345698765432", "GB").unwrap();
//! assert_eq!(iban.pretty_code(), "GB82 WEST 1234 5698 7654 32");
//! ```

pub mod country;
pub mod iban;

pub use country::{CountryRegistry, CountryRule, RegistryError, default_registry};
pub use iban::{Iban, IbanError, IbanValidator, construct, is_valid, is_valid_str, parse, validate};
