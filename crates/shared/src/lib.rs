//! Shared configuration and numeric helpers for ibanlib.
//!
//! This crate provides the pieces that carry no IBAN semantics of their own:
//! - Letter-to-digit transcoding used by mod-97 checksums
//! - Country rule table configuration

pub mod config;
pub mod numeric;

pub use config::{CountryRuleConfig, RegistryConfig};
pub use numeric::letters_to_numeric;
