//! Country rule table.
//!
//! Maps a two-letter country code to the expected IBAN length and the BBAN
//! structure registered for that country:
//! - Registry notation parsing (`4!a6!n8!n`)
//! - Per-country rules
//! - The built-in table and the process-wide default registry

pub mod error;
pub mod format;
pub mod registry;
pub mod rule;
mod table;

pub use error::RegistryError;
pub use format::{BbanFormat, MAX_BBAN_LENGTH, Segment, SegmentKind};
pub use registry::{CountryRegistry, default_registry};
pub use rule::{CountryRule, MAX_IBAN_LENGTH, MIN_IBAN_LENGTH};
