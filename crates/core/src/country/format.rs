//! IBAN registry BBAN structure notation.
//!
//! The registry describes each BBAN as a run of segments such as `4!a6!n8!n`:
//! a count, an optional `!` for "exactly" (otherwise "up to"), and a
//! character class:
//! - `n` digits
//! - `a` uppercase letters
//! - `c` uppercase letters and digits
//! - `e` a space

use super::error::RegistryError;
use super::rule::MAX_IBAN_LENGTH;

/// Longest BBAN any country can register.
pub const MAX_BBAN_LENGTH: usize = MAX_IBAN_LENGTH - 4;

/// Character class of a BBAN segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Digits `0-9`.
    Numeric,
    /// Letters `A-Z`.
    Alpha,
    /// Letters `A-Z` and digits `0-9`.
    Alphanumeric,
    /// A literal space.
    Space,
}

impl SegmentKind {
    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'n' => Some(Self::Numeric),
            'a' => Some(Self::Alpha),
            'c' => Some(Self::Alphanumeric),
            'e' => Some(Self::Space),
            _ => None,
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Numeric => "[0-9]",
            Self::Alpha => "[A-Z]",
            Self::Alphanumeric => "[A-Z0-9]",
            Self::Space => " ",
        }
    }
}

/// One `<count>[!]<kind>` segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Number of characters (exact or maximum).
    pub count: usize,
    /// Whether `count` is exact.
    pub fixed: bool,
    /// Character class.
    pub kind: SegmentKind,
}

/// A parsed BBAN structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BbanFormat {
    segments: Vec<Segment>,
}

impl BbanFormat {
    /// Parses registry notation such as `4!a6!n8!n`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::InvalidFormat` for empty input, a missing or
    /// zero count, an unknown character class, or a BBAN longer than
    /// `MAX_BBAN_LENGTH`.
    pub fn parse(format: &str) -> Result<Self, RegistryError> {
        let invalid = |reason: &str| RegistryError::InvalidFormat {
            format: format.to_string(),
            reason: reason.to_string(),
        };

        let mut segments = Vec::new();
        let mut chars = format.trim().chars().peekable();

        while chars.peek().is_some() {
            let mut count = 0usize;
            let mut has_digits = false;
            while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
                count = count.saturating_mul(10).saturating_add(digit as usize);
                has_digits = true;
                chars.next();
            }
            if !has_digits {
                return Err(invalid("expected a segment length"));
            }
            if count == 0 {
                return Err(invalid("segment length must be positive"));
            }
            if count > MAX_BBAN_LENGTH {
                return Err(invalid("segment length exceeds 30"));
            }

            let fixed = chars.next_if_eq(&'!').is_some();
            let kind = chars
                .next()
                .and_then(SegmentKind::from_symbol)
                .ok_or_else(|| invalid("expected one of n, a, c, e"))?;

            segments.push(Segment { count, fixed, kind });
        }

        if segments.is_empty() {
            return Err(invalid("format is empty"));
        }
        let total = segments.iter().fold(0usize, |acc, s: &Segment| acc.saturating_add(s.count));
        if total > MAX_BBAN_LENGTH {
            return Err(invalid("total length exceeds 30"));
        }

        Ok(Self { segments })
    }

    /// Returns the parsed segments in order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Maximum BBAN length the format admits.
    #[must_use]
    pub fn max_length(&self) -> usize {
        self.segments.iter().map(|s| s.count).sum()
    }

    /// Returns true if every segment has an exact length.
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        self.segments.iter().all(|s| s.fixed)
    }

    /// Renders the format as an unanchored regular expression.
    #[must_use]
    pub fn to_pattern(&self) -> String {
        self.segments
            .iter()
            .map(|s| {
                if s.fixed {
                    format!("{}{{{}}}", s.kind.class(), s.count)
                } else {
                    format!("{}{{1,{}}}", s.kind.class(), s.count)
                }
            })
            .collect()
    }
}
