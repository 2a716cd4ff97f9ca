//! Letter-to-digit transcoding for ISO 7064 style checksums.
//!
//! Every letter `A..Z` becomes its two-digit value `10..35`; digits pass
//! through unchanged. The output is meant to be parsed as one large integer,
//! so no separators are inserted.

/// Returns the numeric value of a single letter (`A` = 10 ... `Z` = 35).
///
/// Lowercase letters map to the same value as their uppercase form.
/// Returns `None` for anything that is not an ASCII letter.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn letter_value(c: char) -> Option<u8> {
    if c.is_ascii_alphabetic() {
        Some(c.to_ascii_uppercase() as u8 - b'A' + 10)
    } else {
        None
    }
}

/// Expands every letter of `input` into its two-digit numeric value.
///
/// Character order is preserved. Characters that are neither ASCII letters
/// nor ASCII digits are copied as-is, so a subsequent integer parse of the
/// result fails instead of silently succeeding.
///
/// # Example
///
/// ```
/// use ibanlib_shared::numeric::letters_to_numeric;
///
/// assert_eq!(letters_to_numeric("WEST12"), "3214282912");
/// ```
#[must_use]
pub fn letters_to_numeric(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 2);
    for c in input.chars() {
        match letter_value(c) {
            Some(value) => {
                out.push(char::from(b'0' + value / 10));
                out.push(char::from(b'0' + value % 10));
            }
            None => out.push(c),
        }
    }
    out
}
