//! Digit characters and subscript rendering.

use crate::error::{PAdicError, Result};
use crate::primes::MAX_RADIX;

const SUBSCRIPTS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];

/// Character for a single digit: `0-9`, then `a-z`.
///
/// Digits past the radix limit are rejected at construction, so the
/// fallback character is never produced for a valid sequence.
#[inline]
pub(crate) fn digit_char(digit: u8) -> char {
    char::from_digit(u32::from(digit), MAX_RADIX).unwrap_or('?')
}

/// Parse one digit character at `position`.
pub(crate) fn char_digit(c: char, position: usize) -> Result<u8> {
    c.to_digit(MAX_RADIX)
        .map(|d| d as u8)
        .ok_or(PAdicError::InvalidCharacter {
            character: c,
            position,
        })
}

/// Render `n` in subscript digits, e.g. `10` → `₁₀`.
///
/// # Example
///
/// ```
/// use padic::text::subscript;
///
/// assert_eq!(subscript(5), "₅");
/// assert_eq!(subscript(31), "₃₁");
/// ```
#[must_use]
pub fn subscript(n: u32) -> String {
    n.to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| SUBSCRIPTS[d as usize])
        .collect()
}

/// Split trailing subscript digits off `s`: `"...12 0₅"` → `("...12 0", "₅")`.
pub(crate) fn split_subscript(s: &str) -> (&str, &str) {
    let body = s.trim_end_matches(|c| SUBSCRIPTS.contains(&c));
    s.split_at(body.len())
}

/// Inverse of [`subscript`]: `None` unless every character is a subscript digit.
pub(crate) fn parse_subscript(s: &str) -> Option<u32> {
    if s.is_empty() {
        return None;
    }
    s.chars().try_fold(0u32, |acc, c| {
        let d = SUBSCRIPTS.iter().position(|&s| s == c)?;
        acc.checked_mul(10)?.checked_add(d as u32)
    })
}
