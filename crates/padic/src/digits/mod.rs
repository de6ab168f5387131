//! Eventually periodic digit sequences.
//!
//! A [`DigitSequence`] is a finite *head* followed by a *repetend* that
//! repeats forever. Both are stored least-significant digit first and
//! rendered most-significant first, with the cycle to the left of an
//! ellipsis:
//!
//! ```text
//! ...1234 3457      repetend 1234, head 3457
//! digit 0 = 7, digit 3 = 3, digit 4 = 4, digit 7 = 1, digit 8 = 4, ...
//! ```
//!
//! The base is not part of the sequence, so constructors only reject
//! digits that no radix can render. Digits are checked against a base when
//! the sequence is bound with
//! [`PAdicIntegers::element`](crate::PAdicIntegers::element), or when it is
//! passed to one of the functions in [`arithmetic`].
//!
//! # Canonical form
//!
//! Every constructor normalizes, so two sequences describing the same
//! infinite digit stream are always structurally equal:
//!
//! - the repetend is reduced to its minimal period (`...4545` → `...45`)
//! - an empty or all-zero repetend becomes [`NOT_REPETITIVE`]
//! - the head is as short as possible (`...45 4` → `...54 `)
//!
//! # Example
//!
//! ```
//! use padic::DigitSequence;
//!
//! let a = DigitSequence::parse("1234", "3457").unwrap();
//! assert_eq!(a.to_string(), "...1234 3457");
//! assert_eq!(a.digit_at(0), 7);
//! assert_eq!(a.digit_at(4), 4);
//! assert_eq!(a.left_shift(3).to_string(), "...1234 3457000");
//!
//! // Other encodings of the same stream collapse to one value.
//! assert_eq!(
//!     DigitSequence::parse("4545", "4").unwrap(),
//!     DigitSequence::parse("54", "").unwrap(),
//! );
//! ```

pub mod arithmetic;

use core::fmt;
use core::str::FromStr;

use crate::error::{PAdicError, Result};
use crate::primes::MAX_RADIX;
use crate::text::{char_digit, digit_char, subscript};

/// The repetend of a sequence that is eventually all zeros, i.e. an
/// ordinary non-negative integer.
pub const NOT_REPETITIVE: &[u8] = &[0];

/// A finite head of digits followed by an infinitely repeated cycle.
///
/// Immutable: every operation returns a new sequence.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawDigits"))]
pub struct DigitSequence {
    head: Box<[u8]>,
    repetend: Box<[u8]>,
}

impl DigitSequence {
    /// The all-zero sequence: empty head, zero cycle.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            head: Box::new([]),
            repetend: NOT_REPETITIVE.into(),
        }
    }

    /// The finite sequence `1`.
    #[must_use]
    pub fn one() -> Self {
        Self {
            head: Box::new([1]),
            repetend: NOT_REPETITIVE.into(),
        }
    }

    /// Build from digits in internal order (least significant first).
    ///
    /// An empty `repetend` means the sequence is finite. No base is known
    /// here; bind the result with
    /// [`PAdicIntegers::element`](crate::PAdicIntegers::element) to check
    /// the digits against one.
    ///
    /// # Errors
    ///
    /// [`PAdicError::InvalidDigit`] if a digit has no character (36 or more).
    ///
    /// # Example
    ///
    /// ```
    /// use padic::DigitSequence;
    ///
    /// let three = DigitSequence::create(&[3], &[]).unwrap();
    /// assert_eq!(three.to_string(), "...0 3");
    /// let thirds = DigitSequence::create(&[1], &[3, 6]).unwrap();
    /// assert_eq!(thirds.to_string(), "...63 1");
    /// ```
    pub fn create(head: &[u8], repetend: &[u8]) -> Result<Self> {
        check_digits(head)?;
        check_digits(repetend)?;
        Ok(Self::canonical(head.to_vec(), repetend.to_vec()))
    }

    /// A finite sequence from digits written most significant first.
    ///
    /// # Errors
    ///
    /// [`PAdicError::InvalidDigit`] if a digit has no character (36 or more).
    ///
    /// # Example
    ///
    /// ```
    /// use padic::DigitSequence;
    ///
    /// let n = DigitSequence::of(&[1, 2, 3]).unwrap();
    /// assert_eq!(n.to_string(), "...0 123");
    /// assert!(!n.is_repetitive());
    /// ```
    pub fn of(digits: &[u8]) -> Result<Self> {
        check_digits(digits)?;
        Ok(Self::canonical(reversed(digits), Vec::new()))
    }

    /// A sequence that is only a cycle, written most significant first.
    ///
    /// # Errors
    ///
    /// [`PAdicError::InvalidDigit`] if a digit has no character (36 or more).
    pub fn only_repetend(repetend: &[u8]) -> Result<Self> {
        check_digits(repetend)?;
        Ok(Self::canonical(Vec::new(), reversed(repetend)))
    }

    /// Parse a repetend string and a head string, one character per digit,
    /// most significant first.
    ///
    /// # Errors
    ///
    /// [`PAdicError::InvalidCharacter`] for a character outside `0-9a-z`.
    ///
    /// # Example
    ///
    /// ```
    /// use padic::DigitSequence;
    ///
    /// let minus_eleven = DigitSequence::parse("9", "89").unwrap();
    /// assert_eq!(minus_eleven.head(), &[9, 8]);
    /// assert_eq!(minus_eleven.repetend(), &[9]);
    /// ```
    pub fn parse(repetend: &str, head: &str) -> Result<Self> {
        let repetend = parse_digits(repetend, 0)?;
        let head = parse_digits(head, 0)?;
        Ok(Self::canonical(head, repetend))
    }

    /// Replace the repeating tail, keeping the head.
    ///
    /// `repetend` is written most significant first.
    ///
    /// # Errors
    ///
    /// [`PAdicError::InvalidDigit`] if a digit has no character (36 or more).
    ///
    /// # Example
    ///
    /// ```
    /// use padic::DigitSequence;
    ///
    /// let n = DigitSequence::of(&[4]).unwrap().with_repetend(&[0, 1, 0]).unwrap();
    /// assert_eq!(n.to_string(), "...010 4");
    /// ```
    pub fn with_repetend(&self, repetend: &[u8]) -> Result<Self> {
        check_digits(repetend)?;
        Ok(Self::canonical(self.head.to_vec(), reversed(repetend)))
    }

    /// Replace the head, keeping the repeating tail.
    ///
    /// `head` is written most significant first.
    ///
    /// # Errors
    ///
    /// [`PAdicError::InvalidDigit`] if a digit has no character (36 or more).
    pub fn with_head(&self, head: &[u8]) -> Result<Self> {
        check_digits(head)?;
        Ok(Self::canonical(reversed(head), self.repetend.to_vec()))
    }

    /// Normalize unchecked digits into canonical form.
    ///
    /// Callers guarantee every digit is below the radix limit.
    pub(crate) fn canonical(mut head: Vec<u8>, mut repetend: Vec<u8>) -> Self {
        if repetend.iter().all(|&d| d == 0) {
            repetend = NOT_REPETITIVE.to_vec();
        }
        let period = minimal_period(&repetend);
        repetend.truncate(period);
        while let (Some(&top), Some(&last)) = (head.last(), repetend.last()) {
            if top != last {
                break;
            }
            head.pop();
            repetend.rotate_right(1);
        }
        Self {
            head: head.into_boxed_slice(),
            repetend: repetend.into_boxed_slice(),
        }
    }

    /// The non-repeating prefix, least significant digit first.
    #[inline]
    #[must_use]
    pub fn head(&self) -> &[u8] {
        &self.head
    }

    /// The repeating cycle, least significant digit first. Never empty.
    #[inline]
    #[must_use]
    pub fn repetend(&self) -> &[u8] {
        &self.repetend
    }

    /// Digit at position `n` (position 0 is least significant).
    ///
    /// Defined for every position: past the head the repetend cycles.
    #[inline]
    #[must_use]
    pub fn digit_at(&self, n: usize) -> u8 {
        match self.head.get(n) {
            Some(&d) => d,
            None => self.repetend[(n - self.head.len()) % self.repetend.len()],
        }
    }

    /// Whether position `n` lies in the periodic tail.
    #[inline]
    #[must_use]
    pub fn is_repeating(&self, n: usize) -> bool {
        n >= self.head.len()
    }

    /// Storage index for position `n`: `n` inside the head, otherwise the
    /// head length plus the phase within the repetend.
    ///
    /// Two positions in the tail with the same index always hold the same
    /// digit.
    #[inline]
    #[must_use]
    pub fn index_of(&self, n: usize) -> usize {
        if self.is_repeating(n) {
            self.head.len() + (n - self.head.len()) % self.repetend.len()
        } else {
            n
        }
    }

    /// Whether the tail is a genuine cycle rather than the zero sentinel.
    #[inline]
    #[must_use]
    pub fn is_repetitive(&self) -> bool {
        *self.repetend != *NOT_REPETITIVE
    }

    /// Whether this is the all-zero sequence.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.head.is_empty() && !self.is_repetitive()
    }

    /// Largest digit appearing anywhere in the sequence.
    #[must_use]
    pub fn max_digit(&self) -> u8 {
        self.head
            .iter()
            .chain(self.repetend.iter())
            .copied()
            .max()
            .unwrap_or(0)
    }

    /// The infinite stream of digits, least significant first.
    pub fn digits(&self) -> impl Iterator<Item = u8> + '_ {
        self.head
            .iter()
            .chain(self.repetend.iter().cycle())
            .copied()
    }

    /// Rendering with the base appended as a subscript, omitted for base 10.
    ///
    /// # Example
    ///
    /// ```
    /// use padic::DigitSequence;
    ///
    /// let s = DigitSequence::parse("4", "13").unwrap();
    /// assert_eq!(s.render(5), "...4 13₅");
    /// assert_eq!(s.render(10), "...4 13");
    /// ```
    #[must_use]
    pub fn render(&self, base: u8) -> String {
        if base == 10 {
            self.to_string()
        } else {
            format!("{self}{}", subscript(u32::from(base)))
        }
    }
}

impl Default for DigitSequence {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("...")?;
        for &d in self.repetend.iter().rev() {
            write!(f, "{}", digit_char(d))?;
        }
        f.write_str(" ")?;
        for &d in self.head.iter().rev() {
            write!(f, "{}", digit_char(d))?;
        }
        Ok(())
    }
}

impl fmt::Debug for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DigitSequence")
            .field(&format_args!("{self}"))
            .finish()
    }
}

/// Parses the [`Display`](fmt::Display) notation: `...<repetend> <head>`.
///
/// The separating space may be left out when the head is empty.
///
/// ```
/// use padic::DigitSequence;
///
/// let s: DigitSequence = "...296 4".parse().unwrap();
/// assert_eq!(s, DigitSequence::parse("296", "4").unwrap());
/// assert!("296 4".parse::<DigitSequence>().is_err());
/// ```
impl FromStr for DigitSequence {
    type Err = PAdicError;

    fn from_str(s: &str) -> Result<Self> {
        const ELLIPSIS: &str = "...";
        let body = s.strip_prefix(ELLIPSIS).ok_or_else(|| {
            let (position, character) = s
                .chars()
                .enumerate()
                .find(|&(_, c)| c != '.')
                .unwrap_or((0, ' '));
            PAdicError::InvalidCharacter {
                character,
                position,
            }
        })?;
        let (repetend, head) = body.split_once(' ').unwrap_or((body, ""));
        let head_offset = ELLIPSIS.len() + repetend.chars().count() + 1;
        let repetend = parse_digits(repetend, ELLIPSIS.len())?;
        let head = parse_digits(head, head_offset)?;
        Ok(Self::canonical(head, repetend))
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDigits {
    head: Vec<u8>,
    repetend: Vec<u8>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDigits> for DigitSequence {
    type Error = PAdicError;

    fn try_from(raw: RawDigits) -> Result<Self> {
        Self::create(&raw.head, &raw.repetend)
    }
}

fn check_digits(digits: &[u8]) -> Result<()> {
    match digits.iter().find(|&&d| u32::from(d) >= MAX_RADIX) {
        Some(&d) => Err(PAdicError::invalid_digit(d, MAX_RADIX)),
        None => Ok(()),
    }
}

/// Characters most significant first → digits least significant first.
fn parse_digits(s: &str, offset: usize) -> Result<Vec<u8>> {
    let mut digits = s
        .chars()
        .enumerate()
        .map(|(i, c)| char_digit(c, offset + i))
        .collect::<Result<Vec<u8>>>()?;
    digits.reverse();
    Ok(digits)
}

fn reversed(digits: &[u8]) -> Vec<u8> {
    digits.iter().rev().copied().collect()
}

/// Smallest `d` such that `cycle` is `d`-periodic and `d` divides its length.
fn minimal_period(cycle: &[u8]) -> usize {
    let n = cycle.len();
    (1..n)
        .filter(|d| n % d == 0)
        .find(|&d| (d..n).all(|i| cycle[i] == cycle[i - d]))
        .unwrap_or(n)
}
