//! A digit sequence bound to its prime base.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::Neg;
use std::sync::Arc;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::algebra::{FieldElement, RingElement};
use crate::digits::arithmetic;
use crate::digits::DigitSequence;
use crate::error::{PAdicError, Result};
use crate::integers::PAdicIntegers;
use crate::text::subscript;

/// An element of ℤₚ: an eventually periodic digit sequence in base `p`.
///
/// Every digit is below `p`; this is checked once when the value is built
/// and preserved by all arithmetic. Values are immutable and cheap to share
/// across threads.
///
/// # Example
///
/// ```
/// use padic::PAdicIntegers;
///
/// let z5 = PAdicIntegers::of(5).unwrap();
/// let a = z5.parse("4", "").unwrap(); // -1
/// let b = z5.from_integer(7);
/// assert_eq!(a.to_string(), "...4 ₅");
/// assert_eq!(b.to_string(), "...0 12₅");
/// assert_eq!(a.plus(&b).unwrap(), z5.from_integer(6));
/// assert_eq!(b.negation().to_string(), "...4 33₅");
/// ```
#[derive(Clone)]
pub struct PAdicInteger {
    digits: DigitSequence,
    integers: Arc<PAdicIntegers>,
}

impl PAdicInteger {
    /// Bind `digits` to `integers`, rejecting digits not below the base.
    pub(crate) fn new(integers: Arc<PAdicIntegers>, digits: DigitSequence) -> Result<Self> {
        let max = digits.max_digit();
        if max >= integers.base() {
            return Err(PAdicError::invalid_digit(max, integers.base()));
        }
        Ok(Self { digits, integers })
    }

    /// Bind digits produced by arithmetic in `integers`' own base.
    pub(crate) fn trusted(integers: Arc<PAdicIntegers>, digits: DigitSequence) -> Self {
        Self { digits, integers }
    }

    /// A result of arithmetic on values of this base.
    fn derived(&self, digits: DigitSequence) -> Self {
        Self {
            digits,
            integers: Arc::clone(&self.integers),
        }
    }

    fn check_base(&self, other: &Self) -> Result<()> {
        if self.base() == other.base() {
            Ok(())
        } else {
            Err(PAdicError::BaseMismatch {
                left: self.base(),
                right: other.base(),
            })
        }
    }

    /// The underlying digit sequence.
    #[inline]
    #[must_use]
    pub fn digits(&self) -> &DigitSequence {
        &self.digits
    }

    /// The structure this value belongs to.
    #[inline]
    #[must_use]
    pub fn integers(&self) -> &Arc<PAdicIntegers> {
        &self.integers
    }

    /// The prime base.
    #[inline]
    #[must_use]
    pub fn base(&self) -> u8 {
        self.integers.base()
    }

    /// Whether this is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.digits.is_zero()
    }

    /// Whether this is an ordinary non-negative integer.
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        !self.digits.is_repetitive()
    }

    /// `self + summand`.
    ///
    /// # Errors
    ///
    /// [`PAdicError::BaseMismatch`] if the bases differ.
    pub fn plus(&self, summand: &Self) -> Result<Self> {
        self.check_base(summand)?;
        let digits = arithmetic::sum_unchecked(
            self.base(),
            &[self.digits.clone(), summand.digits.clone()],
        );
        Ok(self.derived(digits))
    }

    /// `self · multiplier`.
    ///
    /// # Errors
    ///
    /// [`PAdicError::BaseMismatch`] if the bases differ.
    pub fn times(&self, multiplier: &Self) -> Result<Self> {
        self.check_base(multiplier)?;
        let digits =
            arithmetic::multiply_unchecked(self.base(), &multiplier.digits, &self.digits);
        Ok(self.derived(digits))
    }

    /// Multiply by an ordinary integer through its base-`p` expansion.
    ///
    /// ```
    /// use padic::PAdicIntegers;
    ///
    /// let z3 = PAdicIntegers::of(3).unwrap();
    /// let x = z3.parse("12", "").unwrap();
    /// assert_eq!(x.times_integer(-1), x.negation());
    /// assert!(x.times_integer(0).is_zero());
    /// ```
    #[must_use]
    pub fn times_integer(&self, multiplier: i64) -> Self {
        let multiplier = arithmetic::from_integer_unchecked(self.base(), multiplier);
        self.derived(arithmetic::multiply_unchecked(self.base(), &multiplier, &self.digits))
    }

    /// `self - subtrahend`.
    ///
    /// # Errors
    ///
    /// [`PAdicError::BaseMismatch`] if the bases differ.
    pub fn minus(&self, subtrahend: &Self) -> Result<Self> {
        self.plus(&subtrahend.negation())
    }

    /// `-self`.
    #[must_use]
    pub fn negation(&self) -> Self {
        self.derived(arithmetic::negate_unchecked(self.base(), &self.digits))
    }

    /// Multiply by `p^k`.
    #[must_use]
    pub fn left_shift(&self, k: usize) -> Self {
        self.derived(self.digits.left_shift(k))
    }

    /// Drop the `k` least significant digits.
    ///
    /// See [`DigitSequence::right_shift`]: past the head the repetend
    /// rotates, so this is not division by `p^k` for repetitive values.
    #[must_use]
    pub fn right_shift(&self, k: usize) -> Self {
        self.derived(self.digits.right_shift(k))
    }

    /// Replace the repeating tail, keeping the head.
    ///
    /// `repetend` is written most significant first.
    ///
    /// # Errors
    ///
    /// [`PAdicError::InvalidDigit`] if a digit is not below the base.
    pub fn with_repetend(&self, repetend: &[u8]) -> Result<Self> {
        let digits = self.digits.with_repetend(repetend)?;
        Self::new(Arc::clone(&self.integers), digits)
    }

    /// The value as an exact integer, `Σ digitᵢ · pⁱ`.
    ///
    /// # Errors
    ///
    /// [`PAdicError::NotFinite`] if the value has a genuine repeating tail.
    ///
    /// # Example
    ///
    /// ```
    /// use num_bigint::BigUint;
    /// use padic::PAdicIntegers;
    ///
    /// let z2 = PAdicIntegers::of(2).unwrap();
    /// assert_eq!(z2.of_digits(&[1, 1, 0]).unwrap().to_exact_integer(), Ok(BigUint::from(6u8)));
    /// assert!(z2.from_integer(-6).to_exact_integer().is_err());
    /// ```
    pub fn to_exact_integer(&self) -> Result<BigUint> {
        if self.digits.is_repetitive() {
            return Err(PAdicError::NotFinite {
                value: self.to_string(),
            });
        }
        let base = self.integers.big_base();
        Ok(self
            .digits
            .head()
            .iter()
            .rev()
            .fold(BigUint::zero(), |acc, &d| acc * base + BigUint::from(d)))
    }

    /// Always fails: p-adic reciprocals are not implemented.
    ///
    /// # Errors
    ///
    /// Always [`PAdicError::Unsupported`].
    pub fn reciprocal(&self) -> Result<Self> {
        Err(PAdicError::unsupported("reciprocal"))
    }

    /// Always fails: p-adic division is not implemented.
    ///
    /// # Errors
    ///
    /// Always [`PAdicError::Unsupported`].
    pub fn divided_by(&self, _divisor: i64) -> Result<Self> {
        Err(PAdicError::unsupported("division"))
    }
}

impl RingElement for PAdicInteger {
    fn plus(&self, summand: &Self) -> Result<Self> {
        PAdicInteger::plus(self, summand)
    }

    fn times(&self, multiplier: &Self) -> Result<Self> {
        PAdicInteger::times(self, multiplier)
    }

    fn negation(&self) -> Self {
        PAdicInteger::negation(self)
    }

    fn minus(&self, subtrahend: &Self) -> Result<Self> {
        PAdicInteger::minus(self, subtrahend)
    }
}

impl FieldElement for PAdicInteger {
    fn reciprocal(&self) -> Result<Self> {
        PAdicInteger::reciprocal(self)
    }

    fn divided_by(&self, divisor: i64) -> Result<Self> {
        PAdicInteger::divided_by(self, divisor)
    }
}

impl Neg for PAdicInteger {
    type Output = Self;

    fn neg(self) -> Self {
        self.negation()
    }
}

impl Neg for &PAdicInteger {
    type Output = PAdicInteger;

    fn neg(self) -> PAdicInteger {
        self.negation()
    }
}

impl PartialEq for PAdicInteger {
    fn eq(&self, other: &Self) -> bool {
        self.base() == other.base() && self.digits == other.digits
    }
}

impl Eq for PAdicInteger {}

impl Hash for PAdicInteger {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.base().hash(state);
        self.digits.hash(state);
    }
}

/// `...<repetend> <head>` followed by the subscript base, e.g. `...12 0₅`.
impl fmt::Display for PAdicInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.digits, subscript(u32::from(self.base())))
    }
}

impl fmt::Debug for PAdicInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PAdicInteger")
            .field(&format_args!("{self}"))
            .finish()
    }
}
