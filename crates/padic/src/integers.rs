//! ℤₚ: the p-adic integers for one prime.
//!
//! A [`PAdicIntegers`] is the factory for values of its base. Contexts are
//! shared: [`PAdicIntegers::of`] hands out the single instance the global
//! [`BaseRegistry`](crate::BaseRegistry) holds for each prime.
//!
//! # Example
//!
//! ```
//! use padic::PAdicIntegers;
//!
//! let z5 = PAdicIntegers::of(5).unwrap();
//! assert_eq!(z5.to_string(), "ℤ₅");
//!
//! let x = z5.parse_notation("...12 0₅").unwrap();
//! assert_eq!(x, z5.parse("12", "0").unwrap());
//! assert!(PAdicIntegers::of(6).is_err());
//! ```

use core::fmt;
use std::sync::Arc;

use num_bigint::BigUint;
use rand::Rng;
use rand_distr::StandardNormal;

use crate::algebra::{AlgebraicStructure, Cardinality};
use crate::digits::{arithmetic, DigitSequence};
use crate::error::{PAdicError, Result};
use crate::primes::is_supported_base;
use crate::registry::BaseRegistry;
use crate::text::{parse_subscript, split_subscript, subscript};
use crate::value::PAdicInteger;

/// Spread of the random lengths drawn by [`PAdicIntegers::next_random_with`].
///
/// Each length is the magnitude of a normal sample with mean zero, so most
/// values have short heads and cycles and a few have long ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingConfig {
    /// Standard deviation of the head length.
    pub head_sigma: f64,
    /// Standard deviation of the repetend length. At least one digit is
    /// always drawn.
    pub repetend_sigma: f64,
}

impl SamplingConfig {
    /// Largest accepted standard deviation.
    pub const MAX_SIGMA: f64 = 1000.0;

    /// Check that both deviations are finite and within `[0, MAX_SIGMA]`.
    ///
    /// # Errors
    ///
    /// [`PAdicError::InvalidSigma`] naming the first field out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use padic::SamplingConfig;
    ///
    /// assert!(SamplingConfig::default().validate().is_ok());
    /// let huge = SamplingConfig { head_sigma: 1e300, ..SamplingConfig::default() };
    /// assert!(huge.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        for (field, sigma) in [
            ("head_sigma", self.head_sigma),
            ("repetend_sigma", self.repetend_sigma),
        ] {
            if !(0.0..=Self::MAX_SIGMA).contains(&sigma) {
                return Err(PAdicError::InvalidSigma { field });
            }
        }
        Ok(())
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            head_sigma: 10.0,
            repetend_sigma: 10.0,
        }
    }
}

/// The p-adic integers of one prime base.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct PAdicIntegers {
    base: u8,
    big_base: BigUint,
}

impl PAdicIntegers {
    /// Callers have validated `base`.
    pub(crate) fn new(base: u8) -> Self {
        Self {
            base,
            big_base: BigUint::from(base),
        }
    }

    /// The shared context for prime `base`, from the global registry.
    ///
    /// # Errors
    ///
    /// [`PAdicError::InvalidBase`] unless `base` is a prime no larger than 36.
    pub fn of(base: u32) -> Result<Arc<Self>> {
        BaseRegistry::global().get_or_create(base)
    }

    /// The prime.
    #[inline]
    #[must_use]
    pub fn base(&self) -> u8 {
        self.base
    }

    /// The prime as an arbitrary-precision integer.
    #[inline]
    #[must_use]
    pub fn big_base(&self) -> &BigUint {
        &self.big_base
    }

    /// ℤₚ is countably infinite in this representation: every element is
    /// a finite head and a finite cycle.
    #[inline]
    #[must_use]
    pub fn cardinality(&self) -> Cardinality {
        Cardinality::Aleph0
    }

    /// `0`.
    #[must_use]
    pub fn zero(self: &Arc<Self>) -> PAdicInteger {
        self.bind(DigitSequence::zero())
    }

    /// `1`.
    #[must_use]
    pub fn one(self: &Arc<Self>) -> PAdicInteger {
        self.bind(DigitSequence::one())
    }

    /// Bind a sequence whose digits are already known to be below the base.
    fn bind(self: &Arc<Self>, digits: DigitSequence) -> PAdicInteger {
        debug_assert!(digits.max_digit() < self.base);
        PAdicInteger::trusted(Arc::clone(self), digits)
    }

    /// Bind an existing sequence to this base.
    ///
    /// # Errors
    ///
    /// [`PAdicError::InvalidDigit`] if a digit is not below the base.
    pub fn element(self: &Arc<Self>, digits: DigitSequence) -> Result<PAdicInteger> {
        PAdicInteger::new(Arc::clone(self), digits)
    }

    /// A finite value from digits written most significant first.
    ///
    /// # Errors
    ///
    /// [`PAdicError::InvalidDigit`] if a digit is not below the base.
    pub fn of_digits(self: &Arc<Self>, digits: &[u8]) -> Result<PAdicInteger> {
        self.element(DigitSequence::of(digits)?)
    }

    /// A value from a repetend string and a head string, most significant
    /// digit first.
    ///
    /// # Errors
    ///
    /// [`PAdicError::InvalidCharacter`] for a character that is not a digit,
    /// [`PAdicError::InvalidDigit`] for a digit not below the base.
    pub fn parse(self: &Arc<Self>, repetend: &str, head: &str) -> Result<PAdicInteger> {
        self.element(DigitSequence::parse(repetend, head)?)
    }

    /// Parse the rendered notation `...<repetend> <head>`, optionally
    /// followed by this base as a subscript.
    ///
    /// # Errors
    ///
    /// - [`PAdicError::InvalidCharacter`] for malformed notation
    /// - [`PAdicError::InvalidDigit`] for a digit not below the base
    /// - [`PAdicError::BaseMismatch`] if the subscript names another prime
    /// - [`PAdicError::InvalidBase`] if the subscript is not a supported prime
    pub fn parse_notation(self: &Arc<Self>, text: &str) -> Result<PAdicInteger> {
        let (body, suffix) = split_subscript(text);
        if !suffix.is_empty() {
            let base = parse_subscript(suffix).ok_or(PAdicError::InvalidCharacter {
                character: suffix.chars().next().unwrap_or(' '),
                position: body.chars().count(),
            })?;
            if !is_supported_base(base) {
                return Err(PAdicError::InvalidBase { base });
            }
            if base != u32::from(self.base) {
                return Err(PAdicError::BaseMismatch {
                    left: self.base,
                    right: base as u8,
                });
            }
        }
        self.element(body.parse()?)
    }

    /// The base-`p` expansion of an ordinary integer.
    ///
    /// ```
    /// use padic::PAdicIntegers;
    ///
    /// let z3 = PAdicIntegers::of(3).unwrap();
    /// assert_eq!(z3.from_integer(5).to_string(), "...0 12₃");
    /// assert_eq!(z3.from_integer(-1).to_string(), "...2 ₃");
    /// ```
    #[must_use]
    pub fn from_integer(self: &Arc<Self>, value: i64) -> PAdicInteger {
        self.bind(arithmetic::from_integer_unchecked(self.base, value))
    }

    /// Sum any number of values in one pass.
    ///
    /// # Errors
    ///
    /// [`PAdicError::BaseMismatch`] if a summand belongs to another base.
    ///
    /// # Example
    ///
    /// ```
    /// use padic::PAdicIntegers;
    ///
    /// let z7 = PAdicIntegers::of(7).unwrap();
    /// let terms: Vec<_> = (1..=10).map(|n| z7.from_integer(n)).collect();
    /// assert_eq!(z7.sum(&terms).unwrap(), z7.from_integer(55));
    /// ```
    pub fn sum(self: &Arc<Self>, summands: &[PAdicInteger]) -> Result<PAdicInteger> {
        let digits = summands
            .iter()
            .map(|s| {
                if s.base() == self.base {
                    Ok(s.digits().clone())
                } else {
                    Err(PAdicError::BaseMismatch {
                        left: self.base,
                        right: s.base(),
                    })
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(self.bind(arithmetic::sum_unchecked(self.base, &digits)))
    }

    /// A random value with the default [`SamplingConfig`].
    pub fn next_random<R: Rng + ?Sized>(self: &Arc<Self>, rng: &mut R) -> PAdicInteger {
        self.sample(rng, &SamplingConfig::default())
    }

    /// A random value: head and repetend lengths are drawn from
    /// `|N(0, σ)|`, digits uniformly from `[0, p)`.
    ///
    /// # Errors
    ///
    /// [`PAdicError::InvalidSigma`] if `config` fails
    /// [`SamplingConfig::validate`]. Nothing is drawn from `rng` then.
    ///
    /// # Example
    ///
    /// ```
    /// use padic::{PAdicIntegers, SamplingConfig};
    /// use rand::SeedableRng;
    ///
    /// let z2 = PAdicIntegers::of(2).unwrap();
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    /// let short = SamplingConfig { head_sigma: 0.0, repetend_sigma: 0.0 };
    /// // One random digit repeated forever: 0 or -1.
    /// let x = z2.next_random_with(&mut rng, &short).unwrap();
    /// assert!(x.is_zero() || x == z2.from_integer(-1));
    /// ```
    pub fn next_random_with<R: Rng + ?Sized>(
        self: &Arc<Self>,
        rng: &mut R,
        config: &SamplingConfig,
    ) -> Result<PAdicInteger> {
        config.validate()?;
        Ok(self.sample(rng, config))
    }

    fn sample<R: Rng + ?Sized>(
        self: &Arc<Self>,
        rng: &mut R,
        config: &SamplingConfig,
    ) -> PAdicInteger {
        let head_len = gaussian_length(rng, config.head_sigma);
        let repetend_len = gaussian_length(rng, config.repetend_sigma).max(1);
        let head = (0..head_len).map(|_| rng.gen_range(0..self.base)).collect();
        let repetend = (0..repetend_len)
            .map(|_| rng.gen_range(0..self.base))
            .collect();
        self.bind(DigitSequence::canonical(head, repetend))
    }
}

fn gaussian_length<R: Rng + ?Sized>(rng: &mut R, sigma: f64) -> usize {
    let z: f64 = rng.sample(StandardNormal);
    (z * sigma).abs() as usize
}

impl AlgebraicStructure for Arc<PAdicIntegers> {
    type Element = PAdicInteger;

    fn zero(&self) -> PAdicInteger {
        PAdicIntegers::zero(self)
    }

    fn one(&self) -> PAdicInteger {
        PAdicIntegers::one(self)
    }

    fn cardinality(&self) -> Cardinality {
        PAdicIntegers::cardinality(self)
    }
}

impl fmt::Display for PAdicIntegers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ℤ{}", subscript(u32::from(self.base)))
    }
}
