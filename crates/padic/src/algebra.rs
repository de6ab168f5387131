//! The algebraic contract p-adic values are consumed through.
//!
//! Generic code only needs three things from a number system: produce its
//! zero and one, describe its size, and combine elements. These traits are
//! that boundary and nothing more; there is no operator registry or
//! structure hierarchy behind them.
//!
//! # Example
//!
//! ```
//! use padic::algebra::{AlgebraicStructure, Cardinality, RingElement};
//! use padic::PAdicIntegers;
//!
//! fn square_plus_one<S: AlgebraicStructure>(s: &S, x: &S::Element) -> padic::Result<S::Element> {
//!     x.times(x)?.plus(&s.one())
//! }
//!
//! let z7 = PAdicIntegers::of(7).unwrap();
//! let x = z7.from_integer(3);
//! assert_eq!(square_plus_one(&z7, &x).unwrap(), z7.from_integer(10));
//! assert_eq!(z7.cardinality(), Cardinality::Aleph0);
//! ```

use core::fmt;

use crate::error::Result;

/// Size of an algebraic structure.
///
/// Ordered by size: every finite cardinality precedes [`Cardinality::Aleph0`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Cardinality {
    /// A finite number of elements.
    Finite(u64),
    /// Countably infinite.
    Aleph0,
    /// The cardinality of the continuum.
    Aleph1,
}

impl Cardinality {
    /// Whether the structure has finitely many elements.
    #[inline]
    #[must_use]
    pub const fn is_finite(self) -> bool {
        matches!(self, Self::Finite(_))
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(n) => write!(f, "{n}"),
            Self::Aleph0 => f.write_str("ℵ₀"),
            Self::Aleph1 => f.write_str("ℵ₁"),
        }
    }
}

/// A set of elements with distinguished zero and one.
pub trait AlgebraicStructure {
    /// The element type.
    type Element: RingElement;

    /// Additive identity.
    fn zero(&self) -> Self::Element;

    /// Multiplicative identity.
    fn one(&self) -> Self::Element;

    /// Number of elements.
    fn cardinality(&self) -> Cardinality;
}

/// Addition, multiplication and negation.
///
/// Binary operations are fallible because two elements are not always
/// drawn from the same structure.
pub trait RingElement: Sized {
    /// `self + summand`.
    ///
    /// # Errors
    ///
    /// When `summand` belongs to an incompatible structure.
    fn plus(&self, summand: &Self) -> Result<Self>;

    /// `self · multiplier`.
    ///
    /// # Errors
    ///
    /// When `multiplier` belongs to an incompatible structure.
    fn times(&self, multiplier: &Self) -> Result<Self>;

    /// `-self`.
    #[must_use]
    fn negation(&self) -> Self;

    /// `self - subtrahend`.
    ///
    /// # Errors
    ///
    /// When `subtrahend` belongs to an incompatible structure.
    fn minus(&self, subtrahend: &Self) -> Result<Self> {
        self.plus(&subtrahend.negation())
    }
}

/// A ring element that may also be divided.
pub trait FieldElement: RingElement {
    /// `1 / self`.
    ///
    /// # Errors
    ///
    /// When the inverse does not exist or cannot be computed.
    fn reciprocal(&self) -> Result<Self>;

    /// `self / divisor`.
    ///
    /// # Errors
    ///
    /// When the quotient does not exist or cannot be computed.
    fn divided_by(&self, divisor: i64) -> Result<Self>;
}
