//! Exact p-adic integers.
//!
//! A p-adic integer is a digit expansion in a prime base `p` that continues
//! forever to the left. This crate represents the ones whose digits are
//! *eventually periodic*: a finite head followed by a repetend that repeats
//! without end. That covers every ordinary integer (zero tail), every
//! negative integer (tail of `p - 1`), and every rational with a
//! denominator prime to `p`.
//!
//! ```text
//! ...4 33₅   =  -7 in ℤ₅
//! ...0 12₅   =   7 in ℤ₅
//! ...9 89    = -11 with base 10 digits
//! ```
//!
//! # Layers
//!
//! | Layer | Type | Knows the base? |
//! |-------|------|-----------------|
//! | Representation | [`DigitSequence`] | no |
//! | Arithmetic engine | [`digits::arithmetic`] | passed per call |
//! | Values | [`PAdicInteger`] | yes, through its context |
//! | Contexts | [`PAdicIntegers`], [`BaseRegistry`] | one per prime |
//!
//! Arithmetic is exact. Carries through an infinite repetend are resolved
//! by detecting the first repeated state of the digit-by-digit pass, so
//! every operation terminates and returns a canonical result. Reciprocals
//! and division are not implemented and fail with
//! [`PAdicError::Unsupported`].
//!
//! # Example
//!
//! ```
//! use padic::PAdicIntegers;
//!
//! let z5 = PAdicIntegers::of(5).unwrap();
//! let minus_one = z5.from_integer(-1);
//! assert_eq!(minus_one.to_string(), "...4 ₅");
//!
//! // -1/4 has the repeating expansion ...1111 in base 5.
//! let minus_quarter = z5.parse("1", "").unwrap();
//! assert_eq!(minus_quarter.times_integer(-4), z5.one());
//!
//! assert_eq!(minus_one.times(&minus_one).unwrap(), z5.one());
//! assert_eq!(z5.from_integer(30).to_exact_integer().unwrap().to_string(), "30");
//! ```
//!
//! # Features
//!
//! - `serde`: (de)serialize [`DigitSequence`] as its head and repetend.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod algebra;
pub mod digits;
pub mod error;
pub mod integers;
pub mod primes;
pub mod registry;
pub mod text;
pub mod value;

pub use algebra::{AlgebraicStructure, Cardinality, FieldElement, RingElement};
pub use digits::{DigitSequence, NOT_REPETITIVE};
pub use error::{PAdicError, Result};
pub use integers::{PAdicIntegers, SamplingConfig};
pub use registry::BaseRegistry;
pub use value::PAdicInteger;

/// Everything needed to work with p-adic values, traits included.
pub mod prelude {
    pub use crate::algebra::{AlgebraicStructure, Cardinality, FieldElement, RingElement};
    pub use crate::{BaseRegistry, DigitSequence, PAdicError, PAdicInteger, PAdicIntegers};
}
