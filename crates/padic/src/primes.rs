//! Primality for the supported p-adic bases.
//!
//! Digits are rendered as a single alphanumeric character, so the largest
//! usable base is 36 and the supported primes are the eleven primes below it.
//!
//! # Example
//!
//! ```
//! use padic::primes;
//!
//! assert!(primes::is_prime(31));
//! assert!(!primes::is_prime(33));
//! assert!(primes::is_supported_base(7));
//! assert!(!primes::is_supported_base(37)); // prime, but past the radix
//! ```

/// Largest radix a digit can be rendered in (`0-9a-z`).
pub const MAX_RADIX: u32 = 36;

/// The primes that can serve as a p-adic base, in ascending order.
pub const SUPPORTED_PRIMES: [u8; 11] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31];

/// Trial-division primality test.
///
/// # Examples
///
/// ```
/// use padic::primes::is_prime;
///
/// assert!(is_prime(2));
/// assert!(is_prime(251));
/// assert!(!is_prime(1));
/// assert!(!is_prime(91)); // 7 · 13
/// ```
#[must_use]
pub const fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut d = 3u32;
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// Whether `base` is a prime that digit sequences can be rendered in.
#[inline]
#[must_use]
pub const fn is_supported_base(base: u32) -> bool {
    base <= MAX_RADIX && is_prime(base)
}
