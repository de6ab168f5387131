//! Exact arithmetic on eventually periodic digit sequences.
//!
//! A digit-by-digit pass over an infinite sequence never ends on its own.
//! Every operation here is instead run as a small state machine: once past
//! all heads, the next output digit depends only on the phase within the
//! (common) repetend and on the pending carry. The first time such a state
//! is revisited the output from there on must repeat, so the digits emitted
//! since the first visit become the result's repetend.
//!
//! | Operation | State | Bound on states |
//! |-----------|-------|-----------------|
//! | [`sum`] | (phase mod lcm of periods, carry) | lcm · operand count |
//! | [`multiply_digit`] | (phase, carry) | period · base |
//! | [`multiply`] | (multiplier phase, pending carry sequence) | finite, data dependent |
//!
//! The bounds are deterministic but not small for adversarial inputs:
//! many operands with long, pairwise co-prime cycle lengths make the least
//! common multiple grow multiplicatively. No truncation is applied.
//!
//! All functions take the base explicitly. They check it, and every operand
//! digit against it, before any state machine runs.
//!
//! # Example
//!
//! ```
//! use padic::DigitSequence;
//! use padic::digits::arithmetic::{multiply_digit, negate, sum};
//!
//! let minus_eleven = DigitSequence::parse("9", "89")?;
//! assert_eq!(multiply_digit(10, 9, &minus_eleven)?.to_string(), "...9 01");
//!
//! let one = DigitSequence::one();
//! let minus_one = negate(10, &one)?;
//! assert_eq!(minus_one.to_string(), "...9 ");
//! assert!(sum(10, &[one, minus_one])?.is_zero());
//! # Ok::<(), padic::PAdicError>(())
//! ```

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::trace;

use super::DigitSequence;
use crate::error::{PAdicError, Result};
use crate::primes::MAX_RADIX;

impl DigitSequence {
    /// Multiply by `base^k`: `k` zero digits enter at the least significant end.
    ///
    /// # Example
    ///
    /// ```
    /// use padic::DigitSequence;
    ///
    /// let two = DigitSequence::parse("2", "").unwrap();
    /// assert_eq!(two.left_shift(1).to_string(), "...2 0");
    /// ```
    #[must_use]
    pub fn left_shift(&self, k: usize) -> Self {
        if k == 0 {
            return self.clone();
        }
        let mut head = vec![0; k];
        head.extend_from_slice(&self.head);
        Self::canonical(head, self.repetend.to_vec())
    }

    /// Drop the `k` least significant digits.
    ///
    /// Within the head this truncates. Once the head is exhausted the
    /// remaining shift advances the phase of the repetend, so a pure cycle
    /// rotates. This is a reindexing of digit positions and not a p-adic
    /// division.
    ///
    /// # Example
    ///
    /// ```
    /// use padic::DigitSequence;
    ///
    /// let a = DigitSequence::parse("1234", "3457").unwrap();
    /// assert_eq!(a.right_shift(3).to_string(), "...1234 3");
    /// assert_eq!(a.right_shift(4).to_string(), "...1234 ");
    /// assert_eq!(a.right_shift(5).to_string(), "...4123 ");
    /// ```
    #[must_use]
    pub fn right_shift(&self, k: usize) -> Self {
        if k == 0 {
            return self.clone();
        }
        if k <= self.head.len() {
            return Self::canonical(self.head[k..].to_vec(), self.repetend.to_vec());
        }
        let mut repetend = self.repetend.to_vec();
        let rotation = (k - self.head.len()) % repetend.len();
        repetend.rotate_left(rotation);
        Self::canonical(Vec::new(), repetend)
    }
}

/// Shared carry-propagation state machine for [`sum`] and [`multiply_digit`].
///
/// `column(n)` is the raw value of output position `n` before the carry is
/// added. For `n ≥ head_len` it must depend only on `(n - head_len) % period`.
struct CarryMachine {
    base: u32,
    head_len: usize,
    period: usize,
}

impl CarryMachine {
    fn run(&self, mut column: impl FnMut(usize) -> u32) -> DigitSequence {
        let mut out: Vec<u8> = Vec::with_capacity(self.head_len + self.period + 1);
        let mut seen: HashMap<(usize, u32), usize> = HashMap::new();
        let mut carry = 0u32;
        let mut position = 0usize;
        loop {
            if position >= self.head_len {
                let phase = (position - self.head_len) % self.period;
                match seen.entry((phase, carry)) {
                    Entry::Occupied(first) => {
                        let start = *first.get();
                        trace!(
                            start,
                            period = position - start,
                            carry,
                            "carry cycle closed"
                        );
                        let repetend = out.split_off(start);
                        return DigitSequence::canonical(out, repetend);
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(position);
                    }
                }
            }
            let total = column(position) + carry;
            out.push((total % self.base) as u8);
            carry = total / self.base;
            position += 1;
        }
    }
}

/// Sum any number of sequences in a single pass.
///
/// All repetends are aligned to the least common multiple of their lengths,
/// so one cycle detection covers every operand at once. An empty slice sums
/// to zero.
///
/// # Errors
///
/// [`PAdicError::InvalidBase`] if `base` is not a usable radix, and
/// [`PAdicError::InvalidDigit`] if an operand has a digit not below `base`.
///
/// # Example
///
/// ```
/// use padic::DigitSequence;
/// use padic::digits::arithmetic::sum;
///
/// let a = DigitSequence::create(&[1], &[]).unwrap();
/// assert_eq!(sum(10, &[a.clone(), a.clone(), a]).unwrap().to_string(), "...0 3");
///
/// let b = DigitSequence::parse("67", "89").unwrap();
/// let c = DigitSequence::parse("5", "1666").unwrap();
/// assert_eq!(sum(10, &[b, c]).unwrap().to_string(), "...32 28455");
/// ```
pub fn sum(base: u8, summands: &[DigitSequence]) -> Result<DigitSequence> {
    check_operands(base, summands)?;
    Ok(sum_unchecked(base, summands))
}

/// Multiply every digit of `multiplicand` by the single digit `digit`.
///
/// # Errors
///
/// [`PAdicError::InvalidBase`] if `base` is not a usable radix, and
/// [`PAdicError::InvalidDigit`] if `digit` or a digit of `multiplicand` is
/// not below `base`.
///
/// # Example
///
/// ```
/// use padic::DigitSequence;
/// use padic::digits::arithmetic::multiply_digit;
///
/// let a = DigitSequence::parse("5", "4").unwrap();
/// assert_eq!(multiply_digit(10, 6, &a).unwrap().to_string(), "...3 24");
/// assert_eq!(multiply_digit(10, 7, &a).unwrap().to_string(), "...8 78");
/// assert!(multiply_digit(5, 7, &a).is_err());
/// ```
pub fn multiply_digit(
    base: u8,
    digit: u8,
    multiplicand: &DigitSequence,
) -> Result<DigitSequence> {
    check_operands(base, std::slice::from_ref(multiplicand))?;
    if digit >= base {
        return Err(PAdicError::invalid_digit(digit, base));
    }
    Ok(multiply_digit_unchecked(base, digit, multiplicand))
}

/// Long multiplication of two sequences.
///
/// Shifted single-digit products of `multiplicand` are accumulated one
/// multiplier position at a time. After position `i` the lowest digit of
/// the running sum is final and the rest of it (the pending carry, itself
/// an eventually periodic sequence) is carried into position `i + 1`. In
/// the multiplier's periodic tail the pair (multiplier phase, pending
/// carry) determines all remaining output, so a revisited pair closes the
/// repetend.
///
/// # Errors
///
/// [`PAdicError::InvalidBase`] if `base` is not a usable radix, and
/// [`PAdicError::InvalidDigit`] if either operand has a digit not below
/// `base`.
///
/// # Example
///
/// ```
/// use padic::DigitSequence;
/// use padic::digits::arithmetic::multiply;
///
/// let a = DigitSequence::parse("1", "").unwrap(); // -1/9
/// let b = DigitSequence::parse("2", "").unwrap(); // -2/9
/// assert_eq!(multiply(10, &a, &b).unwrap().to_string(), "...197530864 2");
/// ```
pub fn multiply(
    base: u8,
    multiplier: &DigitSequence,
    multiplicand: &DigitSequence,
) -> Result<DigitSequence> {
    check_base(base)?;
    check_digits(base, multiplier)?;
    check_digits(base, multiplicand)?;
    Ok(multiply_unchecked(base, multiplier, multiplicand))
}

/// Digit-wise complement: every digit `d` becomes `base - 1 - d`.
///
/// The complement of `x` is `-1 - x`; the zero tail of a finite sequence
/// becomes a tail of `base - 1` digits.
///
/// # Errors
///
/// [`PAdicError::InvalidBase`] if `base` is not a usable radix, and
/// [`PAdicError::InvalidDigit`] if a digit is not below `base`.
pub fn complement(base: u8, digits: &DigitSequence) -> Result<DigitSequence> {
    check_operands(base, std::slice::from_ref(digits))?;
    Ok(complement_unchecked(base, digits))
}

/// Additive inverse: the complement plus one.
///
/// # Errors
///
/// [`PAdicError::InvalidBase`] if `base` is not a usable radix, and
/// [`PAdicError::InvalidDigit`] if a digit is not below `base`.
///
/// # Example
///
/// ```
/// use padic::DigitSequence;
/// use padic::digits::arithmetic::negate;
///
/// let minus_eleven = DigitSequence::parse("9", "89").unwrap();
/// assert_eq!(negate(10, &minus_eleven).unwrap().to_string(), "...0 11");
/// assert!(negate(5, &DigitSequence::zero()).unwrap().is_zero());
/// ```
pub fn negate(base: u8, digits: &DigitSequence) -> Result<DigitSequence> {
    check_operands(base, std::slice::from_ref(digits))?;
    Ok(negate_unchecked(base, digits))
}

/// Digit expansion of an ordinary integer. Negative values come out with a
/// repeating `base - 1` tail.
///
/// # Errors
///
/// [`PAdicError::InvalidBase`] if `base` is not a usable radix.
///
/// # Example
///
/// ```
/// use padic::digits::arithmetic::from_integer;
///
/// assert_eq!(from_integer(10, 1234).unwrap().to_string(), "...0 1234");
/// assert_eq!(from_integer(10, -11).unwrap().to_string(), "...9 89");
/// assert_eq!(from_integer(5, 7).unwrap().to_string(), "...0 12");
/// assert!(from_integer(1, 7).is_err());
/// ```
pub fn from_integer(base: u8, value: i64) -> Result<DigitSequence> {
    check_base(base)?;
    Ok(from_integer_unchecked(base, value))
}

fn check_base(base: u8) -> Result<()> {
    if (2..=MAX_RADIX).contains(&u32::from(base)) {
        Ok(())
    } else {
        Err(PAdicError::InvalidBase {
            base: u32::from(base),
        })
    }
}

fn check_digits(base: u8, digits: &DigitSequence) -> Result<()> {
    let max = digits.max_digit();
    if max < base {
        Ok(())
    } else {
        Err(PAdicError::invalid_digit(max, base))
    }
}

fn check_operands(base: u8, operands: &[DigitSequence]) -> Result<()> {
    check_base(base)?;
    operands.iter().try_for_each(|s| check_digits(base, s))
}

// The `_unchecked` forms below expect `2 <= base <= 36` and every operand
// digit below `base`. `PAdicInteger` establishes both when it is built.

pub(crate) fn sum_unchecked(base: u8, summands: &[DigitSequence]) -> DigitSequence {
    if summands.is_empty() {
        return DigitSequence::zero();
    }
    let head_len = summands.iter().map(|s| s.head.len()).max().unwrap_or(0);
    let period = summands.iter().map(|s| s.repetend.len()).fold(1, lcm);
    CarryMachine {
        base: u32::from(base),
        head_len,
        period,
    }
    .run(|n| summands.iter().map(|s| u32::from(s.digit_at(n))).sum())
}

fn multiply_digit_unchecked(
    base: u8,
    digit: u8,
    multiplicand: &DigitSequence,
) -> DigitSequence {
    let digit = u32::from(digit);
    CarryMachine {
        base: u32::from(base),
        head_len: multiplicand.head.len(),
        period: multiplicand.repetend.len(),
    }
    .run(|n| digit * u32::from(multiplicand.digit_at(n)))
}

pub(crate) fn multiply_unchecked(
    base: u8,
    multiplier: &DigitSequence,
    multiplicand: &DigitSequence,
) -> DigitSequence {
    let head_len = multiplier.head.len();
    let period = multiplier.repetend.len();
    let mut products: Vec<Option<DigitSequence>> = vec![None; usize::from(base)];
    let mut settled: Vec<u8> = Vec::new();
    let mut pending = DigitSequence::zero();
    let mut seen: HashMap<(usize, DigitSequence), usize> = HashMap::new();
    let mut position = 0usize;
    loop {
        if position >= head_len {
            if !multiplier.is_repetitive() {
                // Only zeros remain in the multiplier.
                settled.extend_from_slice(&pending.head);
                return DigitSequence::canonical(settled, pending.repetend.to_vec());
            }
            let phase = (position - head_len) % period;
            match seen.entry((phase, pending.clone())) {
                Entry::Occupied(first) => {
                    let start = *first.get();
                    trace!(start, period = position - start, "product cycle closed");
                    let repetend = settled.split_off(start);
                    return DigitSequence::canonical(settled, repetend);
                }
                Entry::Vacant(slot) => {
                    slot.insert(position);
                }
            }
        }
        let digit = multiplier.digit_at(position);
        let partial = if digit == 0 {
            pending
        } else {
            let product = products[usize::from(digit)]
                .get_or_insert_with(|| multiply_digit_unchecked(base, digit, multiplicand));
            sum_unchecked(base, &[pending, product.clone()])
        };
        settled.push(partial.digit_at(0));
        pending = partial.right_shift(1);
        position += 1;
    }
}

fn complement_unchecked(base: u8, digits: &DigitSequence) -> DigitSequence {
    let flip = |d: &u8| base - 1 - d;
    DigitSequence::canonical(
        digits.head.iter().map(flip).collect(),
        digits.repetend.iter().map(flip).collect(),
    )
}

pub(crate) fn negate_unchecked(base: u8, digits: &DigitSequence) -> DigitSequence {
    sum_unchecked(base, &[complement_unchecked(base, digits), DigitSequence::one()])
}

pub(crate) fn from_integer_unchecked(base: u8, value: i64) -> DigitSequence {
    let radix = u64::from(base);
    let mut magnitude = value.unsigned_abs();
    let mut head = Vec::new();
    while magnitude > 0 {
        head.push((magnitude % radix) as u8);
        magnitude /= radix;
    }
    let digits = DigitSequence::canonical(head, Vec::new());
    if value < 0 {
        negate_unchecked(base, &digits)
    } else {
        digits
    }
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn lcm(a: usize, b: usize) -> usize {
    a / gcd(a, b) * b
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(repetend: &str, head: &str) -> DigitSequence {
        DigitSequence::parse(repetend, head).unwrap()
    }

    #[test]
    fn lcm_of_periods() {
        assert_eq!(lcm(1, 1), 1);
        assert_eq!(lcm(4, 6), 12);
        assert_eq!(lcm(3, 5), 15);
        assert_eq!([2usize, 3, 4].into_iter().fold(1, lcm), 12);
    }

    #[test]
    fn shifts_keep_the_repetend_phase() {
        let a = seq("1234", "3457");
        assert_eq!(a.left_shift(3).to_string(), "...1234 3457000");
        assert_eq!(a.right_shift(3).to_string(), "...1234 3");
        assert_eq!(a.right_shift(4).to_string(), "...1234 ");
        assert_eq!(a.right_shift(5).to_string(), "...4123 ");
        assert_eq!(a.right_shift(6).to_string(), "...3412 ");
        assert_eq!(a.right_shift(7).to_string(), "...2341 ");
        assert_eq!(a.right_shift(8).to_string(), "...1234 ");
        assert_eq!(a.right_shift(9).to_string(), "...4123 ");
    }

    #[test]
    fn left_shift_of_a_pure_cycle() {
        assert_eq!(seq("2", "").left_shift(1).to_string(), "...2 0");
        // A cycle ending in zero absorbs the shifted-in zero.
        assert_eq!(seq("01", "").left_shift(1), seq("10", ""));
    }

    #[test]
    fn zero_shift_is_identity() {
        let a = seq("1234", "3457");
        assert_eq!(a.left_shift(0), a);
        assert_eq!(a.right_shift(0), a);
    }

    #[test]
    fn multiply_digit_with_repetend() {
        assert_eq!(multiply_digit(10, 9, &seq("9", "89")).unwrap().render(10), "...9 01");
        assert_eq!(multiply_digit(10, 9, &seq("9", "89")).unwrap().render(3), "...9 01₃");
        assert_eq!(multiply_digit(10, 6, &seq("5", "4")).unwrap().to_string(), "...3 24");
        assert_eq!(multiply_digit(10, 7, &seq("5", "4")).unwrap().to_string(), "...8 78");
        assert_eq!(multiply_digit(10, 4, &seq("6", "")).unwrap().to_string(), "...6 4");
        assert_eq!(multiply_digit(10, 1, &seq("2", "0")).unwrap().to_string(), "...2 0");
    }

    #[test]
    fn multiply_digit_finite() {
        assert_eq!(
            multiply_digit(10, 5, &seq("0", "5678")).unwrap().to_string(),
            "...0 28390"
        );
        assert_eq!(
            multiply_digit(10, 1, &seq("0", "56780000")).unwrap().to_string(),
            "...0 56780000"
        );
        assert!(multiply_digit(10, 0, &seq("37", "12")).unwrap().is_zero());
    }

    #[test]
    fn sum_of_finite_values() {
        let a = DigitSequence::create(&[1], &[]).unwrap();
        assert_eq!(sum(10, &[a.clone(), a.clone(), a]).unwrap().to_string(), "...0 3");

        let b = DigitSequence::create(&[1, 3], &[]).unwrap();
        assert_eq!(sum(10, &[b.clone(), b.clone(), b]).unwrap().to_string(), "...0 93");

        let c = seq("0", "13314910");
        assert_eq!(
            sum(10, &[c.clone(), c.clone(), c]).unwrap().to_string(),
            "...0 39944730"
        );
    }

    #[test]
    fn sum_of_pure_cycles() {
        let a = DigitSequence::create(&[], &[1]).unwrap();
        assert_eq!(sum(10, &[a.clone(), a.clone(), a]).unwrap().to_string(), "...3 ");
    }

    #[test]
    fn sum_with_carry_into_the_repetend() {
        let a = DigitSequence::create(&[1, 4], &[1, 2, 3, 4]).unwrap();
        assert_eq!(sum(10, &[a.clone(), a.clone(), a]).unwrap().to_string(), "...9642 3");
    }

    #[test]
    fn sum_aligns_different_periods() {
        let a = DigitSequence::only_repetend(&[1, 2, 3])
            .unwrap()
            .with_head(&[1])
            .unwrap();
        let b = DigitSequence::only_repetend(&[7, 1])
            .unwrap()
            .with_head(&[3, 4])
            .unwrap();
        assert_eq!(sum(10, &[a, b]).unwrap().to_string(), "...402948 365");

        let c = seq("67", "89");
        let d = seq("5", "1666");
        assert_eq!(sum(10, &[c, d]).unwrap().to_string(), "...32 28455");
    }

    #[test]
    fn sum_to_zero() {
        let one = DigitSequence::one();
        let minus_one = DigitSequence::create(&[], &[4]).unwrap();
        assert_eq!(sum(5, &[one, minus_one]).unwrap().render(5), "...0 ₅");
    }

    #[test]
    fn empty_sum_is_zero() {
        assert!(sum(7, &[]).unwrap().is_zero());
    }

    #[test]
    fn multiply_repetitive() {
        assert_eq!(
            multiply(10, &seq("1", ""), &seq("2", "")).unwrap().to_string(),
            "...197530864 2"
        );
        assert_eq!(
            multiply(10, &seq("5", "4"), &seq("6", "")).unwrap().to_string(),
            "...296 4"
        );
        assert_eq!(
            multiply(10, &seq("6", ""), &seq("5", "4")).unwrap().to_string(),
            "...296 4"
        );
    }

    #[test]
    fn multiply_finite() {
        assert_eq!(
            multiply(10, &seq("0", "12345"), &seq("0", "5678")).unwrap().to_string(),
            "...0 70094910"
        );
    }

    #[test]
    fn multiply_with_one() {
        let a = seq("010", "4");
        let one = DigitSequence::of(&[1]).unwrap();
        assert_eq!(multiply(10, &a, &one).unwrap().to_string(), "...010 4");
        assert_eq!(multiply(10, &one, &a).unwrap().to_string(), "...010 4");
    }

    #[test]
    fn minus_one_squared_is_one() {
        let minus_one = seq("9", "");
        assert_eq!(multiply(10, &minus_one, &minus_one).unwrap(), DigitSequence::one());
    }

    #[test]
    fn negation() {
        assert_eq!(negate(10, &DigitSequence::one()).unwrap().to_string(), "...9 ");
        assert_eq!(negate(10, &seq("9", "89")).unwrap().to_string(), "...0 11");
        assert!(negate(5, &DigitSequence::zero()).unwrap().is_zero());
        let a = seq("1234", "3457");
        assert_eq!(negate(10, &negate(10, &a).unwrap()).unwrap(), a);
    }

    #[test]
    fn complement_of_a_finite_value() {
        assert_eq!(complement(10, &seq("0", "12")).unwrap().to_string(), "...9 87");
    }

    #[test]
    fn integers() {
        assert!(from_integer(3, 0).unwrap().is_zero());
        assert_eq!(from_integer(2, 6).unwrap().to_string(), "...0 110");
        assert_eq!(from_integer(10, -1).unwrap().to_string(), "...9 ");
        assert_eq!(
            from_integer(10, i64::MIN).unwrap(),
            negate(10, &seq("0", "9223372036854775808")).unwrap()
        );
    }

    #[test]
    fn digits_are_checked_against_the_base() {
        let seven = DigitSequence::of(&[7]).unwrap();
        let one = DigitSequence::one();
        let bad = PAdicError::InvalidDigit { digit: 7, base: 5 };
        assert_eq!(multiply(5, &seven, &one), Err(bad.clone()));
        assert_eq!(multiply(5, &one, &seven), Err(bad.clone()));
        assert_eq!(complement(5, &seven), Err(bad.clone()));
        assert_eq!(negate(5, &seven), Err(bad.clone()));
        assert_eq!(sum(5, &[one.clone(), seven.clone()]), Err(bad.clone()));
        assert_eq!(multiply_digit(5, 1, &seven), Err(bad));
        assert_eq!(
            multiply_digit(5, 9, &one),
            Err(PAdicError::InvalidDigit { digit: 9, base: 5 })
        );
        // The same digits are fine in a larger base.
        assert_eq!(multiply(11, &seven, &one).unwrap(), seven);
    }

    #[test]
    fn unusable_bases_are_rejected() {
        let one = DigitSequence::one();
        for base in [0u8, 1, 37, 255] {
            let bad = Err(PAdicError::InvalidBase {
                base: u32::from(base),
            });
            assert_eq!(sum(base, &[one.clone()]), bad);
            assert_eq!(sum(base, &[]), bad);
            assert_eq!(from_integer(base, 3), bad);
            assert_eq!(negate(base, &DigitSequence::zero()), bad);
            assert_eq!(multiply(base, &one, &one), bad);
        }
    }
}
