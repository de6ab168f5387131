//! Property-based tests for the digit sequence arithmetic.
//!
//! Uses proptest to check ring identities on random eventually periodic
//! sequences, and agreement with machine integers on finite ones.

use padic::digits::arithmetic::{from_integer, multiply, multiply_digit, negate, sum};
use padic::DigitSequence;
use proptest::prelude::*;

fn base() -> impl Strategy<Value = u8> {
    prop::sample::select(vec![2u8, 3, 5, 7, 10, 11, 13])
}

prop_compose! {
    fn sequence(base: u8)(
        head in prop::collection::vec(0..base, 0..5),
        repetend in prop::collection::vec(0..base, 1..4),
    ) -> DigitSequence {
        DigitSequence::create(&head, &repetend).unwrap()
    }
}

fn one() -> impl Strategy<Value = (u8, DigitSequence)> {
    base().prop_flat_map(|b| (Just(b), sequence(b)))
}

fn two() -> impl Strategy<Value = (u8, DigitSequence, DigitSequence)> {
    base().prop_flat_map(|b| (Just(b), sequence(b), sequence(b)))
}

fn three() -> impl Strategy<Value = (u8, DigitSequence, DigitSequence, DigitSequence)> {
    base().prop_flat_map(|b| (Just(b), sequence(b), sequence(b), sequence(b)))
}

// =============================================================================
// Negation
// =============================================================================

proptest! {
    /// -(-x) = x
    #[test]
    fn prop_negation_involution((b, x) in one()) {
        prop_assert_eq!(negate(b, &negate(b, &x).unwrap()).unwrap(), x);
    }

    /// x + (-x) = 0
    #[test]
    fn prop_additive_inverse((b, x) in one()) {
        let minus_x = negate(b, &x).unwrap();
        prop_assert!(sum(b, &[x, minus_x]).unwrap().is_zero());
    }

    /// -x = (-1) · x
    #[test]
    fn prop_negation_is_times_minus_one((b, x) in one()) {
        let minus_one = from_integer(b, -1).unwrap();
        prop_assert_eq!(multiply(b, &minus_one, &x).unwrap(), negate(b, &x).unwrap());
    }
}

// =============================================================================
// Addition
// =============================================================================

proptest! {
    /// x + 0 = x
    #[test]
    fn prop_sum_identity((b, x) in one()) {
        prop_assert_eq!(sum(b, &[x.clone(), DigitSequence::zero()]).unwrap(), x);
    }

    /// The operand order does not matter.
    #[test]
    fn prop_sum_commutative((b, x, y, z) in three()) {
        let xyz = sum(b, &[x.clone(), y.clone(), z.clone()]).unwrap();
        prop_assert_eq!(&xyz, &sum(b, &[z.clone(), x.clone(), y.clone()]).unwrap());
        prop_assert_eq!(&xyz, &sum(b, &[y, z, x]).unwrap());
    }

    /// One N-ary pass equals nested binary sums.
    #[test]
    fn prop_sum_associative((b, x, y, z) in three()) {
        let flat = sum(b, &[x.clone(), y.clone(), z.clone()]).unwrap();
        let nested = sum(b, &[sum(b, &[x, y]).unwrap(), z]).unwrap();
        prop_assert_eq!(flat, nested);
    }

    /// Finite sums agree with machine integers, negatives included.
    #[test]
    fn prop_sum_matches_integers(b in base(), x in any::<i32>(), y in any::<i32>()) {
        let (x, y) = (i64::from(x), i64::from(y));
        prop_assert_eq!(
            sum(b, &[from_integer(b, x).unwrap(), from_integer(b, y).unwrap()]).unwrap(),
            from_integer(b, x + y).unwrap()
        );
    }
}

// =============================================================================
// Multiplication
// =============================================================================

proptest! {
    /// x · 1 = 1 · x = x
    #[test]
    fn prop_multiply_identity((b, x) in one()) {
        let one = DigitSequence::one();
        prop_assert_eq!(&multiply(b, &one, &x).unwrap(), &x);
        prop_assert_eq!(&multiply(b, &x, &one).unwrap(), &x);
    }

    /// x · 0 = 0
    #[test]
    fn prop_multiply_by_zero((b, x) in one()) {
        prop_assert!(multiply(b, &DigitSequence::zero(), &x).unwrap().is_zero());
        prop_assert!(multiply(b, &x, &DigitSequence::zero()).unwrap().is_zero());
    }

    /// x · y = y · x
    #[test]
    fn prop_multiply_commutative((b, x, y) in two()) {
        prop_assert_eq!(multiply(b, &x, &y).unwrap(), multiply(b, &y, &x).unwrap());
    }

    /// x · (y + z) = x·y + x·z
    #[test]
    fn prop_multiply_distributes((b, x, y, z) in three()) {
        let left = multiply(b, &x, &sum(b, &[y.clone(), z.clone()]).unwrap()).unwrap();
        let (xy, xz) = (multiply(b, &x, &y).unwrap(), multiply(b, &x, &z).unwrap());
        let right = sum(b, &[xy, xz]).unwrap();
        prop_assert_eq!(left, right);
    }

    /// A single-digit multiplier takes the same path either way.
    #[test]
    fn prop_multiply_digit_matches_multiply((b, x) in one(), d in 0u8..10) {
        let d = d % b;
        let digit = DigitSequence::create(&[d], &[]).unwrap();
        prop_assert_eq!(multiply_digit(b, d, &x).unwrap(), multiply(b, &digit, &x).unwrap());
    }

    /// Finite products agree with machine integers.
    #[test]
    fn prop_multiply_matches_integers(
        b in base(),
        x in -(1i64 << 31)..(1i64 << 31),
        y in -(1i64 << 31)..(1i64 << 31),
    ) {
        prop_assert_eq!(
            multiply(b, &from_integer(b, x).unwrap(), &from_integer(b, y).unwrap()).unwrap(),
            from_integer(b, x * y).unwrap()
        );
    }
}

// =============================================================================
// Shifts
// =============================================================================

proptest! {
    /// right_shift(left_shift(x, k), k) = x
    #[test]
    fn prop_shift_round_trip((_b, x) in one(), k in 0usize..8) {
        prop_assert_eq!(x.left_shift(k).right_shift(k), x);
    }

    /// left_shift(x, k) = x · p^k
    #[test]
    fn prop_left_shift_is_multiplication((b, x) in one(), k in 0u32..4) {
        let power = from_integer(b, i64::from(b).pow(k)).unwrap();
        prop_assert_eq!(x.left_shift(k as usize), multiply(b, &power, &x).unwrap());
    }

    /// Right shifts compose.
    #[test]
    fn prop_right_shift_composes((_b, x) in one(), j in 0usize..6, k in 0usize..6) {
        prop_assert_eq!(x.right_shift(j).right_shift(k), x.right_shift(j + k));
    }
}

// =============================================================================
// Representation
// =============================================================================

proptest! {
    /// The digit printed at each position is digit_at of that position.
    #[test]
    fn prop_display_matches_digit_at((_b, x) in one()) {
        let text = x.to_string();
        let body = text.strip_prefix("...").unwrap();
        let (repetend, head) = body.split_once(' ').unwrap();
        for (n, c) in head.chars().rev().enumerate() {
            prop_assert_eq!(c.to_digit(36).unwrap(), u32::from(x.digit_at(n)));
        }
        let offset = head.chars().count();
        for (i, c) in repetend.chars().rev().enumerate() {
            prop_assert_eq!(c.to_digit(36).unwrap(), u32::from(x.digit_at(offset + i)));
        }
    }

    /// Display and FromStr are inverse.
    #[test]
    fn prop_notation_round_trip((_b, x) in one()) {
        let parsed: DigitSequence = x.to_string().parse().unwrap();
        prop_assert_eq!(parsed, x);
    }

    /// Any encoding of a stream has the same canonical form.
    #[test]
    fn prop_canonical_form_is_unique(
        (_b, x) in one(),
        extra_cycles in 0usize..3,
        unrolled in 0usize..4,
    ) {
        // Repeat the cycle and unroll some of it into the head.
        let mut head = x.head().to_vec();
        head.extend(x.repetend().iter().cycle().take(unrolled));
        let phase = unrolled % x.repetend().len();
        let mut repetend = x.repetend().to_vec();
        repetend.rotate_left(phase);
        let repetend = repetend.repeat(extra_cycles + 1);
        let other = DigitSequence::create(&head, &repetend).unwrap();
        prop_assert_eq!(other, x);
    }

    /// The digit stream is what digit_at describes.
    #[test]
    fn prop_digits_iterator((_b, x) in one()) {
        for (n, d) in x.digits().take(32).enumerate() {
            prop_assert_eq!(d, x.digit_at(n));
        }
    }
}
