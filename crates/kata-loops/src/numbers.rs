//! Integer exercises.

use std::fmt;

/// Result of [`fizzbuzz`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FizzBuzz {
    /// Divisible by neither 3 nor 5.
    Number(i64),
    /// Divisible by 3 only.
    Fizz,
    /// Divisible by 5 only.
    Buzz,
    /// Divisible by both 3 and 5.
    FizzBuzz,
}

impl fmt::Display for FizzBuzz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Fizz => f.write_str("Fizz"),
            Self::Buzz => f.write_str("Buzz"),
            Self::FizzBuzz => f.write_str("FizzBuzz"),
        }
    }
}

/// Classify a number by divisibility by 3 and 5.
///
/// ```
/// use kata_loops::{fizzbuzz, FizzBuzz};
///
/// assert_eq!(fizzbuzz(4), FizzBuzz::Number(4));
/// assert_eq!(fizzbuzz(21).to_string(), "Fizz");
/// ```
#[must_use]
pub const fn fizzbuzz(num: i64) -> FizzBuzz {
    match (num % 3 == 0, num % 5 == 0) {
        (true, true) => FizzBuzz::FizzBuzz,
        (true, false) => FizzBuzz::Fizz,
        (false, true) => FizzBuzz::Buzz,
        (false, false) => FizzBuzz::Number(num),
    }
}

/// `n!`, with `0! == 1`.
///
/// Returns `None` once the product no longer fits in a `u128` (n > 34).
#[must_use]
pub fn factorial(n: u32) -> Option<u128> {
    (1..=n).try_fold(1_u128, |acc, i| acc.checked_mul(u128::from(i)))
}

/// Sum of every integer between `n1` and `n2`, both inclusive.
///
/// The bounds may be given in either order and may be negative.
#[must_use]
pub fn sum_between(n1: i64, n2: i64) -> i128 {
    let (lo, hi) = (i128::from(n1.min(n2)), i128::from(n1.max(n2)));
    // One of the two factors is always even.
    (lo + hi) * (hi - lo + 1) / 2
}

/// Reverse the decimal digits of `num`. Trailing zeros become leading zeros
/// and disappear, so `1200` reverses to `21`.
///
/// Returns `None` if the reversed value does not fit in a `u64`.
#[must_use]
pub fn reverse_integer(num: u64) -> Option<u64> {
    let mut rest = num;
    let mut result: u64 = 0;

    while rest > 0 {
        result = result.checked_mul(10)?.checked_add(rest % 10)?;
        rest /= 10;
    }

    Some(result)
}

/// Sum the digits repeatedly until a single digit remains.
///
/// `165536` → `26` → `8`
#[must_use]
pub const fn digital_root(num: u64) -> u64 {
    let mut n = num;
    while n > 9 {
        let mut sum = 0;
        while n > 0 {
            sum += n % 10;
            n /= 10;
        }
        n = sum;
    }
    n
}

/// Write `num` in base `radix`.
///
/// ```
/// assert_eq!(kata_loops::to_radix_string(365, 3), "111112");
/// ```
///
/// # Panics
///
/// Panics if `radix` is outside `2..=10`.
#[must_use]
pub fn to_radix_string(num: u64, radix: u32) -> String {
    assert!(
        (2..=10).contains(&radix),
        "radix must be between 2 and 10, got {radix}"
    );

    let base = u64::from(radix);
    let mut digits = Vec::new();
    let mut val = num;

    loop {
        digits.extend(
            u32::try_from(val % base)
                .ok()
                .and_then(|d| char::from_digit(d, radix)),
        );
        val /= base;
        if val == 0 {
            break;
        }
    }

    digits.iter().rev().collect()
}
