//! Tests for the integer exercises.

use kata_loops::{
    FizzBuzz, digital_root, factorial, fizzbuzz, reverse_integer, sum_between, to_radix_string,
};

#[test]
fn test_fizzbuzz_examples() {
    assert_eq!(fizzbuzz(2), FizzBuzz::Number(2));
    assert_eq!(fizzbuzz(3), FizzBuzz::Fizz);
    assert_eq!(fizzbuzz(4), FizzBuzz::Number(4));
    assert_eq!(fizzbuzz(5), FizzBuzz::Buzz);
    assert_eq!(fizzbuzz(15), FizzBuzz::FizzBuzz);
    assert_eq!(fizzbuzz(20), FizzBuzz::Buzz);
    assert_eq!(fizzbuzz(21), FizzBuzz::Fizz);
}

#[test]
fn test_fizzbuzz_display() {
    let rendered: Vec<String> = (1..=15).map(|n| fizzbuzz(n).to_string()).collect();
    assert_eq!(rendered[0], "1");
    assert_eq!(rendered[2], "Fizz");
    assert_eq!(rendered[4], "Buzz");
    assert_eq!(rendered[14], "FizzBuzz");
}

#[test]
fn test_fizzbuzz_zero_and_negatives() {
    assert_eq!(fizzbuzz(0), FizzBuzz::FizzBuzz);
    assert_eq!(fizzbuzz(-9), FizzBuzz::Fizz);
    assert_eq!(fizzbuzz(-7), FizzBuzz::Number(-7));
}

#[test]
fn test_factorial() {
    assert_eq!(factorial(0), Some(1));
    assert_eq!(factorial(1), Some(1));
    assert_eq!(factorial(5), Some(120));
    assert_eq!(factorial(10), Some(3_628_800));
}

#[test]
fn test_factorial_overflow() {
    assert!(factorial(34).is_some());
    assert_eq!(factorial(35), None);
}

#[test]
fn test_sum_between() {
    assert_eq!(sum_between(1, 2), 3);
    assert_eq!(sum_between(5, 10), 45);
    assert_eq!(sum_between(-1, 1), 0);
    assert_eq!(sum_between(7, 7), 7);
    assert_eq!(sum_between(-10, -8), -27);
}

#[test]
fn test_sum_between_reversed_bounds() {
    assert_eq!(sum_between(10, 5), 45);
}

#[test]
fn test_sum_between_extremes() {
    assert_eq!(sum_between(i64::MIN, i64::MAX), i128::from(i64::MIN));
}

#[test]
fn test_reverse_integer() {
    assert_eq!(reverse_integer(12345), Some(54321));
    assert_eq!(reverse_integer(1111), Some(1111));
    assert_eq!(reverse_integer(87354), Some(45378));
    assert_eq!(reverse_integer(34143), Some(34143));
    assert_eq!(reverse_integer(1200), Some(21));
    assert_eq!(reverse_integer(0), Some(0));
}

#[test]
fn test_reverse_integer_overflow() {
    assert_eq!(reverse_integer(10_000_000_000_000_000_009), None);
    assert_eq!(reverse_integer(u64::MAX), None);
    assert_eq!(
        reverse_integer(1_844_674_407_370_955_161),
        Some(1_615_590_737_044_764_481)
    );
}

#[test]
fn test_digital_root() {
    assert_eq!(digital_root(12345), 6);
    assert_eq!(digital_root(23456), 2);
    assert_eq!(digital_root(10000), 1);
    assert_eq!(digital_root(165_536), 8);
    assert_eq!(digital_root(7), 7);
}

#[test]
fn test_to_radix_string() {
    assert_eq!(to_radix_string(1024, 2), "10000000000");
    assert_eq!(to_radix_string(6561, 3), "100000000");
    assert_eq!(to_radix_string(365, 2), "101101101");
    assert_eq!(to_radix_string(365, 3), "111112");
    assert_eq!(to_radix_string(365, 4), "11231");
    assert_eq!(to_radix_string(365, 10), "365");
    assert_eq!(to_radix_string(0, 7), "0");
}

#[test]
#[should_panic(expected = "radix must be between 2 and 10")]
fn test_to_radix_string_rejects_base_sixteen() {
    let _ = to_radix_string(255, 16);
}
