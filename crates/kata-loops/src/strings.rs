//! String scans and formatting.

use std::collections::HashMap;

/// Opening bracket for each closing bracket.
const PAIRS: [(char, char); 4] = [('(', ')'), ('[', ']'), ('{', '}'), ('<', '>')];

/// The first character that occurs exactly once, in input order.
///
/// `"abracadabra"` → `Some('c')`, `"entente"` → `None`. Case-sensitive.
#[must_use]
pub fn first_single_char(text: &str) -> Option<char> {
    let mut counts: HashMap<char, usize> = HashMap::new();
    for c in text.chars() {
        *counts.entry(c).or_default() += 1;
    }

    text.chars().find(|c| counts.get(c) == Some(&1))
}

/// Mathematical interval notation, smaller bound first.
///
/// `(5, 3, true, false)` → `"[3, 5)"`. The inclusion flags belong to the
/// rendered start and end, not to `a` and `b`.
#[must_use]
pub fn interval_string(a: f64, b: f64, start_included: bool, end_included: bool) -> String {
    let open = if start_included { '[' } else { '(' };
    let close = if end_included { ']' } else { ')' };
    format!("{open}{}, {}{close}", a.min(b), a.max(b))
}

/// Reverse the characters of a string.
#[must_use]
pub fn reverse_string(text: &str) -> String {
    text.chars().rev().collect()
}

/// Whether every bracket in `text` is closed by its own kind, innermost first.
///
/// Recognized pairs are `()`, `[]`, `{}` and `<>`. The empty string is
/// balanced; any other character makes the input unbalanced.
#[must_use]
pub fn is_brackets_balanced(text: &str) -> bool {
    let mut stack = Vec::new();

    for c in text.chars() {
        if PAIRS.iter().any(|&(open, _)| open == c) {
            stack.push(c);
            continue;
        }

        let Some(&(open, _)) = PAIRS.iter().find(|&&(_, close)| close == c) else {
            return false;
        };

        if stack.pop() != Some(open) {
            return false;
        }
    }

    stack.is_empty()
}

/// [Luhn algorithm](https://en.wikipedia.org/wiki/Luhn_algorithm) check for
/// a string of decimal digits, such as a credit card number.
///
/// Starting from the rightmost digit, every second digit is doubled and 9 is
/// subtracted from doubles above 9; the number is valid when the total is a
/// multiple of 10. Strings that are empty or contain anything other than
/// ASCII digits are rejected.
#[must_use]
pub fn is_luhn_valid(number: &str) -> bool {
    if number.is_empty() {
        return false;
    }

    let digits: Option<Vec<u32>> = number.chars().map(|c| c.to_digit(10)).collect();
    let Some(digits) = digits else {
        return false;
    };

    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 0 {
                d
            } else if d * 2 > 9 {
                d * 2 - 9
            } else {
                d * 2
            }
        })
        .sum();

    sum % 10 == 0
}
