//! Condition and loop exercises.
//!
//! Every function here is a pure transformation from its arguments to its
//! result. Nothing is shared between calls, so everything is safe to call
//! from any thread.
//!
//! # Scope
//!
//! - **Numbers** - `FizzBuzz`, factorial, range sums, digit reversal, digital
//!   root, radix conversion
//! - **Strings** - first unique character, interval notation, reversal,
//!   bracket balancing, Luhn checksum
//! - **Geometry** - triangle validity, rectangle overlap, point in circle
//! - **Paths** - common directory prefix
//! - **Matrix** - matrix product
//! - **Tic-tac-toe** - winner of an N×N position

/// Triangle, rectangle and circle predicates.
pub mod geometry;
/// Matrix multiplication.
pub mod matrix;
/// Integer exercises.
pub mod numbers;
/// Common directory of a set of file paths.
pub mod paths;
/// String scans and formatting.
pub mod strings;
/// Tic-tac-toe position evaluation.
pub mod tictactoe;

pub use geometry::{Circle, Point, Rect, do_rectangles_overlap, is_inside_circle, is_triangle};
pub use matrix::matrix_product;
pub use numbers::{
    FizzBuzz, digital_root, factorial, fizzbuzz, reverse_integer, sum_between, to_radix_string,
};
pub use paths::common_directory_path;
pub use strings::{
    first_single_char, interval_string, is_brackets_balanced, is_luhn_valid, reverse_string,
};
pub use tictactoe::{Mark, evaluate_position};
