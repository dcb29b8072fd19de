//! Matrix multiplication.
//!
//! [Matrix multiplication](https://en.wikipedia.org/wiki/Matrix_multiplication)

use std::ops::{Add, Mul};

use kata_common::warning::warn_once;

/// The product `m1 × m2` of two row-major matrices.
///
/// With well-formed input (`m1` is L×M, `m2` is M×N) the result is L×N.
/// Ragged or mismatched input is still multiplied: terms whose operands do
/// not exist are skipped, a cell with no terms at all is left out, and rows
/// that end up empty are dropped.
///
/// ```
/// use kata_loops::matrix_product;
///
/// let row = vec![vec![1, 2, 3]];
/// let column = vec![vec![4], vec![5], vec![6]];
/// assert_eq!(matrix_product(&row, &column), vec![vec![32]]);
/// ```
#[must_use]
pub fn matrix_product<T>(m1: &[Vec<T>], m2: &[Vec<T>]) -> Vec<Vec<T>>
where
    T: Copy + Add<Output = T> + Mul<Output = T>,
{
    let inner = m1.first().map_or(0, Vec::len);
    let columns = m2.first().map_or(0, Vec::len);

    if inner != m2.len() {
        warn_once(
            "Matrix",
            &format!(
                "left operand has {inner} columns but right operand has {} rows; missing terms are skipped",
                m2.len()
            ),
        );
    }

    m1.iter()
        .map(|row| {
            (0..columns)
                .filter_map(|j| {
                    (0..inner)
                        .filter_map(|p| {
                            let lhs = row.get(p)?;
                            let rhs = m2.get(p)?.get(j)?;
                            Some(*lhs * *rhs)
                        })
                        .reduce(|acc, term| acc + term)
                })
                .collect::<Vec<T>>()
        })
        .filter(|row| !row.is_empty())
        .collect()
}
