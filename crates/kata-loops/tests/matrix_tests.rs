//! Tests for matrix multiplication.

use kata_common::warning::was_warned;
use kata_loops::matrix_product;

#[test]
fn test_identity_product() {
    let identity = vec![vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]];
    let m = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
    assert_eq!(matrix_product(&identity, &m), m);
}

#[test]
fn test_row_times_column() {
    let row = vec![vec![1, 2, 3]];
    let column = vec![vec![4], vec![5], vec![6]];
    assert_eq!(matrix_product(&row, &column), vec![vec![32]]);
}

#[test]
fn test_column_times_row() {
    let column = vec![vec![1], vec![2]];
    let row = vec![vec![3, 4]];
    assert_eq!(matrix_product(&column, &row), vec![vec![3, 4], vec![6, 8]]);
}

#[test]
fn test_rectangular_product() {
    let a = vec![vec![1, 2], vec![3, 4], vec![5, 6]];
    let b = vec![vec![7, 8, 9], vec![10, 11, 12]];
    assert_eq!(
        matrix_product(&a, &b),
        vec![vec![27, 30, 33], vec![61, 68, 75], vec![95, 106, 117]]
    );
}

#[test]
fn test_mismatched_shapes_skip_missing_terms() {
    let a = vec![vec![1, 2, 3]];
    let b = vec![vec![4], vec![5]];
    assert_eq!(matrix_product(&a, &b), vec![vec![14]]);
    assert!(was_warned(
        "Matrix",
        "left operand has 3 columns but right operand has 2 rows; missing terms are skipped"
    ));
}

#[test]
fn test_empty_operands() {
    let empty: Vec<Vec<i64>> = Vec::new();
    assert!(matrix_product(&empty, &empty).is_empty());
    assert!(matrix_product(&[vec![1_i64]], &empty).is_empty());
}
