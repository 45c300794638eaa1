use classic_algos::errors::AlgoError;
use classic_algos::matrix::*;
use classic_algos::output::format_matrix;
use classic_algos::types::OutputFormat;

#[test]
fn test_multiply_square() {
    let a = Matrix::new(vec![vec![1, 2], vec![3, 4]]).unwrap();
    let b = Matrix::new(vec![vec![5, 6], vec![7, 8]]).unwrap();
    let product = multiply(&a, &b).unwrap();
    assert_eq!(product.rows(), &[vec![19, 22], vec![43, 50]]);
}

#[test]
fn test_multiply_rectangular() {
    let a = Matrix::new(vec![vec![1, 0, 2]]).unwrap();
    let b = Matrix::new(vec![vec![1], vec![2], vec![3]]).unwrap();
    let product = multiply(&a, &b).unwrap();
    assert_eq!(product.row_count(), 1);
    assert_eq!(product.col_count(), 1);
    assert_eq!(product.get(0, 0), Some(7));
}

#[test]
fn test_multiply_identity() {
    let a = Matrix::new(vec![vec![2, -1, 0], vec![4, 3, 1], vec![0, 5, 6]]).unwrap();
    let identity = Matrix::new(vec![vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]]).unwrap();
    assert_eq!(multiply(&a, &identity).unwrap(), a);
    assert_eq!(multiply(&identity, &a).unwrap(), a);
}

#[test]
fn test_multiply_shape_mismatch() {
    let a = Matrix::new(vec![vec![1, 2]]).unwrap();
    let b = Matrix::new(vec![vec![1, 2]]).unwrap();
    let err = multiply(&a, &b).unwrap_err();
    assert!(matches!(err, AlgoError::InvalidArgument { .. }), "got {err:?}");
}

#[test]
fn test_multiply_overflowing_product_is_an_error() {
    let a = Matrix::new(vec![vec![i64::MAX]]).unwrap();
    let b = Matrix::new(vec![vec![2]]).unwrap();
    let err = multiply(&a, &b).unwrap_err();
    assert!(matches!(err, AlgoError::InvalidArgument { .. }), "got {err:?}");
}

#[test]
fn test_multiply_overflowing_sum_is_an_error() {
    // Each product fits, but their sum does not.
    let a = Matrix::new(vec![vec![i64::MAX, 1]]).unwrap();
    let b = Matrix::new(vec![vec![1], vec![1]]).unwrap();
    let err = multiply(&a, &b).unwrap_err();
    assert!(
        err.to_string().contains("overflows i64"),
        "unexpected message: {err}"
    );
}

#[test]
fn test_multiply_extreme_values_that_fit() {
    let a = Matrix::new(vec![vec![i64::MIN, i64::MAX]]).unwrap();
    let b = Matrix::new(vec![vec![1], vec![1]]).unwrap();
    assert_eq!(multiply(&a, &b).unwrap().get(0, 0), Some(-1));
}

#[test]
fn test_ragged_rows_rejected() {
    let err = Matrix::new(vec![vec![1, 2], vec![3]]).unwrap_err();
    assert!(matches!(err, AlgoError::InvalidArgument { .. }));
    assert!(serde_json::from_str::<Matrix>("[[1,2],[3]]").is_err());
}

#[test]
fn test_matrix_json_and_text_rendering() {
    let m: Matrix = serde_json::from_str("[[1,2],[3,4]]").unwrap();
    assert_eq!(format_matrix(&m, OutputFormat::Json).unwrap(), "[[1,2],[3,4]]");
    assert_eq!(format_matrix(&m, OutputFormat::Text).unwrap(), "1 2\n3 4");
}
