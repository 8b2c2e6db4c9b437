pub(crate) use super::*;

#[test]
fn test_from_vec() {
    let m = Matrix::from_vec(2, 3, vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    assert_eq!(m.shape(), (2, 3));
    assert!((m.get(0, 0) - 1.0).abs() < 1e-12);
    assert!((m.get(1, 2) - 6.0).abs() < 1e-12);
}

#[test]
fn test_from_vec_error() {
    let result = Matrix::from_vec(2, 3, vec![1.0_f64, 2.0, 3.0]);
    assert!(matches!(
        result,
        Err(CareCostError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_from_rows_rejects_ragged() {
    let rows = vec![vec![1.0_f64, 2.0], vec![3.0]];
    assert!(Matrix::from_rows(&rows, 2).is_err());
}

#[test]
fn test_from_rows() {
    let rows = vec![vec![1.0_f64, 2.0], vec![3.0, 4.0]];
    let m = Matrix::from_rows(&rows, 2).expect("rows are equally sized");
    assert_eq!(m.row(1), &[3.0, 4.0]);
}

#[test]
fn test_transpose() {
    let m = Matrix::from_vec(2, 3, vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let t = m.transpose();
    assert_eq!(t.shape(), (3, 2));
    assert!((t.get(0, 1) - 4.0).abs() < 1e-12);
    assert!((t.get(2, 0) - 3.0).abs() < 1e-12);
}

#[test]
fn test_matmul_identity() {
    let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("2x2 data");
    let identity = Matrix::from_vec(2, 2, vec![1.0, 0.0, 0.0, 1.0]).expect("2x2 data");
    let product = m.matmul(&identity).expect("square dimensions agree");
    assert_eq!(product, m);
}

#[test]
fn test_matmul_dimension_error() {
    let a = Matrix::from_vec(2, 3, vec![0.0; 6]).expect("2x3 data");
    let b = Matrix::from_vec(2, 3, vec![0.0; 6]).expect("2x3 data");
    assert!(a.matmul(&b).is_err());
}

#[test]
fn test_matvec() {
    let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("2x2 data");
    let v = Vector::from_slice(&[1.0, 1.0]);
    let result = m.matvec(&v).expect("dimensions agree");
    assert_eq!(result.as_slice(), &[3.0, 7.0]);
}

#[test]
fn test_column_means() {
    let m = Matrix::from_vec(2, 2, vec![1.0, 10.0, 3.0, 30.0]).expect("2x2 data");
    assert_eq!(m.column_means(), vec![2.0, 20.0]);
}

#[test]
fn test_cholesky_solve() {
    // A = [[4, 2], [2, 3]], b = [2, 1] -> x = [0.5, 0.0]
    let a = Matrix::from_vec(2, 2, vec![4.0, 2.0, 2.0, 3.0]).expect("2x2 data");
    let b = Vector::from_slice(&[2.0, 1.0]);
    let x = a.cholesky_solve(&b).expect("matrix is positive definite");
    assert!((x[0] - 0.5).abs() < 1e-12);
    assert!(x[1].abs() < 1e-12);
}

#[test]
fn test_cholesky_rejects_dependent_columns() {
    // Second column is twice the first: rank 1
    let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 2.0, 4.0]).expect("2x2 data");
    let b = Vector::from_slice(&[1.0, 2.0]);
    let err = a.cholesky_solve(&b).expect_err("rank-deficient matrix");
    assert!(matches!(err, CareCostError::SingularMatrix { .. }));
}

#[test]
fn test_cholesky_rejects_zero_diagonal() {
    let a = Matrix::from_vec(2, 2, vec![1.0, 0.0, 0.0, 0.0]).expect("2x2 data");
    let b = Vector::from_slice(&[1.0, 0.0]);
    assert!(matches!(
        a.cholesky_solve(&b),
        Err(CareCostError::SingularMatrix { .. })
    ));
}

#[test]
fn test_cholesky_non_square() {
    let a = Matrix::from_vec(2, 3, vec![0.0; 6]).expect("2x3 data");
    let b = Vector::from_slice(&[1.0, 2.0]);
    assert!(matches!(
        a.cholesky_solve(&b),
        Err(CareCostError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_cholesky_pivot_test_ignores_scale() {
    // Rank-1 Gram matrix of charges-sized columns is still rejected
    let big = Matrix::from_vec(2, 2, vec![1e8, 2e8, 2e8, 4e8]).expect("2x2 data");
    let b = Vector::from_slice(&[1.0, 2.0]);
    assert!(matches!(
        big.cholesky_solve(&b),
        Err(CareCostError::SingularMatrix { .. })
    ));

    // A well-conditioned matrix of tiny entries is accepted
    let tiny = Matrix::from_vec(2, 2, vec![4e-12, 2e-12, 2e-12, 3e-12]).expect("2x2 data");
    let x = tiny
        .cholesky_solve(&Vector::from_slice(&[2e-12, 1e-12]))
        .expect("positive definite at any scale");
    assert!((x[0] - 0.5).abs() < 1e-9);
    assert!(x[1].abs() < 1e-9);
}
