use super::*;
use crate::primitives::Vector;

#[test]
fn test_r2_perfect() {
    let y_true = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    let y_pred = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]);

    let r2 = r_squared(&y_pred, &y_true);
    assert!((r2 - 1.0).abs() < 1e-12, "R²={r2} for perfect predictions");
}

#[test]
fn test_r2_upper_bound() {
    let y_true = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    let y_pred = Vector::from_slice(&[1.1, 2.2, 2.8, 4.1, 4.9]);

    let r2 = r_squared(&y_pred, &y_true);
    assert!(r2 <= 1.0, "R²={r2} > 1.0");
}

#[test]
fn test_r2_negative_for_bad_predictions() {
    let y_true = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    let y_pred = Vector::from_slice(&[10.0, 20.0, 30.0, 40.0, 50.0]);

    let r2 = r_squared(&y_pred, &y_true);
    assert!(r2 < 0.0, "R²={r2} >= 0 for terrible predictions");
}

#[test]
fn test_r2_constant_target_is_zero() {
    let y_true = Vector::from_slice(&[2.0, 2.0, 2.0]);
    let y_pred = Vector::from_slice(&[1.0, 2.0, 3.0]);
    assert_eq!(r_squared(&y_pred, &y_true), 0.0);
}

#[test]
fn test_mse_and_rmse() {
    let y_true = Vector::from_slice(&[3.0, -0.5, 2.0, 7.0]);
    let y_pred = Vector::from_slice(&[2.5, 0.0, 2.0, 8.0]);

    assert!((mse(&y_pred, &y_true) - 0.375).abs() < 1e-12);
    assert!((rmse(&y_pred, &y_true) - 0.375_f64.sqrt()).abs() < 1e-12);
}

#[test]
#[should_panic(expected = "Vectors cannot be empty")]
fn test_mae_empty_panics() {
    let empty = Vector::<f64>::from_vec(vec![]);
    let _ = mae(&empty, &empty);
}

mod regression_proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn prop_r2_perfect(
            n in 3..=20usize,
            seed in 0..500u32,
        ) {
            let data: Vec<f64> = (0..n)
                .map(|i| ((i as f64 + f64::from(seed)) * 0.37).sin() * 10.0 + 5.0)
                .collect();
            let y = Vector::from_vec(data);
            let r2 = r_squared(&y, &y);
            prop_assert!((r2 - 1.0).abs() < 1e-12, "R²={} for perfect predictions", r2);
        }

        #[test]
        fn prop_mae_bounded_by_rmse(
            n in 3..=20usize,
            seed in 0..500u32,
        ) {
            let y_true: Vec<f64> = (0..n)
                .map(|i| ((i as f64 + f64::from(seed)) * 0.37).sin() * 10.0 + 5.0)
                .collect();
            let y_pred: Vec<f64> = (0..n)
                .map(|i| ((i as f64 + f64::from(seed) + 1.0) * 0.37).sin() * 10.0 + 5.0)
                .collect();
            let yt = Vector::from_vec(y_true);
            let yp = Vector::from_vec(y_pred);
            prop_assert!(mae(&yp, &yt) <= rmse(&yp, &yt) + 1e-12);
        }
    }
}
