//! Property-based tests using proptest.
//!
//! These tests verify invariants of the encoder and the least-squares fit.

use carecost::data::{HistoricalRecord, QueryRecord, REGION_LEVELS, SEX_LEVELS, SMOKER_LEVELS};
use carecost::prelude::*;
use carecost::preprocessing::N_FEATURES;
use proptest::prelude::*;

fn level(levels: &'static [&'static str]) -> impl Strategy<Value = String> {
    proptest::sample::select(levels).prop_map(str::to_string)
}

// Strategy for generating queries within the form's ranges
fn query_strategy() -> impl Strategy<Value = QueryRecord> {
    (
        18u32..=80,
        15.0f64..=50.0,
        0u32..=5,
        level(&SEX_LEVELS),
        level(&SMOKER_LEVELS),
        level(&REGION_LEVELS),
    )
        .prop_map(|(age, bmi, children, sex, smoker, region)| {
            QueryRecord::new(age, bmi, children, sex, smoker, region)
        })
}

/// Twenty records that cover every level, with charges perturbed by `noise`.
fn training_records(noise: &[f64]) -> Vec<HistoricalRecord> {
    (0..noise.len())
        .map(|i| {
            let n = i as u32;
            let age = 18 + (n * 11) % 60;
            let bmi = 17.5 + f64::from((n * 7) % 30);
            let children = (n * 5 + 1) % 6;
            let smoker = SMOKER_LEVELS[(i / 3) % 2];
            HistoricalRecord {
                age,
                sex: SEX_LEVELS[i % 2].to_string(),
                bmi,
                children,
                smoker: smoker.to_string(),
                region: REGION_LEVELS[(i / 2) % 4].to_string(),
                charges: 260.0 * f64::from(age) + 330.0 * bmi + if smoker == "yes" { 24_000.0 } else { 0.0 }
                    + noise[i],
            }
        })
        .collect()
}

fn fitted_encoder() -> FeatureEncoder {
    let mut encoder = FeatureEncoder::new();
    encoder
        .fit_transform(&training_records(&[0.0; 20]))
        .expect("training records should encode");
    encoder
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn encoded_vector_has_fixed_layout(query in query_strategy()) {
        let features = fitted_encoder().transform_one(&query).expect("valid query");
        prop_assert_eq!(features.len(), N_FEATURES);
        prop_assert_eq!(features[0], f64::from(query.age));
        prop_assert_eq!(features[1], query.bmi);
        prop_assert_eq!(features[2], f64::from(query.children));
        prop_assert_eq!(features[3], if query.sex == "male" { 1.0 } else { 0.0 });
        prop_assert_eq!(features[4], if query.smoker == "yes" { 1.0 } else { 0.0 });
    }

    #[test]
    fn encoding_is_deterministic(query in query_strategy()) {
        let encoder = fitted_encoder();
        let first = encoder.transform_one(&query).expect("valid query");
        let second = encoder.transform_one(&query).expect("valid query");
        let first_bits: Vec<u64> = first.iter().map(|v| v.to_bits()).collect();
        let second_bits: Vec<u64> = second.iter().map(|v| v.to_bits()).collect();
        prop_assert_eq!(first_bits, second_bits);
    }

    #[test]
    fn region_bits_are_reference_or_one_hot(query in query_strategy()) {
        let features = fitted_encoder().transform_one(&query).expect("valid query");
        let region_bits = &features[5..8];
        let ones = region_bits.iter().filter(|&&b| b == 1.0).count();
        prop_assert!(region_bits.iter().all(|&b| b == 0.0 || b == 1.0));

        if query.region == "northeast" {
            prop_assert_eq!(ones, 0);
        } else {
            prop_assert_eq!(ones, 1);
        }
    }

    #[test]
    fn high_risk_flag_tracks_smoker(query in query_strategy()) {
        let estimator = PremiumEstimator::fit(&training_records(&[0.0; 20])).expect("fit");
        let estimate = estimator.estimate(&query).expect("valid query");
        prop_assert_eq!(estimate.high_risk, query.smoker == "yes");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(30))]

    #[test]
    fn training_predictions_are_finite(noise in proptest::collection::vec(-500.0f64..500.0, 20)) {
        let records = training_records(&noise);
        let estimator = PremiumEstimator::fit(&records).expect("fit");

        for record in &records {
            let estimate = estimator.estimate(&record.to_query()).expect("training row");
            prop_assert!(estimate.charges.is_finite());
        }
    }

    #[test]
    fn predict_is_pure(
        noise in proptest::collection::vec(-500.0f64..500.0, 20),
        query in query_strategy(),
    ) {
        let estimator = PremiumEstimator::fit(&training_records(&noise)).expect("fit");
        let first = estimator.estimate(&query).expect("valid query");
        let second = estimator.estimate(&query).expect("valid query");
        prop_assert_eq!(first.charges.to_bits(), second.charges.to_bits());
    }

    #[test]
    fn residuals_are_orthogonal_to_features(noise in proptest::collection::vec(-500.0f64..500.0, 20)) {
        let records = training_records(&noise);
        let mut encoder = FeatureEncoder::new();
        let (x, y) = encoder.fit_transform(&records).expect("encode");
        let model = CostEstimator::solve(&x, &y).expect("fit");

        let residuals: Vec<f64> = (0..x.n_rows())
            .map(|i| y[i] - model.predict(x.row(i)).expect("predict"))
            .collect();

        // Least-squares normal equations: residuals sum to zero and are
        // orthogonal to every column
        let scale = y.as_slice().iter().map(|v| v.abs()).fold(0.0, f64::max);
        prop_assert!(residuals.iter().sum::<f64>().abs() < 1e-6 * scale);
        for j in 0..N_FEATURES {
            let dot: f64 = (0..x.n_rows()).map(|i| x.get(i, j) * residuals[i]).sum();
            prop_assert!(dot.abs() < 1e-5 * scale * 100.0, "column {} dot {}", j, dot);
        }
    }
}
