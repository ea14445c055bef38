//! Least-squares trend over session hours
//!
//! Points are `(index, hours)` with `index` the 0-based position in the
//! session list, so insertion order matters and the `date` label does not.

use serde::Serialize;

use crate::core::types::SessionRecord;

/// Slope and intercept of the fitted line `hours = slope * index + intercept`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub(crate) struct Trend {
    pub(crate) slope: f64,
    pub(crate) intercept: f64,
}

impl Trend {
    pub(crate) fn at(&self, index: f64) -> f64 {
        self.slope * index + self.intercept
    }
}

/// Closed-form ordinary least-squares fit. `None` for fewer than two records.
pub(crate) fn fit_trend(records: &[SessionRecord]) -> Option<Trend> {
    if records.len() < 2 {
        return None;
    }
    let n = records.len() as f64;

    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;
    for (i, record) in records.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += record.hours;
        sum_xy += x * record.hours;
        sum_x2 += x * x;
    }

    let denominator = n * sum_x2 - sum_x * sum_x;
    // Never zero for contiguous indices, kept for non-contiguous inputs.
    if denominator == 0.0 {
        return None;
    }
    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;
    if !slope.is_finite() || !intercept.is_finite() {
        return None;
    }
    Some(Trend { slope, intercept })
}

/// Projected hours for the next session, floored at 0 and rounded to 2 decimals.
pub(crate) fn predict_next(records: &[SessionRecord]) -> Option<f64> {
    let trend = fit_trend(records)?;
    let projected = trend.at(records.len() as f64);
    if !projected.is_finite() {
        return None;
    }
    if projected <= 0.0 {
        return Some(0.0);
    }
    Some(round2(projected))
}

/// Round the exact binary value to 2 decimals, ties to even.
fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::core::advisor::Advice;
    use proptest::prelude::*;

    fn records(hours: &[f64]) -> Vec<SessionRecord> {
        hours
            .iter()
            .enumerate()
            .map(|(i, h)| SessionRecord::new(format!("2024-01-{:02}", i + 1), *h).unwrap())
            .collect()
    }

    #[test]
    fn no_prediction_for_empty() {
        assert_eq!(predict_next(&[]), None);
        assert_eq!(fit_trend(&[]), None);
    }

    #[test]
    fn no_prediction_for_single_record() {
        assert_eq!(predict_next(&records(&[1.5])), None);
    }

    #[test]
    fn increasing_pair_extrapolates() {
        let data = records(&[2.0, 4.0]);
        let trend = fit_trend(&data).unwrap();
        assert_eq!(trend.slope, 2.0);
        assert_eq!(trend.intercept, 2.0);
        assert_eq!(predict_next(&data), Some(6.0));
    }

    #[test]
    fn constant_pair_projects_same_value() {
        let data = records(&[5.0, 5.0]);
        let trend = fit_trend(&data).unwrap();
        assert_eq!(trend.slope, 0.0);
        assert_eq!(predict_next(&data), Some(5.0));
    }

    #[test]
    fn decreasing_pair_floors_at_zero() {
        let data = records(&[3.0, 1.0]);
        let trend = fit_trend(&data).unwrap();
        assert_eq!(trend.slope, -2.0);
        assert_eq!(trend.intercept, 3.0);
        assert_eq!(predict_next(&data), Some(0.0));
    }

    #[test]
    fn rounds_to_two_decimals() {
        let data = records(&[1.0, 1.1, 1.25]);
        let predicted = predict_next(&data).unwrap();
        assert_eq!(predicted, (predicted * 100.0).round() / 100.0);
        // m = 0.125, c = 0.9916..., m*3 + c = 1.3666...
        assert_eq!(predicted, 1.37);
    }

    #[test]
    fn round2_uses_exact_binary_value() {
        // 0.995 is stored just below the decimal midpoint
        assert_eq!(round2(0.995), 0.99);
        assert_eq!(round2(2.995 - 1e-12), 2.99);
        assert_eq!(round2(4.995 - 1e-12), 4.99);
    }

    #[test]
    fn round2_ties_go_to_even() {
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(2.625), 2.62);
    }

    #[test]
    fn projection_just_under_one_stays_start_small() {
        // m = 0.495, c = 0.005, projection 2m + c lands just below 0.995
        let predicted = predict_next(&records(&[0.005, 0.5]));
        assert_eq!(predicted, Some(0.99));
        assert_eq!(Advice::for_prediction(predicted), Advice::StartSmall);
    }

    #[test]
    fn tied_projection_rounds_to_even() {
        // m = -0.375, c = 0.875, projection exactly 0.125
        let predicted = predict_next(&records(&[0.875, 0.5]));
        assert_eq!(predicted, Some(0.12));
        assert_eq!(Advice::for_prediction(predicted), Advice::StartSmall);
    }

    #[test]
    fn values_under_boundaries_keep_lower_category() {
        assert_eq!(Advice::for_prediction(Some(round2(0.995))), Advice::StartSmall);
        assert_eq!(
            Advice::for_prediction(Some(round2(2.995 - 1e-12))),
            Advice::GoodStart
        );
        assert_eq!(
            Advice::for_prediction(Some(round2(4.995 - 1e-12))),
            Advice::GreatJob
        );
    }

    #[test]
    fn overflowing_hours_give_no_prediction() {
        let data = records(&[1e308, 1e308, 1e308]);
        assert_eq!(fit_trend(&data), None);
        assert_eq!(predict_next(&data), None);
        assert_eq!(Advice::for_prediction(predict_next(&data)), Advice::NotEnoughData);
    }

    #[test]
    fn overflowing_projection_gives_no_prediction() {
        let data = records(&[0.0, 1e308]);
        assert_eq!(predict_next(&data), None);
    }

    #[test]
    fn ignores_date_labels() {
        let mut data = records(&[1.0, 2.0, 3.0]);
        data[0].date = "2030-12-31".to_string();
        data[2].date = "yesterday".to_string();
        assert_eq!(predict_next(&data), Some(4.0));
    }

    #[test]
    fn noisy_series_uses_least_squares() {
        // x = 0..4, y = [1, 3, 2, 5]: m = 1.1, c = 1.1, projection 5.5
        let data = records(&[1.0, 3.0, 2.0, 5.0]);
        let trend = fit_trend(&data).unwrap();
        assert!((trend.slope - 1.1).abs() < 1e-9);
        assert!((trend.intercept - 1.1).abs() < 1e-9);
        assert_eq!(predict_next(&data), Some(5.5));
    }

    proptest! {
        #[test]
        fn prediction_is_never_negative(hours in prop::collection::vec(0.0f64..24.0, 0..40)) {
            if let Some(p) = predict_next(&records(&hours)) {
                prop_assert!(p >= 0.0);
            }
        }

        #[test]
        fn short_series_has_no_prediction(hours in prop::collection::vec(0.0f64..24.0, 0..2)) {
            prop_assert_eq!(predict_next(&records(&hours)), None);
        }

        #[test]
        fn exact_line_is_recovered(
            slope in -2.0f64..2.0,
            intercept in 0.0f64..10.0,
            n in 2usize..30,
        ) {
            // Only lines that stay non-negative over the observed range
            prop_assume!((0..n).all(|i| slope * i as f64 + intercept >= 0.0));
            let hours: Vec<f64> = (0..n).map(|i| slope * i as f64 + intercept).collect();
            let expected = (slope * n as f64 + intercept).max(0.0);
            let predicted = predict_next(&records(&hours)).unwrap();
            prop_assert!((predicted - expected).abs() <= 0.005 + 1e-9);
        }
    }
}
