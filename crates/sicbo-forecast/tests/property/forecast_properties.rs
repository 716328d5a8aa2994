//! Property tests for the forecasting layers and fusion.

use proptest::prelude::*;
use sicbo_core::traits::IForecaster;
use sicbo_core::Outcome;
use sicbo_forecast::layers::{anomaly, frequency, pattern, streak};
use sicbo_forecast::sampler::{self, Period};
use sicbo_forecast::ForecastEngine;

fn arb_history(min: usize, max: usize) -> impl Strategy<Value = Vec<Outcome>> {
    prop::collection::vec(3u32..=18, min..max)
        .prop_map(|totals| totals.into_iter().map(|t| Outcome::new(t).unwrap()).collect())
}

proptest! {
    #[test]
    fn short_histories_are_rejected(history in arb_history(0, 10)) {
        let engine = ForecastEngine::default();
        prop_assert!(engine.forecast(&history).is_err());
    }

    #[test]
    fn confidence_stays_in_range(history in arb_history(10, 700)) {
        let engine = ForecastEngine::default();
        let prediction = engine.forecast(&history).unwrap();
        prop_assert!((50..=98).contains(&prediction.confidence.directional));
        prop_assert!(prediction.top_totals.len() <= 5);
    }

    #[test]
    fn frequency_weight_is_conserved(history in arb_history(1, 600)) {
        let windows = sampler::sample(&history);
        let stats = frequency::analyze(&windows);

        let mut expected = 0.0;
        for period in Period::ALL {
            let window = windows.get(period);
            for i in 0..window.len() {
                expected += frequency::item_weight(period.base_weight(), i, window.len());
            }
        }
        let histogram_sum: f64 = stats.histogram.values().sum();

        prop_assert!((stats.high + stats.low - expected).abs() < 1e-9);
        prop_assert!((stats.even + stats.odd - expected).abs() < 1e-9);
        prop_assert!((histogram_sum - expected).abs() < 1e-9);
    }

    #[test]
    fn at_most_one_current_run_per_axis(history in arb_history(0, 40)) {
        let s = streak::analyze(&history);
        prop_assert!(s.current.high == 0 || s.current.low == 0);
        prop_assert!(s.current.even == 0 || s.current.odd == 0);
        if !history.is_empty() {
            prop_assert!(s.current.high + s.current.low > 0);
            prop_assert!(s.current.even + s.current.odd > 0);
        }
        prop_assert!(s.max.high >= s.current.high);
        prop_assert!(s.max.low >= s.current.low);
    }

    #[test]
    fn pattern_matching_is_deterministic(history in arb_history(10, 150)) {
        let a = pattern::analyze(&history, &[3, 5], 2);
        let b = pattern::analyze(&history, &[3, 5], 2);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn constant_history_has_no_anomalies(total in 3u32..=18, len in 10usize..200) {
        let history = vec![Outcome::new(total).unwrap(); len];
        let report = anomaly::analyze(&history, 2.5);
        prop_assert_eq!(report.std_dev, 0.0);
        prop_assert_eq!(report.count, 0);
    }
}
