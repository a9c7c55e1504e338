//! Synthetic wearable series built from bounded random walks
//!
//! Each metric advances independently: new value = previous value plus a
//! small random delta, clamped to a fixed physiological range after every
//! step. One reading per day, oldest first.

use chrono::{DateTime, Duration, Utc};
use mindtrack_shared::models::{MovementSummary, SleepQuality, SleepSummary, WearableReading};
use rand::Rng;

pub const TEMP_RANGE: (f64, f64) = (35.5, 37.8);
pub const HR_RANGE: (f64, f64) = (55.0, 115.0);
pub const HRV_RANGE: (f64, f64) = (30.0, 110.0);
pub const EDA_RANGE: (f64, f64) = (0.2, 1.8);
pub const SLEEP_RANGE: (f64, f64) = (4.0, 10.0);
pub const MIN_STEPS: i64 = 500;

// Walk starting points
const START_TEMP: f64 = 36.5;
const START_HR: f64 = 75.0;
const START_HRV: f64 = 60.0;
const START_EDA: f64 = 0.8;
const START_STEPS: i64 = 5000;
const START_SLEEP: f64 = 7.0;

/// Generate `days` daily readings ending the day before `now`, oldest first.
///
/// Never fails; `days == 0` yields an empty series.
pub fn wearable_series(
    rng: &mut impl Rng,
    days: usize,
    now: DateTime<Utc>,
) -> Vec<WearableReading> {
    let mut temp = START_TEMP;
    let mut hr = START_HR;
    let mut hrv = START_HRV;
    let mut eda = START_EDA;
    let mut steps = START_STEPS;
    let mut sleep = START_SLEEP;

    (0..days)
        .map(|i| {
            temp = (temp + (rng.gen::<f64>() - 0.5) * 0.4).clamp(TEMP_RANGE.0, TEMP_RANGE.1);
            hr = (hr + rng.gen_range(-5..=5) as f64).clamp(HR_RANGE.0, HR_RANGE.1);
            hrv = (hrv + rng.gen_range(-8..=8) as f64).clamp(HRV_RANGE.0, HRV_RANGE.1);
            eda = (eda + (rng.gen::<f64>() - 0.5) * 0.3).clamp(EDA_RANGE.0, EDA_RANGE.1);
            steps = (steps + rng.gen_range(-1000..=1500)).max(MIN_STEPS);
            sleep = (sleep + (rng.gen::<f64>() - 0.5) * 1.5).clamp(SLEEP_RANGE.0, SLEEP_RANGE.1);

            let duration_hours = round1(sleep);
            WearableReading {
                timestamp: now - Duration::days((days - i) as i64),
                heart_rate_bpm: Some(hr),
                hrv_ms: Some(hrv),
                eda_microsiemens: Some(round1(eda)),
                body_temp_celsius: Some(round1(temp)),
                sleep: Some(SleepSummary {
                    quality: SleepQuality::from_duration_hours(duration_hours),
                    duration_hours,
                }),
                movement: Some(MovementSummary {
                    step_count: steps as u32,
                }),
            }
        })
        .collect()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_zero_days_yields_empty_series() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(wearable_series(&mut rng, 0, Utc::now()).is_empty());
    }

    #[test]
    fn test_series_is_oldest_first_one_per_day() {
        let mut rng = StdRng::seed_from_u64(1);
        let series = wearable_series(&mut rng, 10, Utc::now());
        assert_eq!(series.len(), 10);
        for pair in series.windows(2) {
            assert!(pair[0].timestamp < pair[1].timestamp);
            assert_eq!((pair[1].timestamp - pair[0].timestamp).num_days(), 1);
        }
    }

    #[test]
    fn test_same_seed_same_series() {
        let now = Utc::now();
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        assert_eq!(
            wearable_series(&mut a, 30, now),
            wearable_series(&mut b, 30, now)
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Every metric of every generated reading lies within its clamp
        /// range, and the quality label matches the duration thresholds
        #[test]
        fn prop_metrics_stay_within_clamp_ranges(seed in any::<u64>(), days in 1usize..60) {
            let mut rng = StdRng::seed_from_u64(seed);
            for reading in wearable_series(&mut rng, days, Utc::now()) {
                let hr = reading.heart_rate_bpm.unwrap();
                prop_assert!((HR_RANGE.0..=HR_RANGE.1).contains(&hr));

                let hrv = reading.hrv_ms.unwrap();
                prop_assert!((HRV_RANGE.0..=HRV_RANGE.1).contains(&hrv));

                let eda = reading.eda_microsiemens.unwrap();
                prop_assert!(eda >= EDA_RANGE.0 - 0.05 && eda <= EDA_RANGE.1 + 0.05);

                let temp = reading.body_temp_celsius.unwrap();
                prop_assert!(temp >= TEMP_RANGE.0 - 0.05 && temp <= TEMP_RANGE.1 + 0.05);

                let sleep = reading.sleep.unwrap();
                prop_assert!(
                    sleep.duration_hours >= SLEEP_RANGE.0 - 0.05
                        && sleep.duration_hours <= SLEEP_RANGE.1 + 0.05
                );
                let expected = SleepQuality::from_duration_hours(sleep.duration_hours);
                prop_assert_eq!(sleep.quality, expected);

                prop_assert!(reading.movement.unwrap().step_count as i64 >= MIN_STEPS);
            }
        }
    }
}
