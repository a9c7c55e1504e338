//! Simulated real-time biometric stream
//!
//! A periodic task applies one bounded random-walk step per metric and
//! publishes the result on a watch channel. The task is owned by an explicit
//! handle; dropping or stopping the handle cancels it, so view teardown
//! cannot leak updates.

use mindtrack_shared::models::WearableReading;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

pub const HR_RANGE: (f64, f64) = (50.0, 120.0);
pub const HRV_RANGE: (f64, f64) = (25.0, 130.0);
pub const EDA_RANGE: (f64, f64) = (0.1, 2.5);

// Defaults when the patient has no wearable history
const DEFAULT_HR: f64 = 75.0;
const DEFAULT_HRV: f64 = 60.0;
const DEFAULT_EDA: f64 = 0.8;

/// Snapshot of the simulated live metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LiveMetrics {
    pub heart_rate_bpm: f64,
    pub hrv_ms: f64,
    pub eda_microsiemens: f64,
}

impl LiveMetrics {
    /// Seed the stream from the patient's most recent wearable reading.
    pub fn seed_from(reading: Option<&WearableReading>) -> Self {
        Self {
            heart_rate_bpm: reading
                .and_then(|r| r.heart_rate_bpm)
                .unwrap_or(DEFAULT_HR),
            hrv_ms: reading.and_then(|r| r.hrv_ms).unwrap_or(DEFAULT_HRV),
            eda_microsiemens: reading
                .and_then(|r| r.eda_microsiemens)
                .unwrap_or(DEFAULT_EDA),
        }
    }
}

/// One bounded random-walk step; each metric is clamped independently.
pub fn step(current: &LiveMetrics, rng: &mut impl Rng) -> LiveMetrics {
    LiveMetrics {
        heart_rate_bpm: (current.heart_rate_bpm + (rng.gen::<f64>() - 0.5) * 4.0)
            .clamp(HR_RANGE.0, HR_RANGE.1)
            .round(),
        hrv_ms: (current.hrv_ms + (rng.gen::<f64>() - 0.5) * 6.0)
            .clamp(HRV_RANGE.0, HRV_RANGE.1)
            .round(),
        eda_microsiemens: round1(
            (current.eda_microsiemens + (rng.gen::<f64>() - 0.5) * 0.2)
                .clamp(EDA_RANGE.0, EDA_RANGE.1),
        ),
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Handle to a running simulation; dropping it cancels the task
pub struct LiveMetricsHandle {
    rx: watch::Receiver<LiveMetrics>,
    task: JoinHandle<()>,
}

impl LiveMetricsHandle {
    pub fn subscribe(&self) -> watch::Receiver<LiveMetrics> {
        self.rx.clone()
    }

    pub fn latest(&self) -> LiveMetrics {
        *self.rx.borrow()
    }

    pub fn stop(&self) {
        self.task.abort();
    }

    pub fn is_stopped(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for LiveMetricsHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawner for the periodic simulation task
pub struct LiveMetricsSimulator;

impl LiveMetricsSimulator {
    /// Start a simulation that publishes one step per `tick`.
    pub fn spawn(initial: LiveMetrics, tick: Duration) -> LiveMetricsHandle {
        let (tx, rx) = watch::channel(initial);
        let task = tokio::spawn(async move {
            let mut rng = StdRng::from_entropy();
            let mut current = initial;
            let mut interval = tokio::time::interval(tick);
            // The first tick completes immediately; the initial value is
            // already in the channel
            interval.tick().await;
            loop {
                interval.tick().await;
                current = step(&current, &mut rng);
                if tx.send(current).is_err() {
                    break;
                }
            }
        });
        LiveMetricsHandle { rx, task }
    }
}
