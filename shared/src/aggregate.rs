//! Chart-ready aggregations over patient collections
//!
//! All functions here are deterministic and side-effect-free. Malformed or
//! missing fields degrade to the Other/Unknown buckets rather than failing.

use crate::models::{PatientSummary, WearableReading};
use serde::{Deserialize, Serialize};

/// Default number of readings projected into a wearable chart
pub const DEFAULT_CHART_POINTS: usize = 15;

/// One labeled slice of a distribution chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DistributionSlice {
    pub label: String,
    pub count: usize,
    pub color: String,
}

const MOOD_COLORS: &[(&str, &str)] = &[
    ("Happy", "#22c55e"),
    ("Calm", "#38bdf8"),
    ("Anxious", "#f59e0b"),
    ("Sad", "#6366f1"),
    ("Irritable", "#f97316"),
    ("Stressed", "#ef4444"),
];

const OTHER_MOOD_LABEL: &str = "Other";
const OTHER_COLOR: &str = "#94a3b8";

/// Display color for a mood label; unknown labels fall back to the Other
/// color.
pub fn mood_color(label: &str) -> &'static str {
    MOOD_COLORS
        .iter()
        .find(|(mood, _)| *mood == label)
        .map(|(_, color)| *color)
        .unwrap_or(OTHER_COLOR)
}

/// Group-count patients by last reported mood.
///
/// Patients with no reported mood land in a distinct "Other" bucket. Slice
/// order follows first appearance in the collection.
pub fn mood_distribution(patients: &[PatientSummary]) -> Vec<DistributionSlice> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for patient in patients {
        let label = patient.last_mood.as_deref().unwrap_or(OTHER_MOOD_LABEL);
        match counts.iter_mut().find(|(existing, _)| existing == label) {
            Some((_, count)) => *count += 1,
            None => counts.push((label.to_string(), 1)),
        }
    }

    counts
        .into_iter()
        .map(|(label, count)| DistributionSlice {
            color: mood_color(&label).to_string(),
            label,
            count,
        })
        .collect()
}

/// Medication-adherence bucket
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AdherenceBucket {
    Low,
    Medium,
    High,
    Unknown,
}

impl AdherenceBucket {
    pub const ALL: [AdherenceBucket; 4] = [
        AdherenceBucket::Low,
        AdherenceBucket::Medium,
        AdherenceBucket::High,
        AdherenceBucket::Unknown,
    ];

    /// Bucket thresholds: <70 Low, 70-89 Medium, >=90 High, missing Unknown
    pub fn classify(adherence: Option<u8>) -> Self {
        match adherence {
            None => AdherenceBucket::Unknown,
            Some(value) if value < 70 => AdherenceBucket::Low,
            Some(value) if value < 90 => AdherenceBucket::Medium,
            Some(_) => AdherenceBucket::High,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdherenceBucket::Low => "Low (<70%)",
            AdherenceBucket::Medium => "Medium (70-89%)",
            AdherenceBucket::High => "High (>=90%)",
            AdherenceBucket::Unknown => "Unknown",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            AdherenceBucket::Low => "#ef4444",
            AdherenceBucket::Medium => "#f59e0b",
            AdherenceBucket::High => "#22c55e",
            AdherenceBucket::Unknown => OTHER_COLOR,
        }
    }
}

/// Count patients per adherence bucket, in fixed bucket order.
pub fn adherence_distribution(patients: &[PatientSummary]) -> Vec<DistributionSlice> {
    AdherenceBucket::ALL
        .iter()
        .map(|bucket| DistributionSlice {
            label: bucket.label().to_string(),
            count: patients
                .iter()
                .filter(|p| AdherenceBucket::classify(p.medication_adherence) == *bucket)
                .count(),
            color: bucket.color().to_string(),
        })
        .collect()
}

/// One flat chart row projected from a wearable reading
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WearableChartPoint {
    /// Day label formatted as dd/mm
    pub day: String,
    pub heart_rate: Option<f64>,
    pub hrv: Option<f64>,
    pub eda: Option<f64>,
    pub temperature: Option<f64>,
    pub sleep_hours: Option<f64>,
    pub steps: Option<u32>,
}

/// Project the most recent `points` readings into flat chart rows.
///
/// Missing metrics stay `None`; they are never coerced to zero.
pub fn wearable_chart_series(
    readings: &[WearableReading],
    points: usize,
) -> Vec<WearableChartPoint> {
    let start = readings.len().saturating_sub(points);
    readings[start..]
        .iter()
        .map(|reading| WearableChartPoint {
            day: reading.timestamp.format("%d/%m").to_string(),
            heart_rate: reading.heart_rate_bpm,
            hrv: reading.hrv_ms,
            eda: reading.eda_microsiemens,
            temperature: reading.body_temp_celsius,
            sleep_hours: reading.sleep.as_ref().map(|s| s.duration_hours),
            steps: reading.movement.as_ref().map(|m| m.step_count),
        })
        .collect()
}
