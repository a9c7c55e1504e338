//! Synthetic mood check-ins

use super::ids::IdGenerator;
use super::random_datetime;
use chrono::{DateTime, Utc};
use mindtrack_shared::models::MoodCheckin;
use rand::Rng;

/// Fixed mood vocabulary
pub const MOODS: &[&str] = &["Happy", "Calm", "Anxious", "Sad", "Irritable", "Stressed"];

/// Fixed symptom vocabulary
pub const SYMPTOMS: &[&str] = &[
    "Headache",
    "Fatigue",
    "Insomnia",
    "Loss of appetite",
    "Nausea",
    "Dizziness",
];

const NOTE_PROBABILITY: f64 = 0.3;

/// Generate `count` check-ins with uniform random timestamps in the range,
/// sorted descending by timestamp. Never fails; `count == 0` yields an empty
/// sequence.
pub fn mood_checkins(
    ids: &mut dyn IdGenerator,
    rng: &mut impl Rng,
    count: usize,
    range: (DateTime<Utc>, DateTime<Utc>),
) -> Vec<MoodCheckin> {
    let mut checkins: Vec<MoodCheckin> = (0..count)
        .map(|i| {
            let symptom_count = rng.gen_range(0..=3);
            // Draws are independent, so a symptom may repeat within a check-in
            let symptoms = (0..symptom_count)
                .map(|_| SYMPTOMS[rng.gen_range(0..SYMPTOMS.len())].to_string())
                .collect();
            MoodCheckin {
                id: ids.next_id("mc"),
                timestamp: random_datetime(rng, range.0, range.1),
                mood: MOODS[rng.gen_range(0..MOODS.len())].to_string(),
                symptoms,
                notes: rng
                    .gen_bool(NOTE_PROBABILITY)
                    .then(|| format!("Follow-up observation for check-in {}", i + 1)),
            }
        })
        .collect();

    checkins.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    checkins
}
