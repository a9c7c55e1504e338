//! Synthetic medication lists drawn from a fixed formulary

use super::ids::IdGenerator;
use super::random_datetime;
use chrono::{DateTime, Utc};
use mindtrack_shared::models::Medication;
use rand::Rng;

/// (name, dosage, schedule, reminders enabled)
const FORMULARY: &[(&str, &str, &str, bool)] = &[
    ("Sertraline", "50mg", "Morning", true),
    ("Methylphenidate ER", "20mg", "Morning", true),
    ("Clonazepam", "0.5mg", "Night", false),
    ("Venlafaxine", "75mg", "Morning", true),
    ("Escitalopram", "10mg", "Morning", true),
    ("Quetiapine", "25mg", "Night", false),
];

/// Rotate through the formulary per patient index: two or three entries,
/// offset by the index so neighbouring patients get different regimens.
pub fn medications(
    ids: &mut dyn IdGenerator,
    rng: &mut impl Rng,
    patient_id: &str,
    patient_index: usize,
    range: (DateTime<Utc>, DateTime<Utc>),
) -> Vec<Medication> {
    let count = 2 + patient_index % 2;
    (0..count)
        .map(|offset| {
            let (name, dosage, schedule, reminders_enabled) =
                FORMULARY[(patient_index + offset) % FORMULARY.len()];
            Medication {
                id: ids.next_id("med"),
                patient_id: patient_id.to_string(),
                name: name.to_string(),
                dosage: dosage.to_string(),
                schedule: schedule.to_string(),
                reminders_enabled,
                added_at: random_datetime(rng, range.0, range.1),
            }
        })
        .collect()
}
