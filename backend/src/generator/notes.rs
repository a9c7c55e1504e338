//! Synthetic clinical notes

use super::ids::IdGenerator;
use super::random_datetime;
use chrono::{DateTime, Utc};
use mindtrack_shared::models::Note;
use rand::Rng;

const UNEDITED_PROBABILITY: f64 = 0.7;

const NOTE_CONTENT: &str = "Patient reported recent symptoms and sleep changes. \
Discussed coping strategies and current medication plan. \
Next steps include a follow-up check-in and reviewing wearable trends. \
Additional observations recorded during the session.";

/// Generate `count` notes sorted descending by creation time.
///
/// `updated_at` equals `created_at` unless the note was "edited", in which
/// case it is a later random time within the range.
pub fn clinical_notes(
    ids: &mut dyn IdGenerator,
    rng: &mut impl Rng,
    count: usize,
    range: (DateTime<Utc>, DateTime<Utc>),
) -> Vec<Note> {
    let mut notes: Vec<Note> = (0..count)
        .map(|i| {
            let created_at = random_datetime(rng, range.0, range.1);
            let updated_at = if rng.gen_bool(UNEDITED_PROBABILITY) {
                created_at
            } else {
                random_datetime(rng, created_at, range.1)
            };
            Note {
                id: ids.next_id("note"),
                created_at,
                updated_at,
                title: format!("Clinical note {}", i + 1),
                content: NOTE_CONTENT.to_string(),
            }
        })
        .collect();

    notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::ids::SequentialIds;
    use chrono::Duration;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_notes_sorted_descending_and_update_never_precedes_creation() {
        let mut ids = SequentialIds::new();
        let mut rng = StdRng::seed_from_u64(11);
        let end = Utc::now();
        let notes = clinical_notes(&mut ids, &mut rng, 12, (end - Duration::days(180), end));

        assert_eq!(notes.len(), 12);
        for pair in notes.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
        for note in &notes {
            assert!(note.updated_at >= note.created_at);
            assert!(!note.title.is_empty());
            assert!(!note.content.is_empty());
        }
    }
}
