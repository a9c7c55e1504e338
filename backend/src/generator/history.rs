//! Treatment-history assembly
//!
//! The timeline mixes events projected from real check-ins and notes with
//! independently generated filler events of the same shape. Filler events
//! carry `synthetic: true` so they can be told apart if the system is ever
//! pointed at real data.

use super::ids::IdGenerator;
use super::random_datetime;
use chrono::{DateTime, Utc};
use mindtrack_shared::models::{EventDetails, MoodCheckin, Note, TreatmentEvent};
use rand::Rng;

const ACTIVITIES: &[&str] = &[
    "Focus timer session",
    "Breathing exercise",
    "Medication taken",
    "Quick journal entry",
    "Light walk",
];

/// Merge projected and filler events, stable-sorted descending by timestamp.
///
/// Timestamps carry no uniqueness guarantee; ties keep insertion order
/// (check-ins, then notes, then filler).
pub fn treatment_history(
    ids: &mut dyn IdGenerator,
    rng: &mut impl Rng,
    checkins: &[MoodCheckin],
    notes: &[Note],
    filler_count: usize,
    range: (DateTime<Utc>, DateTime<Utc>),
) -> Vec<TreatmentEvent> {
    let mut events: Vec<TreatmentEvent> = Vec::with_capacity(checkins.len() + notes.len() + filler_count);

    for checkin in checkins {
        events.push(TreatmentEvent {
            id: ids.next_id("evt_mc"),
            timestamp: checkin.timestamp,
            description: format!("Mood check-in: {}", checkin.mood),
            event: EventDetails::MoodCheckin(checkin.clone()),
            synthetic: false,
        });
    }

    for note in notes {
        events.push(TreatmentEvent {
            id: ids.next_id("evt_note"),
            timestamp: note.created_at,
            description: format!("Note added: {}", note.title),
            event: EventDetails::Note(note.clone()),
            synthetic: false,
        });
    }

    for _ in 0..filler_count {
        let (event, description) = filler_event(rng);
        events.push(TreatmentEvent {
            id: ids.next_id("evt_other"),
            timestamp: random_datetime(rng, range.0, range.1),
            description,
            event,
            synthetic: true,
        });
    }

    events.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    events
}

fn filler_event(rng: &mut impl Rng) -> (EventDetails, String) {
    match rng.gen_range(0..5) {
        0 => (
            EventDetails::Medication,
            "Medication recorded as taken".to_string(),
        ),
        1 => {
            let name = ACTIVITIES[rng.gen_range(0..ACTIVITIES.len())];
            (
                EventDetails::Activity {
                    name: name.to_string(),
                },
                format!("Activity completed: {}", name),
            )
        }
        2 => (
            EventDetails::Insight {
                text: "Suggested monitoring sleep patterns".to_string(),
            },
            "AI insight: suggested monitoring sleep patterns".to_string(),
        ),
        3 => (
            EventDetails::Crisis,
            "Reported a moment of crisis or elevated anxiety".to_string(),
        ),
        _ => (
            EventDetails::Achievement,
            "Achievement: daily step goal reached".to_string(),
        ),
    }
}
