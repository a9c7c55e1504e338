//! The fixed synthetic patient roster and full-profile assembly

use super::ids::IdGenerator;
use super::{history, medications, mood, notes, random_datetime, wearable};
use chrono::{DateTime, Duration, Utc};
use mindtrack_shared::models::{MoodTrend, PatientProfile, PatientSummary};
use rand::Rng;

/// Days of history covered by check-ins, notes, and filler events
const DATA_WINDOW_DAYS: i64 = 180;
/// Window in which the random last check-in falls
const CHECKIN_WINDOW_DAYS: i64 = 60;
/// Filler events mixed into each generated timeline
const FILLER_EVENTS: usize = 15;

struct RosterEntry {
    name: &'static str,
    last_mood: Option<&'static str>,
    mood_trend: Option<MoodTrend>,
    recent_activity: Option<&'static str>,
    adherence: Option<u8>,
    /// A fresh intake has no recorded data yet
    has_data: bool,
}

const ROSTER: &[RosterEntry] = &[
    RosterEntry {
        name: "Ana Silva",
        last_mood: Some("Calm"),
        mood_trend: Some(MoodTrend::Stable),
        recent_activity: Some("Focus timer session"),
        adherence: Some(90),
        has_data: true,
    },
    RosterEntry {
        name: "Bruno Costa",
        last_mood: Some("Anxious"),
        mood_trend: Some(MoodTrend::Down),
        recent_activity: Some("Breathing exercise"),
        adherence: Some(75),
        has_data: true,
    },
    RosterEntry {
        name: "Carla Dias",
        last_mood: Some("Happy"),
        mood_trend: Some(MoodTrend::Up),
        recent_activity: Some("Medication taken"),
        adherence: Some(100),
        has_data: true,
    },
    RosterEntry {
        name: "Daniel Martins",
        last_mood: Some("Sad"),
        mood_trend: Some(MoodTrend::Stable),
        recent_activity: Some("Quick journal entry"),
        adherence: Some(80),
        has_data: true,
    },
    RosterEntry {
        name: "Eduarda Ferreira",
        last_mood: Some("Stressed"),
        mood_trend: Some(MoodTrend::Down),
        recent_activity: Some("Focus timer session"),
        adherence: Some(60),
        has_data: true,
    },
    RosterEntry {
        name: "Fabio Gomes",
        last_mood: Some("Calm"),
        mood_trend: Some(MoodTrend::Up),
        recent_activity: Some("Light walk"),
        adherence: Some(95),
        has_data: true,
    },
    RosterEntry {
        name: "Gabriela Lima",
        last_mood: Some("Irritable"),
        mood_trend: Some(MoodTrend::Down),
        recent_activity: None,
        adherence: Some(88),
        has_data: true,
    },
    RosterEntry {
        name: "Hugo Mendes",
        last_mood: None,
        mood_trend: None,
        recent_activity: None,
        adherence: None,
        has_data: false,
    },
];

/// Generate the patient summary listing from the fixed roster.
pub fn patient_summaries(
    ids: &mut dyn IdGenerator,
    rng: &mut impl Rng,
    now: DateTime<Utc>,
) -> Vec<PatientSummary> {
    ROSTER
        .iter()
        .map(|entry| {
            let last_checkin = entry
                .has_data
                .then(|| random_datetime(rng, now - Duration::days(CHECKIN_WINDOW_DAYS), now));
            PatientSummary {
                id: ids.next_id("pat"),
                name: entry.name.to_string(),
                last_mood: entry.last_mood.map(str::to_string),
                mood_trend: entry.mood_trend,
                recent_activity: entry.recent_activity.map(str::to_string),
                medication_adherence: entry.adherence,
                last_checkin,
            }
        })
        .collect()
}

/// Assemble the full profile for one roster entry.
///
/// Counts vary slightly per patient index so the demo data differs between
/// patients; an entry without any recorded data yields empty sequences.
pub fn patient_profile(
    ids: &mut dyn IdGenerator,
    rng: &mut impl Rng,
    index: usize,
    summary: &PatientSummary,
    wearable_days: usize,
    now: DateTime<Utc>,
) -> PatientProfile {
    let data_range = (now - Duration::days(DATA_WINDOW_DAYS), now);
    let joined_range = (now - Duration::days(540), now - Duration::days(DATA_WINDOW_DAYS));
    let date_joined = random_datetime(rng, joined_range.0, joined_range.1);

    let has_data = summary.last_checkin.is_some();
    let (days, checkin_count, note_count, filler_count) = if has_data {
        (wearable_days, 15 + index, 3 + index / 2, FILLER_EVENTS)
    } else {
        (0, 0, 0, 0)
    };

    let wearable_data = wearable::wearable_series(rng, days, now);
    let mood_checkins = mood::mood_checkins(ids, rng, checkin_count, data_range);
    let clinical_notes = notes::clinical_notes(ids, rng, note_count, data_range);
    let treatment_history = history::treatment_history(
        ids,
        rng,
        &mood_checkins,
        &clinical_notes,
        filler_count,
        data_range,
    );
    let meds = if has_data {
        medications::medications(ids, rng, &summary.id, index, (date_joined, now))
    } else {
        Vec::new()
    };

    PatientProfile {
        summary: summary.clone(),
        date_joined,
        wearable_data,
        mood_checkins,
        medications: meds,
        notes: clinical_notes,
        treatment_history,
        ai_insights: None,
    }
}
