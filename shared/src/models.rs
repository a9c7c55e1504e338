//! Data models for the MindTrack application

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of recent mood check-ins relative to prior ones
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MoodTrend {
    Up,
    Down,
    Stable,
}

impl fmt::Display for MoodTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoodTrend::Up => write!(f, "up"),
            MoodTrend::Down => write!(f, "down"),
            MoodTrend::Stable => write!(f, "stable"),
        }
    }
}

/// Patient row as shown in listings and dashboards
///
/// Summaries are generated fresh per listing request from a fixed seed and
/// are immutable once returned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientSummary {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_mood: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood_trend: Option<MoodTrend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_activity: Option<String>,
    /// Percentage of prescribed doses reportedly taken (0-100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medication_adherence: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_checkin: Option<DateTime<Utc>>,
}

/// Sleep quality label derived from duration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SleepQuality {
    Good,
    Fair,
    Poor,
}

impl SleepQuality {
    /// Thresholds: >7.5h is Good, >6h is Fair, anything shorter is Poor
    pub fn from_duration_hours(hours: f64) -> Self {
        if hours > 7.5 {
            SleepQuality::Good
        } else if hours > 6.0 {
            SleepQuality::Fair
        } else {
            SleepQuality::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SleepQuality::Good => "Good",
            SleepQuality::Fair => "Fair",
            SleepQuality::Poor => "Poor",
        }
    }
}

/// Sleep summary recorded once per day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SleepSummary {
    pub quality: SleepQuality,
    pub duration_hours: f64,
}

/// Movement summary recorded once per day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovementSummary {
    pub step_count: u32,
}

/// One snapshot of wearable sensor data
///
/// All physiological fields are optional; a reading with a missing metric
/// passes the gap through rather than substituting zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WearableReading {
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_rate_bpm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hrv_ms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eda_microsiemens: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_temp_celsius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep: Option<SleepSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movement: Option<MovementSummary>,
}

/// A single emotional check-in submitted by the patient
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoodCheckin {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub mood: String,
    pub symptoms: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A clinical note authored by the clinician
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Note {
    pub id: String,
    pub created_at: DateTime<Utc>,
    /// Equal to `created_at` unless the note was edited
    pub updated_at: DateTime<Utc>,
    pub title: String,
    pub content: String,
}

/// A prescribed medication entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Medication {
    pub id: String,
    pub patient_id: String,
    pub name: String,
    pub dosage: String,
    pub schedule: String,
    pub reminders_enabled: bool,
    pub added_at: DateTime<Utc>,
}

/// Discriminant of a treatment-history event
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
    MoodCheckin,
    Medication,
    Note,
    Activity,
    Insight,
    Crisis,
    Achievement,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::MoodCheckin => "moodCheckin",
            EventKind::Medication => "medication",
            EventKind::Note => "note",
            EventKind::Activity => "activity",
            EventKind::Insight => "insight",
            EventKind::Crisis => "crisis",
            EventKind::Achievement => "achievement",
        }
    }
}

/// Typed payload of a treatment-history event
///
/// Each variant carries its own payload, so rendering event details never
/// needs a downcast.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "details", rename_all = "camelCase")]
pub enum EventDetails {
    MoodCheckin(MoodCheckin),
    Medication,
    Note(Note),
    Activity { name: String },
    Insight { text: String },
    Crisis,
    Achievement,
}

impl EventDetails {
    pub fn kind(&self) -> EventKind {
        match self {
            EventDetails::MoodCheckin(_) => EventKind::MoodCheckin,
            EventDetails::Medication => EventKind::Medication,
            EventDetails::Note(_) => EventKind::Note,
            EventDetails::Activity { .. } => EventKind::Activity,
            EventDetails::Insight { .. } => EventKind::Insight,
            EventDetails::Crisis => EventKind::Crisis,
            EventDetails::Achievement => EventKind::Achievement,
        }
    }
}

/// One timestamped entry in a patient's longitudinal history timeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TreatmentEvent {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub description: String,
    #[serde(flatten)]
    pub event: EventDetails,
    /// True for filler events generated without a backing entity; events
    /// projected from real check-ins and notes carry false
    pub synthetic: bool,
}

impl TreatmentEvent {
    pub fn kind(&self) -> EventKind {
        self.event.kind()
    }
}

/// Full per-patient profile backing the profile view
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientProfile {
    #[serde(flatten)]
    pub summary: PatientSummary,
    pub date_joined: DateTime<Utc>,
    /// Oldest-first, one reading per day
    pub wearable_data: Vec<WearableReading>,
    /// Newest-first
    pub mood_checkins: Vec<MoodCheckin>,
    pub medications: Vec<Medication>,
    /// Newest-first
    pub notes: Vec<Note>,
    /// Newest-first; kept sorted descending by timestamp after any insertion
    pub treatment_history: Vec<TreatmentEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_insights: Option<String>,
}

impl PatientProfile {
    /// Prepend a note and re-sort so the newest-first invariant holds.
    ///
    /// The sort is stable, so a note tying an existing timestamp stays ahead
    /// of it.
    pub fn insert_note(&mut self, note: Note) {
        self.notes.insert(0, note);
        self.notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    }

    /// Prepend a treatment event and re-sort descending by timestamp.
    pub fn insert_event(&mut self, event: TreatmentEvent) {
        self.treatment_history.insert(0, event);
        self.treatment_history
            .sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn event(id: &str, at: DateTime<Utc>) -> TreatmentEvent {
        TreatmentEvent {
            id: id.to_string(),
            timestamp: at,
            description: "Medication recorded as taken".to_string(),
            event: EventDetails::Medication,
            synthetic: true,
        }
    }

    fn empty_profile() -> PatientProfile {
        PatientProfile {
            summary: PatientSummary {
                id: "pat_1".to_string(),
                name: "Ana Silva".to_string(),
                last_mood: None,
                mood_trend: None,
                recent_activity: None,
                medication_adherence: None,
                last_checkin: None,
            },
            date_joined: ts(0),
            wearable_data: vec![],
            mood_checkins: vec![],
            medications: vec![],
            notes: vec![],
            treatment_history: vec![],
            ai_insights: None,
        }
    }

    #[test]
    fn test_sleep_quality_thresholds() {
        assert_eq!(SleepQuality::from_duration_hours(8.0), SleepQuality::Good);
        assert_eq!(SleepQuality::from_duration_hours(7.5), SleepQuality::Fair);
        assert_eq!(SleepQuality::from_duration_hours(6.1), SleepQuality::Fair);
        assert_eq!(SleepQuality::from_duration_hours(6.0), SleepQuality::Poor);
        assert_eq!(SleepQuality::from_duration_hours(4.0), SleepQuality::Poor);
    }

    #[test]
    fn test_insert_event_keeps_descending_order() {
        let mut profile = empty_profile();
        profile.insert_event(event("a", ts(100)));
        profile.insert_event(event("b", ts(300)));
        profile.insert_event(event("c", ts(200)));

        let order: Vec<&str> = profile
            .treatment_history
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(order, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_insert_event_tie_puts_newest_insertion_first() {
        let mut profile = empty_profile();
        profile.insert_event(event("first", ts(100)));
        profile.insert_event(event("second", ts(100)));

        assert_eq!(profile.treatment_history[0].id, "second");
        assert_eq!(profile.treatment_history[1].id, "first");
    }

    #[test]
    fn test_event_kind_matches_details_variant() {
        let details = EventDetails::Activity {
            name: "Light walk".to_string(),
        };
        assert_eq!(details.kind(), EventKind::Activity);
        assert_eq!(details.kind().as_str(), "activity");
    }

    #[test]
    fn test_treatment_event_serializes_tagged_kind() {
        let evt = event("evt_1", ts(0));
        let json = serde_json::to_value(&evt).unwrap();
        assert_eq!(json["kind"], "medication");
        assert_eq!(json["synthetic"], true);

        let insight = TreatmentEvent {
            id: "evt_2".to_string(),
            timestamp: ts(0),
            description: "New AI insights generated".to_string(),
            event: EventDetails::Insight {
                text: "Monitor sleep".to_string(),
            },
            synthetic: false,
        };
        let json = serde_json::to_value(&insight).unwrap();
        assert_eq!(json["kind"], "insight");
        assert_eq!(json["details"]["text"], "Monitor sleep");
    }
}
