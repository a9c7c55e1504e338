//! AI insight generation
//!
//! Builds five short natural-language summaries from a patient profile,
//! submits a fixed-template prompt to the completion service, and records
//! the returned text on the profile. No retries; failures leave prior state
//! unchanged.

use crate::ai::CompletionClient;
use crate::error::ApiError;
use crate::store::PatientStore;
use mindtrack_shared::models::PatientProfile;
use tracing::info;

const DESCRIPTION_PREVIEW_CHARS: usize = 30;

/// AI insight service
pub struct InsightService;

impl InsightService {
    /// Generate insights for a patient and store them on the profile.
    ///
    /// Unknown ids fail with NotFound before anything is mutated; a blank
    /// completion fails with EmptyResponse and also mutates nothing.
    pub async fn generate(
        store: &PatientStore,
        client: &dyn CompletionClient,
        patient_id: &str,
    ) -> Result<String, ApiError> {
        let profile = store
            .get_profile(patient_id)
            .await
            .ok_or_else(|| ApiError::NotFound(format!("Patient {} not found", patient_id)))?;

        let prompt = build_prompt(&profile);
        let output = client
            .complete(&prompt)
            .await
            .map_err(|e| ApiError::Upstream(e.to_string()))?;

        let insights = output.trim();
        if insights.is_empty() {
            return Err(ApiError::EmptyResponse(
                "The AI service returned no usable text".to_string(),
            ));
        }

        store.record_insight(patient_id, insights).await;
        info!(patient_id, "Generated AI insights");
        Ok(insights.to_string())
    }
}

fn build_prompt(profile: &PatientProfile) -> String {
    format!(
        "You are an AI assistant helping a clinician quickly spot potential issues in \
patient data.\n\
\n\
Analyze the following summarized data for patient \"{name}\" and provide a concise \
summary (2-3 sentences) for the clinician. Highlight any concerning trends, notable \
correlations (for example, low mood alongside poor sleep), or possible topics for \
discussion or treatment adjustment. Do NOT provide diagnoses or direct medical advice.\n\
\n\
Patient data summary:\n\
- Recent mood: {mood}\n\
- Recent wearable data: {wearable}\n\
- Medications and adherence: {medications}\n\
- Recent clinical notes: {notes}\n\
- Recent treatment history: {history}\n\
\n\
Concise insights for the clinician:",
        name = profile.summary.name,
        mood = mood_summary(profile),
        wearable = wearable_summary(profile),
        medications = medication_summary(profile),
        notes = notes_summary(profile),
        history = history_summary(profile),
    )
}

/// Last three check-ins plus the overall trend.
fn mood_summary(profile: &PatientProfile) -> String {
    let recent = profile
        .mood_checkins
        .iter()
        .take(3)
        .map(|m| format!("{} ({})", m.mood, m.timestamp.format("%d/%m")))
        .collect::<Vec<_>>()
        .join(", ");
    let trend = profile
        .summary
        .mood_trend
        .map(|t| t.to_string())
        .unwrap_or_else(|| "stable".to_string());
    format!(
        "Last check-ins: {}. Overall trend: {}.",
        if recent.is_empty() {
            "none recent".to_string()
        } else {
            recent
        },
        trend
    )
}

/// Seven-day averages plus the most recent sleep summary.
fn wearable_summary(profile: &PatientProfile) -> String {
    let last_week = &profile.wearable_data[profile.wearable_data.len().saturating_sub(7)..];

    let heart_rates: Vec<f64> = last_week.iter().filter_map(|r| r.heart_rate_bpm).collect();
    let avg_hr = if heart_rates.is_empty() {
        "N/A".to_string()
    } else {
        format!(
            "{:.0}",
            heart_rates.iter().sum::<f64>() / heart_rates.len() as f64
        )
    };

    let last_sleep = last_week.last().and_then(|r| r.sleep.as_ref());
    let sleep = match last_sleep {
        Some(s) => format!("{}h ({})", s.duration_hours, s.quality.label()),
        None => "N/A".to_string(),
    };

    let steps: Vec<u32> = last_week
        .iter()
        .filter_map(|r| r.movement.as_ref().map(|m| m.step_count))
        .collect();
    let avg_steps = if steps.is_empty() {
        "N/A".to_string()
    } else {
        format!("{:.0}", steps.iter().sum::<u32>() as f64 / steps.len() as f64)
    };

    format!(
        "Avg HR (7d): {} bpm. Last sleep: {}. Avg steps (7d): {}.",
        avg_hr, sleep, avg_steps
    )
}

fn medication_summary(profile: &PatientProfile) -> String {
    let meds = profile
        .medications
        .iter()
        .map(|m| format!("{} ({})", m.name, m.dosage))
        .collect::<Vec<_>>()
        .join(", ");
    let adherence = profile
        .summary
        .medication_adherence
        .map(|a| format!("{}%", a))
        .unwrap_or_else(|| "N/A".to_string());
    format!(
        "{}. Reported adherence: {}.",
        if meds.is_empty() {
            "No current medications".to_string()
        } else {
            meds
        },
        adherence
    )
}

/// Titles of the last two notes.
fn notes_summary(profile: &PatientProfile) -> String {
    let recent = profile
        .notes
        .iter()
        .take(2)
        .map(|n| n.title.clone())
        .collect::<Vec<_>>()
        .join("; ");
    if recent.is_empty() {
        "No recent notes.".to_string()
    } else {
        recent
    }
}

/// Kinds and truncated descriptions of the last three events.
fn history_summary(profile: &PatientProfile) -> String {
    let recent = profile
        .treatment_history
        .iter()
        .take(3)
        .map(|e| format!("{}: {}", e.kind().as_str(), preview(&e.description)))
        .collect::<Vec<_>>()
        .join("; ");
    if recent.is_empty() {
        "No recent events.".to_string()
    } else {
        recent
    }
}

fn preview(description: &str) -> String {
    if description.chars().count() <= DESCRIPTION_PREVIEW_CHARS {
        description.to_string()
    } else {
        let truncated: String = description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::FixedCompletion;
    use crate::generator::MockDataProvider;
    use chrono::{TimeZone, Utc};
    use mindtrack_shared::models::{
        EventDetails, EventKind, MoodCheckin, MoodTrend, PatientSummary, TreatmentEvent,
    };

    fn store() -> PatientStore {
        PatientStore::new(MockDataProvider::new(42, 30))
    }

    fn profile_with_checkins() -> PatientProfile {
        let mut profile = PatientProfile {
            summary: PatientSummary {
                id: "pat_1".to_string(),
                name: "Ana Silva".to_string(),
                last_mood: Some("Calm".to_string()),
                mood_trend: Some(MoodTrend::Up),
                recent_activity: None,
                medication_adherence: Some(90),
                last_checkin: None,
            },
            date_joined: Utc.timestamp_opt(0, 0).unwrap(),
            wearable_data: vec![],
            mood_checkins: vec![],
            medications: vec![],
            notes: vec![],
            treatment_history: vec![],
            ai_insights: None,
        };
        for (i, mood) in ["Calm", "Happy", "Anxious", "Sad"].iter().enumerate() {
            profile.mood_checkins.push(MoodCheckin {
                id: format!("mc_{i}"),
                timestamp: Utc.timestamp_opt(1_000_000 - i as i64 * 1000, 0).unwrap(),
                mood: mood.to_string(),
                symptoms: vec![],
                notes: None,
            });
        }
        profile
    }

    #[test]
    fn test_mood_summary_takes_last_three_and_trend() {
        let summary = mood_summary(&profile_with_checkins());
        assert!(summary.contains("Calm"));
        assert!(summary.contains("Happy"));
        assert!(summary.contains("Anxious"));
        assert!(!summary.contains("Sad"));
        assert!(summary.ends_with("Overall trend: up."));
    }

    #[test]
    fn test_summaries_degrade_to_placeholders_on_empty_profile() {
        let mut profile = profile_with_checkins();
        profile.mood_checkins.clear();
        profile.summary.mood_trend = None;
        profile.summary.medication_adherence = None;

        assert_eq!(
            mood_summary(&profile),
            "Last check-ins: none recent. Overall trend: stable."
        );
        assert_eq!(
            wearable_summary(&profile),
            "Avg HR (7d): N/A bpm. Last sleep: N/A. Avg steps (7d): N/A."
        );
        assert_eq!(
            medication_summary(&profile),
            "No current medications. Reported adherence: N/A."
        );
        assert_eq!(notes_summary(&profile), "No recent notes.");
        assert_eq!(history_summary(&profile), "No recent events.");
    }

    #[test]
    fn test_history_summary_truncates_long_descriptions() {
        let mut profile = profile_with_checkins();
        profile.treatment_history.push(TreatmentEvent {
            id: "evt_1".to_string(),
            timestamp: Utc.timestamp_opt(0, 0).unwrap(),
            description: "A very long event description that keeps going well past the preview"
                .to_string(),
            event: EventDetails::Crisis,
            synthetic: true,
        });

        let summary = history_summary(&profile);
        assert!(summary.starts_with("crisis: "));
        assert!(summary.ends_with("..."));
    }

    #[test]
    fn test_prompt_contains_patient_name_and_sections() {
        let prompt = build_prompt(&profile_with_checkins());
        assert!(prompt.contains("Ana Silva"));
        assert!(prompt.contains("- Recent mood:"));
        assert!(prompt.contains("- Recent wearable data:"));
        assert!(prompt.contains("- Medications and adherence:"));
        assert!(prompt.contains("- Recent clinical notes:"));
        assert!(prompt.contains("- Recent treatment history:"));
    }

    #[tokio::test]
    async fn test_generate_stores_insights_and_records_event() {
        let store = store();
        let client = FixedCompletion::new("Mood stable; adherence needs attention.");

        let insights = InsightService::generate(&store, &client, "pat_1")
            .await
            .unwrap();
        assert_eq!(insights, "Mood stable; adherence needs attention.");

        let profile = store.get_profile("pat_1").await.unwrap();
        assert_eq!(profile.ai_insights.as_deref(), Some(insights.as_str()));
        assert_eq!(profile.treatment_history[0].kind(), EventKind::Insight);
    }

    #[tokio::test]
    async fn test_generate_unknown_patient_fails_not_found() {
        let store = store();
        let client = FixedCompletion::new("anything");

        let result = InsightService::generate(&store, &client, "pat_999").await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_blank_completion_fails_empty_response_without_mutation() {
        let store = store();
        let client = FixedCompletion::new("   \n ");

        let result = InsightService::generate(&store, &client, "pat_1").await;
        assert!(matches!(result, Err(ApiError::EmptyResponse(_))));

        let profile = store.get_profile("pat_1").await.unwrap();
        assert!(profile.ai_insights.is_none());
        assert!(profile
            .treatment_history
            .iter()
            .all(|e| e.kind() != EventKind::Insight || e.synthetic));
    }
}
