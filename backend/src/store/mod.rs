//! In-memory mock patient store
//!
//! The store owns all generated entities for the lifetime of the process:
//! summaries are re-derived deterministically on every listing, full
//! profiles are generated lazily and cached so note and insight mutations
//! persist for the session. Nothing is persisted across restarts.

use crate::generator::ids::{IdGenerator, UuidIds};
use crate::generator::MockDataProvider;
use chrono::Utc;
use mindtrack_shared::models::{
    EventDetails, Medication, Note, PatientProfile, PatientSummary, TreatmentEvent,
    WearableReading,
};
use std::collections::HashMap;
use tokio::sync::RwLock;

pub struct PatientStore {
    provider: MockDataProvider,
    profiles: RwLock<HashMap<String, PatientProfile>>,
}

impl PatientStore {
    pub fn new(provider: MockDataProvider) -> Self {
        Self {
            provider,
            profiles: RwLock::new(HashMap::new()),
        }
    }

    /// Patient summaries, generated fresh per request from the fixed seed.
    pub fn list_summaries(&self) -> Vec<PatientSummary> {
        self.provider.patient_summaries()
    }

    pub fn patient_count(&self) -> usize {
        self.provider.patient_summaries().len()
    }

    /// Resolve a full profile, generating and caching it on first access.
    pub async fn get_profile(&self, patient_id: &str) -> Option<PatientProfile> {
        if let Some(profile) = self.profiles.read().await.get(patient_id) {
            return Some(profile.clone());
        }
        let mut cache = self.profiles.write().await;
        if !cache.contains_key(patient_id) {
            let profile = self.provider.patient_profile(patient_id)?;
            cache.insert(patient_id.to_string(), profile);
        }
        cache.get(patient_id).cloned()
    }

    pub async fn list_medications(&self, patient_id: &str) -> Option<Vec<Medication>> {
        self.get_profile(patient_id).await.map(|p| p.medications)
    }

    pub async fn list_wearables(&self, patient_id: &str) -> Option<Vec<WearableReading>> {
        self.get_profile(patient_id).await.map(|p| p.wearable_data)
    }

    /// Commit a note: prepend it and a mirrored treatment event, both
    /// re-sorted descending by their timestamps.
    ///
    /// Returns `None` for an unknown patient id.
    pub async fn add_note(
        &self,
        patient_id: &str,
        title: String,
        content: String,
    ) -> Option<Note> {
        // Make sure the profile is cached before mutating it
        self.get_profile(patient_id).await?;

        let mut cache = self.profiles.write().await;
        let profile = cache.get_mut(patient_id)?;

        let now = Utc::now();
        let mut ids = UuidIds;
        let note = Note {
            id: ids.next_id("note"),
            created_at: now,
            updated_at: now,
            title,
            content,
        };
        let event = TreatmentEvent {
            id: ids.next_id("evt_note"),
            timestamp: note.created_at,
            description: format!("Note added: {}", note.title),
            event: EventDetails::Note(note.clone()),
            synthetic: false,
        };

        profile.insert_note(note.clone());
        profile.insert_event(event);
        Some(note)
    }

    /// Store generated insight text and record it on the timeline.
    pub async fn record_insight(&self, patient_id: &str, text: &str) -> Option<TreatmentEvent> {
        self.get_profile(patient_id).await?;

        let mut cache = self.profiles.write().await;
        let profile = cache.get_mut(patient_id)?;

        let mut ids = UuidIds;
        let event = TreatmentEvent {
            id: ids.next_id("evt_insight"),
            timestamp: Utc::now(),
            description: "New AI insights generated".to_string(),
            event: EventDetails::Insight {
                text: text.to_string(),
            },
            synthetic: false,
        };

        profile.ai_insights = Some(text.to_string());
        profile.insert_event(event.clone());
        Some(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindtrack_shared::models::EventKind;

    fn store() -> PatientStore {
        PatientStore::new(MockDataProvider::new(42, 30))
    }

    #[tokio::test]
    async fn test_profile_cache_persists_mutations() {
        let store = store();
        let note = store
            .add_note(
                "pat_1",
                "Session follow-up".to_string(),
                "Reviewed sleep trends together.".to_string(),
            )
            .await
            .unwrap();

        let profile = store.get_profile("pat_1").await.unwrap();
        assert_eq!(profile.notes[0], note);
        assert_eq!(profile.treatment_history[0].kind(), EventKind::Note);
        match &profile.treatment_history[0].event {
            EventDetails::Note(event_note) => assert_eq!(event_note.id, note.id),
            other => panic!("expected note event, got {:?}", other.kind()),
        }
    }

    #[tokio::test]
    async fn test_add_note_unknown_patient_returns_none() {
        let store = store();
        let result = store
            .add_note("pat_999", "Title".to_string(), "Content".to_string())
            .await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_record_insight_updates_profile_and_timeline() {
        let store = store();
        let event = store
            .record_insight("pat_2", "Mood is trending up; keep the current plan.")
            .await
            .unwrap();

        assert_eq!(event.kind(), EventKind::Insight);
        let profile = store.get_profile("pat_2").await.unwrap();
        assert_eq!(
            profile.ai_insights.as_deref(),
            Some("Mood is trending up; keep the current plan.")
        );
        assert_eq!(profile.treatment_history[0].id, event.id);
        assert!(!profile.treatment_history[0].synthetic);
    }

    #[tokio::test]
    async fn test_medications_and_wearables_delegate_to_profile() {
        let store = store();
        let meds = store.list_medications("pat_1").await.unwrap();
        assert!(meds.iter().all(|m| m.patient_id == "pat_1"));

        let wearables = store.list_wearables("pat_1").await.unwrap();
        assert_eq!(wearables.len(), 30);

        assert!(store.list_medications("pat_999").await.is_none());
    }
}
