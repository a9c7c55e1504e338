//! Profile view state and note authoring
//!
//! The profile view is a small state machine over a fixed tab set plus a
//! two-phase note flow: a draft is composed locally and only committed to
//! the store once both required fields are present.

use crate::error::ApiError;
use crate::store::PatientStore;
use mindtrack_shared::models::{Note, PatientProfile};
use serde::{Deserialize, Serialize};

/// Tabs available on the patient profile view
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProfileTab {
    #[default]
    Overview,
    Wearable,
    Medications,
    Notes,
    History,
}

/// Draft state for the note authoring flow
#[derive(Debug, Clone, Default)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Both fields must be non-empty (after trimming) to submit.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.title.trim().is_empty() || self.content.trim().is_empty() {
            return Err(ApiError::Validation(
                "Note title and content are required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Per-patient view state; tab switches are pure UI state, no data refetch
#[derive(Debug, Default)]
pub struct ProfileView {
    tab: ProfileTab,
    draft: NoteDraft,
}

impl ProfileView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab(&self) -> ProfileTab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: ProfileTab) {
        self.tab = tab;
    }

    pub fn draft_mut(&mut self) -> &mut NoteDraft {
        &mut self.draft
    }

    /// Commit the draft; on success the draft resets to empty.
    pub async fn submit_note(
        &mut self,
        store: &PatientStore,
        patient_id: &str,
    ) -> Result<Note, ApiError> {
        let note = ProfileService::add_note(
            store,
            patient_id,
            self.draft.title.clone(),
            self.draft.content.clone(),
        )
        .await?;
        self.draft = NoteDraft::default();
        Ok(note)
    }
}

/// Profile service for business logic
pub struct ProfileService;

impl ProfileService {
    /// Resolve a full profile or fail with NotFound.
    pub async fn get(store: &PatientStore, patient_id: &str) -> Result<PatientProfile, ApiError> {
        store
            .get_profile(patient_id)
            .await
            .ok_or_else(|| ApiError::NotFound(format!("Patient {} not found", patient_id)))
    }

    /// Validate and commit a note; the store mirrors it onto the timeline.
    pub async fn add_note(
        store: &PatientStore,
        patient_id: &str,
        title: String,
        content: String,
    ) -> Result<Note, ApiError> {
        let draft = NoteDraft::new(title, content);
        draft.validate()?;

        store
            .add_note(
                patient_id,
                draft.title.trim().to_string(),
                draft.content.trim().to_string(),
            )
            .await
            .ok_or_else(|| ApiError::NotFound(format!("Patient {} not found", patient_id)))
    }
}
