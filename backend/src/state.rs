//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.

use crate::ai::CompletionClient;
use crate::config::AppConfig;
use crate::store::PatientStore;
use std::sync::Arc;

/// Shared application state
///
/// All fields are Arc-wrapped, so cloning across async tasks is O(1).
#[derive(Clone)]
pub struct AppState {
    /// In-memory mock patient store
    pub store: Arc<PatientStore>,
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Completion client used by the insight flow
    pub completion: Arc<dyn CompletionClient>,
}

impl AppState {
    pub fn new(
        store: PatientStore,
        completion: Arc<dyn CompletionClient>,
        config: AppConfig,
    ) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
            completion,
        }
    }

    /// Get a reference to the patient store
    #[inline]
    pub fn store(&self) -> &PatientStore {
        &self.store
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the completion client
    #[inline]
    pub fn completion(&self) -> &dyn CompletionClient {
        self.completion.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::FixedCompletion;
    use crate::generator::MockDataProvider;

    #[test]
    fn test_state_clone_is_cheap() {
        let config = AppConfig::default();
        let store = PatientStore::new(MockDataProvider::new(config.mock.seed, 30));
        let state = AppState::new(store, Arc::new(FixedCompletion::new("ok")), config);

        // Clone should be O(1) - just Arc increments
        let cloned = state.clone();
        assert_eq!(cloned.store().patient_count(), 8);
    }
}
