//! Aggregate dashboard statistics

use crate::store::PatientStore;
use mindtrack_shared::aggregate::{adherence_distribution, mood_distribution};
use mindtrack_shared::listing::{sort_patients, SortDirection, SortKey};
use mindtrack_shared::types::DashboardSummary;

const RECENT_PATIENTS: usize = 5;

/// Dashboard service
pub struct DashboardService;

impl DashboardService {
    pub fn summary(store: &PatientStore) -> DashboardSummary {
        let patients = store.list_summaries();

        let mut recent = patients.clone();
        sort_patients(&mut recent, SortKey::Checkin, SortDirection::Desc);
        recent.truncate(RECENT_PATIENTS);

        DashboardSummary {
            total_patients: patients.len(),
            mood_distribution: mood_distribution(&patients),
            adherence_distribution: adherence_distribution(&patients),
            recent_patients: recent,
        }
    }
}
