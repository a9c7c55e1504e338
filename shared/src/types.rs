//! API request and response types

use crate::aggregate::{AdherenceBucket, DistributionSlice};
use crate::listing::{SortDirection, SortKey};
use crate::models::PatientSummary;
use serde::{Deserialize, Serialize};

/// Query parameters accepted by the patient listing endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatientListQuery {
    /// Case-insensitive substring match on the patient name
    pub q: Option<String>,
    /// Comma-separated set of mood labels
    pub mood: Option<String>,
    pub adherence: Option<AdherenceBucket>,
    pub sort: Option<SortKey>,
    pub order: Option<SortDirection>,
}

/// Patient listing response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientListResponse {
    pub items: Vec<PatientSummary>,
    pub total: usize,
}

/// Note creation request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNoteRequest {
    pub title: String,
    pub content: String,
}

/// Query parameters for the wearable chart endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartQuery {
    pub points: Option<usize>,
}

/// AI insight generation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightsResponse {
    pub insights: String,
}

/// Aggregate dashboard response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_patients: usize,
    pub mood_distribution: Vec<DistributionSlice>,
    pub adherence_distribution: Vec<DistributionSlice>,
    /// Most recently checked-in patients, newest first
    pub recent_patients: Vec<PatientSummary>,
}
