//! Listing state for the patient table: search, filters, and column sorting

use crate::aggregate::AdherenceBucket;
use crate::models::PatientSummary;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Sortable columns of the patient table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Mood,
    Adherence,
    Checkin,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// State machine over a patient collection: conjunctive filters plus an
/// optional sort column.
///
/// Filters are re-applied over the full collection on every evaluation, so
/// relaxing a filter restores previously hidden rows.
#[derive(Debug, Clone, Default)]
pub struct PatientListController {
    patients: Vec<PatientSummary>,
    search: String,
    mood_filter: BTreeSet<String>,
    adherence_filter: Option<AdherenceBucket>,
    sort: Option<(SortKey, SortDirection)>,
}

impl PatientListController {
    pub fn new(patients: Vec<PatientSummary>) -> Self {
        Self {
            patients,
            ..Default::default()
        }
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Add the mood to the filter set, or remove it if already present.
    pub fn toggle_mood(&mut self, mood: &str) {
        if !self.mood_filter.remove(mood) {
            self.mood_filter.insert(mood.to_string());
        }
    }

    pub fn set_adherence_filter(&mut self, bucket: Option<AdherenceBucket>) {
        self.adherence_filter = bucket;
    }

    /// Column-header click semantics: the same key toggles direction, a
    /// different key resets to ascending.
    pub fn request_sort(&mut self, key: SortKey) {
        let direction = match self.sort {
            Some((current, SortDirection::Asc)) if current == key => SortDirection::Desc,
            _ => SortDirection::Asc,
        };
        self.sort = Some((key, direction));
    }

    pub fn set_sort(&mut self, key: SortKey, direction: SortDirection) {
        self.sort = Some((key, direction));
    }

    pub fn sort_state(&self) -> Option<(SortKey, SortDirection)> {
        self.sort
    }

    /// Distinct moods present in the full collection, sorted alphabetically.
    pub fn available_moods(&self) -> Vec<String> {
        let moods: BTreeSet<String> = self
            .patients
            .iter()
            .filter_map(|p| p.last_mood.clone())
            .collect();
        moods.into_iter().collect()
    }

    /// Apply search, mood, and adherence predicates in sequence (AND), then
    /// sort the filtered result.
    pub fn visible(&self) -> Vec<PatientSummary> {
        let mut rows: Vec<PatientSummary> = self
            .patients
            .iter()
            .filter(|p| self.matches_search(p))
            .filter(|p| self.matches_mood(p))
            .filter(|p| self.matches_adherence(p))
            .cloned()
            .collect();

        if let Some((key, direction)) = self.sort {
            sort_patients(&mut rows, key, direction);
        }
        rows
    }

    fn matches_search(&self, patient: &PatientSummary) -> bool {
        let term = self.search.trim().to_lowercase();
        term.is_empty() || patient.name.to_lowercase().contains(&term)
    }

    fn matches_mood(&self, patient: &PatientSummary) -> bool {
        if self.mood_filter.is_empty() {
            return true;
        }
        patient
            .last_mood
            .as_ref()
            .is_some_and(|mood| self.mood_filter.contains(mood))
    }

    fn matches_adherence(&self, patient: &PatientSummary) -> bool {
        match self.adherence_filter {
            None => true,
            Some(bucket) => AdherenceBucket::classify(patient.medication_adherence) == bucket,
        }
    }
}

/// Stable in-place sort by the given key.
///
/// The comparator switches on the key's value type (string, number, date)
/// and places missing values last regardless of direction.
pub fn sort_patients(rows: &mut [PatientSummary], key: SortKey, direction: SortDirection) {
    rows.sort_by(|a, b| compare(a, b, key, direction));
}

fn compare(
    a: &PatientSummary,
    b: &PatientSummary,
    key: SortKey,
    direction: SortDirection,
) -> Ordering {
    match key {
        SortKey::Name => direction.apply(a.name.to_lowercase().cmp(&b.name.to_lowercase())),
        SortKey::Mood => compare_option(
            a.last_mood.as_ref().map(|m| m.to_lowercase()),
            b.last_mood.as_ref().map(|m| m.to_lowercase()),
            direction,
        ),
        SortKey::Adherence => {
            compare_option(a.medication_adherence, b.medication_adherence, direction)
        }
        SortKey::Checkin => compare_option(a.last_checkin, b.last_checkin, direction),
    }
}

fn compare_option<T: Ord>(a: Option<T>, b: Option<T>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => direction.apply(a.cmp(&b)),
        // Missing values sort last in either direction
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
