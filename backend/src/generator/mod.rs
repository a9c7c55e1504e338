//! Seeded mock data generation
//!
//! Stands in for a real clinical data source. Everything here is synthetic
//! and deterministic for a given seed: the same seed always produces the
//! same population, which keeps listings stable across requests and tests
//! reproducible.

pub mod history;
pub mod ids;
pub mod medications;
pub mod mood;
pub mod notes;
pub mod roster;
pub mod wearable;

use chrono::{DateTime, Duration, Utc};
use ids::SequentialIds;
use mindtrack_shared::models::{PatientProfile, PatientSummary};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform random instant within `[start, end]`
pub(crate) fn random_datetime(
    rng: &mut impl Rng,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> DateTime<Utc> {
    let span = (end - start).num_seconds().max(1);
    start + Duration::seconds(rng.gen_range(0..=span))
}

/// Facade over the generators: the mock data provider consumed by the store.
///
/// Each call re-derives its random stream from the fixed seed and the anchor
/// instant captured at construction, so summaries are generated fresh per
/// request yet identical across requests.
#[derive(Debug, Clone)]
pub struct MockDataProvider {
    seed: u64,
    wearable_days: usize,
    anchor: DateTime<Utc>,
}

impl MockDataProvider {
    pub fn new(seed: u64, wearable_days: usize) -> Self {
        Self {
            seed,
            wearable_days,
            anchor: Utc::now(),
        }
    }

    pub fn patient_summaries(&self) -> Vec<PatientSummary> {
        let mut ids = SequentialIds::new();
        let mut rng = StdRng::seed_from_u64(self.seed);
        roster::patient_summaries(&mut ids, &mut rng, self.anchor)
    }

    pub fn patient_profile(&self, patient_id: &str) -> Option<PatientProfile> {
        let summaries = self.patient_summaries();
        let index = summaries.iter().position(|p| p.id == patient_id)?;

        // Per-patient stream: a profile does not depend on how many other
        // profiles were generated before it
        let mut rng = StdRng::seed_from_u64(self.profile_seed(index));
        let mut ids = SequentialIds::new();
        Some(roster::patient_profile(
            &mut ids,
            &mut rng,
            index,
            &summaries[index],
            self.wearable_days,
            self.anchor,
        ))
    }

    fn profile_seed(&self, index: usize) -> u64 {
        self.seed ^ (index as u64 + 1).wrapping_mul(0x9e37_79b9_7f4a_7c15)
    }
}
