//! Id generation injected into the mock generators
//!
//! Generators never reach for process-wide counters; the id source is passed
//! in explicitly so tests stay deterministic.

use std::collections::HashMap;
use uuid::Uuid;

/// Source of entity ids for generated data
pub trait IdGenerator: Send {
    fn next_id(&mut self, prefix: &str) -> String;
}

/// Prefix-scoped sequential ids ("pat_1", "note_2"), deterministic across runs
#[derive(Debug, Default)]
pub struct SequentialIds {
    counters: HashMap<String, u64>,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self, prefix: &str) -> String {
        let counter = self.counters.entry(prefix.to_string()).or_insert(0);
        *counter += 1;
        format!("{}_{}", prefix, counter)
    }
}

/// Random UUID-suffixed ids for entities created at runtime
#[derive(Debug, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self, prefix: &str) -> String {
        format!("{}_{}", prefix, Uuid::new_v4())
    }
}
