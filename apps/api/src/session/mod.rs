//! Session — the in-memory working copy of the record plus transient
//! editor state, and the load-or-seed startup policy.

use serde::Deserialize;

use crate::editor::RemovalState;
use crate::models::portfolio::PortfolioRecord;
use crate::models::seed::seed_record;
use crate::store::PortfolioStore;

pub mod handlers;

/// Pending removal confirmations, one per edited collection.
#[derive(Debug, Default)]
pub struct RemovalStates {
    pub experience: RemovalState,
    pub education: RemovalState,
    pub projects: RemovalState,
    pub links: RemovalState,
}

/// The single editing session. Mutations accumulate here and reach the
/// store only on an explicit save (manual path) or immediately after a
/// successful extraction.
#[derive(Debug)]
pub struct Session {
    pub record: PortfolioRecord,
    pub removal: RemovalStates,
}

impl Session {
    pub fn new(record: PortfolioRecord) -> Self {
        Self {
            record,
            removal: RemovalStates::default(),
        }
    }

    /// Wholesale replacement; resets all pending removal confirmations.
    pub fn replace_record(&mut self, record: PortfolioRecord) {
        self.record = record;
        self.removal = RemovalStates::default();
    }
}

/// The collections editable through the generic engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Experience,
    Education,
    Projects,
    Links,
}

/// Startup policy: use the stored record when one exists; otherwise seed
/// the store with the built-in default and work from that.
pub fn load_or_seed(store: &PortfolioStore) -> PortfolioRecord {
    match store.load() {
        Some(record) => record,
        None => {
            let record = seed_record();
            store.save(&record);
            record
        }
    }
}
