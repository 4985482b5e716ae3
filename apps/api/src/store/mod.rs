//! Persistent Store — durable single-slot storage for the portfolio record.
//!
//! One fixed file under the configured data directory holds the record,
//! wrapped in a versioned envelope. Failure semantics are deliberately
//! soft: `load` treats every failure mode (missing file, corrupt JSON,
//! unknown schema version) as "no record", and `save` degrades to a logged
//! warning rather than surfacing an error to the session.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::warn;

use crate::models::portfolio::PortfolioRecord;

/// File name of the single slot inside the data directory.
const SLOT_FILE: &str = "portfolio.json";

/// Bumped whenever the stored shape changes incompatibly. An envelope with
/// any other version is treated as absent, never as corruption.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EnvelopeRef<'a> {
    schema_version: u32,
    saved_at: DateTime<Utc>,
    record: &'a PortfolioRecord,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope {
    schema_version: u32,
    #[allow(dead_code)]
    saved_at: DateTime<Utc>,
    record: PortfolioRecord,
}

pub struct PortfolioStore {
    path: PathBuf,
}

impl PortfolioStore {
    /// Opens (and creates if needed) the data directory holding the slot.
    pub fn new(data_dir: &Path) -> Result<Self> {
        fs::create_dir_all(data_dir)
            .with_context(|| format!("failed to create data directory {}", data_dir.display()))?;
        Ok(Self {
            path: data_dir.join(SLOT_FILE),
        })
    }

    /// Returns the stored record, or `None` if the slot was never written,
    /// cannot be read, or does not deserialize as a current-version
    /// envelope.
    pub fn load(&self) -> Option<PortfolioRecord> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("failed to read portfolio slot: {e}");
                return None;
            }
        };

        let envelope: Envelope = match serde_json::from_slice(&bytes) {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!("stored portfolio is corrupt, treating as absent: {e}");
                return None;
            }
        };

        if envelope.schema_version != SCHEMA_VERSION {
            warn!(
                "stored portfolio has schema version {}, expected {}; treating as absent",
                envelope.schema_version, SCHEMA_VERSION
            );
            return None;
        }

        Some(envelope.record)
    }

    /// Overwrites the slot with `record`. Failures are logged and
    /// swallowed; the previous slot content survives any failed attempt.
    pub fn save(&self, record: &PortfolioRecord) {
        if let Err(e) = self.write_slot(record) {
            warn!("failed to save portfolio record: {e:#}");
        }
    }

    fn write_slot(&self, record: &PortfolioRecord) -> Result<()> {
        let envelope = EnvelopeRef {
            schema_version: SCHEMA_VERSION,
            saved_at: Utc::now(),
            record,
        };

        // Write to a sibling temp file, then rename over the slot, so a
        // concurrent load never observes a partially written value.
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir).context("failed to create temp file")?;
        serde_json::to_writer_pretty(&mut tmp, &envelope)
            .context("failed to serialize portfolio record")?;
        tmp.flush().context("failed to flush portfolio record")?;
        tmp.persist(&self.path)
            .context("failed to replace portfolio slot")?;
        Ok(())
    }

    /// Removes the slot; a subsequent `load` returns `None`. A missing
    /// slot is already-cleared, not an error.
    pub fn clear(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!("failed to clear portfolio slot: {e}"),
        }
    }
}
