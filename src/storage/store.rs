//! Storage adapter: versioned load/save over a single slot.
//!
//! `load` self-heals: a slot entry that cannot be decoded for its declared
//! version is erased and replaced by empty data, never surfaced as an
//! error. `save` always writes the current schema version, so any legacy
//! payload is upgraded on the first save after load.

use tracing::{info, warn};

use super::schema::{self, PayloadVersion};
use super::slot::StorageSlot;
use crate::plan::types::AppData;

/// Adapter between the in-memory dataset and one persistent slot.
///
/// Never retains a reference to the dataset; data is copied in and out at
/// the load and save boundaries.
pub struct TemplateStore<S: StorageSlot> {
    slot: S,
}

impl<S: StorageSlot> TemplateStore<S> {
    /// Create an adapter over the given slot.
    pub fn new(slot: S) -> Self {
        Self { slot }
    }

    /// Load the persisted dataset.
    ///
    /// Absent entry yields empty data. A corrupt entry (unparseable,
    /// unrecognized version, or failed validation) is erased and also
    /// yields empty data.
    pub fn load(&mut self) -> AppData {
        let raw = match self.slot.read() {
            Ok(Some(raw)) => raw,
            Ok(None) => return AppData::default(),
            Err(e) => {
                warn!("failed to read storage slot: {e}");
                return AppData::default();
            }
        };

        match schema::decode_payload(&raw) {
            Some(payload) => {
                if payload.needs_migration() {
                    info!("migrating persisted data to schema version {}", schema::STORAGE_VERSION);
                }
                payload.migrate()
            }
            None => {
                warn!("discarding corrupt persisted data");
                self.erase();
                AppData::default()
            }
        }
    }

    /// Persist the dataset, always under the current schema version.
    ///
    /// Write failures are logged and swallowed; persistence is best-effort
    /// and the in-memory dataset stays authoritative.
    pub fn save(&mut self, data: &AppData) {
        if let Err(e) = self.slot.write(&schema::encode_payload(data)) {
            warn!("failed to persist data: {e}");
        }
    }

    /// Serialize the dataset for export. Does not touch the slot.
    pub fn serialize(&self, data: &AppData) -> String {
        schema::encode_payload(data)
    }

    /// Parse an imported document under the same rules as `load`, without
    /// any slot side effects. `None` means the document is invalid; the
    /// caller decides what that communicates to the user.
    pub fn parse_imported(&self, raw: &str) -> Option<AppData> {
        schema::decode_payload(raw).map(PayloadVersion::migrate)
    }

    /// Remove the persisted entry. In-memory state is untouched.
    pub fn clear(&mut self) {
        self.erase();
    }

    fn erase(&mut self) {
        if let Err(e) = self.slot.clear() {
            warn!("failed to clear storage slot: {e}");
        }
    }
}
