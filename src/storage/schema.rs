//! Versioned payload schema and validation.
//!
//! Untrusted text (the persisted slot or an imported file) is decoded into
//! a [`PayloadVersion`] variant or rejected. Validation is structural only:
//! every field present and string-typed, `exerciseIds` an array of strings.
//! Uniqueness and bounds are save-time rules enforced by the entity store,
//! not here. Decoding never panics and has no side effects.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::plan::types::{AppData, Exercise, ExerciseDay};

/// Current schema version. Every save writes this tag.
pub const STORAGE_VERSION: u32 = 2;

/// On-disk payload in the current shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredPayload {
    /// Schema version tag
    pub version: u32,
    /// All exercises
    pub exercises: Vec<Exercise>,
    /// All days
    pub days: Vec<ExerciseDay>,
}

impl StoredPayload {
    /// Wrap a dataset in the current payload shape.
    pub fn from_data(data: &AppData) -> Self {
        Self {
            version: STORAGE_VERSION,
            exercises: data.exercises.clone(),
            days: data.days.clone(),
        }
    }
}

/// Legacy version-1 payload: exercises only, no days.
#[derive(Debug, Clone, Deserialize)]
struct StoredPayloadV1 {
    exercises: Vec<Exercise>,
}

/// A successfully decoded payload, one variant per recognized schema.
#[derive(Debug, Clone)]
pub enum PayloadVersion {
    /// Current schema: exercises and days
    V2(AppData),
    /// Legacy schema: exercises only
    V1(Vec<Exercise>),
    /// Unversioned data matching the current element shapes
    Unversioned(AppData),
}

impl PayloadVersion {
    /// Migrate to the current in-memory shape. One-way: version 1 gains an
    /// empty day list, nothing is ever downgraded.
    pub fn migrate(self) -> AppData {
        match self {
            PayloadVersion::V2(data) | PayloadVersion::Unversioned(data) => data,
            PayloadVersion::V1(exercises) => AppData {
                exercises,
                days: Vec::new(),
            },
        }
    }

    /// Whether this payload predates the current schema version.
    pub fn needs_migration(&self) -> bool {
        !matches!(self, PayloadVersion::V2(_))
    }
}

/// Decode raw text into a recognized payload.
///
/// Returns `None` for anything unparseable, non-object, carrying an
/// unrecognized version tag, or failing validation for its declared
/// version. The caller decides what `None` means (corrupt slot, bad
/// import file).
pub fn decode_payload(raw: &str) -> Option<PayloadVersion> {
    let value: Value = serde_json::from_str(raw).ok()?;
    if !value.is_object() {
        return None;
    }

    let version = value.get("version").cloned();
    match version {
        // Permissive legacy path: no version tag, but the current full
        // schema (exercises + days) matches.
        None => serde_json::from_value::<AppData>(value)
            .ok()
            .map(PayloadVersion::Unversioned),
        Some(tag) => match tag.as_u64() {
            Some(v) if v == u64::from(STORAGE_VERSION) => {
                serde_json::from_value::<StoredPayload>(value).ok().map(|p| {
                    PayloadVersion::V2(AppData {
                        exercises: p.exercises,
                        days: p.days,
                    })
                })
            }
            Some(1) => serde_json::from_value::<StoredPayloadV1>(value)
                .ok()
                .map(|p| PayloadVersion::V1(p.exercises)),
            // Non-numeric or unrecognized version tags are corrupt.
            _ => None,
        },
    }
}

/// Encode a dataset as pretty-printed JSON in the current payload shape.
pub fn encode_payload(data: &AppData) -> String {
    // Serialization of these derive-only types cannot fail.
    serde_json::to_string_pretty(&StoredPayload::from_data(data)).unwrap_or_default()
}
