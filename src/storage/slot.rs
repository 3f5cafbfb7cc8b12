//! The persistent key-value slot backing the template data.
//!
//! The whole application persists through exactly one slot entry. The
//! adapter never reaches for an ambient global; whichever slot it is
//! constructed with is the one it uses.

use std::fs;
use std::path::PathBuf;

/// Fixed key for the persisted template data.
pub const STORAGE_KEY: &str = "workout-template-data";

/// Errors raised by slot I/O.
#[derive(Debug, thiserror::Error)]
pub enum SlotError {
    #[error("IO error: {0}")]
    Io(String),
}

/// A single persistent key-value slot.
pub trait StorageSlot {
    /// Read the raw entry, if one exists.
    fn read(&self) -> Result<Option<String>, SlotError>;

    /// Write the raw entry, replacing any existing one.
    fn write(&mut self, raw: &str) -> Result<(), SlotError>;

    /// Remove the entry entirely. Removing an absent entry is not an error.
    fn clear(&mut self) -> Result<(), SlotError>;
}

/// File-backed slot: one JSON file named after [`STORAGE_KEY`].
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Create a slot at an explicit file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a slot in the per-user application data directory.
    pub fn in_data_dir() -> Self {
        Self::new(get_data_dir().join(format!("{STORAGE_KEY}.json")))
    }

    /// The backing file path.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl StorageSlot for FileSlot {
    fn read(&self) -> Result<Option<String>, SlotError> {
        if !self.path.exists() {
            return Ok(None);
        }

        // Lossy decoding: a file with broken encoding still reaches the
        // schema layer, which rejects and erases it as corrupt.
        fs::read(&self.path)
            .map(|bytes| Some(String::from_utf8_lossy(&bytes).into_owned()))
            .map_err(|e| SlotError::Io(e.to_string()))
    }

    fn write(&mut self, raw: &str) -> Result<(), SlotError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SlotError::Io(e.to_string()))?;
        }

        fs::write(&self.path, raw).map_err(|e| SlotError::Io(e.to_string()))
    }

    fn clear(&mut self) -> Result<(), SlotError> {
        if !self.path.exists() {
            return Ok(());
        }

        fs::remove_file(&self.path).map_err(|e| SlotError::Io(e.to_string()))
    }
}

/// In-memory slot for tests and headless use.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    entry: Option<String>,
}

impl MemorySlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot pre-populated with a raw entry.
    pub fn with_entry(raw: impl Into<String>) -> Self {
        Self {
            entry: Some(raw.into()),
        }
    }

    /// The current raw entry, if any.
    pub fn entry(&self) -> Option<&str> {
        self.entry.as_deref()
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>, SlotError> {
        Ok(self.entry.clone())
    }

    fn write(&mut self, raw: &str) -> Result<(), SlotError> {
        self.entry = Some(raw.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SlotError> {
        self.entry = None;
        Ok(())
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "repsheet", "RepSheet")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
