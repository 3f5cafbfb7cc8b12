//! Storage module: versioned persistence of the template data.

pub mod schema;
pub mod slot;
pub mod store;

pub use schema::{PayloadVersion, StoredPayload, STORAGE_VERSION};
pub use slot::{FileSlot, MemorySlot, SlotError, StorageSlot, STORAGE_KEY};
pub use store::TemplateStore;
