//! Greenside core - localization and persisted save data
//!
//! The engine-independent heart of the Greenside golf prototype:
//! a CSV-driven localization table with atomic hot reload, and an
//! encrypted JSON save-file store with backup/restore.

pub mod localization;
pub mod save;

// Re-export commonly used types
pub use localization::{LoadReport, LocalizationTable};
pub use save::{GameStateRecord, SaveError, SecureSaveStore};
