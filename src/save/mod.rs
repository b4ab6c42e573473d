//! Save/load system
//!
//! Encrypted JSON persistence for the game state, with backup and restore.

mod crypto;
pub mod record;
pub mod store;

pub use record::{GameStateRecord, Vec2, Vec3};
pub use store::{default_directory, SaveError, SecureSaveStore};
