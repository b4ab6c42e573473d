//! Encrypted save-file storage
//!
//! Persists the game state record as Base64-encoded AES-CBC ciphertext in
//! a single file at a well-known path, with an on-demand byte-copy backup
//! at a sibling path. Every operation is a complete transaction; a mutex
//! serializes all file access so no two operations touch the paths
//! concurrently.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use parking_lot::Mutex;
use thiserror::Error;

use super::crypto;
use super::record::GameStateRecord;

/// Despite the name, the on-disk bytes are Base64 ciphertext, not JSON
const FILE_NAME: &str = "gameData.json";
const BACKUP_SUFFIX: &str = ".backup";

/// Save storage error taxonomy.
///
/// All variants are recoverable by the caller. On `CorruptSave` or
/// `MalformedData` from a load, the documented recovery is to treat the
/// save as absent and start fresh.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("failed to write save data: {0}")]
    StorageWrite(#[source] io::Error),
    #[error("save file is corrupt: {0}")]
    CorruptSave(String),
    #[error("save data is malformed: {0}")]
    MalformedData(#[source] serde_json::Error),
    #[error("no save file to back up")]
    NoSaveToBackup,
}

/// Get the platform-appropriate persistent save directory
pub fn default_directory() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "greenside", "Greenside") {
        proj_dirs.data_local_dir().to_path_buf()
    } else {
        // Fallback to current directory
        PathBuf::from("./saves")
    }
}

/// Encrypted persistence for one [`GameStateRecord`].
///
/// The store owns the live save path and its backup sibling; nothing else
/// in the game writes either file.
pub struct SecureSaveStore {
    save_path: PathBuf,
    backup_path: PathBuf,
    io_lock: Mutex<()>,
}

impl SecureSaveStore {
    /// Create a store rooted at an explicit directory
    pub fn new(directory: impl AsRef<Path>) -> Self {
        let save_path = directory.as_ref().join(FILE_NAME);
        let mut backup_name = FILE_NAME.to_string();
        backup_name.push_str(BACKUP_SUFFIX);
        let backup_path = directory.as_ref().join(backup_name);
        Self {
            save_path,
            backup_path,
            io_lock: Mutex::new(()),
        }
    }

    /// Create a store at the platform default location
    pub fn at_default_location() -> Self {
        Self::new(default_directory())
    }

    /// The well-known path of the live save file
    pub fn save_path(&self) -> &Path {
        &self.save_path
    }

    /// Serialize, encrypt, and write the record in one shot.
    ///
    /// Failures are reported, not retried; the caller decides whether a
    /// failed save matters.
    pub fn save(&self, record: &GameStateRecord) -> Result<(), SaveError> {
        let json = serde_json::to_vec(record).map_err(SaveError::MalformedData)?;
        let encoded = BASE64.encode(crypto::encrypt(&json));

        let _guard = self.io_lock.lock();
        if let Some(parent) = self.save_path.parent() {
            fs::create_dir_all(parent).map_err(SaveError::StorageWrite)?;
        }
        fs::write(&self.save_path, encoded).map_err(SaveError::StorageWrite)?;

        log::info!("Game state saved to {:?}", self.save_path);
        Ok(())
    }

    /// Read and decode the record.
    ///
    /// `Ok(None)` is the expected first-run state (no file). A file that
    /// cannot be decoded yields `CorruptSave`; one that decrypts to
    /// unexpected JSON yields `MalformedData`. Neither ever produces a
    /// bogus record.
    pub fn load(&self) -> Result<Option<GameStateRecord>, SaveError> {
        let _guard = self.io_lock.lock();
        let encoded = match fs::read_to_string(&self.save_path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(SaveError::CorruptSave(format!(
                    "unreadable save file: {}",
                    e
                )))
            }
        };

        let ciphertext = BASE64
            .decode(encoded.trim())
            .map_err(|e| SaveError::CorruptSave(format!("invalid Base64: {}", e)))?;
        let json = crypto::decrypt(&ciphertext)
            .map_err(|_| SaveError::CorruptSave("decryption failed".to_string()))?;
        let record = serde_json::from_slice(&json).map_err(SaveError::MalformedData)?;

        log::info!("Game state loaded from {:?}", self.save_path);
        Ok(Some(record))
    }

    /// Remove the save file; no-op when absent
    pub fn delete(&self) -> Result<(), SaveError> {
        let _guard = self.io_lock.lock();
        match fs::remove_file(&self.save_path) {
            Ok(()) => {
                log::info!("Deleted save file {:?}", self.save_path);
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SaveError::StorageWrite(e)),
        }
    }

    /// Check whether a live save file exists
    pub fn exists(&self) -> bool {
        self.save_path.exists()
    }

    /// Byte-copy the live save file over the backup path
    pub fn backup(&self) -> Result<(), SaveError> {
        let _guard = self.io_lock.lock();
        if !self.save_path.exists() {
            return Err(SaveError::NoSaveToBackup);
        }
        fs::copy(&self.save_path, &self.backup_path).map_err(SaveError::StorageWrite)?;
        log::info!("Save file backed up to {:?}", self.backup_path);
        Ok(())
    }

    /// Copy the backup over the live save path.
    ///
    /// Returns whether a restore occurred; `Ok(false)` when no backup
    /// exists.
    pub fn restore_backup(&self) -> Result<bool, SaveError> {
        let _guard = self.io_lock.lock();
        if !self.backup_path.exists() {
            return Ok(false);
        }
        fs::copy(&self.backup_path, &self.save_path).map_err(SaveError::StorageWrite)?;
        log::info!("Save file restored from {:?}", self.backup_path);
        Ok(true)
    }
}
