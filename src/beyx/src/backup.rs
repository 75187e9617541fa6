//! Backup of the collection blob.
//!
//! The collection is rewritten in full on every mutation, so one bad write
//! or accidental wipe would lose everything. The save path already has both
//! the old and the new bytes in hand, so the API here works on bytes rather
//! than re-reading files: before replacing on-disk state we have never seen,
//! copy it aside; bytes we wrote ourselves (or restored) are tracked by hash
//! in a sidecar and never trigger another copy.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackupError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no backup exists at {}", .0.display())]
    NoBackup(PathBuf),
}

/// Sidecar record of which collection bytes the backup already protects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupMetadata {
    /// Hash of the bytes the backup was taken from.
    pub original_hash: String,

    /// Hash of the bytes we last wrote ourselves.
    pub last_save_hash: String,
}

impl BackupMetadata {
    fn for_backup(hash: String) -> Self {
        BackupMetadata {
            original_hash: hash.clone(),
            last_save_hash: hash,
        }
    }

    /// Whether `hash` is a state this backup already accounts for: either
    /// the backed-up bytes themselves or a save we made since.
    fn tracks(&self, hash: &str) -> bool {
        hash == self.original_hash || hash == self.last_save_hash
    }
}

/// SHA-256 of a byte slice, hex-encoded.
pub fn hash_bytes(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Backup and metadata sidecar paths for a collection file.
pub fn backup_paths(collection_path: &Path) -> (PathBuf, PathBuf) {
    let backup_path = collection_path.with_extension("json.bak");
    let metadata_path = collection_path.with_extension("json.bak.json");
    (backup_path, metadata_path)
}

fn read_metadata(metadata_path: &Path) -> Result<Option<BackupMetadata>, BackupError> {
    if !metadata_path.exists() {
        return Ok(None);
    }
    let data = fs::read_to_string(metadata_path)?;
    Ok(Some(serde_json::from_str(&data)?))
}

fn write_metadata(metadata_path: &Path, metadata: &BackupMetadata) -> Result<(), BackupError> {
    fs::write(metadata_path, serde_json::to_string_pretty(metadata)?)?;
    Ok(())
}

/// Back up `current` (the bytes now on disk at `collection_path`, which
/// the caller has already read) unless the existing backup covers them.
///
/// A fresh backup is taken when none exists, or when `current` matches
/// neither the backed-up bytes nor our own last save - meaning the file
/// was replaced out of band. A backup with no readable sidecar is left
/// alone rather than overwritten. Returns whether a new backup was
/// written.
pub fn backup_if_needed(collection_path: &Path, current: &[u8]) -> Result<bool, BackupError> {
    let (backup_path, metadata_path) = backup_paths(collection_path);
    let current_hash = hash_bytes(current);

    if backup_path.exists() {
        match read_metadata(&metadata_path)? {
            Some(metadata) if metadata.tracks(&current_hash) => return Ok(false),
            // No sidecar: keep whatever backup is there.
            None => return Ok(false),
            Some(_) => {}
        }
    }

    fs::write(&backup_path, current)?;
    write_metadata(&metadata_path, &BackupMetadata::for_backup(current_hash))?;
    Ok(true)
}

/// Record that `saved` are bytes we wrote ourselves, so the next
/// [`backup_if_needed`] over them is a no-op.
pub fn note_saved_bytes(collection_path: &Path, saved: &[u8]) -> Result<(), BackupError> {
    let (_, metadata_path) = backup_paths(collection_path);
    let hash = hash_bytes(saved);

    let mut metadata = read_metadata(&metadata_path)?
        .unwrap_or_else(|| BackupMetadata::for_backup(hash.clone()));
    metadata.last_save_hash = hash;
    write_metadata(&metadata_path, &metadata)
}

/// Copy the backup over the live collection file.
pub fn restore_backup(collection_path: &Path) -> Result<(), BackupError> {
    let (backup_path, _) = backup_paths(collection_path);
    if !backup_path.exists() {
        return Err(BackupError::NoBackup(backup_path));
    }

    let bytes = fs::read(&backup_path)?;
    fs::write(collection_path, &bytes)?;
    // The restored bytes are now a state of our own making.
    note_saved_bytes(collection_path, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection_path(temp: &tempfile::TempDir) -> PathBuf {
        temp.path().join("beyblade_collection.json")
    }

    #[test]
    fn test_hash_bytes() {
        let hash = hash_bytes(b"{}");
        assert_eq!(hash.len(), 64); // SHA-256 is 32 bytes = 64 hex chars
        assert_eq!(hash, hash_bytes(b"{}"));
        assert_ne!(hash, hash_bytes(b"[]"));
    }

    #[test]
    fn test_backup_paths() {
        let path = Path::new("/tmp/beyblade_collection.json");
        let (backup, metadata) = backup_paths(path);

        assert_eq!(backup, PathBuf::from("/tmp/beyblade_collection.json.bak"));
        assert_eq!(
            metadata,
            PathBuf::from("/tmp/beyblade_collection.json.bak.json")
        );
    }

    #[test]
    fn test_first_backup_is_taken() {
        let temp = tempfile::tempdir().unwrap();
        let path = collection_path(&temp);
        fs::write(&path, b"original").unwrap();

        assert!(backup_if_needed(&path, b"original").unwrap());

        let (backup_path, _) = backup_paths(&path);
        assert_eq!(fs::read(&backup_path).unwrap(), b"original");
    }

    #[test]
    fn test_tracked_bytes_skip_backup() {
        let temp = tempfile::tempdir().unwrap();
        let path = collection_path(&temp);
        fs::write(&path, b"original").unwrap();
        backup_if_needed(&path, b"original").unwrap();

        // The backed-up bytes themselves.
        assert!(!backup_if_needed(&path, b"original").unwrap());

        // Bytes we saved ourselves since.
        note_saved_bytes(&path, b"edited").unwrap();
        assert!(!backup_if_needed(&path, b"edited").unwrap());
    }

    #[test]
    fn test_foreign_bytes_take_fresh_backup() {
        let temp = tempfile::tempdir().unwrap();
        let path = collection_path(&temp);
        backup_if_needed(&path, b"original").unwrap();
        note_saved_bytes(&path, b"edited").unwrap();

        // Matches neither tracked hash: the user replaced the file.
        assert!(backup_if_needed(&path, b"foreign").unwrap());

        let (backup_path, _) = backup_paths(&path);
        assert_eq!(fs::read(&backup_path).unwrap(), b"foreign");
    }

    #[test]
    fn test_backup_without_sidecar_is_preserved() {
        let temp = tempfile::tempdir().unwrap();
        let path = collection_path(&temp);
        let (backup_path, _) = backup_paths(&path);
        fs::write(&backup_path, b"precious").unwrap();

        assert!(!backup_if_needed(&path, b"anything").unwrap());
        assert_eq!(fs::read(&backup_path).unwrap(), b"precious");
    }

    #[test]
    fn test_restore_backup() {
        let temp = tempfile::tempdir().unwrap();
        let path = collection_path(&temp);
        fs::write(&path, b"original").unwrap();
        backup_if_needed(&path, b"original").unwrap();

        fs::write(&path, b"clobbered").unwrap();
        restore_backup(&path).unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"original");
        // The restored state is tracked: no new backup wanted for it.
        assert!(!backup_if_needed(&path, b"original").unwrap());
    }

    #[test]
    fn test_restore_without_backup_errors() {
        let temp = tempfile::tempdir().unwrap();
        let path = collection_path(&temp);
        fs::write(&path, b"data").unwrap();

        assert!(matches!(
            restore_backup(&path),
            Err(BackupError::NoBackup(_))
        ));
    }
}
