//! File-backed persistence for the catalog and the collection.
//!
//! Two resources with different policies:
//!
//! - the **catalog** is bundled and read-only; an unreadable or malformed
//!   catalog degrades to an empty one and never fails the caller;
//! - the **collection** lives in app-private data storage, falling back to
//!   a bundled default when nothing has been saved yet; malformed
//!   collection JSON is a fatal load error so callers can decide what to
//!   do about it.
//!
//! Saves rewrite the whole blob via a temp file and rename, taking a
//! hash-tracked backup of the previous state first.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::backup::{self, BackupError};
use crate::catalog::Catalog;
use crate::collection::Collection;

/// Bundled catalog resource name.
pub const CATALOG_FILE: &str = "beyblade_parts_db.json";

/// Collection blob name, used both for the bundled default and the saved
/// copy.
pub const COLLECTION_FILE: &str = "beyblade_collection.json";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed collection JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("backup error: {0}")]
    Backup(#[from] BackupError),
}

/// Paths to the bundled resources and the durable collection blob.
#[derive(Debug, Clone)]
pub struct Store {
    share_dir: PathBuf,
    data_dir: PathBuf,
}

impl Store {
    /// A store reading bundled resources from `share_dir` and keeping the
    /// saved collection under `data_dir`.
    pub fn new(share_dir: impl Into<PathBuf>, data_dir: impl Into<PathBuf>) -> Self {
        Store {
            share_dir: share_dir.into(),
            data_dir: data_dir.into(),
        }
    }

    /// Bundled read-only catalog resource.
    pub fn catalog_path(&self) -> PathBuf {
        self.share_dir.join(CATALOG_FILE)
    }

    /// Bundled default collection, used until the first save.
    pub fn default_collection_path(&self) -> PathBuf {
        self.share_dir.join(COLLECTION_FILE)
    }

    /// Durable saved collection blob.
    pub fn collection_path(&self) -> PathBuf {
        self.data_dir.join(COLLECTION_FILE)
    }

    /// Load the bundled catalog.
    ///
    /// Never fails: any read or parse problem degrades to an empty catalog
    /// with a warning, leaving analysis over uncataloged parts at zero.
    pub fn load_catalog(&self) -> Catalog {
        let path = self.catalog_path();
        match read_json::<Catalog>(&path) {
            Ok(catalog) => {
                debug!(path = %path.display(), parts = catalog.len(), "catalog loaded");
                catalog
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "catalog unavailable, using empty catalog");
                Catalog::default()
            }
        }
    }

    /// Load the collection, preferring a previously saved blob over the
    /// bundled default.
    ///
    /// Unknown JSON keys are tolerated; a missing top-level key or
    /// malformed JSON is fatal to this call.
    pub fn load_collection(&self) -> Result<Collection, StoreError> {
        let saved = self.collection_path();
        let path = if saved.exists() {
            saved
        } else {
            debug!("no saved collection, loading bundled default");
            self.default_collection_path()
        };
        read_json(&path)
    }

    /// Serialize and replace the saved collection blob.
    ///
    /// Writes to a temp file and renames over the target. The previous
    /// on-disk bytes are handed to the backup module first, and the new
    /// bytes are recorded as our own save; backup failures are logged but
    /// never block the save.
    pub fn save_collection(&self, collection: &Collection) -> Result<(), StoreError> {
        fs::create_dir_all(&self.data_dir)?;
        let path = self.collection_path();

        if let Ok(previous) = fs::read(&path) {
            if let Err(err) = backup::backup_if_needed(&path, &previous) {
                warn!(path = %path.display(), %err, "collection backup failed");
            }
        }

        let json = serde_json::to_string_pretty(collection)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json.as_bytes())?;
        fs::rename(&tmp, &path)?;

        if let Err(err) = backup::note_saved_bytes(&path, json.as_bytes()) {
            warn!(path = %path.display(), %err, "backup metadata update failed");
        }

        Ok(())
    }

    /// Replace the saved collection with its backup copy.
    pub fn restore_backup(&self) -> Result<(), StoreError> {
        backup::restore_backup(&self.collection_path())?;
        Ok(())
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::CollectedPart;
    use crate::catalog::Category;

    const EMPTY_COLLECTION: &str = r#"{"blades": [], "ratchets": [], "bits": [], "decks": {}}"#;

    fn store_with_share(catalog_json: Option<&str>) -> (tempfile::TempDir, Store) {
        let temp = tempfile::tempdir().unwrap();
        let share = temp.path().join("share");
        let data = temp.path().join("data");
        fs::create_dir_all(&share).unwrap();
        if let Some(json) = catalog_json {
            fs::write(share.join(CATALOG_FILE), json).unwrap();
        }
        fs::write(share.join(COLLECTION_FILE), EMPTY_COLLECTION).unwrap();
        let store = Store::new(&share, &data);
        (temp, store)
    }

    #[test]
    fn test_load_catalog_degrades_on_missing_file() {
        let (_temp, store) = store_with_share(None);
        assert_eq!(store.load_catalog(), Catalog::default());
    }

    #[test]
    fn test_load_catalog_degrades_on_malformed_json() {
        let (_temp, store) = store_with_share(Some("{not json"));
        assert_eq!(store.load_catalog(), Catalog::default());

        // Valid JSON, wrong shape: also degrades.
        let (_temp, store) = store_with_share(Some(r#"{"blades": {}}"#));
        assert_eq!(store.load_catalog(), Catalog::default());
    }

    #[test]
    fn test_load_catalog() {
        let (_temp, store) = store_with_share(Some(
            r#"{"blades": {"Dran Sword": {"attack": 60}}, "ratchets": {}, "bits": {}}"#,
        ));
        let catalog = store.load_catalog();
        assert_eq!(
            catalog
                .resolve(Category::Blade, "Dran Sword")
                .map(|s| s.attack),
            Some(60)
        );
    }

    #[test]
    fn test_load_collection_uses_bundled_default() {
        let (_temp, store) = store_with_share(None);
        let collection = store.load_collection().unwrap();
        assert_eq!(collection, Collection::default());
    }

    #[test]
    fn test_load_collection_prefers_saved_blob() {
        let (_temp, store) = store_with_share(None);

        let mut collection = Collection::default();
        collection.add_part(Category::Blade, CollectedPart::new("Dran Sword"));
        store.save_collection(&collection).unwrap();

        let loaded = store.load_collection().unwrap();
        assert_eq!(loaded, collection);
    }

    #[test]
    fn test_load_collection_malformed_saved_blob_is_fatal() {
        let (_temp, store) = store_with_share(None);
        fs::create_dir_all(store.collection_path().parent().unwrap()).unwrap();
        fs::write(store.collection_path(), "{broken").unwrap();

        assert!(matches!(
            store.load_collection(),
            Err(StoreError::Malformed(_))
        ));
    }

    #[test]
    fn test_load_collection_missing_required_key_is_fatal() {
        let (_temp, store) = store_with_share(None);
        fs::create_dir_all(store.collection_path().parent().unwrap()).unwrap();
        fs::write(
            store.collection_path(),
            r#"{"blades": [], "ratchets": [], "bits": []}"#,
        )
        .unwrap();

        assert!(matches!(
            store.load_collection(),
            Err(StoreError::Malformed(_))
        ));
    }

    #[test]
    fn test_save_roundtrip() {
        let (_temp, store) = store_with_share(None);

        let mut collection = Collection::default();
        collection.add_part(Category::Ratchet, CollectedPart::new("3-60"));
        collection.create_deck("Main");
        store.save_collection(&collection).unwrap();

        assert_eq!(store.load_collection().unwrap(), collection);
        // No temp file left behind.
        assert!(!store.collection_path().with_extension("json.tmp").exists());
    }

    #[test]
    fn test_save_backs_up_previous_state() {
        let (_temp, store) = store_with_share(None);

        let mut first = Collection::default();
        first.add_part(Category::Blade, CollectedPart::new("Dran Sword"));
        store.save_collection(&first).unwrap();

        let second = Collection::default();
        store.save_collection(&second).unwrap();
        assert_eq!(store.load_collection().unwrap(), second);

        store.restore_backup().unwrap();
        assert_eq!(store.load_collection().unwrap(), first);
    }
}
