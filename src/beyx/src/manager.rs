//! High-level collection manager.
//!
//! [`BeybladeManager`] is the single owner of the mutable collection and
//! the one place that pairs every in-memory mutation with a save. Front
//! ends hold one manager, read its state, and call its operations; there
//! is no background work and no locking because there is exactly one
//! writer.

use tracing::warn;

use crate::catalog::{Catalog, Category};
use crate::collection::{CollectedPart, Collection, Deck};
use crate::query::{self, ComboSuggestion, StatDiff};
use crate::stats::Stat;
use crate::store::{Store, StoreError};

/// Owns the immutable catalog, the mutable collection, and the store that
/// persists it.
///
/// Every mutation that changes state is immediately written through. A
/// failed save is logged and swallowed: the in-memory state stays
/// authoritative until the process exits, which loses durability for that
/// write but never the session.
#[derive(Debug)]
pub struct BeybladeManager {
    catalog: Catalog,
    collection: Collection,
    store: Store,
}

impl BeybladeManager {
    /// Load the catalog (degrading to empty if unavailable) and the
    /// collection (fatal if malformed) from `store`.
    pub fn open(store: Store) -> Result<Self, StoreError> {
        let catalog = store.load_catalog();
        let collection = store.load_collection()?;
        Ok(BeybladeManager {
            catalog,
            collection,
            store,
        })
    }

    /// The reference catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The owned collection, including decks.
    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    /// Re-read the collection from the store, discarding in-memory state.
    pub fn reload(&mut self) -> Result<(), StoreError> {
        self.collection = self.store.load_collection()?;
        Ok(())
    }

    fn persist(&self) {
        if let Err(err) = self.store.save_collection(&self.collection) {
            warn!(%err, "collection save failed; in-memory state retained");
        }
    }

    /// Add one owned copy of a part. Duplicates are allowed.
    pub fn add_part(&mut self, category: Category, part: CollectedPart) {
        self.collection.add_part(category, part);
        self.persist();
    }

    /// Remove one owned copy of a part by name (case-insensitive, last
    /// copy first). Returns the removed part if anything matched.
    pub fn remove_part(&mut self, category: Category, name: &str) -> Option<CollectedPart> {
        let removed = self.collection.remove_part(category, name);
        if removed.is_some() {
            self.persist();
        }
        removed
    }

    /// Create an empty deck. Creating an existing name is a no-op and
    /// does not touch storage.
    pub fn create_deck(&mut self, name: &str) -> bool {
        let created = self.collection.create_deck(name);
        if created {
            self.persist();
        }
        created
    }

    /// Delete a deck and persist. Deleting an absent name leaves the
    /// collection unchanged but still writes through.
    pub fn delete_deck(&mut self, name: &str) -> bool {
        let deleted = self.collection.delete_deck(name);
        self.persist();
        deleted
    }

    /// Set a deck's slots unconditionally, creating the deck if absent.
    pub fn update_deck(&mut self, name: &str, deck: Deck) {
        self.collection.update_deck(name, deck);
        self.persist();
    }

    /// Best owned part per category for one stat; `"N/A"` where a
    /// category is empty.
    pub fn suggest_combo(&self, stat: Stat) -> ComboSuggestion {
        query::suggest_combo(&self.catalog, &self.collection, stat)
    }

    /// The owned part with the highest catalog value for one stat.
    pub fn best_part_for_stat(&self, category: Category, stat: Stat) -> Option<&str> {
        query::best_part_for_stat(&self.catalog, &self.collection, category, stat)
    }

    /// Distinct owned parts ordered by a stat, best first.
    pub fn rank_parts(&self, category: Category, stat: Stat) -> Vec<(String, u32)> {
        query::rank_parts(&self.catalog, &self.collection, category, stat)
    }

    /// Stat-by-stat comparison of two owned parts.
    pub fn compare_parts(&self, category: Category, left: &str, right: &str) -> Option<StatDiff> {
        query::compare_parts(&self.catalog, &self.collection, category, left, right)
    }
}
