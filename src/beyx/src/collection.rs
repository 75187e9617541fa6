//! The user's owned parts and decks.
//!
//! A collection is a multiset: owning two copies of a blade means two list
//! entries with the same name. Decks reference owned parts by name in up to
//! three slots. This module holds only in-memory state transitions; the
//! persist-after-mutate policy lives in [`crate::manager`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::Category;
use crate::stats::PartStats;

/// One owned part.
///
/// `stats` is an informational copy taken at acquisition time; analysis
/// resolves authoritative values from the catalog by `name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectedPart {
    pub name: String,

    #[serde(default)]
    pub stats: PartStats,
}

impl CollectedPart {
    pub fn new(name: impl Into<String>) -> Self {
        CollectedPart {
            name: name.into(),
            stats: PartStats::default(),
        }
    }

    pub fn with_stats(name: impl Into<String>, stats: PartStats) -> Self {
        CollectedPart {
            name: name.into(),
            stats,
        }
    }
}

/// One blade/ratchet/bit triple inside a deck.
///
/// Fields stay `None` while the combo is being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeybladeSlot {
    pub blade: Option<String>,
    pub ratchet: Option<String>,
    pub bit: Option<String>,
}

impl BeybladeSlot {
    /// The part name this slot uses in the given category, if any.
    pub fn part(&self, category: Category) -> Option<&str> {
        match category {
            Category::Blade => self.blade.as_deref(),
            Category::Ratchet => self.ratchet.as_deref(),
            Category::Bit => self.bit.as_deref(),
        }
    }

    /// True when no part has been assigned yet.
    pub fn is_empty(&self) -> bool {
        self.blade.is_none() && self.ratchet.is_none() && self.bit.is_none()
    }
}

/// Number of combo slots in a deck.
pub const DECK_SLOTS: usize = 3;

/// A named set of exactly three combo slots.
///
/// The persisted shape keys the slots `beyblade1`..`beyblade3`; the struct
/// makes the three-slot shape a compile-time fact instead of a string-keyed
/// map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    #[serde(default)]
    pub beyblade1: Option<BeybladeSlot>,

    #[serde(default)]
    pub beyblade2: Option<BeybladeSlot>,

    #[serde(default)]
    pub beyblade3: Option<BeybladeSlot>,
}

impl Deck {
    /// A deck with all three slots unassigned.
    pub fn empty() -> Self {
        Deck::default()
    }

    /// Slot by zero-based index. Panics if `index >= DECK_SLOTS`.
    pub fn slot(&self, index: usize) -> &Option<BeybladeSlot> {
        match index {
            0 => &self.beyblade1,
            1 => &self.beyblade2,
            2 => &self.beyblade3,
            _ => panic!("deck slot index out of range: {index}"),
        }
    }

    /// Mutable slot by zero-based index. Panics if `index >= DECK_SLOTS`.
    pub fn slot_mut(&mut self, index: usize) -> &mut Option<BeybladeSlot> {
        match index {
            0 => &mut self.beyblade1,
            1 => &mut self.beyblade2,
            2 => &mut self.beyblade3,
            _ => panic!("deck slot index out of range: {index}"),
        }
    }

    /// Iterate over the three slots in order.
    pub fn slots(&self) -> impl Iterator<Item = &Option<BeybladeSlot>> {
        [&self.beyblade1, &self.beyblade2, &self.beyblade3].into_iter()
    }

    /// Find which slot (other than `skip`) already uses a part name in the
    /// given category, case-insensitively. Deck rules forbid the same part
    /// appearing in two combos.
    pub fn find_part_use(
        &self,
        category: Category,
        name: &str,
        skip: Option<usize>,
    ) -> Option<usize> {
        let wanted = name.to_lowercase();
        self.slots().enumerate().find_map(|(i, slot)| {
            if skip == Some(i) {
                return None;
            }
            let used = slot.as_ref()?.part(category)?;
            (used.to_lowercase() == wanted).then_some(i)
        })
    }
}

/// The whole persisted user state: owned parts per category plus decks.
///
/// All four top-level keys are structurally required on deserialize;
/// unknown keys are ignored for forward compatibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub blades: Vec<CollectedPart>,
    pub ratchets: Vec<CollectedPart>,
    pub bits: Vec<CollectedPart>,
    pub decks: BTreeMap<String, Deck>,
}

impl Collection {
    /// Owned parts in one category.
    pub fn parts(&self, category: Category) -> &[CollectedPart] {
        match category {
            Category::Blade => &self.blades,
            Category::Ratchet => &self.ratchets,
            Category::Bit => &self.bits,
        }
    }

    fn parts_mut(&mut self, category: Category) -> &mut Vec<CollectedPart> {
        match category {
            Category::Blade => &mut self.blades,
            Category::Ratchet => &mut self.ratchets,
            Category::Bit => &mut self.bits,
        }
    }

    /// Total number of owned parts across all categories, duplicates
    /// counted.
    pub fn total_parts(&self) -> usize {
        self.blades.len() + self.ratchets.len() + self.bits.len()
    }

    /// Case-insensitive ownership check.
    pub fn contains(&self, category: Category, name: &str) -> bool {
        let wanted = name.to_lowercase();
        self.parts(category)
            .iter()
            .any(|p| p.name.to_lowercase() == wanted)
    }

    /// Append an owned part. Duplicates are allowed - each call adds one
    /// copy.
    pub fn add_part(&mut self, category: Category, part: CollectedPart) {
        self.parts_mut(category).push(part);
    }

    /// Remove one copy of a part by name, case-insensitively.
    ///
    /// When duplicates exist the last-added copy goes first. Returns the
    /// removed part, or `None` if nothing matched.
    pub fn remove_part(&mut self, category: Category, name: &str) -> Option<CollectedPart> {
        let wanted = name.to_lowercase();
        let parts = self.parts_mut(category);
        let index = parts
            .iter()
            .rposition(|p| p.name.to_lowercase() == wanted)?;
        Some(parts.remove(index))
    }

    /// Distinct owned names in one category with their copy counts, in
    /// name order.
    pub fn part_counts(&self, category: Category) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for part in self.parts(category) {
            *counts.entry(part.name.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Create an empty deck under `name`.
    ///
    /// Idempotent: an existing deck is left untouched and `false` is
    /// returned.
    pub fn create_deck(&mut self, name: &str) -> bool {
        if self.decks.contains_key(name) {
            return false;
        }
        self.decks.insert(name.to_string(), Deck::empty());
        true
    }

    /// Delete a deck. Deleting an absent name is a no-op returning `false`.
    pub fn delete_deck(&mut self, name: &str) -> bool {
        self.decks.remove(name).is_some()
    }

    /// Set a deck's slots unconditionally, creating the deck if absent.
    pub fn update_deck(&mut self, name: &str, deck: Deck) {
        self.decks.insert(name.to_string(), deck);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(blade: &str, ratchet: &str, bit: &str) -> BeybladeSlot {
        BeybladeSlot {
            blade: Some(blade.to_string()),
            ratchet: Some(ratchet.to_string()),
            bit: Some(bit.to_string()),
        }
    }

    #[test]
    fn test_create_deck_idempotent() {
        let mut collection = Collection::default();
        assert!(collection.create_deck("Tournament"));

        let mut deck = Deck::empty();
        deck.beyblade1 = Some(slot("Dran Sword", "3-60", "Flat (F)"));
        collection.update_deck("Tournament", deck.clone());

        // Second create must not reset the existing deck.
        assert!(!collection.create_deck("Tournament"));
        assert_eq!(collection.decks["Tournament"], deck);
    }

    #[test]
    fn test_delete_absent_deck_is_noop() {
        let mut collection = Collection::default();
        collection.create_deck("A");
        assert!(!collection.delete_deck("B"));
        assert_eq!(collection.decks.len(), 1);
        assert!(collection.delete_deck("A"));
        assert!(collection.decks.is_empty());
    }

    #[test]
    fn test_update_deck_overwrites_and_creates() {
        let mut collection = Collection::default();
        let mut deck = Deck::empty();
        deck.beyblade2 = Some(slot("Hells Scythe", "4-60", "Ball (B)"));

        // No prior create_deck needed.
        collection.update_deck("Fresh", deck.clone());
        assert_eq!(collection.decks["Fresh"], deck);

        collection.update_deck("Fresh", Deck::empty());
        assert_eq!(collection.decks["Fresh"], Deck::empty());
    }

    #[test]
    fn test_remove_part_takes_last_copy() {
        let mut collection = Collection::default();
        let mut first = CollectedPart::new("Dran Sword");
        first.stats.attack = 1;
        let mut second = CollectedPart::new("Dran Sword");
        second.stats.attack = 2;
        collection.add_part(Category::Blade, first);
        collection.add_part(Category::Blade, second);

        let removed = collection.remove_part(Category::Blade, "dran sword").unwrap();
        assert_eq!(removed.stats.attack, 2);
        assert_eq!(collection.blades.len(), 1);

        assert!(collection.remove_part(Category::Blade, "missing").is_none());
    }

    #[test]
    fn test_part_counts_collapse_duplicates() {
        let mut collection = Collection::default();
        collection.add_part(Category::Bit, CollectedPart::new("Flat (F)"));
        collection.add_part(Category::Bit, CollectedPart::new("Flat (F)"));
        collection.add_part(Category::Bit, CollectedPart::new("Ball (B)"));

        let counts = collection.part_counts(Category::Bit);
        assert_eq!(counts["Flat (F)"], 2);
        assert_eq!(counts["Ball (B)"], 1);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_deck_find_part_use() {
        let mut deck = Deck::empty();
        deck.beyblade1 = Some(slot("Dran Sword", "3-60", "Flat (F)"));
        deck.beyblade3 = Some(slot("Hells Scythe", "4-60", "Ball (B)"));

        assert_eq!(deck.find_part_use(Category::Blade, "dran sword", None), Some(0));
        assert_eq!(
            deck.find_part_use(Category::Blade, "Dran Sword", Some(0)),
            None
        );
        assert_eq!(deck.find_part_use(Category::Bit, "Ball (B)", None), Some(2));
        assert_eq!(deck.find_part_use(Category::Ratchet, "5-60", None), None);
    }

    #[test]
    fn test_collection_roundtrip() {
        let mut collection = Collection::default();
        collection.add_part(Category::Blade, CollectedPart::new("Dran Sword"));
        collection.add_part(Category::Blade, CollectedPart::new("Dran Sword"));
        collection.add_part(Category::Ratchet, CollectedPart::new("3-60"));
        collection.create_deck("Main");
        let mut deck = Deck::empty();
        deck.beyblade1 = Some(slot("Dran Sword", "3-60", "Flat (F)"));
        collection.update_deck("Main", deck);

        let json = serde_json::to_string(&collection).unwrap();
        let back: Collection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, collection);
    }

    #[test]
    fn test_collection_requires_top_level_keys() {
        // `decks` missing: structurally invalid.
        let err = serde_json::from_str::<Collection>(
            r#"{"blades": [], "ratchets": [], "bits": []}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_collection_ignores_unknown_keys() {
        let collection: Collection = serde_json::from_str(
            r#"{
                "blades": [{"name": "Dran Sword", "stats": {}, "acquired": "2024-01-01"}],
                "ratchets": [],
                "bits": [],
                "decks": {"Main": {"beyblade1": null, "beyblade2": null, "beyblade3": null, "note": "x"}},
                "app_version": 9
            }"#,
        )
        .unwrap();
        assert_eq!(collection.blades[0].name, "Dran Sword");
        assert_eq!(collection.decks["Main"], Deck::empty());
    }

    #[test]
    fn test_slot_json_shape() {
        let s = slot("Dran Sword", "3-60", "Flat (F)");
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["blade"], "Dran Sword");
        assert_eq!(json["ratchet"], "3-60");
        assert_eq!(json["bit"], "Flat (F)");

        let partial: BeybladeSlot =
            serde_json::from_str(r#"{"blade": "Dran Sword", "ratchet": null, "bit": null}"#)
                .unwrap();
        assert_eq!(partial.blade.as_deref(), Some("Dran Sword"));
        assert!(partial.ratchet.is_none());
    }
}
