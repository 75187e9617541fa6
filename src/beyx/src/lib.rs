//! # beyx
//!
//! Beyblade X collection library - part catalog, owned inventory, decks,
//! and comparative analysis.
//!
//! This library provides functionality to:
//! - Load the read-only part catalog (blades, ratchets, bits) from a
//!   bundled JSON resource
//! - Load and save the user's owned parts and decks as a JSON blob, with
//!   hash-tracked backups
//! - Manage decks of three blade/ratchet/bit combos
//! - Rank owned parts, compare them, and suggest the best combo for a stat
//!
//! ## Example
//!
//! ```no_run
//! use beyx::{BeybladeManager, Category, CollectedPart, Stat, Store};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Store::new("share", "/var/lib/beyx");
//! let mut manager = BeybladeManager::open(store)?;
//!
//! manager.add_part(Category::Blade, CollectedPart::new("Dran Sword"));
//! manager.create_deck("Tournament");
//!
//! let combo = manager.suggest_combo(Stat::Attack);
//! println!("Blade: {}", combo.blade);
//!
//! for (name, value) in manager.rank_parts(Category::Blade, Stat::Attack) {
//!     println!("{name}: {value}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod backup;
pub mod catalog;
pub mod collection;
pub mod manager;
pub mod query;
pub mod stats;
pub mod store;

// Re-export commonly used items
#[doc(inline)]
pub use backup::{backup_if_needed, restore_backup, BackupError};
#[doc(inline)]
pub use catalog::{Catalog, Category, UnknownCategory, ALL_CATEGORIES};
#[doc(inline)]
pub use collection::{BeybladeSlot, CollectedPart, Collection, Deck, DECK_SLOTS};
#[doc(inline)]
pub use manager::BeybladeManager;
#[doc(inline)]
pub use query::{
    best_part_for_stat, compare_parts, rank_parts, suggest_combo, ComboSuggestion, StatDiff,
    NO_SUGGESTION,
};
#[doc(inline)]
pub use stats::{stat_value, PartStats, Stat, UnknownStat, ALL_STATS};
#[doc(inline)]
pub use store::{Store, StoreError, CATALOG_FILE, COLLECTION_FILE};
