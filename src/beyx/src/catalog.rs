//! The read-only part catalog.
//!
//! The catalog is the reference database of every definable part, loaded
//! once from a bundled JSON resource and shared immutably for the life of
//! the process. Owned parts carry a stats copy for display, but analysis
//! always resolves authoritative values through the catalog.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::stats::PartStats;

/// The three part categories a Beyblade X combo is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Blade,
    Ratchet,
    Bit,
}

/// All categories in assembly order.
pub const ALL_CATEGORIES: &[Category] = &[Category::Blade, Category::Ratchet, Category::Bit];

impl Category {
    /// Plural key used in the persisted JSON shapes (`blades`, `ratchets`,
    /// `bits`).
    pub fn key(self) -> &'static str {
        match self {
            Category::Blade => "blades",
            Category::Ratchet => "ratchets",
            Category::Bit => "bits",
        }
    }

    /// Singular label for display.
    pub fn label(self) -> &'static str {
        match self {
            Category::Blade => "Blade",
            Category::Ratchet => "Ratchet",
            Category::Bit => "Bit",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error)]
#[error("unknown part category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "blade" | "blades" => Ok(Category::Blade),
            "ratchet" | "ratchets" => Ok(Category::Ratchet),
            "bit" | "bits" => Ok(Category::Bit),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

/// The full reference database of definable parts, keyed by part name
/// within each category.
///
/// All three maps are structurally required in the source JSON; unknown
/// keys elsewhere in the document are ignored. The loader degrades to
/// [`Catalog::default`] on unreadable or malformed input, so an empty
/// catalog is a valid (if useless) state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub blades: BTreeMap<String, PartStats>,
    pub ratchets: BTreeMap<String, PartStats>,
    pub bits: BTreeMap<String, PartStats>,
}

impl Catalog {
    /// All parts in one category.
    pub fn parts(&self, category: Category) -> &BTreeMap<String, PartStats> {
        match category {
            Category::Blade => &self.blades,
            Category::Ratchet => &self.ratchets,
            Category::Bit => &self.bits,
        }
    }

    /// Authoritative stats for a part, by exact name.
    pub fn resolve(&self, category: Category, name: &str) -> Option<&PartStats> {
        self.parts(category).get(name)
    }

    /// Case-insensitive lookup returning the canonical catalog spelling.
    ///
    /// Used to normalize user-typed names before they enter the collection.
    pub fn find(&self, category: Category, name: &str) -> Option<(&str, &PartStats)> {
        let wanted = name.to_lowercase();
        self.parts(category)
            .iter()
            .find(|(n, _)| n.to_lowercase() == wanted)
            .map(|(n, s)| (n.as_str(), s))
    }

    /// Total number of parts across all categories.
    pub fn len(&self) -> usize {
        self.blades.len() + self.ratchets.len() + self.bits.len()
    }

    /// True when no category has any parts.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
