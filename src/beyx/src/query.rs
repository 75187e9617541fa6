//! Analysis queries over a catalog and a collection.
//!
//! Everything here is a pure function of `(&Catalog, &Collection)`: no
//! mutation, no I/O, safe to call repeatedly. Parts the catalog does not
//! know resolve to zero for every stat rather than erroring.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::{Catalog, Category};
use crate::collection::Collection;
use crate::stats::{PartStats, Stat, ALL_STATS};

/// Placeholder for a combo slot with no eligible owned part.
pub const NO_SUGGESTION: &str = "N/A";

fn resolved_value(catalog: &Catalog, category: Category, name: &str, stat: Stat) -> u32 {
    catalog
        .resolve(category, name)
        .map(|s| s.value(stat))
        .unwrap_or(0)
}

/// The owned part with the highest catalog value for one stat.
///
/// Scans owned entries in collection order; ties keep the
/// first-encountered entry. Returns `None` when the category holds no
/// parts at all - a single owned part wins regardless of its value.
pub fn best_part_for_stat<'a>(
    catalog: &Catalog,
    collection: &'a Collection,
    category: Category,
    stat: Stat,
) -> Option<&'a str> {
    let mut best: Option<(&str, u32)> = None;
    for part in collection.parts(category) {
        let value = resolved_value(catalog, category, &part.name, stat);
        match best {
            Some((_, top)) if value <= top => {}
            _ => best = Some((&part.name, value)),
        }
    }
    best.map(|(name, _)| name)
}

/// Distinct owned parts of one category ordered by a stat, best first.
///
/// Duplicate copies of a name collapse to one entry. Values come from the
/// catalog; ties order ascending by name.
pub fn rank_parts(
    catalog: &Catalog,
    collection: &Collection,
    category: Category,
    stat: Stat,
) -> Vec<(String, u32)> {
    let mut by_name: BTreeMap<String, u32> = BTreeMap::new();
    for part in collection.parts(category) {
        by_name
            .entry(part.name.clone())
            .or_insert_with(|| resolved_value(catalog, category, &part.name, stat));
    }

    let mut ranked: Vec<(String, u32)> = by_name.into_iter().collect();
    // BTreeMap iteration is name-ascending; the stable sort keeps that
    // order within equal values.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// A suggested three-part combo, one independent best pick per category.
///
/// Serialized keys match the persisted suggestion shape
/// (`Blade`/`Ratchet`/`Bit`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboSuggestion {
    #[serde(rename = "Blade")]
    pub blade: String,

    #[serde(rename = "Ratchet")]
    pub ratchet: String,

    #[serde(rename = "Bit")]
    pub bit: String,
}

impl ComboSuggestion {
    /// Slot text for one category.
    pub fn part(&self, category: Category) -> &str {
        match category {
            Category::Blade => &self.blade,
            Category::Ratchet => &self.ratchet,
            Category::Bit => &self.bit,
        }
    }

    /// Summed catalog stats of the suggested parts, in display order.
    /// `N/A` slots contribute nothing.
    pub fn total_stats(&self, catalog: &Catalog) -> Vec<(Stat, u32)> {
        let mut totals = Vec::with_capacity(ALL_STATS.len());
        for &stat in ALL_STATS {
            let mut total = 0;
            for &category in crate::catalog::ALL_CATEGORIES {
                let name = self.part(category);
                if name != NO_SUGGESTION {
                    total += resolved_value(catalog, category, name, stat);
                }
            }
            totals.push((stat, total));
        }
        totals
    }
}

/// Best owned part per category for one stat.
///
/// The three picks are independent; a category with nothing owned yields
/// the literal `"N/A"`.
pub fn suggest_combo(catalog: &Catalog, collection: &Collection, stat: Stat) -> ComboSuggestion {
    let pick = |category| {
        best_part_for_stat(catalog, collection, category, stat)
            .unwrap_or(NO_SUGGESTION)
            .to_string()
    };
    ComboSuggestion {
        blade: pick(Category::Blade),
        ratchet: pick(Category::Ratchet),
        bit: pick(Category::Bit),
    }
}

/// Stat-by-stat comparison of two owned parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatDiff {
    /// Canonical owned spelling of the left part.
    pub left: String,
    /// Canonical owned spelling of the right part.
    pub right: String,
    /// `(stat, left value, right value, left - right)` in display order.
    pub rows: Vec<(Stat, u32, u32, i64)>,
}

/// Compare two owned parts of one category, stat by stat.
///
/// Both names must be owned (matched case-insensitively); values come from
/// the catalog. Returns `None` when either part is not in the collection.
pub fn compare_parts(
    catalog: &Catalog,
    collection: &Collection,
    category: Category,
    left: &str,
    right: &str,
) -> Option<StatDiff> {
    let owned_name = |wanted: &str| -> Option<String> {
        let lowered = wanted.to_lowercase();
        collection
            .parts(category)
            .iter()
            .find(|p| p.name.to_lowercase() == lowered)
            .map(|p| p.name.clone())
    };

    let left = owned_name(left)?;
    let right = owned_name(right)?;

    let zero = PartStats::default();
    let left_stats = catalog.resolve(category, &left).unwrap_or(&zero);
    let right_stats = catalog.resolve(category, &right).unwrap_or(&zero);

    let rows = ALL_STATS
        .iter()
        .map(|&stat| {
            let a = left_stats.value(stat);
            let b = right_stats.value(stat);
            (stat, a, b, i64::from(a) - i64::from(b))
        })
        .collect();

    Some(StatDiff { left, right, rows })
}
