//! Part statistics and stat name resolution.
//!
//! Every part has the same five numeric attributes. Stat names arrive from
//! user input and persisted data as strings, so lookup by name is total:
//! unrecognized names resolve to 0 instead of erroring.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Numeric attributes of a single part.
///
/// All numeric fields default to 0 when absent from the source JSON. The
/// optional fields carry display metadata only and never feed analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartStats {
    #[serde(default)]
    pub attack: u32,

    #[serde(default)]
    pub defense: u32,

    #[serde(default)]
    pub stamina: u32,

    #[serde(default)]
    pub weight: u32,

    /// Part archetype label (e.g. "Attack", "Balance"), free-form.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub part_type: Option<String>,

    #[serde(
        rename = "burst_resistance",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub burst_resistance: Option<u32>,

    #[serde(rename = "image_url", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl PartStats {
    /// Value of one stat. Missing burst resistance reads as 0.
    pub fn value(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::Stamina => self.stamina,
            Stat::Weight => self.weight,
            Stat::BurstResistance => self.burst_resistance.unwrap_or(0),
        }
    }
}

/// One of the five comparable stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Attack,
    Defense,
    Stamina,
    Weight,
    BurstResistance,
}

/// All stats in display order.
pub const ALL_STATS: &[Stat] = &[
    Stat::Attack,
    Stat::Defense,
    Stat::Stamina,
    Stat::Weight,
    Stat::BurstResistance,
];

impl Stat {
    /// Canonical display name. Burst resistance uses a space, matching the
    /// persisted stat-name convention.
    pub fn name(self) -> &'static str {
        match self {
            Stat::Attack => "attack",
            Stat::Defense => "defense",
            Stat::Stamina => "stamina",
            Stat::Weight => "weight",
            Stat::BurstResistance => "burst resistance",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
#[error("unknown stat name: {0}")]
pub struct UnknownStat(pub String);

impl FromStr for Stat {
    type Err = UnknownStat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Hyphen form accepted for CLI ergonomics; the canonical name uses
        // a space.
        match s.to_lowercase().as_str() {
            "attack" => Ok(Stat::Attack),
            "defense" => Ok(Stat::Defense),
            "stamina" => Ok(Stat::Stamina),
            "weight" => Ok(Stat::Weight),
            "burst resistance" | "burst-resistance" => Ok(Stat::BurstResistance),
            _ => Err(UnknownStat(s.to_string())),
        }
    }
}

/// Look up a stat by name, case-insensitively.
///
/// Recognized names are `attack`, `defense`, `stamina`, `weight`, and
/// `burst resistance` (literal space). Anything else yields 0 - callers
/// never see an error from a bad stat name.
pub fn stat_value(stats: &PartStats, name: &str) -> u32 {
    match name.to_lowercase().as_str() {
        "attack" => stats.attack,
        "defense" => stats.defense,
        "stamina" => stats.stamina,
        "weight" => stats.weight,
        "burst resistance" => stats.burst_resistance.unwrap_or(0),
        _ => 0,
    }
}
