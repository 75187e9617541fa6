//! Core CLI definitions

use beyx::{Category, Stat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::deck::DeckCommand;
use super::parts::PartsCommand;

#[derive(Parser)]
#[command(name = "beyx")]
#[command(about = "Beyblade X Collection Manager", long_about = None)]
pub struct Cli {
    /// Directory holding the saved collection (defaults to the platform
    /// data dir)
    #[arg(long, global = true, env = "BEYX_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Directory holding the bundled catalog and default collection
    #[arg(long, global = true, env = "BEYX_SHARE_DIR")]
    pub share_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Owned part operations (list, add, remove, compare)
    #[command(visible_alias = "p")]
    Parts {
        #[command(subcommand)]
        command: PartsCommand,
    },

    /// Rank owned parts of a category by a stat
    #[command(visible_alias = "r")]
    Rank {
        /// Part category (blade, ratchet, or bit)
        category: Category,

        /// Stat to rank by (attack, defense, stamina, weight,
        /// burst-resistance)
        stat: Stat,
    },

    /// Suggest the best owned combo for a stat
    #[command(visible_alias = "s")]
    Suggest {
        /// Stat to optimize for
        stat: Stat,

        /// Emit the suggestion as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Deck operations (create, delete, set, show, list)
    #[command(visible_alias = "d")]
    Deck {
        #[command(subcommand)]
        command: DeckCommand,
    },

    /// Restore the saved collection from its backup
    Restore,

    /// Configure default directories
    #[command(visible_alias = "c")]
    Configure {
        /// Set the default data directory
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Set the default share directory
        #[arg(long)]
        share_dir: Option<PathBuf>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
