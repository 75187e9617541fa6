//! Parts command CLI definitions

use beyx::Category;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum PartsCommand {
    /// List owned parts with copy counts and stats
    List {
        /// Limit to one category (blade, ratchet, or bit)
        #[arg(short, long)]
        category: Option<Category>,

        /// Show image URLs from the catalog
        #[arg(long)]
        images: bool,
    },

    /// Add one owned copy of a part
    Add {
        /// Part category (blade, ratchet, or bit)
        category: Category,

        /// Part name (matched case-insensitively against the catalog)
        name: String,
    },

    /// Remove one owned copy of a part
    Remove {
        /// Part category (blade, ratchet, or bit)
        category: Category,

        /// Part name (case-insensitive; the last-added copy goes first)
        name: String,
    },

    /// Compare two owned parts stat by stat
    Compare {
        /// Part category (blade, ratchet, or bit)
        category: Category,

        /// First part name
        left: String,

        /// Second part name
        right: String,
    },
}
