//! Deck command CLI definitions

use clap::Subcommand;

#[derive(Subcommand)]
pub enum DeckCommand {
    /// Create a new empty deck
    Create {
        /// Deck name
        name: String,
    },

    /// Delete a deck
    Delete {
        /// Deck name
        name: String,
    },

    /// List all decks
    List,

    /// Show a deck's three combos
    Show {
        /// Deck name
        name: String,
    },

    /// Assign a blade/ratchet/bit combo to one deck slot
    Set {
        /// Deck name
        deck: String,

        /// Slot number (1-3)
        #[arg(value_parser = clap::value_parser!(u8).range(1..=3))]
        slot: u8,

        /// Owned blade name
        blade: String,

        /// Owned ratchet name
        ratchet: String,

        /// Owned bit name
        bit: String,
    },

    /// Empty one deck slot
    Clear {
        /// Deck name
        deck: String,

        /// Slot number (1-3)
        #[arg(value_parser = clap::value_parser!(u8).range(1..=3))]
        slot: u8,
    },
}
