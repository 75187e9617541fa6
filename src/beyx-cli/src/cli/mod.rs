//! CLI argument definitions for beyx
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

mod core;
mod deck;
mod parts;

pub use core::{Cli, Commands};
pub use deck::DeckCommand;
pub use parts::PartsCommand;
