//! Command handlers for beyx CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod analyze;
pub mod configure;
pub mod deck;
pub mod parts;
