mod cli;
mod commands;
mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use beyx::{BeybladeManager, Store};
use clap::Parser;
use config::Config;
use tracing_subscriber::EnvFilter;

use cli::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Configure {
            data_dir,
            share_dir,
            show,
        } => commands::configure::handle(data_dir, share_dir, show),

        Commands::Restore => {
            let store = open_store(cli.share_dir, cli.data_dir)?;
            store.restore_backup().context("failed to restore backup")?;
            println!("Collection restored from backup");
            Ok(())
        }

        command => {
            let store = open_store(cli.share_dir, cli.data_dir)?;
            let mut manager =
                BeybladeManager::open(store).context("failed to load collection")?;
            dispatch(&mut manager, command)
        }
    }
}

/// Build the store from CLI overrides, persisted config, and platform
/// defaults, in that order.
fn open_store(share_dir: Option<PathBuf>, data_dir: Option<PathBuf>) -> Result<Store> {
    let config = Config::load()?;
    Ok(Store::new(
        config.resolve_share_dir(share_dir),
        config.resolve_data_dir(data_dir)?,
    ))
}

fn dispatch(manager: &mut BeybladeManager, command: Commands) -> Result<()> {
    match command {
        Commands::Parts { command } => match command {
            PartsCommand::List { category, images } => {
                commands::parts::list(manager, category, images);
            }

            PartsCommand::Add { category, name } => {
                commands::parts::add(manager, category, &name)?;
            }

            PartsCommand::Remove { category, name } => {
                commands::parts::remove(manager, category, &name)?;
            }

            PartsCommand::Compare {
                category,
                left,
                right,
            } => {
                commands::parts::compare(manager, category, &left, &right)?;
            }
        },

        Commands::Rank { category, stat } => {
            commands::analyze::rank(manager, category, stat);
        }

        Commands::Suggest { stat, json } => {
            commands::analyze::suggest(manager, stat, json)?;
        }

        Commands::Deck { command } => match command {
            DeckCommand::Create { name } => {
                commands::deck::create(manager, &name)?;
            }

            DeckCommand::Delete { name } => {
                commands::deck::delete(manager, &name)?;
            }

            DeckCommand::List => {
                commands::deck::list(manager);
            }

            DeckCommand::Show { name } => {
                commands::deck::show(manager, &name)?;
            }

            DeckCommand::Set {
                deck,
                slot,
                blade,
                ratchet,
                bit,
            } => {
                commands::deck::set(manager, &deck, slot, blade, ratchet, bit)?;
            }

            DeckCommand::Clear { deck, slot } => {
                commands::deck::clear(manager, &deck, slot)?;
            }
        },

        // Handled in main before the manager exists.
        Commands::Restore | Commands::Configure { .. } => unreachable!(),
    }

    Ok(())
}
