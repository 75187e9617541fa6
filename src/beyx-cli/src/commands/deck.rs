//! Deck command handlers

use anyhow::{bail, Result};
use beyx::{BeybladeManager, BeybladeSlot, Category};

/// Create a new empty deck.
pub fn create(manager: &mut BeybladeManager, name: &str) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        bail!("deck name cannot be empty");
    }

    if manager.create_deck(name) {
        println!("Deck '{name}' created");
    } else {
        println!("Deck '{name}' already exists");
    }
    Ok(())
}

/// Delete a deck.
pub fn delete(manager: &mut BeybladeManager, name: &str) -> Result<()> {
    if manager.delete_deck(name) {
        println!("Deck '{name}' deleted");
        Ok(())
    } else {
        bail!("deck '{}' does not exist", name);
    }
}

/// List all deck names.
pub fn list(manager: &BeybladeManager) {
    let decks = &manager.collection().decks;
    if decks.is_empty() {
        println!("No decks");
        return;
    }
    for name in decks.keys() {
        println!("{name}");
    }
}

/// Show a deck's three combos.
pub fn show(manager: &BeybladeManager, name: &str) -> Result<()> {
    let Some(deck) = manager.collection().decks.get(name) else {
        bail!("deck '{}' does not exist", name);
    };

    println!("Deck: {name}");
    for (i, slot) in deck.slots().enumerate() {
        match slot {
            Some(combo) if !combo.is_empty() => {
                println!(
                    "  {}: {} / {} / {}",
                    i + 1,
                    combo.blade.as_deref().unwrap_or("-"),
                    combo.ratchet.as_deref().unwrap_or("-"),
                    combo.bit.as_deref().unwrap_or("-")
                );
            }
            _ => println!("  {}: empty", i + 1),
        }
    }
    Ok(())
}

/// Assign a blade/ratchet/bit combo to one slot of an existing deck.
///
/// All three parts must be owned, and a part cannot appear in two slots of
/// the same deck.
pub fn set(
    manager: &mut BeybladeManager,
    deck_name: &str,
    slot: u8,
    blade: String,
    ratchet: String,
    bit: String,
) -> Result<()> {
    let index = usize::from(slot - 1);

    let parts = [
        (Category::Blade, &blade),
        (Category::Ratchet, &ratchet),
        (Category::Bit, &bit),
    ];
    for (category, name) in parts {
        if !manager.collection().contains(category, name) {
            bail!("{} '{}' is not in the collection", category.label(), name);
        }
    }

    let Some(mut deck) = manager.collection().decks.get(deck_name).cloned() else {
        bail!("deck '{}' does not exist", deck_name);
    };

    for (category, name) in parts {
        if let Some(used) = deck.find_part_use(category, name, Some(index)) {
            bail!(
                "{} '{}' is already used in slot {}",
                category.label(),
                name,
                used + 1
            );
        }
    }

    *deck.slot_mut(index) = Some(BeybladeSlot {
        blade: Some(blade),
        ratchet: Some(ratchet),
        bit: Some(bit),
    });
    manager.update_deck(deck_name, deck);

    println!("Slot {slot} of '{deck_name}' updated");
    Ok(())
}

/// Empty one slot of an existing deck.
pub fn clear(manager: &mut BeybladeManager, deck_name: &str, slot: u8) -> Result<()> {
    let Some(mut deck) = manager.collection().decks.get(deck_name).cloned() else {
        bail!("deck '{}' does not exist", deck_name);
    };

    *deck.slot_mut(usize::from(slot - 1)) = None;
    manager.update_deck(deck_name, deck);

    println!("Slot {slot} of '{deck_name}' cleared");
    Ok(())
}
