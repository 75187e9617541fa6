//! Analysis command handlers (rank, suggest)

use anyhow::Result;
use beyx::{BeybladeManager, Category, Stat, NO_SUGGESTION};

/// Print owned parts of one category ordered by a stat, best first.
pub fn rank(manager: &BeybladeManager, category: Category, stat: Stat) {
    let ranked = manager.rank_parts(category, stat);
    if ranked.is_empty() {
        println!("No {} in the collection", category.key());
        return;
    }

    println!("{} by {}:", category.key(), stat);
    for (i, (name, value)) in ranked.iter().enumerate() {
        println!("{:>2}. {:<28} {:>3}", i + 1, name, value);
    }
}

/// Print the best owned combo for a stat, with combined stats.
///
/// With `json`, emits the suggestion object (`Blade`/`Ratchet`/`Bit`
/// keys) and nothing else.
pub fn suggest(manager: &BeybladeManager, stat: Stat, json: bool) -> Result<()> {
    let combo = manager.suggest_combo(stat);

    if json {
        println!("{}", serde_json::to_string_pretty(&combo)?);
        return Ok(());
    }

    println!("Suggested combo for {stat}:");
    println!("  Blade:   {}", combo.blade);
    println!("  Ratchet: {}", combo.ratchet);
    println!("  Bit:     {}", combo.bit);

    if combo.blade == NO_SUGGESTION
        && combo.ratchet == NO_SUGGESTION
        && combo.bit == NO_SUGGESTION
    {
        return Ok(());
    }

    println!("Combined stats:");
    for (stat, total) in combo.total_stats(manager.catalog()) {
        println!("  {:<18} {}", stat.name(), total);
    }
    Ok(())
}
