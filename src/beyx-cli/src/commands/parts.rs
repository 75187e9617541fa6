//! Owned part command handlers

use anyhow::{bail, Result};
use beyx::{BeybladeManager, Category, CollectedPart, ALL_CATEGORIES, ALL_STATS};

/// List owned parts, optionally limited to one category.
pub fn list(manager: &BeybladeManager, category: Option<Category>, images: bool) {
    match category {
        Some(category) => list_category(manager, category, images),
        None => {
            for &category in ALL_CATEGORIES {
                list_category(manager, category, images);
            }
        }
    }
}

fn list_category(manager: &BeybladeManager, category: Category, images: bool) {
    let owned = manager.collection().parts(category).len();
    if owned == 0 {
        println!("No {} in the collection", category.key());
        return;
    }

    println!("{} ({} owned):", category.key(), owned);
    for (name, count) in manager.collection().part_counts(category) {
        let count_str = if count > 1 {
            format!(" x{count}")
        } else {
            String::new()
        };

        match manager.catalog().resolve(category, &name) {
            Some(stats) => {
                let line: Vec<String> = ALL_STATS
                    .iter()
                    .map(|&stat| format!("{}: {}", stat.name(), stats.value(stat)))
                    .collect();
                println!("  {name:<28}{count_str:<4} {}", line.join(" | "));
                if images {
                    if let Some(url) = &stats.image_url {
                        println!("    {url}");
                    }
                }
            }
            None => println!("  {name:<28}{count_str:<4} (not in catalog)"),
        }
    }
}

/// Add one owned copy of a part, normalizing the name against the catalog.
pub fn add(manager: &mut BeybladeManager, category: Category, name: &str) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        bail!("part name cannot be empty");
    }

    let part = match manager.catalog().find(category, name) {
        Some((canonical, stats)) => CollectedPart::with_stats(canonical.to_string(), stats.clone()),
        None => {
            println!("'{name}' is not in the catalog; adding without stats");
            CollectedPart::new(name)
        }
    };

    let display = part.name.clone();
    manager.add_part(category, part);

    let copies = manager
        .collection()
        .part_counts(category)
        .get(&display)
        .copied()
        .unwrap_or(1);
    if copies > 1 {
        println!("Added {} ({}, {}x owned)", display, category.label(), copies);
    } else {
        println!("Added {} ({})", display, category.label());
    }
    Ok(())
}

/// Remove one owned copy of a part.
pub fn remove(manager: &mut BeybladeManager, category: Category, name: &str) -> Result<()> {
    match manager.remove_part(category, name) {
        Some(removed) => {
            println!("Removed {} ({})", removed.name, category.label());
            Ok(())
        }
        None => bail!("'{}' is not in the collection", name),
    }
}

/// Compare two owned parts stat by stat.
pub fn compare(
    manager: &BeybladeManager,
    category: Category,
    left: &str,
    right: &str,
) -> Result<()> {
    let Some(diff) = manager.compare_parts(category, left, right) else {
        bail!("both parts must be in the collection");
    };

    println!("{} vs {}", diff.left, diff.right);
    for (stat, a, b, delta) in &diff.rows {
        println!("  {:<18} {:>4} | {:>4} | {:+}", stat.name(), a, b, delta);
    }
    Ok(())
}
