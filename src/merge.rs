// SPDX-License-Identifier: LGPL-3.0-only

//! The configuration merger.
//!
//! Folds the three category configurations (defaults layer plus custom
//! overlay each) into one flat lookup from normalized key to
//! [`ColorEntry`]. Category identity is not preserved: collisions are
//! resolved by write order, so later categories and later custom entries
//! win.

use indexmap::IndexMap;

use crate::builtin::{self, RETRO_FEAT, RETRO_SPELL};
use crate::category::Category;
use crate::color;
use crate::config::{ColorConfigurations, ColorEntry, DefaultEntry};

/// The merged flat color lookup.
pub type ColorMap = IndexMap<String, ColorEntry>;

/// Normalize a key for storage and lookup: case-folded, all whitespace
/// removed.
pub fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// Whether a key is one of the literals that must never be stored.
///
/// Serialization layers on the host side stringify absent keys into
/// `"undefined"` / `"null"`; those are dropped wherever encountered.
pub fn is_reserved_key(key: &str) -> bool {
    matches!(key, "undefined" | "null")
}

/// Merge the persisted configuration record into one flat color map.
///
/// For each category, in the fixed order of [`Category::ALL`]:
///
/// 1. The effective defaults layer is the persisted defaults if
///    non-empty, else the built-in default table for the category.
/// 2. Default entries are written in insertion order at their normalized
///    key; bare label strings are wrapped with the category fallback
///    color; reserved keys are dropped.
/// 3. Custom entries are then written in insertion order at their
///    normalized declared `key`, overwriting whatever is there. Malformed
///    entries (empty key) are skipped with a warning; a missing or
///    malformed color falls back to the category fallback color; `name`
///    falls back to `label`.
///
/// Finally the retro-compatibility guarantee is applied: the `spell` and
/// `feat` keys carry their canonical colors unless the persisted record
/// itself (defaults or custom layer) supplied an entry at that key.
/// Built-in fallback tables do not count as supplied, so a freshly
/// installed module always reports the canonical spell and feature
/// colors.
///
/// The function is pure: merging the same record twice yields the same
/// map.
pub fn merge_configurations(config: &ColorConfigurations) -> ColorMap {
    let mut map = ColorMap::new();
    let mut supplied_spell = false;
    let mut supplied_feat = false;

    for category in Category::ALL {
        let category_config = config.category(category);

        if category_config.defaults.is_empty() {
            for (key, entry) in builtin::defaults_for(category) {
                map.insert(key, entry);
            }
        } else {
            for (key, value) in &category_config.defaults {
                let key = normalize_key(key);
                if is_reserved_key(&key) {
                    continue;
                }
                let entry = match value {
                    DefaultEntry::Entry(entry) => entry.clone(),
                    DefaultEntry::Label(label) => {
                        ColorEntry::new(category.fallback_color(), label.clone())
                    }
                };
                mark_supplied(&key, &mut supplied_spell, &mut supplied_feat);
                map.insert(key, entry);
            }
        }

        for (slot, entry) in &category_config.custom {
            if entry.key.trim().is_empty() {
                log::warn!(
                    "Skipping malformed custom {} entry at slot '{}': missing key",
                    category.as_str(),
                    slot
                );
                continue;
            }
            let key = normalize_key(&entry.key);
            if is_reserved_key(&key) {
                continue;
            }
            let color = match entry.color.as_deref() {
                Some(value) if color::parse_hex(value).is_ok() => value.to_string(),
                Some(value) => {
                    log::warn!(
                        "Malformed color '{}' for custom {} entry '{}', using category fallback",
                        value,
                        category.as_str(),
                        key
                    );
                    category.fallback_color().to_string()
                }
                None => category.fallback_color().to_string(),
            };
            mark_supplied(&key, &mut supplied_spell, &mut supplied_feat);
            map.insert(key, ColorEntry::new(color, entry.display_name()));
        }
    }

    if !supplied_spell {
        map.insert(
            "spell".to_string(),
            ColorEntry::new(RETRO_SPELL.0, RETRO_SPELL.1),
        );
    }
    if !supplied_feat {
        map.insert(
            "feat".to_string(),
            ColorEntry::new(RETRO_FEAT.0, RETRO_FEAT.1),
        );
    }

    map
}

fn mark_supplied(key: &str, spell: &mut bool, feat: &mut bool) {
    match key {
        "spell" => *spell = true,
        "feat" => *feat = true,
        _ => {}
    }
}
