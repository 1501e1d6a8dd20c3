// SPDX-License-Identifier: LGPL-3.0-only

//! Built-in default color tables.
//!
//! These tables are the effective defaults layer for a category whose
//! persisted defaults are empty (fresh install, or a system without that
//! taxonomy). Keys are already normalized.

use indexmap::IndexMap;

use crate::category::Category;
use crate::config::ColorEntry;

// (key, color, name) triples, in insertion order.
const ITEM_RARITY_DEFAULTS: [(&str, &str, &str); 8] = [
    ("common", "#000000", "Common"),
    ("uncommon", "#4bff4aff", "Uncommon"),
    ("rare", "#0000ffff", "Rare"),
    ("veryrare", "#800080ff", "Very Rare"),
    ("legendary", "#ffa500ff", "Legendary"),
    ("artifact", "#d2691eff", "Artifact"),
    ("spell", "#4a8396ff", "Spell"),
    ("feat", "#48d1ccff", "Feature"),
];

const SPELL_SCHOOL_DEFAULTS: [(&str, &str, &str); 8] = [
    ("abj", "#4bff4aff", "Abjuration"),
    ("con", "#d14848ff", "Conjuration"),
    ("div", "#4a8396ff", "Divination"),
    ("enc", "#d557ffff", "Enchantment"),
    ("evo", "#48d1ccff", "Evocation"),
    ("ill", "#fffc66ff", "Illusion"),
    ("nec", "#800080ff", "Necromancy"),
    ("trs", "#d2691eff", "Transmutation"),
];

const CLASS_FEATURE_DEFAULTS: [(&str, &str, &str); 6] = [
    ("background", "#d557ffff", "Background"),
    ("class", "#5e9effff", "Class"),
    ("feat", "#d14848ff", "Feat"),
    ("monster", "#4bff4aff", "Monster"),
    ("race", "#fffc66ff", "Race"),
    ("supernaturalgift", "#ffbc44ff", "Supernatural Gift"),
];

/// Retro-compatibility color and name guaranteed at the `spell` key.
pub const RETRO_SPELL: (&str, &str) = ("#4a8396ff", "Spell");

/// Retro-compatibility color and name guaranteed at the `feat` key.
pub const RETRO_FEAT: (&str, &str) = ("#48d1ccff", "Feature");

fn table(entries: &[(&str, &str, &str)]) -> IndexMap<String, ColorEntry> {
    entries
        .iter()
        .map(|(key, color, name)| (key.to_string(), ColorEntry::new(*color, *name)))
        .collect()
}

/// Built-in default table for a category.
pub fn defaults_for(category: Category) -> IndexMap<String, ColorEntry> {
    match category {
        Category::ItemRarity => table(&ITEM_RARITY_DEFAULTS),
        Category::SpellSchools => table(&SPELL_SCHOOL_DEFAULTS),
        Category::ClassFeatureTypes => table(&CLASS_FEATURE_DEFAULTS),
    }
}
