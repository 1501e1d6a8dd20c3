// SPDX-License-Identifier: LGPL-3.0-only

//! Read-only snapshot of the host game system's category tables.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::config::DefaultEntry;

/// A snapshot of the host system's built-in taxonomies, taken once at
/// module init and consumed by the first-run defaults capture.
///
/// A system without one of the taxonomies leaves that table empty; the
/// merge then falls back to the built-in default table instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemTaxonomy {
    /// Item rarity table (key to label or structured entry).
    pub item_rarity: IndexMap<String, DefaultEntry>,
    /// Spell school table.
    pub spell_schools: IndexMap<String, DefaultEntry>,
    /// Class feature type table.
    pub class_feature_types: IndexMap<String, DefaultEntry>,
}

impl SystemTaxonomy {
    /// The snapshot table for one category.
    pub fn category(&self, category: Category) -> &IndexMap<String, DefaultEntry> {
        match category {
            Category::ItemRarity => &self.item_rarity,
            Category::SpellSchools => &self.spell_schools,
            Category::ClassFeatureTypes => &self.class_feature_types,
        }
    }

    /// Whether the snapshot carries no tables at all.
    pub fn is_empty(&self) -> bool {
        self.item_rarity.is_empty()
            && self.spell_schools.is_empty()
            && self.class_feature_types.is_empty()
    }
}
