// SPDX-License-Identifier: LGPL-3.0-only

//! The persisted configuration record.
//!
//! The record is owned by the host's settings store; this module only
//! defines its shape and the first-run capture of system defaults. Field
//! names follow the persisted record (`itemRarity`, `spellSchools`,
//! `classFeatureTypes`), so the record round-trips through the store
//! unchanged.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::category::Category;
use crate::merge::{is_reserved_key, normalize_key};
use crate::taxonomy::SystemTaxonomy;

/// One entry of the merged color map: a hex color and a display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorEntry {
    /// Hex color string (`#rrggbb` or `#rrggbbaa`).
    pub color: String,
    /// Display name of the rarity, school or feature type.
    #[serde(default)]
    pub name: String,
}

impl ColorEntry {
    /// Create an entry from a color and a name.
    pub fn new(color: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            name: name.into(),
        }
    }
}

/// A value of a category's defaults layer.
///
/// Host taxonomies store either structured entries or bare label strings;
/// bare labels are wrapped with the category fallback color during merge
/// and capture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultEntry {
    /// A structured color entry.
    Entry(ColorEntry),
    /// A bare display label with no color of its own.
    Label(String),
}

/// A user-authored override or addition.
///
/// The declared `key` field, not the slot the entry is stored under,
/// decides where the entry lands in the merged map. An entry with an
/// empty `key` is malformed and skipped with a warning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomEntry {
    /// Target key in the merged map.
    #[serde(default)]
    pub key: String,
    /// Hex color; the category fallback color applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Legacy display name field; used when `name` is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl CustomEntry {
    /// The display name, falling back from `name` to `label`.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.label.as_deref())
            .unwrap_or_default()
    }
}

/// One category of the persisted record: a defaults layer and a custom
/// overlay. Insertion order is preserved and load-bearing for the merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryConfig {
    /// Captured system defaults (empty until first-run capture).
    #[serde(default)]
    pub defaults: IndexMap<String, DefaultEntry>,
    /// User-authored overrides and additions.
    #[serde(default, deserialize_with = "custom_entries")]
    pub custom: IndexMap<String, CustomEntry>,
}

// Host settings exports can carry null custom entries (deleted rows);
// those are skipped with a warning instead of failing the whole record.
fn custom_entries<'de, D>(deserializer: D) -> Result<IndexMap<String, CustomEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: IndexMap<String, Option<CustomEntry>> = IndexMap::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(slot, entry)| match entry {
            Some(entry) => Some((slot, entry)),
            None => {
                log::warn!("Skipping null custom entry at slot '{}'", slot);
                None
            }
        })
        .collect())
}

/// The full persisted configuration record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorConfigurations {
    /// Item rarity configuration.
    pub item_rarity: CategoryConfig,
    /// Spell school configuration.
    pub spell_schools: CategoryConfig,
    /// Class feature type configuration.
    pub class_feature_types: CategoryConfig,
}

impl ColorConfigurations {
    /// The configuration of one category.
    pub fn category(&self, category: Category) -> &CategoryConfig {
        match category {
            Category::ItemRarity => &self.item_rarity,
            Category::SpellSchools => &self.spell_schools,
            Category::ClassFeatureTypes => &self.class_feature_types,
        }
    }

    /// Mutable access to the configuration of one category.
    pub fn category_mut(&mut self, category: Category) -> &mut CategoryConfig {
        match category {
            Category::ItemRarity => &mut self.item_rarity,
            Category::SpellSchools => &mut self.spell_schools,
            Category::ClassFeatureTypes => &mut self.class_feature_types,
        }
    }

    /// First-run capture: seed every empty defaults layer from the host
    /// taxonomy snapshot.
    ///
    /// Keys are normalized, reserved keys dropped, and bare labels wrapped
    /// with the category fallback color. Already-customized defaults are
    /// left untouched, so user edits survive later captures. Returns true
    /// when anything was written; the caller should then ask the settings
    /// store to persist the record.
    pub fn capture_defaults(&mut self, taxonomy: &SystemTaxonomy) -> bool {
        let mut changed = false;
        for category in Category::ALL {
            let snapshot = taxonomy.category(category);
            let config = self.category_mut(category);
            if !config.defaults.is_empty() || snapshot.is_empty() {
                continue;
            }
            for (key, value) in snapshot {
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
                config.defaults.insert(key, DefaultEntry::Entry(entry));
                changed = true;
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taxonomy_with_rarities() -> SystemTaxonomy {
        let mut taxonomy = SystemTaxonomy::default();
        taxonomy
            .item_rarity
            .insert("Common".to_string(), DefaultEntry::Label("Common".to_string()));
        taxonomy.item_rarity.insert(
            "veryRare".to_string(),
            DefaultEntry::Entry(ColorEntry::new("#800080ff", "Very Rare")),
        );
        taxonomy
            .item_rarity
            .insert("undefined".to_string(), DefaultEntry::Label("?".to_string()));
        taxonomy
    }

    #[test]
    fn capture_seeds_empty_defaults() {
        let mut config = ColorConfigurations::default();
        assert!(config.capture_defaults(&taxonomy_with_rarities()));

        let defaults = &config.item_rarity.defaults;
        assert_eq!(defaults.len(), 2);
        assert_eq!(
            defaults.get("common"),
            Some(&DefaultEntry::Entry(ColorEntry::new("#000000", "Common")))
        );
        assert_eq!(
            defaults.get("veryrare"),
            Some(&DefaultEntry::Entry(ColorEntry::new(
                "#800080ff",
                "Very Rare"
            )))
        );
        assert!(!defaults.contains_key("undefined"));
    }

    #[test]
    fn capture_never_overwrites_existing_defaults() {
        let mut config = ColorConfigurations::default();
        config.item_rarity.defaults.insert(
            "common".to_string(),
            DefaultEntry::Entry(ColorEntry::new("#123456", "Common")),
        );

        assert!(!config.capture_defaults(&taxonomy_with_rarities()));
        assert_eq!(config.item_rarity.defaults.len(), 1);
    }

    #[test]
    fn capture_reports_no_change_for_empty_taxonomy() {
        let mut config = ColorConfigurations::default();
        assert!(!config.capture_defaults(&SystemTaxonomy::default()));
    }

    #[test]
    fn custom_entry_name_falls_back_to_label() {
        let entry = CustomEntry {
            key: "mythic".to_string(),
            color: None,
            name: None,
            label: Some("Mythic".to_string()),
        };
        assert_eq!(entry.display_name(), "Mythic");
    }

    #[test]
    fn null_custom_entries_are_dropped_on_load() {
        let json = r##"{
            "itemRarity": {
                "custom": {
                    "0": null,
                    "1": { "key": "mythic", "color": "#aa00aaff", "name": "Mythic" }
                }
            }
        }"##;
        let config: ColorConfigurations = serde_json::from_str(json).unwrap();
        assert_eq!(config.item_rarity.custom.len(), 1);
        assert_eq!(config.item_rarity.custom["1"].key, "mythic");
    }

    #[test]
    fn persisted_record_round_trips_through_json() {
        let mut config = ColorConfigurations::default();
        config.spell_schools.custom.insert(
            "0".to_string(),
            CustomEntry {
                key: "chr".to_string(),
                color: Some("#aabbccff".to_string()),
                name: Some("Chronurgy".to_string()),
                label: None,
            },
        );

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("spellSchools"));
        let back: ColorConfigurations = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
