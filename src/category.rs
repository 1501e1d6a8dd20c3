// SPDX-License-Identifier: LGPL-3.0-only

//! Configuration categories.

/// A configuration category for colored item rows.
///
/// Categories are merged in the fixed order of [`Category::ALL`]; on key
/// collision, entries from later categories win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Physical item rarity (common, rare, legendary, ...).
    ItemRarity,
    /// Spell school abbreviations (abj, evo, nec, ...).
    SpellSchools,
    /// Class feature subtypes (class, monster, race, ...).
    ClassFeatureTypes,
}

impl Category {
    /// All categories, in merge order.
    pub const ALL: [Category; 3] = [
        Category::ItemRarity,
        Category::SpellSchools,
        Category::ClassFeatureTypes,
    ];

    /// Get the string representation of the category (persisted record key).
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::ItemRarity => "itemRarity",
            Category::SpellSchools => "spellSchools",
            Category::ClassFeatureTypes => "classFeatureTypes",
        }
    }

    /// Parse a category from its persisted record key.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "itemRarity" => Some(Category::ItemRarity),
            "spellSchools" => Some(Category::SpellSchools),
            "classFeatureTypes" => Some(Category::ClassFeatureTypes),
            _ => None,
        }
    }

    /// Fallback color applied to entries of this category that carry no
    /// color of their own.
    pub fn fallback_color(&self) -> &'static str {
        match self {
            Category::ItemRarity => "#000000",
            Category::SpellSchools => "#4a8396ff",
            Category::ClassFeatureTypes => "#48d1ccff",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_conversion_round_trips() {
        for category in Category::ALL {
            assert_eq!(Category::from_str(category.as_str()), Some(category));
        }
        assert_eq!(Category::from_str("weaponTypes"), None);
    }
}
