// SPDX-License-Identifier: LGPL-3.0-only

//! The displayed-item model the lookup API operates on.
//!
//! Host game systems disagree on which fields an item carries, so every
//! system-specific field is an explicit `Option` with documented absence
//! semantics instead of runtime property probing.

/// Kind of a displayed item document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ItemKind {
    /// A spell; colored by spell school.
    Spell,
    /// A class/race/monster feature; colored by feature subtype.
    Feature,
    /// A physical item; colored by rarity.
    #[default]
    Physical,
}

/// One displayed item row, as handed over by the host's render callback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetItem {
    /// Display name (used only for log messages).
    pub name: String,
    /// What kind of document the row shows.
    pub kind: ItemKind,
    /// Rarity value of a physical item. `None` means the system has no
    /// rarity field for this item; such rows keep their default display.
    pub rarity: Option<String>,
    /// Spell school abbreviation. `None` falls back to the kind-level
    /// `spell` entry of the merged map.
    pub spell_school: Option<String>,
    /// Feature subtype. `None` falls back to the kind-level `feat` entry.
    pub feature_subtype: Option<String>,
    /// Identification state. `None` means the system has no
    /// identification concept and the item counts as identified;
    /// `Some(false)` suppresses coloring so the rarity is not revealed.
    pub identified: Option<bool>,
}

impl SheetItem {
    /// A physical item with an optional rarity.
    pub fn physical(name: impl Into<String>, rarity: Option<&str>) -> Self {
        Self {
            name: name.into(),
            kind: ItemKind::Physical,
            rarity: rarity.map(str::to_string),
            ..Self::default()
        }
    }

    /// A spell with an optional school abbreviation.
    pub fn spell(name: impl Into<String>, school: Option<&str>) -> Self {
        Self {
            name: name.into(),
            kind: ItemKind::Spell,
            spell_school: school.map(str::to_string),
            ..Self::default()
        }
    }

    /// A feature with an optional subtype.
    pub fn feature(name: impl Into<String>, subtype: Option<&str>) -> Self {
        Self {
            name: name.into(),
            kind: ItemKind::Feature,
            feature_subtype: subtype.map(str::to_string),
            ..Self::default()
        }
    }

    /// Set the identification state.
    pub fn with_identified(mut self, identified: bool) -> Self {
        self.identified = Some(identified);
        self
    }

    /// Whether the item is explicitly unidentified.
    pub fn is_unidentified(&self) -> bool {
        self.identified == Some(false)
    }

    /// The category key used for the color lookup, if the item has one.
    ///
    /// Spells and features fall back to their kind-level keys (`spell`,
    /// `feat`), which the merged map guarantees. Physical items without a
    /// rarity have no key and keep their default display.
    pub fn category_key(&self) -> Option<&str> {
        match self.kind {
            ItemKind::Spell => Some(self.spell_school.as_deref().unwrap_or("spell")),
            ItemKind::Feature => Some(self.feature_subtype.as_deref().unwrap_or("feat")),
            ItemKind::Physical => self.rarity.as_deref(),
        }
    }
}
