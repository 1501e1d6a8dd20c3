// SPDX-License-Identifier: LGPL-3.0-only

//! Color lookup API for render callbacks.
//!
//! The Palette wraps the merged color map (via `Arc`, so render callbacks
//! share it without cloning the map) and answers per-item color queries.

use std::sync::Arc;

use crate::color::DEFAULT_COLOR;
use crate::config::ColorEntry;
use crate::entity::SheetItem;
use crate::merge::{normalize_key, ColorMap};

/// A read-only view over the merged color map.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    map: Arc<ColorMap>,
}

impl Palette {
    /// Create a Palette from a merged color map.
    pub fn new(map: ColorMap) -> Self {
        Self { map: Arc::new(map) }
    }

    /// Create a Palette from a shared merged color map.
    pub fn from_arc(map: Arc<ColorMap>) -> Self {
        Self { map }
    }

    /// The merged entry for a key, normalizing the key first.
    pub fn entry(&self, key: &str) -> Option<&ColorEntry> {
        self.map.get(&normalize_key(key))
    }

    /// The color for a key, or the default sentinel when the key has no
    /// entry. Missing entries are logged as warnings and never fatal.
    pub fn color(&self, key: &str) -> &str {
        match self.entry(key) {
            Some(entry) => &entry.color,
            None => {
                log::warn!("Cannot find color for key '{}'", key);
                DEFAULT_COLOR
            }
        }
    }

    /// The color for a displayed item, or the default sentinel.
    ///
    /// Unidentified items and items without a category key resolve to the
    /// default sentinel so their display is not overridden.
    pub fn color_for(&self, item: &SheetItem) -> &str {
        if item.is_unidentified() {
            log::debug!("Item '{}' is unidentified, no color applied", item.name);
            return DEFAULT_COLOR;
        }
        match item.category_key() {
            Some(key) => self.color(key),
            None => DEFAULT_COLOR,
        }
    }

    /// Number of merged entries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The underlying merged map (for settings UIs that list entries).
    pub fn map(&self) -> &ColorMap {
        &self.map
    }
}
