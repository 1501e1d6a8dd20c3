// SPDX-License-Identifier: LGPL-3.0-only

//! The per-session color context.
//!
//! One context is built at module setup and handed to the presentation
//! layer; flags and the merged map are read-only between lifecycle
//! points. Settings changes require an explicit [`ColorContext::refresh`]
//! by the caller; there is no dirty tracking by design.

use std::sync::Arc;

use crate::adapter::{ContrastSource, SheetAdapter, StylePlan};
use crate::entity::SheetItem;
use crate::error::ThemeError;
use crate::merge::merge_configurations;
use crate::mode::ModeFlags;
use crate::palette::Palette;
use crate::settings::ModuleSettings;
use crate::taxonomy::SystemTaxonomy;

/// The module-wide color state: resolved mode flags, the merged color
/// map, and the optional contrast collaborator.
pub struct ColorContext {
    settings: ModuleSettings,
    flags: ModeFlags,
    palette: Palette,
    contrast: Option<Arc<dyn ContrastSource + Send + Sync>>,
}

impl ColorContext {
    /// Build the context at module setup.
    ///
    /// Captures first-run defaults from the host taxonomy, resolves the
    /// mode flags once, and merges the configuration record eagerly.
    ///
    /// A missing contrast service blocks initialization for privileged
    /// users (they can fix the install); everyone else continues degraded
    /// with a warning and no derived background/text colors.
    pub fn initialize(
        mut settings: ModuleSettings,
        taxonomy: &SystemTaxonomy,
        contrast: Option<Arc<dyn ContrastSource + Send + Sync>>,
        privileged: bool,
    ) -> Result<Self, ThemeError> {
        if contrast.is_none() {
            if privileged {
                return Err(ThemeError::MissingDependency("color contrast service"));
            }
            log::warn!("Color contrast service unavailable, derived colors are disabled");
        }

        if settings.configurations.capture_defaults(taxonomy) {
            log::debug!("Captured system taxonomy into configuration defaults");
        }

        let flags = settings.flags();
        let palette = Palette::new(merge_configurations(&settings.configurations));
        log::debug!(
            "Color context ready: enabled={}, background={}, border={}, text={}, entries={}",
            flags.enabled,
            flags.background,
            flags.border,
            flags.text,
            palette.len()
        );

        Ok(Self {
            settings,
            flags,
            palette,
            contrast,
        })
    }

    /// The resolved mode flags.
    pub fn flags(&self) -> ModeFlags {
        self.flags
    }

    /// The current settings record.
    pub fn settings(&self) -> &ModuleSettings {
        &self.settings
    }

    /// A shared view over the merged color map.
    pub fn palette(&self) -> Palette {
        self.palette.clone()
    }

    /// The contrast collaborator, if available.
    pub fn contrast(&self) -> Option<&dyn ContrastSource> {
        self.contrast.as_deref().map(|c| c as &dyn ContrastSource)
    }

    /// Replace the settings record and rebuild flags and map.
    pub fn update_settings(&mut self, settings: ModuleSettings) {
        self.settings = settings;
        self.refresh();
    }

    /// Rebuild the mode flags and the merged map from the current
    /// settings record. Callers invoke this after any settings change.
    pub fn refresh(&mut self) {
        self.flags = self.settings.flags();
        self.palette = Palette::new(merge_configurations(&self.settings.configurations));
        log::debug!("Color context refreshed: {} entries", self.palette.len());
    }

    /// The color for a displayed item (default sentinel when none).
    pub fn color_for(&self, item: &SheetItem) -> &str {
        self.palette.color_for(item)
    }

    /// Style decisions for one row on a probed sheet.
    ///
    /// Honors the compendium opt-out and returns the all-clear plan for
    /// disabled modes, default colors and unidentified items.
    pub fn plan_for(&self, item: &SheetItem, adapter: &dyn SheetAdapter) -> StylePlan {
        if adapter.is_compendium() && self.settings.disable_on_compendium {
            return StylePlan::clear();
        }
        let color = self.palette.color_for(item);
        adapter.plan(self.flags, color, self.contrast())
    }
}
