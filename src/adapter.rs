// SPDX-License-Identifier: LGPL-3.0-only

//! Presentation seam between the color core and the host's rendering
//! layer.
//!
//! The host owns all DOM mutation; this module only decides. A
//! [`SheetAdapter`] variant is selected once per rendered application by
//! a capability probe, and a [`StylePlan`] says which inline styles the
//! host should set (or clear) for one item row.

use crate::color::is_default_color;
use crate::mode::ModeFlags;

/// External color-theming collaborator that derives display colors from a
/// base row color. Absent in degraded setups; see
/// [`ColorContext::initialize`](crate::context::ColorContext::initialize).
pub trait ContrastSource {
    /// Background tint derived from the base color.
    fn background_color(&self, base: &str) -> String;
    /// Readable text color against the derived background.
    fn text_color(&self, base: &str) -> String;
}

/// Inline-style decisions for one displayed item row.
///
/// `None` fields mean "clear any previously applied override"; the host
/// resets those styles so stale colors never survive a re-render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StylePlan {
    /// Row (or name) background color.
    pub background: Option<String>,
    /// Item name text color.
    pub text: Option<String>,
    /// Item image border color.
    pub border: Option<String>,
}

impl StylePlan {
    /// The all-clear plan: remove every override.
    pub const fn clear() -> Self {
        Self {
            background: None,
            text: None,
            border: None,
        }
    }

    /// Decide the styles for one row from the mode flags and the item's
    /// base color.
    ///
    /// A default-sentinel color produces the all-clear plan. Background
    /// and text coloring are mutually exclusive by the mode table; when
    /// the contrast service is unavailable, the background falls back to
    /// the base color and no derived text color is set.
    pub fn build(flags: ModeFlags, color: &str, contrast: Option<&dyn ContrastSource>) -> Self {
        if !flags.enabled || is_default_color(Some(color)) {
            return Self::clear();
        }
        let mut plan = Self::clear();
        if flags.background {
            match contrast {
                Some(contrast) => {
                    plan.background = Some(contrast.background_color(color));
                    plan.text = Some(contrast.text_color(color));
                }
                None => plan.background = Some(color.to_string()),
            }
        } else if flags.text {
            plan.text = Some(color.to_string());
        }
        if flags.border {
            plan.border = Some(color.to_string());
        }
        plan
    }
}

/// Where the background tint lands for a sheet shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundTarget {
    /// The whole item row is tinted.
    Row,
    /// Only the document name element is tinted (directory listings).
    Name,
}

/// Capabilities of the sheet application being rendered, probed once per
/// render callback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetProbe {
    /// Application class name reported by the host.
    pub app_name: String,
    /// The sheet exposes tidy-style row metadata.
    pub tidy_fields: bool,
    /// The application is a sidebar/compendium directory listing.
    pub directory: bool,
}

impl SheetProbe {
    /// Probe from the host-reported application class name only.
    pub fn named(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            ..Self::default()
        }
    }
}

/// One supported sheet shape.
///
/// Each implementation handles one sheet variant; [`select_adapter`]
/// picks the first variant whose probe matches.
pub trait SheetAdapter: Sync {
    /// Adapter name, for log messages.
    fn name(&self) -> &'static str;

    /// Whether this adapter handles the probed sheet.
    fn matches(&self, probe: &SheetProbe) -> bool;

    /// Where the background tint lands for this sheet shape.
    fn background_target(&self) -> BackgroundTarget;

    /// Whether this adapter renders compendium listings (those can be
    /// opted out of coloring separately).
    fn is_compendium(&self) -> bool {
        false
    }

    /// Style decisions for one row.
    fn plan(&self, flags: ModeFlags, color: &str, contrast: Option<&dyn ContrastSource>) -> StylePlan {
        StylePlan::build(flags, color, contrast)
    }
}

/// Tidy-style sheets exposing row metadata fields.
pub struct TidySheetAdapter;

impl SheetAdapter for TidySheetAdapter {
    fn name(&self) -> &'static str {
        "tidy-sheet"
    }

    fn matches(&self, probe: &SheetProbe) -> bool {
        probe.tidy_fields || probe.app_name.starts_with("Tidy5e")
    }

    fn background_target(&self) -> BackgroundTarget {
        BackgroundTarget::Row
    }
}

/// Compendium directory listings.
pub struct CompendiumAdapter;

impl SheetAdapter for CompendiumAdapter {
    fn name(&self) -> &'static str {
        "compendium"
    }

    fn matches(&self, probe: &SheetProbe) -> bool {
        probe.app_name.contains("Compendium")
    }

    fn background_target(&self) -> BackgroundTarget {
        BackgroundTarget::Name
    }

    fn is_compendium(&self) -> bool {
        true
    }
}

/// Sidebar item directory listings.
pub struct SidebarAdapter;

impl SheetAdapter for SidebarAdapter {
    fn name(&self) -> &'static str {
        "sidebar"
    }

    fn matches(&self, probe: &SheetProbe) -> bool {
        probe.directory || probe.app_name.contains("Directory")
    }

    fn background_target(&self) -> BackgroundTarget {
        BackgroundTarget::Name
    }
}

/// Classic actor and item sheets; matches anything as the fallback.
pub struct ClassicSheetAdapter;

impl SheetAdapter for ClassicSheetAdapter {
    fn name(&self) -> &'static str {
        "classic-sheet"
    }

    fn matches(&self, _probe: &SheetProbe) -> bool {
        true
    }

    fn background_target(&self) -> BackgroundTarget {
        BackgroundTarget::Row
    }
}

// Probe order matters: compendium listings also look like directories,
// and the classic adapter accepts everything.
static ADAPTERS: [&dyn SheetAdapter; 4] = [
    &TidySheetAdapter,
    &CompendiumAdapter,
    &SidebarAdapter,
    &ClassicSheetAdapter,
];

/// Select the sheet adapter for a probed application.
pub fn select_adapter(probe: &SheetProbe) -> &'static dyn SheetAdapter {
    ADAPTERS
        .iter()
        .find(|adapter| adapter.matches(probe))
        .copied()
        .unwrap_or(&ClassicSheetAdapter)
}
