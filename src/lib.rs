// SPDX-License-Identifier: LGPL-3.0-only

#![warn(missing_docs)]

//! # Rarity Theme
//!
//! Color theming for virtual-tabletop character sheets and compendium
//! listings: item rows are tinted by item rarity, spell school, or
//! class-feature type.
//!
//! ## Overview
//!
//! The crate consists of three pieces the host's rendering layer builds
//! on:
//!
//! - **Configuration merger** ([`merge::merge_configurations`]): folds
//!   the layered configuration record (built-in tables, captured system
//!   defaults, user customizations) into one flat lookup from normalized
//!   key to color and name.
//! - **Mode resolver** ([`mode::ModeFlags`]): derives the
//!   background/border/text booleans once per setup from the enumerated
//!   mode setting.
//! - **Color lookup** ([`palette::Palette`]): answers per-item color
//!   queries against the merged map, returning a default sentinel that
//!   means "do not override display".
//!
//! [`context::ColorContext`] ties the pieces together as an explicit
//! per-session object with an explicit [`refresh`](context::ColorContext::refresh);
//! the [`adapter`] module is the seam to the host's DOM-owning
//! presentation layer.
//!
//! ## Quick Start
//!
//! ```rust
//! use rarity_theme::{ColorContext, ModuleSettings, SheetItem, SystemTaxonomy};
//!
//! let settings = ModuleSettings::default();
//! let taxonomy = SystemTaxonomy::default();
//! let context = ColorContext::initialize(settings, &taxonomy, None, false).unwrap();
//!
//! let item = SheetItem::physical("Vorpal Sword", Some("legendary"));
//! assert_eq!(context.color_for(&item), "#ffa500ff");
//! ```
//!
//! All work runs on host-dispatched lifecycle callbacks; nothing here
//! spawns threads or blocks, and the merged map is immutable between
//! explicit rebuilds.

/// Contains the presentation seam: sheet adapters and style plans.
pub mod adapter;
/// Contains the built-in default color tables.
pub mod builtin;
/// Contains the configuration categories.
pub mod category;
/// Contains hex color parsing and the default sentinel.
pub mod color;
/// Contains the persisted configuration record.
pub mod config;
/// Contains the per-session [context::ColorContext].
pub mod context;
/// Contains the displayed-item model.
pub mod entity;
/// Contains the [error::ThemeError] type.
pub mod error;
/// Contains the configuration merger.
pub mod merge;
/// Contains color modes and derived flags.
pub mod mode;
/// Contains the color lookup API.
pub mod palette;
/// Contains the module settings record.
pub mod settings;
/// Contains the host taxonomy snapshot.
pub mod taxonomy;

pub use adapter::{
    select_adapter, BackgroundTarget, ContrastSource, SheetAdapter, SheetProbe, StylePlan,
};
pub use category::Category;
pub use color::{is_default_color, parse_hex, Rgba, DEFAULT_COLOR};
pub use config::{CategoryConfig, ColorConfigurations, ColorEntry, CustomEntry, DefaultEntry};
pub use context::ColorContext;
pub use entity::{ItemKind, SheetItem};
pub use error::ThemeError;
pub use merge::{merge_configurations, normalize_key, ColorMap};
pub use mode::{ColorMode, ModeFlags};
pub use palette::Palette;
pub use settings::ModuleSettings;
pub use taxonomy::SystemTaxonomy;
