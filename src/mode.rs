// SPDX-License-Identifier: LGPL-3.0-only

//! Color-application modes and the derived mode flags.

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// The color-application mode setting.
///
/// The serialized names are the fixed string set exposed by the settings
/// UI: `None`, `TextAndBorder`, `BackgroundAndBorder`, `OnlyBackground`,
/// `OnlyText`, `OnlyBorder`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorMode {
    /// No coloring at all.
    None,
    /// Color the item name text and the item image border.
    #[default]
    TextAndBorder,
    /// Tint the row background and color the item image border.
    BackgroundAndBorder,
    /// Tint the row background only.
    OnlyBackground,
    /// Color the item name text only.
    OnlyText,
    /// Color the item image border only.
    OnlyBorder,
}

impl ColorMode {
    /// All modes, in settings-UI order.
    pub const ALL: [ColorMode; 6] = [
        ColorMode::None,
        ColorMode::TextAndBorder,
        ColorMode::BackgroundAndBorder,
        ColorMode::OnlyBackground,
        ColorMode::OnlyText,
        ColorMode::OnlyBorder,
    ];

    /// Get the string representation of the mode (settings value).
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::None => "None",
            ColorMode::TextAndBorder => "TextAndBorder",
            ColorMode::BackgroundAndBorder => "BackgroundAndBorder",
            ColorMode::OnlyBackground => "OnlyBackground",
            ColorMode::OnlyText => "OnlyText",
            ColorMode::OnlyBorder => "OnlyBorder",
        }
    }
}

impl std::str::FromStr for ColorMode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "None" => Ok(ColorMode::None),
            "TextAndBorder" => Ok(ColorMode::TextAndBorder),
            "BackgroundAndBorder" => Ok(ColorMode::BackgroundAndBorder),
            "OnlyBackground" => Ok(ColorMode::OnlyBackground),
            "OnlyText" => Ok(ColorMode::OnlyText),
            "OnlyBorder" => Ok(ColorMode::OnlyBorder),
            other => Err(ThemeError::InvalidMode(other.to_string())),
        }
    }
}

/// The four booleans derived once per setup from the mode setting and the
/// module enabled flag. Recomputed only by a fresh setup or an explicit
/// context refresh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeFlags {
    /// Whether coloring is active at all.
    pub enabled: bool,
    /// Whether row backgrounds are tinted.
    pub background: bool,
    /// Whether item image borders are colored.
    pub border: bool,
    /// Whether item name text is colored.
    pub text: bool,
}

impl ModeFlags {
    /// Flags with everything off.
    pub const DISABLED: ModeFlags = ModeFlags {
        enabled: false,
        background: false,
        border: false,
        text: false,
    };

    /// Derive the flags from the two settings values.
    pub fn resolve(mode: ColorMode, enabled_flag: bool) -> Self {
        let (background, border, text) = match mode {
            ColorMode::None => (false, false, false),
            ColorMode::TextAndBorder => (false, true, true),
            ColorMode::BackgroundAndBorder => (true, true, false),
            ColorMode::OnlyBackground => (true, false, false),
            ColorMode::OnlyText => (false, false, true),
            ColorMode::OnlyBorder => (false, true, false),
        };
        Self {
            enabled: enabled_flag && mode != ColorMode::None,
            background,
            border,
            text,
        }
    }
}
