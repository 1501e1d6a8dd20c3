// SPDX-License-Identifier: LGPL-3.0-only

//! Hex color parsing and the default-color sentinel.
//!
//! Colors travel through the crate as hex strings because that is the
//! shape the persisted configuration record and the host's inline styles
//! use. [`Rgba`] is a small value type for callers that need components.

use crate::error::ThemeError;

/// The default-color sentinel returned by lookups with no match.
///
/// Callers must treat it as "do not override display", never as
/// "paint black".
pub const DEFAULT_COLOR: &str = "#000000";

/// The default sentinel with an explicit opaque alpha channel.
pub const DEFAULT_COLOR_ALPHA: &str = "#000000ff";

/// A color with 8-bit RGBA components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
    /// Alpha component (255 = opaque).
    pub a: u8,
}

impl Rgba {
    /// Format as a hex string, eliding the alpha channel when opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Parse a hex color string with optional alpha channel.
///
/// Supports both RGB and RGBA formats:
/// - `#rrggbb` - 6 characters, opaque (alpha = 255)
/// - `#rrggbbaa` - 8 characters, with alpha channel (0-255)
pub fn parse_hex(hex: &str) -> Result<Rgba, ThemeError> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() == 6 {
        let r = u8::from_str_radix(&digits[0..2], 16)
            .map_err(|_| ThemeError::InvalidColor(hex.to_string()))?;
        let g = u8::from_str_radix(&digits[2..4], 16)
            .map_err(|_| ThemeError::InvalidColor(hex.to_string()))?;
        let b = u8::from_str_radix(&digits[4..6], 16)
            .map_err(|_| ThemeError::InvalidColor(hex.to_string()))?;
        Ok(Rgba { r, g, b, a: 255 })
    } else if digits.len() == 8 {
        let r = u8::from_str_radix(&digits[0..2], 16)
            .map_err(|_| ThemeError::InvalidColor(hex.to_string()))?;
        let g = u8::from_str_radix(&digits[2..4], 16)
            .map_err(|_| ThemeError::InvalidColor(hex.to_string()))?;
        let b = u8::from_str_radix(&digits[4..6], 16)
            .map_err(|_| ThemeError::InvalidColor(hex.to_string()))?;
        let a = u8::from_str_radix(&digits[6..8], 16)
            .map_err(|_| ThemeError::InvalidColor(hex.to_string()))?;
        Ok(Rgba { r, g, b, a })
    } else {
        Err(ThemeError::InvalidColor(format!(
            "Hex color must be 6 or 8 characters: {}",
            hex
        )))
    }
}

/// Whether a color string is the default sentinel.
///
/// True for a missing or empty color and for the two canonical black
/// sentinels ([`DEFAULT_COLOR`], [`DEFAULT_COLOR_ALPHA`]).
pub fn is_default_color(color: Option<&str>) -> bool {
    match color {
        None => true,
        Some(color) => {
            let color = color.trim();
            color.is_empty()
                || color.eq_ignore_ascii_case(DEFAULT_COLOR)
                || color.eq_ignore_ascii_case(DEFAULT_COLOR_ALPHA)
        }
    }
}
