// SPDX-License-Identifier: LGPL-3.0-only

//! The module settings record and its file I/O.
//!
//! Field names mirror the record the host settings store persists
//! (`rarityFlag`, `rarityColorMode`, `disableRarityColorOnCompendium`,
//! `configurations`), so loading and write-back go through unchanged.
//! Both TOML and JSON are accepted; write-back is TOML.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::ColorConfigurations;
use crate::error::ThemeError;
use crate::mode::{ColorMode, ModeFlags};

/// The full settings record of the module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleSettings {
    /// Master enable flag.
    #[serde(rename = "rarityFlag")]
    pub enabled: bool,
    /// Active color-application mode.
    #[serde(rename = "rarityColorMode")]
    pub color_mode: ColorMode,
    /// Opt out of coloring compendium listings.
    #[serde(rename = "disableRarityColorOnCompendium")]
    pub disable_on_compendium: bool,
    /// The layered color configuration record.
    pub configurations: ColorConfigurations,
}

impl Default for ModuleSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            color_mode: ColorMode::default(),
            disable_on_compendium: false,
            configurations: ColorConfigurations::default(),
        }
    }
}

impl ModuleSettings {
    /// Load the settings record from a TOML or JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ThemeError::NotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)
            .map_err(|e| ThemeError::ReadError(path.to_path_buf(), e))?;

        match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => Self::from_toml(&content, path),
            Some("json") => Self::from_json(&content, path),
            _ => Err(ThemeError::ParseError(
                path.to_path_buf(),
                "Unsupported settings file format. Use .toml or .json".to_string(),
            )),
        }
    }

    /// Parse the settings record from TOML content.
    pub fn from_toml<P: AsRef<Path>>(content: &str, path: P) -> Result<Self, ThemeError> {
        toml::from_str(content)
            .map_err(|e| ThemeError::ParseError(path.as_ref().to_path_buf(), e.to_string()))
    }

    /// Parse the settings record from JSON content (the shape the host
    /// settings store exports).
    pub fn from_json<P: AsRef<Path>>(content: &str, path: P) -> Result<Self, ThemeError> {
        serde_json::from_str(content)
            .map_err(|e| ThemeError::ParseError(path.as_ref().to_path_buf(), e.to_string()))
    }

    /// Write the settings record back as TOML.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ThemeError> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| ThemeError::ParseError(path.to_path_buf(), e.to_string()))?;
        fs::write(path, content).map_err(|e| ThemeError::WriteError(path.to_path_buf(), e))
    }

    /// Derive the mode flags from this record.
    pub fn flags(&self) -> ModeFlags {
        ModeFlags::resolve(self.color_mode, self.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CustomEntry;

    #[test]
    fn defaults_are_enabled_with_text_and_border() {
        let settings = ModuleSettings::default();
        assert!(settings.enabled);
        assert_eq!(settings.color_mode, ColorMode::TextAndBorder);
        assert!(!settings.disable_on_compendium);
        let flags = settings.flags();
        assert!(flags.enabled && flags.text && flags.border && !flags.background);
    }

    #[test]
    fn parses_a_partial_toml_record() {
        let toml = r##"
            rarityColorMode = "OnlyBackground"

            [configurations.itemRarity.custom.0]
            key = "mythic"
            color = "#aa00aaff"
            name = "Mythic"
        "##;
        let settings = ModuleSettings::from_toml(toml, "settings.toml").unwrap();
        assert!(settings.enabled); // missing field takes the default
        assert_eq!(settings.color_mode, ColorMode::OnlyBackground);
        assert_eq!(
            settings.configurations.item_rarity.custom["0"].key,
            "mythic"
        );
    }

    #[test]
    fn parses_the_host_json_export_shape() {
        let json = r#"{
            "rarityFlag": false,
            "rarityColorMode": "None",
            "configurations": {
                "spellSchools": {
                    "custom": {
                        "0": { "key": "chr", "label": "Chronurgy" }
                    }
                }
            }
        }"#;
        let settings = ModuleSettings::from_json(json, "settings.json").unwrap();
        assert!(!settings.enabled);
        assert_eq!(settings.color_mode, ColorMode::None);
        assert_eq!(settings.flags(), ModeFlags::DISABLED);
        let entry: &CustomEntry = &settings.configurations.spell_schools.custom["0"];
        assert_eq!(entry.display_name(), "Chronurgy");
    }

    #[test]
    fn toml_round_trip_preserves_the_record() {
        let mut settings = ModuleSettings::default();
        settings.color_mode = ColorMode::OnlyBorder;
        settings.configurations.item_rarity.custom.insert(
            "0".to_string(),
            CustomEntry {
                key: "mythic".to_string(),
                color: Some("#aa00aaff".to_string()),
                name: Some("Mythic".to_string()),
                label: None,
            },
        );

        let toml = toml::to_string_pretty(&settings).unwrap();
        let back = ModuleSettings::from_toml(&toml, "settings.toml").unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn file_io_round_trip() {
        let dir = std::env::temp_dir().join("rarity_theme_settings_test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.toml");

        let settings = ModuleSettings::default();
        settings.save_to_file(&path).unwrap();
        let back = ModuleSettings::from_file(&path).unwrap();
        assert_eq!(back, settings);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_files_are_typed_errors() {
        assert!(matches!(
            ModuleSettings::from_file("does-not-exist.toml"),
            Err(ThemeError::NotFound(_))
        ));
    }
}
