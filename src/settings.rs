// Runtime settings
//
// Loaded from an optional JSON file. Every field has a default, so a file
// only needs the values it changes.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::game::characters::HeroConfig;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    pub window_width: u32,
    pub window_height: u32,
    /// Map pixels per screen pixel
    pub zoom: f32,

    // === Assets ===
    /// Root directory for maps and art
    pub resources_dir: PathBuf,
    /// Map file, relative to `resources_dir`
    pub map: String,
    /// Hero spritesheet, relative to `resources_dir`
    pub spritesheet: String,

    /// Draw the floor sensor
    pub debug: bool,

    pub hero: HeroConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 600,
            zoom: 2.0,

            resources_dir: PathBuf::from("data"),
            map: "maps/dungeon_0.tmj".to_string(),
            spritesheet: "art/platformer_template_g.png".to_string(),

            debug: false,

            hero: HeroConfig::default(),
        }
    }
}

impl Settings {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!((settings.window_width, settings.window_height), (800, 600));
        assert_eq!(settings.zoom, 2.0);
        assert!(!settings.debug);
        assert_eq!(settings.hero, HeroConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings =
            Settings::from_json(r#"{ "debug": true, "hero": { "move_speed": 150.0 } }"#).unwrap();

        assert!(settings.debug);
        assert_eq!(settings.hero.move_speed, 150.0);
        assert_eq!(settings.hero.gravity, HeroConfig::default().gravity);
        assert_eq!(settings.map, "maps/dungeon_0.tmj");
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn test_load_errors() {
        let err = Settings::load("no/such/settings.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));

        let path = std::env::temp_dir().join(format!("quest-settings-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "zoom": "big" }"#).unwrap();
        let err = Settings::load(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, SettingsError::Parse { .. }));
    }
}
