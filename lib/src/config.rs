use crate::geometry::{BoundingBox, Region, RegionError};
use crate::render::Color;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid spawn box: {0}")]
    SpawnBox(#[from] RegionError),
    #[error("window size must be non-zero, got {width}x{height}")]
    WindowSize { width: u32, height: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "regionboard".to_string(),
            width: 800,
            height: 600,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    /// box every new circle is inscribed in
    pub spawn_box: BoundingBox,
    pub circle_fill: Color,
    pub label_color: Color,
    pub background: Color,
    pub add_button: BoundingBox,
    pub moveable_switch: BoundingBox,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            spawn_box: BoundingBox::new(0.0, 64.0, 50.0, 50.0),
            circle_fill: Color::YELLOW,
            label_color: Color::BLACK,
            background: Color::WHITE,
            add_button: BoundingBox::new(10.0, 10.0, 40.0, 40.0),
            moveable_switch: BoundingBox::new(60.0, 10.0, 60.0, 30.0),
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = Self::from_json(&fs::read_to_string(path)?)?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::WindowSize {
                width: self.window.width,
                height: self.window.height,
            });
        }
        self.spawn_region()?;
        Ok(())
    }

    pub fn spawn_region(&self) -> Result<Region, RegionError> {
        Region::from_bounding_box(self.spawn_box)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.spawn_box, BoundingBox::new(0.0, 64.0, 50.0, 50.0));
    }

    #[test]
    fn test_partial_override() {
        let json = r#"{
            "window": { "width": 1024 },
            "circle_fill": { "r": 0, "g": 128, "b": 255 }
        }"#;
        let config = Config::from_json(json).unwrap();
        assert_eq!(config.window.width, 1024);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.window.title, "regionboard");
        assert_eq!(config.circle_fill, Color::rgb(0, 128, 255));
    }

    #[test]
    fn test_rejects_zero_spawn_box() {
        let json = r#"{ "spawn_box": { "x": 0, "y": 0, "width": 0, "height": 0 } }"#;
        assert!(matches!(
            Config::from_json(json),
            Err(ConfigError::SpawnBox(RegionError::InvalidRadius(_)))
        ));
    }

    #[test]
    fn test_rejects_zero_window() {
        let json = r#"{ "window": { "height": 0 } }"#;
        assert!(matches!(
            Config::from_json(json),
            Err(ConfigError::WindowSize { width: 800, height: 0 })
        ));
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(Config::from_json("{ nope"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load("/definitely/not/here/regionboard.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!("regionboard-config-{}.json", std::process::id()));
        fs::write(&path, r#"{ "spawn_box": { "x": 100, "y": 100, "width": 80, "height": 80 } }"#).unwrap();
        let config = Config::load(&path).unwrap();
        let _ = fs::remove_file(&path);
        let region = config.spawn_region().unwrap();
        assert_eq!(region.radius(), 40.0);
        assert_eq!(region.center.x, 140.0);
    }
}
