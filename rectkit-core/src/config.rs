//! Toolkit configuration.
//!
//! Read from `config.json` in the platform config directory, or from the
//! path in `RECTKIT_CONFIG`. A missing file means defaults; a file that
//! exists but does not parse is an error.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::rectangle::Rectangle;
use crate::scene::Scene;
use crate::viewport::Viewport;

pub const CONFIG_ENV: &str = "RECTKIT_CONFIG";
pub const CONFIG_FILE: &str = "config.json";

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
            title: String::from("rectkit"),
            width: 800,
            height: 600,
        }
    }
}

/// One rectangle in the initial scene. Unset colors fall back to the
/// widget defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectSpec {
    pub x: f32,
    pub y: f32,
    pub width: u32,
    pub height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_color: Option<Color>,
}

impl RectSpec {
    pub fn build(&self) -> Result<Rectangle> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }

        let mut rect = Rectangle::new(Point::new(self.x, self.y), self.width, self.height);
        if let Some(c) = self.color {
            rect = rect.with_color(c);
        }
        if let Some(c) = self.hover_color {
            rect = rect.with_hover_color(c);
        }
        if let Some(c) = self.focus_color {
            rect = rect.with_focus_color(c);
        }
        Ok(rect)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolkitConfig {
    pub window: WindowConfig,
    pub clear_color: Color,
    pub rectangles: Vec<RectSpec>,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        let spec = |x, y, color| RectSpec {
            x,
            y,
            width: 160,
            height: 100,
            color: Some(color),
            hover_color: None,
            focus_color: None,
        };

        Self {
            window: WindowConfig::default(),
            clear_color: Color::rgb(0.08, 0.09, 0.11),
            rectangles: vec![
                spec(60.0, 60.0, Color::DEFAULT_FILL),
                spec(260.0, 60.0, Color::rgb(0.40, 0.55, 0.95)),
                spec(460.0, 60.0, Color::rgb(0.35, 0.90, 0.35)),
                // Overlaps the first two to show topmost-wins hit testing.
                spec(180.0, 120.0, Color::rgb(0.95, 0.85, 0.30)),
            ],
        }
    }
}

impl ToolkitConfig {
    /// `RECTKIT_CONFIG` if set, else `<config dir>/rectkit/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        if let Some(p) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(p));
        }
        ProjectDirs::from("", "", "rectkit").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Load from [`ToolkitConfig::default_path`], falling back to defaults
    /// when there is no file.
    pub fn load_or_default() -> Result<Self> {
        let Some(path) = Self::default_path() else {
            tracing::warn!("No config directory available, using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            tracing::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        tracing::info!("Loading config from {}", path.display());
        Self::load(&path)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let io_err = |source| Error::Io {
            path: path.display().to_string(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text).map_err(io_err)
    }

    pub fn validate(&self) -> Result<()> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(Error::InvalidSize {
                width: self.window.width,
                height: self.window.height,
            });
        }
        for spec in &self.rectangles {
            if spec.width == 0 || spec.height == 0 {
                return Err(Error::InvalidSize {
                    width: spec.width,
                    height: spec.height,
                });
            }
        }
        Ok(())
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.window.width, self.window.height)
    }

    /// Build the initial scene, rectangles stacked in file order.
    pub fn build_scene(&self) -> Result<Scene> {
        let mut scene = Scene::new(self.viewport());
        for spec in &self.rectangles {
            scene.add(spec.build()?);
        }
        Ok(scene)
    }
}
