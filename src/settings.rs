//! Runtime settings
//!
//! Loaded from an optional JSON file; any field left out keeps its default.

use std::fs;
use std::path::Path;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{TARGET_FPS, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use crate::{Error, Result};

/// Which renderer the binary drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RendererKind {
    /// Text frames on stdout
    #[default]
    Ascii,
    /// One JSON frame per line on stdout
    Json,
    /// No output
    None,
}

impl RendererKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RendererKind::Ascii => "ascii",
            RendererKind::Json => "json",
            RendererKind::None => "none",
        }
    }
}

/// Who drives the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// The built-in exit-seeking driver
    #[default]
    Autopilot,
    /// Key commands read from stdin
    Keyboard,
}

impl InputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputMode::Autopilot => "autopilot",
            InputMode::Keyboard => "keyboard",
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Viewport size in world units
    pub viewport_width: i32,
    pub viewport_height: i32,
    /// Frame rate of the loop
    pub target_fps: u32,
    /// RNG seed; random (and logged) when absent
    pub seed: Option<u64>,
    pub renderer: RendererKind,
    pub input: InputMode,
    /// Ascii renderer draws every n-th frame
    pub ascii_interval: u64,
    /// Stop after this many frames (runs until quit when absent)
    pub max_frames: Option<u64>,
    /// Sleep between frames to hold the frame rate; when false the loop
    /// runs flat out on a simulated clock
    pub realtime: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            target_fps: TARGET_FPS,
            seed: None,
            renderer: RendererKind::Ascii,
            input: InputMode::Autopilot,
            ascii_interval: TARGET_FPS as u64,
            max_frames: Some(60 * TARGET_FPS as u64),
            realtime: true,
        }
    }
}

impl Settings {
    /// Parse settings from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject values the loop cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.viewport_width <= 0 || self.viewport_height <= 0 {
            return Err(Error::InvalidSettings(format!(
                "viewport must be positive, got {}x{}",
                self.viewport_width, self.viewport_height
            )));
        }
        if self.target_fps == 0 {
            return Err(Error::InvalidSettings("target_fps must be at least 1".into()));
        }
        Ok(())
    }

    pub fn viewport(&self) -> IVec2 {
        IVec2::new(self.viewport_width, self.viewport_height)
    }
}
