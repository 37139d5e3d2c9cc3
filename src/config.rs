use std::error::Error;

use serde::{Serialize, Deserialize};

const CONFIG_PATH: &str = "graphedit.toml";

/// Persisted editor preferences. Absent fields fall back to the editor's
/// defaults.
#[derive(Serialize, Deserialize)]
pub struct Config {
    pub auto_scroll: Option<bool>,
    /// Fraction of the canvas width the playhead may occupy before
    /// autoscroll kicks in.
    pub scroll_zone_ratio: Option<f32>,
    /// Half-width of a control point's hit box, in pixels.
    pub point_radius: Option<f32>,
    pub quantize: Option<u16>,
    pub quantize_enabled: Option<bool>,
}

impl Config {
    /// An empty config: every field defers to the editor's defaults.
    pub fn default() -> Self {
        Self {
            auto_scroll: None,
            scroll_zone_ratio: None,
            point_radius: None,
            quantize: None,
            quantize_enabled: None,
        }
    }

    pub fn load() -> Result<Self, Box<dyn Error>> {
        let s = std::fs::read_to_string(CONFIG_PATH)?;
        let c = toml::from_str(&s)?;
        Ok(c)
    }

    pub fn save(&self) -> Result<(), Box<dyn Error>> {
        let s = toml::to_string(self)?;
        std::fs::write(CONFIG_PATH, s)?;
        Ok(())
    }
}
