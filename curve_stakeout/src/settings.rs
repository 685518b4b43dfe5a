//! Layout settings stored as JSON next to a project.

use serde::{Deserialize, Serialize};

use crate::sequence::SequenceMethod;

/// Station interval, side stake offset and output precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutSettings {
    pub interval: f64,
    pub method: SequenceMethod,
    /// Offset of the side stakes; `None` stakes the centreline only.
    pub side_distance: Option<f64>,
    /// Decimal places for stations and coordinates.
    pub coordinate_decimals: u32,
    /// Decimal places for azimuths in radians.
    pub angle_decimals: u32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            interval: 20.0,
            method: SequenceMethod::Whole,
            side_distance: None,
            coordinate_decimals: 3,
            angle_decimals: 6,
        }
    }
}

impl LayoutSettings {
    /// Saves these settings to a JSON file.
    pub fn save(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }

    /// Loads settings from a JSON file. Missing keys keep their defaults.
    pub fn load(path: &str) -> std::io::Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let settings: LayoutSettings = serde_json::from_str(&data)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(settings)
    }
}
