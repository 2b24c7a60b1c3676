//! Tunable simulation parameters.
//!
//! A [`Settings`] value is owned by the caller and handed to every force and
//! lifecycle call, so edits made between two ticks are picked up by the next
//! one. Fields can be addressed by name for control panels and config files.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

/// Every tunable, in the order a control panel lists them.
pub const FIELD_NAMES: [&str; 10] = [
    "gravity",
    "repulse_force",
    "attract_force",
    "trail_opacity",
    "star_size",
    "star_count",
    "simulation_speed",
    "stars_per_click",
    "central_gravity",
    "star_gravity",
];

/// Simulation parameters.
///
/// Missing fields in a JSON file fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Gravitational constant used by central and inter-star gravity.
    pub gravity: f32,
    /// Strength captured by newly placed repulsors.
    pub repulse_force: f32,
    /// Strength captured by newly placed attractors.
    pub attract_force: f32,
    /// Population size used by reset and restart.
    pub star_count: usize,
    /// Alpha of the fade layer painted over the previous frame.
    pub trail_opacity: f32,
    /// Average star radius; actual radii are `u * star_size + 0.5`.
    pub star_size: f32,
    /// Scales every acceleration and the position advance.
    pub simulation_speed: f32,
    /// Stars created by one burst click.
    pub stars_per_click: usize,
    pub central_gravity: bool,
    pub star_gravity: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gravity: 5000.0,
            repulse_force: 10000.0,
            attract_force: 10000.0,
            star_count: 1500,
            trail_opacity: 0.3,
            star_size: 1.5,
            simulation_speed: 1.0,
            stars_per_click: 10,
            central_gravity: true,
            star_gravity: false,
        }
    }
}

/// A value read from or written to a named settings field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingValue {
    Float(f32),
    Int(usize),
    Bool(bool),
}

impl Settings {
    /// Overwrite every field with its default.
    pub fn reset_to_defaults(&mut self) {
        *self = Self::default();
    }

    /// Load settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a field by name.
    pub fn get(&self, name: &str) -> Result<SettingValue> {
        let value = match name {
            "gravity" => SettingValue::Float(self.gravity),
            "repulse_force" => SettingValue::Float(self.repulse_force),
            "attract_force" => SettingValue::Float(self.attract_force),
            "trail_opacity" => SettingValue::Float(self.trail_opacity),
            "star_size" => SettingValue::Float(self.star_size),
            "simulation_speed" => SettingValue::Float(self.simulation_speed),
            "star_count" => SettingValue::Int(self.star_count),
            "stars_per_click" => SettingValue::Int(self.stars_per_click),
            "central_gravity" => SettingValue::Bool(self.central_gravity),
            "star_gravity" => SettingValue::Bool(self.star_gravity),
            _ => return Err(Error::UnknownSetting(name.to_string())),
        };
        Ok(value)
    }

    /// Write a field by name.
    ///
    /// Float fields also accept integers. No range checks are made: the
    /// engine tolerates any finite value, including negative strengths.
    pub fn set(&mut self, name: &str, value: SettingValue) -> Result<()> {
        match name {
            "gravity" => self.gravity = float_value("gravity", value)?,
            "repulse_force" => self.repulse_force = float_value("repulse_force", value)?,
            "attract_force" => self.attract_force = float_value("attract_force", value)?,
            "trail_opacity" => self.trail_opacity = float_value("trail_opacity", value)?,
            "star_size" => self.star_size = float_value("star_size", value)?,
            "simulation_speed" => {
                self.simulation_speed = float_value("simulation_speed", value)?
            }
            "star_count" => self.star_count = int_value("star_count", value)?,
            "stars_per_click" => self.stars_per_click = int_value("stars_per_click", value)?,
            "central_gravity" => self.central_gravity = bool_value("central_gravity", value)?,
            "star_gravity" => self.star_gravity = bool_value("star_gravity", value)?,
            _ => return Err(Error::UnknownSetting(name.to_string())),
        }
        Ok(())
    }

    /// Slider bounds offered by the control panel for numeric fields.
    ///
    /// These are presentation hints only; `set` does not enforce them.
    pub fn slider_range(name: &str) -> Option<RangeInclusive<f32>> {
        let range = match name {
            "gravity" => 1000.0..=20000.0,
            "repulse_force" | "attract_force" => 1000.0..=50000.0,
            "trail_opacity" => 0.01..=1.0,
            "star_size" => 0.5..=5.0,
            "star_count" => 100.0..=5000.0,
            "simulation_speed" => 0.1..=5.0,
            "stars_per_click" => 1.0..=100.0,
            _ => return None,
        };
        Some(range)
    }
}

fn float_value(name: &'static str, value: SettingValue) -> Result<f32> {
    match value {
        SettingValue::Float(v) => Ok(v),
        SettingValue::Int(v) => Ok(v as f32),
        SettingValue::Bool(_) => Err(Error::SettingType {
            name,
            expected: "numeric",
        }),
    }
}

fn int_value(name: &'static str, value: SettingValue) -> Result<usize> {
    match value {
        SettingValue::Int(v) => Ok(v),
        _ => Err(Error::SettingType {
            name,
            expected: "integer",
        }),
    }
}

fn bool_value(name: &'static str, value: SettingValue) -> Result<bool> {
    match value {
        SettingValue::Bool(v) => Ok(v),
        _ => Err(Error::SettingType {
            name,
            expected: "boolean",
        }),
    }
}
