//! Temperature bands.
//!
//! A deal's temperature is a 0–100 popularity score persisted alongside the
//! deal. It is treated as authoritative input here: nothing in this module
//! derives it from vote counts, it only classifies it for display.

use serde::Serialize;
use std::fmt;

pub const MIN_TEMPERATURE: i64 = 0;
pub const MAX_TEMPERATURE: i64 = 100;

/// Qualitative band for a temperature, from coldest to hottest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureBand {
    Freezing,
    Cool,
    Warm,
    Hot,
    Blazing,
}

impl TemperatureBand {
    /// Inclusive lower bound of the band.
    pub fn lower_bound(&self) -> i64 {
        match self {
            TemperatureBand::Freezing => 0,
            TemperatureBand::Cool => 20,
            TemperatureBand::Warm => 40,
            TemperatureBand::Hot => 60,
            TemperatureBand::Blazing => 80,
        }
    }

    /// Color band key used by the rendering layer.
    pub fn color_band(&self) -> &'static str {
        match self {
            TemperatureBand::Freezing => "freezing",
            TemperatureBand::Cool => "cool",
            TemperatureBand::Warm => "warm",
            TemperatureBand::Hot => "hot",
            TemperatureBand::Blazing => "blazing",
        }
    }

    /// Label shown next to the thermometer.
    pub fn label(&self) -> &'static str {
        match self {
            TemperatureBand::Freezing => "Congelando",
            TemperatureBand::Cool => "Frio",
            TemperatureBand::Warm => "Morno",
            TemperatureBand::Hot => "Quente",
            TemperatureBand::Blazing => "Em chamas!",
        }
    }
}

impl fmt::Display for TemperatureBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.color_band())
    }
}

pub fn clamp_temperature(temperature: i64) -> i64 {
    temperature.clamp(MIN_TEMPERATURE, MAX_TEMPERATURE)
}

/// Classify a stored temperature. Out-of-range input is clamped, never rejected.
pub fn classify_temperature(temperature: i64) -> TemperatureBand {
    match clamp_temperature(temperature) {
        t if t >= 80 => TemperatureBand::Blazing,
        t if t >= 60 => TemperatureBand::Hot,
        t if t >= 40 => TemperatureBand::Warm,
        t if t >= 20 => TemperatureBand::Cool,
        _ => TemperatureBand::Freezing,
    }
}

/// Width of the thermometer bar, in percent.
pub fn gauge_width(temperature: i64) -> u8 {
    clamp_temperature(temperature) as u8
}
