//! Physical constants and integration settings for the flight model.
//!
//! Everything here is SI. Presets follow the same pattern as the rest of the
//! configuration: a const constructor for the defaults plus a few named
//! environments.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Most integration steps one throw may take.
pub const MAX_STEPS: f64 = 1.0e6;

/// Environment and integration constants shared by every disc in a pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Constants {
    /// Gravitational acceleration (m/s²)
    pub g: f64,

    /// Air density (kg/m³)
    /// Standard value: 1.225 kg/m³ at 15°C, 1 atm
    pub rho_air: f64,

    /// Integration step (s)
    pub dt: f64,

    /// Flights still airborne after this long are cut off (s)
    pub max_flight_time: f64,

    /// Upper bound on the precession roll rate (rad/s).
    /// Keeps a barely spinning disc from producing unbounded roll.
    pub max_roll_rate: f64,
}

impl Constants {
    /// Create a new Constants instance with default values.
    pub const fn new() -> Self {
        Self {
            g: 9.81,
            rho_air: 1.225,
            dt: 0.01,
            max_flight_time: 15.0,
            max_roll_rate: 10.0,
        }
    }

    /// Warm, humid summer day.
    pub fn summer() -> Self {
        Self {
            rho_air: 1.16,
            ..Self::new()
        }
    }

    /// Course at roughly 1500 m elevation.
    pub fn high_altitude() -> Self {
        Self {
            rho_air: 1.06,
            ..Self::new()
        }
    }

    /// Look up a preset by name.
    pub fn preset(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "standard" | "default" => Some(Self::new()),
            "summer" => Some(Self::summer()),
            "high_altitude" | "high-altitude" => Some(Self::high_altitude()),
            _ => None,
        }
    }

    /// Reject values that would stall or break the integrator.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |name: &'static str, value: f64, reason: &'static str| -> Result<(), ConfigError> {
            Err(ConfigError::InvalidParameter { name, value, reason })
        };

        if !self.g.is_finite() {
            return invalid("g", self.g, "must be finite");
        }
        if !(self.rho_air.is_finite() && self.rho_air >= 0.0) {
            return invalid("rho_air", self.rho_air, "must be finite and non-negative");
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return invalid("dt", self.dt, "must be positive");
        }
        if !(self.max_flight_time.is_finite() && self.max_flight_time >= self.dt) {
            return invalid(
                "max_flight_time",
                self.max_flight_time,
                "must be finite and at least one step",
            );
        }
        if self.max_flight_time / self.dt > MAX_STEPS {
            return invalid("max_flight_time", self.max_flight_time, "needs too many steps for dt");
        }
        if !(self.max_roll_rate.is_finite() && self.max_roll_rate > 0.0) {
            return invalid("max_roll_rate", self.max_roll_rate, "must be positive");
        }
        Ok(())
    }

    /// Calculate q = 0.5 * ρ * v² * area
    #[inline(always)]
    pub fn dynamic_pressure(&self, speed: f64, area: f64) -> f64 {
        0.5 * self.rho_air * speed * speed * area
    }

    /// Get a summary of constants as ordered label/value pairs for reporting.
    pub fn summary(&self) -> Vec<(&'static str, String)> {
        vec![
            ("g (m/s²)", format!("{:.4}", self.g)),
            ("ρ_air (kg/m³)", format!("{:.4}", self.rho_air)),
            ("dt (s)", format!("{:.4}", self.dt)),
            ("max flight time (s)", format!("{:.1}", self.max_flight_time)),
            ("max roll rate (rad/s)", format!("{:.1}", self.max_roll_rate)),
        ]
    }
}

impl Default for Constants {
    fn default() -> Self {
        Self::new()
    }
}
