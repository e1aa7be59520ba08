//! Adjustable launch inputs, held in display units.

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::error::ConfigError;
use crate::params::LaunchParameters;
use crate::units::{UnitFactors, UnitSystem};

/// One user-facing launch control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Control {
    Speed,
    Roll,
    Pitch,
    Nose,
    Mass,
    Spin,
}

impl Control {
    pub const ALL: [Control; 6] = [
        Control::Speed,
        Control::Roll,
        Control::Pitch,
        Control::Nose,
        Control::Mass,
        Control::Spin,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Speed => "speed",
            Self::Roll => "roll",
            Self::Pitch => "pitch",
            Self::Nose => "nose",
            Self::Mass => "mass",
            Self::Spin => "spin",
        }
    }

    /// Inclusive `(min, max)` in display units.
    pub fn range(&self, units: UnitSystem) -> (f64, f64) {
        match (self, units) {
            (Self::Speed, UnitSystem::Metric) => (13.4, 35.8),
            (Self::Speed, UnitSystem::Imperial) => (30.0, 80.0),
            (Self::Roll, _) => (-110.0, 110.0),
            (Self::Pitch, _) => (-10.0, 50.0),
            (Self::Nose, _) => (-10.0, 10.0),
            (Self::Mass, _) => (140.0, 200.0),
            (Self::Spin, _) => (0.0, 2.0),
        }
    }

    /// Unit shown next to the value.
    pub fn unit(&self, units: UnitSystem) -> &'static str {
        match (self, units) {
            (Self::Speed, UnitSystem::Metric) => "m/s",
            (Self::Speed, UnitSystem::Imperial) => "mph",
            (Self::Roll | Self::Pitch | Self::Nose, _) => "deg",
            (Self::Mass, _) => "g",
            (Self::Spin, _) => "x",
        }
    }
}

impl FromStr for Control {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| ConfigError::UnknownControl(s.to_string()))
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse `NAME=VALUE`, e.g. `speed=30`.
pub fn parse_assignment(text: &str) -> Result<(Control, f64), ConfigError> {
    let (name, value) = text
        .split_once('=')
        .ok_or_else(|| ConfigError::MalformedAssignment(text.to_string()))?;
    let control = name.parse::<Control>()?;
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::MalformedAssignment(text.to_string()))?;
    Ok((control, value))
}

/// Current value of every control.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPanel {
    units: UnitSystem,
    values: [f64; 6],
}

impl ControlPanel {
    /// Controls showing `launch`, clamped into range.
    pub fn from_launch(units: UnitSystem, launch: &LaunchParameters) -> Self {
        let factors = UnitFactors::for_system(units);
        let mut panel = Self {
            units,
            values: [0.0; 6],
        };
        let initial = [
            (Control::Speed, launch.speed * factors.speed),
            (Control::Roll, launch.roll_angle),
            (Control::Pitch, launch.pitch),
            (Control::Nose, launch.nose_angle),
            (Control::Mass, launch.mass * 1000.0),
            (Control::Spin, launch.spin_multiplier),
        ];
        for (control, value) in initial {
            let (lo, hi) = control.range(units);
            panel.values[control as usize] = value.clamp(lo, hi);
        }
        panel
    }

    pub fn units(&self) -> UnitSystem {
        self.units
    }

    pub fn get(&self, control: Control) -> f64 {
        self.values[control as usize]
    }

    /// Set a control, clamping into range. Returns the value actually held.
    pub fn set(&mut self, control: Control, value: f64) -> Result<f64, ConfigError> {
        if !value.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: control.name(),
                value,
                reason: "must be finite",
            });
        }
        let (lo, hi) = control.range(self.units);
        let held = value.clamp(lo, hi);
        if held != value {
            warn!(control = %control, requested = value, held, "control value clamped to range");
        }
        self.values[control as usize] = held;
        Ok(held)
    }

    /// Name/value pairs in display order.
    pub fn values(&self) -> impl Iterator<Item = (Control, f64)> + '_ {
        Control::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    /// Read every control into SI launch parameters. Position and yaw come
    /// from `base`.
    pub fn launch_parameters(&self, base: &LaunchParameters) -> LaunchParameters {
        let factors = UnitFactors::for_system(self.units);
        LaunchParameters {
            speed: self.get(Control::Speed) / factors.speed,
            roll_angle: self.get(Control::Roll),
            pitch: self.get(Control::Pitch),
            nose_angle: self.get(Control::Nose),
            mass: self.get(Control::Mass) / 1000.0,
            spin_multiplier: self.get(Control::Spin),
            ..*base
        }
    }
}
