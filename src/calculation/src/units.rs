//! SI to display-unit conversion.
//!
//! All computation stays in SI. Series are multiplied by the factor for their
//! [`QuantityKind`] only when they are handed to the view layer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const M_TO_FT: f64 = 3.28084;
pub const MPS_TO_MPH: f64 = 2.23694;
pub const N_TO_OZF: f64 = 3.59694;
pub const NM_TO_INLB: f64 = 8.85075;
pub const RAD_TO_DEG: f64 = 57.2958;

/// Display unit system selected for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }
}

impl FromStr for UnitSystem {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metric" => Ok(Self::Metric),
            "imperial" => Ok(Self::Imperial),
            _ => Err(ConfigError::UnknownUnitSystem(s.to_string())),
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Physical kind of a plotted series, which decides its conversion factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuantityKind {
    Length,
    Speed,
    Force,
    Moment,
    /// Angular quantities produced in radians (roll rate, rad/s).
    Angle,
    /// Angle of attack and sideslip, which arrive in degrees already.
    AttackAngle,
}

/// Fixed multipliers from SI to the selected unit system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitFactors {
    pub length: f64,
    pub speed: f64,
    pub force: f64,
    pub moment: f64,
    pub angle: f64,
}

impl UnitFactors {
    /// Every factor is 1.
    pub const METRIC: Self = Self {
        length: 1.0,
        speed: 1.0,
        force: 1.0,
        moment: 1.0,
        angle: 1.0,
    };

    pub const IMPERIAL: Self = Self {
        length: M_TO_FT,
        speed: MPS_TO_MPH,
        force: N_TO_OZF,
        moment: NM_TO_INLB,
        angle: RAD_TO_DEG,
    };

    pub fn for_system(units: UnitSystem) -> Self {
        match units {
            UnitSystem::Metric => Self::METRIC,
            UnitSystem::Imperial => Self::IMPERIAL,
        }
    }

    /// Multiplier for one quantity kind.
    pub fn factor(&self, kind: QuantityKind) -> f64 {
        match kind {
            QuantityKind::Length => self.length,
            QuantityKind::Speed => self.speed,
            QuantityKind::Force => self.force,
            QuantityKind::Moment => self.moment,
            QuantityKind::Angle => self.angle,
            QuantityKind::AttackAngle => 1.0,
        }
    }

    /// Scale an SI value into display units.
    #[inline(always)]
    pub fn convert(&self, kind: QuantityKind, value: f64) -> f64 {
        value * self.factor(kind)
    }
}

/// Unit label shown next to an axis title.
pub fn unit_label(units: UnitSystem, kind: QuantityKind) -> &'static str {
    match (units, kind) {
        (UnitSystem::Metric, QuantityKind::Length) => "m",
        (UnitSystem::Imperial, QuantityKind::Length) => "ft",
        (UnitSystem::Metric, QuantityKind::Speed) => "m/s",
        (UnitSystem::Imperial, QuantityKind::Speed) => "mph",
        (UnitSystem::Metric, QuantityKind::Force) => "N",
        (UnitSystem::Imperial, QuantityKind::Force) => "ozf",
        (UnitSystem::Metric, QuantityKind::Moment) => "Nm",
        (UnitSystem::Imperial, QuantityKind::Moment) => "in-lb",
        (UnitSystem::Metric, QuantityKind::Angle) => "rad/s",
        (UnitSystem::Imperial, QuantityKind::Angle) => "deg/s",
        (_, QuantityKind::AttackAngle) => "deg",
    }
}
