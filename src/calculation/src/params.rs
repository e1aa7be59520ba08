//! Launch conditions shared by every disc in a comparison.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::vector::Vec3;

/// Release conditions for one recompute pass. Angles in degrees, SI otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchParameters {
    /// Release speed (m/s)
    pub speed: f64,
    /// Angle of the velocity above the horizon (deg)
    pub pitch: f64,
    /// Disc plane relative to the velocity (deg)
    pub nose_angle: f64,
    /// Bank angle at release (deg)
    pub roll_angle: f64,
    /// Heading (deg), 0 in current use
    pub yaw: f64,
    /// Release point (m)
    pub position: [f64; 3],
    /// Scales the empirical spin estimate
    pub spin_multiplier: f64,
    /// Disc mass (kg), shared by every disc in the pass
    pub mass: f64,
}

impl Default for LaunchParameters {
    fn default() -> Self {
        Self {
            speed: 24.0,
            pitch: 5.0,
            nose_angle: 0.0,
            roll_angle: 1.0,
            yaw: 0.0,
            position: [0.0, 0.0, 1.3],
            spin_multiplier: 1.0,
            mass: 0.175,
        }
    }
}

impl LaunchParameters {
    /// Release point as a vector.
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(&self.position)
    }

    /// Reject values no flight can be computed from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("speed", self.speed),
            ("pitch", self.pitch),
            ("nose_angle", self.nose_angle),
            ("roll_angle", self.roll_angle),
            ("yaw", self.yaw),
            ("position.x", self.position[0]),
            ("position.y", self.position[1]),
            ("position.z", self.position[2]),
            ("spin_multiplier", self.spin_multiplier),
            ("mass", self.mass),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::InvalidParameter {
                    name,
                    value,
                    reason: "must be finite",
                });
            }
        }

        if self.speed <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "speed",
                value: self.speed,
                reason: "must be positive",
            });
        }
        if self.mass <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "mass",
                value: self.mass,
                reason: "must be positive",
            });
        }
        if self.spin_multiplier < 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "spin_multiplier",
                value: self.spin_multiplier,
                reason: "must not be negative",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let p = LaunchParameters::default();
        assert!(p.validate().is_ok());
        assert_eq!(p.position().z, 1.3);
        assert_eq!(p.yaw, 0.0);
    }

    #[test]
    fn test_rejects_non_positive_speed_and_mass() {
        let p = LaunchParameters { speed: 0.0, ..Default::default() };
        assert!(matches!(
            p.validate(),
            Err(ConfigError::InvalidParameter { name: "speed", .. })
        ));

        let p = LaunchParameters { mass: -0.1, ..Default::default() };
        assert!(matches!(
            p.validate(),
            Err(ConfigError::InvalidParameter { name: "mass", .. })
        ));
    }

    #[test]
    fn test_rejects_nan_and_negative_spin() {
        let p = LaunchParameters { pitch: f64::NAN, ..Default::default() };
        assert!(p.validate().is_err());

        let p = LaunchParameters { spin_multiplier: -1.0, ..Default::default() };
        assert!(p.validate().is_err());

        let p = LaunchParameters { spin_multiplier: 0.0, ..Default::default() };
        assert!(p.validate().is_ok());
    }
}
