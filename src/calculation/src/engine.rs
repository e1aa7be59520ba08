//! The flight-engine boundary.
//!
//! The comparison engine only needs three things from a flight model: a spin
//! estimate, a throw, and the aerodynamic history of that throw. Anything that
//! implements [`FlightEngine`] can drive a comparison; [`crate::DiscEngine`]
//! is the bundled implementation.

use ndarray::{Array1, Array2};

use crate::disc::Disc;
use crate::error::SimulationError;
use crate::params::LaunchParameters;

/// Raw result of one throw. Matrices are 3×N, one column per sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Shot {
    /// Sample times (s)
    pub t: Array1<f64>,
    /// Ground-frame position x/y/z (m)
    pub position: Array2<f64>,
    /// Ground-frame velocity (m/s)
    pub velocity: Array2<f64>,
    /// Roll, pitch, yaw (rad)
    pub attitude: Array2<f64>,
}

impl Shot {
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }
}

/// Derived aerodynamic and kinematic series, index-aligned with the shot.
#[derive(Debug, Clone, PartialEq)]
pub struct AeroSeries {
    /// Cumulative horizontal distance (m)
    pub arc: Array1<f64>,
    /// Angle of attack (deg)
    pub alpha: Array1<f64>,
    /// Sideslip (deg)
    pub beta: Array1<f64>,
    /// Lift force (N)
    pub lift: Array1<f64>,
    /// Drag force (N)
    pub drag: Array1<f64>,
    /// Pitching moment (N·m)
    pub moment: Array1<f64>,
    /// Roll rate (rad/s)
    pub roll_rate: Array1<f64>,
    /// Body-frame velocity u/v/w (m/s), 3×N
    pub body_velocity: Array2<f64>,
}

/// A deterministic flight model.
pub trait FlightEngine {
    /// Spin rate (rad/s) a typical thrower imparts at `speed` (m/s).
    fn empirical_spin(&self, disc: &Disc, speed: f64) -> f64;

    /// Integrate a throw until the disc lands.
    fn shoot(
        &self,
        disc: &Disc,
        launch: &LaunchParameters,
        omega: f64,
    ) -> Result<Shot, SimulationError>;

    /// Recover forces, moments and angles along a computed throw.
    fn post_process(&self, disc: &Disc, shot: &Shot, omega: f64)
        -> Result<AeroSeries, SimulationError>;
}
