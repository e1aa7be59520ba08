//! Pass-through adapter from a disc identity to a finished throw.

use tracing::debug;

use crate::disc::{Disc, DiscId, DiscSource};
use crate::engine::{AeroSeries, FlightEngine, Shot};
use crate::error::{CompareError, Result};
use crate::params::LaunchParameters;

/// Everything one simulation of one disc produced.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscRun {
    pub disc: Disc,
    pub shot: Shot,
    /// Spin rate used for the throw (rad/s)
    pub omega: f64,
    pub aero: AeroSeries,
}

/// Resolves disc identities and throws them through a flight engine.
pub struct TrajectoryProvider {
    source: Box<dyn DiscSource>,
    engine: Box<dyn FlightEngine>,
}

impl TrajectoryProvider {
    pub fn new(source: Box<dyn DiscSource>, engine: Box<dyn FlightEngine>) -> Self {
        Self { source, engine }
    }

    /// Throw `id` with the given mass under `launch`.
    ///
    /// Engine and data errors are returned as-is, tagged with the disc name.
    pub fn simulate(&self, id: &DiscId, mass: f64, launch: &LaunchParameters) -> Result<DiscRun> {
        let profile = self
            .source
            .load(id)
            .map_err(|source| CompareError::DataResource {
                disc: id.to_string(),
                source,
            })?;
        let disc = Disc::new(id.clone(), profile, mass);

        let omega = self.engine.empirical_spin(&disc, launch.speed) * launch.spin_multiplier;
        let simulation = |source| CompareError::Simulation {
            disc: id.to_string(),
            source,
        };
        let shot = self.engine.shoot(&disc, launch, omega).map_err(simulation)?;
        let aero = self
            .engine
            .post_process(&disc, &shot, omega)
            .map_err(simulation)?;

        debug!(
            disc = %id,
            mass,
            omega,
            samples = shot.len(),
            "disc simulated"
        );
        Ok(DiscRun {
            disc,
            shot,
            omega,
            aero,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::aerodynamics::DiscEngine;
    use crate::disc::tests::{bundled_discs, flat_profile};
    use crate::disc::StaticDiscs;
    use crate::error::{DataResourceError, SimulationError};
    use approx::assert_relative_eq;

    /// Engine that fails throws of one named disc faster than `above_speed`.
    pub(crate) struct FailingEngine {
        pub(crate) fail_on: DiscId,
        pub(crate) above_speed: f64,
        pub(crate) inner: DiscEngine,
    }

    impl FlightEngine for FailingEngine {
        fn empirical_spin(&self, disc: &Disc, speed: f64) -> f64 {
            self.inner.empirical_spin(disc, speed)
        }

        fn shoot(
            &self,
            disc: &Disc,
            launch: &LaunchParameters,
            omega: f64,
        ) -> std::result::Result<Shot, SimulationError> {
            if disc.id == self.fail_on && launch.speed > self.above_speed {
                return Err(SimulationError::NonFiniteState { t: 0.0 });
            }
            self.inner.shoot(disc, launch, omega)
        }

        fn post_process(
            &self,
            disc: &Disc,
            shot: &Shot,
            omega: f64,
        ) -> std::result::Result<AeroSeries, SimulationError> {
            self.inner.post_process(disc, shot, omega)
        }
    }

    pub(crate) fn bundled_provider() -> TrajectoryProvider {
        TrajectoryProvider::new(Box::new(bundled_discs()), Box::new(DiscEngine::default()))
    }

    #[test]
    fn test_simulate_scales_spin() {
        let provider = TrajectoryProvider::new(
            Box::new(StaticDiscs::new().with("flat", flat_profile())),
            Box::new(DiscEngine::default()),
        );
        let id = DiscId::new("flat");
        let full = provider
            .simulate(&id, 0.175, &LaunchParameters::default())
            .unwrap();
        let half = provider
            .simulate(
                &id,
                0.175,
                &LaunchParameters {
                    spin_multiplier: 0.5,
                    ..Default::default()
                },
            )
            .unwrap();
        assert_relative_eq!(half.omega, full.omega * 0.5);
        assert_eq!(full.disc.mass, 0.175);
    }

    #[test]
    fn test_mass_extremes_give_finite_flights() {
        let provider = bundled_provider();
        let id = DiscId::new("putter_a");
        for mass in [0.140, 0.200] {
            let run = provider
                .simulate(&id, mass, &LaunchParameters { mass, ..Default::default() })
                .unwrap();
            assert!(!run.shot.is_empty());
            assert!(run.shot.position.iter().all(|v| v.is_finite()));
            assert!(run.aero.lift.iter().all(|v| v.is_finite()));
        }
    }

    #[test]
    fn test_unknown_disc_is_data_error() {
        let provider = bundled_provider();
        let err = provider
            .simulate(&DiscId::new("nope"), 0.175, &LaunchParameters::default())
            .unwrap_err();
        assert!(matches!(
            err,
            CompareError::DataResource {
                ref disc,
                source: DataResourceError::NotFound(_)
            } if disc == "nope"
        ));
    }

    #[test]
    fn test_engine_failure_names_the_disc() {
        let provider = TrajectoryProvider::new(
            Box::new(StaticDiscs::new().with("flat", flat_profile())),
            Box::new(FailingEngine {
                fail_on: DiscId::new("flat"),
                above_speed: 0.0,
                inner: DiscEngine::default(),
            }),
        );
        let err = provider
            .simulate(&DiscId::new("flat"), 0.175, &LaunchParameters::default())
            .unwrap_err();
        assert!(matches!(err, CompareError::Simulation { ref disc, .. } if disc == "flat"));
    }
}
