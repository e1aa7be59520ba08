//! Per-disc bundles of derived series, rebuilt from scratch on every pass.

use ndarray::{Array1, Array2, ArrayView1, Axis};

use crate::disc::DiscId;
use crate::error::{CompareError, Result, SimulationError};
use crate::params::LaunchParameters;
use crate::provider::{DiscRun, TrajectoryProvider};
use crate::units::{QuantityKind, UnitFactors};

/// Names one series of a bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesKind {
    Time,
    X,
    Y,
    Z,
    Arc,
    Alpha,
    Beta,
    Lift,
    Drag,
    Moment,
    RollRate,
    /// Body-frame u
    ForwardVelocity,
}

/// All series computed for one disc under one set of launch parameters.
///
/// Every sequence has the same length. Values are SI (angles of attack in
/// degrees); conversion happens in [`TrajectoryBundle::converted`].
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryBundle {
    pub disc: DiscId,
    /// Spin rate used for the throw (rad/s)
    pub omega: f64,
    pub t: Array1<f64>,
    /// Ground-track position, 3×N (m)
    pub position: Array2<f64>,
    pub arc: Array1<f64>,
    pub alpha: Array1<f64>,
    pub beta: Array1<f64>,
    pub lift: Array1<f64>,
    pub drag: Array1<f64>,
    pub moment: Array1<f64>,
    pub roll_rate: Array1<f64>,
    /// Body-frame velocity u/v/w, 3×N (m/s)
    pub velocity: Array2<f64>,
}

impl TrajectoryBundle {
    /// Assemble a bundle from one provider run, checking every series lines up.
    pub fn from_run(run: DiscRun) -> std::result::Result<Self, SimulationError> {
        let n = run.shot.len();
        if n < 2 {
            return Err(SimulationError::TooFewSamples { samples: n });
        }

        let aero = run.aero;
        let lengths = [
            ("position", run.shot.position.ncols()),
            ("arc", aero.arc.len()),
            ("alpha", aero.alpha.len()),
            ("beta", aero.beta.len()),
            ("lift", aero.lift.len()),
            ("drag", aero.drag.len()),
            ("moment", aero.moment.len()),
            ("roll_rate", aero.roll_rate.len()),
            ("velocity", aero.body_velocity.ncols()),
        ];
        for (series, actual) in lengths {
            if actual != n {
                return Err(SimulationError::LengthMismatch {
                    series,
                    expected: n,
                    actual,
                });
            }
        }

        Ok(Self {
            disc: run.disc.id,
            omega: run.omega,
            t: run.shot.t,
            position: run.shot.position,
            arc: aero.arc,
            alpha: aero.alpha,
            beta: aero.beta,
            lift: aero.lift,
            drag: aero.drag,
            moment: aero.moment,
            roll_rate: aero.roll_rate,
            velocity: aero.body_velocity,
        })
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Borrow one series in SI.
    pub fn series(&self, kind: SeriesKind) -> ArrayView1<'_, f64> {
        match kind {
            SeriesKind::Time => self.t.view(),
            SeriesKind::X => self.position.index_axis(Axis(0), 0),
            SeriesKind::Y => self.position.index_axis(Axis(0), 1),
            SeriesKind::Z => self.position.index_axis(Axis(0), 2),
            SeriesKind::Arc => self.arc.view(),
            SeriesKind::Alpha => self.alpha.view(),
            SeriesKind::Beta => self.beta.view(),
            SeriesKind::Lift => self.lift.view(),
            SeriesKind::Drag => self.drag.view(),
            SeriesKind::Moment => self.moment.view(),
            SeriesKind::RollRate => self.roll_rate.view(),
            SeriesKind::ForwardVelocity => self.velocity.index_axis(Axis(0), 0),
        }
    }

    /// Copy one series out, scaled to display units.
    pub fn converted(&self, kind: SeriesKind, quantity: QuantityKind, factors: &UnitFactors) -> Vec<f64> {
        let factor = factors.factor(quantity);
        self.series(kind).iter().map(|v| v * factor).collect()
    }
}

/// Builds one bundle per disc, in list order.
pub struct BundleBuilder {
    provider: TrajectoryProvider,
}

impl BundleBuilder {
    pub fn new(provider: TrajectoryProvider) -> Self {
        Self { provider }
    }

    /// `bundles[i]` belongs to `discs[i]`. Stops at the first failing disc.
    pub fn build(&self, discs: &[DiscId], launch: &LaunchParameters) -> Result<Vec<TrajectoryBundle>> {
        discs
            .iter()
            .map(|id| {
                let run = self.provider.simulate(id, launch.mass, launch)?;
                TrajectoryBundle::from_run(run).map_err(|source| CompareError::Simulation {
                    disc: id.to_string(),
                    source,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::tests::bundled_provider;
    use crate::units::UnitSystem;
    use approx::assert_relative_eq;

    fn ids(names: &[&str]) -> Vec<DiscId> {
        names.iter().map(|n| DiscId::new(*n)).collect()
    }

    #[test]
    fn test_build_is_index_aligned() {
        let builder = BundleBuilder::new(bundled_provider());
        let discs = ids(&["driver_c", "putter_a", "midrange_b"]);
        let bundles = builder.build(&discs, &LaunchParameters::default()).unwrap();
        assert_eq!(bundles.len(), 3);
        for (bundle, id) in bundles.iter().zip(&discs) {
            assert_eq!(&bundle.disc, id);
            assert_eq!(bundle.arc.len(), bundle.len());
            assert_eq!(bundle.velocity.ncols(), bundle.len());
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        let builder = BundleBuilder::new(bundled_provider());
        let discs = ids(&["putter_a", "driver_c"]);
        let launch = LaunchParameters::default();
        let first = builder.build(&discs, &launch).unwrap();
        let second = builder.build(&discs, &launch).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_imperial_lift_is_scaled_si_lift() {
        let builder = BundleBuilder::new(bundled_provider());
        let bundles = builder
            .build(&ids(&["putter_a"]), &LaunchParameters::default())
            .unwrap();
        let bundle = &bundles[0];
        let imperial = UnitFactors::for_system(UnitSystem::Imperial);
        let lift_ozf = bundle.converted(SeriesKind::Lift, QuantityKind::Force, &imperial);
        for (ozf, n) in lift_ozf.iter().zip(bundle.lift.iter()) {
            assert_relative_eq!(*ozf, n * 3.59694);
        }

        let metric = UnitFactors::for_system(UnitSystem::Metric);
        let lift_n = bundle.converted(SeriesKind::Lift, QuantityKind::Force, &metric);
        assert_eq!(lift_n, bundle.lift.to_vec());
    }

    #[test]
    fn test_series_views() {
        let builder = BundleBuilder::new(bundled_provider());
        let bundle = builder
            .build(&ids(&["midrange_b"]), &LaunchParameters::default())
            .unwrap()
            .remove(0);
        assert_eq!(bundle.series(SeriesKind::Z)[0], 1.3);
        assert_eq!(bundle.series(SeriesKind::X)[0], 0.0);
        assert_eq!(bundle.series(SeriesKind::ForwardVelocity).len(), bundle.len());
    }

    #[test]
    fn test_first_failure_aborts_build() {
        let builder = BundleBuilder::new(bundled_provider());
        let err = builder
            .build(&ids(&["putter_a", "missing", "driver_c"]), &LaunchParameters::default())
            .unwrap_err();
        assert!(matches!(err, CompareError::DataResource { ref disc, .. } if disc == "missing"));
    }
}
