/// Headline numbers for one computed flight.
///
/// These are what the CLI prints after each recompute: how long the disc was
/// in the air, how far it went, how much it drifted, and the peaks of the
/// aerodynamic histories.

use crate::bundle::TrajectoryBundle;
use crate::disc::DiscId;
use crate::units::{unit_label, QuantityKind, UnitFactors, UnitSystem};

/// Summary of one bundle, SI.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightSummary {
    pub disc: DiscId,
    /// Time from release to landing (s)
    pub flight_time: f64,
    /// Final x (m)
    pub distance: f64,
    /// Final y (m), positive to the left
    pub drift: f64,
    /// Highest z reached (m)
    pub max_height: f64,
    /// Largest lift force (N)
    pub peak_lift: f64,
    /// Largest roll rate magnitude (rad/s)
    pub peak_roll_rate: f64,
    pub samples: usize,
}

impl FlightSummary {
    pub fn from_bundle(bundle: &TrajectoryBundle) -> Self {
        let n = bundle.len();
        let last = n.saturating_sub(1);
        let flight_time = if n == 0 {
            0.0
        } else {
            bundle.t[last] - bundle.t[0]
        };
        let final_at = |row: usize| if n == 0 { 0.0 } else { bundle.position[[row, last]] };

        Self {
            disc: bundle.disc.clone(),
            flight_time,
            distance: final_at(0),
            drift: final_at(1),
            max_height: bundle.position.row(2).iter().copied().fold(f64::NEG_INFINITY, f64::max),
            peak_lift: bundle.lift.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            peak_roll_rate: bundle.roll_rate.iter().fold(0.0, |acc: f64, v| acc.max(v.abs())),
            samples: n,
        }
    }

    /// Labelled values in display units, for printing.
    pub fn rows(&self, units: UnitSystem) -> Vec<(&'static str, String)> {
        let f = UnitFactors::for_system(units);
        let fmt = |value: f64, kind: QuantityKind| {
            format!("{:.2} {}", f.convert(kind, value), unit_label(units, kind))
        };
        vec![
            ("flight time", format!("{:.2} s", self.flight_time)),
            ("distance", fmt(self.distance, QuantityKind::Length)),
            ("drift", fmt(self.drift, QuantityKind::Length)),
            ("max height", fmt(self.max_height, QuantityKind::Length)),
            ("peak lift", fmt(self.peak_lift, QuantityKind::Force)),
            ("peak roll rate", fmt(self.peak_roll_rate, QuantityKind::Angle)),
            ("samples", self.samples.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, arr2, Array2};
    use approx::assert_relative_eq;

    fn bundle() -> TrajectoryBundle {
        TrajectoryBundle {
            disc: DiscId::new("test"),
            omega: 100.0,
            t: arr1(&[0.0, 0.5, 1.0, 1.5]),
            position: arr2(&[
                [0.0, 5.0, 10.0, 14.0],
                [0.0, 0.1, 0.3, -0.2],
                [1.0, 2.5, 2.0, 0.0],
            ]),
            arc: arr1(&[0.0, 5.0, 10.0, 14.0]),
            alpha: arr1(&[5.0, 4.0, 6.0, 9.0]),
            beta: arr1(&[0.0; 4]),
            lift: arr1(&[1.0, 1.4, 1.2, 0.8]),
            drag: arr1(&[0.3, 0.2, 0.2, 0.25]),
            moment: arr1(&[-0.01, 0.0, 0.01, 0.02]),
            roll_rate: arr1(&[0.1, -2.0, 1.0, 0.5]),
            velocity: Array2::zeros((3, 4)),
        }
    }

    #[test]
    fn test_summary_values() {
        let s = FlightSummary::from_bundle(&bundle());
        assert_relative_eq!(s.flight_time, 1.5);
        assert_relative_eq!(s.distance, 14.0);
        assert_relative_eq!(s.drift, -0.2);
        assert_relative_eq!(s.max_height, 2.5);
        assert_relative_eq!(s.peak_lift, 1.4);
        assert_relative_eq!(s.peak_roll_rate, 2.0);
        assert_eq!(s.samples, 4);
    }

    #[test]
    fn test_rows_use_display_units() {
        let s = FlightSummary::from_bundle(&bundle());
        let rows = s.rows(UnitSystem::Imperial);
        assert_eq!(rows[1], ("distance", "45.93 ft".to_string()));
        assert_eq!(rows[5].1, "114.59 deg/s");
        let rows = s.rows(UnitSystem::Metric);
        assert_eq!(rows[1].1, "14.00 m");
    }
}
