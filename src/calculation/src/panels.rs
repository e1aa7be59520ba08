//! The fixed set of comparison panels and what each one plots.

use crate::bundle::SeriesKind;
use crate::units::{unit_label, QuantityKind, UnitSystem};

/// One plot panel. Every disc gets exactly one line on every panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PanelKind {
    DistanceVsDrift,
    DistanceVsHeight,
    DriftVsHeight,
    Lift,
    Drag,
    Moment,
    Alpha,
    ForwardVelocity,
    RollRate,
}

/// One axis of a panel: which series it shows and how it is labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Axis {
    pub series: SeriesKind,
    pub quantity: QuantityKind,
    pub name: &'static str,
}

/// Figure a panel is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FigureKind {
    /// Three trajectory projections side by side
    GroundTrack,
    /// Six aerodynamic histories in a 2×3 grid
    Aerodynamics,
}

impl FigureKind {
    pub const ALL: [FigureKind; 2] = [FigureKind::GroundTrack, FigureKind::Aerodynamics];

    /// Grid shape (rows, columns).
    pub fn grid(&self) -> (usize, usize) {
        match self {
            Self::GroundTrack => (1, 3),
            Self::Aerodynamics => (2, 3),
        }
    }

    pub fn file_stem(&self) -> &'static str {
        match self {
            Self::GroundTrack => "ground_track",
            Self::Aerodynamics => "aerodynamics",
        }
    }

    /// Panels of this figure in layout order.
    pub fn panels(&self) -> impl Iterator<Item = PanelKind> + '_ {
        PanelKind::ALL.into_iter().filter(move |p| p.figure() == *self)
    }
}

const DISTANCE: Axis = Axis {
    series: SeriesKind::X,
    quantity: QuantityKind::Length,
    name: "Distance",
};
const DRIFT: Axis = Axis {
    series: SeriesKind::Y,
    quantity: QuantityKind::Length,
    name: "Drift",
};
const HEIGHT: Axis = Axis {
    series: SeriesKind::Z,
    quantity: QuantityKind::Length,
    name: "Height",
};
const ARC: Axis = Axis {
    series: SeriesKind::Arc,
    quantity: QuantityKind::Length,
    name: "Distance",
};

impl PanelKind {
    /// Creation order of bindings within one disc.
    pub const ALL: [PanelKind; 9] = [
        PanelKind::DistanceVsDrift,
        PanelKind::DistanceVsHeight,
        PanelKind::DriftVsHeight,
        PanelKind::Lift,
        PanelKind::Drag,
        PanelKind::Moment,
        PanelKind::Alpha,
        PanelKind::ForwardVelocity,
        PanelKind::RollRate,
    ];

    pub fn x_axis(&self) -> Axis {
        match self {
            Self::DistanceVsDrift | Self::DistanceVsHeight => DISTANCE,
            Self::DriftVsHeight => DRIFT,
            _ => ARC,
        }
    }

    pub fn y_axis(&self) -> Axis {
        match self {
            Self::DistanceVsDrift => DRIFT,
            Self::DistanceVsHeight | Self::DriftVsHeight => HEIGHT,
            Self::Lift => Axis {
                series: SeriesKind::Lift,
                quantity: QuantityKind::Force,
                name: "Lift force",
            },
            Self::Drag => Axis {
                series: SeriesKind::Drag,
                quantity: QuantityKind::Force,
                name: "Drag force",
            },
            Self::Moment => Axis {
                series: SeriesKind::Moment,
                quantity: QuantityKind::Moment,
                name: "Moment",
            },
            Self::Alpha => Axis {
                series: SeriesKind::Alpha,
                quantity: QuantityKind::AttackAngle,
                name: "Angle of attack",
            },
            Self::ForwardVelocity => Axis {
                series: SeriesKind::ForwardVelocity,
                quantity: QuantityKind::Speed,
                name: "Velocity",
            },
            Self::RollRate => Axis {
                series: SeriesKind::RollRate,
                quantity: QuantityKind::Angle,
                name: "Roll rate",
            },
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::DistanceVsDrift => "Top view",
            Self::DistanceVsHeight => "Side view",
            Self::DriftVsHeight => "Front view",
            Self::Lift => "Lift",
            Self::Drag => "Drag",
            Self::Moment => "Pitching moment",
            Self::Alpha => "Angle of attack",
            Self::ForwardVelocity => "Forward velocity",
            Self::RollRate => "Roll rate",
        }
    }

    pub fn figure(&self) -> FigureKind {
        match self {
            Self::DistanceVsDrift | Self::DistanceVsHeight | Self::DriftVsHeight => {
                FigureKind::GroundTrack
            }
            _ => FigureKind::Aerodynamics,
        }
    }

    /// Axis labels `(x, y)` in the given unit system, e.g. `Distance (ft)`.
    pub fn labels(&self, units: UnitSystem) -> (String, String) {
        let label = |axis: Axis| format!("{} ({})", axis.name, unit_label(units, axis.quantity));
        (label(self.x_axis()), label(self.y_axis()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_order_and_figures() {
        assert_eq!(PanelKind::ALL.len(), 9);
        assert_eq!(PanelKind::ALL[0], PanelKind::DistanceVsDrift);
        assert_eq!(PanelKind::ALL[8], PanelKind::RollRate);

        let ground: Vec<_> = FigureKind::GroundTrack.panels().collect();
        assert_eq!(ground.len(), 3);
        let aero: Vec<_> = FigureKind::Aerodynamics.panels().collect();
        assert_eq!(aero.len(), 6);
        let (rows, cols) = FigureKind::Aerodynamics.grid();
        assert_eq!(rows * cols, aero.len());
    }

    #[test]
    fn test_labels_follow_units() {
        let (x, y) = PanelKind::Lift.labels(UnitSystem::Imperial);
        assert_eq!(x, "Distance (ft)");
        assert_eq!(y, "Lift force (ozf)");

        let (_, y) = PanelKind::RollRate.labels(UnitSystem::Imperial);
        assert_eq!(y, "Roll rate (deg/s)");

        let (x, y) = PanelKind::DriftVsHeight.labels(UnitSystem::Metric);
        assert_eq!(x, "Drift (m)");
        assert_eq!(y, "Height (m)");

        let (_, y) = PanelKind::Alpha.labels(UnitSystem::Imperial);
        assert_eq!(y, "Angle of attack (deg)");
    }

    #[test]
    fn test_roll_rate_uses_angle_factor() {
        assert_eq!(PanelKind::RollRate.y_axis().quantity, QuantityKind::Angle);
        assert_eq!(PanelKind::Alpha.y_axis().quantity, QuantityKind::AttackAngle);
        assert_eq!(PanelKind::ForwardVelocity.y_axis().quantity, QuantityKind::Speed);
    }
}
