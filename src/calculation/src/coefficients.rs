//! Side-by-side coefficient tables for several discs.

use crate::disc::{DiscId, DiscProfile, DiscSource};
use crate::error::{CompareError, Result};

/// One coefficient plotted against angle of attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoefficientKind {
    Lift,
    Drag,
    Moment,
    LiftToDrag,
}

impl CoefficientKind {
    /// Layout order of the 2×2 coefficient figure.
    pub const ALL: [CoefficientKind; 4] = [
        CoefficientKind::Lift,
        CoefficientKind::Drag,
        CoefficientKind::Moment,
        CoefficientKind::LiftToDrag,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Lift => "Lift coefficient",
            Self::Drag => "Drag coefficient",
            Self::Moment => "Moment coefficient",
            Self::LiftToDrag => "Lift-to-drag ratio",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientCurves {
    pub disc: DiscId,
    /// Angle of attack (deg)
    pub alpha: Vec<f64>,
    pub cl: Vec<f64>,
    pub cd: Vec<f64>,
    pub cm: Vec<f64>,
    /// Cl/Cd; NaN where Cd is zero
    pub cl_cd: Vec<f64>,
}

impl CoefficientCurves {
    pub fn from_profile(disc: DiscId, profile: &DiscProfile) -> Self {
        let cl_cd = profile
            .cl
            .iter()
            .zip(&profile.cd)
            .map(|(cl, cd)| if *cd == 0.0 { f64::NAN } else { cl / cd })
            .collect();
        Self {
            disc,
            alpha: profile.alpha.clone(),
            cl: profile.cl.clone(),
            cd: profile.cd.clone(),
            cm: profile.cm.clone(),
            cl_cd,
        }
    }

    pub fn values(&self, kind: CoefficientKind) -> &[f64] {
        match kind {
            CoefficientKind::Lift => &self.cl,
            CoefficientKind::Drag => &self.cd,
            CoefficientKind::Moment => &self.cm,
            CoefficientKind::LiftToDrag => &self.cl_cd,
        }
    }

    /// `(alpha, value)` pairs for `kind`, skipping non-finite values.
    pub fn points(&self, kind: CoefficientKind) -> Vec<(f64, f64)> {
        self.alpha
            .iter()
            .copied()
            .zip(self.values(kind).iter().copied())
            .filter(|(_, v)| v.is_finite())
            .collect()
    }
}

/// Load the coefficient curves of every disc, in list order.
pub fn compare_coefficients(source: &dyn DiscSource, discs: &[DiscId]) -> Result<Vec<CoefficientCurves>> {
    discs
        .iter()
        .map(|id| {
            let profile = source.load(id).map_err(|source| CompareError::DataResource {
                disc: id.to_string(),
                source,
            })?;
            Ok(CoefficientCurves::from_profile(id.clone(), &profile))
        })
        .collect()
}
