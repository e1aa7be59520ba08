//! Disc identities, coefficient tables and where they are loaded from.
//!
//! A disc profile is a small YAML document:
//!
//! ```yaml
//! diameter: 0.212
//! alpha: [-10, -5, 0, 5, 10]     # degrees, strictly increasing
//! cl: [-0.10, 0.01, 0.13, 0.25, 0.37]
//! cd: [0.12, 0.09, 0.09, 0.14, 0.22]
//! cm: [-0.02, -0.016, -0.012, -0.008, -0.004]
//! ```

use std::collections::BTreeMap;
use std::f64::consts::PI;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::DataResourceError;

/// Name of a disc design; resolves to a coefficient table.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DiscId(String);

impl DiscId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DiscId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DiscId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Aerodynamic coefficient tables for one disc design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscProfile {
    /// Rim diameter (m)
    pub diameter: f64,
    /// Angle of attack samples (deg)
    pub alpha: Vec<f64>,
    /// Lift coefficient at each alpha
    pub cl: Vec<f64>,
    /// Drag coefficient at each alpha
    pub cd: Vec<f64>,
    /// Pitching moment coefficient at each alpha
    pub cm: Vec<f64>,
}

/// Coefficients looked up at one angle of attack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub cl: f64,
    pub cd: f64,
    pub cm: f64,
}

impl DiscProfile {
    /// Check the table is usable: positive diameter, matching lengths,
    /// finite values and strictly increasing alpha.
    pub fn validate(&self) -> Result<(), DataResourceError> {
        if !(self.diameter.is_finite() && self.diameter > 0.0) {
            return Err(DataResourceError::InvalidTable(format!(
                "diameter must be positive, got {}",
                self.diameter
            )));
        }

        let n = self.alpha.len();
        if n < 2 {
            return Err(DataResourceError::InvalidTable(format!(
                "need at least 2 alpha samples, got {n}"
            )));
        }
        for (name, column) in [("cl", &self.cl), ("cd", &self.cd), ("cm", &self.cm)] {
            if column.len() != n {
                return Err(DataResourceError::InvalidTable(format!(
                    "`{name}` has {} entries, `alpha` has {n}",
                    column.len()
                )));
            }
        }

        let mut all = self.alpha.iter().chain(&self.cl).chain(&self.cd).chain(&self.cm);
        if all.any(|v| !v.is_finite()) {
            return Err(DataResourceError::InvalidTable(
                "table contains non-finite values".to_string(),
            ));
        }
        if self.alpha.windows(2).any(|w| w[1] <= w[0]) {
            return Err(DataResourceError::InvalidTable(
                "`alpha` must be strictly increasing".to_string(),
            ));
        }
        Ok(())
    }

    /// Planform area (m²)
    pub fn area(&self) -> f64 {
        PI * self.diameter * self.diameter / 4.0
    }

    /// Interpolate the tables at `alpha_deg`, clamping outside the table.
    pub fn coefficients(&self, alpha_deg: f64) -> Coefficients {
        Coefficients {
            cl: interpolate(&self.alpha, &self.cl, alpha_deg),
            cd: interpolate(&self.alpha, &self.cd, alpha_deg),
            cm: interpolate(&self.alpha, &self.cm, alpha_deg),
        }
    }
}

/// Piecewise-linear lookup on a sorted grid, clamped at both ends.
/// A NaN `x` yields NaN so a diverging integration stays detectable.
fn interpolate(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    let last = xs.len() - 1;
    if x <= xs[0] {
        return ys[0];
    }
    if x >= xs[last] {
        return ys[last];
    }
    let i = xs.partition_point(|&v| v <= x) - 1;
    let frac = (x - xs[i]) / (xs[i + 1] - xs[i]);
    ys[i] + (ys[i + 1] - ys[i]) * frac
}

/// A disc ready to be thrown: profile plus mass.
#[derive(Debug, Clone, PartialEq)]
pub struct Disc {
    pub id: DiscId,
    pub profile: DiscProfile,
    /// Mass (kg)
    pub mass: f64,
}

impl Disc {
    pub fn new(id: DiscId, profile: DiscProfile, mass: f64) -> Self {
        Self { id, profile, mass }
    }

    /// Moment of inertia about the spin axis, treating the disc as a thin
    /// uniform plate: I = m d² / 8
    pub fn spin_inertia(&self) -> f64 {
        self.mass * self.profile.diameter * self.profile.diameter / 8.0
    }
}

/// Resolves disc identities to coefficient tables.
pub trait DiscSource {
    /// Load and validate the profile for `id`.
    fn load(&self, id: &DiscId) -> Result<DiscProfile, DataResourceError>;

    /// Every identity this source can resolve, sorted.
    fn list(&self) -> Result<Vec<DiscId>, DataResourceError>;
}

/// Profiles stored as `<name>.yaml` files in one directory.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscDirectory {
    root: PathBuf,
}

impl DiscDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, id: &DiscId) -> PathBuf {
        self.root.join(format!("{}.yaml", id.as_str()))
    }
}

impl DiscSource for DiscDirectory {
    fn load(&self, id: &DiscId) -> Result<DiscProfile, DataResourceError> {
        let path = self.path_for(id);
        if !path.is_file() {
            return Err(DataResourceError::NotFound(path));
        }
        let text = fs::read_to_string(&path).map_err(|source| DataResourceError::Io {
            path: path.clone(),
            source,
        })?;
        let profile: DiscProfile = serde_yaml::from_str(&text)
            .map_err(|source| DataResourceError::Parse { path, source })?;
        profile.validate()?;
        Ok(profile)
    }

    fn list(&self) -> Result<Vec<DiscId>, DataResourceError> {
        let entries = fs::read_dir(&self.root).map_err(|source| DataResourceError::Io {
            path: self.root.clone(),
            source,
        })?;

        let mut ids = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| DataResourceError::Io {
                path: self.root.clone(),
                source,
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml")
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
            {
                ids.push(DiscId::new(stem));
            }
        }
        ids.sort();
        Ok(ids)
    }
}

/// In-memory profiles, keyed by identity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticDiscs {
    profiles: BTreeMap<DiscId, DiscProfile>,
}

impl StaticDiscs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: impl Into<DiscId>, profile: DiscProfile) -> Self {
        self.profiles.insert(id.into(), profile);
        self
    }
}

impl DiscSource for StaticDiscs {
    fn load(&self, id: &DiscId) -> Result<DiscProfile, DataResourceError> {
        let profile = self
            .profiles
            .get(id)
            .cloned()
            .ok_or_else(|| DataResourceError::NotFound(PathBuf::from(id.as_str())))?;
        profile.validate()?;
        Ok(profile)
    }

    fn list(&self) -> Result<Vec<DiscId>, DataResourceError> {
        Ok(self.profiles.keys().cloned().collect())
    }
}
