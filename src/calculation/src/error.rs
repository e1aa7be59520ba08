//! Error types shared by the comparison engine.
//!
//! Three failure families exist: configuration problems detected before any
//! simulation work, flight-engine failures for a single disc, and disc data
//! that cannot be resolved or parsed. [`CompareError`] carries the disc name
//! alongside the latter two so the presentation layer can tell the user which
//! design failed.

use std::path::PathBuf;

use thiserror::Error;

use crate::panels::PanelKind;

/// Problems with the session setup. Always fatal to startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown unit system `{0}` (expected `metric` or `imperial`)")]
    UnknownUnitSystem(String),

    #[error("unknown environment `{0}` (expected standard, summer or high-altitude)")]
    UnknownEnvironment(String),

    #[error("{count} discs given, at most {max} can be compared at once")]
    TooManyDiscs { count: usize, max: usize },

    #[error("at least one disc must be given")]
    NoDiscs,

    #[error("invalid value {value} for `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("unknown control `{0}` (expected one of speed, roll, pitch, nose, mass, spin)")]
    UnknownControl(String),

    #[error("malformed control assignment `{0}` (expected NAME=VALUE)")]
    MalformedAssignment(String),

    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Failures raised by the flight engine while integrating or post-processing.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("integration produced a non-finite state at t = {t:.3} s")]
    NonFiniteState { t: f64 },

    #[error("cannot integrate with dt = {dt} s up to {t_max} s")]
    InvalidStep { dt: f64, t_max: f64 },

    #[error("trajectory has {samples} samples, at least 2 are required")]
    TooFewSamples { samples: usize },

    #[error("series `{series}` has {actual} samples, expected {expected}")]
    LengthMismatch {
        series: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// A disc identity that does not resolve to a usable coefficient table.
#[derive(Debug, Error)]
pub enum DataResourceError {
    #[error("no disc data file at {0}")]
    NotFound(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid coefficient table: {0}")]
    InvalidTable(String),
}

/// Top-level error of the comparison engine.
#[derive(Debug, Error)]
pub enum CompareError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("simulation failed for disc `{disc}`: {source}")]
    Simulation {
        disc: String,
        #[source]
        source: SimulationError,
    },

    #[error("disc `{disc}` could not be loaded: {source}")]
    DataResource {
        disc: String,
        #[source]
        source: DataResourceError,
    },

    #[error("no view binding for disc {disc_index} on panel {panel:?}")]
    UnknownBinding { disc_index: usize, panel: PanelKind },

    #[error("surface has no line {0}")]
    UnknownLine(usize),

    #[error("line data has {xs} x values but {ys} y values")]
    RaggedLine { xs: usize, ys: usize },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CompareError>;
