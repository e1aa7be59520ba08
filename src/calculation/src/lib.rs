//! Flight comparison engine for flying discs.
//!
//! This library provides:
//! - A deterministic disc flight model (RK4 with a ground event)
//! - Coefficient tables loaded from YAML, behind a [`DiscSource`] trait
//! - Index-aligned trajectory bundles for several discs at once
//! - Persistent per-disc, per-panel line bindings kept in sync with the data
//! - A reactive controller that recomputes everything on every control change
//!
//! # Example
//!
//! ```no_run
//! use disc_calc::{
//!     BundleBuilder, Control, DiscDirectory, DiscEngine, DiscId, Figure,
//!     LaunchParameters, TrajectoryProvider, UnitSystem, UpdateController,
//! };
//!
//! let provider = TrajectoryProvider::new(
//!     Box::new(DiscDirectory::new("discs")),
//!     Box::new(DiscEngine::default()),
//! );
//! let mut controller = UpdateController::new(
//!     vec![DiscId::new("putter_a"), DiscId::new("driver_c")],
//!     UnitSystem::Imperial,
//!     LaunchParameters::default(),
//!     BundleBuilder::new(provider),
//!     Figure::new(),
//! )?;
//! controller.on_control_changed(Control::Roll, -15.0)?;
//! # Ok::<(), disc_calc::CompareError>(())
//! ```

#![warn(clippy::doc_markdown)]
#![allow(clippy::inconsistent_struct_constructor)]

pub mod aerodynamics;
pub mod bindings;
pub mod bundle;
pub mod coefficients;
pub mod config;
pub mod constants;
pub mod controller;
pub mod controls;
pub mod disc;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod ode;
pub mod panels;
pub mod params;
pub mod provider;
pub mod scene;
pub mod units;
pub mod vector;

// Re-export key types for easy use
pub use aerodynamics::DiscEngine;
pub use bindings::{LineHandle, PlotSurface, ViewBindingRegistry};
pub use bundle::{BundleBuilder, SeriesKind, TrajectoryBundle};
pub use coefficients::{compare_coefficients, CoefficientCurves, CoefficientKind};
pub use config::{validate_disc_list, SessionConfig, MAX_DISCS};
pub use constants::Constants;
pub use controller::{ControllerState, UpdateController};
pub use controls::{parse_assignment, Control, ControlPanel};
pub use disc::{Disc, DiscDirectory, DiscId, DiscProfile, DiscSource, StaticDiscs};
pub use engine::{AeroSeries, FlightEngine, Shot};
pub use error::{CompareError, ConfigError, DataResourceError, Result, SimulationError};
pub use metrics::FlightSummary;
pub use ode::{OdeSystem, RK4Integrator};
pub use panels::{FigureKind, PanelKind};
pub use params::LaunchParameters;
pub use provider::{DiscRun, TrajectoryProvider};
pub use scene::{Figure, Line};
pub use units::{QuantityKind, UnitFactors, UnitSystem};
pub use vector::{DiscFrame, Vec3};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
