//! The reactive update loop.
//!
//! [`UpdateController`] owns every piece of mutable session state: the
//! control values, the current launch parameters, the last bundles and the
//! binding registry. A control event triggers one synchronous recompute:
//!
//! 1. read every control into fresh [`LaunchParameters`],
//! 2. build a bundle for every disc,
//! 3. convert each panel's series to display units and update its line,
//! 4. request a redraw of every panel.
//!
//! All bundles are built before the first line is touched, so a failing disc
//! leaves every line showing the previous pass.

use std::time::Instant;

use tracing::{debug, info};

use crate::bindings::{PlotSurface, ViewBindingRegistry};
use crate::bundle::{BundleBuilder, TrajectoryBundle};
use crate::config::validate_disc_list;
use crate::controls::{Control, ControlPanel};
use crate::disc::DiscId;
use crate::error::Result;
use crate::metrics::FlightSummary;
use crate::panels::PanelKind;
use crate::params::LaunchParameters;
use crate::units::{UnitFactors, UnitSystem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// Lines show the last computed bundles
    Idle,
    /// A pass is running
    Recomputing,
}

pub struct UpdateController<S: PlotSurface> {
    discs: Vec<DiscId>,
    units: UnitSystem,
    factors: UnitFactors,
    builder: BundleBuilder,
    registry: ViewBindingRegistry,
    surface: S,
    controls: ControlPanel,
    /// Release position and yaw; not exposed as controls
    base: LaunchParameters,
    launch: LaunchParameters,
    bundles: Vec<TrajectoryBundle>,
    state: ControllerState,
    recomputes: u64,
}

impl<S: PlotSurface> UpdateController<S> {
    /// Validate the session, create every binding and run the first pass.
    pub fn new(
        discs: Vec<DiscId>,
        units: UnitSystem,
        launch: LaunchParameters,
        builder: BundleBuilder,
        mut surface: S,
    ) -> Result<Self> {
        validate_disc_list(&discs)?;
        launch.validate()?;

        let registry = ViewBindingRegistry::create(&discs, &mut surface);
        debug!(bindings = registry.len(), "view bindings created");

        let mut controller = Self {
            controls: ControlPanel::from_launch(units, &launch),
            factors: UnitFactors::for_system(units),
            discs,
            units,
            builder,
            registry,
            surface,
            base: launch,
            launch,
            bundles: Vec::new(),
            state: ControllerState::Idle,
            recomputes: 0,
        };
        controller.recompute()?;
        Ok(controller)
    }

    /// One control changed: store it and recompute everything.
    pub fn on_control_changed(&mut self, control: Control, value: f64) -> Result<()> {
        self.apply(&[(control, value)])
    }

    /// Set several controls, then recompute once.
    ///
    /// On error the controls go back to the values of the last successful
    /// pass, so they always agree with [`Self::launch`] and the lines.
    pub fn apply(&mut self, changes: &[(Control, f64)]) -> Result<()> {
        let previous = self.controls.clone();
        let result = self.set_and_recompute(changes);
        if result.is_err() {
            self.controls = previous;
        }
        result
    }

    fn set_and_recompute(&mut self, changes: &[(Control, f64)]) -> Result<()> {
        for (control, value) in changes {
            self.controls.set(*control, *value)?;
        }
        self.recompute()
    }

    /// Run a full pass. The controller is back to idle afterwards, even on error.
    pub fn recompute(&mut self) -> Result<()> {
        self.state = ControllerState::Recomputing;
        let result = self.run_pass();
        self.state = ControllerState::Idle;
        result
    }

    fn run_pass(&mut self) -> Result<()> {
        let started = Instant::now();
        let launch = self.controls.launch_parameters(&self.base);
        launch.validate()?;

        let bundles = self.builder.build(&self.discs, &launch)?;

        for (index, bundle) in bundles.iter().enumerate() {
            for panel in PanelKind::ALL {
                let (x, y) = (panel.x_axis(), panel.y_axis());
                let xs = bundle.converted(x.series, x.quantity, &self.factors);
                let ys = bundle.converted(y.series, y.quantity, &self.factors);
                self.registry.update(&mut self.surface, index, panel, xs, ys)?;
            }
        }
        for panel in PanelKind::ALL {
            self.surface.request_redraw(panel);
        }

        self.launch = launch;
        self.bundles = bundles;
        self.recomputes += 1;
        info!(
            discs = self.discs.len(),
            pass = self.recomputes,
            elapsed_ms = started.elapsed().as_secs_f64() * 1e3,
            "recompute finished"
        );
        Ok(())
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn discs(&self) -> &[DiscId] {
        &self.discs
    }

    pub fn units(&self) -> UnitSystem {
        self.units
    }

    /// Parameters of the last successful pass.
    pub fn launch(&self) -> &LaunchParameters {
        &self.launch
    }

    pub fn controls(&self) -> &ControlPanel {
        &self.controls
    }

    /// Bundles of the last successful pass, index-aligned with [`Self::discs`].
    pub fn bundles(&self) -> &[TrajectoryBundle] {
        &self.bundles
    }

    pub fn registry(&self) -> &ViewBindingRegistry {
        &self.registry
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn recompute_count(&self) -> u64 {
        self.recomputes
    }

    pub fn summaries(&self) -> Vec<FlightSummary> {
        self.bundles.iter().map(FlightSummary::from_bundle).collect()
    }
}
