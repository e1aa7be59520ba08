//! Persistent line identities, one per disc per panel.
//!
//! Lines are created once, when the registry is created. After that only the
//! data attached to a line changes; its label, color and legend entry stay.

use std::collections::BTreeMap;

use crate::disc::DiscId;
use crate::error::{CompareError, Result};
use crate::panels::PanelKind;

/// Opaque handle a surface hands out for a line it created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineHandle(pub usize);

/// Whatever draws the panels.
pub trait PlotSurface {
    /// Create a new line on `panel`. Called only while a registry is created.
    fn add_line(&mut self, panel: PanelKind, label: &str, color_index: usize) -> LineHandle;

    /// Replace the data of an existing line.
    fn set_line_data(&mut self, line: LineHandle, xs: Vec<f64>, ys: Vec<f64>) -> Result<()>;

    /// Ask for `panel` to be drawn again.
    fn request_redraw(&mut self, panel: PanelKind);
}

/// Keyed map from (disc index, panel) to the line showing that disc there.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewBindingRegistry {
    lines: BTreeMap<(usize, PanelKind), LineHandle>,
}

impl ViewBindingRegistry {
    /// Create every binding, disc-major, in [`PanelKind::ALL`] order.
    pub fn create<S: PlotSurface + ?Sized>(discs: &[DiscId], surface: &mut S) -> Self {
        let mut lines = BTreeMap::new();
        for (index, disc) in discs.iter().enumerate() {
            for panel in PanelKind::ALL {
                let handle = surface.add_line(panel, disc.as_str(), index);
                lines.insert((index, panel), handle);
            }
        }
        Self { lines }
    }

    /// Replace the data of the line for `disc_index` on `panel`.
    pub fn update<S: PlotSurface + ?Sized>(
        &self,
        surface: &mut S,
        disc_index: usize,
        panel: PanelKind,
        xs: Vec<f64>,
        ys: Vec<f64>,
    ) -> Result<()> {
        let handle = self.handle(disc_index, panel)?;
        surface.set_line_data(handle, xs, ys)
    }

    pub fn handle(&self, disc_index: usize, panel: PanelKind) -> Result<LineHandle> {
        self.lines
            .get(&(disc_index, panel))
            .copied()
            .ok_or(CompareError::UnknownBinding { disc_index, panel })
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Bindings in key order.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, PanelKind), LineHandle)> + '_ {
        self.lines.iter().map(|(k, v)| (*k, *v))
    }
}
