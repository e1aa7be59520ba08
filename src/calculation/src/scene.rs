//! In-memory presentation surface.
//!
//! [`Figure`] keeps every line and its current data so that the binary can
//! render it, tests can inspect it, and redraw requests can be counted.

use std::collections::{BTreeMap, BTreeSet};

use crate::bindings::{LineHandle, PlotSurface};
use crate::error::{CompareError, Result};
use crate::panels::PanelKind;

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub panel: PanelKind,
    pub label: String,
    pub color_index: usize,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Figure {
    lines: Vec<Line>,
    redraws: BTreeMap<PanelKind, usize>,
    dirty: BTreeSet<PanelKind>,
}

impl Figure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, handle: LineHandle) -> Option<&Line> {
        self.lines.get(handle.0)
    }

    /// Lines drawn on `panel`, in creation order.
    pub fn lines_on(&self, panel: PanelKind) -> impl Iterator<Item = &Line> + '_ {
        self.lines.iter().filter(move |l| l.panel == panel)
    }

    /// How many redraws `panel` has been asked for.
    pub fn redraw_count(&self, panel: PanelKind) -> usize {
        self.redraws.get(&panel).copied().unwrap_or(0)
    }

    /// Panels with a pending redraw; clears the pending set.
    pub fn take_dirty(&mut self) -> BTreeSet<PanelKind> {
        std::mem::take(&mut self.dirty)
    }
}

impl PlotSurface for Figure {
    fn add_line(&mut self, panel: PanelKind, label: &str, color_index: usize) -> LineHandle {
        self.lines.push(Line {
            panel,
            label: label.to_string(),
            color_index,
            xs: Vec::new(),
            ys: Vec::new(),
        });
        LineHandle(self.lines.len() - 1)
    }

    fn set_line_data(&mut self, line: LineHandle, xs: Vec<f64>, ys: Vec<f64>) -> Result<()> {
        if xs.len() != ys.len() {
            return Err(CompareError::RaggedLine {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        let entry = self
            .lines
            .get_mut(line.0)
            .ok_or(CompareError::UnknownLine(line.0))?;
        entry.xs = xs;
        entry.ys = ys;
        Ok(())
    }

    fn request_redraw(&mut self, panel: PanelKind) {
        *self.redraws.entry(panel).or_default() += 1;
        self.dirty.insert(panel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ragged_data_is_rejected() {
        let mut figure = Figure::new();
        let h = figure.add_line(PanelKind::Lift, "a", 0);
        let err = figure.set_line_data(h, vec![1.0, 2.0], vec![1.0]).unwrap_err();
        assert!(matches!(err, CompareError::RaggedLine { xs: 2, ys: 1 }));
        assert!(figure.line(h).unwrap().xs.is_empty());

        assert!(figure.set_line_data(LineHandle(7), vec![], vec![]).is_err());
    }

    #[test]
    fn test_redraw_tracking() {
        let mut figure = Figure::new();
        figure.request_redraw(PanelKind::Drag);
        figure.request_redraw(PanelKind::Drag);
        figure.request_redraw(PanelKind::Alpha);
        assert_eq!(figure.redraw_count(PanelKind::Drag), 2);
        assert_eq!(figure.redraw_count(PanelKind::Lift), 0);

        let dirty = figure.take_dirty();
        assert_eq!(dirty.len(), 2);
        assert!(figure.take_dirty().is_empty());
    }
}
