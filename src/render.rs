//! PNG rendering of the comparison figures.

use std::ops::Range;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;

use disc_calc::{CoefficientCurves, CoefficientKind, Figure, FigureKind, UnitSystem};

const FONT: &str = "sans-serif";
const PANEL_SIZE: (u32, u32) = (520, 420);

/// One line of one panel.
pub struct SeriesLine {
    pub label: String,
    pub color_index: usize,
    pub points: Vec<(f64, f64)>,
}

/// Everything needed to draw one panel.
pub struct PanelPlot {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub lines: Vec<SeriesLine>,
}

/// Render both comparison figures of `figure` into `out_dir`.
pub fn render_comparison(figure: &Figure, units: UnitSystem, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for kind in FigureKind::ALL {
        let panels: Vec<PanelPlot> = kind
            .panels()
            .map(|panel| {
                let (x_label, y_label) = panel.labels(units);
                PanelPlot {
                    title: panel.title().to_string(),
                    x_label,
                    y_label,
                    lines: figure
                        .lines_on(panel)
                        .map(|line| SeriesLine {
                            label: line.label.clone(),
                            color_index: line.color_index,
                            points: line.xs.iter().copied().zip(line.ys.iter().copied()).collect(),
                        })
                        .collect(),
                }
            })
            .collect();

        let path = out_dir.join(format!("{}.png", kind.file_stem()));
        render_grid(&path, kind.grid(), &panels)?;
        written.push(path);
    }
    Ok(written)
}

/// Render Cl, Cd, Cm and Cl/Cd against alpha as a 2×2 grid.
pub fn render_coefficients(curves: &[CoefficientCurves], out_dir: &Path) -> Result<PathBuf> {
    let panels: Vec<PanelPlot> = CoefficientKind::ALL
        .into_iter()
        .map(|kind| PanelPlot {
            title: kind.label().to_string(),
            x_label: "Angle of attack (deg)".to_string(),
            y_label: kind.label().to_string(),
            lines: curves
                .iter()
                .enumerate()
                .map(|(i, c)| SeriesLine {
                    label: c.disc.to_string(),
                    color_index: i,
                    points: c.points(kind),
                })
                .collect(),
        })
        .collect();

    let path = out_dir.join("coefficients.png");
    render_grid(&path, (2, 2), &panels)?;
    Ok(path)
}

fn render_grid(path: &Path, grid: (usize, usize), panels: &[PanelPlot]) -> Result<()> {
    let (rows, cols) = grid;
    let size = (PANEL_SIZE.0 * cols as u32, PANEL_SIZE.1 * rows as u32);
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let areas = root.split_evenly((rows, cols));
    for (area, panel) in areas.iter().zip(panels) {
        draw_panel(area, panel).with_context(|| format!("failed to draw panel `{}`", panel.title))?;
    }

    root.present()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

fn draw_panel(area: &DrawingArea<BitMapBackend<'_>, Shift>, panel: &PanelPlot) -> Result<()> {
    let (x_range, y_range) = bounds(panel.lines.iter().flat_map(|l| l.points.iter().copied()));

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, (FONT, 20))
        .margin(12)
        .x_label_area_size(36)
        .y_label_area_size(56)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc(panel.x_label.as_str())
        .y_desc(panel.y_label.as_str())
        .axis_desc_style((FONT, 14))
        .draw()?;

    for line in &panel.lines {
        let color = Palette99::pick(line.color_index).to_rgba();
        chart
            .draw_series(LineSeries::new(line.points.iter().copied(), color.stroke_width(2)))?
            .label(line.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    Ok(())
}

/// Padded axis ranges covering every finite point. Empty or flat data gets a
/// unit-wide range so the chart can still be built.
fn bounds(points: impl Iterator<Item = (f64, f64)>) -> (Range<f64>, Range<f64>) {
    let mut x = (f64::INFINITY, f64::NEG_INFINITY);
    let mut y = (f64::INFINITY, f64::NEG_INFINITY);
    for (px, py) in points.filter(|(a, b)| a.is_finite() && b.is_finite()) {
        x = (x.0.min(px), x.1.max(px));
        y = (y.0.min(py), y.1.max(py));
    }
    (pad(x), pad(y))
}

fn pad((lo, hi): (f64, f64)) -> Range<f64> {
    if !lo.is_finite() || !hi.is_finite() {
        return 0.0..1.0;
    }
    let span = hi - lo;
    if span <= f64::EPSILON * hi.abs().max(1.0) {
        return (lo - 0.5)..(hi + 0.5);
    }
    let margin = span * 0.05;
    (lo - margin)..(hi + margin)
}
