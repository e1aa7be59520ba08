//! CSV export of computed bundles.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::*;

use disc_calc::{SeriesKind, TrajectoryBundle};

/// Column name and series, SI units.
const COLUMNS: [(&str, SeriesKind); 12] = [
    ("t_s", SeriesKind::Time),
    ("x_m", SeriesKind::X),
    ("y_m", SeriesKind::Y),
    ("z_m", SeriesKind::Z),
    ("arc_m", SeriesKind::Arc),
    ("alpha_deg", SeriesKind::Alpha),
    ("beta_deg", SeriesKind::Beta),
    ("lift_n", SeriesKind::Lift),
    ("drag_n", SeriesKind::Drag),
    ("moment_nm", SeriesKind::Moment),
    ("roll_rate_rad_s", SeriesKind::RollRate),
    ("u_m_s", SeriesKind::ForwardVelocity),
];

pub fn bundle_frame(bundle: &TrajectoryBundle) -> PolarsResult<DataFrame> {
    let mut columns: Vec<Series> = COLUMNS
        .iter()
        .map(|(name, kind)| Series::new(name, bundle.series(*kind).to_vec()))
        .collect();
    columns.push(Series::new("v_m_s", bundle.velocity.row(1).to_vec()));
    columns.push(Series::new("w_m_s", bundle.velocity.row(2).to_vec()));
    DataFrame::new(columns)
}

/// Write one `<index>_<disc>.csv` per bundle into `dir`.
pub fn export_bundles(bundles: &[TrajectoryBundle], dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let mut written = Vec::with_capacity(bundles.len());
    for (index, bundle) in bundles.iter().enumerate() {
        let path = dir.join(format!("{index}_{}.csv", bundle.disc));
        let mut df = bundle_frame(bundle)?;
        let mut file =
            File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
        CsvWriter::new(&mut file).has_header(true).finish(&mut df)?;
        written.push(path);
    }
    Ok(written)
}
