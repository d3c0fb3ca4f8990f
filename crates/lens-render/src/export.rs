// ─────────────────────────────────────────────────────────────────────
// SCPN Lensing — Export
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Writes one configuration's curves to the output directory.

use crate::format::file_stem;
use crate::png::write_png;
use crate::svg::render_svg;
use lens_core::batch::{run_batch_with, BatchOutcome};
use lens_types::config::{OutputFormat, RenderConfig, RunConfig};
use lens_types::error::{LensError, LensResult};
use lens_types::state::CurveSet;
use ndarray::array;
use ndarray_npy::NpzWriter;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Path of an output artifact for `curves` with the given extension.
pub fn output_path(curves: &CurveSet, cfg: &RenderConfig, extension: &str) -> PathBuf {
    Path::new(&cfg.output_dir).join(format!("{}.{extension}", file_stem(&curves.lens)))
}

/// Dump centered point sets: `critical` [N, 2], `caustic` [N, 2], and
/// `markers` [3, 2] (center of mass, z1, z2).
pub fn write_npz(curves: &CurveSet, path: &Path) -> LensResult<()> {
    let npy_err = |e: ndarray_npy::WriteNpzError| LensError::Npy(e.to_string());
    let m = curves.markers();
    let markers = array![
        [m.center_of_mass.x, m.center_of_mass.y],
        [m.z1.x, m.z1.y],
        [m.z2.x, m.z2.y],
    ];

    let mut npz = NpzWriter::new(File::create(path)?);
    npz.add_array("critical", &curves.critical_array())
        .map_err(npy_err)?;
    npz.add_array("caustic", &curves.caustic_array())
        .map_err(npy_err)?;
    npz.add_array("markers", &markers).map_err(npy_err)?;
    npz.finish().map_err(npy_err)?;
    Ok(())
}

/// Write every configured artifact for one configuration. Returns the
/// paths written, in format order, NPZ last.
pub fn export_curves(curves: &CurveSet, cfg: &RenderConfig) -> LensResult<Vec<PathBuf>> {
    std::fs::create_dir_all(&cfg.output_dir)?;
    let mut written = Vec::with_capacity(cfg.formats.len() + 1);

    for format in &cfg.formats {
        let path = output_path(curves, cfg, format.extension());
        match format {
            OutputFormat::Svg => std::fs::write(&path, render_svg(curves, cfg))?,
            OutputFormat::Png => write_png(curves, cfg, &path)?,
        }
        log::debug!("wrote {}", path.display());
        written.push(path);
    }

    if cfg.write_points {
        let path = output_path(curves, cfg, "npz");
        write_npz(curves, &path)?;
        log::debug!("wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}

/// Compute and export every configuration of a run, in order.
pub fn render_all(config: &RunConfig) -> Vec<BatchOutcome<Vec<PathBuf>>> {
    run_batch_with(&config.lens_systems, &config.sweep, |curves| {
        export_curves(&curves, &config.render)
    })
}
