// ─────────────────────────────────────────────────────────────────────
// SCPN Lensing — Angle Sweep
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Angle sweep over the critical polynomial.
//!
//! For each φ the four roots become critical points and are mapped to
//! caustic points. Critical y is stored with its sign flipped; caustic y
//! is stored as computed. After the sweep every x is shifted by the
//! center of mass.

use crate::critical::critical_roots;
use crate::mapping::BinaryLens;
use lens_types::config::{LensConfig, RootFailurePolicy, SweepConfig};
use lens_types::error::{LensError, LensResult};
use lens_types::state::{CurvePoint, CurveSet, PlanePoint};
use ndarray::Array1;
use num_complex::Complex64;

/// Evenly spaced angles from 0 to `phi_max` inclusive.
///
/// A single sample is the angle 0. The endpoint is included so the first
/// and last samples describe the same polynomial after a double turn.
pub fn angle_samples(n_samples: usize, phi_max: f64) -> LensResult<Array1<f64>> {
    if n_samples == 0 {
        return Err(LensError::InvalidConfiguration(
            "sweep requires n_samples >= 1".to_string(),
        ));
    }
    if n_samples == 1 {
        return Ok(Array1::zeros(1));
    }
    Ok(Array1::linspace(0.0, phi_max, n_samples))
}

/// Critical and caustic points produced by one root.
pub fn curve_point(root: Complex64, lens: &BinaryLens) -> CurvePoint {
    let image = lens.map(root);
    CurvePoint {
        critical: PlanePoint::new(root.re, -root.im),
        caustic: PlanePoint::from_complex(image),
    }
}

/// Sweep all angle samples without centering.
///
/// Points are appended per φ in sample order, then per root in solver
/// order. Root failures follow `sweep.on_root_failure`.
pub fn sweep_raw(lens: &LensConfig, sweep: &SweepConfig) -> LensResult<CurveSet> {
    let phis = angle_samples(sweep.n_samples, sweep.phi_max)?;
    let binary = BinaryLens::from_config(lens);
    let mut curves = CurveSet::new(*lens, sweep.n_samples);

    log::debug!(
        "sweeping m1={} d={} over {} samples in [0, {}]",
        lens.mass_fraction_1,
        lens.separation,
        sweep.n_samples,
        sweep.phi_max
    );

    for (index, &phi) in phis.iter().enumerate() {
        match critical_roots(phi, binary.z1, binary.z2) {
            Ok(roots) => {
                curves
                    .points
                    .extend(roots.iter().map(|&root| curve_point(root, &binary)));
            }
            Err(err) => match sweep.on_root_failure {
                RootFailurePolicy::Abort => {
                    return Err(LensError::SweepAborted {
                        index,
                        phi,
                        source: Box::new(err),
                    });
                }
                RootFailurePolicy::Skip => {
                    log::warn!("skipping sample {index} (phi = {phi}): {err}");
                    curves.skipped_samples.push(index);
                }
            },
        }
    }

    Ok(curves)
}

/// Shift every x coordinate so the center of mass sits at the origin.
pub fn center_on_mass(curves: &mut CurveSet) {
    let com = curves.lens.center_of_mass();
    curves.shift_x(com);
}

/// Validated, centered curves for one configuration.
pub fn generate_curves(lens: &LensConfig, sweep: &SweepConfig) -> LensResult<CurveSet> {
    lens.validate()?;
    sweep.validate()?;

    let mut curves = sweep_raw(lens, sweep)?;
    center_on_mass(&mut curves);

    let non_finite = curves.non_finite_count();
    if non_finite > 0 {
        log::warn!(
            "m1={} d={}: {non_finite} non-finite points (root on a lens component)",
            lens.mass_fraction_1,
            lens.separation
        );
    }
    log::info!(
        "m1={} d={}: {} curve points, {} skipped samples",
        lens.mass_fraction_1,
        lens.separation,
        curves.len(),
        curves.skipped_samples.len()
    );
    Ok(curves)
}
