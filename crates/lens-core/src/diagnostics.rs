// ─────────────────────────────────────────────────────────────────────
// SCPN Lensing — Curve Diagnostics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Sanity checks on computed curves: Jacobian on the critical points,
//! non-finite images, closure of the sweep and continuity between samples.

use crate::critical::critical_roots;
use crate::mapping::BinaryLens;
use crate::sweep::angle_samples;
use lens_types::config::{LensConfig, SweepConfig};
use lens_types::error::LensResult;
use lens_types::state::CurveSet;
use num_complex::Complex64;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveReport {
    /// Largest |det J| over all critical points; zero for exact roots.
    pub max_abs_jacobian: f64,
    pub non_finite_points: usize,
    pub closure_gap: f64,
    pub max_step_gap: f64,
}

/// Symmetric distance between two root sets, independent of ordering.
pub fn root_set_distance(a: &[Complex64], b: &[Complex64]) -> f64 {
    let directed = |from: &[Complex64], to: &[Complex64]| {
        from.iter()
            .map(|p| to.iter().map(|q| (p - q).norm()).fold(f64::INFINITY, f64::min))
            .fold(0.0_f64, f64::max)
    };
    directed(a, b).max(directed(b, a))
}

/// Distance between the root sets at the first and the last sample.
///
/// Both ends evaluate the same polynomial whenever `phi_max` is a whole
/// number of turns, so this only catches a `phi_max` that is not.
pub fn closure_gap(lens: &LensConfig, sweep: &SweepConfig) -> LensResult<f64> {
    let phis = angle_samples(sweep.n_samples, sweep.phi_max)?;
    let binary = BinaryLens::from_config(lens);
    let first = critical_roots(phis[0], binary.z1, binary.z2)?;
    let last = critical_roots(phis[phis.len() - 1], binary.z1, binary.z2)?;
    Ok(root_set_distance(&first, &last))
}

/// Largest root-set jump between consecutive samples, including the step
/// across the wrap from the last sample to the second.
///
/// Small values mean the sampled curves are continuous, so the plotted
/// point clouds trace closed curves without gaps.
pub fn max_step_gap(lens: &LensConfig, sweep: &SweepConfig) -> LensResult<f64> {
    let phis = angle_samples(sweep.n_samples, sweep.phi_max)?;
    let binary = BinaryLens::from_config(lens);
    let roots = phis
        .iter()
        .map(|&phi| critical_roots(phi, binary.z1, binary.z2))
        .collect::<LensResult<Vec<_>>>()?;

    let mut gap = roots
        .windows(2)
        .map(|w| root_set_distance(&w[0], &w[1]))
        .fold(0.0_f64, f64::max);
    if roots.len() > 2 {
        gap = gap.max(root_set_distance(&roots[roots.len() - 1], &roots[1]));
    }
    Ok(gap)
}

/// Lens-plane root that produced a stored critical point.
fn stored_root(x: f64, y: f64, x_offset: f64) -> Complex64 {
    Complex64::new(x + x_offset, -y)
}

pub fn curve_report(curves: &CurveSet, sweep: &SweepConfig) -> LensResult<CurveReport> {
    let binary = BinaryLens::from_config(&curves.lens);
    let max_abs_jacobian = curves
        .points
        .iter()
        .map(|p| stored_root(p.critical.x, p.critical.y, curves.x_offset))
        .map(|z| binary.jacobian_det(z).abs())
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);

    Ok(CurveReport {
        max_abs_jacobian,
        non_finite_points: curves.non_finite_count(),
        closure_gap: closure_gap(&curves.lens, sweep)?,
        max_step_gap: max_step_gap(&curves.lens, sweep)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::generate_curves;

    #[test]
    fn test_root_set_distance_order_independent() {
        let a = [Complex64::new(1.0, 0.0), Complex64::new(0.0, 2.0)];
        let b = [Complex64::new(0.0, 2.0), Complex64::new(1.0, 0.0)];
        assert_eq!(root_set_distance(&a, &b), 0.0);
        let c = [Complex64::new(0.0, 2.0), Complex64::new(1.5, 0.0)];
        assert!((root_set_distance(&a, &c) - 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_reference_sweeps_close() {
        for &(m1, d) in &lens_types::constants::REFERENCE_LENS_SYSTEMS {
            let gap = closure_gap(&LensConfig::new(m1, d), &SweepConfig::default()).unwrap();
            assert!(gap < 1e-6, "m1={m1} d={d} gap={gap}");
        }
    }

    #[test]
    fn test_partial_turn_does_not_close() {
        // Three half-turns end on e^{i phi} = -1, a different polynomial.
        let sweep = SweepConfig {
            phi_max: 3.0 * std::f64::consts::PI,
            ..SweepConfig::with_samples(100)
        };
        let gap = closure_gap(&LensConfig::new(0.5, 2.0), &sweep).unwrap();
        assert!(gap > 0.5, "gap={gap}");
        // The wrap step is then a jump, far larger than any sampled step.
        let step = max_step_gap(&LensConfig::new(0.5, 2.0), &sweep).unwrap();
        assert!(step > 0.5, "step={step}");
    }

    #[test]
    fn test_reference_sweeps_continuous() {
        for &(m1, d) in &lens_types::constants::REFERENCE_LENS_SYSTEMS {
            let step = max_step_gap(&LensConfig::new(m1, d), &SweepConfig::default()).unwrap();
            assert!(step < 0.05, "m1={m1} d={d} step={step}");
        }
    }

    #[test]
    fn test_coarse_sweep_has_large_steps() {
        let lens = LensConfig::new(0.75, 1.2);
        let fine = max_step_gap(&lens, &SweepConfig::with_samples(2000)).unwrap();
        let coarse = max_step_gap(&lens, &SweepConfig::with_samples(9)).unwrap();
        assert!(coarse > 10.0 * fine, "coarse={coarse} fine={fine}");
    }

    #[test]
    fn test_report_on_critical_curve() {
        let lens = LensConfig::new(0.9, 1.1);
        let sweep = SweepConfig::with_samples(200);
        let curves = generate_curves(&lens, &sweep).unwrap();
        let report = curve_report(&curves, &sweep).unwrap();
        assert!(report.max_abs_jacobian < 1e-8, "{report:?}");
        assert_eq!(report.non_finite_points, 0);
        assert!(report.closure_gap < 1e-6);
        assert!(report.max_step_gap < 1.0);
    }
}
