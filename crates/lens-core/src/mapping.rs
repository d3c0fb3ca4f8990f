// ─────────────────────────────────────────────────────────────────────
// SCPN Lensing — Lens Mapping
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Binary lens equation in complex coordinates.
//!
//! w = z - m1/conj(z - z1) - m2/conj(z - z2)
//!
//! A point exactly on a lens component has no image; the result is
//! non-finite and is returned as-is.

use lens_types::config::LensConfig;
use num_complex::Complex64;

/// Source-plane image of lens-plane point `z`.
pub fn lens_map(z: Complex64, z1: Complex64, z2: Complex64, m1: f64, m2: f64) -> Complex64 {
    let zc = z.conj();
    z - m1 / (zc - z1.conj()) - m2 / (zc - z2.conj())
}

/// Jacobian determinant of the lens map at `z`.
///
/// det J = 1 - |m1/(conj z - z1)² + m2/(conj z - z2)²|², zero on the critical curve.
pub fn jacobian_det(z: Complex64, z1: Complex64, z2: Complex64, m1: f64, m2: f64) -> f64 {
    let zc = z.conj();
    let a = zc - z1.conj();
    let b = zc - z2.conj();
    let shear = m1 / (a * a) + m2 / (b * b);
    1.0 - shear.norm_sqr()
}

/// Component positions and masses of one configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryLens {
    pub z1: Complex64,
    pub z2: Complex64,
    pub m1: f64,
    pub m2: f64,
}

impl BinaryLens {
    pub fn from_config(lens: &LensConfig) -> Self {
        BinaryLens {
            z1: Complex64::new(lens.z1(), 0.0),
            z2: Complex64::new(lens.z2(), 0.0),
            m1: lens.mass_fraction_1,
            m2: lens.mass_fraction_2(),
        }
    }

    pub fn map(&self, z: Complex64) -> Complex64 {
        lens_map(z, self.z1, self.z2, self.m1, self.m2)
    }

    pub fn jacobian_det(&self, z: Complex64) -> f64 {
        jacobian_det(z, self.z1, self.z2, self.m1, self.m2)
    }
}
