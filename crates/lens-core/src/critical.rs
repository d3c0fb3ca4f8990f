// ─────────────────────────────────────────────────────────────────────
// SCPN Lensing — Critical Polynomial
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Critical-curve quartic of a binary point-mass lens.
//!
//! For unit total mass with components at z1, z2 the critical condition
//! m1/(z-z1)² + m2/(z-z2)² = e^{-iφ} clears to
//!
//!   e^{iφ} [(z-z1)(z-z2)]² - (z² - z1 z2) = 0,
//!
//! whose four roots sweep the critical curve as φ varies.

use lens_math::roots::polyroots;
use lens_types::constants::CRITICAL_DEGREE;
use lens_types::error::{LensError, LensResult};
use num_complex::Complex64;

/// Coefficients (degree 4 down to 0) of the critical polynomial at angle `phi`.
pub fn critical_poly_coeffs(phi: f64, z1: Complex64, z2: Complex64) -> [Complex64; 5] {
    let e = Complex64::from_polar(1.0, phi);
    [
        e,
        e * (-2.0 * z1 - 2.0 * z2),
        e * (4.0 * z1 * z2 + z1 * z1 + z2 * z2) - 1.0,
        e * (-2.0 * z1 * z1 * z2 - 2.0 * z1 * z2 * z2),
        e * z1 * z1 * z2 * z2 + z1 * z2,
    ]
}

/// The four lens-plane roots of the critical polynomial at `phi`.
///
/// Root order is whatever the eigenvalue solver returns; it is stable for a
/// given input but carries no meaning.
pub fn critical_roots(phi: f64, z1: Complex64, z2: Complex64) -> LensResult<[Complex64; 4]> {
    let coeffs = critical_poly_coeffs(phi, z1, z2);
    let roots = polyroots(&coeffs)?;
    let n = roots.len();
    roots.try_into().map_err(|_| LensError::RootSolve {
        iterations: 0,
        message: format!("expected {CRITICAL_DEGREE} critical roots, got {n}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lens_math::poly::polyval;

    fn re(x: f64) -> Complex64 {
        Complex64::new(x, 0.0)
    }

    #[test]
    fn test_coefficients_at_zero_angle() {
        let c = critical_poly_coeffs(0.0, re(-1.0), re(1.0));
        // e = 1: z^4 - 2z^2 + 1 - z^2 - 1 = z^4 - 3z^2
        assert!((c[0] - re(1.0)).norm() < 1e-15);
        assert!(c[1].norm() < 1e-15);
        assert!((c[2] - re(-3.0)).norm() < 1e-15);
        assert!(c[3].norm() < 1e-15);
        assert!(c[4].norm() < 1e-15);
    }

    #[test]
    fn test_coefficients_match_factored_form() {
        let (z1, z2) = (re(-0.99), re(0.11));
        let phi = 1.3;
        let c = critical_poly_coeffs(phi, z1, z2);
        let e = Complex64::from_polar(1.0, phi);
        for z in [Complex64::new(0.3, -0.8), Complex64::new(-1.7, 0.2), re(2.5)] {
            let prod = (z - z1) * (z - z2);
            let factored = e * prod * prod - (z * z - z1 * z2);
            assert!((polyval(&c, z) - factored).norm() < 1e-12);
        }
    }

    #[test]
    fn test_leading_coefficient_unit_modulus() {
        for k in 0..50 {
            let phi = k as f64 * 0.37;
            let c = critical_poly_coeffs(phi, re(-0.6), re(0.6));
            assert!((c[0].norm() - 1.0).abs() < 1e-15);
        }
    }

    #[test]
    fn test_equal_mass_roots_at_zero_angle() {
        // z^4 - 3z^2 = z^2 (z^2 - 3): roots 0, 0, ±sqrt(3)
        let roots = critical_roots(0.0, re(-1.0), re(1.0)).unwrap();
        let s3 = 3.0_f64.sqrt();
        assert!(roots.iter().any(|r| (r - re(s3)).norm() < 1e-10));
        assert!(roots.iter().any(|r| (r - re(-s3)).norm() < 1e-10));
        assert_eq!(roots.iter().filter(|r| r.norm() < 1e-6).count(), 2);
    }

    #[test]
    fn test_roots_satisfy_polynomial() {
        let (z1, z2) = (re(-0.76), re(0.04));
        for k in 0..20 {
            let phi = k as f64 * 0.6;
            let c = critical_poly_coeffs(phi, z1, z2);
            let roots = critical_roots(phi, z1, z2).unwrap();
            for r in roots {
                assert!(polyval(&c, r).norm() < 1e-10, "phi={phi} root={r}");
            }
        }
    }
}
