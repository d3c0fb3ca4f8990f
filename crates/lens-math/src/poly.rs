// ─────────────────────────────────────────────────────────────────────
// SCPN Lensing — Polynomials
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Complex polynomial helpers.
//!
//! Coefficients are ordered highest degree first: `c[0] z^n + ... + c[n]`.

use ndarray::Array2;
use num_complex::Complex64;

/// Horner evaluation of `c[0] z^n + ... + c[n]`.
pub fn polyval(coeffs: &[Complex64], z: Complex64) -> Complex64 {
    coeffs
        .iter()
        .fold(Complex64::new(0.0, 0.0), |acc, &c| acc * z + c)
}

/// Derivative coefficients, highest degree first.
pub fn polyder(coeffs: &[Complex64]) -> Vec<Complex64> {
    let n = coeffs.len();
    if n <= 1 {
        return Vec::new();
    }
    coeffs[..n - 1]
        .iter()
        .enumerate()
        .map(|(i, &c)| c * (n - 1 - i) as f64)
        .collect()
}

/// Companion matrix of a polynomial with non-zero leading coefficient.
///
/// First row holds `-c[k]/c[0]`, ones on the subdiagonal, so the matrix is
/// already upper Hessenberg and its eigenvalues are the polynomial's roots.
pub fn companion_matrix(coeffs: &[Complex64]) -> Array2<Complex64> {
    let n = coeffs.len().saturating_sub(1);
    let mut a = Array2::zeros((n, n));
    if n == 0 {
        return a;
    }
    let lead = coeffs[0];
    for j in 0..n {
        a[[0, j]] = -coeffs[j + 1] / lead;
    }
    for i in 1..n {
        a[[i, i - 1]] = Complex64::new(1.0, 0.0);
    }
    a
}

/// Diagonal similarity balancing (radix 2), in place.
///
/// Scales row i by 1/f and column i by f until row and column norms are
/// comparable. Eigenvalues are unchanged; Hessenberg structure is preserved.
pub fn balance(a: &mut Array2<Complex64>) {
    const RADIX: f64 = 2.0;
    const SQRDX: f64 = RADIX * RADIX;
    const MAX_SWEEPS: usize = 100;

    let n = a.nrows();
    for _ in 0..MAX_SWEEPS {
        let mut done = true;
        for i in 0..n {
            let mut c = 0.0;
            let mut r = 0.0;
            for j in 0..n {
                if j != i {
                    c += a[[j, i]].norm();
                    r += a[[i, j]].norm();
                }
            }
            if c == 0.0 || r == 0.0 {
                continue;
            }
            let s = c + r;
            let mut f = 1.0;
            let mut g = r / RADIX;
            while c < g {
                f *= RADIX;
                c *= SQRDX;
            }
            g = r * RADIX;
            while c > g {
                f /= RADIX;
                c /= SQRDX;
            }
            if (c + r) / f < 0.95 * s {
                done = false;
                let g = 1.0 / f;
                for j in 0..n {
                    a[[i, j]] *= g;
                }
                for j in 0..n {
                    a[[j, i]] *= f;
                }
            }
        }
        if done {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_polyval_horner() {
        // z^2 - 3z + 2 at z = 4 → 6
        let p = [c(1.0, 0.0), c(-3.0, 0.0), c(2.0, 0.0)];
        assert!((polyval(&p, c(4.0, 0.0)) - c(6.0, 0.0)).norm() < 1e-15);
        // z^2 + 1 at z = i → 0
        let q = [c(1.0, 0.0), c(0.0, 0.0), c(1.0, 0.0)];
        assert!(polyval(&q, c(0.0, 1.0)).norm() < 1e-15);
    }

    #[test]
    fn test_polyder() {
        let p = [c(2.0, 0.0), c(0.0, 1.0), c(5.0, 0.0), c(7.0, 0.0)];
        let d = polyder(&p);
        assert_eq!(d, vec![c(6.0, 0.0), c(0.0, 2.0), c(5.0, 0.0)]);
        assert!(polyder(&[c(3.0, 0.0)]).is_empty());
    }

    #[test]
    fn test_companion_layout() {
        let p = [c(2.0, 0.0), c(4.0, 0.0), c(6.0, 0.0), c(8.0, 0.0)];
        let a = companion_matrix(&p);
        assert_eq!(a.dim(), (3, 3));
        assert_eq!(a[[0, 0]], c(-2.0, 0.0));
        assert_eq!(a[[0, 1]], c(-3.0, 0.0));
        assert_eq!(a[[0, 2]], c(-4.0, 0.0));
        assert_eq!(a[[1, 0]], c(1.0, 0.0));
        assert_eq!(a[[2, 1]], c(1.0, 0.0));
        assert_eq!(a[[2, 2]], c(0.0, 0.0));
    }

    #[test]
    fn test_balance_preserves_trace() {
        let p = [c(1.0, 0.0), c(1e4, 0.0), c(-1e-3, 2.0), c(5e5, -1.0)];
        let mut a = companion_matrix(&p);
        let trace_before: Complex64 = (0..3).map(|i| a[[i, i]]).sum();
        balance(&mut a);
        let trace_after: Complex64 = (0..3).map(|i| a[[i, i]]).sum();
        assert!((trace_before - trace_after).norm() < 1e-9 * trace_before.norm());
        // Subdiagonal-below-first stays zero
        assert_eq!(a[[2, 0]], c(0.0, 0.0));
    }
}
