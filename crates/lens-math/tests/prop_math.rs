// ─────────────────────────────────────────────────────────────────────
// SCPN Lensing — Property-Based Tests (proptest) for lens-math
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for lens-math using proptest.
//!
//! Covers: root count, reconstruction from known roots, residuals,
//! eigenvalue trace identity.

use lens_math::eigen::hessenberg_eigenvalues;
use lens_math::poly::{companion_matrix, polyval};
use lens_math::roots::polyroots;
use num_complex::Complex64;
use proptest::prelude::*;

fn complex_in(range: f64) -> impl Strategy<Value = Complex64> {
    (-range..range, -range..range).prop_map(|(re, im)| Complex64::new(re, im))
}

/// Coefficients of prod (z - r_k), highest degree first.
fn from_roots(roots: &[Complex64]) -> Vec<Complex64> {
    let mut coeffs = vec![Complex64::new(1.0, 0.0)];
    for &r in roots {
        let mut next = vec![Complex64::new(0.0, 0.0); coeffs.len() + 1];
        for (i, &c) in coeffs.iter().enumerate() {
            next[i] += c;
            next[i + 1] -= c * r;
        }
        coeffs = next;
    }
    coeffs
}

// ── Root Count and Accuracy ──────────────────────────────────────────

proptest! {
    /// A degree-n polynomial with non-zero leading term yields n roots.
    #[test]
    fn root_count_equals_degree(
        lead in complex_in(3.0).prop_filter("non-zero lead", |c| c.norm() > 1e-3),
        rest in prop::collection::vec(complex_in(5.0), 1..8),
    ) {
        let mut coeffs = vec![lead];
        coeffs.extend(rest);
        let roots = polyroots(&coeffs).unwrap();
        prop_assert_eq!(roots.len(), coeffs.len() - 1);
    }

    /// Roots of a polynomial built from well-separated known roots are recovered.
    #[test]
    fn recovers_known_roots(
        r0 in complex_in(2.0),
        r1 in complex_in(2.0),
        r2 in complex_in(2.0),
        r3 in complex_in(2.0),
    ) {
        let known = [r0, r1, r2, r3];
        let min_sep = (0..4)
            .flat_map(|i| (i + 1..4).map(move |j| (i, j)))
            .map(|(i, j)| (known[i] - known[j]).norm())
            .fold(f64::INFINITY, f64::min);
        prop_assume!(min_sep > 0.1);

        let roots = polyroots(&from_roots(&known)).unwrap();
        for k in &known {
            let nearest = roots.iter().map(|r| (r - k).norm()).fold(f64::INFINITY, f64::min);
            prop_assert!(nearest < 1e-7, "root {} not recovered (nearest {})", k, nearest);
        }
    }

    /// Every returned root has a small backward residual.
    #[test]
    fn residuals_are_small(coeffs in prop::collection::vec(complex_in(4.0), 5)) {
        prop_assume!(coeffs[0].norm() > 1e-2);
        let roots = polyroots(&coeffs).unwrap();
        for r in &roots {
            let scale: f64 = coeffs
                .iter()
                .enumerate()
                .map(|(i, c)| c.norm() * r.norm().powi((coeffs.len() - 1 - i) as i32))
                .sum();
            prop_assert!(polyval(&coeffs, *r).norm() <= 1e-9 * scale.max(1.0));
        }
    }
}

// ── Eigenvalue Identities ────────────────────────────────────────────

proptest! {
    /// Sum of eigenvalues equals the companion matrix trace.
    #[test]
    fn eigenvalue_sum_equals_trace(coeffs in prop::collection::vec(complex_in(3.0), 2..7)) {
        prop_assume!(coeffs[0].norm() > 1e-2);
        let a = companion_matrix(&coeffs);
        let trace: Complex64 = (0..a.nrows()).map(|i| a[[i, i]]).sum();
        let eig = hessenberg_eigenvalues(a).unwrap();
        let sum: Complex64 = eig.iter().sum();
        prop_assert!((sum - trace).norm() < 1e-8 * trace.norm().max(1.0));
    }
}
