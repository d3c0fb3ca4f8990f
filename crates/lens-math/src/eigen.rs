// ─────────────────────────────────────────────────────────────────────
// SCPN Lensing — Eigenvalues
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Eigenvalues of complex upper Hessenberg matrices.
//!
//! Single-shift QR iteration with Givens rotations and Wilkinson shifts,
//! deflating from the bottom. Only eigenvalues are produced, so every
//! rotation is restricted to the active (undeflated) window.

use lens_types::error::{LensError, LensResult};
use ndarray::Array2;
use num_complex::Complex64;

/// Iteration budget per eigenvalue.
const ITERS_PER_EIGENVALUE: usize = 30;

/// Every this many iterations without deflation, use an ad-hoc shift.
const EXCEPTIONAL_SHIFT_PERIOD: usize = 10;

/// Plane rotation [[c, s], [-conj(s), c]] with real c.
#[derive(Debug, Clone, Copy)]
struct Givens {
    c: f64,
    s: Complex64,
}

impl Givens {
    /// Rotation that maps (x, y) to (r, 0).
    fn zeroing(x: Complex64, y: Complex64) -> Self {
        let ax = x.norm();
        let r = ax.hypot(y.norm());
        if r == 0.0 {
            return Givens {
                c: 1.0,
                s: Complex64::new(0.0, 0.0),
            };
        }
        if ax == 0.0 {
            return Givens {
                c: 0.0,
                s: Complex64::new(1.0, 0.0),
            };
        }
        Givens {
            c: ax / r,
            s: (x / ax) * y.conj() / r,
        }
    }
}

/// Both eigenvalues of [[a, b], [c, d]], the one closest to `d` first.
fn block_2x2_eigenvalues(
    a: Complex64,
    b: Complex64,
    c: Complex64,
    d: Complex64,
) -> (Complex64, Complex64) {
    let half_diff = (a - d) * 0.5;
    let disc = (half_diff * half_diff + b * c).sqrt();
    let mid = (a + d) * 0.5;
    let (plus, minus) = (mid + disc, mid - disc);
    let (big, other) = if plus.norm() >= minus.norm() {
        (plus, minus)
    } else {
        (minus, plus)
    };
    // Small eigenvalue from the determinant avoids cancellation.
    let small = if big.norm() > 0.0 {
        (a * d - b * c) / big
    } else {
        other
    };
    let (mu1, mu2) = (big, small);
    if (mu1 - d).norm() <= (mu2 - d).norm() {
        (mu1, mu2)
    } else {
        (mu2, mu1)
    }
}

/// Wilkinson shift: eigenvalue of the trailing 2x2 block closest to its
/// bottom-right entry.
fn wilkinson_shift(a: Complex64, b: Complex64, c: Complex64, d: Complex64) -> Complex64 {
    block_2x2_eigenvalues(a, b, c, d).0
}

/// All eigenvalues of an upper Hessenberg matrix, in deflation order
/// (bottom of the matrix first).
///
/// Fails with `RootSolve` when an eigenvalue does not deflate within the
/// iteration budget or the matrix contains non-finite entries.
pub fn hessenberg_eigenvalues(mut h: Array2<Complex64>) -> LensResult<Vec<Complex64>> {
    let n = h.nrows();
    if h.ncols() != n {
        return Err(LensError::RootSolve {
            iterations: 0,
            message: format!("matrix must be square, got {}x{}", n, h.ncols()),
        });
    }
    if h.iter().any(|v| !v.re.is_finite() || !v.im.is_finite()) {
        return Err(LensError::RootSolve {
            iterations: 0,
            message: "matrix contains non-finite entries".to_string(),
        });
    }
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut eigenvalues = Vec::with_capacity(n);
    let scale = h.iter().map(|v| v.norm()).fold(0.0_f64, f64::max);
    let max_iter = ITERS_PER_EIGENVALUE * n;
    let mut total_iter = 0;
    let mut iter_since_deflation = 0;
    let mut hi = n - 1;

    loop {
        if hi == 0 {
            eigenvalues.push(h[[0, 0]]);
            break;
        }

        // Find the top of the active block.
        let mut lo = hi;
        while lo > 0 {
            let mut s = h[[lo - 1, lo - 1]].norm() + h[[lo, lo]].norm();
            if s == 0.0 {
                s = scale;
            }
            if h[[lo, lo - 1]].norm() <= f64::EPSILON * s {
                h[[lo, lo - 1]] = Complex64::new(0.0, 0.0);
                break;
            }
            lo -= 1;
        }

        if lo == hi {
            eigenvalues.push(h[[hi, hi]]);
            hi -= 1;
            iter_since_deflation = 0;
            continue;
        }

        // Isolated 2x2 block: solve it directly.
        if lo + 1 == hi {
            let (mu1, mu2) = block_2x2_eigenvalues(
                h[[lo, lo]],
                h[[lo, hi]],
                h[[hi, lo]],
                h[[hi, hi]],
            );
            eigenvalues.push(mu1);
            eigenvalues.push(mu2);
            if lo == 0 {
                break;
            }
            hi = lo - 1;
            iter_since_deflation = 0;
            continue;
        }

        total_iter += 1;
        iter_since_deflation += 1;
        if iter_since_deflation > max_iter {
            return Err(LensError::RootSolve {
                iterations: total_iter,
                message: format!(
                    "QR iteration did not deflate row {hi} of {n} (subdiagonal {:.3e})",
                    h[[hi, hi - 1]].norm()
                ),
            });
        }

        let mu = if iter_since_deflation % EXCEPTIONAL_SHIFT_PERIOD == 0 {
            h[[hi, hi]] + Complex64::new(0.75 * h[[hi, hi - 1]].norm(), 0.0)
        } else {
            wilkinson_shift(
                h[[hi - 1, hi - 1]],
                h[[hi - 1, hi]],
                h[[hi, hi - 1]],
                h[[hi, hi]],
            )
        };

        qr_step(&mut h, lo, hi, mu);
    }

    Ok(eigenvalues)
}

/// One shifted QR step, H - mu I = QR, H <- RQ + mu I, on rows/cols lo..=hi.
fn qr_step(h: &mut Array2<Complex64>, lo: usize, hi: usize, mu: Complex64) {
    for k in lo..=hi {
        h[[k, k]] -= mu;
    }

    let mut rotations = Vec::with_capacity(hi - lo);
    for k in lo..hi {
        let g = Givens::zeroing(h[[k, k]], h[[k + 1, k]]);
        for j in k..=hi {
            let u = h[[k, j]];
            let v = h[[k + 1, j]];
            h[[k, j]] = u * g.c + g.s * v;
            h[[k + 1, j]] = -g.s.conj() * u + v * g.c;
        }
        h[[k + 1, k]] = Complex64::new(0.0, 0.0);
        rotations.push(g);
    }

    for (offset, g) in rotations.iter().enumerate() {
        let k = lo + offset;
        for i in lo..=(k + 1).min(hi) {
            let p = h[[i, k]];
            let q = h[[i, k + 1]];
            h[[i, k]] = p * g.c + q * g.s.conj();
            h[[i, k + 1]] = -p * g.s + q * g.c;
        }
    }

    for k in lo..=hi {
        h[[k, k]] += mu;
    }
}
