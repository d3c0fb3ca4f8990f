//! Polynomial roots via companion-matrix eigenvalues.

use crate::eigen::hessenberg_eigenvalues;
use crate::poly::{balance, companion_matrix, polyder, polyval};
use lens_types::error::{LensError, LensResult};
use num_complex::Complex64;

/// All complex roots of `c[0] z^n + ... + c[n]`, counted with multiplicity.
///
/// Leading zeros are stripped. Trailing zeros contribute exact zero roots
/// (appended last). A constant polynomial has no roots. Eigenvalue roots
/// are refined by Newton steps on the polynomial itself.
pub fn polyroots(coeffs: &[Complex64]) -> LensResult<Vec<Complex64>> {
    if coeffs.iter().any(|c| !c.re.is_finite() || !c.im.is_finite()) {
        return Err(LensError::RootSolve {
            iterations: 0,
            message: "polynomial coefficients must be finite".to_string(),
        });
    }

    let zero = Complex64::new(0.0, 0.0);
    let Some(first) = coeffs.iter().position(|&c| c != zero) else {
        return Err(LensError::RootSolve {
            iterations: 0,
            message: "polynomial is identically zero".to_string(),
        });
    };
    // `first` exists, so `last` does too.
    let last = coeffs.iter().rposition(|&c| c != zero).unwrap_or(first);

    let trimmed = &coeffs[first..=last];
    let n_zero_roots = coeffs.len() - 1 - last;

    let mut roots = if trimmed.len() > 1 {
        let mut a = companion_matrix(trimmed);
        balance(&mut a);
        let mut roots = hessenberg_eigenvalues(a)?;
        polish(trimmed, &mut roots);
        roots
    } else {
        Vec::new()
    };
    roots.extend(std::iter::repeat(zero).take(n_zero_roots));
    Ok(roots)
}

/// Newton steps per root.
const POLISH_STEPS: usize = 2;

/// Newton refinement, keeping a step only if it lowers the residual.
/// Near-multiple roots (vanishing derivative) are left as they are.
fn polish(coeffs: &[Complex64], roots: &mut [Complex64]) {
    let deriv = polyder(coeffs);
    for root in roots.iter_mut() {
        let mut residual = polyval(coeffs, *root).norm();
        for _ in 0..POLISH_STEPS {
            if residual == 0.0 {
                break;
            }
            let slope = polyval(&deriv, *root);
            if slope.norm() == 0.0 {
                break;
            }
            let candidate = *root - polyval(coeffs, *root) / slope;
            let next = polyval(coeffs, candidate).norm();
            if next.is_nan() || next >= residual {
                break;
            }
            *root = candidate;
            residual = next;
        }
    }
}
