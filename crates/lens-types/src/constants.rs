// ─────────────────────────────────────────────────────────────────────
// SCPN Lensing — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use std::f64::consts::PI;

/// Default number of angle samples per configuration.
pub const DEFAULT_ANGLE_SAMPLES: usize = 5000;

/// Upper end of the angle sweep. Two full turns so every branch closes.
pub const DEFAULT_PHI_MAX: f64 = 4.0 * PI;

/// Degree of the critical-curve polynomial.
pub const CRITICAL_DEGREE: usize = 4;

/// Reference lens systems as (mass_fraction_1, separation).
pub const REFERENCE_LENS_SYSTEMS: [(f64, f64); 4] = [(0.5, 2.0), (0.9, 1.1), (0.95, 0.8), (0.75, 1.2)];

/// Default output directory for rendered curves.
pub const DEFAULT_OUTPUT_DIR: &str = "imgs";
