// ─────────────────────────────────────────────────────────────────────
// SCPN Lensing — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::config::LensConfig;
use ndarray::Array2;
use num_complex::Complex64;

/// A real (x, y) point in the lens or source plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanePoint {
    pub x: f64,
    pub y: f64,
}

impl PlanePoint {
    pub fn new(x: f64, y: f64) -> Self {
        PlanePoint { x, y }
    }

    pub fn from_complex(z: Complex64) -> Self {
        PlanePoint { x: z.re, y: z.im }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// One critical-curve point and its caustic image, produced from the same root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub critical: PlanePoint,
    pub caustic: PlanePoint,
}

/// Annotation positions for a plot: center of mass and both lens components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensMarkers {
    pub center_of_mass: PlanePoint,
    pub z1: PlanePoint,
    pub z2: PlanePoint,
}

/// All curve points of one configuration, in sweep order.
#[derive(Debug, Clone)]
pub struct CurveSet {
    pub lens: LensConfig,
    pub n_samples: usize,
    pub points: Vec<CurvePoint>,
    /// Sample indices dropped because the root solver failed.
    pub skipped_samples: Vec<usize>,
    /// Amount already subtracted from every x coordinate.
    pub x_offset: f64,
}

impl CurveSet {
    pub fn new(lens: LensConfig, n_samples: usize) -> Self {
        CurveSet {
            lens,
            n_samples,
            points: Vec::with_capacity(4 * n_samples),
            skipped_samples: Vec::new(),
            x_offset: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Shift every x coordinate (critical and caustic) by `-dx`.
    pub fn shift_x(&mut self, dx: f64) {
        for p in &mut self.points {
            p.critical.x -= dx;
            p.caustic.x -= dx;
        }
        self.x_offset += dx;
    }

    /// Lens component and center-of-mass positions in the same frame as the points.
    pub fn markers(&self) -> LensMarkers {
        let off = self.x_offset;
        LensMarkers {
            center_of_mass: PlanePoint::new(self.lens.center_of_mass() - off, 0.0),
            z1: PlanePoint::new(self.lens.z1() - off, 0.0),
            z2: PlanePoint::new(self.lens.z2() - off, 0.0),
        }
    }

    /// Critical points as an [N, 2] array of (x, y).
    pub fn critical_array(&self) -> Array2<f64> {
        Array2::from_shape_fn((self.points.len(), 2), |(i, j)| {
            let p = self.points[i].critical;
            if j == 0 {
                p.x
            } else {
                p.y
            }
        })
    }

    /// Caustic points as an [N, 2] array of (x, y).
    pub fn caustic_array(&self) -> Array2<f64> {
        Array2::from_shape_fn((self.points.len(), 2), |(i, j)| {
            let p = self.points[i].caustic;
            if j == 0 {
                p.x
            } else {
                p.y
            }
        })
    }

    pub fn non_finite_count(&self) -> usize {
        self.points
            .iter()
            .filter(|p| !p.critical.is_finite() || !p.caustic.is_finite())
            .count()
    }
}
