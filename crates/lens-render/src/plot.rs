// ─────────────────────────────────────────────────────────────────────
// SCPN Lensing — Plot Frame
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Data-to-pixel mapping shared by the SVG and PNG renderers.

use lens_types::state::{CurveSet, PlanePoint};

/// Fraction of the data range added on each side.
const PAD_FRACTION: f64 = 0.05;

/// Pixel margin around the plot area.
pub const MARGIN: f64 = 70.0;

/// ggplot-style palette.
pub const CRITICAL_COLOR: [u8; 3] = [0xE2, 0x4A, 0x33];
pub const CAUSTIC_COLOR: [u8; 3] = [0x34, 0x8A, 0xBD];
pub const Z1_COLOR: [u8; 3] = [0xD6, 0x27, 0x28];
pub const Z2_COLOR: [u8; 3] = [0x2C, 0xA0, 0x2C];
pub const PANEL_COLOR: [u8; 3] = [0xE5, 0xE5, 0xE5];

pub fn hex(color: [u8; 3]) -> String {
    format!("#{:02X}{:02X}{:02X}", color[0], color[1], color[2])
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotFrame {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotFrame {
    /// Frame enclosing every finite point and marker of `curves`.
    pub fn fit(curves: &CurveSet, width: u32, height: u32) -> Self {
        let markers = curves.markers();
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;

        let points = curves
            .points
            .iter()
            .flat_map(|p| [p.critical, p.caustic])
            .chain([markers.center_of_mass, markers.z1, markers.z2])
            .filter(PlanePoint::is_finite);
        for p in points {
            x_min = x_min.min(p.x);
            x_max = x_max.max(p.x);
            y_min = y_min.min(p.y);
            y_max = y_max.max(p.y);
        }

        let (x_min, x_max) = padded(x_min, x_max);
        let (y_min, y_max) = padded(y_min, y_max);
        PlotFrame {
            x_min,
            x_max,
            y_min,
            y_max,
            width: width as f64,
            height: height as f64,
        }
    }

    pub fn plot_left(&self) -> f64 {
        MARGIN
    }
    pub fn plot_right(&self) -> f64 {
        self.width - MARGIN * 0.5
    }
    pub fn plot_top(&self) -> f64 {
        MARGIN
    }
    pub fn plot_bottom(&self) -> f64 {
        self.height - MARGIN
    }

    /// Pixel coordinates of a data point; y grows downward.
    pub fn to_pixel(&self, p: PlanePoint) -> (f64, f64) {
        let fx = (p.x - self.x_min) / (self.x_max - self.x_min);
        let fy = (p.y - self.y_min) / (self.y_max - self.y_min);
        let px = self.plot_left() + fx * (self.plot_right() - self.plot_left());
        let py = self.plot_bottom() - fy * (self.plot_bottom() - self.plot_top());
        (px, py)
    }

    pub fn x_ticks(&self) -> Vec<f64> {
        nice_ticks(self.x_min, self.x_max, 6)
    }

    pub fn y_ticks(&self) -> Vec<f64> {
        nice_ticks(self.y_min, self.y_max, 5)
    }
}

fn padded(lo: f64, hi: f64) -> (f64, f64) {
    if !lo.is_finite() || !hi.is_finite() {
        return (-1.0, 1.0);
    }
    let span = hi - lo;
    if span <= 0.0 {
        return (lo - 1.0, hi + 1.0);
    }
    (lo - PAD_FRACTION * span, hi + PAD_FRACTION * span)
}

/// Round tick positions (1, 2, 5 × 10^k steps) inside [lo, hi].
pub fn nice_ticks(lo: f64, hi: f64, target: usize) -> Vec<f64> {
    let span = hi - lo;
    if !span.is_finite() || span <= 0.0 || target == 0 {
        return Vec::new();
    }
    let raw = span / target as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|&s| s >= raw)
        .unwrap_or(10.0 * magnitude);

    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}
