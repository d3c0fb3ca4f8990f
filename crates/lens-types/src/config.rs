// ─────────────────────────────────────────────────────────────────────
// SCPN Lensing — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::constants::{
    DEFAULT_ANGLE_SAMPLES, DEFAULT_OUTPUT_DIR, DEFAULT_PHI_MAX, REFERENCE_LENS_SYSTEMS,
};
use crate::error::{LensError, LensResult};
use serde::{Deserialize, Serialize};

/// A binary point-mass lens: mass fraction of the first component and the
/// separation between the two components, in Einstein-radius units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LensConfig {
    pub mass_fraction_1: f64,
    pub separation: f64,
}

impl LensConfig {
    pub fn new(mass_fraction_1: f64, separation: f64) -> Self {
        LensConfig {
            mass_fraction_1,
            separation,
        }
    }

    pub fn mass_fraction_2(&self) -> f64 {
        1.0 - self.mass_fraction_1
    }

    /// Position of the first component on the real axis.
    pub fn z1(&self) -> f64 {
        -self.mass_fraction_1 * self.separation
    }

    /// Position of the second component on the real axis.
    pub fn z2(&self) -> f64 {
        self.mass_fraction_2() * self.separation
    }

    /// Mass-weighted x position, used to re-center plots.
    pub fn center_of_mass(&self) -> f64 {
        self.z1() * self.mass_fraction_1 + self.z2() * self.mass_fraction_2()
    }

    /// Reject configurations outside the physical domain.
    pub fn validate(&self) -> LensResult<()> {
        let m1 = self.mass_fraction_1;
        if !m1.is_finite() || m1 <= 0.0 || m1 >= 1.0 {
            return Err(LensError::InvalidConfiguration(format!(
                "mass_fraction_1 must lie in (0, 1), got {m1}"
            )));
        }
        let d = self.separation;
        if !d.is_finite() || d <= 0.0 {
            return Err(LensError::InvalidConfiguration(format!(
                "separation must be finite and > 0, got {d}"
            )));
        }
        Ok(())
    }
}

impl From<(f64, f64)> for LensConfig {
    fn from((mass_fraction_1, separation): (f64, f64)) -> Self {
        LensConfig::new(mass_fraction_1, separation)
    }
}

/// What the sweep does when the quartic solver fails at one angle sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RootFailurePolicy {
    /// Abort the whole configuration.
    #[default]
    Abort,
    /// Drop the sample's points and record its index.
    Skip,
}

/// Angle sweep resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    #[serde(default = "default_n_samples")]
    pub n_samples: usize,
    #[serde(default = "default_phi_max")]
    pub phi_max: f64,
    #[serde(default)]
    pub on_root_failure: RootFailurePolicy,
}

fn default_n_samples() -> usize {
    DEFAULT_ANGLE_SAMPLES
}
fn default_phi_max() -> f64 {
    DEFAULT_PHI_MAX
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            n_samples: default_n_samples(),
            phi_max: default_phi_max(),
            on_root_failure: RootFailurePolicy::default(),
        }
    }
}

impl SweepConfig {
    pub fn with_samples(n_samples: usize) -> Self {
        SweepConfig {
            n_samples,
            ..SweepConfig::default()
        }
    }

    pub fn validate(&self) -> LensResult<()> {
        if self.n_samples == 0 {
            return Err(LensError::InvalidConfiguration(
                "sweep requires n_samples >= 1".to_string(),
            ));
        }
        if !self.phi_max.is_finite() || self.phi_max <= 0.0 {
            return Err(LensError::InvalidConfiguration(format!(
                "phi_max must be finite and > 0, got {}",
                self.phi_max
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Svg,
    Png,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
        }
    }
}

/// Output settings for the rendering/export stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    /// Scatter marker radius in pixels.
    #[serde(default = "default_point_radius")]
    pub point_radius: f64,
    #[serde(default = "default_formats")]
    pub formats: Vec<OutputFormat>,
    /// Also dump the centered point sets as `.npz`.
    #[serde(default)]
    pub write_points: bool,
}

fn default_output_dir() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}
fn default_width() -> u32 {
    1800
}
fn default_height() -> u32 {
    1200
}
fn default_point_radius() -> f64 {
    0.6
}
fn default_formats() -> Vec<OutputFormat> {
    vec![OutputFormat::Svg]
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            output_dir: default_output_dir(),
            width: default_width(),
            height: default_height(),
            point_radius: default_point_radius(),
            formats: default_formats(),
            write_points: false,
        }
    }
}

/// Top-level run description: which lenses, how finely, where to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default = "default_lens_systems")]
    pub lens_systems: Vec<LensConfig>,
    #[serde(default)]
    pub sweep: SweepConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

fn default_lens_systems() -> Vec<LensConfig> {
    REFERENCE_LENS_SYSTEMS
        .iter()
        .map(|&pair| LensConfig::from(pair))
        .collect()
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            lens_systems: default_lens_systems(),
            sweep: SweepConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

impl RunConfig {
    /// Load from a JSON file. Missing sections fall back to defaults.
    pub fn from_file(path: &str) -> LensResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> LensResult<Self> {
        let config: Self = serde_json::from_str(contents)?;
        if config.lens_systems.is_empty() {
            return Err(LensError::InvalidConfiguration(
                "lens_systems must not be empty".to_string(),
            ));
        }
        config.sweep.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_mass_positions() {
        let lens = LensConfig::new(0.5, 2.0);
        assert_eq!(lens.z1(), -1.0);
        assert_eq!(lens.z2(), 1.0);
        assert_eq!(lens.center_of_mass(), 0.0);
    }

    #[test]
    fn test_unequal_mass_positions() {
        let lens = LensConfig::new(0.9, 1.1);
        assert!((lens.mass_fraction_2() - 0.1).abs() < 1e-15);
        assert!(lens.z1() < 0.0 && lens.z2() > 0.0);
        assert!((lens.z2() - lens.z1() - 1.1).abs() < 1e-12);
        // 0.9 * (-0.99) + 0.1 * 0.11
        assert!((lens.center_of_mass() - (-0.88)).abs() < 1e-12);
    }

    #[test]
    fn test_validate_rejects_degenerate() {
        assert!(LensConfig::new(0.0, 1.0).validate().is_err());
        assert!(LensConfig::new(1.0, 1.0).validate().is_err());
        assert!(LensConfig::new(0.5, 0.0).validate().is_err());
        assert!(LensConfig::new(0.5, -1.0).validate().is_err());
        assert!(LensConfig::new(f64::NAN, 1.0).validate().is_err());
        assert!(LensConfig::new(0.5, f64::INFINITY).validate().is_err());
        assert!(LensConfig::new(0.75, 1.2).validate().is_ok());
    }

    #[test]
    fn test_default_run_is_reference() {
        let cfg = RunConfig::default();
        assert_eq!(cfg.lens_systems.len(), 4);
        assert_eq!(cfg.lens_systems[0], LensConfig::new(0.5, 2.0));
        assert_eq!(cfg.lens_systems[3], LensConfig::new(0.75, 1.2));
        assert_eq!(cfg.sweep.n_samples, 5000);
        assert!((cfg.sweep.phi_max - 4.0 * std::f64::consts::PI).abs() < 1e-15);
        assert_eq!(cfg.sweep.on_root_failure, RootFailurePolicy::Abort);
        assert_eq!(cfg.render.output_dir, "imgs");
        assert_eq!(cfg.render.formats, vec![OutputFormat::Svg]);
    }

    #[test]
    fn test_from_json_partial() {
        let json = r#"{
            "lens_systems": [{"mass_fraction_1": 0.8, "separation": 1.5}],
            "sweep": {"n_samples": 200, "on_root_failure": "skip"},
            "render": {"formats": ["svg", "png"], "write_points": true}
        }"#;
        let cfg = RunConfig::from_json(json).unwrap();
        assert_eq!(cfg.lens_systems, vec![LensConfig::new(0.8, 1.5)]);
        assert_eq!(cfg.sweep.n_samples, 200);
        assert_eq!(cfg.sweep.on_root_failure, RootFailurePolicy::Skip);
        assert!((cfg.sweep.phi_max - DEFAULT_PHI_MAX).abs() < 1e-15);
        assert_eq!(cfg.render.formats, vec![OutputFormat::Svg, OutputFormat::Png]);
        assert!(cfg.render.write_points);
        assert_eq!(cfg.render.width, 1800);
    }

    #[test]
    fn test_from_json_empty_object_uses_defaults() {
        let cfg = RunConfig::from_json("{}").unwrap();
        assert_eq!(cfg.lens_systems.len(), 4);
    }

    #[test]
    fn test_from_json_rejects_empty_list_and_zero_samples() {
        let err = RunConfig::from_json(r#"{"lens_systems": []}"#).unwrap_err();
        assert!(matches!(err, LensError::InvalidConfiguration(_)));
        let err = RunConfig::from_json(r#"{"sweep": {"n_samples": 0}}"#).unwrap_err();
        assert!(matches!(err, LensError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_from_json_malformed() {
        let err = RunConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, LensError::Json(_)));
    }
}
