//! Binary-lens critical curves and caustics.
//!
//! Polynomial construction, quartic solve, lens mapping, angle sweep,
//! per-configuration batch driver, curve diagnostics.

pub mod batch;
pub mod critical;
pub mod diagnostics;
pub mod mapping;
pub mod sweep;
