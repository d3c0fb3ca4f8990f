//! Mathematical primitives for SCPN Lensing.

pub mod eigen;
pub mod poly;
pub mod roots;
