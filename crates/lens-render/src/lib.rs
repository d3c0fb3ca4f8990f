//! Rendering and export of computed curves: SVG and PNG scatter plots,
//! NPZ point dumps, configuration-derived file names.

pub mod export;
pub mod format;
pub mod plot;
pub mod png;
pub mod svg;
