//! Sequential processing of a configuration list.
//!
//! Each configuration is swept, then handed to a consumer before the next
//! one starts. A failure stays with its own configuration.

use crate::sweep::generate_curves;
use lens_types::config::{LensConfig, SweepConfig};
use lens_types::error::LensResult;
use lens_types::state::CurveSet;

/// Result for one configuration of a batch.
#[derive(Debug)]
pub struct BatchOutcome<T> {
    pub lens: LensConfig,
    pub result: LensResult<T>,
}

impl<T> BatchOutcome<T> {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Sweep every configuration in order and pass its curves to `handoff`.
pub fn run_batch_with<T, F>(
    lenses: &[LensConfig],
    sweep: &SweepConfig,
    mut handoff: F,
) -> Vec<BatchOutcome<T>>
where
    F: FnMut(CurveSet) -> LensResult<T>,
{
    let mut outcomes = Vec::with_capacity(lenses.len());
    for lens in lenses {
        let result = generate_curves(lens, sweep).and_then(&mut handoff);
        if let Err(err) = &result {
            log::warn!(
                "configuration m1={} d={} failed: {err}",
                lens.mass_fraction_1,
                lens.separation
            );
        }
        outcomes.push(BatchOutcome {
            lens: *lens,
            result,
        });
    }
    outcomes
}

/// Sweep every configuration in order, keeping the curves.
pub fn run_batch(lenses: &[LensConfig], sweep: &SweepConfig) -> Vec<BatchOutcome<CurveSet>> {
    run_batch_with(lenses, sweep, Ok)
}
