//! Search configuration for the sizing driver.

use crate::support::constraint::{Constrained, UnitIntervalOpen};

/// Blending weight applied to stabilize the fixed-point borehole-count
/// iteration.
///
/// Empirically tuned: undamped updates can oscillate between two counts that
/// look infeasible and feasible in alternation, while this weight settles the
/// iteration onto a stable point.
pub const DAMPING_FACTOR: f64 = 0.73214;

/// Half-width of the near-miss band around the feasibility boundary, as a
/// fraction of the maximum depth.
///
/// When the required length per borehole falls within this band of the
/// maximum depth, tied alternative configurations are worth re-checking
/// individually.
pub const NEAR_MISS_BAND: f64 = 0.10;

/// Tuning parameters for a sizing run.
#[derive(Debug, Clone, Copy)]
pub struct SizingConfig {
    /// Blending weight for the damped count update, in `(0, 1)`.
    pub damping: Constrained<f64, UnitIntervalOpen>,

    /// Half-width of the near-miss band, as a fraction of the maximum depth,
    /// in `(0, 1)`.
    pub near_miss_band: Constrained<f64, UnitIntervalOpen>,

    /// Iteration budget for the damped search.
    ///
    /// Exhausting the budget is normal termination, not an error: the search
    /// returns the best configuration found so far.
    pub max_iterations: usize,

    /// Whether to sweep borehole counts below the converged best afterwards,
    /// guarding against the damped iteration overshooting a slightly smaller
    /// feasible solution.
    pub refine: bool,
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self {
            damping: Constrained::new_unchecked(DAMPING_FACTOR),
            near_miss_band: Constrained::new_unchecked(NEAR_MISS_BAND),
            max_iterations: 50,
            refine: true,
        }
    }
}
