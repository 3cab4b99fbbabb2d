//! The thermal-response seam.
//!
//! Sizing never simulates borehole thermodynamics itself. It drives an
//! external evaluation — typically a g-function based simulation over the
//! design horizon — through the [`FluidTemperatureOracle`] trait and only
//! compares the resulting fluid temperature extremes against bounds.

use uom::si::f64::{Length, ThermodynamicTemperature};

use super::borehole::Borehole;

/// Peak fluid temperature series over the simulation horizon.
///
/// One entry per simulated period (e.g. per month of a multi-year horizon).
/// The sizing driver only consumes the extremes.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureProfile {
    /// Peak fluid temperature under the cooling load, per period.
    pub peak_cooling: Vec<ThermodynamicTemperature>,
    /// Peak fluid temperature under the heating load, per period.
    pub peak_heating: Vec<ThermodynamicTemperature>,
}

impl TemperatureProfile {
    /// Creates a profile from the two peak series.
    pub fn new(
        peak_cooling: Vec<ThermodynamicTemperature>,
        peak_heating: Vec<ThermodynamicTemperature>,
    ) -> Self {
        Self {
            peak_cooling,
            peak_heating,
        }
    }

    /// The highest peak-cooling fluid temperature, or `None` for an empty series.
    pub fn max_peak_cooling(&self) -> Option<ThermodynamicTemperature> {
        self.peak_cooling
            .iter()
            .copied()
            .reduce(|a, b| if b > a { b } else { a })
    }

    /// The lowest peak-heating fluid temperature, or `None` for an empty series.
    pub fn min_peak_heating(&self) -> Option<ThermodynamicTemperature> {
        self.peak_heating
            .iter()
            .copied()
            .reduce(|a, b| if b < a { b } else { a })
    }
}

/// External evaluation of a borefield's simulated fluid temperature extremes.
///
/// The borehole collection is an explicit parameter: the caller passes the
/// layout to evaluate rather than relying on previously shared mutable state.
/// Implementations that cache intermediate results (as g-function evaluators
/// commonly do) should use interior mutability.
pub trait FluidTemperatureOracle {
    /// Error raised when the evaluation fails (e.g. numerical non-convergence).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the peak fluid temperatures for the given layout at the
    /// given borehole depth.
    ///
    /// # Errors
    ///
    /// Returns the evaluation backend's error. Sizing treats oracle failures
    /// as fatal for the run.
    fn evaluate(
        &self,
        field: &[Borehole],
        depth: Length,
    ) -> Result<TemperatureProfile, Self::Error>;

    /// Undisturbed ground temperature.
    fn ground_temperature(&self) -> ThermodynamicTemperature;

    /// Upper bound on the circulating fluid temperature.
    fn max_fluid_temperature(&self) -> ThermodynamicTemperature;

    /// Lower bound on the circulating fluid temperature.
    fn min_fluid_temperature(&self) -> ThermodynamicTemperature;
}
