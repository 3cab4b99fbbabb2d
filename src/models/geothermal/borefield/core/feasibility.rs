//! Feasibility check for a fully-specified configuration.

use super::{field::FieldGeometry, oracle::FluidTemperatureOracle};

/// Checks whether a configuration keeps the simulated fluid temperature
/// extremes within the oracle's bounds at the field's maximum depth.
///
/// Side effect: the field's live collection is left set to `config`, since
/// evaluation requires applying the layout. Callers that need the previous
/// layout must re-apply it themselves.
///
/// An empty temperature series never passes.
///
/// # Errors
///
/// Propagates the oracle's evaluation error.
pub fn check_configuration<F, O>(
    field: &mut F,
    oracle: &O,
    config: &F::Config,
) -> Result<bool, O::Error>
where
    F: FieldGeometry,
    O: FluidTemperatureOracle,
{
    field.apply_configuration(config);
    let profile = oracle.evaluate(field.boreholes(), field.depth_max())?;
    let (Some(peak_cooling), Some(peak_heating)) =
        (profile.max_peak_cooling(), profile.min_peak_heating())
    else {
        return Ok(false);
    };
    Ok(peak_cooling <= oracle.max_fluid_temperature()
        && peak_heating >= oracle.min_fluid_temperature())
}
