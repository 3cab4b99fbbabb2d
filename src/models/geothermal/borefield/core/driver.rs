//! The sizing driver: a damped fixed-point search over borehole counts.
//!
//! Starting from the degenerate two-per-axis field, the driver estimates the
//! total borehole length the load requires, converts it into a target count,
//! regenerates the layout for that count, and re-evaluates — blending each
//! new target with the previous one so the iteration settles instead of
//! oscillating. A repeated target is the designed stopping condition, not a
//! failure: the damped sequence has reached its fixed point.

use uom::si::{f64::Length, ratio::ratio};

use crate::support::units::TemperatureDifference;

use super::{
    config::SizingConfig,
    error::SizingError,
    feasibility::check_configuration,
    field::FieldGeometry,
    oracle::{FluidTemperatureOracle, TemperatureProfile},
};

/// Sizes a borefield to the minimal borehole count whose simulated fluid
/// temperature extremes stay within the oracle's bounds.
///
/// Returns every configuration tied at the best count, preferred candidate
/// first, and leaves the field's live collection set to the preferred one.
/// With `check_configs`, tied alternatives are re-checked individually near
/// the feasibility boundary and the final candidate list is filtered down to
/// configurations the checker independently accepts.
///
/// Exceeding the shape's extents is not an error: the geometry clamps to its
/// maximum-extent configuration and the search continues with it.
///
/// # Errors
///
/// - [`SizingError::NoConfigurationFound`] if no feasible configuration
///   smaller than the degenerate start state exists.
/// - [`SizingError::EmptyTemperatureProfile`] if the oracle returns an empty
///   series.
/// - [`SizingError::Oracle`] if an evaluation fails; oracle failures are
///   fatal for the run.
pub fn size<F, O>(
    field: &mut F,
    oracle: &O,
    check_configs: bool,
    config: &SizingConfig,
) -> Result<Vec<F::Config>, SizingError<O::Error>>
where
    F: FieldGeometry,
    O: FluidTemperatureOracle,
{
    let depth_max = field.depth_max();
    let damping = config.damping.into_inner();
    let band = config.near_miss_band.into_inner();

    let start = field.start_configuration();
    let mut best: (Vec<F::Config>, usize) = (vec![start], usize::MAX);

    let profile = oracle.evaluate(field.boreholes(), depth_max)?;
    let mut required = required_lengths(&profile, oracle, depth_max, field.borehole_count())?;
    if required.worst() <= depth_max {
        // Even the minimal field is oversized for this load.
        return Ok(best.0);
    }

    let mut n = round2((required.worst() / depth_max).get::<ratio>());
    let mut configs = field.configurations_for_count(n.ceil() as usize);
    let profile = oracle.evaluate(field.boreholes(), depth_max)?;
    let mut count = field.borehole_count();
    required = required_lengths(&profile, oracle, depth_max, count)?;
    if required.worst() <= depth_max * count as f64 {
        best = (configs.clone(), count);
    }

    let mut visited: Vec<i64> = Vec::new();
    loop {
        let key = quantize(n);
        if visited.contains(&key) {
            break; // repeated target: the damped iteration reached its fixed point
        }
        if visited.len() >= config.max_iterations {
            break; // budget exhausted; keep the best found so far
        }
        visited.push(key);

        n = round2(
            (required.worst() / depth_max).get::<ratio>() * damping + n * (1.0 - damping),
        );
        configs = field.configurations_for_count(n.ceil() as usize);
        let profile = oracle.evaluate(field.boreholes(), depth_max)?;
        count = field.borehole_count();
        required = required_lengths(&profile, oracle, depth_max, count)?;

        let feasible = required.worst() <= depth_max * count as f64;
        if feasible && count < best.1 {
            best = (configs.clone(), count);
            continue;
        }
        if !check_configs {
            continue;
        }
        let per_borehole = required.worst() / count as f64;
        if per_borehole < depth_max * (1.0 - band) || per_borehole > depth_max * (1.0 + band) {
            continue;
        }
        // Near miss: a tied alternative may fit where the preferred
        // candidate does not. Equal-count substitutions bypass the
        // strictly-lower gate.
        let mut alternatives = Vec::new();
        for candidate in configs.iter().skip(1) {
            if check_configuration(field, oracle, candidate)? {
                alternatives.push(candidate.clone());
            }
        }
        if let Some(first) = alternatives.first() {
            field.apply_configuration(first);
            let profile = oracle.evaluate(field.boreholes(), depth_max)?;
            count = field.borehole_count();
            required = required_lengths(&profile, oracle, depth_max, count)?;
            best = (alternatives, count);
        }
    }

    if config.refine && best.1 != usize::MAX {
        refine_downward(field, oracle, &mut best)?;
    }

    if best.1 == usize::MAX {
        return Err(SizingError::NoConfigurationFound);
    }
    if check_configs {
        let mut kept = Vec::with_capacity(best.0.len());
        for candidate in &best.0 {
            if check_configuration(field, oracle, candidate)? {
                kept.push(candidate.clone());
            }
        }
        if kept.is_empty() {
            return Err(SizingError::NoConfigurationFound);
        }
        best.0 = kept;
    }
    if let Some(preferred) = best.0.first() {
        let preferred = preferred.clone();
        field.apply_configuration(&preferred);
    }
    Ok(best.0)
}

/// Sweeps target counts below the converged best, re-checking every tied
/// candidate, down to 90% of the best count or five fewer, whichever is
/// larger.
fn refine_downward<F, O>(
    field: &mut F,
    oracle: &O,
    best: &mut (Vec<F::Config>, usize),
) -> Result<(), SizingError<O::Error>>
where
    F: FieldGeometry,
    O: FluidTemperatureOracle,
{
    let anchor = best.1;
    let floor = (0.9 * anchor as f64).ceil() as usize;
    let floor = floor.max(anchor.saturating_sub(5));
    for target in (floor..anchor).rev() {
        let candidates = field.configurations_for_count(target);
        let count = field.borehole_count();
        if count >= best.1 {
            continue;
        }
        let mut feasible = Vec::new();
        for candidate in &candidates {
            if check_configuration(field, oracle, candidate)? {
                feasible.push(candidate.clone());
            }
        }
        if !feasible.is_empty() {
            *best = (feasible, count);
        }
    }
    Ok(())
}

/// Total borehole lengths required to bring each temperature extreme onto
/// its bound, scaled from the current field's length.
struct RequiredLength {
    cooling: Length,
    heating: Length,
}

impl RequiredLength {
    /// The more demanding of the two sides.
    fn worst(&self) -> Length {
        if self.cooling > self.heating {
            self.cooling
        } else {
            self.heating
        }
    }
}

fn required_lengths<O, E>(
    profile: &TemperatureProfile,
    oracle: &O,
    depth_max: Length,
    count: usize,
) -> Result<RequiredLength, SizingError<E>>
where
    O: FluidTemperatureOracle<Error = E>,
{
    let ground = oracle.ground_temperature();
    let peak_cooling = profile
        .max_peak_cooling()
        .ok_or(SizingError::EmptyTemperatureProfile)?;
    let peak_heating = profile
        .min_peak_heating()
        .ok_or(SizingError::EmptyTemperatureProfile)?;
    let cooling_ratio = peak_cooling.minus(ground) / oracle.max_fluid_temperature().minus(ground);
    let heating_ratio = peak_heating.minus(ground) / oracle.min_fluid_temperature().minus(ground);
    Ok(RequiredLength {
        cooling: cooling_ratio * depth_max * count as f64,
        heating: heating_ratio * depth_max * count as f64,
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn quantize(n: f64) -> i64 {
    (n * 100.0).round() as i64
}
