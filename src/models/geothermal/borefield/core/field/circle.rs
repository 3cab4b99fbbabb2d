//! Circle-configured shape family.

use std::f64::consts::PI;

use uom::si::{f64::Length, ratio::ratio};

use crate::support::constraint::{NonNegative, StrictlyPositive};

use super::FieldGeometry;
use crate::models::geothermal::borefield::core::{
    borehole::{Borehole, circle_field},
    configuration::RingConfiguration,
    error::FieldError,
};

/// Bounding constraints for a circle-configured borefield.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleBounds {
    /// Maximum radius from the field center to the boreholes.
    pub max_radius: Length,
    /// Maximum borehole depth.
    pub depth_max: Length,
    /// Depth of the borehole heads below the surface.
    pub buried_depth: Length,
    /// Borehole radius.
    pub borehole_radius: Length,
    /// Minimum allowed center-to-center spacing.
    pub min_distance: Length,
}

/// A borefield with its boreholes arranged on a circle.
///
/// The free dimension is the borehole count alone; every configuration uses
/// the maximum radius.
#[derive(Debug, Clone)]
pub struct CircleField {
    bounds: CircleBounds,
    boreholes: Vec<Borehole>,
}

impl CircleField {
    /// Creates a field from its bounding constraints, seeded with the start
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`FieldError`] if the radius, depth or minimum spacing is
    /// not strictly positive, the buried depth is negative, or the minimum
    /// spacing exceeds the circle's capacity for even two boreholes.
    pub fn new(bounds: CircleBounds) -> Result<Self, FieldError> {
        strictly_positive(bounds.max_radius, "max_radius")?;
        strictly_positive(bounds.depth_max, "depth_max")?;
        strictly_positive(bounds.borehole_radius, "borehole_radius")?;
        strictly_positive(bounds.min_distance, "min_distance")?;
        NonNegative::new(bounds.buried_depth)
            .map_err(|_| FieldError::NegativeBuriedDepth)?;
        let mut field = Self {
            bounds,
            boreholes: Vec::new(),
        };
        if field.count_ceiling() < 2 {
            return Err(FieldError::SpacingExceedsExtent { axis: "max_radius" });
        }
        field.start_configuration();
        Ok(field)
    }

    /// The bounding constraints this field was created with.
    pub fn bounds(&self) -> &CircleBounds {
        &self.bounds
    }

    /// Largest borehole count that respects the minimum spacing around the
    /// circumference.
    fn count_ceiling(&self) -> usize {
        (self.bounds.max_radius * (4.0 * PI) / self.bounds.min_distance)
            .get::<ratio>()
            .floor() as usize
    }

    fn configuration(&self, count: usize) -> RingConfiguration {
        RingConfiguration {
            depth: self.bounds.depth_max,
            count,
            radius: self.bounds.max_radius,
        }
    }
}

fn strictly_positive(value: Length, field: &'static str) -> Result<(), FieldError> {
    StrictlyPositive::new(value)
        .map(|_| ())
        .map_err(|_| FieldError::NonPositive { field })
}

impl FieldGeometry for CircleField {
    type Config = RingConfiguration;

    fn depth_max(&self) -> Length {
        self.bounds.depth_max
    }

    fn boreholes(&self) -> &[Borehole] {
        &self.boreholes
    }

    fn start_configuration(&mut self) -> RingConfiguration {
        let config = self.configuration(2);
        self.apply_configuration(&config);
        config
    }

    fn configurations_for_count(&mut self, n_target: usize) -> Vec<RingConfiguration> {
        let config = self.configuration(n_target.min(self.count_ceiling()));
        self.apply_configuration(&config);
        vec![config]
    }

    fn apply_configuration(&mut self, config: &RingConfiguration) {
        self.boreholes = circle_field(
            config.count,
            config.radius,
            config.depth,
            self.bounds.buried_depth,
            self.bounds.borehole_radius,
        );
    }
}
