//! Grid-configured shape families: rectangle, box, L and U.
//!
//! The four families share the same enumeration over integer per-axis counts
//! and differ only in their borehole-count formula and layout builder, so
//! each is a marker type implementing [`GridKind`] over a shared
//! [`GridField`].

use std::marker::PhantomData;

use uom::si::{f64::Length, length::meter, ratio::ratio};

use crate::support::constraint::{NonNegative, StrictlyPositive};

use super::FieldGeometry;
use crate::models::geothermal::borefield::core::{
    borehole::{Borehole, box_field, l_shaped_field, rectangle_field, u_shaped_field},
    configuration::GridConfiguration,
    error::FieldError,
};

/// Count formula and layout builder for one grid-configured shape family.
pub trait GridKind {
    /// Total boreholes for the given per-axis counts.
    fn borehole_count(count_x: usize, count_y: usize) -> usize;

    /// Builds the borehole collection for a configuration.
    fn layout(
        config: &GridConfiguration,
        buried_depth: Length,
        radius: Length,
    ) -> Vec<Borehole>;
}

/// Full `count_x` × `count_y` grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rectangle;

impl GridKind for Rectangle {
    fn borehole_count(count_x: usize, count_y: usize) -> usize {
        count_x * count_y
    }

    fn layout(
        config: &GridConfiguration,
        buried_depth: Length,
        radius: Length,
    ) -> Vec<Borehole> {
        rectangle_field(
            config.count_x,
            config.count_y,
            config.spacing_x,
            config.spacing_y,
            config.depth,
            buried_depth,
            radius,
        )
    }
}

/// Grid perimeter only.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxShaped;

impl GridKind for BoxShaped {
    fn borehole_count(count_x: usize, count_y: usize) -> usize {
        2 * count_x + 2 * count_y - 4
    }

    fn layout(
        config: &GridConfiguration,
        buried_depth: Length,
        radius: Length,
    ) -> Vec<Borehole> {
        box_field(
            config.count_x,
            config.count_y,
            config.spacing_x,
            config.spacing_y,
            config.depth,
            buried_depth,
            radius,
        )
    }
}

/// One row and one column sharing a corner.
#[derive(Debug, Clone, Copy, Default)]
pub struct LShaped;

impl GridKind for LShaped {
    fn borehole_count(count_x: usize, count_y: usize) -> usize {
        count_x + count_y - 1
    }

    fn layout(
        config: &GridConfiguration,
        buried_depth: Length,
        radius: Length,
    ) -> Vec<Borehole> {
        l_shaped_field(
            config.count_x,
            config.count_y,
            config.spacing_x,
            config.spacing_y,
            config.depth,
            buried_depth,
            radius,
        )
    }
}

/// Bottom row plus two side columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct UShaped;

impl GridKind for UShaped {
    fn borehole_count(count_x: usize, count_y: usize) -> usize {
        count_x + 2 * count_y - 2
    }

    fn layout(
        config: &GridConfiguration,
        buried_depth: Length,
        radius: Length,
    ) -> Vec<Borehole> {
        u_shaped_field(
            config.count_x,
            config.count_y,
            config.spacing_x,
            config.spacing_y,
            config.depth,
            buried_depth,
            radius,
        )
    }
}

/// Bounding constraints for a grid-configured borefield.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridBounds {
    /// Maximum field extent along the x axis.
    pub max_length_x: Length,
    /// Maximum field extent along the y axis.
    pub max_length_y: Length,
    /// Maximum borehole depth.
    pub depth_max: Length,
    /// Depth of the borehole heads below the surface.
    pub buried_depth: Length,
    /// Borehole radius.
    pub borehole_radius: Length,
    /// Minimum allowed center-to-center spacing.
    pub min_distance: Length,
}

/// A grid-configured borefield of one shape family.
///
/// Holds the bounding constraints and the live borehole collection; the
/// shape family is fixed by the `K` marker.
#[derive(Debug, Clone)]
pub struct GridField<K> {
    bounds: GridBounds,
    boreholes: Vec<Borehole>,
    _kind: PhantomData<K>,
}

/// Full-grid borefield.
pub type RectangleField = GridField<Rectangle>;
/// Perimeter-only borefield.
pub type BoxField = GridField<BoxShaped>;
/// L-shaped borefield.
pub type LShapedField = GridField<LShaped>;
/// U-shaped borefield.
pub type UShapedField = GridField<UShaped>;

impl<K: GridKind> GridField<K> {
    /// Creates a field from its bounding constraints, seeded with the start
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`FieldError`] if an extent, depth, radius or the minimum
    /// spacing is not strictly positive, the buried depth is negative, or the
    /// minimum spacing exceeds an extent.
    pub fn new(bounds: GridBounds) -> Result<Self, FieldError> {
        strictly_positive(bounds.max_length_x, "max_length_x")?;
        strictly_positive(bounds.max_length_y, "max_length_y")?;
        strictly_positive(bounds.depth_max, "depth_max")?;
        strictly_positive(bounds.borehole_radius, "borehole_radius")?;
        strictly_positive(bounds.min_distance, "min_distance")?;
        NonNegative::new(bounds.buried_depth)
            .map_err(|_| FieldError::NegativeBuriedDepth)?;
        if bounds.min_distance > bounds.max_length_x {
            return Err(FieldError::SpacingExceedsExtent {
                axis: "max_length_x",
            });
        }
        if bounds.min_distance > bounds.max_length_y {
            return Err(FieldError::SpacingExceedsExtent {
                axis: "max_length_y",
            });
        }
        let mut field = Self {
            bounds,
            boreholes: Vec::new(),
            _kind: PhantomData,
        };
        field.start_configuration();
        Ok(field)
    }

    /// The bounding constraints this field was created with.
    pub fn bounds(&self) -> &GridBounds {
        &self.bounds
    }

    /// Largest per-axis borehole counts that respect the minimum spacing.
    fn axis_maxima(&self) -> (usize, usize) {
        let per_axis = |extent: Length| {
            (extent / self.bounds.min_distance).get::<ratio>().floor() as usize + 1
        };
        (
            per_axis(self.bounds.max_length_x),
            per_axis(self.bounds.max_length_y),
        )
    }

    /// Configuration with the given per-axis counts, stretched to the extents.
    fn configuration(&self, count_x: usize, count_y: usize) -> GridConfiguration {
        GridConfiguration {
            depth: self.bounds.depth_max,
            count_x,
            count_y,
            spacing_x: self.bounds.max_length_x / (count_x - 1) as f64,
            spacing_y: self.bounds.max_length_y / (count_y - 1) as f64,
        }
    }
}

fn strictly_positive(value: Length, field: &'static str) -> Result<(), FieldError> {
    StrictlyPositive::new(value)
        .map(|_| ())
        .map_err(|_| FieldError::NonPositive { field })
}

impl<K: GridKind> FieldGeometry for GridField<K> {
    type Config = GridConfiguration;

    fn depth_max(&self) -> Length {
        self.bounds.depth_max
    }

    fn boreholes(&self) -> &[Borehole] {
        &self.boreholes
    }

    fn start_configuration(&mut self) -> GridConfiguration {
        let config = self.configuration(2, 2);
        self.apply_configuration(&config);
        config
    }

    fn configurations_for_count(&mut self, n_target: usize) -> Vec<GridConfiguration> {
        let (count_x_max, count_y_max) = self.axis_maxima();
        if n_target > K::borehole_count(count_x_max, count_y_max) {
            let ceiling = self.configuration(count_x_max, count_y_max);
            self.apply_configuration(&ceiling);
            return vec![ceiling];
        }

        let mut smallest = usize::MAX;
        let mut candidates: Vec<GridConfiguration> = Vec::new();
        for count_x in 2..=count_x_max {
            for count_y in 2..=count_y_max {
                let count = K::borehole_count(count_x, count_y);
                if count < n_target {
                    continue;
                }
                // Counts grow with count_y, so the first hit is the only
                // minimal candidate in this column.
                if count < smallest {
                    smallest = count;
                    candidates.clear();
                    candidates.push(self.configuration(count_x, count_y));
                } else if count == smallest {
                    candidates.push(self.configuration(count_x, count_y));
                }
                break;
            }
        }

        candidates.sort_by(|a, b| {
            a.spacing_asymmetry()
                .get::<meter>()
                .total_cmp(&b.spacing_asymmetry().get::<meter>())
        });
        if let Some(preferred) = candidates.first() {
            let preferred = *preferred;
            self.apply_configuration(&preferred);
        }
        candidates
    }

    fn apply_configuration(&mut self, config: &GridConfiguration) {
        self.boreholes = K::layout(config, self.bounds.buried_depth, self.bounds.borehole_radius);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::meter;

    fn m(value: f64) -> Length {
        Length::new::<meter>(value)
    }

    fn bounds(max_length_x: f64, max_length_y: f64, depth_max: f64) -> GridBounds {
        GridBounds {
            max_length_x: m(max_length_x),
            max_length_y: m(max_length_y),
            depth_max: m(depth_max),
            buried_depth: m(4.0),
            borehole_radius: m(0.075),
            min_distance: m(1.0),
        }
    }

    fn axis_counts(configs: &[GridConfiguration]) -> Vec<(usize, usize)> {
        configs.iter().map(|c| (c.count_x, c.count_y)).collect()
    }

    #[test]
    fn rejects_degenerate_bounds() {
        let mut zero_extent = bounds(10.0, 10.0, 100.0);
        zero_extent.max_length_y = m(0.0);
        assert_eq!(
            RectangleField::new(zero_extent).unwrap_err(),
            FieldError::NonPositive {
                field: "max_length_y"
            }
        );

        let mut negative_radius = bounds(10.0, 10.0, 100.0);
        negative_radius.borehole_radius = m(-0.075);
        assert!(RectangleField::new(negative_radius).is_err());

        let mut wide_spacing = bounds(10.0, 10.0, 100.0);
        wide_spacing.min_distance = m(12.0);
        assert_eq!(
            RectangleField::new(wide_spacing).unwrap_err(),
            FieldError::SpacingExceedsExtent {
                axis: "max_length_x"
            }
        );
    }

    #[test]
    fn start_configuration_stretches_to_extents() {
        let mut field = RectangleField::new(bounds(30.0, 20.0, 95.0)).unwrap();
        let config = field.start_configuration();
        assert_eq!((config.count_x, config.count_y), (2, 2));
        assert_relative_eq!(config.spacing_x.get::<meter>(), 30.0);
        assert_relative_eq!(config.spacing_y.get::<meter>(), 20.0);
        assert_eq!(field.borehole_count(), 4);
    }

    #[test]
    fn candidates_prefer_near_square_layouts() {
        let mut field = RectangleField::new(bounds(10.0, 10.0, 100.0)).unwrap();
        let configs = field.configurations_for_count(12);
        assert_eq!(axis_counts(&configs), vec![(3, 4), (4, 3), (2, 6), (6, 2)]);
        assert_eq!(field.borehole_count(), 12);
    }

    #[test]
    fn candidates_saturate_the_extents() {
        let mut field = RectangleField::new(bounds(10.0, 10.0, 100.0)).unwrap();
        for config in field.configurations_for_count(12) {
            assert_relative_eq!(
                (config.spacing_x * (config.count_x - 1) as f64).get::<meter>(),
                10.0
            );
            assert_relative_eq!(
                (config.spacing_y * (config.count_y - 1) as f64).get::<meter>(),
                10.0
            );
            assert!(config.spacing_x >= m(1.0));
            assert!(config.spacing_y >= m(1.0));
        }
    }

    #[test]
    fn unreachable_target_returns_the_maximum_grid() {
        let mut field = RectangleField::new(bounds(10.0, 10.0, 100.0)).unwrap();
        let configs = field.configurations_for_count(200);
        assert_eq!(axis_counts(&configs), vec![(11, 11)]);
        assert_relative_eq!(configs[0].spacing_x.get::<meter>(), 1.0);
        assert_eq!(field.borehole_count(), 121);
    }

    #[test]
    fn generated_count_is_minimal() {
        let mut field = RectangleField::new(bounds(10.0, 10.0, 100.0)).unwrap();
        for target in 4..=50 {
            let configs = field.configurations_for_count(target);
            let count = field.borehole_count();
            assert!(count >= target);
            // No smaller product >= target exists within the 11 x 11 bounds.
            let smaller_exists = (2..=11usize)
                .flat_map(|x| (2..=11usize).map(move |y| x * y))
                .any(|product| product >= target && product < count);
            assert!(!smaller_exists, "target {target} produced count {count}");
            assert!(!configs.is_empty());
        }
    }

    #[test]
    fn box_counts_follow_the_perimeter_formula() {
        let mut field = BoxField::new(bounds(50.0, 40.0, 95.0)).unwrap();
        let configs = field.configurations_for_count(88);
        assert_eq!(field.borehole_count(), 88);
        assert_eq!(configs.len(), 40);
        assert_eq!((configs[0].count_x, configs[0].count_y), (25, 21));
        for config in &configs {
            assert_eq!(2 * config.count_x + 2 * config.count_y - 4, 88);
        }
    }

    #[test]
    fn l_counts_follow_the_row_plus_column_formula() {
        let mut field = LShapedField::new(bounds(50.0, 60.0, 150.0)).unwrap();
        let configs = field.configurations_for_count(56);
        assert_eq!(field.borehole_count(), 56);
        assert_eq!(configs.len(), 50);
        assert_eq!((configs[0].count_x, configs[0].count_y), (26, 31));
        for config in &configs {
            assert_eq!(config.count_x + config.count_y - 1, 56);
        }
    }

    #[test]
    fn u_counts_follow_the_open_perimeter_formula() {
        let mut field = UShapedField::new(bounds(50.0, 60.0, 150.0)).unwrap();
        let configs = field.configurations_for_count(55);
        assert_eq!(field.borehole_count(), 55);
        assert_eq!(configs.len(), 25);
        assert_eq!((configs[0].count_x, configs[0].count_y), (17, 20));
        for config in &configs {
            assert_eq!(config.count_x + 2 * config.count_y - 2, 55);
        }
    }

    #[test]
    fn apply_configuration_is_idempotent() {
        let mut field = UShapedField::new(bounds(50.0, 60.0, 150.0)).unwrap();
        let configs = field.configurations_for_count(55);
        let alternative = configs[1];
        field.apply_configuration(&alternative);
        assert_eq!(
            field.borehole_count(),
            alternative.count_x + 2 * alternative.count_y - 2
        );
        field.apply_configuration(&alternative);
        assert_eq!(
            field.borehole_count(),
            alternative.count_x + 2 * alternative.count_y - 2
        );
    }
}
