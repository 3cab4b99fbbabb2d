//! Borehole-field configuration sizing.
//!
//! Finds the smallest borehole configuration of a chosen shape family that
//! keeps the simulated circulating-fluid temperatures within bounds, driving
//! an external thermal-response evaluation through the
//! [`FluidTemperatureOracle`] seam. The computational core is in the internal
//! [`core`] module; [`BorefieldSizing`] is the [`twine_core::Model`] adapter
//! over it.
//!
//! # Example
//!
//! ```
//! use std::convert::Infallible;
//!
//! use borefield_models::models::geothermal::borefield::{
//!     Borehole, FieldGeometry, FluidTemperatureOracle, GridBounds, RectangleField,
//!     SizingConfig, TemperatureProfile, size,
//! };
//! use uom::si::f64::{Length, ThermodynamicTemperature};
//! use uom::si::{length::meter, thermodynamic_temperature::degree_celsius};
//!
//! /// An evaluation whose extremes are already within bounds.
//! struct ConstantOracle;
//!
//! impl FluidTemperatureOracle for ConstantOracle {
//!     type Error = Infallible;
//!
//!     fn evaluate(
//!         &self,
//!         _field: &[Borehole],
//!         _depth: Length,
//!     ) -> Result<TemperatureProfile, Infallible> {
//!         let celsius = |v| ThermodynamicTemperature::new::<degree_celsius>(v);
//!         Ok(TemperatureProfile::new(vec![celsius(11.0)], vec![celsius(9.0)]))
//!     }
//!
//!     fn ground_temperature(&self) -> ThermodynamicTemperature {
//!         ThermodynamicTemperature::new::<degree_celsius>(10.0)
//!     }
//!
//!     fn max_fluid_temperature(&self) -> ThermodynamicTemperature {
//!         ThermodynamicTemperature::new::<degree_celsius>(16.0)
//!     }
//!
//!     fn min_fluid_temperature(&self) -> ThermodynamicTemperature {
//!         ThermodynamicTemperature::new::<degree_celsius>(0.0)
//!     }
//! }
//!
//! let mut field = RectangleField::new(GridBounds {
//!     max_length_x: Length::new::<meter>(20.0),
//!     max_length_y: Length::new::<meter>(20.0),
//!     depth_max: Length::new::<meter>(100.0),
//!     buried_depth: Length::new::<meter>(4.0),
//!     borehole_radius: Length::new::<meter>(0.075),
//!     min_distance: Length::new::<meter>(1.0),
//! })?;
//! let configs = size(&mut field, &ConstantOracle, false, &SizingConfig::default())?;
//!
//! // The minimal two-by-two field already satisfies this load.
//! assert_eq!((configs[0].count_x, configs[0].count_y), (2, 2));
//! assert_eq!(field.borehole_count(), 4);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub(crate) mod core;

pub use self::core::{
    Borehole, BoxField, BoxShaped, CircleBounds, CircleField, DAMPING_FACTOR, FieldError,
    FieldGeometry, FluidTemperatureOracle, GridBounds, GridConfiguration, GridField, GridKind,
    LShaped, LShapedField, NEAR_MISS_BAND, Rectangle, RectangleField, RingConfiguration,
    SizingConfig, SizingError, TemperatureProfile, UShaped, UShapedField, box_field,
    check_configuration, circle_field, l_shaped_field, rectangle_field, size, u_shaped_field,
};

use twine_core::Model;

/// Shape family to search, with its bounding constraints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeBounds {
    /// Full grid.
    Rectangle(GridBounds),
    /// Grid perimeter.
    BoxShaped(GridBounds),
    /// Row plus column.
    LShaped(GridBounds),
    /// Bottom row plus two side columns.
    UShaped(GridBounds),
    /// Boreholes on a circle.
    Circle(CircleBounds),
}

/// Input to [`BorefieldSizing`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizingRequest {
    /// Shape family and bounds for this run.
    pub shape: ShapeBounds,
    /// Re-check tied alternatives near the feasibility boundary and filter
    /// the final candidate list through the checker.
    pub check_configs: bool,
}

/// Best tied candidates found by a sizing run, preferred candidate first.
#[derive(Debug, Clone, PartialEq)]
pub enum SizingOutcome {
    /// Result for the grid-configured families.
    Grid(Vec<GridConfiguration>),
    /// Result for the circle family.
    Ring(Vec<RingConfiguration>),
}

impl SizingOutcome {
    /// Number of tied candidate configurations.
    pub fn candidates(&self) -> usize {
        match self {
            SizingOutcome::Grid(configs) => configs.len(),
            SizingOutcome::Ring(configs) => configs.len(),
        }
    }
}

/// [`Model`] adapter for borefield sizing.
///
/// Builds the per-run field object internally, so all mutable search state is
/// scoped to a single call; concurrent runs can share one adapter and oracle.
pub struct BorefieldSizing<'a, O> {
    oracle: &'a O,
    config: SizingConfig,
}

impl<'a, O> BorefieldSizing<'a, O> {
    /// Creates an adapter with the default [`SizingConfig`].
    pub fn new(oracle: &'a O) -> Self {
        Self {
            oracle,
            config: SizingConfig::default(),
        }
    }

    /// Creates an adapter with a custom [`SizingConfig`].
    pub fn with_config(oracle: &'a O, config: SizingConfig) -> Self {
        Self { oracle, config }
    }
}

impl<O> Model for BorefieldSizing<'_, O>
where
    O: FluidTemperatureOracle,
{
    type Input = SizingRequest;
    type Output = SizingOutcome;
    type Error = SizingError<O::Error>;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        match input.shape {
            ShapeBounds::Rectangle(bounds) => {
                let mut field = RectangleField::new(bounds).map_err(SizingError::Field)?;
                size(&mut field, self.oracle, input.check_configs, &self.config)
                    .map(SizingOutcome::Grid)
            }
            ShapeBounds::BoxShaped(bounds) => {
                let mut field = BoxField::new(bounds).map_err(SizingError::Field)?;
                size(&mut field, self.oracle, input.check_configs, &self.config)
                    .map(SizingOutcome::Grid)
            }
            ShapeBounds::LShaped(bounds) => {
                let mut field = LShapedField::new(bounds).map_err(SizingError::Field)?;
                size(&mut field, self.oracle, input.check_configs, &self.config)
                    .map(SizingOutcome::Grid)
            }
            ShapeBounds::UShaped(bounds) => {
                let mut field = UShapedField::new(bounds).map_err(SizingError::Field)?;
                size(&mut field, self.oracle, input.check_configs, &self.config)
                    .map(SizingOutcome::Grid)
            }
            ShapeBounds::Circle(bounds) => {
                let mut field = CircleField::new(bounds).map_err(SizingError::Field)?;
                size(&mut field, self.oracle, input.check_configs, &self.config)
                    .map(SizingOutcome::Ring)
            }
        }
    }
}
