//! Borefield sizing core.
//!
//! Everything the search needs lives here: borehole layout builders, the
//! shape families with their configuration enumeration, the thermal-oracle
//! seam, the feasibility checker, and the damped fixed-point driver.

mod borehole;
mod config;
mod configuration;
mod driver;
mod error;
mod feasibility;
mod field;
mod oracle;

#[cfg(test)]
pub(crate) mod test_support;

pub use borehole::{
    Borehole, box_field, circle_field, l_shaped_field, rectangle_field, u_shaped_field,
};
pub use config::{DAMPING_FACTOR, NEAR_MISS_BAND, SizingConfig};
pub use configuration::{GridConfiguration, RingConfiguration};
pub use driver::size;
pub use error::{FieldError, SizingError};
pub use feasibility::check_configuration;
pub use field::{
    BoxField, BoxShaped, CircleBounds, CircleField, FieldGeometry, GridBounds, GridField,
    GridKind, LShaped, LShapedField, Rectangle, RectangleField, UShaped, UShapedField,
};
pub use oracle::{FluidTemperatureOracle, TemperatureProfile};
