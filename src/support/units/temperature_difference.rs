use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for computing temperature differences.
///
/// [`uom`] deliberately does not implement `Sub` between two
/// [`ThermodynamicTemperature`] values, since absolute temperatures are
/// affine quantities. This trait provides the missing subtraction, returning
/// a [`TemperatureInterval`].
///
/// For background see uom issues
/// [#380](https://github.com/iliekturtles/uom/issues/380) and
/// [#289](https://github.com/iliekturtles/uom/issues/289).
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}
