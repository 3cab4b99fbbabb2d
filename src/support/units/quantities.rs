use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, P1, P3, Z0},
};

/// Thermal resistance per unit of borehole length, K·m/W in SI.
///
/// The customary unit for borehole thermal resistance in ground heat
/// exchanger design (often written K/(W/m)).
pub type LinearThermalResistance = Quantity<ISQ<N1, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Area-specific thermal resistance, K·m²/W in SI.
pub type ThermalInsulance = Quantity<ISQ<Z0, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Reciprocal length, 1/m in SI.
pub type ReciprocalLength = Quantity<ISQ<N1, Z0, Z0, Z0, Z0, Z0, Z0>, SI<f64>, f64>;
