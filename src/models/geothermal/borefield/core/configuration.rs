//! Configuration tuples exchanged between geometry generation and the sizing
//! driver, and handed to the caller as the sizing result.

use uom::si::f64::Length;

/// A grid-family configuration (rectangle, box, L and U shapes).
///
/// Field order mirrors the tuple the driver reports: depth first, then the
/// per-axis counts, then the per-axis spacings. Counts are boreholes per
/// axis, not the total borehole count, which is shape-specific.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfiguration {
    /// Borehole depth for this configuration.
    pub depth: Length,
    /// Boreholes along the x axis.
    pub count_x: usize,
    /// Boreholes along the y axis.
    pub count_y: usize,
    /// Center-to-center spacing along the x axis.
    pub spacing_x: Length,
    /// Center-to-center spacing along the y axis.
    pub spacing_y: Length,
}

impl GridConfiguration {
    /// Absolute difference between the two directional spacings.
    ///
    /// Tied candidates are preferred in ascending order of this value, so
    /// near-square layouts come first.
    pub fn spacing_asymmetry(&self) -> Length {
        (self.spacing_x - self.spacing_y).abs()
    }
}

/// A circle-family configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingConfiguration {
    /// Borehole depth for this configuration.
    pub depth: Length,
    /// Total borehole count around the circle.
    pub count: usize,
    /// Radius from the field center to the boreholes.
    pub radius: Length,
}
