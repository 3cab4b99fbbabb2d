//! Borefield shape families.
//!
//! Each shape family owns its bounding constraints and the live borehole
//! collection, and translates between a target borehole count and a concrete
//! discrete layout. The sizing driver only sees the [`FieldGeometry`]
//! capability set.

mod circle;
mod grid;

pub use circle::{CircleBounds, CircleField};
pub use grid::{
    BoxField, BoxShaped, GridBounds, GridField, GridKind, LShaped, LShapedField, Rectangle,
    RectangleField, UShaped, UShapedField,
};

use uom::si::f64::Length;

use super::borehole::Borehole;

/// Capability set of a borefield shape family.
///
/// Implementations own an ordered borehole collection that is regenerated,
/// never partially mutated, on every configuration change: spacing is derived
/// geometrically from the count, so no partial mutation is safe.
pub trait FieldGeometry {
    /// The configuration tuple for this shape family.
    type Config: Clone + PartialEq + std::fmt::Debug;

    /// Maximum allowed borehole depth.
    fn depth_max(&self) -> Length;

    /// The live borehole collection.
    fn boreholes(&self) -> &[Borehole];

    /// Number of boreholes in the live collection.
    fn borehole_count(&self) -> usize {
        self.boreholes().len()
    }

    /// Regenerates the smallest valid configuration, stretched to the full
    /// extents, and returns it.
    ///
    /// Seeds the search and doubles as the "no solution" sentinel.
    fn start_configuration(&mut self) -> Self::Config;

    /// Returns every configuration achieving the minimal borehole count that
    /// is at least `n_target` within the extents, preferred candidate first.
    ///
    /// Candidates are ordered by ascending spacing asymmetry, so near-square
    /// layouts are preferred; exact ties keep enumeration order. If
    /// `n_target` exceeds what the extents can hold at minimum spacing, the
    /// single maximum-extent configuration is returned as a best-effort
    /// ceiling; it may violate the temperature constraint.
    ///
    /// The live collection is regenerated to the preferred candidate.
    fn configurations_for_count(&mut self, n_target: usize) -> Vec<Self::Config>;

    /// Rebuilds the live collection for an already-known configuration.
    fn apply_configuration(&mut self, config: &Self::Config);
}
