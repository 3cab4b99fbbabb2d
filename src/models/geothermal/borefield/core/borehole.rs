//! Borehole records and whole-field layout builders.
//!
//! A borefield layout is always built as a complete collection. Shape types
//! replace their stored collection wholesale on every configuration change,
//! since spacing is derived geometrically from the borehole count.

use std::f64::consts::PI;

use uom::{ConstZero, si::f64::Length};

/// A single vertical borehole in a borefield.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Borehole {
    /// Position along the x axis.
    pub x: Length,
    /// Position along the y axis.
    pub y: Length,
    /// Active borehole length below the buried depth.
    pub depth: Length,
    /// Depth of the borehole head below the ground surface.
    pub buried_depth: Length,
    /// Borehole radius.
    pub radius: Length,
}

impl Borehole {
    /// Creates a borehole at the given position.
    pub fn new(x: Length, y: Length, depth: Length, buried_depth: Length, radius: Length) -> Self {
        Self {
            x,
            y,
            depth,
            buried_depth,
            radius,
        }
    }

    /// Returns the horizontal center-to-center distance to another borehole.
    pub fn distance_to(&self, other: &Borehole) -> Length {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Builds a full `count_x` × `count_y` grid of boreholes, row-major from the origin.
pub fn rectangle_field(
    count_x: usize,
    count_y: usize,
    spacing_x: Length,
    spacing_y: Length,
    depth: Length,
    buried_depth: Length,
    radius: Length,
) -> Vec<Borehole> {
    let mut field = Vec::with_capacity(count_x * count_y);
    for j in 0..count_y {
        for i in 0..count_x {
            field.push(Borehole::new(
                spacing_x * i as f64,
                spacing_y * j as f64,
                depth,
                buried_depth,
                radius,
            ));
        }
    }
    field
}

/// Builds the perimeter of a `count_x` × `count_y` grid.
///
/// Holds `2·count_x + 2·count_y − 4` boreholes for `count_x, count_y ≥ 2`.
pub fn box_field(
    count_x: usize,
    count_y: usize,
    spacing_x: Length,
    spacing_y: Length,
    depth: Length,
    buried_depth: Length,
    radius: Length,
) -> Vec<Borehole> {
    let borehole = |x, y| Borehole::new(x, y, depth, buried_depth, radius);
    let far_x = spacing_x * (count_x - 1) as f64;
    let far_y = spacing_y * (count_y - 1) as f64;
    let mut field = Vec::with_capacity(2 * count_x + 2 * count_y.saturating_sub(2));
    for i in 0..count_x {
        field.push(borehole(spacing_x * i as f64, Length::ZERO));
    }
    for i in 0..count_x {
        field.push(borehole(spacing_x * i as f64, far_y));
    }
    for j in 1..count_y.saturating_sub(1) {
        field.push(borehole(Length::ZERO, spacing_y * j as f64));
        field.push(borehole(far_x, spacing_y * j as f64));
    }
    field
}

/// Builds an L-shaped field: a row of `count_x` boreholes along the x axis and
/// a column of `count_y` up the y axis, sharing the corner borehole.
///
/// Holds `count_x + count_y − 1` boreholes.
pub fn l_shaped_field(
    count_x: usize,
    count_y: usize,
    spacing_x: Length,
    spacing_y: Length,
    depth: Length,
    buried_depth: Length,
    radius: Length,
) -> Vec<Borehole> {
    let borehole = |x, y| Borehole::new(x, y, depth, buried_depth, radius);
    let mut field = Vec::with_capacity(count_x + count_y.saturating_sub(1));
    for i in 0..count_x {
        field.push(borehole(spacing_x * i as f64, Length::ZERO));
    }
    for j in 1..count_y {
        field.push(borehole(Length::ZERO, spacing_y * j as f64));
    }
    field
}

/// Builds a U-shaped field: a bottom row of `count_x` boreholes plus two side
/// columns of `count_y`, sharing the bottom corners.
///
/// Holds `count_x + 2·count_y − 2` boreholes.
///
/// ```text
/// x->  y^
/// o    o
/// o    o
/// o    o
/// oooooo
/// ```
pub fn u_shaped_field(
    count_x: usize,
    count_y: usize,
    spacing_x: Length,
    spacing_y: Length,
    depth: Length,
    buried_depth: Length,
    radius: Length,
) -> Vec<Borehole> {
    let borehole = |x, y| Borehole::new(x, y, depth, buried_depth, radius);
    let far_x = spacing_x * (count_x - 1) as f64;
    let mut field = Vec::with_capacity(count_x + 2 * count_y.saturating_sub(1));
    for i in 0..count_x {
        field.push(borehole(spacing_x * i as f64, Length::ZERO));
    }
    for j in 1..count_y {
        field.push(borehole(Length::ZERO, spacing_y * j as f64));
        field.push(borehole(far_x, spacing_y * j as f64));
    }
    field
}

/// Builds `count` boreholes equally spaced on a circle of the given radius,
/// starting at angle zero.
pub fn circle_field(
    count: usize,
    circle_radius: Length,
    depth: Length,
    buried_depth: Length,
    radius: Length,
) -> Vec<Borehole> {
    let mut field = Vec::with_capacity(count);
    for k in 0..count {
        let angle = 2.0 * PI * k as f64 / count as f64;
        field.push(Borehole::new(
            circle_radius * angle.cos(),
            circle_radius * angle.sin(),
            depth,
            buried_depth,
            radius,
        ));
    }
    field
}
