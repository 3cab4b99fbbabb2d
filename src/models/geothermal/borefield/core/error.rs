//! Error types for borefield construction and sizing.

use thiserror::Error;

/// Errors that can occur while sizing a borefield.
#[derive(Debug, Error)]
pub enum SizingError<E> {
    /// The search never found a feasible configuration smaller than the
    /// degenerate start state.
    ///
    /// This is a distinguished error rather than an empty result, so callers
    /// cannot mistake "infeasible" for "no boreholes needed".
    #[error("no borefield configuration found")]
    NoConfigurationFound,

    /// The thermal oracle returned an empty temperature series.
    ///
    /// An empty series violates the oracle contract; there is no extreme to
    /// compare against the fluid temperature bounds.
    #[error("thermal oracle returned an empty temperature profile")]
    EmptyTemperatureProfile,

    /// The field bounds were rejected at construction.
    ///
    /// Only returned by entry points that build the field themselves; the
    /// core search operates on an already-validated field.
    #[error("invalid field bounds")]
    Field(#[source] FieldError),

    /// Fluid temperature evaluation failed.
    ///
    /// Oracle failures are fatal for the run; no retry is attempted.
    #[error("fluid temperature evaluation failed")]
    Oracle(#[from] E),
}

/// Errors raised when field bounds cannot describe a valid borefield.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// An extent, depth, radius or spacing bound that must be strictly
    /// positive was zero, negative or NaN.
    #[error("{field} must be strictly positive")]
    NonPositive {
        /// Name of the offending bound.
        field: &'static str,
    },

    /// The buried depth was negative or NaN.
    #[error("buried depth must not be negative")]
    NegativeBuriedDepth,

    /// The minimum borehole spacing does not fit within an extent, so not
    /// even a two-borehole axis can be laid out.
    #[error("minimum spacing exceeds the {axis} extent")]
    SpacingExceedsExtent {
        /// Name of the offending axis bound.
        axis: &'static str,
    },
}
