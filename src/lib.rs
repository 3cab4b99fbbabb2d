//! # Borefield Models
//!
//! Configuration search and sizing models for borehole-field ground heat
//! exchangers: given a thermal-response evaluation and fluid temperature
//! bounds, find the smallest borehole layout of a chosen shape family
//! (rectangle, box, L, U, circle) that keeps the simulated fluid
//! temperatures within bounds.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! The thermal-response evaluation itself is not part of this crate: models
//! consume it through the
//! [`FluidTemperatureOracle`](models::geothermal::borefield::FluidTemperatureOracle)
//! trait, so any g-function or simulation backend can drive the search.

pub mod models;
pub mod support;
