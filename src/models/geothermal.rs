//! Geothermal system models.
//!
//! This module contains models for ground-source heat exchanger design,
//! including borehole-field configuration sizing.

pub mod borefield;
