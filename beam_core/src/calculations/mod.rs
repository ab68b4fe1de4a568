//! # Beam Calculations
//!
//! This module contains the validated calculation surface. It follows the
//! pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, BeamError>` - Pure calculation function
//!
//! ## LLM Integration
//!
//! All types are designed for LLM consumption:
//! - Comprehensive rustdoc with examples
//! - Clean JSON serialization
//! - Structured error responses
//!
//! ## Available Calculations
//!
//! - [`beam`] - Full analysis: extremum, serviceability, diagrams
//! - [`sampling`] - Raw curve sampling and extremum scans

pub mod beam;
pub mod sampling;

// Re-export commonly used types
pub use beam::{calculate, BeamInput, DeflectionResult, DEFAULT_EI_KN_M2, DEFAULT_W0_KN_PER_M};
pub use sampling::{
    extremum_of, find_max_deflection, generate_beam_data, BeamSample, DeflectionExtremum,
    DEFAULT_CHART_POINTS, EXTREMUM_SCAN_POINTS,
};
