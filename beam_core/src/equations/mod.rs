//! # Beam Equations
//!
//! This module contains the closed-form equations used in the analysis.
//! Having equations in one place enables:
//! - Easy verification against references
//! - Documentation of assumptions and sign conventions
//! - Consistent implementation across calculation layers
//!
//! ## Modules
//!
//! - [`beam`] - Trapezoidal load profile and the Laplace-derived deflection
//! - [`registry`] - Equation metadata for display and audit trails
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive downward (gravity direction)
//! - **Deflection**: Sign follows the closed form; extremum scans use
//!   absolute values
//!
//! ## References
//!
//! - Structural Analysis by R.C. Hibbeler, 10th Edition
//! - IBC 2021 Table 1604.3 (deflection limits)

pub mod beam;
pub mod registry;

// Re-export commonly used items
pub use beam::{
    deflection,
    load_intensity,
    unit_step,
    PLATEAU_END_M,
    RAMP_END_M,
    SPAN_M,
};

pub use registry::{
    CodeReference,
    Equation,
    EquationMetadata,
    Variable,
    ALL_EQUATIONS,
};
