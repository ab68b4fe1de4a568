//! # beam_core - Beam Deflection Analysis Engine
//!
//! `beam_core` is the computational heart of Flexura, analyzing a 10 m
//! clamped-roller beam under a symmetric trapezoidal load with a clean,
//! LLM-friendly API. All inputs and outputs are JSON-serializable, making it
//! ideal for integration with AI assistants via MCP or similar protocols.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Well-Documented**: Every type and function has examples
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::calculations::beam::{calculate, BeamInput};
//!
//! let result = calculate(&BeamInput::default()).unwrap();
//! println!("Max deflection: {:.2} mm", result.max_deflection_mm);
//!
//! // Serialize to JSON for storage or transmission
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`equations`] - Closed-form load and deflection formulas plus metadata
//! - [`calculations`] - The validated calculation surface (inputs, results, sampling)
//! - [`serviceability`] - Span/360 deflection check
//! - [`geometry`] - Triangle-list mesh generation for 3D display
//! - [`interpret`] - LLM prompt building and response cleanup
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod geometry;
pub mod interpret;
pub mod serviceability;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, BeamInput, DeflectionResult};
pub use calculations::{find_max_deflection, generate_beam_data};
pub use equations::{deflection, load_intensity, unit_step};
pub use errors::{BeamError, BeamResult};
pub use serviceability::{check_deflection_limit, DeflectionCheck};
