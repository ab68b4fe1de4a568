//! # Trapezoidal-Load Beam Calculation
//!
//! Analyzes the 10 m clamped-roller beam under the symmetric trapezoidal
//! load and packages everything a consumer needs: the deflection extremum,
//! the span/360 serviceability check, and chart-ready diagrams.
//!
//! ## Assumptions
//!
//! - Clamped at x=0, roller support at x=10 (fixed geometry)
//! - Load profile is the fixed trapezoid: ramp to x=2, plateau, ramp from x=8
//! - Linear elastic, prismatic member, small deflections
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use beam_core::calculations::beam::{calculate, BeamInput};
//!
//! let input = BeamInput {
//!     w0_kn_per_m: 20.0,
//!     ei_kn_m2: 5000.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//!
//! println!("Max deflection: {:.2} mm", result.max_deflection_mm);
//! println!("At position: {:.2} m", result.max_deflection_position_m);
//! println!("Serviceability pass: {}", result.passes());
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::sampling::{
    find_max_deflection, generate_beam_data, DEFAULT_CHART_POINTS,
};
use crate::errors::{BeamError, BeamResult};
use crate::serviceability::{check_deflection_limit, DeflectionCheck};
use crate::units::{KnM2, KnPerM, Meters};

/// Default load intensity parameter (kN/m)
pub const DEFAULT_W0_KN_PER_M: f64 = 20.0;

/// Default flexural rigidity (kN·m²)
pub const DEFAULT_EI_KN_M2: f64 = 5000.0;

/// Input parameters for the beam analysis.
///
/// The span and load shape are fixed; only the load intensity and the
/// flexural rigidity vary.
///
/// ## JSON Example
///
/// ```json
/// {
///   "w0_kn_per_m": 20.0,
///   "ei_kn_m2": 5000.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamInput {
    /// Load intensity parameter w0 (kN/m); the plateau carries 3·w0.
    /// Typical range 1 to 100.
    pub w0_kn_per_m: f64,

    /// Flexural rigidity EI (kN·m²). Typical range 100 to 10000.
    pub ei_kn_m2: f64,
}

impl Default for BeamInput {
    fn default() -> Self {
        BeamInput {
            w0_kn_per_m: DEFAULT_W0_KN_PER_M,
            ei_kn_m2: DEFAULT_EI_KN_M2,
        }
    }
}

impl BeamInput {
    /// Validate input parameters.
    pub fn validate(&self) -> BeamResult<()> {
        if !self.w0_kn_per_m.is_finite() {
            return Err(BeamError::invalid_input(
                "w0_kn_per_m",
                self.w0_kn_per_m.to_string(),
                "Load intensity must be finite",
            ));
        }
        if self.w0_kn_per_m < 0.0 {
            return Err(BeamError::invalid_input(
                "w0_kn_per_m",
                self.w0_kn_per_m.to_string(),
                "Load intensity cannot be negative",
            ));
        }
        if !self.ei_kn_m2.is_finite() {
            return Err(BeamError::invalid_input(
                "ei_kn_m2",
                self.ei_kn_m2.to_string(),
                "Flexural rigidity must be finite",
            ));
        }
        if self.ei_kn_m2 <= 0.0 {
            return Err(BeamError::invalid_input(
                "ei_kn_m2",
                self.ei_kn_m2.to_string(),
                "Flexural rigidity must be positive",
            ));
        }
        Ok(())
    }

    /// Load intensity as a typed quantity
    pub fn w0(&self) -> KnPerM {
        KnPerM(self.w0_kn_per_m)
    }

    /// Flexural rigidity as a typed quantity
    pub fn rigidity(&self) -> KnM2 {
        KnM2(self.ei_kn_m2)
    }
}

/// Results from the beam analysis.
///
/// ## JSON Example
///
/// ```json
/// {
///   "w0_kn_per_m": 20.0,
///   "ei_kn_m2": 5000.0,
///   "max_deflection_m": 0.6164,
///   "max_deflection_mm": 616.42,
///   "max_deflection_position_m": 5.75,
///   "serviceability": {
///     "actual_mm": 616.42,
///     "allowable_mm": 27.78,
///     "limit_denominator": 360.0,
///     "unity": 22.19
///   },
///   "load_diagram": [[0.0, 0.0], [0.1, 3.0]],
///   "deflection_diagram_mm": [[0.0, 0.0], [0.1, 1.73]]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeflectionResult {
    // === Echoed Inputs ===
    /// Load intensity parameter used (kN/m)
    pub w0_kn_per_m: f64,

    /// Flexural rigidity used (kN·m²)
    pub ei_kn_m2: f64,

    // === Extremum ===
    /// Signed deflection with the largest magnitude (m)
    pub max_deflection_m: f64,

    /// Maximum deflection in millimeters (reporting scale)
    pub max_deflection_mm: f64,

    /// Position of the maximum deflection (m from the clamped end)
    pub max_deflection_position_m: f64,

    // === Serviceability ===
    /// Span/360 deflection check
    pub serviceability: DeflectionCheck,

    // === Diagrams (for plotting) ===
    /// Sampled load intensity along the beam: (x in m, q in kN/m)
    pub load_diagram: Vec<(f64, f64)>,

    /// Sampled deflection along the beam: (x in m, y in mm)
    pub deflection_diagram_mm: Vec<(f64, f64)>,
}

impl DeflectionResult {
    /// Check if the serviceability limit is met
    pub fn passes(&self) -> bool {
        self.serviceability.passes()
    }
}

/// Run the full beam analysis.
///
/// This is a pure function suitable for LLM invocation.
///
/// # Arguments
///
/// * `input` - Load intensity and flexural rigidity
///
/// # Returns
///
/// * `Ok(DeflectionResult)` - Extremum, serviceability check, and diagrams
/// * `Err(BeamError)` - Structured error if inputs are invalid
///
/// # Example
///
/// ```rust
/// use beam_core::calculations::beam::{calculate, BeamInput};
///
/// let result = calculate(&BeamInput::default()).expect("Calculation should succeed");
/// assert!((result.max_deflection_position_m - 5.75).abs() < 1e-9);
/// ```
pub fn calculate(input: &BeamInput) -> BeamResult<DeflectionResult> {
    // Validate inputs
    input.validate()?;

    let w0 = input.w0_kn_per_m;
    let ei = input.ei_kn_m2;

    // Chart samples at 101 stations, extremum on the finer 201-point grid
    let samples = generate_beam_data(w0, ei, DEFAULT_CHART_POINTS)?;
    let extremum = find_max_deflection(w0, ei)?;

    if !extremum.max_deflection_m.is_finite() {
        return Err(BeamError::calculation_failed(
            "deflection",
            "Result is not finite - inputs out of range",
        ));
    }

    // Serviceability works on the absolute deflection at reporting scale
    let serviceability = check_deflection_limit(Meters(extremum.max_deflection_m.abs()));

    let load_diagram = samples
        .iter()
        .map(|s| (s.x_m, s.load_kn_per_m))
        .collect();
    let deflection_diagram_mm = samples
        .iter()
        .map(|s| (s.x_m, s.deflection_m * 1000.0))
        .collect();

    Ok(DeflectionResult {
        w0_kn_per_m: w0,
        ei_kn_m2: ei,
        max_deflection_m: extremum.max_deflection_m,
        max_deflection_mm: extremum.max_deflection_m * 1000.0,
        max_deflection_position_m: extremum.position_m,
        serviceability,
        load_diagram,
        deflection_diagram_mm,
    })
}
