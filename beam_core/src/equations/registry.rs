//! # Equation Registry
//!
//! Central registry of the closed-form equations used in the beam analysis.
//! Each equation has metadata including references, display formulas, and
//! variable definitions.
//!
//! ## Architecture
//!
//! The registry provides:
//! - Type-safe equation identification via the `Equation` enum
//! - Display formulas in both LaTeX (for math renderers) and plain text
//! - Citations for audit trails
//!
//! ## Usage
//!
//! ```rust
//! use beam_core::equations::registry::Equation;
//!
//! let meta = Equation::LaplaceDeflection.metadata();
//! println!("Formula: {}", meta.formula_plain);
//! println!("Reference: {}", meta.reference.citation());
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Reference to a code, standard, or textbook.
///
/// All equations should cite their source for auditability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeReference {
    /// Structural Analysis by R.C. Hibbeler
    Hibbeler {
        edition: u8,
        chapter: u8,
    },
    /// International Building Code
    IBC {
        year: u16,
        table: &'static str,
    },
    /// Fundamental mechanics (no specific code reference needed)
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::Hibbeler { edition, chapter } => {
                format!("Hibbeler {}ed, Ch. {}", edition, chapter)
            }
            CodeReference::IBC { year, table } => {
                format!("IBC {} {}", year, table)
            }
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::Hibbeler { .. } => "Hibbeler",
            CodeReference::IBC { .. } => "IBC",
            CodeReference::Mechanics => "Mechanics",
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "y", "x", "w0")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "m", "kN/m", "kN·m²")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for an equation in the registry.
///
/// This struct contains everything needed to:
/// - Display the equation in a report or math renderer
/// - Document its source for audit purposes
/// - Explain its variables and assumptions
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name (e.g., "Trapezoidal Load Intensity")
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in LaTeX notation for math rendering
    pub formula_latex: &'static str,
    /// The formula in plain text (human-readable)
    pub formula_plain: &'static str,
    /// Code/standard reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All equations used in Flexura.
///
/// Each variant maps to a specific formula with full metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    /// q(x): linear ramp, plateau at 3·w0, mirror ramp
    TrapezoidalLoadIntensity,
    /// y(x): closed-form deflection via Laplace transform
    LaplaceDeflection,
    /// Serviceability limit: delta_max <= L/360
    DeflectionServiceabilityLimit,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::TrapezoidalLoadIntensity => EquationMetadata {
                name: "Trapezoidal Load Intensity",
                description: "Distributed load profile: linear ramp to x=2, plateau at 3·w0 to x=8, mirror ramp to x=10",
                formula_latex: r#"q(x) = \begin{cases} \frac{3}{2}w_0 x & 0 \le x < 2 \\ 3w_0 & 2 \le x < 8 \\ \frac{3}{2}w_0(10-x) & 8 \le x \le 10 \\ 0 & \text{otherwise} \end{cases}"#,
                formula_plain: "q(x) = (3/2)*w0*x for 0<=x<2, 3*w0 for 2<=x<8, (3/2)*w0*(10-x) for 8<=x<=10, 0 otherwise",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("q", "Load intensity", "kN/m"),
                    Variable::new("x", "Position along beam", "m"),
                    Variable::new("w0", "Load intensity parameter", "kN/m"),
                ],
                assumptions: vec![
                    "Load is perpendicular to beam axis",
                    "Profile is continuous across the hinge positions",
                ],
            },

            Equation::LaplaceDeflection => EquationMetadata {
                name: "Closed-Form Deflection",
                description: "Deflection at position x for the trapezoidal load, obtained by Laplace transform of the beam equation",
                formula_latex: r#"y(x) = \frac{3w_0}{2EI}\left[\frac{x^5}{120} - \frac{(x-2)^5}{120}u(x-2) - \frac{(x-8)^5}{120}u(x-8)\right] + \frac{w_0}{EI}\left[\frac{87}{5}x^2 - \frac{129}{50}x^3\right]"#,
                formula_plain: "y(x) = (3w0/2EI)*[x^5/120 - <x-2>^5/120 - <x-8>^5/120] + (w0/EI)*[(87/5)x^2 - (129/50)x^3]",
                reference: CodeReference::Hibbeler { edition: 10, chapter: 8 },
                variables: vec![
                    Variable::new("y", "Transverse deflection", "m"),
                    Variable::new("x", "Position along beam", "m"),
                    Variable::new("w0", "Load intensity parameter", "kN/m"),
                    Variable::new("EI", "Flexural rigidity", "kN·m²"),
                    Variable::new("u", "Unit step function, u(x-a) = 1 for x >= a", "-"),
                ],
                assumptions: vec![
                    "Clamped at x=0, roller at x=10",
                    "Linear elastic, prismatic member",
                    "Small deflection theory",
                ],
            },

            Equation::DeflectionServiceabilityLimit => EquationMetadata {
                name: "Deflection Serviceability Limit",
                description: "Maximum deflection compared against the span/360 serviceability limit",
                formula_latex: r#"\delta_{max} \le \frac{L}{360}"#,
                formula_plain: "delta_max <= L/360",
                reference: CodeReference::IBC { year: 2021, table: "Table 1604.3" },
                variables: vec![
                    Variable::new("delta_max", "Maximum absolute deflection", "mm"),
                    Variable::new("L", "Span length", "mm"),
                ],
                assumptions: vec![
                    "Limit for floor members under live load",
                ],
            },
        }
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::TrapezoidalLoadIntensity,
    Equation::LaplaceDeflection,
    Equation::DeflectionServiceabilityLimit,
];

// ============================================================================
// Tests
// ============================================================================
