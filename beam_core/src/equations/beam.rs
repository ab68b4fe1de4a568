//! # Propped Cantilever Beam Formulas
//!
//! Fundamental equations for the analyzed beam: a 10 m span, clamped at the
//! left end (x=0) and resting on a roller at the right end (x=10), carrying a
//! symmetric trapezoidal distributed load.
//!
//! ## Notation
//!
//! - `x` = Position along beam from the clamped end (m)
//! - `w0` = Load intensity parameter (kN/m); the plateau carries 3·w0
//! - `EI` = Flexural rigidity (kN·m²)
//! - `q` = Distributed load intensity (kN/m)
//! - `y` = Transverse deflection (m)
//! - `u(x, a)` = Unit step at threshold a
//! - `⟨x−a⟩ⁿ` = Macaulay bracket: (x−a)ⁿ for x ≥ a, zero otherwise
//!
//! ## Sign Conventions
//!
//! - Loads: Positive downward
//! - Deflection: The closed form yields positive values between the supports
//!   for positive w0; extremum scans compare absolute values, so the reported
//!   maximum does not depend on the sign convention
//!
//! ## References
//!
//! - Structural Analysis by R.C. Hibbeler (singularity function method)
//! - Closed form obtained by Laplace transform of EI·y⁗ = q(x) with
//!   clamped-roller boundary conditions

// =============================================================================
// SPAN GEOMETRY
// The load profile is fixed: a linear ramp up to x=2, a plateau to x=8, and a
// mirror-image ramp down to x=10.
// =============================================================================

/// Total span length (m)
pub const SPAN_M: f64 = 10.0;

/// End of the rising ramp / start of the plateau (m)
pub const RAMP_END_M: f64 = 2.0;

/// End of the plateau / start of the falling ramp (m)
pub const PLATEAU_END_M: f64 = 8.0;

// =============================================================================
// LOAD PROFILE
// =============================================================================

/// Unit step function with a closed threshold
///
/// # Formula
/// - u(x, a) = 1   for x ≥ a
/// - u(x, a) = 0   for x < a
///
/// The comparison is closed: `unit_step(a, a) == 1.0`. The deflection
/// singularity terms rely on this so each Macaulay bracket activates exactly
/// at its hinge position.
#[inline]
pub fn unit_step(x: f64, a: f64) -> f64 {
    if x >= a {
        1.0
    } else {
        0.0
    }
}

/// Distributed load intensity q(x) for the trapezoidal profile
///
/// ```text
///          ↓↓↓↓↓↓↓↓↓↓↓↓↓  3w0
///        ↓↓             ↓↓
///      ↓↓                 ↓↓
///    ═══════════════════════
///    █                      △
///    0    2           8    10
/// ```
///
/// # Formulas
/// - q(x) = (3/2)·x·w0         for 0 ≤ x < 2
/// - q(x) = 3·w0               for 2 ≤ x < 8
/// - q(x) = (3/2)·(10−x)·w0    for 8 ≤ x ≤ 10
/// - q(x) = 0                  outside [0, 10]
///
/// The profile is continuous: both ramps meet the plateau at 3·w0, and the
/// intensity is zero at both supports.
///
/// # Arguments
/// * `x` - Position along beam (m)
/// * `w0` - Load intensity parameter (kN/m)
///
/// # Returns
/// Load intensity (kN/m, positive downward)
#[inline]
pub fn load_intensity(x: f64, w0: f64) -> f64 {
    if x < 0.0 || x > SPAN_M {
        0.0
    } else if x < RAMP_END_M {
        3.0 / 2.0 * x * w0
    } else if x < PLATEAU_END_M {
        3.0 * w0
    } else {
        3.0 / 2.0 * (SPAN_M - x) * w0
    }
}

// =============================================================================
// DEFLECTION
// =============================================================================

/// Quintic Macaulay bracket ⟨x−a⟩⁵, gated by the unit step
///
/// The difference is clamped before raising to the fifth power, so the term
/// is exactly zero ahead of the hinge and never contributes a sign flip from
/// an odd power of a negative number.
#[inline]
fn macaulay_quintic(x: f64, a: f64) -> f64 {
    (x - a).max(0.0).powi(5) * unit_step(x, a)
}

/// Calculate deflection y(x) for the trapezoidal load
///
/// # Formula (Laplace transform solution)
///
/// ```text
/// y(x) = (3w0/2EI)·[x⁵/120 − ⟨x−2⟩⁵/120 − ⟨x−8⟩⁵/120]
///      + (w0/EI)·[(87/5)x² − (129/50)x³]
/// ```
///
/// The singularity terms cancel the ramp loading beyond each hinge; the
/// polynomial tail carries the integration constants fixed by the boundary
/// conditions y(0) = 0, y′(0) = 0 (clamped) and y(10) = 0 (roller).
///
/// # Boundary Behavior
///
/// - y(0) is exactly zero (every term has an x factor)
/// - y(10) is zero in exact arithmetic; in f64 the cancellation leaves a
///   residue on the order of 1e-15
///
/// # Arguments
/// * `x` - Position along beam (m)
/// * `w0` - Load intensity parameter (kN/m)
/// * `ei` - Flexural rigidity EI (kN·m²)
///
/// # Returns
/// Deflection (m)
#[inline]
pub fn deflection(x: f64, w0: f64, ei: f64) -> f64 {
    let term1 = (3.0 * w0 / (2.0 * ei))
        * (x.powi(5) / 120.0
            - macaulay_quintic(x, RAMP_END_M) / 120.0
            - macaulay_quintic(x, PLATEAU_END_M) / 120.0);
    let term2 = (w0 / ei) * (87.0 / 5.0 * x.powi(2) - 129.0 / 50.0 * x.powi(3));
    term1 + term2
}

// =============================================================================
// UNIT TESTS
// =============================================================================
