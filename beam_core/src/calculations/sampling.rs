//! Beam Response Sampling
//!
//! Samples the closed-form load and deflection curves at uniform positions
//! along the span, and locates the deflection extremum on a finer scan grid.
//!
//! ## Sampling Grid
//!
//! A request for `num_points` intervals produces `num_points + 1` samples at
//! x = (i / num_points) · 10 for i in 0..=num_points, so both supports are
//! always included. Charts use 100 intervals; the extremum scan uses 200 for
//! better position resolution.
//!
//! ## Example
//! ```rust
//! use beam_core::calculations::sampling::{find_max_deflection, generate_beam_data};
//!
//! let samples = generate_beam_data(20.0, 5000.0, 100).unwrap();
//! assert_eq!(samples.len(), 101);
//!
//! let extremum = find_max_deflection(20.0, 5000.0).unwrap();
//! println!(
//!     "Max deflection: {:.4} m at x = {:.2} m",
//!     extremum.max_deflection_m, extremum.position_m
//! );
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::beam::{deflection, load_intensity, SPAN_M};
use crate::errors::{BeamError, BeamResult};

/// Number of sampling intervals used for chart data (101 samples)
pub const DEFAULT_CHART_POINTS: usize = 100;

/// Number of sampling intervals used for the extremum scan (201 samples)
pub const EXTREMUM_SCAN_POINTS: usize = 200;

/// One sampled station along the beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamSample {
    /// Position along beam (m from the clamped end)
    pub x_m: f64,
    /// Load intensity at this position (kN/m)
    pub load_kn_per_m: f64,
    /// Deflection at this position (m)
    pub deflection_m: f64,
}

/// The deflection extremum found by a scan
///
/// `max_deflection_m` keeps the signed value whose magnitude was largest,
/// so callers can still tell which way the beam moved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeflectionExtremum {
    /// Signed deflection with the largest magnitude (m)
    pub max_deflection_m: f64,
    /// Position of that deflection (m from the clamped end)
    pub position_m: f64,
}

fn validate_parameters(w0: f64, ei: f64) -> BeamResult<()> {
    if !w0.is_finite() {
        return Err(BeamError::invalid_input(
            "w0_kn_per_m",
            w0.to_string(),
            "Load intensity must be finite",
        ));
    }
    if !ei.is_finite() {
        return Err(BeamError::invalid_input(
            "ei_kn_m2",
            ei.to_string(),
            "Flexural rigidity must be finite",
        ));
    }
    if ei <= 0.0 {
        return Err(BeamError::invalid_input(
            "ei_kn_m2",
            ei.to_string(),
            "Flexural rigidity must be positive",
        ));
    }
    Ok(())
}

/// Sample load and deflection at `num_points + 1` uniform positions.
///
/// # Arguments
///
/// * `w0` - Load intensity parameter (kN/m)
/// * `ei` - Flexural rigidity EI (kN·m²)
/// * `num_points` - Number of sampling intervals (must be at least 1)
///
/// # Returns
///
/// * `Ok(Vec<BeamSample>)` - Samples from x = 0 to x = 10 inclusive
/// * `Err(BeamError)` - If the rigidity is non-positive or the grid is empty
pub fn generate_beam_data(w0: f64, ei: f64, num_points: usize) -> BeamResult<Vec<BeamSample>> {
    validate_parameters(w0, ei)?;
    if num_points == 0 {
        return Err(BeamError::invalid_input(
            "num_points",
            "0",
            "At least one sampling interval is required",
        ));
    }

    let mut samples = Vec::with_capacity(num_points + 1);
    for i in 0..=num_points {
        let x = i as f64 / num_points as f64 * SPAN_M;
        samples.push(BeamSample {
            x_m: x,
            load_kn_per_m: load_intensity(x, w0),
            deflection_m: deflection(x, w0, ei),
        });
    }
    Ok(samples)
}

/// Find the sample with the largest absolute deflection.
///
/// The accumulator starts at (0 m, x = 0), the comparison is strict, and the
/// signed deflection is kept. Two consequences worth knowing:
///
/// - A zero-load beam (all deflections zero) reports 0 m at x = 0
/// - When two stations tie in magnitude, the first one scanned wins
pub fn extremum_of(samples: &[BeamSample]) -> DeflectionExtremum {
    let mut max_deflection = 0.0f64;
    let mut max_position = 0.0;

    for sample in samples {
        if sample.deflection_m.abs() > max_deflection.abs() {
            max_deflection = sample.deflection_m;
            max_position = sample.x_m;
        }
    }

    DeflectionExtremum {
        max_deflection_m: max_deflection,
        position_m: max_position,
    }
}

/// Scan the span for the maximum absolute deflection.
///
/// Uses a 201-point grid, twice the chart resolution, so the reported
/// position lands within 0.05 m of the true extremum.
///
/// # Example
///
/// ```rust
/// use beam_core::calculations::sampling::find_max_deflection;
///
/// let extremum = find_max_deflection(20.0, 5000.0).unwrap();
/// assert!((extremum.position_m - 5.75).abs() < 1e-12);
/// ```
pub fn find_max_deflection(w0: f64, ei: f64) -> BeamResult<DeflectionExtremum> {
    let samples = generate_beam_data(w0, ei, EXTREMUM_SCAN_POINTS)?;
    Ok(extremum_of(&samples))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        if b.abs() < 1e-10 {
            a.abs() < tol
        } else {
            ((a - b) / b).abs() < tol
        }
    }

    #[test]
    fn test_sample_count() {
        let samples = generate_beam_data(20.0, 5000.0, 100).unwrap();
        assert_eq!(samples.len(), 101);

        let samples = generate_beam_data(20.0, 5000.0, 200).unwrap();
        assert_eq!(samples.len(), 201);
    }

    #[test]
    fn test_sample_grid_uniform() {
        let samples = generate_beam_data(20.0, 5000.0, 100).unwrap();

        assert_eq!(samples[0].x_m, 0.0);
        assert_eq!(samples[100].x_m, 10.0);

        // Positions land on the ideal grid to within rounding
        for (i, sample) in samples.iter().enumerate() {
            let ideal = i as f64 * 0.1;
            assert!(
                (sample.x_m - ideal).abs() < EPSILON,
                "x[{}] = {} (expected {})",
                i,
                sample.x_m,
                ideal
            );
        }
    }

    #[test]
    fn test_samples_match_closed_form() {
        let samples = generate_beam_data(20.0, 5000.0, 100).unwrap();

        // Midspan sample: q(5) = 60 kN/m, y(5) = 0.5941 m
        let mid = &samples[50];
        assert!(approx_eq(mid.x_m, 5.0, EPSILON));
        assert!(approx_eq(mid.load_kn_per_m, 60.0, EPSILON));
        assert!(approx_eq(mid.deflection_m, 0.5941, EPSILON));
    }

    #[test]
    fn test_find_max_reference_case() {
        // w0 = 20 kN/m, EI = 5000 kN·m²
        let extremum = find_max_deflection(20.0, 5000.0).unwrap();
        assert!(
            approx_eq(extremum.max_deflection_m, 0.6164169531249997, EPSILON),
            "max = {}",
            extremum.max_deflection_m
        );
        assert!(
            (extremum.position_m - 5.75).abs() < EPSILON,
            "position = {}",
            extremum.position_m
        );
    }

    #[test]
    fn test_find_max_scan_finer_than_chart_grid() {
        // 5.75 m is not on the 101-point chart grid, so the scan must be
        // using the finer 201-point grid to land there
        let extremum = find_max_deflection(20.0, 5000.0).unwrap();
        let on_chart_grid = (extremum.position_m / 0.1).round() * 0.1;
        assert!((extremum.position_m - on_chart_grid).abs() > 1e-3);
    }

    #[test]
    fn test_find_max_zero_load() {
        // All deflections are zero, so the accumulator never advances
        let extremum = find_max_deflection(0.0, 5000.0).unwrap();
        assert_eq!(extremum.max_deflection_m, 0.0);
        assert_eq!(extremum.position_m, 0.0);
    }

    #[test]
    fn test_extremum_keeps_sign() {
        let samples = vec![
            BeamSample { x_m: 1.0, load_kn_per_m: 0.0, deflection_m: -0.7 },
            BeamSample { x_m: 2.0, load_kn_per_m: 0.0, deflection_m: 0.6 },
        ];
        let extremum = extremum_of(&samples);
        assert_eq!(extremum.max_deflection_m, -0.7);
        assert_eq!(extremum.position_m, 1.0);
    }

    #[test]
    fn test_extremum_tie_keeps_first() {
        let samples = vec![
            BeamSample { x_m: 1.0, load_kn_per_m: 0.0, deflection_m: 0.5 },
            BeamSample { x_m: 2.0, load_kn_per_m: 0.0, deflection_m: -0.5 },
            BeamSample { x_m: 3.0, load_kn_per_m: 0.0, deflection_m: 0.5 },
        ];
        let extremum = extremum_of(&samples);
        assert_eq!(extremum.max_deflection_m, 0.5);
        assert_eq!(extremum.position_m, 1.0);
    }

    #[test]
    fn test_repeated_scans_identical() {
        // Pure functions of the inputs: repeated calls agree bit for bit
        let first = find_max_deflection(20.0, 5000.0).unwrap();
        let second = find_max_deflection(20.0, 5000.0).unwrap();
        assert_eq!(first, second);

        let a = generate_beam_data(20.0, 5000.0, 100).unwrap();
        let b = generate_beam_data(20.0, 5000.0, 100).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_intervals_rejected() {
        let err = generate_beam_data(20.0, 5000.0, 0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_nonpositive_rigidity_rejected() {
        assert!(generate_beam_data(20.0, 0.0, 100).is_err());
        assert!(generate_beam_data(20.0, -5000.0, 100).is_err());
        assert!(find_max_deflection(20.0, 0.0).is_err());
    }

    #[test]
    fn test_nonfinite_inputs_rejected() {
        assert!(generate_beam_data(f64::NAN, 5000.0, 100).is_err());
        assert!(generate_beam_data(20.0, f64::INFINITY, 100).is_err());
    }

    #[test]
    fn test_sample_serialization() {
        let samples = generate_beam_data(20.0, 5000.0, 10).unwrap();
        let json = serde_json::to_string(&samples).unwrap();
        let roundtrip: Vec<BeamSample> = serde_json::from_str(&json).unwrap();
        assert_eq!(samples, roundtrip);

        // Long shortest-form decimals (y at x = 2 prints as
        // 0.19743999999999998) must parse back to the same bits
        assert_eq!(
            roundtrip[2].deflection_m.to_bits(),
            samples[2].deflection_m.to_bits()
        );
    }
}
