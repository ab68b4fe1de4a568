//! # Serviceability Check
//!
//! Compares the maximum absolute deflection against the span/360 limit
//! (IBC 2021 Table 1604.3, floor members under live load).
//!
//! For the fixed 10 m span the allowable deflection is 10000/360 ≈ 27.78 mm.
//! The check reports a unity ratio (actual / allowable); values at or below
//! 1.0 pass.

use serde::{Deserialize, Serialize};

use crate::equations::beam::SPAN_M;
use crate::units::{Meters, Millimeters};

/// Denominator of the deflection limit: allowable = span / 360
pub const DEFLECTION_LIMIT_DENOMINATOR: f64 = 360.0;

/// Result of the span/360 serviceability check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "actual_mm": 616.42,
///   "allowable_mm": 27.78,
///   "limit_denominator": 360.0,
///   "unity": 22.19
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeflectionCheck {
    /// Maximum absolute deflection (mm)
    pub actual_mm: f64,

    /// Allowable deflection span/360 (mm)
    pub allowable_mm: f64,

    /// Limit denominator used (360 for floor live load)
    pub limit_denominator: f64,

    /// Unity check: actual / allowable
    ///
    /// Must be ≤ 1.0 to pass.
    pub unity: f64,
}

impl DeflectionCheck {
    /// Check if the deflection is within the serviceability limit
    pub fn passes(&self) -> bool {
        self.unity <= 1.0
    }

    /// Actual deflection as a typed quantity
    pub fn actual(&self) -> Millimeters {
        Millimeters(self.actual_mm)
    }

    /// Allowable deflection as a typed quantity
    pub fn allowable(&self) -> Millimeters {
        Millimeters(self.allowable_mm)
    }
}

/// Run the span/360 check for a maximum deflection.
///
/// The sign of the deflection is ignored; sagging and hogging are both
/// checked against the magnitude.
///
/// # Example
///
/// ```rust
/// use beam_core::serviceability::check_deflection_limit;
/// use beam_core::units::Meters;
///
/// let check = check_deflection_limit(Meters(0.015));
/// assert!(check.passes());
/// ```
pub fn check_deflection_limit(max_deflection: Meters) -> DeflectionCheck {
    let span_mm: Millimeters = Meters(SPAN_M).into();
    let deflection_mm: Millimeters = max_deflection.into();
    let actual_mm = deflection_mm.value().abs();
    let allowable_mm = span_mm.value() / DEFLECTION_LIMIT_DENOMINATOR;
    let unity = actual_mm / allowable_mm;

    DeflectionCheck {
        actual_mm,
        allowable_mm,
        limit_denominator: DEFLECTION_LIMIT_DENOMINATOR,
        unity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_value() {
        let check = check_deflection_limit(Meters(0.0));
        // 10000 mm / 360 = 27.78 mm
        assert!((check.allowable_mm - 10000.0 / 360.0).abs() < 1e-12);
        assert_eq!(format!("{:.2}", check.allowable_mm), "27.78");
    }

    #[test]
    fn test_reference_beam_fails() {
        // w0 = 20, EI = 5000 gives 616 mm of deflection, far past the limit
        let check = check_deflection_limit(Meters(0.6164169531249997));
        assert!((check.actual_mm - 616.4169531249997).abs() < 1e-9);
        assert!(check.unity > 22.0);
        assert!(!check.passes());
    }

    #[test]
    fn test_small_deflection_passes() {
        let check = check_deflection_limit(Meters(0.015));
        assert!(check.unity < 1.0);
        assert!(check.passes());
    }

    #[test]
    fn test_negative_deflection_uses_magnitude() {
        let down = check_deflection_limit(Meters(-0.6164169531249997));
        let up = check_deflection_limit(Meters(0.6164169531249997));
        assert_eq!(down.actual_mm, up.actual_mm);
        assert_eq!(down.unity, up.unity);
        assert!(down.unity > 22.0);
        assert!(!down.passes());
    }

    #[test]
    fn test_unity_boundary_is_inclusive() {
        let at_limit = DeflectionCheck {
            actual_mm: 10000.0 / 360.0,
            allowable_mm: 10000.0 / 360.0,
            limit_denominator: 360.0,
            unity: 1.0,
        };
        assert!(at_limit.passes());

        let over_limit = DeflectionCheck { unity: 1.0000001, ..at_limit };
        assert!(!over_limit.passes());
    }

    #[test]
    fn test_typed_accessors() {
        let check = check_deflection_limit(Meters(0.02));
        assert_eq!(check.actual().value(), check.actual_mm);
        assert_eq!(check.allowable().value(), check.allowable_mm);
    }

    #[test]
    fn test_serialization() {
        let check = check_deflection_limit(Meters(0.03));
        let json = serde_json::to_string(&check).unwrap();
        assert!(json.contains("unity"));
        assert!(json.contains("allowable_mm"));

        let roundtrip: DeflectionCheck = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.limit_denominator, 360.0);
    }
}
