//! Common utilities for head-loss calculations.

use crate::error::{ComponentError, ComponentResult};
use sc_core::numeric::ensure_finite;

/// Lower bound applied to Reynolds numbers before a friction lookup.
pub const REYNOLDS_FLOOR: f64 = 1e-6;

/// Flow rate substituted for zero, negative or NaN inputs before evaluation.
///
/// Positive flow rates are never replaced, however small.
pub const FLOW_RATE_FLOOR: f64 = f64::MIN_POSITIVE;

/// Reynolds number below which flow is treated as laminar.
pub const LAMINAR_LIMIT: f64 = 2300.0;

/// Ensure a value is finite, returning ComponentError if not.
pub fn check_finite(value: f64, what: &'static str) -> ComponentResult<()> {
    ensure_finite(value, what).map_err(|_| ComponentError::NonPhysical { what })?;
    Ok(())
}

/// Circular flow area for a given inner diameter.
#[inline]
pub fn circle_area(diameter: f64) -> f64 {
    std::f64::consts::PI * diameter * diameter / 4.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_finite() {
        assert!(check_finite(1.0, "x").is_ok());
        assert_eq!(
            check_finite(f64::NAN, "x"),
            Err(ComponentError::NonPhysical { what: "x" })
        );
    }

    #[test]
    fn test_circle_area() {
        let area = circle_area(2.0);
        assert!((area - std::f64::consts::PI).abs() < 1e-12);
    }
}
