use crate::ScError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, ScError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ScError::NonFinite { what, value: v })
    }
}

/// Finite and strictly greater than zero.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, ScError> {
    ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(ScError::NotPositive { what, value: v })
    }
}

/// Finite and greater than or equal to zero.
pub fn ensure_non_negative(v: Real, what: &'static str) -> Result<Real, ScError> {
    ensure_finite(v, what)?;
    if v >= 0.0 {
        Ok(v)
    } else {
        Err(ScError::Negative { what, value: v })
    }
}

/// Raise `v` to at least `floor`. NaN maps to `floor`.
#[inline]
pub fn floor_at(v: Real, floor: Real) -> Real {
    if v > floor { v } else { floor }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn floor_is_a_lower_bound(v in -1.0e6_f64..1.0e6, floor in 1e-9_f64..1.0) {
            let out = floor_at(v, floor);
            prop_assert!(out >= floor);
            if v > floor {
                prop_assert_eq!(out, v);
            }
        }
    }
}
