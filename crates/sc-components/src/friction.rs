//! Friction-factor strategies and the table that resolves them.
//!
//! A [`FrictionMethod`] names an algorithm; [`resolve`] maps it to a shared
//! stateless strategy. Recognized methods without an implementation fail
//! with [`ComponentError::UnsupportedMethod`] instead of falling back to
//! another correlation.

use core::fmt;
use core::str::FromStr;

use crate::error::{ComponentError, ComponentResult};
use crate::traits::FrictionFactor;
use sc_core::ScError;

/// Friction-factor method requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FrictionMethod {
    /// Serghide's closed-form approximation of Colebrook-White.
    #[default]
    Serghide,
    /// Iterative Colebrook-White root finding. Recognized, not implemented.
    #[cfg_attr(feature = "serde", serde(alias = "colebrook-white"))]
    Colebrook,
}

impl FrictionMethod {
    pub const ALL: [FrictionMethod; 2] = [FrictionMethod::Serghide, FrictionMethod::Colebrook];

    /// Whether [`resolve`] yields a strategy for this method.
    pub fn is_implemented(self) -> bool {
        matches!(lookup(self), Some(Some(_)))
    }
}

impl fmt::Display for FrictionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrictionMethod::Serghide => write!(f, "serghide"),
            FrictionMethod::Colebrook => write!(f, "colebrook"),
        }
    }
}

impl FromStr for FrictionMethod {
    type Err = ScError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "serghide" => Ok(FrictionMethod::Serghide),
            "colebrook" | "colebrook-white" => Ok(FrictionMethod::Colebrook),
            _ => Err(ScError::Unknown {
                what: "friction method",
                input: s.to_string(),
            }),
        }
    }
}

/// Serghide's approximation of the Colebrook-White equation.
///
/// Three fixed-point iterates of Colebrook-White in `x = 1/sqrt(f)` are
/// combined with Steffensen acceleration, which reproduces the implicit root
/// to engineering accuracy without iterating.
#[derive(Debug, Clone, Copy, Default)]
pub struct Serghide;

impl FrictionFactor for Serghide {
    fn name(&self) -> &str {
        "serghide"
    }

    fn turbulent(&self, relative_roughness: f64, reynolds: f64) -> f64 {
        let roughness_term = relative_roughness / 3.7;
        let a = -2.0 * (roughness_term + 12.0 / reynolds).log10();
        let b = -2.0 * (roughness_term + 2.51 * a / reynolds).log10();
        let c = -2.0 * (roughness_term + 2.51 * b / reynolds).log10();

        let curvature = c - 2.0 * b + a;
        // Zero second difference: the iterates have already converged.
        let x = if curvature == 0.0 {
            c
        } else {
            a - (b - a).powi(2) / curvature
        };
        x.powi(-2)
    }
}

static SERGHIDE: Serghide = Serghide;

/// Strategy table. `None` marks a recognized method with no implementation.
static STRATEGIES: &[(FrictionMethod, Option<&'static dyn FrictionFactor>)] = &[
    (FrictionMethod::Serghide, Some(&SERGHIDE)),
    (FrictionMethod::Colebrook, None),
];

fn lookup(method: FrictionMethod) -> Option<Option<&'static dyn FrictionFactor>> {
    STRATEGIES
        .iter()
        .find(|(m, _)| *m == method)
        .map(|(_, strategy)| *strategy)
}

/// Resolve a method to its shared strategy.
///
/// # Errors
///
/// - [`ComponentError::UnsupportedMethod`] if the method is recognized but has
///   no implementation.
/// - [`ComponentError::NoMethod`] if the table has no entry for it.
pub fn resolve(method: FrictionMethod) -> ComponentResult<&'static dyn FrictionFactor> {
    match lookup(method) {
        Some(Some(strategy)) => Ok(strategy),
        Some(None) => Err(ComponentError::UnsupportedMethod { method }),
        None => Err(ComponentError::NoMethod { method }),
    }
}
