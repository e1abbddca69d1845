//! Error types for section and friction-strategy operations.

use crate::friction::FrictionMethod;
use sc_core::error::ScError;
use thiserror::Error;

/// Errors raised while building, mutating or evaluating pipe sections.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComponentError {
    #[error("Invalid {field}: {value} ({reason})")]
    Invalid {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Appurtenance K-values must not be empty")]
    EmptyKValues,

    #[error(
        "Elevation bands cross: z1 in [{z1_min}, {z1_max}], z2 in [{z2_min}, {z2_max}]"
    )]
    CrossingElevation {
        z1_min: f64,
        z1_max: f64,
        z2_min: f64,
        z2_max: f64,
    },

    #[error("Invalid flow range: {reason}")]
    InvalidFlowRange { reason: &'static str },

    #[error("Friction method '{method}' is not implemented")]
    UnsupportedMethod { method: FrictionMethod },

    #[error("No friction strategy registered for '{method}'")]
    NoMethod { method: FrictionMethod },

    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },
}

pub type ComponentResult<T> = Result<T, ComponentError>;

impl ComponentError {
    /// True for errors caused by out-of-range section parameters.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ComponentError::Invalid { .. }
                | ComponentError::EmptyKValues
                | ComponentError::CrossingElevation { .. }
        )
    }
}

impl From<ScError> for ComponentError {
    fn from(e: ScError) -> Self {
        match e {
            ScError::NonFinite { what, value } => ComponentError::Invalid {
                field: what,
                value,
                reason: "must be finite",
            },
            ScError::NotPositive { what, value } => ComponentError::Invalid {
                field: what,
                value,
                reason: "must be greater than zero",
            },
            ScError::Negative { what, value } => ComponentError::Invalid {
                field: what,
                value,
                reason: "must not be negative",
            },
            ScError::Unknown { what, .. } => ComponentError::Invalid {
                field: what,
                value: f64::NAN,
                reason: "unrecognized value",
            },
        }
    }
}
