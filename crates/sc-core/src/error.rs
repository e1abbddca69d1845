use thiserror::Error;

pub type ScResult<T> = Result<T, ScError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("{what} must be greater than zero (got {value})")]
    NotPositive { what: &'static str, value: f64 },

    #[error("{what} must not be negative (got {value})")]
    Negative { what: &'static str, value: f64 },

    #[error("Unknown {what}: '{input}'")]
    Unknown { what: &'static str, input: String },
}

impl ScError {
    /// Name of the offending quantity.
    pub fn what(&self) -> &'static str {
        match self {
            ScError::NonFinite { what, .. }
            | ScError::NotPositive { what, .. }
            | ScError::Negative { what, .. }
            | ScError::Unknown { what, .. } => what,
        }
    }
}
