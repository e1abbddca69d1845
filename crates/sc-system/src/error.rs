//! Error types for pipeline operations.

use sc_components::{ComponentError, FrictionMethod};
use thiserror::Error;

/// Errors that can occur while managing or evaluating a pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SystemError {
    #[error("Pipeline has no sections")]
    EmptyPipeline,

    #[error("Section index out of range (index={index}, len={len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Friction method '{0}' is not implemented")]
    UnsupportedMethod(FrictionMethod),

    #[error("No friction strategy available for '{0}'")]
    NoMethod(FrictionMethod),

    #[error("Section '{section}': {source}")]
    Section {
        section: String,
        source: ComponentError,
    },

    #[error("Component error: {0}")]
    Component(ComponentError),
}

pub type SystemResult<T> = Result<T, SystemError>;

impl SystemError {
    /// Attach the offending section's name to a component error.
    pub(crate) fn in_section(section: &str, e: ComponentError) -> Self {
        SystemError::Section {
            section: section.to_string(),
            source: e,
        }
    }
}

impl From<ComponentError> for SystemError {
    fn from(e: ComponentError) -> Self {
        match e {
            ComponentError::UnsupportedMethod { method } => SystemError::UnsupportedMethod(method),
            ComponentError::NoMethod { method } => SystemError::NoMethod(method),
            other => SystemError::Component(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_errors_are_lifted() {
        let err: SystemError = ComponentError::UnsupportedMethod {
            method: FrictionMethod::Colebrook,
        }
        .into();
        assert_eq!(err, SystemError::UnsupportedMethod(FrictionMethod::Colebrook));

        let err: SystemError = ComponentError::NoMethod {
            method: FrictionMethod::Serghide,
        }
        .into();
        assert_eq!(err, SystemError::NoMethod(FrictionMethod::Serghide));
    }

    #[test]
    fn other_errors_are_wrapped() {
        let err: SystemError = ComponentError::EmptyKValues.into();
        assert_eq!(err, SystemError::Component(ComponentError::EmptyKValues));
    }

    #[test]
    fn section_error_names_section() {
        let err = SystemError::in_section("riser", ComponentError::NonPhysical { what: "major loss" });
        let msg = err.to_string();
        assert!(msg.contains("riser"));
        assert!(msg.contains("major loss"));
    }
}
