//! Project validation logic.

use crate::schema::{PipelineDef, Project, SectionDef};
use sc_components::ComponentError;
use std::collections::HashSet;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing ID in {context}")]
    MissingId { context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Section '{id}': {source}")]
    Section { id: String, source: ComponentError },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    if project.version == 0 || project.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    validate_pipeline(&project.pipeline)
}

fn validate_pipeline(pipeline: &PipelineDef) -> Result<(), ValidationError> {
    if !(pipeline.target_flow_rate.is_finite() && pipeline.target_flow_rate > 0.0) {
        return Err(ValidationError::InvalidValue {
            field: "pipeline.target_flow_rate".to_string(),
            value: pipeline.target_flow_rate.to_string(),
            reason: "must be finite and greater than zero".to_string(),
        });
    }

    let mut section_ids = HashSet::new();
    for (index, section) in pipeline.sections.iter().enumerate() {
        if section.id.trim().is_empty() {
            return Err(ValidationError::MissingId {
                context: format!("pipeline section #{index}"),
            });
        }
        if !section_ids.insert(&section.id) {
            return Err(ValidationError::DuplicateId {
                id: section.id.clone(),
                context: "pipeline sections".to_string(),
            });
        }
        validate_section(section)?;
    }

    Ok(())
}

fn validate_section(section: &SectionDef) -> Result<(), ValidationError> {
    section
        .build()
        .map(|_| ())
        .map_err(|source| ValidationError::Section {
            id: section.id.clone(),
            source,
        })
}
