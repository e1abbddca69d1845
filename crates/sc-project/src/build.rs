//! Conversion from project definitions to runtime pipelines.

use crate::schema::{ElevationDef, PipelineDef, SectionDef};
use sc_components::{
    ComponentResult, Elevation, ElevationBand, FrictionMethod, PipeSection, SectionParams,
};
use sc_core::UnitSystem;
use sc_system::Pipeline;

/// Pipeline-level evaluation settings taken from a project.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationSettings {
    pub target_flow_rate: f64,
    pub method: FrictionMethod,
    pub unit_system: UnitSystem,
}

impl PipelineDef {
    pub fn settings(&self) -> EvaluationSettings {
        EvaluationSettings {
            target_flow_rate: self.target_flow_rate,
            method: self.method,
            unit_system: self.unit_system,
        }
    }
}

impl ElevationDef {
    pub fn to_elevation(&self) -> ComponentResult<Elevation> {
        match *self {
            ElevationDef::Point { z1, z2 } => Ok(Elevation::point(z1, z2)),
            ElevationDef::Band { z1, z2 } => Ok(Elevation::Band {
                z1: ElevationBand::new(z1.min, z1.max)?,
                z2: ElevationBand::new(z2.min, z2.max)?,
            }),
        }
    }
}

impl SectionDef {
    pub fn to_params(&self) -> ComponentResult<SectionParams> {
        Ok(SectionParams::new(
            self.length,
            self.diameter,
            self.absolute_roughness,
            self.kinematic_viscosity,
            self.k_values.clone(),
            self.target_flow_rate,
        )
        .with_pressures(self.pressure.initial, self.pressure.final_)
        .with_velocities(self.velocity.initial, self.velocity.final_)
        .with_elevation(self.elevation.to_elevation()?))
    }

    /// Build the runtime section, named by its id.
    pub fn build(&self) -> ComponentResult<PipeSection> {
        PipeSection::new(self.id.clone(), self.to_params()?)
    }
}

/// Build a pipeline from its definition, sections in file order.
pub fn build_pipeline(def: &PipelineDef) -> crate::ProjectResult<Pipeline> {
    def.sections
        .iter()
        .map(|section| {
            section
                .build()
                .map_err(|source| crate::ValidationError::Section {
                    id: section.id.clone(),
                    source,
                })
        })
        .collect::<Result<Pipeline, _>>()
        .map_err(crate::ProjectError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{BandDef, EndpointsDef};

    fn section_def(id: &str) -> SectionDef {
        SectionDef {
            id: id.to_string(),
            name: String::new(),
            length: 100.0,
            diameter: 0.5,
            absolute_roughness: 0.0002,
            kinematic_viscosity: 1.1e-5,
            k_values: vec![0.5],
            target_flow_rate: 10.0,
            pressure: EndpointsDef::default(),
            velocity: EndpointsDef {
                initial: 1.0,
                final_: 2.0,
            },
            elevation: ElevationDef::Band {
                z1: BandDef { min: 0.0, max: 1.0 },
                z2: BandDef { min: 5.0, max: 6.0 },
            },
        }
    }

    #[test]
    fn section_def_maps_every_field() {
        let section = section_def("s1").build().unwrap();
        assert_eq!(section.name(), "s1");
        assert_eq!(section.params().initial_velocity, 1.0);
        assert_eq!(section.params().final_velocity, 2.0);
        assert!(section.is_banded());
        assert_eq!(section.elevation().static_heads(), (6.0, 4.0));
    }

    #[test]
    fn inverted_band_fails_to_build() {
        let mut def = section_def("s1");
        def.elevation = ElevationDef::Band {
            z1: BandDef { min: 2.0, max: 1.0 },
            z2: BandDef { min: 5.0, max: 6.0 },
        };
        assert!(def.build().unwrap_err().is_validation());
    }

    #[test]
    fn build_pipeline_keeps_order() {
        let def = PipelineDef {
            target_flow_rate: 10.0,
            method: FrictionMethod::Serghide,
            unit_system: UnitSystem::Metric,
            sections: vec![section_def("a"), section_def("b")],
        };
        let pipeline = build_pipeline(&def).unwrap();
        assert_eq!(pipeline.position("b"), Some(1));

        let settings = def.settings();
        assert_eq!(settings.method, FrictionMethod::Serghide);
        assert_eq!(settings.unit_system, UnitSystem::Metric);
    }
}
