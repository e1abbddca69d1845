//! Project schema definitions.

use sc_components::FrictionMethod;
use sc_core::UnitSystem;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub version: u32,
    pub name: String,
    pub pipeline: PipelineDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PipelineDef {
    pub target_flow_rate: f64,
    #[serde(default)]
    pub method: FrictionMethod,
    #[serde(default)]
    pub unit_system: UnitSystem,
    #[serde(default)]
    pub sections: Vec<SectionDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectionDef {
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    pub length: f64,
    pub diameter: f64,
    pub absolute_roughness: f64,
    pub kinematic_viscosity: f64,
    pub k_values: Vec<f64>,
    pub target_flow_rate: f64,
    #[serde(default)]
    pub pressure: EndpointsDef,
    #[serde(default)]
    pub velocity: EndpointsDef,
    #[serde(default)]
    pub elevation: ElevationDef,
}

impl SectionDef {
    /// Display name, falling back to the id.
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

/// Values at the inlet (`initial`) and outlet (`final`) of a section.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct EndpointsDef {
    pub initial: f64,
    #[serde(rename = "final")]
    pub final_: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElevationDef {
    Point { z1: f64, z2: f64 },
    Band { z1: BandDef, z2: BandDef },
}

impl Default for ElevationDef {
    fn default() -> Self {
        ElevationDef::Point { z1: 0.0, z2: 0.0 }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BandDef {
    pub min: f64,
    pub max: f64,
}
