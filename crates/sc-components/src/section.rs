//! Pipe section with static, pressure, velocity, major and minor head terms.

use crate::common::{FLOW_RATE_FLOOR, REYNOLDS_FLOOR, check_finite, circle_area};
use crate::elevation::Elevation;
use crate::error::{ComponentError, ComponentResult};
use crate::flow_range::FlowRange;
use crate::head::SectionHead;
use crate::traits::FrictionFactor;
use sc_core::UnitSystem;
use sc_core::numeric::{
    Tolerances, ensure_finite, ensure_non_negative, ensure_positive, floor_at, nearly_equal,
};

/// Raw parameters of a pipe section, in one consistent unit system.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionParams {
    /// Pipe length
    pub length: f64,
    /// Pipe inner diameter
    pub diameter: f64,
    /// Surface roughness (absolute)
    pub absolute_roughness: f64,
    /// Kinematic viscosity of the conveyed fluid
    pub kinematic_viscosity: f64,
    /// Gauge pressure at the inlet (psi or bar)
    pub initial_pressure: f64,
    /// Gauge pressure at the outlet (psi or bar)
    pub final_pressure: f64,
    pub initial_velocity: f64,
    pub final_velocity: f64,
    pub elevation: Elevation,
    /// Flow rate the section is sized for
    pub target_flow_rate: f64,
    /// Minor loss coefficients of the fittings, in flow order
    pub k_values: Vec<f64>,
}

impl SectionParams {
    /// Parameters with zero pressure, velocity and elevation change.
    pub fn new(
        length: f64,
        diameter: f64,
        absolute_roughness: f64,
        kinematic_viscosity: f64,
        k_values: Vec<f64>,
        target_flow_rate: f64,
    ) -> Self {
        Self {
            length,
            diameter,
            absolute_roughness,
            kinematic_viscosity,
            initial_pressure: 0.0,
            final_pressure: 0.0,
            initial_velocity: 0.0,
            final_velocity: 0.0,
            elevation: Elevation::default(),
            target_flow_rate,
            k_values,
        }
    }

    pub fn with_pressures(mut self, initial: f64, final_: f64) -> Self {
        self.initial_pressure = initial;
        self.final_pressure = final_;
        self
    }

    pub fn with_velocities(mut self, initial: f64, final_: f64) -> Self {
        self.initial_velocity = initial;
        self.final_velocity = final_;
        self
    }

    pub fn with_elevation(mut self, elevation: Elevation) -> Self {
        self.elevation = elevation;
        self
    }

    /// Check every invariant of a section.
    pub fn validate(&self) -> ComponentResult<()> {
        ensure_positive(self.length, "length")?;
        ensure_positive(self.diameter, "diameter")?;
        ensure_non_negative(self.absolute_roughness, "absolute roughness")?;
        ensure_positive(self.kinematic_viscosity, "kinematic viscosity")?;
        ensure_finite(self.initial_pressure, "initial pressure")?;
        ensure_finite(self.final_pressure, "final pressure")?;
        ensure_finite(self.initial_velocity, "initial velocity")?;
        ensure_finite(self.final_velocity, "final velocity")?;
        ensure_positive(self.target_flow_rate, "target flow rate")?;

        if self.k_values.is_empty() {
            return Err(ComponentError::EmptyKValues);
        }
        for &k in &self.k_values {
            ensure_non_negative(k, "K-value")?;
        }

        self.elevation.validate()
    }
}

/// One pipe segment of a series pipeline.
///
/// Relative roughness and hydraulic area are derived once from the validated
/// parameters. Every setter validates a candidate copy and only commits it
/// when all invariants hold, so a section is never left half-updated.
#[derive(Debug, Clone, PartialEq)]
pub struct PipeSection {
    name: String,
    params: SectionParams,
    relative_roughness: f64,
    hydraulic_area: f64,
}

impl PipeSection {
    /// Create a new section.
    pub fn new(name: impl Into<String>, params: SectionParams) -> ComponentResult<Self> {
        params.validate()?;
        // Extreme diameters can underflow the area or overflow e/D.
        let hydraulic_area = circle_area(params.diameter);
        ensure_positive(hydraulic_area, "hydraulic area")?;
        let relative_roughness = params.absolute_roughness / params.diameter;
        ensure_finite(relative_roughness, "relative roughness")?;
        Ok(Self {
            name: name.into(),
            relative_roughness,
            hydraulic_area,
            params,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn params(&self) -> &SectionParams {
        &self.params
    }

    pub fn into_params(self) -> SectionParams {
        self.params
    }

    pub fn length(&self) -> f64 {
        self.params.length
    }

    pub fn diameter(&self) -> f64 {
        self.params.diameter
    }

    pub fn absolute_roughness(&self) -> f64 {
        self.params.absolute_roughness
    }

    pub fn kinematic_viscosity(&self) -> f64 {
        self.params.kinematic_viscosity
    }

    pub fn elevation(&self) -> Elevation {
        self.params.elevation
    }

    pub fn target_flow_rate(&self) -> f64 {
        self.params.target_flow_rate
    }

    pub fn k_values(&self) -> &[f64] {
        &self.params.k_values
    }

    /// Sum of the minor loss coefficients.
    pub fn k_total(&self) -> f64 {
        self.params.k_values.iter().sum()
    }

    pub fn relative_roughness(&self) -> f64 {
        self.relative_roughness
    }

    pub fn hydraulic_area(&self) -> f64 {
        self.hydraulic_area
    }

    pub fn is_banded(&self) -> bool {
        self.params.elevation.is_banded()
    }

    /// Apply `edit` to a copy of the parameters and commit it if valid.
    ///
    /// On error the section is left unchanged.
    pub fn update(&mut self, edit: impl FnOnce(&mut SectionParams)) -> ComponentResult<()> {
        let mut candidate = self.params.clone();
        edit(&mut candidate);
        *self = PipeSection::new(self.name.clone(), candidate)?;
        Ok(())
    }

    pub fn set_length(&mut self, length: f64) -> ComponentResult<()> {
        self.update(|p| p.length = length)
    }

    pub fn set_diameter(&mut self, diameter: f64) -> ComponentResult<()> {
        self.update(|p| p.diameter = diameter)
    }

    pub fn set_absolute_roughness(&mut self, roughness: f64) -> ComponentResult<()> {
        self.update(|p| p.absolute_roughness = roughness)
    }

    pub fn set_kinematic_viscosity(&mut self, viscosity: f64) -> ComponentResult<()> {
        self.update(|p| p.kinematic_viscosity = viscosity)
    }

    pub fn set_pressures(&mut self, initial: f64, final_: f64) -> ComponentResult<()> {
        self.update(|p| {
            p.initial_pressure = initial;
            p.final_pressure = final_;
        })
    }

    pub fn set_velocities(&mut self, initial: f64, final_: f64) -> ComponentResult<()> {
        self.update(|p| {
            p.initial_velocity = initial;
            p.final_velocity = final_;
        })
    }

    pub fn set_elevation(&mut self, elevation: Elevation) -> ComponentResult<()> {
        self.update(|p| p.elevation = elevation)
    }

    pub fn set_target_flow_rate(&mut self, target: f64) -> ComponentResult<()> {
        self.update(|p| p.target_flow_rate = target)
    }

    pub fn set_k_values(&mut self, k_values: Vec<f64>) -> ComponentResult<()> {
        self.update(|p| p.k_values = k_values)
    }

    /// Flow-rate range generated from this section's own target.
    pub fn flow_range(&self) -> ComponentResult<FlowRange> {
        FlowRange::from_target(self.params.target_flow_rate)
    }

    /// Reynolds number at flow rate `q`, floored at [`REYNOLDS_FLOOR`].
    pub fn reynolds(&self, q: f64) -> f64 {
        let velocity = q / self.hydraulic_area;
        floor_at(
            velocity * self.params.diameter / self.params.kinematic_viscosity,
            REYNOLDS_FLOOR,
        )
    }

    /// Pressure head, `(p2 - p1) * factor`.
    pub fn pressure_head(&self, units: UnitSystem) -> f64 {
        (self.params.final_pressure - self.params.initial_pressure) * units.pressure_head_factor()
    }

    /// Velocity head, `(V2^2 - V1^2) / (2 g A^2)`; zero when the endpoint
    /// velocities match.
    pub fn velocity_head(&self, units: UnitSystem) -> f64 {
        let v1 = self.params.initial_velocity;
        let v2 = self.params.final_velocity;
        if nearly_equal(v1, v2, Tolerances::default()) {
            return 0.0;
        }
        (v2 * v2 - v1 * v1) / self.kinetic_denominator(units)
    }

    /// `2 g A^2`, shared by the velocity, major and minor terms.
    fn kinetic_denominator(&self, units: UnitSystem) -> f64 {
        2.0 * units.gravity() * self.hydraulic_area * self.hydraulic_area
    }

    /// Head terms at a single flow rate.
    pub fn head_at(
        &self,
        friction: &dyn FrictionFactor,
        flow_rate: f64,
        units: UnitSystem,
    ) -> ComponentResult<SectionHead> {
        self.head_with(friction, flow_rate, self.fixed_terms(units))
    }

    /// Head terms for every flow rate, in the order given.
    pub fn evaluate(
        &self,
        friction: &dyn FrictionFactor,
        flow_rates: &[f64],
        units: UnitSystem,
    ) -> ComponentResult<Vec<SectionHead>> {
        let fixed = self.fixed_terms(units);
        flow_rates
            .iter()
            .map(|&q| self.head_with(friction, q, fixed))
            .collect()
    }

    /// Head terms over [`PipeSection::flow_range`].
    pub fn evaluate_own_range(
        &self,
        friction: &dyn FrictionFactor,
        units: UnitSystem,
    ) -> ComponentResult<Vec<SectionHead>> {
        let range = self.flow_range()?;
        self.evaluate(friction, range.samples(), units)
    }

    fn fixed_terms(&self, units: UnitSystem) -> Fixed {
        let (static_max, static_min) = self.params.elevation.static_heads();
        Fixed {
            static_max,
            static_min,
            pressure: self.pressure_head(units),
            velocity: self.velocity_head(units),
            denominator: self.kinetic_denominator(units),
            k_total: self.k_total(),
        }
    }

    fn head_with(
        &self,
        friction: &dyn FrictionFactor,
        flow_rate: f64,
        fixed: Fixed,
    ) -> ComponentResult<SectionHead> {
        let q = if flow_rate > 0.0 {
            flow_rate
        } else {
            FLOW_RATE_FLOOR
        };
        let reynolds = self.reynolds(q);
        check_finite(reynolds, "Reynolds number")?;

        let f = friction.friction_factor(self.relative_roughness, reynolds);
        check_finite(f, "friction factor")?;

        let kinetic = q * q / fixed.denominator;
        let major = f * (self.params.length / self.params.diameter) * kinetic;
        let minor = fixed.k_total * kinetic;

        check_finite(major, "major loss")?;
        check_finite(minor, "minor loss")?;
        check_finite(fixed.velocity, "velocity head")?;
        check_finite(fixed.pressure, "pressure head")?;

        Ok(SectionHead {
            flow_rate: q,
            reynolds,
            friction_factor: f,
            static_max: fixed.static_max,
            static_min: fixed.static_min,
            pressure: fixed.pressure,
            velocity: fixed.velocity,
            major,
            minor,
        })
    }
}

/// Terms that do not depend on the flow rate.
#[derive(Debug, Clone, Copy)]
struct Fixed {
    static_max: f64,
    static_min: f64,
    pressure: f64,
    velocity: f64,
    denominator: f64,
    k_total: f64,
}
