//! Per-flow-rate head contribution of a single section.

/// Head terms of one section at one flow rate.
///
/// All heads are in the length unit of the evaluating [`sc_core::UnitSystem`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionHead {
    pub flow_rate: f64,
    pub reynolds: f64,
    pub friction_factor: f64,
    /// Worst-case static head (`z2_max - z1_min`).
    pub static_max: f64,
    /// Best-case static head (`z2_min - z1_max`).
    pub static_min: f64,
    pub pressure: f64,
    pub velocity: f64,
    /// Darcy-Weisbach friction loss.
    pub major: f64,
    /// Fitting loss from the summed K-values.
    pub minor: f64,
}

impl SectionHead {
    /// Everything except static head.
    pub fn dynamic(&self) -> f64 {
        self.pressure + self.velocity + self.major + self.minor
    }

    pub fn max_tdh(&self) -> f64 {
        self.static_max + self.dynamic()
    }

    pub fn min_tdh(&self) -> f64 {
        self.static_min + self.dynamic()
    }
}
