//! Series pipeline and system-curve aggregation.

use sc_components::{
    FlowRange, FrictionFactor, FrictionMethod, PipeSection, SectionHead, SectionParams, friction,
};
use sc_core::UnitSystem;
use tracing::{debug, trace};

use crate::curve::{CurvePoint, SystemCurve};
use crate::error::{SystemError, SystemResult};

/// Ordered pipe sections connected in series.
///
/// Insertion order is physical order. The summed head does not depend on it,
/// but per-section results are reported in this order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pipeline {
    sections: Vec<PipeSection>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_sections(sections: Vec<PipeSection>) -> Self {
        Self { sections }
    }

    /// Append a section at the downstream end.
    pub fn add(&mut self, section: PipeSection) {
        self.sections.push(section);
    }

    /// Validate raw parameters and append the resulting section.
    pub fn add_params(
        &mut self,
        name: impl Into<String>,
        params: SectionParams,
    ) -> SystemResult<&PipeSection> {
        let section = PipeSection::new(name, params)?;
        self.sections.push(section);
        Ok(&self.sections[self.sections.len() - 1])
    }

    /// Remove and return the section at `index`.
    pub fn remove_at(&mut self, index: usize) -> SystemResult<PipeSection> {
        self.check_index(index)?;
        Ok(self.sections.remove(index))
    }

    /// Replace the section at `index`, returning the previous one.
    pub fn replace_at(&mut self, index: usize, section: PipeSection) -> SystemResult<PipeSection> {
        self.check_index(index)?;
        Ok(std::mem::replace(&mut self.sections[index], section))
    }

    /// Sections in series order.
    pub fn sections(&self) -> &[PipeSection] {
        &self.sections
    }

    pub fn get(&self, index: usize) -> Option<&PipeSection> {
        self.sections.get(index)
    }

    /// Mutable access for in-place edits; section setters re-validate.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut PipeSection> {
        self.sections.get_mut(index)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.name() == name)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PipeSection> {
        self.sections.iter()
    }

    /// Whether any section models an elevation band.
    pub fn is_banded(&self) -> bool {
        self.sections.iter().any(PipeSection::is_banded)
    }

    /// System curve over the range generated from `target_flow_rate`.
    ///
    /// # Errors
    ///
    /// - [`SystemError::EmptyPipeline`] if there are no sections.
    /// - [`SystemError::UnsupportedMethod`] / [`SystemError::NoMethod`] if
    ///   `method` does not resolve to a strategy.
    /// - [`SystemError::Component`] if the target flow rate is not positive.
    pub fn evaluate(
        &self,
        target_flow_rate: f64,
        method: FrictionMethod,
        units: UnitSystem,
    ) -> SystemResult<SystemCurve> {
        let strategy = self.prepare(method)?;
        let range = FlowRange::from_target(target_flow_rate)?;
        self.sum_over(strategy, &range, method, units)
    }

    /// System curve over a caller-supplied flow-rate range.
    pub fn evaluate_over(
        &self,
        range: &FlowRange,
        method: FrictionMethod,
        units: UnitSystem,
    ) -> SystemResult<SystemCurve> {
        let strategy = self.prepare(method)?;
        self.sum_over(strategy, range, method, units)
    }

    /// Per-section head terms over the range generated from
    /// `target_flow_rate`, in series order.
    pub fn evaluate_sections(
        &self,
        target_flow_rate: f64,
        method: FrictionMethod,
        units: UnitSystem,
    ) -> SystemResult<Vec<Vec<SectionHead>>> {
        let strategy = self.prepare(method)?;
        let range = FlowRange::from_target(target_flow_rate)?;
        self.sections
            .iter()
            .map(|section| section_heads(section, strategy, &range, units))
            .collect()
    }

    fn check_index(&self, index: usize) -> SystemResult<()> {
        if index >= self.sections.len() {
            return Err(SystemError::IndexOutOfRange {
                index,
                len: self.sections.len(),
            });
        }
        Ok(())
    }

    fn prepare(&self, method: FrictionMethod) -> SystemResult<&'static dyn FrictionFactor> {
        if self.sections.is_empty() {
            return Err(SystemError::EmptyPipeline);
        }
        Ok(friction::resolve(method)?)
    }

    fn sum_over(
        &self,
        strategy: &dyn FrictionFactor,
        range: &FlowRange,
        method: FrictionMethod,
        units: UnitSystem,
    ) -> SystemResult<SystemCurve> {
        debug!(
            sections = self.sections.len(),
            samples = range.len(),
            %method,
            %units,
            "evaluating system curve"
        );

        let mut points: Vec<CurvePoint> = range
            .iter()
            .map(|q| CurvePoint {
                flow_rate: q,
                max_tdh: 0.0,
                min_tdh: 0.0,
            })
            .collect();

        // Series flow: every section sees the same flow at index i.
        for section in &self.sections {
            let heads = section_heads(section, strategy, range, units)?;
            trace!(
                section = section.name(),
                head_at_max_flow = ?heads.last().map(SectionHead::max_tdh),
                "section evaluated"
            );
            for (point, head) in points.iter_mut().zip(&heads) {
                // Label each point with the flow its heads were computed at.
                point.flow_rate = head.flow_rate;
                point.max_tdh += head.max_tdh();
                point.min_tdh += head.min_tdh();
            }
        }

        Ok(SystemCurve::new(points, self.is_banded()))
    }
}

fn section_heads(
    section: &PipeSection,
    strategy: &dyn FrictionFactor,
    range: &FlowRange,
    units: UnitSystem,
) -> SystemResult<Vec<SectionHead>> {
    section
        .evaluate(strategy, range.samples(), units)
        .map_err(|e| SystemError::in_section(section.name(), e))
}

impl FromIterator<PipeSection> for Pipeline {
    fn from_iter<I: IntoIterator<Item = PipeSection>>(iter: I) -> Self {
        Self::from_sections(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Pipeline {
    type Item = &'a PipeSection;
    type IntoIter = std::slice::Iter<'a, PipeSection>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}
