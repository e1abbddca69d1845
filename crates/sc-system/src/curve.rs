//! System curve: total dynamic head against flow rate.

/// One point of a system curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub flow_rate: f64,
    /// TDH using worst-case static head of every section.
    pub max_tdh: f64,
    /// TDH using best-case static head of every section.
    pub min_tdh: f64,
}

impl CurvePoint {
    /// Single-valued TDH. Equals `min_tdh` when no section models an
    /// elevation band.
    pub fn tdh(&self) -> f64 {
        self.max_tdh
    }

    /// Width of the uncertainty band at this flow rate.
    pub fn spread(&self) -> f64 {
        self.max_tdh - self.min_tdh
    }
}

/// Ordered system curve, indexed like the flow-rate range it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemCurve {
    points: Vec<CurvePoint>,
    banded: bool,
}

impl SystemCurve {
    pub(crate) fn new(points: Vec<CurvePoint>, banded: bool) -> Self {
        Self { points, banded }
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn into_points(self) -> Vec<CurvePoint> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether any section contributed an elevation band.
    pub fn is_banded(&self) -> bool {
        self.banded
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CurvePoint> {
        self.points.iter()
    }

    pub fn flow_rates(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.flow_rate).collect()
    }

    pub fn max_tdh(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.max_tdh).collect()
    }

    pub fn min_tdh(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.min_tdh).collect()
    }

    /// `(TDH, flow rate)` pairs for single-valued consumers.
    pub fn pairs(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.tdh(), p.flow_rate)).collect()
    }

    /// `(max TDH, min TDH, flow rate)` triples for banded consumers.
    pub fn triples(&self) -> Vec<(f64, f64, f64)> {
        self.points
            .iter()
            .map(|p| (p.max_tdh, p.min_tdh, p.flow_rate))
            .collect()
    }
}

impl<'a> IntoIterator for &'a SystemCurve {
    type Item = &'a CurvePoint;
    type IntoIter = std::slice::Iter<'a, CurvePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
