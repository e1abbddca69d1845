//! Flow-rate samples a head curve is evaluated over.

use crate::error::{ComponentError, ComponentResult};
use sc_core::numeric::ensure_positive;

/// Number of samples in a range generated from a target flow rate.
pub const SAMPLE_COUNT: usize = 20;

/// Strictly increasing, positive flow-rate samples.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowRange {
    samples: Vec<f64>,
}

impl FlowRange {
    /// Evenly spaced samples ending at the target flow rate.
    ///
    /// `q[i] = (target / 20) * (i + 1)` for `i = 0..19`, so the target is the
    /// last sample and the first one is `target / 20`.
    pub fn from_target(target_flow_rate: f64) -> ComponentResult<Self> {
        let target = ensure_positive(target_flow_rate, "target flow rate")?;
        let step = target / SAMPLE_COUNT as f64;

        let mut samples: Vec<f64> = (0..SAMPLE_COUNT).map(|i| step * (i + 1) as f64).collect();
        // Ensure exact endpoint
        samples[SAMPLE_COUNT - 1] = target;

        Ok(Self { samples })
    }

    /// Wrap externally generated samples, e.g. a range centred on the target.
    pub fn from_samples(samples: Vec<f64>) -> ComponentResult<Self> {
        if samples.is_empty() {
            return Err(ComponentError::InvalidFlowRange {
                reason: "no samples",
            });
        }
        for &q in &samples {
            ensure_positive(q, "flow rate sample")?;
        }
        if samples.windows(2).any(|w| w[1] <= w[0]) {
            return Err(ComponentError::InvalidFlowRange {
                reason: "samples must be strictly increasing",
            });
        }
        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Largest sample.
    pub fn max(&self) -> f64 {
        self.samples[self.samples.len() - 1]
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_is_last_sample() {
        let range = FlowRange::from_target(10.0).unwrap();
        assert_eq!(range.len(), SAMPLE_COUNT);
        assert_eq!(range.max(), 10.0);
        assert!((range.samples()[0] - 0.5).abs() < 1e-12);
        assert!(range.samples().windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn step_is_uniform() {
        let range = FlowRange::from_target(3.7).unwrap();
        let step = 3.7 / 20.0;
        for (i, q) in range.iter().enumerate() {
            assert!((q - step * (i + 1) as f64).abs() < 1e-12);
        }
    }

    #[test]
    fn rejects_non_positive_target() {
        assert!(FlowRange::from_target(0.0).unwrap_err().is_validation());
        assert!(FlowRange::from_target(-5.0).is_err());
        assert!(FlowRange::from_target(f64::NAN).is_err());
    }

    #[test]
    fn external_samples_must_increase() {
        assert!(FlowRange::from_samples(vec![1.0, 2.0, 3.0]).is_ok());
        assert_eq!(
            FlowRange::from_samples(vec![]),
            Err(ComponentError::InvalidFlowRange {
                reason: "no samples"
            })
        );
        assert!(matches!(
            FlowRange::from_samples(vec![1.0, 1.0]),
            Err(ComponentError::InvalidFlowRange { .. })
        ));
        assert!(FlowRange::from_samples(vec![0.0, 1.0]).is_err());
    }
}
