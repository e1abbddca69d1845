//! Elevation endpoints, either fixed or as uncertainty bands.

use crate::error::{ComponentError, ComponentResult};
use sc_core::numeric::ensure_finite;

/// Closed elevation interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElevationBand {
    min: f64,
    max: f64,
}

impl ElevationBand {
    pub fn new(min: f64, max: f64) -> ComponentResult<Self> {
        ensure_finite(min, "elevation band min")?;
        ensure_finite(max, "elevation band max")?;
        if min > max {
            return Err(ComponentError::Invalid {
                field: "elevation band",
                value: min,
                reason: "min exceeds max",
            });
        }
        Ok(Self { min, max })
    }

    /// Degenerate band holding a single elevation.
    pub fn fixed(z: f64) -> ComponentResult<Self> {
        Self::new(z, z)
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }
}

/// Inlet (`z1`) and outlet (`z2`) elevation of a section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Elevation {
    /// Single known elevation at each end.
    Point { z1: f64, z2: f64 },
    /// Uncertain elevation at each end, producing a max and a min curve.
    Band {
        z1: ElevationBand,
        z2: ElevationBand,
    },
}

impl Default for Elevation {
    fn default() -> Self {
        Elevation::Point { z1: 0.0, z2: 0.0 }
    }
}

impl Elevation {
    pub fn point(z1: f64, z2: f64) -> Self {
        Elevation::Point { z1, z2 }
    }

    /// Banded elevation from raw bounds, checked immediately.
    pub fn band(z1_min: f64, z1_max: f64, z2_min: f64, z2_max: f64) -> ComponentResult<Self> {
        let elevation = Elevation::Band {
            z1: ElevationBand::new(z1_min, z1_max)?,
            z2: ElevationBand::new(z2_min, z2_max)?,
        };
        elevation.validate()?;
        Ok(elevation)
    }

    pub fn is_banded(&self) -> bool {
        matches!(self, Elevation::Band { .. })
    }

    /// Check finiteness and, for bands, that the outlet band does not cross
    /// below the inlet band (`z2_max >= z1_min` and `z2_min >= z1_max`).
    pub fn validate(&self) -> ComponentResult<()> {
        match *self {
            Elevation::Point { z1, z2 } => {
                ensure_finite(z1, "inlet elevation")?;
                ensure_finite(z2, "outlet elevation")?;
                Ok(())
            }
            Elevation::Band { z1, z2 } => {
                // Re-check the bands: fields may have been built by hand.
                ElevationBand::new(z1.min, z1.max)?;
                ElevationBand::new(z2.min, z2.max)?;
                if z2.max < z1.min || z2.min < z1.max {
                    return Err(ComponentError::CrossingElevation {
                        z1_min: z1.min,
                        z1_max: z1.max,
                        z2_min: z2.min,
                        z2_max: z2.max,
                    });
                }
                Ok(())
            }
        }
    }

    /// Static head as `(max, min)`.
    ///
    /// A point elevation yields the same value twice; a band yields the
    /// worst case `z2_max - z1_min` and best case `z2_min - z1_max`.
    pub fn static_heads(&self) -> (f64, f64) {
        match *self {
            Elevation::Point { z1, z2 } => {
                let h = z2 - z1;
                (h, h)
            }
            Elevation::Band { z1, z2 } => (z2.max - z1.min, z2.min - z1.max),
        }
    }
}
