//! Unit systems understood by the head-loss model.
//!
//! The engine works in whatever consistent unit system the caller picks; the
//! only unit-dependent inputs are gravity and the empirical factor that turns
//! a gauge pressure difference into head of water.

use core::fmt;
use core::str::FromStr;

use crate::ScError;

/// Unit system for lengths, flow rates and pressures.
///
/// - `Imperial`: ft, ft³/s, psi
/// - `Metric`: m, m³/s, bar
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum UnitSystem {
    #[default]
    Imperial,
    Metric,
}

impl UnitSystem {
    pub const ALL: [UnitSystem; 2] = [UnitSystem::Imperial, UnitSystem::Metric];

    /// Gravitational acceleration (ft/s² or m/s²).
    pub fn gravity(self) -> f64 {
        match self {
            UnitSystem::Imperial => constants::G_IMPERIAL,
            UnitSystem::Metric => constants::G_METRIC,
        }
    }

    /// Head of water per unit of gauge pressure (ft/psi or m/bar).
    pub fn pressure_head_factor(self) -> f64 {
        match self {
            UnitSystem::Imperial => constants::FT_PER_PSI,
            UnitSystem::Metric => constants::M_PER_BAR,
        }
    }

    pub fn length_label(self) -> &'static str {
        match self {
            UnitSystem::Imperial => "ft",
            UnitSystem::Metric => "m",
        }
    }

    pub fn flow_label(self) -> &'static str {
        match self {
            UnitSystem::Imperial => "ft^3/s",
            UnitSystem::Metric => "m^3/s",
        }
    }

    pub fn pressure_label(self) -> &'static str {
        match self {
            UnitSystem::Imperial => "psi",
            UnitSystem::Metric => "bar",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Imperial => write!(f, "imperial"),
            UnitSystem::Metric => write!(f, "metric"),
        }
    }
}

impl FromStr for UnitSystem {
    type Err = ScError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "imperial" | "us" => Ok(UnitSystem::Imperial),
            "metric" | "si" => Ok(UnitSystem::Metric),
            _ => Err(ScError::Unknown {
                what: "unit system",
                input: s.to_string(),
            }),
        }
    }
}

pub mod constants {
    /// Gravitational acceleration, ft/s².
    pub const G_IMPERIAL: f64 = 32.17;
    /// Gravitational acceleration, m/s².
    pub const G_METRIC: f64 = 9.81;
    /// Feet of water per psi.
    pub const FT_PER_PSI: f64 = 2.31;
    /// Metres of water per bar.
    pub const M_PER_BAR: f64 = 10.2;
}
