//! sc-components: hydraulic building blocks for series pipelines.
//!
//! Provides:
//! - Friction-factor strategies selected by [`FrictionMethod`]
//! - [`PipeSection`], the per-section head-loss model
//! - [`FlowRange`], the flow-rate samples a curve is evaluated over
//!
//! Sections are plain values validated on construction and on every
//! mutation; evaluation is a pure function of their parameters.
//!
//! # Example
//!
//! ```
//! use sc_components::{FlowRange, FrictionMethod, PipeSection, SectionParams, friction};
//! use sc_core::UnitSystem;
//!
//! let params = SectionParams::new(100.0, 0.5, 0.0002, 1.1e-5, vec![0.5], 10.0);
//! let section = PipeSection::new("suction", params).unwrap();
//!
//! let strategy = friction::resolve(FrictionMethod::Serghide).unwrap();
//! let range = FlowRange::from_target(10.0).unwrap();
//! let heads = section
//!     .evaluate(strategy, range.samples(), UnitSystem::Imperial)
//!     .unwrap();
//!
//! assert_eq!(heads.len(), 20);
//! println!("TDH at target: {:.3} ft", heads[19].max_tdh());
//! ```

pub mod common;
pub mod elevation;
pub mod error;
pub mod flow_range;
pub mod friction;
pub mod head;
pub mod section;
pub mod traits;

// Re-exports
pub use elevation::{Elevation, ElevationBand};
pub use error::{ComponentError, ComponentResult};
pub use flow_range::{FlowRange, SAMPLE_COUNT};
pub use friction::{FrictionMethod, Serghide};
pub use head::SectionHead;
pub use section::{PipeSection, SectionParams};
pub use traits::FrictionFactor;
