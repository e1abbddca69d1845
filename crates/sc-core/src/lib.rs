//! sc-core: shared foundation for syscurve.
//!
//! Contains:
//! - units (unit systems and the empirical constants tied to them)
//! - numeric (Real + tolerances + float guards)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{ScError, ScResult};
pub use numeric::*;
pub use units::*;
