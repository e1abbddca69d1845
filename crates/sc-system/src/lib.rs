//! sc-system: system curves for series pipelines.
//!
//! A [`Pipeline`] owns an ordered list of pipe sections. Evaluating it
//! generates one flow-rate range shared by every section (series flow: each
//! section carries the same flow at every sample) and sums the per-section
//! head at each sample into a [`SystemCurve`].
//!
//! `Pipeline` is a plain owned value. Evaluation borrows it immutably, so the
//! section list cannot change mid-evaluation; sharing a pipeline across
//! threads needs external synchronization or a cloned snapshot.

pub mod curve;
pub mod error;
pub mod pipeline;

pub use curve::{CurvePoint, SystemCurve};
pub use error::{SystemError, SystemResult};
pub use pipeline::Pipeline;
