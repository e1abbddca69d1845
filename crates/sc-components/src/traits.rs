//! Core traits for friction models.

use crate::common::{LAMINAR_LIMIT, REYNOLDS_FLOOR};
use sc_core::numeric::floor_at;

/// Darcy friction factor as a function of relative roughness and Reynolds number.
///
/// Implementations are stateless and shared through the static strategy table
/// in [`crate::friction`], so they must be `Send + Sync`.
pub trait FrictionFactor: Send + Sync {
    /// Strategy name for debugging and identification.
    fn name(&self) -> &str;

    /// Friction factor for turbulent flow (`reynolds >= 2300`).
    ///
    /// Only called by [`FrictionFactor::friction_factor`] after the Reynolds
    /// number has been floored and the laminar regime ruled out.
    fn turbulent(&self, relative_roughness: f64, reynolds: f64) -> f64;

    /// Darcy friction factor.
    ///
    /// The Reynolds number is clamped to [`REYNOLDS_FLOOR`]. Below
    /// [`LAMINAR_LIMIT`] the Hagen-Poiseuille result `64 / Re` is returned
    /// exactly and the strategy is bypassed.
    fn friction_factor(&self, relative_roughness: f64, reynolds: f64) -> f64 {
        let reynolds = floor_at(reynolds, REYNOLDS_FLOOR);
        if reynolds < LAMINAR_LIMIT {
            64.0 / reynolds
        } else {
            self.turbulent(relative_roughness, reynolds)
        }
    }
}
