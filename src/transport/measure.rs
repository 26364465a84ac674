use super::support::Support;
use crate::Energy;

/// Ground cost between elements of two support spaces.
///
/// Defines the cost of transporting one unit of mass from a point in
/// the source space to a point in the target space. No metric axioms
/// are assumed; a cost that violates the triangle inequality still
/// yields a valid (if non-metric) transport cost.
pub trait Measure {
    /// Source support space.
    type X: Support;
    /// Target support space.
    type Y: Support;
    /// Returns the cost of transporting mass from `x` to `y`.
    fn distance(&self, x: &Self::X, y: &Self::Y) -> Energy;
}
