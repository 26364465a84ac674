use super::density::Density;
use super::measure::Measure;
use super::support::Support;
use crate::Energy;
use crate::Mass;

/// A transport plan (coupling) between two distributions.
///
/// A coupling is a joint assignment of mass π(x, y) whose row and column
/// sums stay within the source density P and the target density Q. The
/// transport cost is the ground cost integrated against π.
///
/// # Type Parameters
///
/// - `X` — Source support space
/// - `Y` — Target support space
/// - `M` — Ground cost between X and Y
/// - `P` — Source distribution over X
/// - `Q` — Target distribution over Y
///
/// # Algorithm Contract
///
/// After [`minimize`](Coupling::minimize) succeeds, [`cost`](Coupling::cost)
/// returns the transport cost of the plan it found. Exact solvers return the
/// optimum; heuristics return an upper bound on it.
pub trait Coupling: Sized {
    /// Source support space.
    type X: Support;
    /// Target support space.
    type Y: Support;
    /// Ground cost between source and target bins.
    type M: Measure<X = Self::X, Y = Self::Y>;
    /// Source distribution.
    type P: Density<Support = Self::X>;
    /// Target distribution.
    type Q: Density<Support = Self::Y>;
    /// Reason a plan could not be produced.
    type Error;
    /// Optimizes the coupling to minimize total transport cost.
    fn minimize(self) -> Result<Self, Self::Error>;
    /// Returns the mass transported from `x` to `y` in the coupling.
    fn flow(&self, x: &Self::X, y: &Self::Y) -> Mass;
    /// Returns the total transport cost of this coupling, unnormalized.
    fn cost(&self) -> Energy;
}
