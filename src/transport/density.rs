use super::support::Support;
use crate::Mass;

/// A discrete, possibly unnormalized, distribution over a support set.
///
/// Weights are raw masses rather than probabilities: two densities with
/// different totals are still a valid transport problem, in which case only
/// the smaller total is matched.
pub trait Density {
    /// The type of elements in the distribution's support.
    type Support: Support;
    /// Returns the mass at point `x`, or 0 if not in support.
    fn density(&self, x: &Self::Support) -> Mass;
    /// Iterates over every point of the support, including zero-mass ones.
    fn support(&self) -> impl Iterator<Item = Self::Support>;
    /// Total mass over the support.
    fn total(&self) -> Mass {
        self.support().map(|x| self.density(&x)).sum()
    }
}
