use super::cost::CostMatrix;
use super::signature::Signature;
use crate::Energy;
use crate::Mass;

/// A transportation problem padded so that supply equals demand.
///
/// When the signatures carry different totals, one zero-cost dummy bin
/// is appended on the lighter side and absorbs the surplus. Real bins keep
/// their indices, so a cell `(i, j)` is real iff `i < cost.rows()` and
/// `j < cost.cols()`.
pub(crate) struct Balanced<'a> {
    metric: &'a CostMatrix,
    supply: Vec<Mass>,
    demand: Vec<Mass>,
    matched: Mass,
}

impl Balanced<'_> {
    pub fn rows(&self) -> usize {
        self.supply.len()
    }
    pub fn cols(&self) -> usize {
        self.demand.len()
    }
    pub fn supply(&self) -> &[Mass] {
        &self.supply
    }
    pub fn demand(&self) -> &[Mass] {
        &self.demand
    }
    /// Mass that actually travels between real bins.
    pub fn matched(&self) -> Mass {
        self.matched
    }
    /// Dimensions of the unpadded problem.
    pub fn real(&self) -> (usize, usize) {
        (self.metric.rows(), self.metric.cols())
    }
    pub fn cost(&self, i: usize, j: usize) -> Energy {
        match i < self.metric.rows() && j < self.metric.cols() {
            true => self.metric.cost(i, j),
            false => 0.,
        }
    }
}

impl<'a> From<(&Signature, &Signature, &'a CostMatrix)> for Balanced<'a> {
    fn from((source, target, metric): (&Signature, &Signature, &'a CostMatrix)) -> Self {
        debug_assert!(source.len() == metric.rows());
        debug_assert!(target.len() == metric.cols());
        let mut supply = source.weights().to_vec();
        let mut demand = target.weights().to_vec();
        let lhs = source.total();
        let rhs = target.total();
        if lhs > rhs {
            demand.push(lhs - rhs);
        }
        if rhs > lhs {
            supply.push(rhs - lhs);
        }
        Self {
            metric,
            supply,
            demand,
            matched: Mass::min(lhs, rhs),
        }
    }
}
