use super::balance::Balanced;
use super::basis::Basis;
use super::cost::CostMatrix;
use super::flow::Flow;
use super::signature::Signature;
use crate::Energy;
use crate::Mass;
use crate::transport::Coupling;

/// Greedy minimum-cost matching between two signatures.
///
/// Visits every source-sink cell in ascending `(cost, row, col)` order and
/// saturates whichever side of the pair has less mass left. Each allocation
/// closes exactly one row or column (the last one closes both), so the
/// chosen cells always form a spanning tree of the balanced problem, which
/// makes this the starting basis for [`Simplex`](super::Simplex).
///
/// On its own the plan is feasible but generally not optimal: its cost is
/// an upper bound on the Earth Mover's Distance.
pub struct Greedy<'a> {
    /// Source distribution.
    source: &'a Signature,
    /// Target distribution.
    target: &'a Signature,
    /// Ground cost between bins.
    metric: &'a CostMatrix,
    /// Transport plan over real bins.
    flow: Flow,
}

impl Greedy<'_> {
    pub fn plan(&self) -> &Flow {
        &self.flow
    }
}

impl From<&Balanced<'_>> for Basis {
    fn from(problem: &Balanced<'_>) -> Self {
        let (rows, cols) = (problem.rows(), problem.cols());
        let mut basis = Basis::empty(rows, cols);
        let mut pile = problem.supply().to_vec();
        let mut sink = problem.demand().to_vec();
        let mut open_rows = vec![true; rows];
        let mut open_cols = vec![true; cols];
        let mut rows_left = rows;
        let mut cols_left = cols;
        let mut order = (0..rows * cols).collect::<Vec<_>>();
        order.sort_by(|a, b| {
            Energy::total_cmp(
                &problem.cost(a / cols, a % cols),
                &problem.cost(b / cols, b % cols),
            )
            .then(a.cmp(b))
        });
        'cells: for k in order {
            let (i, j) = (k / cols, k % cols);
            if !open_rows[i] || !open_cols[j] {
                continue 'cells;
            }
            let mass = Mass::min(pile[i], sink[j]);
            pile[i] -= mass;
            sink[j] -= mass;
            basis.insert(i, j, mass);
            if rows_left == 1 && cols_left == 1 {
                break 'cells;
            }
            if cols_left == 1 || (rows_left > 1 && pile[i] <= sink[j]) {
                open_rows[i] = false;
                rows_left -= 1;
            } else {
                open_cols[j] = false;
                cols_left -= 1;
            }
        }
        debug_assert!(basis.is_complete());
        basis
    }
}

impl Coupling for Greedy<'_> {
    type X = usize;
    type Y = usize;
    type P = Signature;
    type Q = Signature;
    type M = CostMatrix;
    type Error = std::convert::Infallible;

    fn minimize(mut self) -> Result<Self, Self::Error> {
        let ref problem = Balanced::from((self.source, self.target, self.metric));
        let (rows, cols) = problem.real();
        self.flow = Basis::from(problem).flow(rows, cols);
        Ok(self)
    }
    fn flow(&self, x: &usize, y: &usize) -> Mass {
        self.flow.get(*x, *y)
    }
    fn cost(&self) -> Energy {
        super::distance::work(&self.flow, self.metric)
    }
}

impl<'a> From<(&'a Signature, &'a Signature, &'a CostMatrix)> for Greedy<'a> {
    fn from((source, target, metric): (&'a Signature, &'a Signature, &'a CostMatrix)) -> Self {
        Self {
            source,
            target,
            metric,
            flow: Flow::zeroes(metric.rows(), metric.cols()),
        }
    }
}
