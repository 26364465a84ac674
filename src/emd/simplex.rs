use super::balance::Balanced;
use super::basis::Basis;
use super::cost::CostMatrix;
use super::distance;
use super::error::Error;
use super::flow::Flow;
use super::signature::Signature;
use crate::Energy;
use crate::Mass;
use crate::transport::Coupling;

/// Exact optimal transport via the transportation simplex.
///
/// Computes the Earth Mover's Distance between two signatures under an
/// arbitrary non-negative cost matrix. Signatures with different totals
/// are balanced with a zero-cost dummy bin, so only the smaller total is
/// ever transported.
///
/// # Algorithm
///
/// 1. Start from the [`Greedy`](super::Greedy) spanning-tree basis
/// 2. Solve dual potentials `u[i] + v[j] = cost(i, j)` along the tree
/// 3. Enter the cell with the most negative reduced cost
/// 4. Shift mass around the cycle it closes; the ratio test picks the leaving cell
/// 5. Stop once every reduced cost is at least `-ε`
///
/// Degenerate pivots (zero step) are resolved by a lexicographic tie-break.
/// Cycling is still possible in principle, so the number of pivots is
/// bounded and exceeding the bound is a [`Error::NumericalFailure`].
///
/// # Resources
///
/// All working state lives in this value: the basis holds `O(n·m)` slot
/// indices and `O(n+m)` cells, and each pivot is `O(n·m)` for pricing.
pub struct Simplex<'a> {
    /// Source distribution.
    source: &'a Signature,
    /// Target distribution.
    target: &'a Signature,
    /// Ground cost between bins.
    metric: &'a CostMatrix,
    /// Reduced-cost tolerance relative to the largest cost.
    tolerance: Energy,
    /// Pivot budget override.
    limit: Option<usize>,
    /// Pivots performed by the last solve.
    pivots: usize,
    /// Optimal transport plan over real bins.
    flow: Flow,
}

impl<'a> Simplex<'a> {
    pub fn with_tolerance(mut self, tolerance: Energy) -> Self {
        self.tolerance = tolerance;
        self
    }
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
    pub fn pivots(&self) -> usize {
        self.pivots
    }
    pub fn plan(&self) -> &Flow {
        &self.flow
    }
    pub fn into_flow(self) -> Flow {
        self.flow
    }
    /// Mass moved between real bins.
    pub fn total(&self) -> Mass {
        self.flow.total()
    }
    /// Transport cost per unit of mass moved.
    pub fn distance(&self) -> Energy {
        distance::extract(&self.flow, self.metric, self.total())
    }

    /// Pivot budget for a padded problem of the given shape.
    fn budget(&self, rows: usize, cols: usize) -> usize {
        self.limit.unwrap_or_else(|| {
            usize::max(
                crate::EMD_PIVOT_FACTOR.saturating_mul(rows).saturating_mul(cols),
                crate::EMD_PIVOT_FLOOR,
            )
        })
    }
    /// Absolute optimality tolerance for this cost matrix.
    fn epsilon(&self) -> Energy {
        self.tolerance * Energy::max(self.metric.max(), 1.)
    }

    /// Runs pivots on the greedy basis until no reduced cost is negative.
    fn simplex(&mut self, problem: &Balanced) -> Result<Basis, Error> {
        let mut basis = Basis::from(problem);
        let budget = self.budget(problem.rows(), problem.cols());
        let epsilon = self.epsilon();
        loop {
            let (ref u, ref v) = basis.potentials(problem);
            match basis.entering(problem, u, v, epsilon) {
                None => return Ok(basis),
                Some(_) if self.pivots >= budget => {
                    log::warn!(
                        "simplex exhausted {} pivots on {}x{} problem",
                        budget,
                        problem.rows(),
                        problem.cols()
                    );
                    return Err(Error::NumericalFailure(budget));
                }
                Some((i, j, reduced)) => {
                    let (exit, theta) = basis.pivot(i, j);
                    self.pivots += 1;
                    log::trace!(
                        "pivot {:>4} enter ({}, {}) r={:.3e} leave ({}, {}) θ={:.3e}",
                        self.pivots,
                        i,
                        j,
                        reduced,
                        exit.row,
                        exit.col,
                        theta
                    );
                }
            }
        }
    }
}

impl Coupling for Simplex<'_> {
    type X = usize;
    type Y = usize;
    type P = Signature;
    type Q = Signature;
    type M = CostMatrix;
    type Error = Error;

    fn minimize(mut self) -> Result<Self, Self::Error> {
        if !self.tolerance.is_finite() || self.tolerance < 0. {
            return Err(Error::InvalidInput(format!(
                "tolerance must be finite and non-negative: {}",
                self.tolerance
            )));
        }
        self.pivots = 0;
        let ref problem = Balanced::from((self.source, self.target, self.metric));
        let (rows, cols) = problem.real();
        if problem.matched() > 0. {
            let basis = self.simplex(problem)?;
            debug_assert!(basis.is_complete());
            self.flow = basis.flow(rows, cols);
        } else {
            self.flow = Flow::zeroes(rows, cols);
        }
        log::debug!(
            "simplex solved {}x{} in {} pivots, moved {:.6}",
            rows,
            cols,
            self.pivots,
            self.total()
        );
        Ok(self)
    }
    fn flow(&self, x: &usize, y: &usize) -> Mass {
        self.flow.get(*x, *y)
    }
    fn cost(&self) -> Energy {
        distance::work(&self.flow, self.metric)
    }
}

impl<'a> From<(&'a Signature, &'a Signature, &'a CostMatrix)> for Simplex<'a> {
    fn from((source, target, metric): (&'a Signature, &'a Signature, &'a CostMatrix)) -> Self {
        Self {
            source,
            target,
            metric,
            tolerance: crate::EMD_TOLERANCE,
            limit: None,
            pivots: 0,
            flow: Flow::zeroes(metric.rows(), metric.cols()),
        }
    }
}
