//! Earth Mover's Distance over a precomputed cost matrix.
//!
//! ## Pipeline
//!
//! 1. [`Problem`] — raw caller buffers, validated once into
//!    [`Signature`]s and a [`CostMatrix`]
//! 2. [`Greedy`] — minimum-cost matching, the starting spanning tree
//! 3. [`Simplex`] — pivots that tree to an optimal [`Flow`]
//! 4. [`extract`] — normalizes the flow's cost by the mass it moved
//!
//! [`pairwise`] batches step 3 across many signatures in parallel.
mod balance;
mod basis;
mod cost;
mod distance;
mod error;
mod flow;
mod greedy;
mod pairwise;
mod problem;
mod signature;
mod simplex;

pub use cost::*;
pub use distance::*;
pub use error::*;
pub use flow::*;
pub use greedy::*;
pub use pairwise::*;
pub use problem::*;
pub use signature::*;
pub use simplex::*;

use crate::Energy;
use crate::Mass;
use crate::transport::Coupling;

/// Earth Mover's Distance between `weight1` and `weight2`.
///
/// `cost[i * weight2.len() + j]` is the cost of moving one unit of mass
/// from bin `i` of `weight1` to bin `j` of `weight2`. When the totals
/// differ only the smaller total is moved, and the result is the cost per
/// unit moved; it is 0 when there is nothing to move.
///
/// # Errors
///
/// - [`Error::InvalidInput`] for empty, negative, non-finite, or mis-sized buffers
/// - [`Error::NumericalFailure`] when the simplex exhausts its pivot budget
pub fn emd(weight1: &[Mass], weight2: &[Mass], cost: &[Energy]) -> Result<Energy, Error> {
    emd_with_flow(weight1, weight2, cost).map(|(distance, _)| distance)
}

/// Same as [`emd`], also returning the optimal transport plan.
pub fn emd_with_flow(
    weight1: &[Mass],
    weight2: &[Mass],
    cost: &[Energy],
) -> Result<(Energy, Flow), Error> {
    let (ref source, ref target, ref metric) = Problem::from((weight1, weight2, cost)).validate()?;
    let simplex = Simplex::from((source, target, metric)).minimize()?;
    Ok((simplex.distance(), simplex.into_flow()))
}
