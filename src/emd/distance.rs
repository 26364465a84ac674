use super::cost::CostMatrix;
use super::flow::Flow;
use crate::Energy;
use crate::Mass;
use crate::transport::Measure;

/// Total transport cost `Σ flow(i, j) · cost(i, j)`.
pub fn work(flow: &Flow, metric: &CostMatrix) -> Energy {
    flow.arcs()
        .map(|arc| arc.mass * metric.distance(&arc.from, &arc.to))
        .sum()
}

/// Transport cost normalized by the mass that was actually moved.
/// Nothing moved means nothing to compare, so the distance is 0.
pub fn extract(flow: &Flow, metric: &CostMatrix, total: Mass) -> Energy {
    match total > 0. {
        true => work(flow, metric) / total,
        false => 0.,
    }
}
