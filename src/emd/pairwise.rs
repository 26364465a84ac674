use super::cost::CostMatrix;
use super::error::Error;
use super::signature::Signature;
use super::simplex::Simplex;
use crate::Energy;
use crate::transport::Coupling;
use rayon::prelude::*;

/// Distances between every pair of signatures over one shared bin set,
/// as a condensed upper triangle: `(0,1), (0,2), …, (0,k-1), (1,2), …`.
///
/// Pairs are solved independently across the rayon pool. The first error
/// from any pair is returned and the rest of the batch is discarded.
pub fn pairwise(signatures: &[Signature], metric: &CostMatrix) -> Result<Vec<Energy>, Error> {
    if metric.rows() != metric.cols() {
        return Err(Error::InvalidInput(format!(
            "pairwise cost must be square, got {}x{}",
            metric.rows(),
            metric.cols()
        )));
    }
    if let Some(k) = signatures.iter().position(|s| s.len() != metric.rows()) {
        return Err(Error::InvalidInput(format!(
            "signature {} has {} bins, expected {}",
            k,
            signatures[k].len(),
            metric.rows()
        )));
    }
    let n = signatures.len();
    log::debug!("computing {} pairwise distances", n * n.saturating_sub(1) / 2);
    (0..n)
        .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|(i, j)| Simplex::from((&signatures[i], &signatures[j], metric)).minimize())
        .map(|simplex| simplex.map(|s| s.distance()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: usize) -> CostMatrix {
        let costs = (0..n * n)
            .map(|k| (k / n).abs_diff(k % n) as Energy)
            .collect();
        CostMatrix::new(n, n, costs).unwrap()
    }

    #[test]
    fn is_condensed_order() {
        let signatures = vec![
            Signature::try_from(vec![1., 0., 0.]).unwrap(),
            Signature::try_from(vec![0., 1., 0.]).unwrap(),
            Signature::try_from(vec![0., 0., 1.]).unwrap(),
        ];
        let distances = pairwise(&signatures, &line(3)).unwrap();
        assert_eq!(distances, vec![1., 2., 1.]);
    }

    #[test]
    fn is_trivial_batch_empty() {
        let signatures = vec![Signature::try_from(vec![1., 0.]).unwrap()];
        assert!(pairwise(&signatures, &line(2)).unwrap().is_empty());
        assert!(pairwise(&[], &line(2)).unwrap().is_empty());
    }

    #[test]
    fn is_bin_count_checked() {
        let signatures = vec![
            Signature::try_from(vec![1., 0.]).unwrap(),
            Signature::try_from(vec![1.]).unwrap(),
        ];
        assert!(matches!(
            pairwise(&signatures, &line(2)),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn is_rectangular_cost_rejected() {
        let signatures = vec![Signature::try_from(vec![1.]).unwrap()];
        let metric = CostMatrix::new(1, 2, vec![0., 1.]).unwrap();
        assert!(pairwise(&signatures, &metric).is_err());
    }

    #[test]
    fn is_symmetric_under_symmetric_cost() {
        let signatures = vec![
            Signature::try_from(vec![0.2, 0.3, 0.5, 0.0]).unwrap(),
            Signature::try_from(vec![0.0, 0.6, 0.1, 0.3]).unwrap(),
        ];
        let reversed = signatures.iter().rev().cloned().collect::<Vec<_>>();
        let forward = pairwise(&signatures, &line(4)).unwrap();
        let backward = pairwise(&reversed, &line(4)).unwrap();
        assert!((forward[0] - backward[0]).abs() < 1e-12);
    }
}
