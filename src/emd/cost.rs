use super::error::Error;
use crate::Energy;
use crate::transport::Measure;

/// Ground cost between every source bin and every sink bin,
/// stored row-major so that `cost(i, j) == costs[i * cols + j]`.
///
/// Entries are finite and non-negative, and the table is never empty.
/// Nothing here checks symmetry or the triangle inequality.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<Vec<Energy>>", into = "Vec<Vec<Energy>>")]
pub struct CostMatrix {
    rows: usize,
    cols: usize,
    costs: Vec<Energy>,
}

impl CostMatrix {
    /// Validates a flat row-major buffer against the expected shape.
    pub fn new(rows: usize, cols: usize, costs: Vec<Energy>) -> Result<Self, Error> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidInput(format!(
                "cost matrix must be non-empty, got {}x{}",
                rows, cols
            )));
        }
        match rows.checked_mul(cols) {
            Some(n) if n == costs.len() => costs
                .into_iter()
                .enumerate()
                .map(|(i, c)| Error::check("cost", i, c))
                .collect::<Result<Vec<_>, _>>()
                .map(|costs| Self { rows, cols, costs }),
            _ => Err(Error::InvalidInput(format!(
                "cost has {} entries, expected {}x{}",
                costs.len(),
                rows,
                cols
            ))),
        }
    }
    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn cost(&self, i: usize, j: usize) -> Energy {
        self.costs[i * self.cols + j]
    }
    pub fn row(&self, i: usize) -> &[Energy] {
        &self.costs[i * self.cols..(i + 1) * self.cols]
    }
    /// Largest entry, used to scale the optimality tolerance.
    pub fn max(&self) -> Energy {
        self.costs.iter().copied().fold(0., Energy::max)
    }
    /// Random costs in [0, 1) with a zero diagonal.
    pub fn random(rows: usize, cols: usize) -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        let costs = (0..rows * cols)
            .map(|k| match k / cols == k % cols {
                true => 0.,
                false => rng.random_range(0.0..1.0),
            })
            .collect();
        Self { rows, cols, costs }
    }
}

impl Measure for CostMatrix {
    type X = usize;
    type Y = usize;
    fn distance(&self, x: &usize, y: &usize) -> Energy {
        self.cost(*x, *y)
    }
}

impl TryFrom<Vec<Vec<Energy>>> for CostMatrix {
    type Error = Error;
    fn try_from(table: Vec<Vec<Energy>>) -> Result<Self, Self::Error> {
        let rows = table.len();
        let cols = table.first().map(Vec::len).unwrap_or(0);
        if let Some(i) = table.iter().position(|row| row.len() != cols) {
            return Err(Error::InvalidInput(format!(
                "cost row {} has {} entries, expected {}",
                i,
                table[i].len(),
                cols
            )));
        }
        Self::new(rows, cols, table.into_iter().flatten().collect())
    }
}

impl From<CostMatrix> for Vec<Vec<Energy>> {
    fn from(matrix: CostMatrix) -> Self {
        matrix
            .costs
            .chunks(matrix.cols)
            .map(<[Energy]>::to_vec)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_row_major() {
        let matrix = CostMatrix::new(2, 3, vec![0., 1., 2., 3., 4., 5.]).unwrap();
        assert_eq!(matrix.cost(0, 2), 2.);
        assert_eq!(matrix.cost(1, 0), 3.);
        assert_eq!(matrix.row(1), &[3., 4., 5.]);
        assert_eq!(matrix.distance(&1, &2), 5.);
        assert_eq!(matrix.max(), 5.);
    }

    #[test]
    fn is_shape_mismatch_rejected() {
        assert!(matches!(
            CostMatrix::new(2, 2, vec![0., 1., 1.]),
            Err(Error::InvalidInput(_))
        ));
        assert!(CostMatrix::new(0, 2, vec![]).is_err());
        assert!(CostMatrix::new(usize::MAX, 2, vec![0.]).is_err());
    }

    #[test]
    fn is_negative_cost_rejected() {
        assert!(CostMatrix::new(1, 2, vec![0., -1.]).is_err());
        assert!(CostMatrix::new(1, 2, vec![0., f64::NAN]).is_err());
    }

    #[test]
    fn is_ragged_table_rejected() {
        let table = vec![vec![0., 1.], vec![1.]];
        assert!(CostMatrix::try_from(table).is_err());
    }

    #[test]
    fn is_table_shape_preserved() {
        let matrix: CostMatrix = serde_json::from_str("[[0, 1, 2], [1, 0, 1]]").unwrap();
        assert_eq!((matrix.rows(), matrix.cols()), (2, 3));
        let table = Vec::<Vec<Energy>>::from(matrix);
        assert_eq!(table, vec![vec![0., 1., 2.], vec![1., 0., 1.]]);
    }

    #[test]
    fn is_random_diagonal_zero() {
        let matrix = CostMatrix::random(4, 3);
        for i in 0..3 {
            assert_eq!(matrix.cost(i, i), 0.);
        }
        assert!(matrix.max() < 1.);
    }
}
