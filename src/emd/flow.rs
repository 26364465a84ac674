use crate::Mass;

/// One non-zero entry of a transport plan.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Arc {
    pub from: usize,
    pub to: usize,
    pub mass: Mass,
}

/// Mass moved from each source bin to each sink bin, row-major.
///
/// Only the solver produces these. Row sums never exceed the source
/// weights, column sums never exceed the sink weights, and the total is
/// the smaller of the two signature totals up to rounding.
#[derive(Debug, Clone, PartialEq)]
pub struct Flow {
    rows: usize,
    cols: usize,
    mass: Vec<Mass>,
}

impl Flow {
    pub(crate) fn zeroes(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            mass: vec![0.; rows * cols],
        }
    }
    pub(crate) fn set(&mut self, i: usize, j: usize, mass: Mass) {
        self.mass[i * self.cols + j] = mass;
    }
    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn get(&self, i: usize, j: usize) -> Mass {
        self.mass[i * self.cols + j]
    }
    pub fn row_sum(&self, i: usize) -> Mass {
        self.mass[i * self.cols..(i + 1) * self.cols].iter().sum()
    }
    pub fn col_sum(&self, j: usize) -> Mass {
        (0..self.rows).map(|i| self.get(i, j)).sum()
    }
    pub fn total(&self) -> Mass {
        self.mass.iter().sum()
    }
    /// Non-zero entries in row-major order.
    pub fn arcs(&self) -> impl Iterator<Item = Arc> + '_ {
        self.mass
            .iter()
            .enumerate()
            .filter(|(_, m)| **m > 0.)
            .map(|(k, m)| Arc {
                from: k / self.cols,
                to: k % self.cols,
                mass: *m,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_marginal_summed() {
        let mut flow = Flow::zeroes(2, 3);
        flow.set(0, 1, 0.25);
        flow.set(1, 1, 0.5);
        flow.set(1, 2, 0.25);
        assert_eq!(flow.row_sum(1), 0.75);
        assert_eq!(flow.col_sum(1), 0.75);
        assert_eq!(flow.total(), 1.);
    }

    #[test]
    fn is_arcs_sparse() {
        let mut flow = Flow::zeroes(2, 2);
        flow.set(1, 0, 2.);
        let arcs = flow.arcs().collect::<Vec<_>>();
        assert_eq!(
            arcs,
            vec![Arc {
                from: 1,
                to: 0,
                mass: 2.
            }]
        );
    }
}
