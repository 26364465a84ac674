use super::balance::Balanced;
use super::flow::Flow;
use crate::Energy;
use crate::Mass;

/// A basic variable of the transportation tableau.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Cell {
    pub row: usize,
    pub col: usize,
    pub mass: Mass,
}

impl Cell {
    fn key(&self) -> (usize, usize) {
        (self.row, self.col)
    }
}

/// Spanning tree over `rows + cols` nodes whose edges are the basic cells.
///
/// Row `i` is node `i` and column `j` is node `rows + j`. A complete basis
/// holds exactly `rows + cols - 1` cells, some possibly carrying zero mass.
/// Cells are addressed by their slot in `cells`; a pivot overwrites the
/// leaving cell's slot with the entering one.
pub(crate) struct Basis {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    slots: Vec<Option<usize>>,
}

impl Basis {
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: Vec::with_capacity(rows + cols - 1),
            slots: vec![None; rows * cols],
        }
    }
    pub fn insert(&mut self, row: usize, col: usize, mass: Mass) {
        debug_assert!(self.slots[row * self.cols + col].is_none());
        self.slots[row * self.cols + col] = Some(self.cells.len());
        self.cells.push(Cell { row, col, mass });
    }
    #[cfg(test)]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
    pub fn is_basic(&self, row: usize, col: usize) -> bool {
        self.slots[row * self.cols + col].is_some()
    }
    pub fn is_complete(&self) -> bool {
        self.cells.len() == self.rows + self.cols - 1
    }

    /// Node adjacency as lists of cell slots.
    fn tree(&self) -> Vec<Vec<usize>> {
        let mut tree = vec![Vec::new(); self.rows + self.cols];
        for (k, cell) in self.cells.iter().enumerate() {
            tree[cell.row].push(k);
            tree[self.rows + cell.col].push(k);
        }
        tree
    }
    /// Node at the other end of a cell.
    fn across(&self, node: usize, k: usize) -> usize {
        let cell = self.cells[k];
        match node < self.rows {
            true => self.rows + cell.col,
            false => cell.row,
        }
    }

    /// Dual potentials with `u[0] = 0` and `u[i] + v[j] = cost(i, j)`
    /// along every basic cell.
    pub fn potentials(&self, problem: &Balanced) -> (Vec<Energy>, Vec<Energy>) {
        let ref tree = self.tree();
        let mut u = vec![0.; self.rows];
        let mut v = vec![0.; self.cols];
        let mut seen = vec![false; self.rows + self.cols];
        let mut stack = vec![0];
        seen[0] = true;
        while let Some(node) = stack.pop() {
            for &k in tree[node].iter() {
                let next = self.across(node, k);
                if seen[next] {
                    continue;
                }
                seen[next] = true;
                let Cell { row, col, .. } = self.cells[k];
                match next < self.rows {
                    true => u[row] = problem.cost(row, col) - v[col],
                    false => v[col] = problem.cost(row, col) - u[row],
                }
                stack.push(next);
            }
        }
        debug_assert!(seen.iter().all(|&s| s), "basis does not span");
        (u, v)
    }

    /// Non-basic cell with the most negative reduced cost below `-epsilon`.
    /// Scanning row-major and replacing only on strict improvement keeps the
    /// smallest `(row, col)` among ties.
    pub fn entering(
        &self,
        problem: &Balanced,
        u: &[Energy],
        v: &[Energy],
        epsilon: Energy,
    ) -> Option<(usize, usize, Energy)> {
        let mut best = None;
        let mut least = -epsilon;
        for i in 0..self.rows {
            for j in 0..self.cols {
                if self.is_basic(i, j) {
                    continue;
                }
                let reduced = problem.cost(i, j) - u[i] - v[j];
                if reduced < least {
                    least = reduced;
                    best = Some((i, j, reduced));
                }
            }
        }
        best
    }

    /// Tree path from column `col` back to row `row`, as cell slots.
    /// Together with the cell `(row, col)` it closes the pivot cycle.
    fn cycle(&self, row: usize, col: usize) -> Vec<usize> {
        let ref tree = self.tree();
        let mut parent = vec![None; self.rows + self.cols];
        let mut seen = vec![false; self.rows + self.cols];
        let mut stack = vec![row];
        seen[row] = true;
        while let Some(node) = stack.pop() {
            for &k in tree[node].iter() {
                let next = self.across(node, k);
                if !seen[next] {
                    seen[next] = true;
                    parent[next] = Some(k);
                    stack.push(next);
                }
            }
        }
        let mut path = Vec::new();
        let mut node = self.rows + col;
        while let Some(k) = parent[node] {
            path.push(k);
            node = self.across(node, k);
        }
        debug_assert!(node == row, "entering cell not reachable in basis");
        path
    }

    /// Brings `(row, col)` into the basis.
    ///
    /// Cells at even positions along the cycle path lose mass and cells at
    /// odd positions gain it. The leaving cell is the losing cell with the
    /// least mass, ties going to the smallest `(row, col)`; that mass is the
    /// step size θ, returned alongside the leaving cell. θ may be zero.
    pub fn pivot(&mut self, row: usize, col: usize) -> (Cell, Mass) {
        let path = self.cycle(row, col);
        let mut leaving = path[0];
        for &k in path.iter().step_by(2).skip(1) {
            let (a, b) = (self.cells[k], self.cells[leaving]);
            if a.mass < b.mass || (a.mass == b.mass && a.key() < b.key()) {
                leaving = k;
            }
        }
        let theta = self.cells[leaving].mass;
        for (n, &k) in path.iter().enumerate() {
            let ref mut mass = self.cells[k].mass;
            match n % 2 {
                0 => *mass = Mass::max(*mass - theta, 0.),
                _ => *mass += theta,
            }
        }
        let exit = self.cells[leaving];
        self.slots[exit.row * self.cols + exit.col] = None;
        self.slots[row * self.cols + col] = Some(leaving);
        self.cells[leaving] = Cell {
            row,
            col,
            mass: theta,
        };
        (exit, theta)
    }

    /// Flow restricted to the real (unpadded) bins.
    pub fn flow(&self, rows: usize, cols: usize) -> Flow {
        let mut flow = Flow::zeroes(rows, cols);
        self.cells
            .iter()
            .filter(|c| c.row < rows && c.col < cols)
            .for_each(|c| flow.set(c.row, c.col, c.mass));
        flow
    }

    /// Unnormalized transport cost over every basic cell.
    #[cfg(test)]
    pub fn work(&self, problem: &Balanced) -> Energy {
        self.cells
            .iter()
            .map(|c| c.mass * problem.cost(c.row, c.col))
            .sum()
    }
}
