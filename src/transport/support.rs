/// marker trait for any type that can index the bins
/// of a signature.
///
/// currently only implemented by `usize`, where bins are
/// positions in the weight vector and rows/columns of the cost matrix.
pub trait Support: Clone {}

impl Support for usize {}
