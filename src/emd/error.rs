/// Errors that can occur while computing a transport distance.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A weight or cost buffer was empty, mis-sized, negative, or non-finite.
    InvalidInput(String),
    /// The simplex exhausted its pivot budget without certifying optimality.
    NumericalFailure(usize),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(s) => write!(f, "invalid input: {}", s),
            Self::NumericalFailure(n) => {
                write!(f, "numerical failure: no optimum after {} pivots", n)
            }
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Checks that a single weight or cost entry is usable.
    pub(crate) fn check(name: &str, index: usize, value: f64) -> Result<f64, Self> {
        if !value.is_finite() {
            Err(Self::InvalidInput(format!("{}[{}] is not finite: {}", name, index, value)))
        } else if value < 0. {
            Err(Self::InvalidInput(format!("{}[{}] is negative: {}", name, index, value)))
        } else {
            Ok(value)
        }
    }
}
