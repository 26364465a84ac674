use super::cost::CostMatrix;
use super::error::Error;
use super::signature::Signature;
use crate::Arbitrary;
use crate::Energy;
use crate::Mass;

/// Unvalidated transport problem as a caller hands it over:
/// two weight buffers and a flat row-major cost buffer.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Problem {
    pub weight1: Vec<Mass>,
    pub weight2: Vec<Mass>,
    pub cost: Vec<Energy>,
}

impl Problem {
    /// Checks every buffer once, failing on the first bad entry.
    pub fn validate(self) -> Result<(Signature, Signature, CostMatrix), Error> {
        let source = Signature::labeled("weight1", self.weight1)?;
        let target = Signature::labeled("weight2", self.weight2)?;
        let metric = CostMatrix::new(source.len(), target.len(), self.cost)?;
        Ok((source, target, metric))
    }
}

impl From<(&[Mass], &[Mass], &[Energy])> for Problem {
    fn from((weight1, weight2, cost): (&[Mass], &[Mass], &[Energy])) -> Self {
        Self {
            weight1: weight1.to_vec(),
            weight2: weight2.to_vec(),
            cost: cost.to_vec(),
        }
    }
}

impl Arbitrary for Problem {
    fn random() -> Self {
        let weight1 = Vec::from(Signature::random());
        let weight2 = Vec::from(Signature::random());
        let cost = Vec::<Vec<Energy>>::from(CostMatrix::random(weight1.len(), weight2.len()))
            .into_iter()
            .flatten()
            .collect();
        Self {
            weight1,
            weight2,
            cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_first_violation_reported() {
        let problem = Problem {
            weight1: vec![-1.],
            weight2: vec![],
            cost: vec![],
        };
        let Err(Error::InvalidInput(message)) = problem.validate() else {
            panic!("expected invalid input");
        };
        assert!(message.starts_with("weight1[0]"));
    }

    #[test]
    fn is_cost_shape_checked() {
        let problem = Problem {
            weight1: vec![1., 0.],
            weight2: vec![0., 1.],
            cost: vec![0., 1., 1.],
        };
        assert!(matches!(problem.validate(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn is_json_readable() {
        let json = r#"{"weight1": [1, 0], "weight2": [0, 1], "cost": [0, 1, 1, 0]}"#;
        let problem = serde_json::from_str::<Problem>(json).unwrap();
        let (p, q, m) = problem.validate().unwrap();
        assert_eq!((p.len(), q.len()), (2, 2));
        assert_eq!(m.cost(0, 1), 1.);
    }

    #[test]
    fn is_random_valid() {
        for _ in 0..32 {
            assert!(Problem::random().validate().is_ok());
        }
    }
}
