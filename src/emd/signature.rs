use super::error::Error;
use crate::Arbitrary;
use crate::Mass;
use crate::transport::Density;

/// An immutable weighted distribution over `len()` bins.
///
/// Every weight is finite and non-negative, and there is at least one bin.
/// These invariants are established once by `TryFrom` and never rechecked.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<Mass>", into = "Vec<Mass>")]
pub struct Signature(Vec<Mass>);

impl Signature {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn weight(&self, i: usize) -> Mass {
        self.0[i]
    }
    pub fn weights(&self) -> &[Mass] {
        &self.0
    }
    pub fn total(&self) -> Mass {
        self.0.iter().sum()
    }
    /// Multiplies every weight by `k`. Non-positive or non-finite factors
    /// would break the weight invariants and are rejected.
    pub fn scale(&self, k: Mass) -> Result<Self, Error> {
        if k.is_finite() && k > 0. {
            Self::labeled("weight", self.0.iter().map(|w| w * k).collect())
        } else {
            Err(Error::InvalidInput(format!("scale factor must be positive: {}", k)))
        }
    }
    /// Validates a weight buffer, naming it in any error.
    pub fn labeled(name: &str, weights: Vec<Mass>) -> Result<Self, Error> {
        if weights.is_empty() {
            return Err(Error::InvalidInput(format!("{} is empty", name)));
        }
        let signature = weights
            .into_iter()
            .enumerate()
            .map(|(i, w)| Error::check(name, i, w))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)?;
        match signature.total().is_finite() {
            true => Ok(signature),
            false => Err(Error::InvalidInput(format!("{} total overflows", name))),
        }
    }
}

impl TryFrom<Vec<Mass>> for Signature {
    type Error = Error;
    fn try_from(weights: Vec<Mass>) -> Result<Self, Self::Error> {
        Self::labeled("weight", weights)
    }
}

impl TryFrom<&[Mass]> for Signature {
    type Error = Error;
    fn try_from(weights: &[Mass]) -> Result<Self, Self::Error> {
        Self::try_from(weights.to_vec())
    }
}

impl From<Signature> for Vec<Mass> {
    fn from(signature: Signature) -> Self {
        signature.0
    }
}

impl Density for Signature {
    type Support = usize;
    fn density(&self, x: &usize) -> Mass {
        self.0.get(*x).copied().unwrap_or(0.)
    }
    fn support(&self) -> impl Iterator<Item = usize> {
        0..self.0.len()
    }
    fn total(&self) -> Mass {
        Signature::total(self)
    }
}

impl Arbitrary for Signature {
    /// between 1 and 8 bins, roughly a quarter of them empty
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        let n = rng.random_range(1..=8);
        let weights = (0..n)
            .map(|_| match rng.random_bool(0.25) {
                true => 0.,
                false => rng.random_range(0.0..1.0),
            })
            .collect();
        Self(weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_empty_rejected() {
        assert!(matches!(
            Signature::try_from(Vec::<Mass>::new()),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn is_negative_rejected() {
        assert!(matches!(
            Signature::try_from(vec![0.5, -0.1]),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn is_infinite_rejected() {
        assert!(Signature::try_from(vec![f64::INFINITY]).is_err());
    }

    #[test]
    fn is_overflowing_total_rejected() {
        assert!(matches!(
            Signature::try_from(vec![f64::MAX, f64::MAX]),
            Err(Error::InvalidInput(_))
        ));
        let signature = Signature::try_from(vec![f64::MAX]).unwrap();
        assert!(signature.scale(2.).is_err());
    }

    #[test]
    fn is_zero_weight_accepted() {
        let signature = Signature::try_from(vec![0., 0.]).unwrap();
        assert_eq!(signature.len(), 2);
        assert_eq!(signature.total(), 0.);
    }

    #[test]
    fn is_density_out_of_range_zero() {
        let signature = Signature::try_from(vec![1., 2.]).unwrap();
        assert_eq!(signature.density(&5), 0.);
        assert_eq!(signature.support().count(), 2);
    }

    #[test]
    fn is_scale_applied() {
        let signature = Signature::try_from(vec![1., 2.]).unwrap();
        assert_eq!(signature.scale(3.).unwrap().weights(), &[3., 6.]);
        assert!(signature.scale(0.).is_err());
        assert!(signature.scale(f64::NAN).is_err());
    }

    #[test]
    fn is_deserialization_validated() {
        assert!(serde_json::from_str::<Signature>("[0.5, 0.5]").is_ok());
        assert!(serde_json::from_str::<Signature>("[0.5, -0.5]").is_err());
        assert!(serde_json::from_str::<Signature>("[]").is_err());
    }

    #[test]
    fn is_random_valid() {
        for _ in 0..32 {
            let signature = Signature::random();
            assert!(Signature::try_from(signature.weights()).is_ok());
        }
    }
}
