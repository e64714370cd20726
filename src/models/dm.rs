//! Dirichlet-Multinomial conjugate pair.
use crate::bag::{HyperparamBag, SuffStatsBag};
use crate::models::{Group, Shared};
use crate::{Error, ErrorKind, Result};
use rand::distributions::Distribution;
use rand::Rng;
use serde::{Deserialize, Serialize};
use statrs::distribution::Gamma;
use statrs::function::gamma::ln_gamma;
use trackable::error::ErrorKindExt;

/// Hyperparameters of a Dirichlet-Multinomial model: the concentration
/// vector of the Dirichlet prior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirichletMultinomial {
    alphas: Vec<f64>,
}
impl DirichletMultinomial {
    /// Makes a `DirichletMultinomial` with the given concentration vector.
    ///
    /// # Errors
    ///
    /// If `alphas` is empty or contains a non-finite or non-positive
    /// entry, an `ErrorKind::InvalidInput` error will be returned.
    pub fn new(alphas: Vec<f64>) -> Result<Self> {
        track_assert!(!alphas.is_empty(), ErrorKind::InvalidInput);
        for &a in &alphas {
            track_assert!(a.is_finite() && a > 0.0, ErrorKind::InvalidInput; a);
        }
        Ok(Self { alphas })
    }

    /// Returns the dimensionality of the value space.
    pub fn dim(&self) -> usize {
        self.alphas.len()
    }

    pub fn alphas(&self) -> &[f64] {
        &self.alphas
    }

    fn alpha_sum(&self) -> f64 {
        self.alphas.iter().sum()
    }
}
impl Shared for DirichletMultinomial {
    fn from_bag(bag: &HyperparamBag) -> Result<Self> {
        let raw: DirichletMultinomial = track!(bag.to_value())?;
        track!(Self::new(raw.alphas))
    }

    fn to_bag(&self) -> Result<HyperparamBag> {
        track!(HyperparamBag::from_value(self))
    }
}

/// Sufficient statistics of one group: per-dimension counts plus the
/// running multinomial coefficient term of the absorbed rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirichletMultinomialGroup {
    counts: Vec<u64>,
    ratio: f64,
}
impl DirichletMultinomialGroup {
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    fn count_sum(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Samples a value with `total` trials from the posterior predictive.
    ///
    /// The posterior Dirichlet is drawn via normalized Gamma variates and
    /// the trials via categorical draws from it.
    pub fn sample_value<R: Rng + ?Sized>(
        &self,
        shared: &DirichletMultinomial,
        total: u64,
        rng: &mut R,
    ) -> Result<Vec<u64>> {
        let mut weights = Vec::with_capacity(self.counts.len());
        for (&a, &n) in shared.alphas().iter().zip(&self.counts) {
            let gamma = track!(Gamma::new(a + n as f64, 1.0)
                .map_err(|e| Error::from(ErrorKind::Bug.cause(e))))?;
            weights.push(gamma.sample(rng));
        }
        let weight_sum = weights.iter().sum::<f64>();
        track_assert!(weight_sum > 0.0, ErrorKind::Bug);

        let mut value = vec![0; self.counts.len()];
        for _ in 0..total {
            let mut u = rng.gen::<f64>() * weight_sum;
            let mut chosen = value.len() - 1;
            for (i, &w) in weights.iter().enumerate() {
                u -= w;
                if u < 0.0 {
                    chosen = i;
                    break;
                }
            }
            value[chosen] += 1;
        }
        Ok(value)
    }
}
impl Group for DirichletMultinomialGroup {
    type Shared = DirichletMultinomial;
    type Value = Vec<u64>;

    fn new(shared: &Self::Shared) -> Self {
        Self {
            counts: vec![0; shared.dim()],
            ratio: 0.0,
        }
    }

    fn add_value(&mut self, shared: &Self::Shared, value: &Self::Value) -> Result<()> {
        track_assert_eq!(value.len(), shared.dim(), ErrorKind::InvalidInput);
        let mut total = 0;
        for (n, &x) in self.counts.iter_mut().zip(value) {
            total += x;
            *n += x;
            self.ratio -= ln_gamma(x as f64 + 1.0);
        }
        self.ratio += ln_gamma(total as f64 + 1.0);
        Ok(())
    }

    fn remove_value(&mut self, shared: &Self::Shared, value: &Self::Value) -> Result<()> {
        track_assert_eq!(value.len(), shared.dim(), ErrorKind::InvalidInput);
        for (n, &x) in self.counts.iter().zip(value) {
            track_assert!(*n >= x, ErrorKind::InvalidInput; *n, x);
        }
        let mut total = 0;
        for (n, &x) in self.counts.iter_mut().zip(value) {
            total += x;
            *n -= x;
            self.ratio += ln_gamma(x as f64 + 1.0);
        }
        self.ratio -= ln_gamma(total as f64 + 1.0);
        Ok(())
    }

    fn merge(&mut self, _shared: &Self::Shared, source: &Self) {
        debug_assert_eq!(self.counts.len(), source.counts.len());
        for (n, &m) in self.counts.iter_mut().zip(&source.counts) {
            *n += m;
        }
        self.ratio += source.ratio;
    }

    fn score_value(&self, shared: &Self::Shared, value: &Self::Value) -> Result<f64> {
        track_assert_eq!(value.len(), shared.dim(), ErrorKind::InvalidInput);
        let x_sum: u64 = value.iter().sum();
        let a_sum = shared.alpha_sum();
        let n_sum = self.count_sum();
        let mut score = 0.0;
        for ((&x, &a), &n) in value.iter().zip(shared.alphas()).zip(&self.counts) {
            score -= ln_gamma(x as f64 + 1.0);
            score += x as f64 * (a + n as f64).ln();
        }
        score += ln_gamma(x_sum as f64 + 1.0);
        score -= x_sum as f64 * (a_sum + n_sum as f64).ln();
        Ok(score)
    }

    fn score_data(&self, shared: &Self::Shared) -> f64 {
        let a_sum = shared.alpha_sum();
        let n_sum = self.count_sum();
        let mut score = self.ratio;
        for (&a, &n) in shared.alphas().iter().zip(&self.counts) {
            score += ln_gamma(n as f64 + a) - ln_gamma(a);
        }
        score += ln_gamma(a_sum) - ln_gamma(a_sum + n_sum as f64);
        score
    }

    fn from_bag(shared: &Self::Shared, bag: &SuffStatsBag) -> Result<Self> {
        let raw: DirichletMultinomialGroup = track!(bag.to_value())?;
        track_assert_eq!(raw.counts.len(), shared.dim(), ErrorKind::MalformedBag);
        track_assert!(raw.ratio.is_finite(), ErrorKind::MalformedBag; raw.ratio);
        Ok(raw)
    }

    fn to_bag(&self) -> Result<SuffStatsBag> {
        track!(SuffStatsBag::from_value(self))
    }
}
