//! Beta-Bernoulli conjugate pair.
use crate::bag::{HyperparamBag, SuffStatsBag};
use crate::models::{Group, Shared};
use crate::{ErrorKind, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use statrs::function::gamma::ln_gamma;

/// Hyperparameters of a Beta-Bernoulli model: the two shape parameters of
/// the Beta prior on the heads probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BetaBernoulli {
    alpha: f64,
    beta: f64,
}
impl BetaBernoulli {
    /// Makes a `BetaBernoulli` with the given shape parameters.
    ///
    /// # Errors
    ///
    /// If either parameter is non-finite or non-positive,
    /// an `ErrorKind::InvalidInput` error will be returned.
    pub fn new(alpha: f64, beta: f64) -> Result<Self> {
        track_assert!(alpha.is_finite() && alpha > 0.0, ErrorKind::InvalidInput; alpha);
        track_assert!(beta.is_finite() && beta > 0.0, ErrorKind::InvalidInput; beta);
        Ok(Self { alpha, beta })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    fn ln_beta_fn(a: f64, b: f64) -> f64 {
        ln_gamma(a) + ln_gamma(b) - ln_gamma(a + b)
    }
}
impl Shared for BetaBernoulli {
    fn from_bag(bag: &HyperparamBag) -> Result<Self> {
        let raw: BetaBernoulli = track!(bag.to_value())?;
        track!(Self::new(raw.alpha, raw.beta))
    }

    fn to_bag(&self) -> Result<HyperparamBag> {
        track!(HyperparamBag::from_value(self))
    }
}

/// Sufficient statistics of one group: the head and tail counts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetaBernoulliGroup {
    heads: u64,
    tails: u64,
}
impl BetaBernoulliGroup {
    pub fn heads(&self) -> u64 {
        self.heads
    }

    pub fn tails(&self) -> u64 {
        self.tails
    }

    /// Returns the posterior predictive heads probability.
    pub fn heads_probability(&self, shared: &BetaBernoulli) -> f64 {
        let a = shared.alpha() + self.heads as f64;
        let b = shared.beta() + self.tails as f64;
        a / (a + b)
    }

    /// Samples a value from the posterior predictive.
    pub fn sample_value<R: Rng + ?Sized>(&self, shared: &BetaBernoulli, rng: &mut R) -> bool {
        rng.gen_bool(self.heads_probability(shared))
    }
}
impl Group for BetaBernoulliGroup {
    type Shared = BetaBernoulli;
    type Value = bool;

    fn new(_shared: &Self::Shared) -> Self {
        Self::default()
    }

    fn add_value(&mut self, _shared: &Self::Shared, value: &Self::Value) -> Result<()> {
        if *value {
            self.heads += 1;
        } else {
            self.tails += 1;
        }
        Ok(())
    }

    fn remove_value(&mut self, _shared: &Self::Shared, value: &Self::Value) -> Result<()> {
        if *value {
            track_assert!(self.heads > 0, ErrorKind::InvalidInput);
            self.heads -= 1;
        } else {
            track_assert!(self.tails > 0, ErrorKind::InvalidInput);
            self.tails -= 1;
        }
        Ok(())
    }

    fn merge(&mut self, _shared: &Self::Shared, source: &Self) {
        self.heads += source.heads;
        self.tails += source.tails;
    }

    fn score_value(&self, shared: &Self::Shared, value: &Self::Value) -> Result<f64> {
        let p = self.heads_probability(shared);
        if *value {
            Ok(p.ln())
        } else {
            Ok((1.0 - p).ln())
        }
    }

    fn score_data(&self, shared: &Self::Shared) -> f64 {
        let a = shared.alpha();
        let b = shared.beta();
        BetaBernoulli::ln_beta_fn(a + self.heads as f64, b + self.tails as f64)
            - BetaBernoulli::ln_beta_fn(a, b)
    }

    fn from_bag(_shared: &Self::Shared, bag: &SuffStatsBag) -> Result<Self> {
        track!(bag.to_value())
    }

    fn to_bag(&self) -> Result<SuffStatsBag> {
        track!(SuffStatsBag::from_value(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trackable::result::TestResult;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-10, "{} != {}", a, b);
    }

    #[test]
    fn rejects_bad_shapes() {
        assert!(BetaBernoulli::new(0.0, 1.0).is_err());
        assert!(BetaBernoulli::new(1.0, -2.0).is_err());
        assert!(BetaBernoulli::new(std::f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn uniform_prior_is_a_fair_coin() -> TestResult {
        let shared = track!(BetaBernoulli::new(1.0, 1.0))?;
        let group = BetaBernoulliGroup::new(&shared);
        assert_close(track!(group.score_value(&shared, &true))?, 0.5f64.ln());
        assert_close(track!(group.score_value(&shared, &false))?, 0.5f64.ln());
        assert_close(group.score_data(&shared), 0.0);
        Ok(())
    }

    #[test]
    fn score_data_matches_chain_rule() -> TestResult {
        // The marginal likelihood of a sequence equals the product of the
        // successive posterior predictives.
        let shared = track!(BetaBernoulli::new(0.7, 2.3))?;
        let mut group = BetaBernoulliGroup::new(&shared);
        let data = [true, true, false, true, false];

        let mut chained = 0.0;
        for value in &data {
            chained += track!(group.score_value(&shared, value))?;
            track!(group.add_value(&shared, value))?;
        }
        assert_close(group.score_data(&shared), chained);
        Ok(())
    }

    #[test]
    fn add_then_remove_is_identity() -> TestResult {
        let shared = track!(BetaBernoulli::new(2.0, 2.0))?;
        let mut group = BetaBernoulliGroup::new(&shared);
        track!(group.add_value(&shared, &true))?;
        track!(group.add_value(&shared, &false))?;
        track!(group.remove_value(&shared, &false))?;
        assert_eq!((group.heads(), group.tails()), (1, 0));
        assert!(group.remove_value(&shared, &false).is_err());
        Ok(())
    }

    #[test]
    fn merge_adds_counts() -> TestResult {
        let shared = track!(BetaBernoulli::new(1.0, 1.0))?;
        let mut a = BetaBernoulliGroup::new(&shared);
        track!(a.add_value(&shared, &true))?;
        let mut b = BetaBernoulliGroup::new(&shared);
        track!(b.add_value(&shared, &false))?;
        track!(b.add_value(&shared, &false))?;
        a.merge(&shared, &b);
        assert_eq!((a.heads(), a.tails()), (1, 2));
        Ok(())
    }

    #[test]
    fn bags_round_trip_both_halves() -> TestResult {
        let shared = track!(BetaBernoulli::new(0.5, 1.5))?;
        let mut group = BetaBernoulliGroup::new(&shared);
        track!(group.add_value(&shared, &true))?;
        track!(group.add_value(&shared, &true))?;

        let shared2 = track!(BetaBernoulli::from_bag(&track!(shared.to_bag())?))?;
        let group2 = track!(BetaBernoulliGroup::from_bag(
            &shared2,
            &track!(group.to_bag())?
        ))?;
        assert_eq!(shared2, shared);
        assert_eq!(group2, group);
        Ok(())
    }

    #[test]
    fn sampling_follows_the_posterior() -> TestResult {
        let shared = track!(BetaBernoulli::new(1.0, 1.0))?;
        let mut group = BetaBernoulliGroup::new(&shared);
        for _ in 0..1000 {
            track!(group.add_value(&shared, &true))?;
        }

        // Posterior heads probability is 1001/1002.
        let mut rng = rand::thread_rng();
        let heads = (0..100)
            .filter(|_| group.sample_value(&shared, &mut rng))
            .count();
        assert!(heads > 80);
        Ok(())
    }
}
