//! Conjugate-prior models.
use crate::bag::{HyperparamBag, SuffStatsBag};
use crate::Result;

pub mod bb;
pub mod dm;

/// Hyperparameters shared by every group of a model.
pub trait Shared: Sized {
    /// Restores the hyperparameters from an opaque bag.
    ///
    /// # Errors
    ///
    /// If the bag was not produced by `to_bag` of the same model,
    /// an `ErrorKind::MalformedBag` error will be returned.
    fn from_bag(bag: &HyperparamBag) -> Result<Self>;

    /// Serializes the hyperparameters into an opaque bag.
    fn to_bag(&self) -> Result<HyperparamBag>;
}

/// Sufficient statistics accumulated by one group of a model.
///
/// A group starts empty, absorbs values with `add_value`, and can score
/// both a hypothetical next value (the posterior predictive) and the data
/// it has absorbed so far (the log marginal likelihood). `add_value` and
/// `remove_value` are exact inverses, which is what makes groups usable
/// from Gibbs-style samplers that move values between groups.
pub trait Group: Sized {
    /// The shared hyperparameters this group is conditioned on.
    type Shared: Shared;

    /// The value type absorbed by this group.
    type Value;

    /// Makes a new, empty group.
    fn new(shared: &Self::Shared) -> Self;

    /// Absorbs `value` into the sufficient statistics.
    fn add_value(&mut self, shared: &Self::Shared, value: &Self::Value) -> Result<()>;

    /// Removes a previously absorbed `value`.
    ///
    /// # Errors
    ///
    /// If `value` cannot have been absorbed by this group (the statistics
    /// would go negative), an `ErrorKind::InvalidInput` error will be
    /// returned.
    fn remove_value(&mut self, shared: &Self::Shared, value: &Self::Value) -> Result<()>;

    /// Absorbs every value held by `source` into this group.
    fn merge(&mut self, shared: &Self::Shared, source: &Self);

    /// Returns the posterior predictive log density of `value` given
    /// everything this group has absorbed.
    fn score_value(&self, shared: &Self::Shared, value: &Self::Value) -> Result<f64>;

    /// Returns the log marginal likelihood of everything this group has
    /// absorbed.
    fn score_data(&self, shared: &Self::Shared) -> f64;

    /// Restores a group from an opaque bag.
    fn from_bag(shared: &Self::Shared, bag: &SuffStatsBag) -> Result<Self>;

    /// Serializes the sufficient statistics into an opaque bag.
    fn to_bag(&self) -> Result<SuffStatsBag>;
}
