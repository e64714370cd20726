//! Opaque model-state bags and conjugate-prior primitives for Bayesian mixture modeling.
//!
//! The two bag types are the stable boundary contract between the model
//! layer and whatever stores or transports model state (including bindings
//! from other languages); the models under [`models`] are the parts of this
//! crate that know what is inside them.
#[macro_use]
extern crate trackable;

pub use self::error::{Error, ErrorKind};

pub mod bag;
pub mod models;
pub mod transform;

mod error;

/// This crate specific `Result` type.
pub type Result<T> = std::result::Result<T, Error>;
