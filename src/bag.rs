//! Opaque serialized containers of model state.
//!
//! Both bag types wrap the same representation (an owned byte buffer) but
//! are deliberately distinct nominal types so that hyperparameters and
//! sufficient statistics cannot be mixed up at a call site. Code that did
//! not produce a bag must treat its contents as opaque and hand it back,
//! unmodified, to the model that understands it.
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Opaque serialized bag of a model's hyperparameters.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HyperparamBag(Vec<u8>);
impl HyperparamBag {
    /// Makes a bag from an already serialized byte sequence.
    pub fn new<B: Into<Vec<u8>>>(bytes: B) -> Self {
        Self(bytes.into())
    }

    /// Serializes a value into a new bag.
    pub fn from_value<T: Serialize>(value: &T) -> Result<Self> {
        let bytes = track!(serde_json::to_vec(value).map_err(Error::from))?;
        Ok(Self(bytes))
    }

    /// Deserializes the contents of this bag.
    ///
    /// # Errors
    ///
    /// If the contents were not produced for type `T`,
    /// an `ErrorKind::MalformedBag` error will be returned.
    pub fn to_value<T: DeserializeOwned>(&self) -> Result<T> {
        track!(serde_json::from_slice(&self.0).map_err(Error::from))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
impl From<Vec<u8>> for HyperparamBag {
    fn from(f: Vec<u8>) -> Self {
        Self(f)
    }
}
impl From<&[u8]> for HyperparamBag {
    fn from(f: &[u8]) -> Self {
        Self(f.to_vec())
    }
}
impl From<String> for HyperparamBag {
    fn from(f: String) -> Self {
        Self(f.into_bytes())
    }
}
impl From<&str> for HyperparamBag {
    fn from(f: &str) -> Self {
        Self(f.as_bytes().to_vec())
    }
}

/// Opaque serialized bag of a model's accumulated sufficient statistics.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SuffStatsBag(Vec<u8>);
impl SuffStatsBag {
    /// Makes a bag from an already serialized byte sequence.
    pub fn new<B: Into<Vec<u8>>>(bytes: B) -> Self {
        Self(bytes.into())
    }

    /// Serializes a value into a new bag.
    pub fn from_value<T: Serialize>(value: &T) -> Result<Self> {
        let bytes = track!(serde_json::to_vec(value).map_err(Error::from))?;
        Ok(Self(bytes))
    }

    /// Deserializes the contents of this bag.
    ///
    /// # Errors
    ///
    /// If the contents were not produced for type `T`,
    /// an `ErrorKind::MalformedBag` error will be returned.
    pub fn to_value<T: DeserializeOwned>(&self) -> Result<T> {
        track!(serde_json::from_slice(&self.0).map_err(Error::from))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
impl From<Vec<u8>> for SuffStatsBag {
    fn from(f: Vec<u8>) -> Self {
        Self(f)
    }
}
impl From<&[u8]> for SuffStatsBag {
    fn from(f: &[u8]) -> Self {
        Self(f.to_vec())
    }
}
impl From<String> for SuffStatsBag {
    fn from(f: String) -> Self {
        Self(f.into_bytes())
    }
}
impl From<&str> for SuffStatsBag {
    fn from(f: &str) -> Self {
        Self(f.as_bytes().to_vec())
    }
}
