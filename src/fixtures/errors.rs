use thiserror::Error;

use crate::{didkey::DidKeyError, proof};

/// Errors surfaced while generating or retrieving fixtures.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested fixture name is not in the registry
    #[error("fixture not found: {0}")]
    NotFound(String),
    /// The configured secret key seed could not be decoded
    #[error("invalid secret key seed: {0}")]
    InvalidSeed(DidKeyError),
    /// A generator failed to construct its proof
    #[error(transparent)]
    Proof(#[from] proof::Error),
    /// Credential (de)serialization error
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}
