use thiserror::Error;

use crate::{crypto, didkey::DidKeyError};

/// Errors raised while constructing or checking data integrity proofs.
#[derive(Debug, Error)]
pub enum Error {
    /// The canonicalization collaborator rejected the document
    #[error("canonicalization failed: {0}")]
    Canonicalization(String),
    /// The document to sign or verify is not a JSON object
    #[error("document is not a JSON object")]
    NotAnObject,
    /// The secured document carries no proof member
    #[error("document has no proof")]
    MissingProof,
    /// The proof carries no proofValue
    #[error("proof has no proofValue")]
    MissingProofValue,
    /// The proof carries no verificationMethod
    #[error("proof has no verificationMethod")]
    MissingVerificationMethod,
    /// The proofValue is multibase, but not base58-btc
    #[error("proofValue is not base58-btc multibase")]
    InvalidProofValueEncoding,
    /// The proofValue string is not valid multibase
    #[error(transparent)]
    Multibase(#[from] multibase::Error),
    /// The verification method could not be resolved to a public key
    #[error(transparent)]
    DidKey(#[from] DidKeyError),
    /// Key material or signature error
    #[error(transparent)]
    Key(#[from] crypto::Error),
    /// Proof or document (de)serialization error
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}
