use thiserror::Error;

/// The set of errors that can occur during key operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Seed material is missing or has the wrong length
    #[error("invalid seed")]
    InvalidSeed,
    /// Key length differs from the 32 bytes Ed25519 requires
    #[error("invalid key length")]
    InvalidKeyLength,
    /// No secret key available for a signing operation
    #[error("invalid secret key")]
    InvalidSecretKey,
    /// The bytes do not decode to a curve point
    #[error("invalid public key")]
    InvalidPublicKey,
    /// Signature bytes are malformed
    #[error("cannot retrieve signature")]
    CanNotRetrieveSignature,
    /// Error while signing
    #[error("signature error")]
    SignatureError,
    /// Error while verifying
    #[error("verification error")]
    VerificationError,
}
