//! Traits for cryptographic operations.

use super::errors::Error;

/// The length of a 32-byte key material.
pub const BYTES_LENGTH_32: usize = 32;

/// A trait for types that hold key material bytes.
pub trait KeyMaterial {
    /// Returns the public key bytes.
    fn public_key_bytes(&self) -> Result<[u8; BYTES_LENGTH_32], Error>;

    /// Returns the secret key bytes.
    fn private_key_bytes(&self) -> Result<[u8; BYTES_LENGTH_32], Error>;
}

/// A trait for types that support deterministic key generation.
pub trait Generate: KeyMaterial {
    /// Generates a new key deterministically from the given 32-byte seed.
    fn new_with_seed(seed: &[u8]) -> Result<Self, Error>
    where
        Self: Sized;

    /// Builds a verify-only instance from an existing public key.
    fn from_public_key(public_key: &[u8; BYTES_LENGTH_32]) -> Result<Self, Error>
    where
        Self: Sized;
}

/// A trait for types that support sign and verify operations.
pub trait CoreSign {
    /// Performs a sign operation.
    fn sign(&self, payload: &[u8]) -> Result<Vec<u8>, Error>;

    /// Performs a verify operation.
    fn verify(&self, payload: &[u8], signature: &[u8]) -> Result<(), Error>;
}

/// A trait for keys that can be rendered as a multibase multicodec string.
pub trait ToMultikey {
    /// Returns the multikey representation of the public key.
    fn to_multikey(&self) -> String;
}
