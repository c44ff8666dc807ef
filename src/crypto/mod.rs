//! Cryptographic primitives for fixture generation.
//!
//! Provides Ed25519 key pairs with deterministic seed derivation, the
//! pluggable digest used by the proof pipeline, and the common traits for
//! key material, signing and multikey export.

mod digest;
mod ed25519;
mod errors;
mod traits;

pub use digest::DigestAlgorithm;
pub use ed25519::{Ed25519KeyPair, MULTICODEC_ED25519_PUB};
pub use errors::Error;
pub use traits::{CoreSign, Generate, KeyMaterial, ToMultikey, BYTES_LENGTH_32};
