use sha2::{Digest, Sha256, Sha512};

/// Hash algorithm used by the digesting stage of the proof pipeline.
///
/// Conformant proofs use SHA-256; SHA-512 exists so a generator can produce
/// a proof over the wrong digest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DigestAlgorithm {
    /// SHA-256, the digest every EdDSA cryptosuite mandates.
    #[default]
    Sha256,
    /// SHA-512.
    Sha512,
}

impl DigestAlgorithm {
    /// Compute the digest of the input.
    ///
    /// Returns 32 bytes for SHA-256 and 64 bytes for SHA-512.
    pub fn digest(&self, bytes: &[u8]) -> Vec<u8> {
        match self {
            Self::Sha256 => Sha256::digest(bytes).to_vec(),
            Self::Sha512 => Sha512::digest(bytes).to_vec(),
        }
    }
}
