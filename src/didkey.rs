//! `did:key` support for Ed25519 multikeys.
//!
//! Covers the three codec concerns the fixture generator needs: decoding a
//! multibase-wrapped secret key seed, converting public keys to and from
//! their `z6Mk…` multikey form, and deriving the `did:key` controller and
//! verification method identifiers a signer publishes.

use multibase::Base::Base58Btc;
use thiserror::Error;
use zeroize::Zeroizing;

use crate::crypto::{
    self, CoreSign, Ed25519KeyPair, Generate, ToMultikey, BYTES_LENGTH_32, MULTICODEC_ED25519_PUB,
};

// Multihash framing of an exported seed: identity hash code, then length.
const SEED_MULTIHASH_HEADER: [u8; 2] = [0x00, 0x20];

/// Errors raised while decoding key identifiers or seed material.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DidKeyError {
    /// The identifier is not a `did:key` URL
    #[error("invalidDid")]
    InvalidDid,
    /// The string is not valid multibase
    #[error("invalidMultibase")]
    InvalidMultibase,
    /// The multicodec prefix does not identify an Ed25519 public key
    #[error("unsupportedMulticodec")]
    UnsupportedMulticodec,
    /// Decoded key material has the wrong length
    #[error("invalidPublicKeyLength")]
    InvalidPublicKeyLength,
    /// The seed is not a multihash-framed 32-byte value
    #[error("invalidSecretKeySeed")]
    InvalidSecretKeySeed,
    /// Key material error
    #[error(transparent)]
    Key(#[from] crypto::Error),
}

/// A deterministic signer bound to its `did:key` identifiers.
///
/// The controller DID doubles as the credential issuer, and `id` is the
/// fragment-qualified verification method every generated proof points at.
#[derive(Debug)]
pub struct Multikey {
    /// The underlying Ed25519 key pair.
    pub key_pair: Ed25519KeyPair,
    /// Multibase multicodec form of the public key (`z6Mk…`).
    pub public_key_multibase: String,
    /// The controller DID (`did:key:z6Mk…`).
    pub controller: String,
    /// The verification method id (`did:key:z6Mk…#z6Mk…`).
    pub id: String,
}

impl Multikey {
    /// Derive the signer from a multibase-encoded secret key seed.
    pub fn from_seed_multibase(seed_multibase: &str) -> Result<Self, DidKeyError> {
        let seed = decode_secret_key_seed(seed_multibase)?;
        let key_pair = Ed25519KeyPair::new_with_seed(seed.as_ref())?;
        Ok(Self::from_key_pair(key_pair))
    }

    /// Build a verify-only instance from a `z6Mk…` multikey.
    pub fn from_public_multibase(multikey: &str) -> Result<Self, DidKeyError> {
        let public_key = decode_multikey(multikey)?;
        let key_pair = Ed25519KeyPair::from_public_key(&public_key)?;
        Ok(Self::from_key_pair(key_pair))
    }

    fn from_key_pair(key_pair: Ed25519KeyPair) -> Self {
        let public_key_multibase = key_pair.to_multikey();
        let controller = format!("did:key:{public_key_multibase}");
        let id = format!("{controller}#{public_key_multibase}");
        Self {
            key_pair,
            public_key_multibase,
            controller,
            id,
        }
    }

    /// Sign a payload with the underlying key pair.
    pub fn sign(&self, payload: &[u8]) -> Result<Vec<u8>, crypto::Error> {
        self.key_pair.sign(payload)
    }
}

/// Decode a multibase, multihash-framed 32-byte secret key seed.
pub fn decode_secret_key_seed(seed_multibase: &str) -> Result<Zeroizing<[u8; 32]>, DidKeyError> {
    let (_, bytes) =
        multibase::decode(seed_multibase).map_err(|_| DidKeyError::InvalidMultibase)?;
    if bytes.len() != 34 || bytes[..2] != SEED_MULTIHASH_HEADER {
        return Err(DidKeyError::InvalidSecretKeySeed);
    }
    let mut seed = Zeroizing::new([0u8; BYTES_LENGTH_32]);
    seed.copy_from_slice(&bytes[2..]);
    Ok(seed)
}

/// Extract the raw Ed25519 public key bytes from a `z6Mk…` multikey.
pub fn decode_multikey(multikey: &str) -> Result<[u8; BYTES_LENGTH_32], DidKeyError> {
    let (base, bytes) = multibase::decode(multikey).map_err(|_| DidKeyError::InvalidMultibase)?;
    if base != Base58Btc {
        return Err(DidKeyError::InvalidMultibase);
    }
    if bytes.len() < 2 || bytes[..2] != MULTICODEC_ED25519_PUB {
        return Err(DidKeyError::UnsupportedMulticodec);
    }
    bytes[2..]
        .try_into()
        .map_err(|_| DidKeyError::InvalidPublicKeyLength)
}

/// Resolve the Ed25519 public key referenced by a `did:key` verification
/// method URL, with or without a key fragment.
pub fn public_key_from_verification_method(
    verification_method: &str,
) -> Result<[u8; BYTES_LENGTH_32], DidKeyError> {
    let id = verification_method
        .strip_prefix("did:key:")
        .ok_or(DidKeyError::InvalidDid)?;
    let multikey = match id.split_once('#') {
        Some((_, fragment)) => fragment,
        None => id,
    };
    decode_multikey(multikey)
}
