use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use multibase::Base::Base58Btc;

use super::{
    errors::Error,
    traits::{CoreSign, Generate, KeyMaterial, ToMultikey, BYTES_LENGTH_32},
};

/// Multicodec prefix identifying an Ed25519 public key.
pub const MULTICODEC_ED25519_PUB: [u8; 2] = [0xed, 0x01];

/// An Ed25519 asymmetric key pair.
///
/// The secret key is only present on signing instances; instances built
/// from a public key can verify but not sign.
pub struct Ed25519KeyPair {
    pub public_key: VerifyingKey,
    pub secret_key: Option<SigningKey>,
}

impl std::fmt::Debug for Ed25519KeyPair {
    // Only the public half is ever printed.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{:?}", self.public_key))
    }
}

impl KeyMaterial for Ed25519KeyPair {
    fn public_key_bytes(&self) -> Result<[u8; BYTES_LENGTH_32], Error> {
        Ok(self.public_key.to_bytes())
    }

    fn private_key_bytes(&self) -> Result<[u8; BYTES_LENGTH_32], Error> {
        match &self.secret_key {
            Some(sk) => Ok(sk.to_bytes()),
            None => Err(Error::InvalidSecretKey),
        }
    }
}

impl Generate for Ed25519KeyPair {
    fn new_with_seed(seed: &[u8]) -> Result<Ed25519KeyPair, Error> {
        let seed: [u8; BYTES_LENGTH_32] = seed.try_into().map_err(|_| Error::InvalidSeed)?;
        let sk = SigningKey::from_bytes(&seed);
        Ok(Ed25519KeyPair {
            public_key: sk.verifying_key(),
            secret_key: Some(sk),
        })
    }

    fn from_public_key(public_key: &[u8; BYTES_LENGTH_32]) -> Result<Ed25519KeyPair, Error> {
        Ok(Ed25519KeyPair {
            public_key: VerifyingKey::from_bytes(public_key).map_err(|_| Error::InvalidPublicKey)?,
            secret_key: None,
        })
    }
}

impl CoreSign for Ed25519KeyPair {
    fn sign(&self, payload: &[u8]) -> Result<Vec<u8>, Error> {
        match &self.secret_key {
            Some(sk) => match sk.try_sign(payload) {
                Ok(signature) => Ok(signature.to_bytes().to_vec()),
                Err(_) => Err(Error::SignatureError),
            },
            None => Err(Error::InvalidSecretKey),
        }
    }

    fn verify(&self, payload: &[u8], signature: &[u8]) -> Result<(), Error> {
        match Signature::try_from(signature) {
            Ok(sig) => match self.public_key.verify(payload, &sig) {
                Ok(()) => Ok(()),
                _ => Err(Error::VerificationError),
            },
            Err(_) => Err(Error::CanNotRetrieveSignature),
        }
    }
}

impl ToMultikey for Ed25519KeyPair {
    fn to_multikey(&self) -> String {
        let prefix = &MULTICODEC_ED25519_PUB[..];
        let bytes = &self.public_key.as_bytes()[..];
        multibase::encode(Base58Btc, [prefix, bytes].concat())
    }
}
