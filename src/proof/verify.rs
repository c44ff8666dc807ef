use multibase::Base::Base58Btc;
use serde_json::Value;
use tracing::debug;

use crate::crypto::{CoreSign, DigestAlgorithm, Ed25519KeyPair, Generate};
use crate::didkey;

use super::{errors::Error, model::Proof, pipeline, pipeline::CryptoSuite};

/// Verify a secured credential on the standard path of the given suite.
///
/// Re-derives the verify data with the suite's mandated canonicalization and
/// SHA-256, resolves the Ed25519 public key from the proof's `did:key`
/// verification method and checks the detached signature. Fixtures that
/// corrupt the canonicalization or digest step generate cleanly but fail
/// here, exactly as they must fail at a conformant verifier.
pub async fn verify_credential(secured: &Value, suite: CryptoSuite) -> Result<(), Error> {
    let proof_member = secured.get("proof").ok_or(Error::MissingProof)?;
    let proof: Proof = serde_json::from_value(proof_member.clone())?;

    let proof_value = proof.proof_value.as_deref().ok_or(Error::MissingProofValue)?;
    let (base, signature) = multibase::decode(proof_value)?;
    if base != Base58Btc {
        return Err(Error::InvalidProofValueEncoding);
    }

    let verification_method = proof
        .verification_method
        .as_deref()
        .ok_or(Error::MissingVerificationMethod)?;
    let public_key = didkey::public_key_from_verification_method(verification_method)?;
    let key_pair = Ed25519KeyPair::from_public_key(&public_key)?;

    let mut document = secured.clone();
    let obj = document.as_object_mut().ok_or(Error::NotAnObject)?;
    obj.remove("proof");

    let mut options_proof = proof.clone();
    options_proof.proof_value = None;
    let options = pipeline::proof_options(&document, &options_proof)?;

    let canonicalizer = suite.canonicalizer();
    let options_digest =
        DigestAlgorithm::Sha256.digest(canonicalizer.canonize(&options)?.as_bytes());
    let document_digest =
        DigestAlgorithm::Sha256.digest(canonicalizer.canonize(&document)?.as_bytes());
    let verify_data = [options_digest, document_digest].concat();

    key_pair.verify(&verify_data, &signature)?;
    debug!(suite = suite.id(), "proof verified");
    Ok(())
}
