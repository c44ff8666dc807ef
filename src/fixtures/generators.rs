use futures::future::BoxFuture;
use serde_json::Value;

use crate::didkey::Multikey;
use crate::proof::{self, Canonicalizer, CryptoSuite, ProofPipeline, Stamp};

use super::errors::Error;

/// A fixture generator: signs the shared credential with one deliberate
/// defect (or, for `issuedVc`, none).
pub type Generator = for<'a> fn(&'a Multikey, &'a Value) -> BoxFuture<'a, Result<Value, Error>>;

// Every entry composes the standard `eddsa-rdfc-2022` pipeline with at
// most one override, so each fixture isolates a single specification
// violation.
const GENERATORS: &[(&str, Generator)] = &[
    ("issuedVc", |s, c| Box::pin(issued_vc(s, c))),
    ("canonizeJcs", |s, c| Box::pin(canonize_jcs(s, c))),
    ("canonizeUnknown", |s, c| Box::pin(canonize_unknown(s, c))),
    ("digestSha512", |s, c| Box::pin(digest_sha512(s, c))),
    ("invalidCryptosuite", |s, c| Box::pin(invalid_cryptosuite(s, c))),
    ("invalidProofType", |s, c| Box::pin(invalid_proof_type(s, c))),
    ("noCreated", |s, c| Box::pin(no_created(s, c))),
    ("invalidCreated", |s, c| Box::pin(invalid_created(s, c))),
    ("noVm", |s, c| Box::pin(no_vm(s, c))),
    ("invalidVm", |s, c| Box::pin(invalid_vm(s, c))),
    ("noProofPurpose", |s, c| Box::pin(no_proof_purpose(s, c))),
    ("invalidProofPurpose", |s, c| Box::pin(invalid_proof_purpose(s, c))),
];

/// The fixture registry, iterated in order by the cache.
pub fn generators() -> &'static [(&'static str, Generator)] {
    GENERATORS
}

fn standard_pipeline() -> ProofPipeline {
    ProofPipeline::new(CryptoSuite::EddsaRdfc2022)
}

async fn issue(pipeline: ProofPipeline, signer: &Multikey, credential: &Value) -> Result<Value, Error> {
    Ok(pipeline.issue(signer, credential).await?)
}

/// A fully conformant credential.
async fn issued_vc(signer: &Multikey, credential: &Value) -> Result<Value, Error> {
    issue(standard_pipeline(), signer, credential).await
}

/// Canonicalized with JCS although the suite mandates RDFC-1.0.
async fn canonize_jcs(signer: &Multikey, credential: &Value) -> Result<Value, Error> {
    let mut pipeline = standard_pipeline();
    pipeline.canonicalizer = Canonicalizer::Jcs;
    issue(pipeline, signer, credential).await
}

/// Canonicalized with an algorithm no verifier recognizes.
async fn canonize_unknown(signer: &Multikey, credential: &Value) -> Result<Value, Error> {
    let mut pipeline = standard_pipeline();
    pipeline.canonicalizer = Canonicalizer::Custom(unknown_canonicalize);
    issue(pipeline, signer, credential).await
}

// Stands in for an unrecognized canonicalization algorithm: prefixes every
// top-level key and serializes without any canonical ordering.
fn unknown_canonicalize(document: &Value) -> Result<String, proof::Error> {
    let obj = document.as_object().ok_or(proof::Error::NotAnObject)?;
    let prefixed: serde_json::Map<String, Value> = obj
        .iter()
        .map(|(key, value)| (format!("unknown-{key}"), value.clone()))
        .collect();
    Ok(serde_json::to_string(&Value::Object(prefixed))?)
}

/// Digested with SHA-512 although the suite mandates SHA-256.
async fn digest_sha512(signer: &Multikey, credential: &Value) -> Result<Value, Error> {
    let mut pipeline = standard_pipeline();
    pipeline.digest = crate::crypto::DigestAlgorithm::Sha512;
    issue(pipeline, signer, credential).await
}

/// Claims a cryptosuite no verifier implements.
async fn invalid_cryptosuite(signer: &Multikey, credential: &Value) -> Result<Value, Error> {
    let mut pipeline = standard_pipeline();
    pipeline.cryptosuite = "unknown-cryptosuite-2017".to_string();
    issue(pipeline, signer, credential).await
}

/// Claims a proof type other than `DataIntegrityProof`.
async fn invalid_proof_type(signer: &Multikey, credential: &Value) -> Result<Value, Error> {
    let mut pipeline = standard_pipeline();
    pipeline.proof_type = "UnknownProofType".to_string();
    issue(pipeline, signer, credential).await
}

/// No `created` field.
async fn no_created(signer: &Multikey, credential: &Value) -> Result<Value, Error> {
    let mut pipeline = standard_pipeline();
    pipeline.created = Stamp::Omit;
    issue(pipeline, signer, credential).await
}

/// A `created` value that is not an ISO-8601 date-time.
async fn invalid_created(signer: &Multikey, credential: &Value) -> Result<Value, Error> {
    let mut pipeline = standard_pipeline();
    pipeline.created = Stamp::Literal("invalidDate".to_string());
    issue(pipeline, signer, credential).await
}

/// No `verificationMethod` field.
async fn no_vm(signer: &Multikey, credential: &Value) -> Result<Value, Error> {
    let mut pipeline = standard_pipeline();
    pipeline.verification_method = Stamp::Omit;
    issue(pipeline, signer, credential).await
}

/// A malformed `verificationMethod` identifier.
async fn invalid_vm(signer: &Multikey, credential: &Value) -> Result<Value, Error> {
    let mut pipeline = standard_pipeline();
    pipeline.verification_method = Stamp::Literal("did:key:@invalidVm@".to_string());
    issue(pipeline, signer, credential).await
}

/// No `proofPurpose` field.
async fn no_proof_purpose(signer: &Multikey, credential: &Value) -> Result<Value, Error> {
    let mut pipeline = standard_pipeline();
    pipeline.proof_purpose = Stamp::Omit;
    issue(pipeline, signer, credential).await
}

/// A purpose value no verifier recognizes.
async fn invalid_proof_purpose(signer: &Multikey, credential: &Value) -> Result<Value, Error> {
    let mut pipeline = standard_pipeline();
    pipeline.proof_purpose = Stamp::Literal("invalidPurpose".to_string());
    issue(pipeline, signer, credential).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_names_are_unique() {
        let mut names: Vec<_> = generators().iter().map(|(name, _)| *name).collect();
        let len = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), len);
        assert_eq!(len, 12);
    }

    #[test]
    fn test_unknown_canonicalize_prefixes_keys() {
        let document = serde_json::json!({"type": ["VerifiableCredential"], "issuer": "did:ex"});
        let canonical = unknown_canonicalize(&document).unwrap();
        assert!(canonical.contains("unknown-type"));
        assert!(canonical.contains("unknown-issuer"));
        assert!(!canonical.contains("\"type\""));
    }
}
