use std::sync::Mutex;

use chrono::Utc;
use multibase::Base::Base58Btc;
use serde_json::Value;
use tracing::debug;

use crate::crypto::DigestAlgorithm;
use crate::didkey::Multikey;

use super::{canon::Canonicalizer, errors::Error, model::Proof};

/// Proof type shared by all data integrity cryptosuites.
pub const PROOF_TYPE_DATA_INTEGRITY_PROOF: &str = "DataIntegrityProof";

/// The purpose every fixture proof is created for.
pub const PROOF_PURPOSE_ASSERTION_METHOD: &str = "assertionMethod";

// XMLSCHEMA11-2 date-time at one-second precision, no sub-second digits.
const XSD_DATETIME_SECONDS: &str = "%Y-%m-%dT%H:%M:%SZ";

/// The EdDSA cryptosuites the pipeline can be configured for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CryptoSuite {
    /// The legacy `eddsa-2022` suite, canonicalizing with RDFC-1.0.
    Eddsa2022,
    /// `eddsa-rdfc-2022`.
    EddsaRdfc2022,
    /// `eddsa-jcs-2022`.
    EddsaJcs2022,
}

impl CryptoSuite {
    /// The cryptosuite identifier stamped into proofs.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Eddsa2022 => "eddsa-2022",
            Self::EddsaRdfc2022 => "eddsa-rdfc-2022",
            Self::EddsaJcs2022 => "eddsa-jcs-2022",
        }
    }

    /// The canonicalization algorithm the suite mandates.
    pub fn canonicalizer(&self) -> Canonicalizer {
        match self {
            Self::Eddsa2022 | Self::EddsaRdfc2022 => Canonicalizer::Rdfc,
            Self::EddsaJcs2022 => Canonicalizer::Jcs,
        }
    }
}

/// Override policy for a single proof field slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Stamp {
    /// Stamp the conformant value.
    #[default]
    Standard,
    /// Leave the field out of the proof.
    Omit,
    /// Force an arbitrary replacement value, valid or not.
    Literal(String),
}

impl Stamp {
    // Resolve the slot against the value the standard pipeline would stamp.
    fn resolve(&self, standard: impl FnOnce() -> String) -> Option<String> {
        match self {
            Self::Standard => Some(standard()),
            Self::Omit => None,
            Self::Literal(value) => Some(value.clone()),
        }
    }
}

/// The proof-construction pipeline.
///
/// A freshly built pipeline produces conformant proofs for its suite; a
/// generator corrupts exactly one public slot before issuing. Stamping and
/// binding run first, then canonicalization, digesting and signing in fixed
/// order: the digest depends on the canonical bytes and the signature on
/// the digest.
pub struct ProofPipeline {
    /// The suite the proof claims conformance to.
    pub suite: CryptoSuite,
    /// The stamped proof type.
    pub proof_type: String,
    /// The stamped cryptosuite identifier.
    pub cryptosuite: String,
    /// Date-stamping slot.
    pub created: Stamp,
    /// Verification-method binding slot.
    pub verification_method: Stamp,
    /// Purpose binding slot.
    pub proof_purpose: Stamp,
    /// Canonicalization slot.
    pub canonicalizer: Canonicalizer,
    /// Digest slot.
    pub digest: DigestAlgorithm,
    // Memoized canonical document digest, so repeated proof attempts over
    // the same document within one generation call hash it once.
    digest_cache: Mutex<Option<(Value, Vec<u8>)>>,
}

impl ProofPipeline {
    /// A pipeline with every slot on its conformant default.
    pub fn new(suite: CryptoSuite) -> Self {
        Self {
            suite,
            proof_type: PROOF_TYPE_DATA_INTEGRITY_PROOF.to_string(),
            cryptosuite: suite.id().to_string(),
            created: Stamp::Standard,
            verification_method: Stamp::Standard,
            proof_purpose: Stamp::Standard,
            canonicalizer: suite.canonicalizer(),
            digest: DigestAlgorithm::Sha256,
            digest_cache: Mutex::new(None),
        }
    }

    /// Sign a copy of the credential and return it with the proof attached.
    ///
    /// Any pre-existing proof member is stripped before signing.
    pub async fn issue(&self, signer: &Multikey, credential: &Value) -> Result<Value, Error> {
        let mut document = credential.clone();
        let obj = document.as_object_mut().ok_or(Error::NotAnObject)?;
        obj.remove("proof");

        let proof = self.create_proof(signer, &document)?;

        let obj = document.as_object_mut().ok_or(Error::NotAnObject)?;
        obj.insert("proof".to_string(), serde_json::to_value(&proof)?);
        debug!(suite = %self.cryptosuite, "proof attached");
        Ok(document)
    }

    // Steps 1-4 stamp the proof configuration, steps 5-7 canonicalize,
    // digest and sign.
    fn create_proof(&self, signer: &Multikey, document: &Value) -> Result<Proof, Error> {
        let mut proof = Proof::new(self.proof_type.clone());
        proof.cryptosuite = Some(self.cryptosuite.clone());
        proof.created = self
            .created
            .resolve(|| Utc::now().format(XSD_DATETIME_SECONDS).to_string());
        proof.verification_method = self.verification_method.resolve(|| signer.id.clone());
        proof.proof_purpose = self
            .proof_purpose
            .resolve(|| PROOF_PURPOSE_ASSERTION_METHOD.to_string());

        let verify_data = self.create_verify_data(document, &proof)?;
        let signature = signer.sign(&verify_data)?;
        proof.proof_value = Some(multibase::encode(Base58Btc, signature));
        Ok(proof)
    }

    // Hash of canonical proof options, then hash of canonical document.
    fn create_verify_data(&self, document: &Value, proof: &Proof) -> Result<Vec<u8>, Error> {
        let document_digest = self.document_digest(document)?;

        let options = proof_options(document, proof)?;
        let canonical_options = self.canonicalizer.canonize(&options)?;
        let options_digest = self.digest.digest(canonical_options.as_bytes());

        Ok([options_digest, document_digest].concat())
    }

    fn document_digest(&self, document: &Value) -> Result<Vec<u8>, Error> {
        let mut cache = self
            .digest_cache
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some((cached_document, digest)) = cache.as_ref() {
            if cached_document == document {
                return Ok(digest.clone());
            }
        }

        let canonical = self.canonicalizer.canonize(document)?;
        let digest = self.digest.digest(canonical.as_bytes());
        *cache = Some((document.clone(), digest.clone()));
        Ok(digest)
    }
}

/// The proof options document: the proof without its `proofValue`, carrying
/// the credential's `@context`.
pub(super) fn proof_options(document: &Value, proof: &Proof) -> Result<Value, Error> {
    let mut options = serde_json::to_value(proof)?;
    let obj = options.as_object_mut().ok_or(Error::NotAnObject)?;
    obj.remove("proofValue");
    if let Some(context) = document.get("@context") {
        obj.insert("@context".to_string(), context.clone());
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::didkey;
    use serde_json::json;

    const TEST_SEED: &str = "z1AYMku6XEB5KV3XJbYzz9VejGJYRuqzu5wmq4JDRyUCjr8";

    fn test_document() -> Value {
        json!({
            "@context": ["https://www.w3.org/ns/credentials/v2"],
            "id": "urn:uuid:86294362-4254-4f36-854f-3952fe42555d",
            "type": ["VerifiableCredential"],
            "issuer": "did:key:z6MkjLrk3gKS2nnkeWcmcxiZPGskmesDpuwRBorgHxUXfxnG",
            "credentialSubject": {"id": "did:example:subject", "name": "ExampleClaim"}
        })
    }

    #[tokio::test]
    async fn test_issue_stamps_all_proof_fields() {
        let signer = didkey::Multikey::from_seed_multibase(TEST_SEED).unwrap();
        let pipeline = ProofPipeline::new(CryptoSuite::EddsaJcs2022);

        let secured = pipeline.issue(&signer, &test_document()).await.unwrap();
        let proof = &secured["proof"];

        assert_eq!(proof["type"], PROOF_TYPE_DATA_INTEGRITY_PROOF);
        assert_eq!(proof["cryptosuite"], "eddsa-jcs-2022");
        assert_eq!(proof["verificationMethod"].as_str().unwrap(), signer.id);
        assert_eq!(proof["proofPurpose"], PROOF_PURPOSE_ASSERTION_METHOD);
        assert!(proof["proofValue"].as_str().unwrap().starts_with('z'));
    }

    #[tokio::test]
    async fn test_created_has_second_precision() {
        let signer = didkey::Multikey::from_seed_multibase(TEST_SEED).unwrap();
        let pipeline = ProofPipeline::new(CryptoSuite::EddsaJcs2022);

        let secured = pipeline.issue(&signer, &test_document()).await.unwrap();
        let created = secured["proof"]["created"].as_str().unwrap();

        assert!(!created.contains('.'), "sub-second digits in {created}");
        chrono::NaiveDateTime::parse_from_str(created, XSD_DATETIME_SECONDS).unwrap();
    }

    #[tokio::test]
    async fn test_omit_and_literal_slots() {
        let signer = didkey::Multikey::from_seed_multibase(TEST_SEED).unwrap();
        let mut pipeline = ProofPipeline::new(CryptoSuite::EddsaJcs2022);
        pipeline.created = Stamp::Omit;
        pipeline.proof_purpose = Stamp::Literal("invalidPurpose".to_string());

        let secured = pipeline.issue(&signer, &test_document()).await.unwrap();
        let proof = secured["proof"].as_object().unwrap();

        assert!(!proof.contains_key("created"));
        assert_eq!(proof["proofPurpose"], "invalidPurpose");
    }

    #[tokio::test]
    async fn test_existing_proof_is_stripped_before_signing() {
        let signer = didkey::Multikey::from_seed_multibase(TEST_SEED).unwrap();
        let pipeline = ProofPipeline::new(CryptoSuite::EddsaJcs2022);

        let mut document = test_document();
        document["proof"] = json!({"type": "StaleProof"});

        let secured = pipeline.issue(&signer, &document).await.unwrap();
        assert_eq!(secured["proof"]["type"], PROOF_TYPE_DATA_INTEGRITY_PROOF);
    }

    #[tokio::test]
    async fn test_document_digest_is_memoized() {
        let pipeline = ProofPipeline::new(CryptoSuite::EddsaJcs2022);
        let document = test_document();

        let first = pipeline.document_digest(&document).unwrap();
        let second = pipeline.document_digest(&document).unwrap();
        assert_eq!(first, second);

        // a different document misses the memo
        let other = pipeline.document_digest(&json!({"other": true})).unwrap();
        assert_ne!(first, other);
    }

    #[test]
    fn test_proof_options_carry_context_and_no_proof_value() {
        let mut proof = Proof::new(PROOF_TYPE_DATA_INTEGRITY_PROOF);
        proof.cryptosuite = Some("eddsa-jcs-2022".to_string());
        proof.proof_value = Some("zSignature".to_string());

        let options = proof_options(&test_document(), &proof).unwrap();
        assert_eq!(options["@context"], test_document()["@context"]);
        assert!(options.get("proofValue").is_none());
    }
}
