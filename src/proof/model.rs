use serde::{Deserialize, Serialize};

/// An embedded data integrity proof.
///
/// Only `type` is mandatory at the model level: the generators in this
/// crate deliberately omit or corrupt every other field, so the conformance
/// requirements of the cryptosuites are enforced by verifiers, not here.
/// For the same reason `created` is a lexical field rather than a typed
/// date-time: a fixture must be able to carry a non-ISO value.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Proof {
    /// The proof type, `DataIntegrityProof` for all EdDSA cryptosuites.
    #[serde(rename = "type")]
    pub proof_type: String,

    /// The cryptosuite identifier, e.g. `eddsa-rdfc-2022`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cryptosuite: Option<String>,

    /// The date-time the proof was created, an XMLSCHEMA11-2 string at
    /// one-second precision when stamped by the standard pipeline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,

    /// Reference to the public key material verifying the proof.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_method: Option<String>,

    /// The reason the proof was created, normally `assertionMethod`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof_purpose: Option<String>,

    /// The multibase-encoded detached signature. Absent on a proof
    /// configuration, present on a finished proof.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof_value: Option<String>,
}

impl Proof {
    /// An empty proof carrying only its type tag.
    pub fn new(proof_type: impl Into<String>) -> Self {
        Self {
            proof_type: proof_type.into(),
            cryptosuite: None,
            created: None,
            verification_method: None,
            proof_purpose: None,
            proof_value: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_omitted_fields_stay_out_of_the_json() {
        let mut proof = Proof::new("DataIntegrityProof");
        proof.cryptosuite = Some("eddsa-rdfc-2022".to_string());

        let value = serde_json::to_value(&proof).unwrap();
        assert_eq!(value["type"], "DataIntegrityProof");
        assert_eq!(value["cryptosuite"], "eddsa-rdfc-2022");
        assert!(value.get("created").is_none());
        assert!(value.get("verificationMethod").is_none());
        assert!(value.get("proofPurpose").is_none());
        assert!(value.get("proofValue").is_none());
    }

    #[test]
    fn test_field_names_are_camel_case() {
        let mut proof = Proof::new("DataIntegrityProof");
        proof.created = Some("2023-03-05T19:23:24Z".to_string());
        proof.verification_method = Some("did:key:z6Mk#z6Mk".to_string());
        proof.proof_purpose = Some("assertionMethod".to_string());
        proof.proof_value = Some("zQeVb".to_string());

        let json = serde_json::to_string(&proof).unwrap();
        assert!(json.contains("\"verificationMethod\""));
        assert!(json.contains("\"proofPurpose\""));
        assert!(json.contains("\"proofValue\""));

        let parsed: Proof = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, proof);
    }
}
