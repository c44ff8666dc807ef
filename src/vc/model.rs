use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::proof::Proof;

/// A verifiable credential, restricted to the shape the fixtures exercise.
///
/// The credential is mutable until signed; once a proof is attached it is
/// treated as a fixture and only ever copied.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct VerifiableCredential {
    /// The JSON-LD contexts defining the vocabulary of the document.
    #[serde(rename = "@context")]
    pub context: Vec<String>,

    /// Identifier of this credential.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The type of this credential.
    #[serde(rename = "type")]
    pub cred_type: Vec<String>,

    /// The issuer of this credential. Absent on the unsigned template and
    /// stamped with the signer's controller DID before issuance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,

    /// The credential subject.
    pub credential_subject: CredentialSubject,

    /// The attached data integrity proof, if signed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof: Option<Proof>,
}

/// The entity the credential makes claims about.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CredentialSubject {
    /// Identifier of the subject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The claims made about the subject.
    #[serde(flatten)]
    pub claims: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_credential_serialization() {
        let credential = VerifiableCredential {
            context: vec!["https://www.w3.org/ns/credentials/v2".to_string()],
            id: Some("urn:uuid:3978344f-8596-4c3a-a978-8fcaba3903c5".to_string()),
            cred_type: vec!["VerifiableCredential".to_string()],
            issuer: Some("did:key:z6MkjLrk3gKS2nnkeWcmcxiZPGskmesDpuwRBorgHxUXfxnG".to_string()),
            credential_subject: CredentialSubject {
                id: Some("did:example:subject".to_string()),
                claims: [("name".to_string(), json!("ExampleClaim"))].into_iter().collect(),
            },
            proof: None,
        };

        let value = serde_json::to_value(&credential).unwrap();
        assert_eq!(value["@context"][0], "https://www.w3.org/ns/credentials/v2");
        assert_eq!(value["type"][0], "VerifiableCredential");
        assert_eq!(value["credentialSubject"]["name"], "ExampleClaim");
        // unsigned credential carries no proof member at all
        assert!(value.get("proof").is_none());

        let parsed: VerifiableCredential = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, credential);
    }
}
