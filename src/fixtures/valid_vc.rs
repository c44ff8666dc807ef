use serde_json::json;

use crate::vc::{CredentialSubject, VerifiableCredential};

/// The base credential every fixture starts from.
///
/// The issuer is left unset; the cache stamps it with the controller DID of
/// the derived test key before the generators run.
pub fn valid_vc() -> VerifiableCredential {
    VerifiableCredential {
        context: vec!["https://www.w3.org/ns/credentials/v2".to_string()],
        id: Some("urn:uuid:86294362-4254-4f36-854f-3952fe42555d".to_string()),
        cred_type: vec!["VerifiableCredential".to_string()],
        issuer: None,
        credential_subject: CredentialSubject {
            id: Some("did:key:z6MktKwz7Ge1Yxzr4JHavN33wiwa8y81QdcMRLXQsrH9T53b".to_string()),
            claims: [("name".to_string(), json!("ExampleClaim"))].into_iter().collect(),
        },
        proof: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_is_unsigned() {
        let credential = valid_vc();
        assert!(credential.proof.is_none());
        assert!(credential.issuer.is_none());
        assert_eq!(credential.cred_type, vec!["VerifiableCredential"]);
    }
}
