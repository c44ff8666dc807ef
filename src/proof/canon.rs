use affinidi_rdf_encoding::{jsonld, rdfc1};
use serde_json::Value;

use super::errors::Error;

/// Canonicalization slot of the proof pipeline.
///
/// The two standard algorithms are selected by cryptosuite; `Custom` lets a
/// generator substitute an unrecognized canonical form to provoke verifier
/// rejection.
#[derive(Clone, Copy, Debug)]
pub enum Canonicalizer {
    /// RDF Dataset Canonicalization (RDFC-1.0) over the JSON-LD expansion
    /// of the document.
    Rdfc,
    /// JSON Canonicalization Scheme (RFC 8785).
    Jcs,
    /// An ad-hoc serializer standing in for an unknown algorithm.
    Custom(fn(&Value) -> Result<String, Error>),
}

impl Canonicalizer {
    /// Transform the document into its canonical serialized form.
    pub fn canonize(&self, document: &Value) -> Result<String, Error> {
        match self {
            Self::Rdfc => {
                let dataset = jsonld::expand_and_to_rdf(document)
                    .map_err(|e| Error::Canonicalization(e.to_string()))?;
                rdfc1::canonicalize(&dataset).map_err(|e| Error::Canonicalization(e.to_string()))
            }
            Self::Jcs => {
                json_canon::to_string(document).map_err(|e| Error::Canonicalization(e.to_string()))
            }
            Self::Custom(canonize) => canonize(document),
        }
    }
}
