//! Verifiable credential data model.

mod model;

pub use model::{CredentialSubject, VerifiableCredential};
