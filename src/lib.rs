/*! # eddsa-fixtures

This library generates the credential fixtures used to exercise
implementations of the W3C Data Integrity EdDSA cryptosuites
(`eddsa-2022`, `eddsa-rdfc-2022`, `eddsa-jcs-2022`).

Every fixture starts from the same small, valid credential and is signed
through a proof-construction pipeline whose individual steps can be
overridden. Each named fixture corrupts exactly one step (a missing
`created` field, the wrong canonicalization algorithm, a SHA-512 digest
where SHA-256 is required) so a verifier under test can be checked for
rejecting exactly that violation.

## Features

- **Deterministic keys**: the signing key pair is derived from a multibase
  seed, so fixture signatures are reproducible across runs.
- **Pipeline overrides**: type, cryptosuite, date, verification method,
  purpose, canonicalization and digest are independent override slots.
- **Idempotent cache**: fixtures are generated once per process and handed
  out as independent deep copies.

*/
pub mod crypto;
pub mod didkey;
pub mod fixtures;
pub mod proof;
pub mod vc;
