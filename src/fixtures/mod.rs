//! Fixture generation and the per-process fixture cache.
//!
//! The registry maps fixture names to generators; each generator signs the
//! shared base credential through a pipeline with exactly one corrupted
//! step. `generate` runs every generator once per process and returns the
//! cache, which hands out independent deep copies.

mod cache;
mod errors;
mod generators;
mod valid_vc;

pub use cache::{generate, FixtureCache};
pub use errors::Error;
pub use generators::{generators, Generator};
pub use valid_vc::valid_vc;
