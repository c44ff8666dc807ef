use std::collections::HashMap;
use std::env;

use serde_json::Value;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::didkey::Multikey;

use super::{errors::Error, generators::generators, valid_vc::valid_vc};

// Multibase seed used when no key material is configured.
const DEFAULT_KEY_SEED: &str = "z1AYMku6XEB5KV3XJbYzz9VejGJYRuqzu5wmq4JDRyUCjr8";

static FIXTURES: OnceCell<FixtureCache> = OnceCell::const_new();

/// The generated fixtures of one process run.
///
/// The cache owns the canonical fixture data; `clone_fixture` hands out
/// deep copies, so callers may mutate their copy freely without affecting
/// the cache or each other.
#[derive(Debug)]
pub struct FixtureCache {
    fixtures: HashMap<String, Value>,
}

impl FixtureCache {
    /// A deep, independent copy of the named fixture.
    pub fn clone_fixture(&self, name: &str) -> Result<Value, Error> {
        self.fixtures
            .get(name)
            .cloned()
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    /// The names of all cached fixtures, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fixtures.keys().map(String::as_str)
    }
}

/// Generate the fixture matrix once per process and return the cache.
///
/// The first caller derives the test signer from the `KEY_SEED_DB` or
/// `CLIENT_SECRET_DB` environment variable (falling back to the published
/// test seed), stamps the base credential's issuer and runs every
/// registered generator in order. Later callers get the same cache without
/// regeneration; if generation fails nothing is cached and the next call
/// starts over.
pub async fn generate() -> Result<&'static FixtureCache, Error> {
    FIXTURES.get_or_try_init(build).await
}

async fn build() -> Result<FixtureCache, Error> {
    let seed = env::var("KEY_SEED_DB")
        .or_else(|_| env::var("CLIENT_SECRET_DB"))
        .unwrap_or_else(|_| DEFAULT_KEY_SEED.to_string());
    let signer = Multikey::from_seed_multibase(&seed).map_err(Error::InvalidSeed)?;

    // The issuer must match the controller of the signing key.
    let mut credential = valid_vc();
    credential.issuer = Some(signer.controller.clone());
    let unsigned = serde_json::to_value(&credential)?;

    let mut fixtures = HashMap::new();
    fixtures.insert("validVc".to_string(), unsigned.clone());
    for (name, generator) in generators() {
        let fixture = generator(&signer, &unsigned).await?;
        debug!(fixture = name, "generated test fixture");
        fixtures.insert((*name).to_string(), fixture);
    }

    info!(count = fixtures.len(), issuer = %signer.controller, "fixture cache populated");
    Ok(FixtureCache { fixtures })
}
