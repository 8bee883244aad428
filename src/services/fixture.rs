// Fixture Pokemon API client
//
// Returns a static payload with no I/O, so tests bound to it are
// deterministic and fast. The payload mimics only the `results` key of the
// real list endpoint; the entries are plain indices, not pokemon records.

use super::traits::{Payload, PokemonApiClient};
use crate::error::Result;
use async_trait::async_trait;
use serde_json::json;

/// Number of entries in the fixture `results` array
pub const FIXTURE_RESULT_COUNT: usize = 20;

/// Stand-in client returning `{"results": [0, 1, ..., 19]}`
#[derive(Debug, Clone, Copy, Default)]
pub struct FixturePokemonApiClient;

impl FixturePokemonApiClient {
    pub fn payload() -> Payload {
        let results: Vec<usize> = (0..FIXTURE_RESULT_COUNT).collect();
        json!({ "results": results })
    }
}

#[async_trait]
impl PokemonApiClient for FixturePokemonApiClient {
    async fn get_all_pokemons(&self) -> Result<Payload> {
        Ok(Self::payload())
    }

    fn name(&self) -> &str {
        "fixture"
    }
}
