// Pokemon service façade
//
// Holds one client and forwards to it. The service has no branch on which
// client it holds, so swapping implementations never touches this file.

use super::traits::{Payload, PokemonApiClient};
use crate::error::Result;
use std::sync::Arc;

/// Service callers interact with
///
/// Constructed with exactly one client via constructor injection.
/// No retries, caching or transformation: the client's result is returned as-is.
#[derive(Clone)]
pub struct PokemonService {
    client: Arc<dyn PokemonApiClient>,
}

impl PokemonService {
    pub fn new(client: Arc<dyn PokemonApiClient>) -> Self {
        Self { client }
    }

    /// Get all pokemons from the bound client
    pub async fn get_all_pokemons(&self) -> Result<Payload> {
        self.client.get_all_pokemons().await
    }

    /// The client this service delegates to
    pub fn client(&self) -> &Arc<dyn PokemonApiClient> {
        &self.client
    }
}
