// Core trait definitions for the Pokemon API client capability
//
// Design Decision: One trait, held as Arc<dyn PokemonApiClient>
//
// The service and the composition root only ever see the trait object.
// Any type implementing it is a legal binding, which is what lets tests
// swap the network client for the fixture without touching the service.
//
// All traits are marked Send + Sync to work with tokio's async runtime.

use crate::error::Result;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

/// Response body of the list endpoint, passed through untouched
///
/// No schema is enforced; whatever JSON the API returns is what callers get.
pub type Payload = serde_json::Value;

/// Pokemon API client abstraction
///
/// Exposes a single operation with no arguments: everything it needs
/// (endpoint, timeout) is bound at construction time.
///
/// Usage:
///     let client: Arc<dyn PokemonApiClient> = Arc::new(FixturePokemonApiClient);
///     let payload = client.get_all_pokemons().await?;
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PokemonApiClient: Send + Sync {
    /// Fetch the full pokemon list payload
    ///
    /// # Errors
    /// - Network failure or timeout
    /// - Response body is not valid JSON
    async fn get_all_pokemons(&self) -> Result<Payload>;

    /// Short identifier of the implementation, for logging
    fn name(&self) -> &str;
}
