// Network-backed Pokemon API client
//
// Design Decision: Thin wrapper around a single reqwest GET
//
// This is the "real" adapter: one GET to the configured endpoint, body
// parsed as JSON, returned as-is. The status code is not inspected and no
// failure is retried or translated. Test code binds FixturePokemonApiClient
// or MockPokemonApiClient instead.

use super::config::ClientConfig;
use super::traits::{Payload, PokemonApiClient};
use crate::error::Result;
use crate::version;
use async_trait::async_trait;
use reqwest::Client;

/// Pokemon API client backed by HTTP
///
/// Thread Safety: Immutable after construction, safe to share via Arc.
///
/// Usage:
///     let client = HttpPokemonApiClient::new(ClientConfig::default())?;
///     let payload = client.get_all_pokemons().await?;
pub struct HttpPokemonApiClient {
    client: Client,
    config: ClientConfig,
}

impl HttpPokemonApiClient {
    /// Build a client bound to `config.api_url` with `config.timeout`
    ///
    /// # Errors
    /// - The underlying HTTP client cannot be initialised (e.g. TLS backend failure)
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(version::user_agent())
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl PokemonApiClient for HttpPokemonApiClient {
    async fn get_all_pokemons(&self) -> Result<Payload> {
        tracing::debug!(
            "GET {} (timeout {:?})",
            self.config.api_url,
            self.config.timeout
        );

        let payload = self
            .client
            .get(&self.config.api_url)
            .send()
            .await?
            .json::<Payload>()
            .await?;

        Ok(payload)
    }

    fn name(&self) -> &str {
        "http"
    }
}
