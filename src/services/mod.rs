// Service layer for dependency injection and testability
//
// Design Decision: Trait-based client with constructor injection
//
// The PokemonApiClient trait is the single "port". PokemonService holds an
// Arc<dyn PokemonApiClient> and never knows which adapter it got:
// - HttpPokemonApiClient talks to the real API
// - FixturePokemonApiClient returns static data for tests
// - MockPokemonApiClient (mockall, test builds only) scripts arbitrary behavior
//
// Usage Example:
//     // Production code
//     let client = Arc::new(HttpPokemonApiClient::new(ClientConfig::default())?);
//     let service = PokemonService::new(client);
//
//     // Test code
//     let service = PokemonService::new(Arc::new(FixturePokemonApiClient));
//     let pokemons = service.get_all_pokemons().await?; // No network I/O

pub mod config;
pub mod fixture;
pub mod http_client;
#[cfg(test)]
pub mod mocks;
pub mod pokemon;
pub mod traits;

// Re-export commonly used types
pub use config::{AppEnv, ClientConfig, Settings};
pub use fixture::{FixturePokemonApiClient, FIXTURE_RESULT_COUNT};
pub use http_client::HttpPokemonApiClient;
pub use pokemon::PokemonService;
pub use traits::{Payload, PokemonApiClient};
