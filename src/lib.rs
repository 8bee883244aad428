// Library interface for pokedex
// Exposes the client abstraction, its implementations and the
// composition root so they can be used from tests and other binaries.

pub mod app_builder;
pub mod error;
pub mod services;
pub mod version;

// Re-export commonly used types for convenience
pub use app_builder::{pokemon_service_factory, AppBuilder, Container};
pub use error::{PokedexError, Result};
pub use services::{
    AppEnv, ClientConfig, FixturePokemonApiClient, HttpPokemonApiClient, Payload,
    PokemonApiClient, PokemonService, Settings, FIXTURE_RESULT_COUNT,
};
