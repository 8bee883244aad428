// AppBuilder pattern for dependency construction and injection
//
// Design Decision: Decide the binding first, construct once
//
// The builder resolves settings, picks the client variant from the
// environment selector, and only then constructs it. There is never a
// moment where the wrong client is live and later replaced.
//
// Architecture Pattern: Builder + Dependency Injection
// - AppBuilder resolves configuration and binds the client
// - Container holds the bound client (one per container, shared)
// - Container::pokemon_service hands out a fresh service per call
//
// Usage Example:
//     // Production
//     let service = pokemon_service_factory(None)?;
//
//     // Testing
//     let service = pokemon_service_factory(Some("test"))?;
//
//     // Explicit override
//     let container = AppBuilder::new()
//         .with_client(Arc::new(FixturePokemonApiClient))
//         .build()?;

use crate::error::Result;
use crate::services::{
    AppEnv, FixturePokemonApiClient, HttpPokemonApiClient, PokemonApiClient, PokemonService,
    Settings,
};
use std::sync::Arc;

/// Builder for the Pokemon service container
///
/// # Examples
///
/// ```no_run
/// use pokedex::AppBuilder;
///
/// #[tokio::main]
/// async fn main() -> pokedex::Result<()> {
///     let container = AppBuilder::new().with_env_override("test").build()?;
///     let pokemons = container.pokemon_service().get_all_pokemons().await?;
///     println!("{}", pokemons);
///     Ok(())
/// }
/// ```
#[derive(Default)]
pub struct AppBuilder {
    env_override: Option<String>,
    settings: Option<Settings>,
    client: Option<Arc<dyn PokemonApiClient>>,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Force the environment selector, ignoring APP_ENV
    pub fn with_env_override(mut self, env: impl Into<String>) -> Self {
        self.env_override = Some(env.into());
        self
    }

    /// Use pre-resolved settings instead of reading the environment
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Bind this client regardless of the environment selector
    pub fn with_client(mut self, client: Arc<dyn PokemonApiClient>) -> Self {
        self.client = Some(client);
        self
    }

    /// Resolve settings, bind the client and return the container
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Environment configuration is invalid
    /// - The HTTP client cannot be constructed
    pub fn build(self) -> Result<Container> {
        let settings = match self.settings {
            Some(mut settings) => {
                if let Some(env) = self.env_override.as_deref() {
                    settings.env = AppEnv::parse(env);
                }
                settings
            }
            None => Settings::resolve(self.env_override.as_deref())?,
        };

        let client = match self.client {
            Some(client) => client,
            None => bind_client(&settings)?,
        };

        tracing::debug!(
            "Container built for env '{}' with {} client",
            settings.env,
            client.name()
        );

        Ok(Container { settings, client })
    }
}

fn bind_client(settings: &Settings) -> Result<Arc<dyn PokemonApiClient>> {
    if settings.env.uses_fixture() {
        tracing::info!("Using mock for Pokemon API client");
        return Ok(Arc::new(FixturePokemonApiClient));
    }

    Ok(Arc::new(HttpPokemonApiClient::new(settings.client.clone())?))
}

/// Wired dependencies for one composition-root invocation
///
/// The client is a singleton within the container: every service handed
/// out by `pokemon_service` shares it.
pub struct Container {
    settings: Settings,
    client: Arc<dyn PokemonApiClient>,
}

impl Container {
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn pokemon_api_client(&self) -> Arc<dyn PokemonApiClient> {
        self.client.clone()
    }

    /// Create a new service bound to the container's client
    pub fn pokemon_service(&self) -> PokemonService {
        PokemonService::new(self.client.clone())
    }
}

/// Build a Pokemon service from the environment
///
/// `app_env` overrides APP_ENV when given; otherwise APP_ENV or "develop"
/// decides. Configuration is resolved on every call, so calls with
/// different overrides get independently selected clients.
///
/// # Errors
/// - Invalid environment configuration
/// - HTTP client construction failure
pub fn pokemon_service_factory(app_env: Option<&str>) -> Result<PokemonService> {
    let mut builder = AppBuilder::new();
    if let Some(env) = app_env {
        builder = builder.with_env_override(env);
    }

    Ok(builder.build()?.pokemon_service())
}
