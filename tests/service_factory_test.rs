// End-to-end tests for the composition root through the public API
// Environment variables are process-wide, so every test takes ENV_LOCK

use pokedex::{pokemon_service_factory, AppBuilder, AppEnv, PokemonApiClient, FIXTURE_RESULT_COUNT};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn clean_env() -> MutexGuard<'static, ()> {
    let guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    std::env::remove_var("APP_ENV");
    std::env::remove_var("POKEMON_API_URL");
    std::env::remove_var("REQUEST_TIMEOUT");
    guard
}

#[tokio::test]
async fn test_get_all_pokemons_with_test_env() {
    let _env = clean_env();

    let pokemon_service = pokemon_service_factory(Some("test")).unwrap();
    let pokemons = pokemon_service.get_all_pokemons().await.unwrap();

    assert_eq!(
        pokemons["results"].as_array().unwrap().len(),
        FIXTURE_RESULT_COUNT
    );
    assert_eq!(pokemons["results"][0], 0);
    assert_eq!(pokemons["results"][19], 19);
}

#[tokio::test]
async fn test_fixture_service_is_idempotent() {
    let _env = clean_env();

    let pokemon_service = pokemon_service_factory(Some("test")).unwrap();

    let first = pokemon_service.get_all_pokemons().await.unwrap();
    let second = pokemon_service.get_all_pokemons().await.unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_defaults_without_environment() {
    let _env = clean_env();

    let container = AppBuilder::new().build().unwrap();
    let settings = container.settings();

    assert_eq!(settings.env, AppEnv::Develop);
    assert_eq!(settings.client.api_url, "https://pokeapi.co/api/v2/pokemon");
    assert_eq!(settings.client.timeout, Duration::from_secs(5));
    assert_eq!(container.pokemon_api_client().name(), "http");
}

#[tokio::test]
async fn test_unreachable_endpoint_propagates_failure() {
    let _env = clean_env();
    std::env::set_var("POKEMON_API_URL", "http://127.0.0.1:1/api/v2/pokemon");
    std::env::set_var("REQUEST_TIMEOUT", "2");

    let pokemon_service = pokemon_service_factory(Some("develop")).unwrap();
    let result = pokemon_service.get_all_pokemons().await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_app_env_variable_selects_fixture() {
    let _env = clean_env();
    std::env::set_var("APP_ENV", "test");
    // Unreachable URL proves the fixture never touches the network
    std::env::set_var("POKEMON_API_URL", "http://127.0.0.1:1/api/v2/pokemon");

    let pokemon_service = pokemon_service_factory(None).unwrap();
    let pokemons = pokemon_service.get_all_pokemons().await.unwrap();

    assert_eq!(pokemon_service.client().name(), "fixture");
    assert_eq!(
        pokemons["results"].as_array().unwrap().len(),
        FIXTURE_RESULT_COUNT
    );
}
