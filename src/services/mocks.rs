// Mock test helpers and common mock patterns
//
// Design Decision: Centralized mock helpers for consistent testing
//
// Provides reusable mock constructors with sensible defaults. Tests can
// override specific behaviors while inheriting baseline setup.
//
// Usage:
//     use crate::services::mocks::test_helpers::*;
//     let client = create_mock_client_with_results(20);
//     let service = PokemonService::new(Arc::new(client));

#[cfg(test)]
pub mod test_helpers {
    use super::super::traits::*;
    use crate::error::PokedexError;
    use serde_json::json;
    use std::sync::{Mutex, MutexGuard};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Serialize tests that read or write process environment variables
    ///
    /// A panicking test poisons the lock; later tests still get it.
    pub fn env_lock() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Clear every variable the settings resolver reads
    pub fn clear_config_env() {
        use crate::services::config::{API_URL_VAR, APP_ENV_VAR, TIMEOUT_VAR};

        std::env::remove_var(APP_ENV_VAR);
        std::env::remove_var(API_URL_VAR);
        std::env::remove_var(TIMEOUT_VAR);
    }

    /// Create a mock client that always returns `payload`
    pub fn create_mock_client_returning(payload: Payload) -> MockPokemonApiClient {
        let mut mock = MockPokemonApiClient::new();

        mock.expect_get_all_pokemons()
            .returning(move || Ok(payload.clone()));

        mock.expect_name().return_const("mock".to_string());

        mock
    }

    /// Create a mock client whose `results` array holds `count` indices
    pub fn create_mock_client_with_results(count: usize) -> MockPokemonApiClient {
        let results: Vec<usize> = (0..count).collect();
        create_mock_client_returning(json!({ "results": results }))
    }

    /// Build a real transport-layer error without touching the network
    ///
    /// reqwest rejects the URL while building the request, which yields
    /// the same error type a failed GET would.
    pub fn transport_error() -> PokedexError {
        match reqwest::Client::new().get("not a url").build() {
            Err(e) => PokedexError::ReqwestError(e),
            Ok(_) => panic!("request with an invalid URL should not build"),
        }
    }

    /// Create a mock client whose fetch always fails with a transport error
    pub fn create_failing_mock_client() -> MockPokemonApiClient {
        let mut mock = MockPokemonApiClient::new();

        mock.expect_get_all_pokemons()
            .returning(|| Err(transport_error()));

        mock.expect_name().return_const("failing".to_string());

        mock
    }
}
