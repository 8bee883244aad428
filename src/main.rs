use anyhow::Context;
use pokedex::{pokemon_service_factory, version};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file (ignore if not found)
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout carries only the payload
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("pokedex {}", version::version_string());

    let pokemon_service =
        pokemon_service_factory(None).context("Failed to build Pokemon service")?;

    let pokemons = pokemon_service
        .get_all_pokemons()
        .await
        .context("Failed to fetch pokemons")?;

    println!("{}", serde_json::to_string_pretty(&pokemons)?);

    Ok(())
}
