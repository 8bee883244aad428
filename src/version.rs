// Version tracking for pokedex

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_string() -> String {
    format!("v{}", VERSION)
}

/// Value sent as the User-Agent header on every API request
pub fn user_agent() -> String {
    format!("pokedex/{}", VERSION)
}
