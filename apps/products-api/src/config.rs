//! Configuration for Products API

/// Application configuration, loaded from environment variables.
///
/// When `DATABASE_URL` is unset the server runs against the in-memory
/// repository, which is what local development and the test host use.
#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: Option<String>,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|e| eyre::eyre!("Invalid PORT: {}", e))?;

        let database_url = std::env::var("DATABASE_URL").ok();

        Ok(Self {
            host,
            port,
            database_url,
        })
    }
}
