//! Server configuration.

/// Runtime configuration, read from environment variables with defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Socket address to bind, e.g. `127.0.0.1:8000`.
    pub addr: String,
    /// File system path of the SQLite database.
    pub db_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:8000".to_string(),
            db_path: "bookmarkd.db".to_string(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from `BOOKMARKD_ADDR` and `BOOKMARKD_DB`,
    /// falling back to the defaults for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            addr: std::env::var("BOOKMARKD_ADDR").unwrap_or(defaults.addr),
            db_path: std::env::var("BOOKMARKD_DB").unwrap_or(defaults.db_path),
        }
    }
}
