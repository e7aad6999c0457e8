//! Application configuration loaded from environment variables.

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080").
    pub bind_addr: String,

    /// Path to the SQLite database file.
    pub database_path: String,

    /// Base URL for this service, used in canonical blog URLs and the
    /// embed snippet shown on the preview page.
    pub base_url: String,

    /// Site name shown in page titles.
    pub site_name: String,

    /// Directory served under the `/static` prefix.
    pub static_dir: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables have defaults for local development:
    /// - `FIELDPOST_BIND_ADDR`: Server bind address (default: "0.0.0.0:8080")
    /// - `FIELDPOST_DATABASE_PATH`: SQLite file (default: "fieldpost.db")
    /// - `FIELDPOST_BASE_URL`: Base URL for links (default: "http://localhost:8080")
    /// - `FIELDPOST_SITE_NAME`: Site name (default: "Fieldpost")
    /// - `FIELDPOST_STATIC_DIR`: Static asset directory (default: "static")
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("FIELDPOST_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let database_path =
            std::env::var("FIELDPOST_DATABASE_PATH").unwrap_or_else(|_| "fieldpost.db".to_string());

        let base_url = std::env::var("FIELDPOST_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string())
            .trim_end_matches('/')
            .to_string();

        let site_name =
            std::env::var("FIELDPOST_SITE_NAME").unwrap_or_else(|_| "Fieldpost".to_string());

        let static_dir =
            std::env::var("FIELDPOST_STATIC_DIR").unwrap_or_else(|_| "static".to_string());

        tracing::info!(
            bind_addr = %bind_addr,
            database_path = %database_path,
            base_url = %base_url,
            site_name = %site_name,
            static_dir = %static_dir,
            "configuration loaded"
        );

        Ok(Self {
            bind_addr,
            database_path,
            base_url,
            site_name,
            static_dir,
        })
    }
}
