use axum::http::HeaderValue;
use axum_helpers::parse_origins;
use core_config::{AppInfo, ConfigError, FromEnv, app_info, env_parse, server::ServerConfig};
use database::common::RetryConfig;
use database::postgres::PostgresConfig;
use strum::{Display, EnumString};

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Which [`DataGateway`](domain_items::DataGateway) backs the API (`STORE_BACKEND`)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

#[derive(Clone, Debug, PartialEq)]
pub enum StoreConfig {
    Postgres {
        postgres: PostgresConfig,
        retry: RetryConfig,
    },
    Memory,
}

impl StoreConfig {
    pub fn backend(&self) -> StoreBackend {
        match self {
            StoreConfig::Postgres { .. } => StoreBackend::Postgres,
            StoreConfig::Memory => StoreBackend::Memory,
        }
    }
}

/// Application-specific configuration
/// Composes shared config components from the `config` library
///
/// | Variable              | Default      |
/// |-----------------------|--------------|
/// | `STORE_BACKEND`       | `postgres`   |
/// | `DATABASE_URL`        | required for `postgres` |
/// | `SEED_SAMPLE_DATA`    | `false`      |
/// | `CORS_ALLOWED_ORIGIN` | unset → any origin |
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub store: StoreConfig,
    pub seed_sample_data: bool,
    /// `None` means permissive CORS
    pub cors_origins: Option<Vec<HeaderValue>>,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;

        let store = match env_parse::<StoreBackend>("STORE_BACKEND", "postgres")? {
            StoreBackend::Postgres => StoreConfig::Postgres {
                postgres: PostgresConfig::from_env()?,
                retry: RetryConfig::from_env()?,
            },
            StoreBackend::Memory => StoreConfig::Memory,
        };

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            store,
            seed_sample_data: env_parse("SEED_SAMPLE_DATA", "false")?,
            cors_origins: cors_origins_from_env()?,
        })
    }

    /// In-memory store on the default address
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self {
            app: app_info!(),
            server: ServerConfig::default(),
            environment: Environment::Development,
            store: StoreConfig::Memory,
            seed_sample_data: false,
            cors_origins: None,
        }
    }
}

fn cors_origins_from_env() -> Result<Option<Vec<HeaderValue>>, ConfigError> {
    let raw = match std::env::var("CORS_ALLOWED_ORIGIN") {
        Ok(raw) if !raw.trim().is_empty() => raw,
        _ => return Ok(None),
    };

    let origins = parse_origins(&raw).map_err(|details| ConfigError::ParseError {
        key: "CORS_ALLOWED_ORIGIN".to_string(),
        details,
    })?;

    if origins.is_empty() {
        return Err(ConfigError::ParseError {
            key: "CORS_ALLOWED_ORIGIN".to_string(),
            details: "no origins listed".to_string(),
        });
    }

    Ok(Some(origins))
}
