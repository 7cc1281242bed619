//! API configuration
//!
//! Sources, lowest precedence first: built-in defaults, an optional
//! `sofi.toml` in the working directory, then `SOFI_`-prefixed environment
//! variables (`SOFI_PORT`, `SOFI_JWT_SECRET`, `SOFI_DATABASE_URL`, ...).

use serde::Deserialize;
use std::time::Duration;

use core_kernel::CoreError;
use infra_db::DatabaseConfig;

/// JWT secret shipped in the defaults; never valid outside development
pub const PLACEHOLDER_JWT_SECRET: &str = "change-me-in-production";

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// HS256 signing secret
    pub jwt_secret: String,
    /// `iss` claim written to and required on tokens
    pub jwt_issuer: String,
    /// Token lifetime in seconds
    pub jwt_expiration_secs: u64,
    /// PostgreSQL connection string
    pub database_url: String,
    pub database_max_connections: u32,
    pub database_min_connections: u32,
    /// Seconds a request waits for a pooled connection
    pub database_acquire_timeout_secs: u64,
    /// Seconds before an idle connection is closed; 0 keeps it open
    pub database_idle_timeout_secs: u64,
    /// Seconds before a connection is recycled; 0 never recycles
    pub database_max_lifetime_secs: u64,
    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,
    pub log_format: LogFormat,
    /// Admin account created at startup when both fields are set
    pub bootstrap_admin_email: Option<String>,
    pub bootstrap_admin_password: Option<String>,
    /// Allowed CORS origins; empty allows any origin
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            jwt_secret: PLACEHOLDER_JWT_SECRET.to_string(),
            jwt_issuer: "sofi".to_string(),
            jwt_expiration_secs: 3600,
            database_url: "postgres://localhost/sofi".to_string(),
            database_max_connections: 10,
            database_min_connections: 2,
            database_acquire_timeout_secs: 30,
            database_idle_timeout_secs: 600,
            database_max_lifetime_secs: 1800,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            bootstrap_admin_email: None,
            bootstrap_admin_password: None,
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `sofi.toml` (if present) and the environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::load(config::Environment::with_prefix("SOFI"))
    }

    fn load(environment: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("sofi").required(false))
            .add_source(
                environment
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors_allowed_origins"),
            )
            .build()?
            .try_deserialize()
    }

    /// Checks cross-field constraints the deserializer cannot express
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.jwt_secret.trim().is_empty() {
            return Err(CoreError::configuration("jwt_secret must not be empty"));
        }
        if self.jwt_expiration_secs == 0 {
            return Err(CoreError::configuration("jwt_expiration_secs must be positive"));
        }
        if self.database_min_connections > self.database_max_connections {
            return Err(CoreError::configuration(
                "database_min_connections exceeds database_max_connections",
            ));
        }
        if self.database_acquire_timeout_secs == 0 {
            return Err(CoreError::configuration("database_acquire_timeout_secs must be positive"));
        }
        if self.bootstrap_admin_email.is_some() != self.bootstrap_admin_password.is_some() {
            return Err(CoreError::configuration(
                "bootstrap_admin_email and bootstrap_admin_password must be set together",
            ));
        }
        Ok(())
    }

    /// Whether the shipped placeholder secret is still in use
    pub fn uses_placeholder_secret(&self) -> bool {
        self.jwt_secret == PLACEHOLDER_JWT_SECRET
    }

    /// Connection pool settings
    pub fn database(&self) -> DatabaseConfig {
        let optional = |secs: u64| (secs > 0).then(|| Duration::from_secs(secs));
        DatabaseConfig::new(self.database_url.clone())
            .max_connections(self.database_max_connections)
            .min_connections(self.database_min_connections)
            .acquire_timeout(Duration::from_secs(self.database_acquire_timeout_secs))
            .idle_timeout(optional(self.database_idle_timeout_secs))
            .max_lifetime(optional(self.database_max_lifetime_secs))
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load_from(vars: &[(&str, &str)]) -> ApiConfig {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::load(config::Environment::with_prefix("SOFI").source(Some(source))).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert!(config.uses_placeholder_secret());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_environment_overrides() {
        let config = load_from(&[
            ("SOFI_PORT", "9090"),
            ("SOFI_JWT_SECRET", "a-real-secret"),
            ("SOFI_LOG_FORMAT", "json"),
            ("SOFI_CORS_ALLOWED_ORIGINS", "https://a.example,https://b.example"),
        ]);

        assert_eq!(config.port, 9090);
        assert_eq!(config.jwt_secret, "a-real-secret");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.cors_allowed_origins.len(), 2);
        assert_eq!(config.jwt_expiration_secs, 3600);
        assert!(!config.uses_placeholder_secret());
    }

    #[test]
    fn test_validation_failures() {
        let config = ApiConfig {
            database_min_connections: 20,
            ..ApiConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ApiConfig {
            bootstrap_admin_email: Some("admin@sofi.io".to_string()),
            ..ApiConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ApiConfig {
            jwt_expiration_secs: 0,
            ..ApiConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ApiConfig {
            database_acquire_timeout_secs: 0,
            ..ApiConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_database_settings_reach_pool_config() {
        let config = load_from(&[
            ("SOFI_DATABASE_URL", "postgres://db.internal/sofi"),
            ("SOFI_DATABASE_MAX_CONNECTIONS", "40"),
            ("SOFI_DATABASE_ACQUIRE_TIMEOUT_SECS", "5"),
            ("SOFI_DATABASE_IDLE_TIMEOUT_SECS", "0"),
            ("SOFI_DATABASE_MAX_LIFETIME_SECS", "120"),
        ]);

        let database = config.database();

        assert_eq!(database.url, "postgres://db.internal/sofi");
        assert_eq!(database.max_connections, 40);
        assert_eq!(database.min_connections, 2);
        assert_eq!(database.acquire_timeout, Duration::from_secs(5));
        assert_eq!(database.idle_timeout, None);
        assert_eq!(database.max_lifetime, Some(Duration::from_secs(120)));
    }
}
