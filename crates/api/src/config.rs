use dyntenant_models::OidcTenantConfig;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// Baseline identity configuration every tenant derives from.
    pub oidc: OidcTenantConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 3000,
            oidc: OidcTenantConfig::default(),
        }
    }
}

impl Config {
    /// Layered configuration: an optional `dyntenant.toml` (path override
    /// via `DYNTENANT_CONFIG`), then `DYNTENANT_*` environment variables
    /// (`__` separates nesting levels, e.g. `DYNTENANT_OIDC__TOKEN_PATH`).
    pub fn load() -> Result<Self, config::ConfigError> {
        let path = std::env::var("DYNTENANT_CONFIG").unwrap_or_else(|_| "dyntenant".to_string());
        config::Config::builder()
            .add_source(config::File::with_name(&path).required(false))
            .add_source(config::Environment::with_prefix("DYNTENANT").separator("__"))
            .build()?
            .try_deserialize()
    }
}
