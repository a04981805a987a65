// Baseline template store, populated once at startup

use dyntenant_models::OidcTenantConfig;
use std::sync::Arc;
use thiserror::Error;
use validator::Validate;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("invalid baseline tenant configuration: {0}")]
    InvalidBaseline(#[from] validator::ValidationErrors),
}

/// Read-only holder of the baseline identity configuration.
///
/// Construction happens exactly once during bootstrap, before the server
/// starts accepting requests: the template is validated, its own tenant is
/// disabled (all resolution flows through the dynamic resolver afterwards),
/// and the result is frozen behind an `Arc`. Handing the store to the
/// request pipeline is the happens-before barrier between this one write
/// and all subsequent reads.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    baseline: Arc<OidcTenantConfig>,
}

impl TemplateStore {
    pub fn new(mut baseline: OidcTenantConfig) -> Result<Self, TemplateError> {
        baseline.validate()?;
        // The statically configured tenant must not serve authentication
        // flows itself; per-tenant clones are re-enabled individually.
        baseline.tenant_enabled = false;
        Ok(Self {
            baseline: Arc::new(baseline),
        })
    }

    pub fn baseline(&self) -> &OidcTenantConfig {
        &self.baseline
    }
}
