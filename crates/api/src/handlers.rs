use crate::middleware::{BoundTenant, ResolvedOidc};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CurrentTenantResponse {
    pub tenant_id: Option<String>,
    pub bound_tenant_id: String,
    pub client_id: Option<String>,
    pub client_name: Option<String>,
    pub tenant_enabled: bool,
    pub auth_server_url: Option<String>,
    pub authorization_path: Option<String>,
    pub token_path: Option<String>,
}

/// Reports which tenant the request resolved to and the identity settings
/// selected for it. The resolution pipeline guarantees both extensions are
/// populated before this handler runs.
pub async fn current_tenant(
    Extension(ResolvedOidc(config)): Extension<ResolvedOidc>,
    Extension(BoundTenant(bound)): Extension<BoundTenant>,
) -> Json<CurrentTenantResponse> {
    Json(CurrentTenantResponse {
        tenant_id: config.tenant_id.clone(),
        bound_tenant_id: bound,
        client_id: config.client_id.clone(),
        client_name: config.client_name.clone(),
        tenant_enabled: config.tenant_enabled,
        auth_server_url: config.auth_server_url.clone(),
        authorization_path: config.authorization_path.clone(),
        token_path: config.token_path.clone(),
    })
}
