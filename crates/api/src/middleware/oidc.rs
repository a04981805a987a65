use crate::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use dyntenant_models::OidcTenantConfig;
use dyntenant_tenant::{RequestTenantContext, Resolution, TENANT_ID_HEADER};
use std::sync::Arc;

/// Tenant identifier bound to the request by the authentication flow.
///
/// The resolver reads this and conditionally overwrites it; this layer
/// never initializes it on its own.
#[derive(Debug, Clone)]
pub struct BoundTenant(pub String);

/// Configuration selected for the request's effective tenant, published for
/// the rest of the pipeline.
#[derive(Debug, Clone)]
pub struct ResolvedOidc(pub Arc<OidcTenantConfig>);

/// Invokes the tenant resolver for the request, standing in for the
/// identity-provider protocol layer.
///
/// Builds the per-request context from the tenant header and any existing
/// binding, asks the resolver for a decision, then publishes the outcome
/// through request extensions: a fresh configuration replaces whatever was
/// there, while a reuse decision leaves the established one in force.
pub async fn resolve_tenant(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let header_tenant_id = request
        .headers()
        .get(TENANT_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let bound_tenant_id = request
        .extensions()
        .get::<BoundTenant>()
        .map(|b| b.0.clone());

    let mut ctx = RequestTenantContext::new(header_tenant_id, bound_tenant_id);
    match state.resolver.resolve(&mut ctx) {
        Resolution::UseConfig(config) => {
            request
                .extensions_mut()
                .insert(ResolvedOidc(Arc::new(config)));
        }
        Resolution::ReuseBound => {}
    }
    if let Some(bound) = ctx.bound_tenant_id {
        request.extensions_mut().insert(BoundTenant(bound));
    }

    next.run(request).await
}
