// Per-request tenant decision logic

use crate::clone::clone_for_tenant;
use crate::context::RequestTenantContext;
use crate::store::TemplateStore;
use crate::{DEFAULT_TENANT_ID, TENANT_ID_HEADER};
use dyntenant_models::OidcTenantConfig;

/// Outcome of a resolution call.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// A configuration was synthesized for a tenant that differs from (or
    /// was missing from) the request's existing binding.
    UseConfig(OidcTenantConfig),
    /// The tenant already bound to the request stays in force; nothing new
    /// is produced.
    ReuseBound,
}

/// Decides the effective tenant for each request.
///
/// Holds no per-request state; a single instance is shared by all
/// concurrent requests.
#[derive(Debug, Clone)]
pub struct TenantResolver {
    store: TemplateStore,
}

impl TenantResolver {
    pub fn new(store: TemplateStore) -> Self {
        Self { store }
    }

    /// Reconciles the header-asserted tenant with the request's existing
    /// binding.
    ///
    /// A header naming a tenant other than the bound one (or arriving with
    /// no binding at all) wins and produces a fresh configuration; the
    /// binding in `ctx` is updated to the winner before returning. When the
    /// header only re-asserts the bound tenant, or is missing while a
    /// binding exists, the established binding is reused. Both signals
    /// missing means the entry filter did not run; resolution falls back to
    /// the host application's own tenant rather than failing.
    pub fn resolve(&self, ctx: &mut RequestTenantContext) -> Resolution {
        tracing::debug!(
            bound_tenant_id = ?ctx.bound_tenant_id,
            header_tenant_id = ?ctx.header_tenant_id,
            "resolving tenant"
        );

        let effective = match (ctx.header_tenant_id.as_deref(), ctx.bound_tenant_id.as_deref()) {
            (None, None) => {
                tracing::warn!(
                    "no tenant bound and no {} header provided, defaulting to '{}'",
                    TENANT_ID_HEADER,
                    DEFAULT_TENANT_ID
                );
                DEFAULT_TENANT_ID.to_owned()
            }
            (Some(header), bound) if bound != Some(header) => header.to_owned(),
            _ => return Resolution::ReuseBound,
        };

        let config = clone_for_tenant(self.store.baseline(), &effective);
        ctx.bound_tenant_id = Some(effective);
        Resolution::UseConfig(config)
    }
}
