// Tenant context for request handling

/// The two tenant signals a single request carries.
///
/// Built at request start from the tenant header and the request-scoped
/// binding attribute, read once by the resolver, then discarded. The
/// resolver overwrites `bound_tenant_id` when it selects a new tenant so the
/// caller can publish the updated binding back to the request.
#[derive(Debug, Clone, Default)]
pub struct RequestTenantContext {
    /// Value of the tenant header, if the request carried one.
    pub header_tenant_id: Option<String>,
    /// Tenant already bound to this request by an earlier step.
    pub bound_tenant_id: Option<String>,
}

impl RequestTenantContext {
    pub fn new(header_tenant_id: Option<String>, bound_tenant_id: Option<String>) -> Self {
        Self {
            header_tenant_id,
            bound_tenant_id,
        }
    }
}
