// Per-request tenant identification and configuration synthesis

pub mod clone;
pub mod context;
pub mod resolver;
pub mod store;

pub use clone::clone_for_tenant;
pub use context::RequestTenantContext;
pub use resolver::{Resolution, TenantResolver};
pub use store::{TemplateError, TemplateStore};

/// Header carrying the tenant identifier asserted by the caller.
/// Matched case-insensitively, stored lowercase.
pub const TENANT_ID_HEADER: &str = "x-tenant-id";

/// Tenant the host application itself authenticates under; injected when a
/// request arrives without a tenant header and used when nothing at all
/// resolves.
pub const DEFAULT_TENANT_ID: &str = "quarkus-app";
