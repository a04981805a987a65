pub mod oidc;
pub mod tenant_header;

pub use oidc::{resolve_tenant, BoundTenant, ResolvedOidc};
pub use tenant_header::normalize_tenant_header;
