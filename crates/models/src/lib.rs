// Core modules
pub mod oidc;

// Re-export commonly used types
pub use oidc::{
    ApplicationType, Authentication, CertificateChain, ClientSecret, CodeGrant, Credentials,
    IntrospectionCredentials, KnownProvider, Logout, OidcTenantConfig, Proxy, RoleSource, Roles,
    SecretMethod, TokenClaims,
};
