// Per-tenant configuration derivation from the baseline template

use dyntenant_models::OidcTenantConfig;

/// Derives a tenant's configuration from the baseline template.
///
/// Every field is carried over verbatim, preserving per-field
/// presence/absence, except the identity-selector fields — tenant id,
/// client id and client name — which all take `tenant_id`. The clone is
/// enabled unconditionally; the baseline's own tenant is disabled at
/// startup and must not leak that state into derived tenants.
///
/// Pure: `base` is never mutated and no other state is touched.
pub fn clone_for_tenant(base: &OidcTenantConfig, tenant_id: &str) -> OidcTenantConfig {
    OidcTenantConfig {
        // Identity selectors
        tenant_id: Some(tenant_id.to_owned()),
        tenant_enabled: true,
        client_id: Some(tenant_id.to_owned()),
        client_name: Some(tenant_id.to_owned()),

        // Everything below is inherited from the template as-is
        application_type: base.application_type,
        auth_server_url: base.auth_server_url.clone(),
        discovery_enabled: base.discovery_enabled,
        authorization_path: base.authorization_path.clone(),
        token_path: base.token_path.clone(),
        revoke_path: base.revoke_path.clone(),
        user_info_path: base.user_info_path.clone(),
        introspection_path: base.introspection_path.clone(),
        jwks_path: base.jwks_path.clone(),
        end_session_path: base.end_session_path.clone(),
        public_key: base.public_key.clone(),
        allow_token_introspection_cache: base.allow_token_introspection_cache,
        allow_user_info_cache: base.allow_user_info_cache,
        cache_user_info_in_idtoken: base.cache_user_info_in_idtoken,
        connection_delay_secs: base.connection_delay_secs,
        connection_timeout_secs: base.connection_timeout_secs,
        max_pool_size: base.max_pool_size,
        provider: base.provider,
        credentials: base.credentials.clone(),
        introspection_credentials: base.introspection_credentials.clone(),
        certificate_chain: base.certificate_chain.clone(),
        code_grant: base.code_grant.clone(),
        token: base.token.clone(),
        logout: base.logout.clone(),
        roles: base.roles.clone(),
        proxy: base.proxy.clone(),
        authentication: base.authentication.clone(),
    }
}
