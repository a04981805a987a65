use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

/// Identity-provider configuration for a single tenant.
///
/// One instance of this type is loaded at process startup as the baseline
/// template; per-tenant configurations are derived from it by the tenant
/// crate. Optional fields keep their present-or-absent state both through
/// serde and through derivation — an absent field is never materialized
/// with a default during cloning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct OidcTenantConfig {
    /// Identifier of the tenant this configuration belongs to.
    pub tenant_id: Option<String>,
    /// Whether this tenant may serve authentication flows.
    pub tenant_enabled: bool,
    pub client_id: Option<String>,
    /// Human-readable client name, shown on provider consent pages.
    pub client_name: Option<String>,
    pub application_type: Option<ApplicationType>,
    #[validate(url)]
    pub auth_server_url: Option<String>,
    /// When absent, the protocol layer decides whether to use discovery.
    pub discovery_enabled: Option<bool>,
    pub authorization_path: Option<String>,
    pub token_path: Option<String>,
    pub revoke_path: Option<String>,
    pub user_info_path: Option<String>,
    pub introspection_path: Option<String>,
    pub jwks_path: Option<String>,
    pub end_session_path: Option<String>,
    pub public_key: Option<String>,
    pub allow_token_introspection_cache: bool,
    pub allow_user_info_cache: bool,
    pub cache_user_info_in_idtoken: Option<bool>,
    pub connection_delay_secs: Option<u64>,
    pub connection_timeout_secs: u64,
    #[validate(range(min = 1))]
    pub max_pool_size: Option<u32>,
    pub provider: Option<KnownProvider>,
    pub credentials: Credentials,
    pub introspection_credentials: IntrospectionCredentials,
    pub certificate_chain: CertificateChain,
    pub code_grant: CodeGrant,
    pub token: TokenClaims,
    pub logout: Logout,
    pub roles: Roles,
    pub proxy: Proxy,
    pub authentication: Authentication,
}

impl Default for OidcTenantConfig {
    fn default() -> Self {
        Self {
            tenant_id: None,
            tenant_enabled: true,
            client_id: None,
            client_name: None,
            application_type: None,
            auth_server_url: None,
            discovery_enabled: None,
            authorization_path: None,
            token_path: None,
            revoke_path: None,
            user_info_path: None,
            introspection_path: None,
            jwks_path: None,
            end_session_path: None,
            public_key: None,
            allow_token_introspection_cache: true,
            allow_user_info_cache: true,
            cache_user_info_in_idtoken: None,
            connection_delay_secs: None,
            connection_timeout_secs: 10,
            max_pool_size: None,
            provider: None,
            credentials: Credentials::default(),
            introspection_credentials: IntrospectionCredentials::default(),
            certificate_chain: CertificateChain::default(),
            code_grant: CodeGrant::default(),
            token: TokenClaims::default(),
            logout: Logout::default(),
            roles: Roles::default(),
            proxy: Proxy::default(),
            authentication: Authentication::default(),
        }
    }
}

/// OAuth2/OIDC application flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApplicationType {
    WebApp,
    Service,
    Hybrid,
}

/// Well-known providers with pre-baked endpoint conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KnownProvider {
    Apple,
    Facebook,
    Github,
    Google,
    Microsoft,
    Spotify,
    Twitch,
    X,
}

/// How the client secret is transmitted to the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SecretMethod {
    Basic,
    Post,
    PostJwt,
    Query,
}

/// Which token the role claims are read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleSource {
    IdToken,
    AccessToken,
    UserInfo,
}

/// Client authentication material sent to the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Credentials {
    pub secret: Option<String>,
    pub client_secret: Option<ClientSecret>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClientSecret {
    pub value: Option<String>,
    pub method: Option<SecretMethod>,
}

/// Credentials for the token introspection endpoint, when they differ from
/// the client credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntrospectionCredentials {
    pub name: Option<String>,
    pub secret: Option<String>,
    pub include_client_id: bool,
}

impl Default for IntrospectionCredentials {
    fn default() -> Self {
        Self {
            name: None,
            secret: None,
            include_client_id: true,
        }
    }
}

/// Truststore material for validating the provider's certificate chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CertificateChain {
    pub key_store_file: Option<String>,
    pub key_store_password: Option<String>,
    pub key_alias: Option<String>,
    pub key_password: Option<String>,
}

/// Extra parameters and headers attached to authorization-code requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CodeGrant {
    pub extra_params: BTreeMap<String, String>,
    pub headers: BTreeMap<String, String>,
}

/// Expectations applied to tokens issued for this tenant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TokenClaims {
    pub issuer: Option<String>,
    pub audience: Option<Vec<String>>,
    pub principal_claim: Option<String>,
    pub lifespan_grace_secs: Option<u64>,
    pub refresh_expired: bool,
}

/// RP-initiated logout settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Logout {
    pub path: Option<String>,
    pub post_logout_path: Option<String>,
    pub post_logout_uri_param: String,
}

impl Default for Logout {
    fn default() -> Self {
        Self {
            path: None,
            post_logout_path: None,
            post_logout_uri_param: "post_logout_redirect_uri".to_string(),
        }
    }
}

/// Where and how role claims are extracted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Roles {
    pub role_claim_path: Option<Vec<String>>,
    pub role_claim_separator: Option<String>,
    pub source: Option<RoleSource>,
}

/// Outbound proxy used when talking to the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Proxy {
    pub host: Option<String>,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Default for Proxy {
    fn default() -> Self {
        Self {
            host: None,
            port: 80,
            username: None,
            password: None,
        }
    }
}

/// Authorization-code flow behaviour (redirects, scopes, session cookie).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Authentication {
    pub redirect_path: Option<String>,
    pub scopes: Option<Vec<String>>,
    pub restore_path_after_redirect: bool,
    pub cookie_path: String,
    pub cookie_domain: Option<String>,
    pub user_info_required: Option<bool>,
    pub session_age_extension_mins: u64,
    pub java_script_auto_redirect: bool,
    pub id_token_required: Option<bool>,
}

impl Default for Authentication {
    fn default() -> Self {
        Self {
            redirect_path: None,
            scopes: None,
            restore_path_after_redirect: false,
            cookie_path: "/".to_string(),
            cookie_domain: None,
            user_info_required: None,
            session_age_extension_mins: 5,
            java_script_auto_redirect: true,
            id_token_required: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_baseline_is_sparse() {
        let config = OidcTenantConfig::default();

        assert!(config.tenant_id.is_none());
        assert!(config.tenant_enabled);
        assert!(config.auth_server_url.is_none());
        assert!(config.authorization_path.is_none());
        assert_eq!(config.connection_timeout_secs, 10);
        assert!(config.allow_token_introspection_cache);
        assert!(config.allow_user_info_cache);
        assert!(config.introspection_credentials.include_client_id);
        assert_eq!(config.proxy.port, 80);
        assert!(config.proxy.host.is_none());
        assert_eq!(config.authentication.cookie_path, "/");
        assert_eq!(config.authentication.session_age_extension_mins, 5);
        assert!(config.authentication.java_script_auto_redirect);
        assert_eq!(
            config.logout.post_logout_uri_param,
            "post_logout_redirect_uri"
        );
    }

    #[test]
    fn test_deserialize_preserves_absent_fields() {
        let config: OidcTenantConfig = serde_json::from_str(
            r#"{
                "auth_server_url": "https://idp.example.com/realms/app",
                "token_path": "/protocol/openid-connect/token"
            }"#,
        )
        .expect("Failed to deserialize config");

        assert_eq!(
            config.auth_server_url.as_deref(),
            Some("https://idp.example.com/realms/app")
        );
        assert_eq!(
            config.token_path.as_deref(),
            Some("/protocol/openid-connect/token")
        );
        // Fields not mentioned in the document stay absent, not defaulted
        // to empty strings.
        assert!(config.authorization_path.is_none());
        assert!(config.jwks_path.is_none());
        assert!(config.discovery_enabled.is_none());
        assert!(config.cache_user_info_in_idtoken.is_none());
        assert!(config.credentials.secret.is_none());
    }

    #[test]
    fn test_enum_wire_forms() {
        assert_eq!(
            serde_json::to_string(&ApplicationType::WebApp).unwrap(),
            r#""web-app""#
        );
        assert_eq!(
            serde_json::to_string(&SecretMethod::PostJwt).unwrap(),
            r#""post-jwt""#
        );
        assert_eq!(
            serde_json::to_string(&RoleSource::AccessToken).unwrap(),
            r#""accesstoken""#
        );
        assert_eq!(
            serde_json::to_string(&KnownProvider::Github).unwrap(),
            r#""github""#
        );

        let source: RoleSource = serde_json::from_str(r#""idtoken""#).unwrap();
        assert_eq!(source, RoleSource::IdToken);
    }

    #[test]
    fn test_validation_rejects_malformed_baseline() {
        let config = OidcTenantConfig {
            auth_server_url: Some("not a url".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = OidcTenantConfig {
            auth_server_url: Some("https://idp.example.com".to_string()),
            max_pool_size: Some(4),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
