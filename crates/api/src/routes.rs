use crate::handlers;
use crate::middleware;
use crate::AppState;
use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::get,
    Router,
};
use std::sync::Arc;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Resolution outcome for the current request
        .route("/api/tenant/current", get(handlers::current_tenant))
        // Innermost layer: resolve the effective tenant for the request
        .layer(from_fn_with_state(state, middleware::resolve_tenant))
        // Outermost layer: the tenant header must exist before anything
        // else observes the request
        .layer(from_fn(middleware::normalize_tenant_header))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::CurrentTenantResponse;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use dyntenant_models::OidcTenantConfig;
    use dyntenant_tenant::{TemplateStore, TenantResolver, DEFAULT_TENANT_ID};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        let baseline = OidcTenantConfig {
            auth_server_url: Some("https://idp.example.com/realms/app".to_string()),
            authorization_path: Some("/protocol/openid-connect/auth".to_string()),
            token_path: Some("/protocol/openid-connect/token".to_string()),
            ..Default::default()
        };
        let store = TemplateStore::new(baseline).expect("Failed to build store");
        let state = Arc::new(AppState {
            resolver: TenantResolver::new(store),
        });
        create_router(state)
    }

    async fn get_current_tenant(request: Request<Body>) -> CurrentTenantResponse {
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).expect("Failed to parse response")
    }

    #[tokio::test]
    async fn test_request_without_header_resolves_to_default_tenant() {
        let parsed = get_current_tenant(
            Request::builder()
                .uri("/api/tenant/current")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(parsed.tenant_id.as_deref(), Some(DEFAULT_TENANT_ID));
        assert_eq!(parsed.bound_tenant_id, DEFAULT_TENANT_ID);
        assert_eq!(parsed.client_id.as_deref(), Some(DEFAULT_TENANT_ID));
        assert_eq!(parsed.client_name.as_deref(), Some(DEFAULT_TENANT_ID));
        assert!(parsed.tenant_enabled);
        // Inherited settings come from the baseline template untouched
        assert_eq!(
            parsed.auth_server_url.as_deref(),
            Some("https://idp.example.com/realms/app")
        );
        assert_eq!(
            parsed.authorization_path.as_deref(),
            Some("/protocol/openid-connect/auth")
        );
        assert_eq!(
            parsed.token_path.as_deref(),
            Some("/protocol/openid-connect/token")
        );
    }

    #[tokio::test]
    async fn test_request_with_header_resolves_to_that_tenant() {
        let parsed = get_current_tenant(
            Request::builder()
                .uri("/api/tenant/current")
                .header("X-Tenant-ID", "acme")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(parsed.tenant_id.as_deref(), Some("acme"));
        assert_eq!(parsed.bound_tenant_id, "acme");
        assert_eq!(parsed.client_id.as_deref(), Some("acme"));
        assert!(parsed.tenant_enabled);
        assert_eq!(
            parsed.token_path.as_deref(),
            Some("/protocol/openid-connect/token")
        );
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
