use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use dyntenant_tenant::{DEFAULT_TENANT_ID, TENANT_ID_HEADER};

/// Guarantees every request carries a tenant header before anything else
/// reads it.
///
/// Installed as the outermost request middleware so no handler or later
/// layer ever observes a request without `x-tenant-id`. Requests that
/// already carry the header pass through untouched.
pub async fn normalize_tenant_header(mut request: Request, next: Next) -> Response {
    if !request.headers().contains_key(TENANT_ID_HEADER) {
        tracing::info!(
            "{} is empty, assigning '{}'",
            TENANT_ID_HEADER,
            DEFAULT_TENANT_ID
        );
        request
            .headers_mut()
            .insert(TENANT_ID_HEADER, HeaderValue::from_static(DEFAULT_TENANT_ID));
    }
    next.run(request).await
}
