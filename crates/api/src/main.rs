// dyntenant API Server
// Entry point for the dynamic tenant resolution service

mod config;
mod handlers;
mod middleware;
mod routes;

use config::Config;
use dotenvy::dotenv;
use dyntenant_tenant::{TemplateStore, TenantResolver};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub struct AppState {
    pub resolver: TenantResolver,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,dyntenant_api=debug,tower_http=debug".to_string()),
        )
        .init();

    tracing::info!("🚀 Starting dyntenant API Server");
    tracing::info!("📦 Version: {}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::load().expect("Failed to load configuration");
    tracing::info!("🔌 Server: {}:{}", config.server_host, config.server_port);

    // Freeze the baseline template; construction also disables the static
    // default tenant, so it must complete before the listener binds
    let store =
        TemplateStore::new(config.oidc.clone()).expect("Invalid baseline tenant configuration");
    tracing::info!("🧩 Baseline tenant template loaded, static default tenant disabled");

    // Create tenant resolver
    let resolver = TenantResolver::new(store);
    tracing::info!("🔑 Tenant resolver initialized");

    // Create app state
    let state = Arc::new(AppState { resolver });

    // Create router
    let app = routes::create_router(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    tracing::info!("📡 Routes configured:");
    tracing::info!("   GET  /health");
    tracing::info!("   GET  /api/tenant/current");

    // Start server
    let addr = format!("{}:{}", config.server_host, config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("✅ Server ready at http://{}", addr);
    tracing::info!("🎯 Ready to accept requests!");

    axum::serve(listener, app).await.expect("Server error");

    Ok(())
}
