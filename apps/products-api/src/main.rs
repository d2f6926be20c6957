//! Products API - REST server

use axum::{Json, Router, routing::get};
use domain_products::{
    InMemoryProductRepository, PgProductRepository, ProductService, entity, handlers,
};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;

mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    // Wire the products router against the configured backend
    let products = match &config.database_url {
        Some(url) => {
            let db = connect(url).await?;
            handlers::router(ProductService::new(PgProductRepository::new(db)))
        }
        None => {
            info!("DATABASE_URL not set, using in-memory product store");
            handlers::router(ProductService::new(InMemoryProductRepository::new()))
        }
    };

    let app = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest(handlers::ROUTE_PREFIX, products);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Starting Products API on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Products API shutdown complete");
    Ok(())
}

/// Connect to PostgreSQL and ensure the products table exists.
async fn connect(database_url: &str) -> eyre::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(database_url);
    opt.max_connections(100)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .sqlx_logging(true);

    let db = Database::connect(opt).await?;
    info!("Successfully connected to PostgreSQL database");

    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    let mut stmt = schema.create_table_from_entity(entity::Entity);
    stmt.if_not_exists();
    db.execute(&stmt).await?;

    Ok(db)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(openapi::ApiDoc::openapi())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install ctrl-c handler");
    info!("Shutdown signal received");
}
