//! Clinic tasks RPC server.
//!
//! Reads configuration from the environment, bootstraps the task schema,
//! and serves the remote-procedure surface. Missing configuration, a
//! failed schema bootstrap, or an unbindable port all abort startup.

use clinic_tasks::auth::StaticTokenVerifier;
use clinic_tasks::config::ServerConfig;
use clinic_tasks::rpc;
use clinic_tasks::task::adapters::postgres::{
    PostgresTaskRepository, build_pool, ensure_schema,
};
use clinic_tasks::task::services::TaskRegistryService;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let pool = build_pool(&config.database_url())?;
    ensure_schema(&pool).await?;
    tracing::info!("task schema bootstrap complete");

    let repository = Arc::new(PostgresTaskRepository::new(pool));
    let verifier = Arc::new(StaticTokenVerifier::admin(config.admin_token()));
    let service = Arc::new(TaskRegistryService::new(repository, verifier));
    let router = rpc::router(service);

    let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), config.port());
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "tasks server listening");
    axum::serve(listener, router).await?;
    Ok(())
}
