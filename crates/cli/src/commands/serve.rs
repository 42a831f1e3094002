use anyhow::Result;
use school_locator_core::env_flag_with_default;
use school_locator_http::{create_router, AppState, ErrorDisclosure};
use school_locator_service::SchoolService;
use school_locator_storage::{PgPoolConfig, StorageBackend};
use std::sync::Arc;

use crate::get_database_url;

pub(crate) async fn run(port: u16, host: String, memory: bool) -> Result<()> {
    let storage = if memory {
        tracing::warn!("Using in-memory store; schools are lost on exit");
        Arc::new(StorageBackend::new_memory())
    } else {
        let url = get_database_url()?;
        Arc::new(StorageBackend::new_postgres(&url, PgPoolConfig::from_env()).await?)
    };

    let expose = env_flag_with_default("SCHOOL_LOCATOR_EXPOSE_STORE_ERRORS", true);
    let disclosure = ErrorDisclosure::from_flag(expose);
    if disclosure == ErrorDisclosure::Verbatim {
        tracing::info!("Store error messages are returned to clients verbatim");
    }

    let school_service = Arc::new(SchoolService::new(Arc::clone(&storage)));
    let state = Arc::new(AppState::new(school_service, disclosure));

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!(storage = storage.kind(), "Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    tracing::info!("HTTP server stopped, draining store connections");
    storage.close().await;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            },
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
