pub(crate) mod api;
pub(crate) mod core;
pub(crate) mod db;
pub(crate) mod repositories;
pub(crate) mod schemas;
pub(crate) mod services;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use axum::{extract::Request, ServiceExt};

use crate::core::{config::Settings, state::AppState, telemetry};
use crate::services::review_queue::PgSnapshotSource;

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    telemetry::init_tracing(&settings)?;
    core::metrics::init(&settings)?;

    let db_pool = db::init_pool(&settings).await?;
    if settings.database().run_migrations {
        db::run_migrations(&db_pool).await?;
    }

    let snapshots = Arc::new(PgSnapshotSource::new(db_pool.clone()));
    let state = AppState::new(settings, db_pool, snapshots);

    let app = api::router::router(state.clone());
    let listener = tokio::net::TcpListener::bind(state.settings().server_addr()).await?;

    tracing::info!(
        addr = %state.settings().server_addr(),
        environment = %state.settings().runtime().environment.as_str(),
        query_timeout_seconds = state.settings().review().query_timeout_seconds,
        "Review queue API listening"
    );

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(core::shutdown::shutdown_signal())
        .await?;

    tracing::info!("Review queue API stopped");
    Ok(())
}
