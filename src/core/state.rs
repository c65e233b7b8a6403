use std::sync::Arc;

use sqlx::PgPool;

use crate::core::config::Settings;
use crate::services::review_queue::SnapshotSource;

#[derive(Clone)]
pub(crate) struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    settings: Settings,
    db: PgPool,
    snapshots: Arc<dyn SnapshotSource>,
}

impl AppState {
    pub(crate) fn new(settings: Settings, db: PgPool, snapshots: Arc<dyn SnapshotSource>) -> Self {
        Self { inner: Arc::new(InnerState { settings, db, snapshots }) }
    }

    pub(crate) fn settings(&self) -> &Settings {
        &self.inner.settings
    }

    pub(crate) fn db(&self) -> &PgPool {
        &self.inner.db
    }

    pub(crate) fn snapshots(&self) -> &dyn SnapshotSource {
        self.inner.snapshots.as_ref()
    }
}
