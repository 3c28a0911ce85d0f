use crate::domain::{shared::errors::DomainError, workspace::repository::WorkspaceRepository};
use chrono::Utc;
use std::{sync::Arc, time::Duration};

/// Drops the uploads of sessions that went quiet.
pub struct SessionSweeper {
    workspaces: Arc<dyn WorkspaceRepository>,
    idle_minutes: i64,
    interval_seconds: u64,
}

impl SessionSweeper {
    pub fn new(
        workspaces: Arc<dyn WorkspaceRepository>,
        idle_minutes: i64,
        interval_seconds: u64,
    ) -> Self {
        Self {
            workspaces,
            idle_minutes: idle_minutes.max(1),
            interval_seconds: interval_seconds.max(10),
        }
    }

    pub async fn sweep_once(&self) -> Result<usize, DomainError> {
        let cutoff = Utc::now() - chrono::Duration::minutes(self.idle_minutes);
        let evicted = self.workspaces.evict_idle_since(cutoff).await?;
        if evicted > 0 {
            tracing::debug!(evicted, "evicted idle workspaces");
        }
        Ok(evicted)
    }

    pub async fn start(&self) {
        loop {
            tokio::time::sleep(Duration::from_secs(self.interval_seconds)).await;
            if let Err(err) = self.sweep_once().await {
                tracing::warn!("session sweep failed: {}", err);
            }
        }
    }
}
