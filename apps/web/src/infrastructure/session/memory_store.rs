use crate::domain::{
    shared::errors::DomainError,
    workspace::{
        entity::{SessionId, Workspace, WorkspaceChange},
        repository::WorkspaceRepository,
    },
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

struct Entry {
    workspace: Workspace,
    last_seen: DateTime<Utc>,
}

/// Process-local workspace store. Uploads are never written anywhere else.
#[derive(Default)]
pub struct InMemoryWorkspaceStore {
    entries: RwLock<HashMap<SessionId, Entry>>,
}

impl InMemoryWorkspaceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WorkspaceRepository for InMemoryWorkspaceStore {
    async fn find(&self, session: SessionId) -> Result<Workspace, DomainError> {
        let mut entries = self.entries.write().await;
        Ok(match entries.get_mut(&session) {
            Some(entry) => {
                entry.last_seen = Utc::now();
                entry.workspace.clone()
            }
            None => Workspace::default(),
        })
    }

    async fn apply(
        &self,
        session: SessionId,
        change: WorkspaceChange,
    ) -> Result<Workspace, DomainError> {
        let mut entries = self.entries.write().await;
        let entry = entries.entry(session).or_insert_with(|| {
            debug!(session = %session, "creating workspace");
            Entry {
                workspace: Workspace::default(),
                last_seen: Utc::now(),
            }
        });
        entry.workspace.apply(change);
        entry.last_seen = Utc::now();
        Ok(entry.workspace.clone())
    }

    async fn evict_idle_since(&self, cutoff: DateTime<Utc>) -> Result<usize, DomainError> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| entry.last_seen >= cutoff);
        Ok(before - entries.len())
    }

    async fn count(&self) -> usize {
        self.entries.read().await.len()
    }
}
