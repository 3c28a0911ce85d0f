use super::entity::{SessionId, Workspace, WorkspaceChange};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait WorkspaceRepository: Send + Sync {
    /// Returns the session's workspace, or an empty one for unknown sessions.
    async fn find(&self, session: SessionId) -> Result<Workspace, DomainError>;

    /// Applies `change` atomically and returns the updated workspace.
    async fn apply(
        &self,
        session: SessionId,
        change: WorkspaceChange,
    ) -> Result<Workspace, DomainError>;

    /// Drops every workspace not touched since `cutoff`; returns how many.
    async fn evict_idle_since(&self, cutoff: DateTime<Utc>) -> Result<usize, DomainError>;

    /// Number of live sessions.
    async fn count(&self) -> usize;
}
