//! Audit trail service
//!
//! Every transition attempt, allowed or not, is recorded. Entries flow
//! through a bounded channel into a pluggable sink; when the channel is
//! full the entry is dropped with a warning rather than blocking the
//! request path.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, RwLock};

/// Outcome of an audited operation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditResult {
    Success,
    Denied,
    Failed,
}

/// One audit trail entry
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: String,
    /// Unix timestamp
    pub at: i64,
    pub username: String,
    pub action: String,
    pub entity: String,
    pub record_id: i64,
    pub old_status: Option<String>,
    pub new_status: Option<String>,
    pub result: AuditResult,
    pub detail: Option<String>,
}

/// Helper for building audit entries
#[derive(Clone, Debug)]
pub struct NewAuditEntry {
    pub username: String,
    pub action: String,
    pub entity: String,
    pub record_id: i64,
    pub old_status: Option<String>,
    pub new_status: Option<String>,
    pub result: AuditResult,
    pub detail: Option<String>,
}

impl NewAuditEntry {
    pub fn new(
        username: impl Into<String>,
        action: impl Into<String>,
        entity: impl Into<String>,
        record_id: i64,
    ) -> Self {
        Self {
            username: username.into(),
            action: action.into(),
            entity: entity.into(),
            record_id,
            old_status: None,
            new_status: None,
            result: AuditResult::Success,
            detail: None,
        }
    }

    pub fn with_status_change(
        mut self,
        old: impl Into<String>,
        new: impl Into<String>,
    ) -> Self {
        self.old_status = Some(old.into());
        self.new_status = Some(new.into());
        self
    }

    pub fn with_result(mut self, result: AuditResult) -> Self {
        self.result = result;
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    fn into_entry(self) -> AuditEntry {
        AuditEntry {
            id: uuid::Uuid::new_v4().to_string(),
            at: chrono::Utc::now().timestamp(),
            username: self.username,
            action: self.action,
            entity: self.entity,
            record_id: self.record_id,
            old_status: self.old_status,
            new_status: self.new_status,
            result: self.result,
            detail: self.detail,
        }
    }
}

/// Destination for audit entries
#[async_trait]
pub trait AuditSink: Send + Sync {
    async fn append(&self, entry: AuditEntry) -> anyhow::Result<()>;
}

/// In-memory sink with newest-first queries
#[derive(Default)]
pub struct MemoryAuditLog {
    entries: RwLock<Vec<AuditEntry>>,
}

impl MemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn recent(&self, limit: usize) -> Vec<AuditEntry> {
        let entries = self.entries.read().await;
        entries.iter().rev().take(limit).cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl AuditSink for MemoryAuditLog {
    async fn append(&self, entry: AuditEntry) -> anyhow::Result<()> {
        self.entries.write().await.push(entry);
        Ok(())
    }
}

/// Audit service draining entries into its sink on a background task
#[derive(Clone)]
pub struct AuditService {
    tx: mpsc::Sender<AuditEntry>,
}

impl AuditService {
    /// Spawn the consumer task. Must be called within a tokio runtime.
    pub fn start(sink: Arc<dyn AuditSink>, buffer: usize) -> Self {
        let (tx, mut rx) = mpsc::channel::<AuditEntry>(buffer);

        tokio::spawn(async move {
            while let Some(entry) = rx.recv().await {
                if let Err(e) = sink.append(entry).await {
                    tracing::error!("Failed to record audit entry: {}", e);
                }
            }
        });

        Self { tx }
    }

    /// Record an entry without blocking the caller.
    pub fn record(&self, entry: NewAuditEntry) {
        if self.tx.try_send(entry.into_entry()).is_err() {
            tracing::warn!("Audit channel is full, entry dropped");
        }
    }
}
