//! Notification dispatch
//!
//! Fire-and-forget from the core's perspective: a transition enqueues a
//! message onto a broadcast channel and moves on. Delivery (websocket,
//! email, in-app inbox) is the embedding service's concern, and a failed
//! delivery never fails the transition.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Reference to the workflow record a notification is about
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EntityRef {
    pub entity: String,
    pub record_id: i64,
}

/// Notification message
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub recipient_id: i64,
    pub sender_id: Option<i64>,
    pub title: String,
    pub message: String,
    /// Message category (workflow, complaint, system, ...)
    pub kind: String,
    /// low, medium, or high
    pub priority: String,
    pub entity: Option<EntityRef>,
    pub created_at: i64,
}

impl Notification {
    pub fn workflow(
        recipient_id: i64,
        sender_id: Option<i64>,
        title: impl Into<String>,
        message: impl Into<String>,
        entity: &str,
        record_id: i64,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            recipient_id,
            sender_id,
            title: title.into(),
            message: message.into(),
            kind: "workflow".to_string(),
            priority: "medium".to_string(),
            entity: Some(EntityRef {
                entity: entity.to_string(),
                record_id,
            }),
            created_at: chrono::Utc::now().timestamp(),
        }
    }

    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }
}

/// Notification sender shared across the core
#[derive(Clone)]
pub struct Notifier {
    sender: broadcast::Sender<Notification>,
}

impl Notifier {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Enqueue a notification.
    pub fn notify(&self, notification: Notification) {
        // Ignore send errors (no receivers is fine)
        let _ = self.sender.send(notification);
    }

    /// Subscribe to the notification stream
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }
}
