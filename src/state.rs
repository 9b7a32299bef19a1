use std::sync::Arc;

use crate::audit::{AuditService, MemoryAuditLog};
use crate::config::Config;
use crate::notify::{Notification, Notifier};
use crate::store::AssetStore;
use crate::workflow::executor::WorkflowExecutor;

/// Application state shared across the embedding service
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<Config>,
    /// Asset store collaborator
    store: Arc<dyn AssetStore>,
    /// Notification sender
    notifier: Notifier,
    /// Audit trail service
    audit: AuditService,
    audit_log: Arc<MemoryAuditLog>,
}

impl AppState {
    /// Create new application state. Must be called within a tokio runtime
    /// (the audit service spawns its consumer task).
    pub fn new(config: Config, store: Arc<dyn AssetStore>) -> Self {
        let notifier = Notifier::new(config.notify_capacity);
        let audit_log = Arc::new(MemoryAuditLog::new());
        let audit = AuditService::start(audit_log.clone(), config.audit_buffer);

        Self {
            config: Arc::new(config),
            store,
            notifier,
            audit,
            audit_log,
        }
    }

    /// Build a workflow executor over this state's collaborators
    pub fn executor(&self) -> WorkflowExecutor {
        WorkflowExecutor::new(self.store.clone(), self.notifier.clone(), self.audit.clone())
    }

    pub fn store(&self) -> Arc<dyn AssetStore> {
        self.store.clone()
    }

    /// Send a notification outside the workflow path
    pub fn notify(&self, notification: Notification) {
        self.notifier.notify(notification);
    }

    /// Subscribe to the notification stream
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<Notification> {
        self.notifier.subscribe()
    }

    pub fn audit_log(&self) -> &MemoryAuditLog {
        &self.audit_log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::asset::{Asset, AssetStatus};
    use crate::entity::maintenance::{Maintenance, MaintenancePriority, MaintenanceStatus};
    use crate::entity::user::{Role, User, UserStatus};
    use crate::store::MemoryAssetStore;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_transition_through_app_state() {
        let store = Arc::new(MemoryAssetStore::new());
        store.insert(Asset {
            id: 1,
            name: "Water Pump".to_string(),
            description: None,
            category: None,
            purchase_date: None,
            purchase_cost: None,
            location: Some("Gusau Library".to_string()),
            status: AssetStatus::Active,
            serial_number: None,
            custodian_name: None,
            quantity: 1,
            created_by: None,
        });
        let state = AppState::new(Config::default(), store);

        let admin = User {
            id: 1,
            username: "admin".to_string(),
            first_name: "Sule".to_string(),
            last_name: "Garba".to_string(),
            email: None,
            role: Role::Admin,
            status: UserStatus::Active,
            department: None,
            location: None,
            permissions: Vec::new(),
            asset_access: Vec::new(),
        };
        let mut record = Maintenance {
            id: 1,
            asset_id: Some(1),
            asset_name: Some("Water Pump".to_string()),
            asset_location: Some("Gusau Library".to_string()),
            maintenance_date: None,
            description: None,
            cost: Decimal::ZERO,
            priority: MaintenancePriority::Medium,
            performed_by: None,
            status: MaintenanceStatus::Scheduled,
            created_by: None,
        };

        let outcome = state
            .executor()
            .execute(&admin, &mut record, "start")
            .await
            .unwrap();
        assert_eq!(outcome.to, "in_progress");
        assert_eq!(record.status, MaintenanceStatus::InProgress);

        let mut tries = 0;
        while state.audit_log().len().await < 1 && tries < 50 {
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
            tries += 1;
        }
        let recent = state.audit_log().recent(10).await;
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].new_status.as_deref(), Some("in_progress"));
    }
}
