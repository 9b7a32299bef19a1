//! Workflow executor
//!
//! Validates a requested transition against location access, the entity's
//! transition table, and the actor's role, then commits it and runs the
//! attached side effect. A failed side effect rolls the status back; the
//! record is never left half-transitioned.
//!
//! The executor validates against the status read at call time. Callers
//! must serialize concurrent `execute` calls per record (row lock or
//! compare-and-swap on the status column) so two writers cannot both
//! succeed from the same stale status.

use std::sync::Arc;

use anyhow::Context;

use crate::audit::{AuditResult, AuditService, NewAuditEntry};
use crate::entity::user::User;
use crate::error::{AppError, AppResult};
use crate::notify::{Notification, Notifier};
use crate::policy::can_access_location;
use crate::store::AssetStore;
use crate::workflow::{Effect, Transition, WorkflowRecord};

/// A committed transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionOutcome {
    pub entity: &'static str,
    pub record_id: i64,
    pub from: &'static str,
    pub to: &'static str,
    pub effect: Option<Effect>,
}

pub struct WorkflowExecutor {
    store: Arc<dyn AssetStore>,
    notifier: Notifier,
    audit: AuditService,
}

impl WorkflowExecutor {
    pub fn new(store: Arc<dyn AssetStore>, notifier: Notifier, audit: AuditService) -> Self {
        Self {
            store,
            notifier,
            audit,
        }
    }

    /// Apply `action` to `record` on behalf of `user`.
    ///
    /// All checks must pass or the call fails with the record unchanged.
    pub async fn execute<R: WorkflowRecord>(
        &self,
        user: &User,
        record: &mut R,
        action: &str,
    ) -> AppResult<TransitionOutcome> {
        let def = R::definition();
        let from = record.status_tag();

        if !can_access_location(user, record.location()) {
            let err = AppError::LocationDenied {
                username: user.username.clone(),
                location: record.location().map(|l| l.to_string()),
            };
            self.audit_attempt(user, record, action, AuditResult::Denied, &err.to_string());
            return Err(err);
        }

        let Some(transition) = def.find(from, action) else {
            let err = AppError::UnknownTransition {
                entity: R::KIND,
                record_id: record.id(),
                status: from.to_string(),
                action: action.to_string(),
            };
            self.audit_attempt(user, record, action, AuditResult::Denied, &err.to_string());
            return Err(err);
        };

        if !transition.allows(user.role) {
            let err = AppError::ForbiddenTransition {
                entity: R::KIND,
                record_id: record.id(),
                status: from.to_string(),
                action: action.to_string(),
                role: user.role,
            };
            self.audit_attempt(user, record, action, AuditResult::Denied, &err.to_string());
            return Err(err);
        }

        if transition.needs_live_asset && !self.asset_is_live(record).await? {
            let err = AppError::AssetAlreadyDeleted {
                entity: R::KIND,
                record_id: record.id(),
            };
            self.audit_attempt(user, record, action, AuditResult::Denied, &err.to_string());
            return Err(err);
        }

        record.set_status_tag(transition.to)?;

        if let Some(effect) = transition.effect {
            if let Err(source) = self.apply_effect(effect, record).await {
                // restore the status read at validation time
                let _ = record.set_status_tag(from);
                let err = AppError::side_effect(R::KIND, record.id(), source);
                self.audit_attempt(user, record, action, AuditResult::Failed, &err.to_string());
                return Err(err);
            }
        }

        tracing::info!(
            entity = R::KIND,
            record_id = record.id(),
            from,
            to = transition.to,
            actor = %user.username,
            "workflow transition committed"
        );

        self.audit.record(
            NewAuditEntry::new(user.username.as_str(), action, R::KIND, record.id())
                .with_status_change(from, transition.to),
        );
        self.dispatch_notification(user, record, transition);

        Ok(TransitionOutcome {
            entity: R::KIND,
            record_id: record.id(),
            from,
            to: transition.to,
            effect: transition.effect,
        })
    }

    async fn asset_is_live<R: WorkflowRecord>(&self, record: &R) -> AppResult<bool> {
        match record.asset_id() {
            None => Ok(false),
            Some(asset_id) => self
                .store
                .exists(asset_id)
                .await
                .map_err(|e| AppError::side_effect(R::KIND, record.id(), e)),
        }
    }

    async fn apply_effect<R: WorkflowRecord>(
        &self,
        effect: Effect,
        record: &R,
    ) -> anyhow::Result<()> {
        let asset_id = record.asset_id().context("record references no asset")?;
        match effect {
            Effect::DeleteAsset => self.store.delete(asset_id).await,
            Effect::RelocateAsset => {
                let target = record
                    .relocation_target()
                    .context("record has no destination location")?;
                self.store.set_location(asset_id, target).await
            }
        }
    }

    /// Notify the record's creator. Fire-and-forget: a full channel or a
    /// missing recipient never fails the transition.
    fn dispatch_notification<R: WorkflowRecord>(
        &self,
        user: &User,
        record: &R,
        transition: &Transition,
    ) {
        let Some(recipient) = record.created_by() else {
            return;
        };
        if recipient == user.id {
            return;
        }

        let title = format!("{} {}", R::KIND, transition.to.replace('_', " "));
        let message = format!(
            "{} record #{} for \"{}\" is now {}",
            R::KIND,
            record.id(),
            record.asset_display_name(),
            transition.to.replace('_', " "),
        );
        let mut notification =
            Notification::workflow(recipient, Some(user.id), title, message, R::KIND, record.id());
        if transition.effect == Some(Effect::DeleteAsset) {
            notification = notification.with_priority("high");
        }
        self.notifier.notify(notification);
    }

    fn audit_attempt<R: WorkflowRecord>(
        &self,
        user: &User,
        record: &R,
        action: &str,
        result: AuditResult,
        detail: &str,
    ) {
        self.audit.record(
            NewAuditEntry::new(user.username.as_str(), action, R::KIND, record.id())
                .with_result(result)
                .with_detail(detail),
        );
    }
}
