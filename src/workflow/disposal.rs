//! Disposal workflow
//!
//! Drafts are approved by admin, either directly or via the pending queue;
//! the disposal manager executes. Completing a disposal deletes the asset,
//! so reopening a completed disposal requires the asset to still exist.

use crate::entity::disposal::{Disposal, DisposalStatus};
use crate::entity::user::Role;
use crate::error::{AppError, AppResult};
use crate::workflow::{Effect, Transition, WorkflowDef, WorkflowRecord};

pub static DEF: WorkflowDef = WorkflowDef {
    entity: "disposal",
    states: &[
        "draft",
        "pending",
        "approved",
        "in_progress",
        "completed",
        "cancelled",
    ],
    initial: "draft",
    terminal: &["completed", "cancelled"],
    transitions: &[
        Transition {
            from: "draft",
            action: "approve",
            to: "approved",
            roles: &[],
            effect: None,
            needs_live_asset: false,
        },
        Transition {
            from: "draft",
            action: "reject",
            to: "cancelled",
            roles: &[],
            effect: None,
            needs_live_asset: false,
        },
        Transition {
            from: "draft",
            action: "submit",
            to: "pending",
            roles: &[Role::DisposalManager],
            effect: None,
            needs_live_asset: false,
        },
        Transition {
            from: "pending",
            action: "approve",
            to: "approved",
            roles: &[],
            effect: None,
            needs_live_asset: false,
        },
        Transition {
            from: "pending",
            action: "reject",
            to: "cancelled",
            roles: &[],
            effect: None,
            needs_live_asset: false,
        },
        Transition {
            from: "approved",
            action: "start",
            to: "in_progress",
            roles: &[Role::DisposalManager],
            effect: None,
            needs_live_asset: false,
        },
        Transition {
            from: "approved",
            action: "revoke",
            to: "draft",
            roles: &[Role::DisposalManager],
            effect: None,
            needs_live_asset: false,
        },
        Transition {
            from: "in_progress",
            action: "complete",
            to: "completed",
            roles: &[Role::DisposalManager],
            effect: Some(Effect::DeleteAsset),
            needs_live_asset: false,
        },
        Transition {
            from: "in_progress",
            action: "revoke",
            to: "approved",
            roles: &[Role::DisposalManager],
            effect: None,
            needs_live_asset: false,
        },
        Transition {
            from: "cancelled",
            action: "approve",
            to: "approved",
            roles: &[Role::DisposalManager],
            effect: None,
            needs_live_asset: false,
        },
        Transition {
            from: "completed",
            action: "reopen",
            to: "in_progress",
            roles: &[Role::DisposalManager],
            effect: None,
            needs_live_asset: true,
        },
    ],
};

impl WorkflowRecord for Disposal {
    const KIND: &'static str = "disposal";

    fn id(&self) -> i64 {
        self.id
    }

    fn asset_id(&self) -> Option<i64> {
        self.asset_id
    }

    fn status_tag(&self) -> &'static str {
        self.status.as_str()
    }

    fn set_status_tag(&mut self, tag: &str) -> AppResult<()> {
        self.status =
            DisposalStatus::from_tag(tag).ok_or_else(|| AppError::UnknownStatus(tag.into()))?;
        Ok(())
    }

    fn definition() -> &'static WorkflowDef {
        &DEF
    }

    fn created_by(&self) -> Option<i64> {
        self.created_by
    }

    fn asset_name(&self) -> Option<&str> {
        self.asset_name.as_deref()
    }
}
