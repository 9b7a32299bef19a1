//! Transfer workflow
//!
//! Approval is admin-only; managers drive execution. Completing a transfer
//! relocates the asset to the record's destination.

use crate::entity::transfer::{Transfer, TransferStatus};
use crate::entity::user::Role;
use crate::error::{AppError, AppResult};
use crate::workflow::{Effect, Transition, WorkflowDef, WorkflowRecord};

pub static DEF: WorkflowDef = WorkflowDef {
    entity: "transfer",
    states: &[
        "pending",
        "approved",
        "in_progress",
        "completed",
        "cancelled",
        "rejected",
    ],
    initial: "pending",
    terminal: &["completed", "cancelled", "rejected"],
    transitions: &[
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
            to: "rejected",
            roles: &[],
            effect: None,
            needs_live_asset: false,
        },
        Transition {
            from: "pending",
            action: "cancel",
            to: "cancelled",
            roles: &[],
            effect: None,
            needs_live_asset: false,
        },
        Transition {
            from: "approved",
            action: "start",
            to: "in_progress",
            roles: &[Role::Manager],
            effect: None,
            needs_live_asset: false,
        },
        Transition {
            from: "approved",
            action: "complete",
            to: "completed",
            roles: &[Role::Manager],
            effect: Some(Effect::RelocateAsset),
            needs_live_asset: false,
        },
        Transition {
            from: "approved",
            action: "revoke",
            to: "pending",
            roles: &[Role::Manager],
            effect: None,
            needs_live_asset: false,
        },
        Transition {
            from: "in_progress",
            action: "complete",
            to: "completed",
            roles: &[Role::Manager],
            effect: Some(Effect::RelocateAsset),
            needs_live_asset: false,
        },
        Transition {
            from: "rejected",
            action: "approve",
            to: "approved",
            roles: &[Role::Manager],
            effect: None,
            needs_live_asset: false,
        },
        Transition {
            from: "completed",
            action: "reopen",
            to: "approved",
            roles: &[Role::Manager],
            effect: None,
            needs_live_asset: false,
        },
    ],
};

impl WorkflowRecord for Transfer {
    const KIND: &'static str = "transfer";

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
            TransferStatus::from_tag(tag).ok_or_else(|| AppError::UnknownStatus(tag.into()))?;
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

    fn relocation_target(&self) -> Option<&str> {
        self.to_location.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::table_tests::check_table;

    #[test]
    fn test_table_integrity() {
        check_table(&DEF);
        for t in DEF.transitions {
            assert!(TransferStatus::from_tag(t.from).is_some());
            assert!(TransferStatus::from_tag(t.to).is_some());
        }
    }

    #[test]
    fn test_approval_is_admin_only() {
        let approve = DEF.find("pending", "approve").unwrap();
        assert!(approve.allows(Role::Admin));
        assert!(!approve.allows(Role::Manager));

        let reject = DEF.find("pending", "reject").unwrap();
        assert!(!reject.allows(Role::AssetManager));
    }

    #[test]
    fn test_completion_relocates() {
        for from in ["approved", "in_progress"] {
            let t = DEF.find(from, "complete").unwrap();
            assert_eq!(t.effect, Some(Effect::RelocateAsset));
            assert!(t.allows(Role::Manager));
        }
    }

    #[test]
    fn test_cancelled_is_a_dead_end() {
        assert!(DEF.available_actions(Role::Admin, "cancelled").is_empty());
    }
}
