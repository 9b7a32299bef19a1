//! Maintenance workflow
//!
//! Scheduling and completion stay admin-gated; the asset is retained
//! whatever the outcome.

use crate::entity::maintenance::{Maintenance, MaintenanceStatus};
use crate::error::{AppError, AppResult};
use crate::workflow::{Transition, WorkflowDef, WorkflowRecord};

pub static DEF: WorkflowDef = WorkflowDef {
    entity: "maintenance",
    states: &[
        "scheduled",
        "in_progress",
        "completed",
        "cancelled",
        "overdue",
    ],
    initial: "scheduled",
    terminal: &["completed", "cancelled"],
    transitions: &[
        Transition {
            from: "scheduled",
            action: "start",
            to: "in_progress",
            roles: &[],
            effect: None,
            needs_live_asset: false,
        },
        Transition {
            from: "scheduled",
            action: "cancel",
            to: "cancelled",
            roles: &[],
            effect: None,
            needs_live_asset: false,
        },
        // the overdue sweep feeds this state; handling stays admin-gated
        Transition {
            from: "scheduled",
            action: "mark_overdue",
            to: "overdue",
            roles: &[],
            effect: None,
            needs_live_asset: false,
        },
        Transition {
            from: "overdue",
            action: "start",
            to: "in_progress",
            roles: &[],
            effect: None,
            needs_live_asset: false,
        },
        Transition {
            from: "overdue",
            action: "cancel",
            to: "cancelled",
            roles: &[],
            effect: None,
            needs_live_asset: false,
        },
        Transition {
            from: "in_progress",
            action: "complete",
            to: "completed",
            roles: &[],
            effect: None,
            needs_live_asset: false,
        },
        Transition {
            from: "in_progress",
            action: "cancel",
            to: "cancelled",
            roles: &[],
            effect: None,
            needs_live_asset: false,
        },
    ],
};

impl WorkflowRecord for Maintenance {
    const KIND: &'static str = "maintenance";

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
            MaintenanceStatus::from_tag(tag).ok_or_else(|| AppError::UnknownStatus(tag.into()))?;
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
