//! Auction workflow
//!
//! Publication is admin-only; the auction manager runs the bidding cycle.
//! Completing an auction deletes the sold asset, so reopening a completed
//! auction requires the asset to still exist.

use crate::entity::auction::{Auction, AuctionStatus};
use crate::entity::user::Role;
use crate::error::{AppError, AppResult};
use crate::workflow::{Effect, Transition, WorkflowDef, WorkflowRecord};

pub static DEF: WorkflowDef = WorkflowDef {
    entity: "auction",
    states: &[
        "draft",
        "published",
        "bidding_open",
        "bidding_closed",
        "completed",
        "cancelled",
    ],
    initial: "draft",
    terminal: &["completed", "cancelled"],
    transitions: &[
        Transition {
            from: "draft",
            action: "approve",
            to: "published",
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
            from: "published",
            action: "open_bidding",
            to: "bidding_open",
            roles: &[Role::AuctionManager],
            effect: None,
            needs_live_asset: false,
        },
        Transition {
            from: "published",
            action: "cancel",
            to: "cancelled",
            roles: &[Role::AuctionManager],
            effect: None,
            needs_live_asset: false,
        },
        Transition {
            from: "bidding_open",
            action: "close_bidding",
            to: "bidding_closed",
            roles: &[Role::AuctionManager],
            effect: None,
            needs_live_asset: false,
        },
        Transition {
            from: "bidding_open",
            action: "complete",
            to: "completed",
            roles: &[Role::AuctionManager],
            effect: Some(Effect::DeleteAsset),
            needs_live_asset: false,
        },
        Transition {
            from: "bidding_closed",
            action: "complete",
            to: "completed",
            roles: &[Role::AuctionManager],
            effect: Some(Effect::DeleteAsset),
            needs_live_asset: false,
        },
        Transition {
            from: "bidding_closed",
            action: "reopen",
            to: "bidding_open",
            roles: &[Role::AuctionManager],
            effect: None,
            needs_live_asset: false,
        },
        Transition {
            from: "cancelled",
            action: "approve",
            to: "published",
            roles: &[Role::AuctionManager],
            effect: None,
            needs_live_asset: false,
        },
        Transition {
            from: "completed",
            action: "reopen",
            to: "bidding_closed",
            roles: &[Role::AuctionManager],
            effect: None,
            needs_live_asset: true,
        },
    ],
};

impl WorkflowRecord for Auction {
    const KIND: &'static str = "auction";

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
            AuctionStatus::from_tag(tag).ok_or_else(|| AppError::UnknownStatus(tag.into()))?;
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::table_tests::check_table;

    #[test]
    fn test_table_integrity() {
        check_table(&DEF);
        for t in DEF.transitions {
            assert!(AuctionStatus::from_tag(t.from).is_some());
            assert!(AuctionStatus::from_tag(t.to).is_some());
        }
    }

    #[test]
    fn test_publication_is_admin_only() {
        let approve = DEF.find("draft", "approve").unwrap();
        assert!(approve.allows(Role::Admin));
        assert!(!approve.allows(Role::AuctionManager));
    }

    #[test]
    fn test_completion_deletes_asset() {
        for from in ["bidding_open", "bidding_closed"] {
            let t = DEF.find(from, "complete").unwrap();
            assert_eq!(t.effect, Some(Effect::DeleteAsset));
        }
    }

    #[test]
    fn test_reopen_after_completion_needs_live_asset() {
        let reopen = DEF.find("completed", "reopen").unwrap();
        assert!(reopen.needs_live_asset);
        assert_eq!(reopen.to, "bidding_closed");

        // reopening a closed bidding round has no such guard
        let reopen = DEF.find("bidding_closed", "reopen").unwrap();
        assert!(!reopen.needs_live_asset);
    }

    #[test]
    fn test_manager_action_menu() {
        let mut actions = DEF.available_actions(Role::AuctionManager, "bidding_open");
        actions.sort_unstable();
        assert_eq!(actions, vec!["close_bidding", "complete"]);

        // the draft gate hides approval from the manager
        assert!(DEF
            .available_actions(Role::AuctionManager, "draft")
            .is_empty());
    }
}
