//! Visibility-scoped statistics
//!
//! Dashboard aggregates are computed strictly over the records the user may
//! see; the visibility filter runs first so counts and sums never leak
//! inaccessible locations.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::entity::asset::Asset;
use crate::entity::auction::{Auction, AuctionStatus};
use crate::entity::disposal::{Disposal, DisposalStatus};
use crate::entity::maintenance::Maintenance;
use crate::entity::user::User;
use crate::policy::visible;
use crate::workflow::WorkflowRecord;

/// Count of visible records per status
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StatusBreakdown {
    pub total: usize,
    pub by_status: BTreeMap<String, usize>,
}

pub fn status_breakdown<R: WorkflowRecord>(user: &User, records: &[R]) -> StatusBreakdown {
    let mut breakdown = StatusBreakdown::default();
    for record in visible(user, records) {
        breakdown.total += 1;
        *breakdown
            .by_status
            .entry(record.status_tag().to_string())
            .or_insert(0) += 1;
    }
    breakdown
}

/// Asset register summary
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AssetSummary {
    pub total: usize,
    pub by_status: BTreeMap<String, usize>,
    pub by_location: BTreeMap<String, usize>,
    pub purchase_cost_total: Decimal,
}

pub fn asset_summary(user: &User, assets: &[Asset]) -> AssetSummary {
    let mut summary = AssetSummary::default();
    for asset in visible(user, assets) {
        summary.total += 1;
        *summary
            .by_status
            .entry(asset.status.as_str().to_string())
            .or_insert(0) += 1;
        if let Some(location) = &asset.location {
            *summary.by_location.entry(location.clone()).or_insert(0) += 1;
        }
        if let Some(cost) = asset.purchase_cost {
            summary.purchase_cost_total += cost;
        }
    }
    summary
}

/// Total maintenance cost over visible records
pub fn maintenance_cost_total(user: &User, records: &[Maintenance]) -> Decimal {
    visible(user, records).map(|r| r.cost).sum()
}

/// Winning bids of visible completed auctions
pub fn auction_proceeds_total(user: &User, records: &[Auction]) -> Decimal {
    visible(user, records)
        .filter(|r| r.status == AuctionStatus::Completed)
        .filter_map(|r| r.winning_bid)
        .sum()
}

/// Proceeds of visible completed disposals
pub fn disposal_proceeds_total(user: &User, records: &[Disposal]) -> Decimal {
    visible(user, records)
        .filter(|r| r.status == DisposalStatus::Completed)
        .filter_map(|r| r.proceeds)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::asset::AssetStatus;
    use crate::entity::maintenance::{MaintenancePriority, MaintenanceStatus};
    use crate::entity::user::{Role, UserStatus};

    fn user(role: Role, asset_access: &[&str]) -> User {
        User {
            id: 1,
            username: "test".to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: None,
            role,
            status: UserStatus::Active,
            department: None,
            location: None,
            permissions: Vec::new(),
            asset_access: asset_access.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn maintenance(id: i64, location: &str, status: MaintenanceStatus, cost: i64) -> Maintenance {
        Maintenance {
            id,
            asset_id: Some(id),
            asset_name: None,
            asset_location: Some(location.to_string()),
            maintenance_date: None,
            description: None,
            cost: Decimal::new(cost, 2),
            priority: MaintenancePriority::Medium,
            performed_by: None,
            status,
            created_by: None,
        }
    }

    fn asset(id: i64, location: &str, cost: i64) -> Asset {
        Asset {
            id,
            name: format!("Asset {}", id),
            description: None,
            category: None,
            purchase_date: None,
            purchase_cost: Some(Decimal::new(cost, 2)),
            location: Some(location.to_string()),
            status: AssetStatus::Active,
            serial_number: None,
            custodian_name: None,
            quantity: 1,
            created_by: None,
        }
    }

    #[test]
    fn test_breakdown_counts_only_visible_records() {
        let records = vec![
            maintenance(1, "Gusau Library", MaintenanceStatus::Scheduled, 10_000),
            maintenance(2, "Gusau Library", MaintenanceStatus::Completed, 25_000),
            maintenance(3, "Gusau Central Market", MaintenanceStatus::Scheduled, 99_999),
        ];
        let restricted = user(Role::MaintenanceManager, &["Gusau Library"]);

        let breakdown = status_breakdown(&restricted, &records);
        assert_eq!(breakdown.total, 2);
        assert_eq!(breakdown.by_status.get("scheduled"), Some(&1));
        assert_eq!(breakdown.by_status.get("completed"), Some(&1));

        let cost = maintenance_cost_total(&restricted, &records);
        assert_eq!(cost, Decimal::new(35_000, 2));
    }

    #[test]
    fn test_admin_sees_everything() {
        let records = vec![
            maintenance(1, "Gusau Library", MaintenanceStatus::Scheduled, 10_000),
            maintenance(2, "Gusau Central Market", MaintenanceStatus::Scheduled, 20_000),
        ];
        let admin = user(Role::Admin, &[]);
        assert_eq!(status_breakdown(&admin, &records).total, 2);
    }

    #[test]
    fn test_proceeds_count_only_completed_visible_records() {
        let auction = |id: i64, location: &str, status: AuctionStatus, bid: Option<i64>| Auction {
            id,
            asset_id: Some(id),
            asset_name: None,
            asset_location: Some(location.to_string()),
            auction_date: None,
            starting_bid: None,
            reserve_price: None,
            winning_bid: bid.map(|b| Decimal::new(b, 2)),
            winner_name: None,
            winner_contact: None,
            status,
            description: None,
            created_by: None,
            approved_by: None,
        };
        let auctions = vec![
            auction(1, "Gusau Library", AuctionStatus::Completed, Some(80_000)),
            auction(2, "Gusau Library", AuctionStatus::BiddingOpen, Some(40_000)),
            auction(3, "Gusau Central Market", AuctionStatus::Completed, Some(60_000)),
        ];
        let restricted = user(Role::AuctionManager, &["Gusau Library"]);
        assert_eq!(
            auction_proceeds_total(&restricted, &auctions),
            Decimal::new(80_000, 2)
        );

        let disposal = |id: i64, status: DisposalStatus, proceeds: Option<i64>| Disposal {
            id,
            asset_id: Some(id),
            asset_name: None,
            asset_location: Some("Gusau Library".to_string()),
            disposal_date: None,
            method: None,
            reason: None,
            proceeds: proceeds.map(|p| Decimal::new(p, 2)),
            status,
            created_by: None,
            approved_by: None,
        };
        let disposals = vec![
            disposal(1, DisposalStatus::Completed, Some(30_000)),
            disposal(2, DisposalStatus::InProgress, Some(90_000)),
            disposal(3, DisposalStatus::Completed, None),
        ];
        assert_eq!(
            disposal_proceeds_total(&restricted, &disposals),
            Decimal::new(30_000, 2)
        );
    }

    #[test]
    fn test_asset_summary_by_location() {
        let assets = vec![
            asset(1, "Gusau Library", 100_000),
            asset(2, "Gusau Library", 50_000),
            asset(3, "Gusau Central Market", 75_000),
        ];
        let restricted = user(Role::AssetManager, &["Gusau Library"]);

        let summary = asset_summary(&restricted, &assets);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.by_location.get("Gusau Library"), Some(&2));
        assert!(summary.by_location.get("Gusau Central Market").is_none());
        assert_eq!(summary.purchase_cost_total, Decimal::new(150_000, 2));
    }
}
