//! Maintenance record entity

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::policy::LocationScoped;

/// Maintenance status
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
    Overdue,
}

impl MaintenanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenanceStatus::Scheduled => "scheduled",
            MaintenanceStatus::InProgress => "in_progress",
            MaintenanceStatus::Completed => "completed",
            MaintenanceStatus::Cancelled => "cancelled",
            MaintenanceStatus::Overdue => "overdue",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "scheduled" => Some(MaintenanceStatus::Scheduled),
            "in_progress" => Some(MaintenanceStatus::InProgress),
            "completed" => Some(MaintenanceStatus::Completed),
            "cancelled" => Some(MaintenanceStatus::Cancelled),
            "overdue" => Some(MaintenanceStatus::Overdue),
            _ => None,
        }
    }
}

/// Maintenance priority
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenancePriority {
    Low,
    Medium,
    High,
    Critical,
}

impl Default for MaintenancePriority {
    fn default() -> Self {
        MaintenancePriority::Medium
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Maintenance {
    pub id: i64,

    pub asset_id: Option<i64>,

    /// Denormalized asset name for display; None once the asset is gone
    pub asset_name: Option<String>,

    /// Resolved location of the referenced asset, supplied by the caller
    pub asset_location: Option<String>,

    pub maintenance_date: Option<NaiveDate>,

    pub description: Option<String>,

    #[serde(default)]
    pub cost: Decimal,

    #[serde(default)]
    pub priority: MaintenancePriority,

    pub performed_by: Option<String>,

    pub status: MaintenanceStatus,

    pub created_by: Option<i64>,
}

impl Maintenance {
    /// A scheduled job whose date has passed is overdue.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status == MaintenanceStatus::Scheduled
            && self.maintenance_date.is_some_and(|date| date < today)
    }
}

/// Flip every overdue scheduled job to `overdue`, returning how many changed.
///
/// This is a scheduler-driven sweep, not a role-gated transition; the
/// resulting `overdue` status then gates the usual start/cancel actions.
pub fn sweep_overdue(records: &mut [Maintenance], today: NaiveDate) -> usize {
    let mut flipped = 0;
    for record in records.iter_mut() {
        if record.is_overdue(today) {
            record.status = MaintenanceStatus::Overdue;
            flipped += 1;
        }
    }
    flipped
}

impl LocationScoped for Maintenance {
    fn location(&self) -> Option<&str> {
        self.asset_location.as_deref()
    }
}
