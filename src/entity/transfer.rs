//! Transfer record entity

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::policy::LocationScoped;

/// Transfer status
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferStatus {
    Pending,
    Approved,
    InProgress,
    Completed,
    Cancelled,
    Rejected,
}

impl TransferStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferStatus::Pending => "pending",
            TransferStatus::Approved => "approved",
            TransferStatus::InProgress => "in_progress",
            TransferStatus::Completed => "completed",
            TransferStatus::Cancelled => "cancelled",
            TransferStatus::Rejected => "rejected",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "pending" => Some(TransferStatus::Pending),
            "approved" => Some(TransferStatus::Approved),
            "in_progress" => Some(TransferStatus::InProgress),
            "completed" => Some(TransferStatus::Completed),
            "cancelled" => Some(TransferStatus::Cancelled),
            "rejected" => Some(TransferStatus::Rejected),
            _ => None,
        }
    }
}

/// Transfer type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferType {
    Internal,
    External,
    Temporary,
    Permanent,
}

impl Default for TransferType {
    fn default() -> Self {
        TransferType::Internal
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Transfer {
    pub id: i64,

    pub asset_id: Option<i64>,

    pub asset_name: Option<String>,

    /// Resolved location of the referenced asset, supplied by the caller
    pub asset_location: Option<String>,

    #[serde(default)]
    pub transfer_type: TransferType,

    pub from_location: Option<String>,

    /// Destination; the asset relocates here when the transfer completes
    pub to_location: Option<String>,

    pub from_department: Option<String>,

    pub to_department: Option<String>,

    pub from_custodian: Option<String>,

    pub to_custodian: Option<String>,

    pub request_date: Option<NaiveDate>,

    pub transfer_date: Option<NaiveDate>,

    pub reason: Option<String>,

    #[serde(default)]
    pub estimated_cost: Decimal,

    pub status: TransferStatus,

    pub created_by: Option<i64>,

    pub approved_by: Option<i64>,
}

impl LocationScoped for Transfer {
    fn location(&self) -> Option<&str> {
        self.asset_location.as_deref()
    }
}
