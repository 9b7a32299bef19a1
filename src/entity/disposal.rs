//! Disposal record entity

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::policy::LocationScoped;

/// Disposal status
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisposalStatus {
    Draft,
    Pending,
    Approved,
    InProgress,
    Completed,
    Cancelled,
}

impl DisposalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisposalStatus::Draft => "draft",
            DisposalStatus::Pending => "pending",
            DisposalStatus::Approved => "approved",
            DisposalStatus::InProgress => "in_progress",
            DisposalStatus::Completed => "completed",
            DisposalStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "draft" => Some(DisposalStatus::Draft),
            "pending" => Some(DisposalStatus::Pending),
            "approved" => Some(DisposalStatus::Approved),
            "in_progress" => Some(DisposalStatus::InProgress),
            "completed" => Some(DisposalStatus::Completed),
            "cancelled" => Some(DisposalStatus::Cancelled),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Disposal {
    pub id: i64,

    pub asset_id: Option<i64>,

    pub asset_name: Option<String>,

    /// Resolved location of the referenced asset, supplied by the caller
    pub asset_location: Option<String>,

    pub disposal_date: Option<NaiveDate>,

    /// Disposal method (sale, donation, destruction, ...)
    pub method: Option<String>,

    pub reason: Option<String>,

    pub proceeds: Option<Decimal>,

    pub status: DisposalStatus,

    pub created_by: Option<i64>,

    pub approved_by: Option<i64>,
}

impl LocationScoped for Disposal {
    fn location(&self) -> Option<&str> {
        self.asset_location.as_deref()
    }
}
