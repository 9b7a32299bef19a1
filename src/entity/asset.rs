//! Asset entity

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::policy::LocationScoped;

/// Asset status
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetStatus {
    Active,
    Maintenance,
    Disposed,
    Auctioned,
}

impl AssetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetStatus::Active => "active",
            AssetStatus::Maintenance => "maintenance",
            AssetStatus::Disposed => "disposed",
            AssetStatus::Auctioned => "auctioned",
        }
    }
}

impl Default for AssetStatus {
    fn default() -> Self {
        AssetStatus::Active
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Asset {
    pub id: i64,

    pub name: String,

    pub description: Option<String>,

    pub category: Option<String>,

    pub purchase_date: Option<NaiveDate>,

    pub purchase_cost: Option<Decimal>,

    /// Owning location; changes only as the effect of a completed transfer
    pub location: Option<String>,

    #[serde(default)]
    pub status: AssetStatus,

    pub serial_number: Option<String>,

    pub custodian_name: Option<String>,

    #[serde(default = "default_quantity")]
    pub quantity: i32,

    pub created_by: Option<i64>,
}

fn default_quantity() -> i32 {
    1
}

impl LocationScoped for Asset {
    fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}
