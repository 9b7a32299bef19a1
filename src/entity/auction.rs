//! Auction record entity

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::policy::LocationScoped;

/// Auction status
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuctionStatus {
    Draft,
    Published,
    BiddingOpen,
    BiddingClosed,
    Completed,
    Cancelled,
}

impl AuctionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuctionStatus::Draft => "draft",
            AuctionStatus::Published => "published",
            AuctionStatus::BiddingOpen => "bidding_open",
            AuctionStatus::BiddingClosed => "bidding_closed",
            AuctionStatus::Completed => "completed",
            AuctionStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "draft" => Some(AuctionStatus::Draft),
            "published" => Some(AuctionStatus::Published),
            "bidding_open" => Some(AuctionStatus::BiddingOpen),
            "bidding_closed" => Some(AuctionStatus::BiddingClosed),
            "completed" => Some(AuctionStatus::Completed),
            "cancelled" => Some(AuctionStatus::Cancelled),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Auction {
    pub id: i64,

    pub asset_id: Option<i64>,

    pub asset_name: Option<String>,

    /// Resolved location of the referenced asset, supplied by the caller
    pub asset_location: Option<String>,

    pub auction_date: Option<NaiveDate>,

    pub starting_bid: Option<Decimal>,

    pub reserve_price: Option<Decimal>,

    pub winning_bid: Option<Decimal>,

    pub winner_name: Option<String>,

    pub winner_contact: Option<String>,

    pub status: AuctionStatus,

    pub description: Option<String>,

    pub created_by: Option<i64>,

    pub approved_by: Option<i64>,
}

impl LocationScoped for Auction {
    fn location(&self) -> Option<&str> {
        self.asset_location.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            AuctionStatus::Draft,
            AuctionStatus::Published,
            AuctionStatus::BiddingOpen,
            AuctionStatus::BiddingClosed,
            AuctionStatus::Completed,
            AuctionStatus::Cancelled,
        ] {
            assert_eq!(AuctionStatus::from_tag(status.as_str()), Some(status));
        }
    }
}
