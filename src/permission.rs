//! Permission module
//!
//! Pure predicates over a resolved [`User`] value. Role grants a coarse
//! default; permission tags are additive on top of it. Admin bypasses every
//! check.

use crate::entity::user::{Role, User};
use crate::policy;

/// Permission constants
pub mod perm {
    pub const ASSETS: &str = "assets";
    pub const MAINTENANCE: &str = "maintenance";
    pub const TRANSFERS: &str = "transfers";
    pub const AUCTIONS: &str = "auctions";
    pub const DISPOSALS: &str = "disposals";
    pub const USERS: &str = "users";
    pub const REPORTS: &str = "reports";
    pub const AUDIT: &str = "audit";
    pub const NOTIFICATIONS: &str = "notifications";

    /// Wildcard granting every capability
    pub const ALL_TAG: &str = "all";

    /// All permissions
    pub const ALL: [&str; 9] = [
        ASSETS,
        MAINTENANCE,
        TRANSFERS,
        AUCTIONS,
        DISPOSALS,
        USERS,
        REPORTS,
        AUDIT,
        NOTIFICATIONS,
    ];
}

/// Workflow domains that have a dedicated manager role
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Domain {
    Maintenance,
    Auction,
    Disposal,
}

impl Domain {
    pub fn name(&self) -> &'static str {
        match self {
            Domain::Maintenance => "maintenance",
            Domain::Auction => "auction",
            Domain::Disposal => "disposal",
        }
    }

    /// The catalog tag covering this domain
    pub fn permission_tag(&self) -> &'static str {
        match self {
            Domain::Maintenance => perm::MAINTENANCE,
            Domain::Auction => perm::AUCTIONS,
            Domain::Disposal => perm::DISPOSALS,
        }
    }

    pub fn manager_role(&self) -> Role {
        match self {
            Domain::Maintenance => Role::MaintenanceManager,
            Domain::Auction => Role::AuctionManager,
            Domain::Disposal => Role::DisposalManager,
        }
    }
}

/// Check if the user has a specific permission tag.
pub fn has_permission(user: &User, tag: &str) -> bool {
    if user.role == Role::Admin {
        return true;
    }
    user.permissions.iter().any(|p| p == tag || p == perm::ALL_TAG)
}

/// Check if the user manages the given workflow domain.
///
/// The permission column stores both the domain name and its catalog tag in
/// the wild; accept either.
pub fn is_role_manager_of(user: &User, domain: Domain) -> bool {
    user.role == domain.manager_role()
        || has_permission(user, domain.name())
        || has_permission(user, domain.permission_tag())
}

/// Locations the user is restricted to. Empty means all locations.
///
/// Admins are unrestricted regardless of what their access list contains.
pub fn assigned_locations(user: &User) -> &[String] {
    if user.role == Role::Admin {
        &[]
    } else {
        &user.asset_access
    }
}

/// Managers of `domain` who may act at `location`.
///
/// Used to route workflow notifications to the people responsible for the
/// asset's location.
pub fn users_for_domain_at_location<'a>(
    users: &'a [User],
    domain: Domain,
    location: Option<&str>,
) -> Vec<&'a User> {
    users
        .iter()
        .filter(|u| is_role_manager_of(u, domain))
        .filter(|u| policy::can_access_location(u, location))
        .collect()
}
