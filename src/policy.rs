//! Location access policy
//!
//! Every read and mutation in the system funnels through these two checks:
//! [`can_access_location`] for a single record, [`filter_visible`] for
//! collections. Both must run before any client-side filter or aggregate so
//! that counts never leak records from inaccessible locations.

use crate::entity::user::{Role, User};
use crate::permission::assigned_locations;

/// A record gated by the location of its referenced asset.
pub trait LocationScoped {
    fn location(&self) -> Option<&str>;
}

/// Decide whether `user` may see or act on records at `location`.
///
/// Location names compare by exact string equality; no case or whitespace
/// normalization. A record without a location is invisible to restricted
/// users (fails closed).
pub fn can_access_location(user: &User, location: Option<&str>) -> bool {
    if user.role == Role::Admin {
        return true;
    }

    let assigned = assigned_locations(user);
    if assigned.is_empty() {
        return true;
    }

    match location {
        Some(loc) if !loc.is_empty() => assigned.iter().any(|a| a == loc),
        _ => false,
    }
}

/// Keep only the records the user may see. Order is preserved.
pub fn filter_visible<T: LocationScoped>(user: &User, records: Vec<T>) -> Vec<T> {
    records
        .into_iter()
        .filter(|r| can_access_location(user, r.location()))
        .collect()
}

/// Borrowing variant of [`filter_visible`] for read-only consumers (stats,
/// exports).
pub fn visible<'a, T: LocationScoped>(
    user: &'a User,
    records: &'a [T],
) -> impl Iterator<Item = &'a T> {
    records
        .iter()
        .filter(move |r| can_access_location(user, r.location()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::user::UserStatus;

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

    struct Rec(Option<&'static str>);

    impl LocationScoped for Rec {
        fn location(&self) -> Option<&str> {
            self.0
        }
    }

    #[test]
    fn test_admin_bypass() {
        let admin = user(Role::Admin, &["Gusau Library"]);
        assert!(can_access_location(&admin, Some("Anywhere")));
        assert!(can_access_location(&admin, None));
    }

    #[test]
    fn test_unrestricted_when_no_assignment() {
        let manager = user(Role::Manager, &[]);
        assert!(can_access_location(&manager, Some("Gusau Library")));
        assert!(can_access_location(&manager, None));
    }

    #[test]
    fn test_fails_closed_on_missing_location() {
        let restricted = user(Role::User, &["Gusau Library"]);
        assert!(!can_access_location(&restricted, None));
        assert!(!can_access_location(&restricted, Some("")));
    }

    #[test]
    fn test_exact_match_only() {
        let restricted = user(Role::User, &["Gusau Library"]);
        assert!(can_access_location(&restricted, Some("Gusau Library")));
        assert!(!can_access_location(&restricted, Some("gusau library")));
        assert!(!can_access_location(&restricted, Some("Gusau Library ")));
    }

    #[test]
    fn test_filter_preserves_order_and_is_idempotent() {
        let restricted = user(
            Role::MaintenanceManager,
            &["Gusau North District Office", "Gusau Library"],
        );
        let records = vec![
            Rec(Some("Gusau Library")),
            Rec(Some("Gusau Central Market")),
            Rec(Some("Gusau North District Office")),
            Rec(None),
        ];

        let first = filter_visible(&restricted, records);
        let locations: Vec<_> = first.iter().map(|r| r.0).collect();
        assert_eq!(
            locations,
            vec![Some("Gusau Library"), Some("Gusau North District Office")]
        );

        let second = filter_visible(&restricted, first);
        let again: Vec<_> = second.iter().map(|r| r.0).collect();
        assert_eq!(locations, again);
    }

    #[test]
    fn test_scenario_single_assigned_office() {
        // maintenance manager assigned to one district office sees only
        // records whose asset sits there
        let manager = user(Role::MaintenanceManager, &["Gusau North District Office"]);
        let records = vec![
            Rec(Some("Gusau North District Office")),
            Rec(Some("Gusau Central Market")),
        ];
        let visible = filter_visible(&manager, records);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].0, Some("Gusau North District Office"));
    }
}
