//! User entity
//!
//! Identity is resolved by the embedding service (session, token) and handed
//! to the core fully formed; the core only reads it.

use serde::{Deserialize, Deserializer, Serialize};

/// User role
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Manager,
    AssetManager,
    MaintenanceManager,
    AuctionManager,
    DisposalManager,
    User,
    Auditor,
    Viewer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::AssetManager => "asset_manager",
            Role::MaintenanceManager => "maintenance_manager",
            Role::AuctionManager => "auction_manager",
            Role::DisposalManager => "disposal_manager",
            Role::User => "user",
            Role::Auditor => "auditor",
            Role::Viewer => "viewer",
        }
    }
}

/// User account status
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Active,
    Inactive,
    Suspended,
    Pending,
}

impl Default for UserStatus {
    fn default() -> Self {
        UserStatus::Active
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: i64,

    pub username: String,

    pub first_name: String,

    pub last_name: String,

    pub email: Option<String>,

    pub role: Role,

    #[serde(default)]
    pub status: UserStatus,

    pub department: Option<String>,

    /// The user's own duty station, distinct from the access list below
    pub location: Option<String>,

    /// Additive capability tags, independent of role
    #[serde(default, deserialize_with = "flexible_string_list")]
    pub permissions: Vec<String>,

    /// Locations the user is restricted to; empty means unrestricted.
    ///
    /// Upstream stores this column as free-form JSON: a list, a bare string,
    /// or a JSON-encoded list inside a string. All three forms normalize here,
    /// at the deserialization boundary, and are never re-parsed downstream.
    #[serde(default, deserialize_with = "flexible_string_list")]
    pub asset_access: Vec<String>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Accepts a JSON list, a bare string, or a string containing a JSON-encoded
/// list. A string that fails to parse as a list is kept as a singleton.
fn flexible_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        List(Vec<String>),
        One(String),
    }

    let raw = Option::<Raw>::deserialize(deserializer)?;
    Ok(match raw {
        None => Vec::new(),
        Some(Raw::List(list)) => list,
        Some(Raw::One(s)) => parse_string_entry(&s),
    })
}

fn parse_string_entry(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(list) => list,
        Err(_) => vec![raw.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_json(asset_access: &str) -> String {
        format!(
            r#"{{
                "id": 1,
                "username": "aminu.b",
                "first_name": "Aminu",
                "last_name": "Bello",
                "email": null,
                "role": "maintenance_manager",
                "department": null,
                "location": null,
                "permissions": ["maintenance"],
                "asset_access": {}
            }}"#,
            asset_access
        )
    }

    #[test]
    fn test_asset_access_as_list() {
        let user: User = serde_json::from_str(&user_json(r#"["Gusau Library"]"#)).unwrap();
        assert_eq!(user.asset_access, vec!["Gusau Library"]);
    }

    #[test]
    fn test_asset_access_as_json_encoded_string() {
        let user: User =
            serde_json::from_str(&user_json(r#""[\"Gusau Library\", \"Gusau Central Market\"]""#))
                .unwrap();
        assert_eq!(
            user.asset_access,
            vec!["Gusau Library", "Gusau Central Market"]
        );
    }

    #[test]
    fn test_asset_access_parse_failure_keeps_raw_string() {
        let user: User = serde_json::from_str(&user_json(r#""Gusau Library""#)).unwrap();
        assert_eq!(user.asset_access, vec!["Gusau Library"]);
    }

    #[test]
    fn test_asset_access_null_and_missing() {
        let user: User = serde_json::from_str(&user_json("null")).unwrap();
        assert!(user.asset_access.is_empty());

        let json = r#"{
            "id": 2,
            "username": "admin",
            "first_name": "Sule",
            "last_name": "Garba",
            "email": null,
            "role": "admin",
            "department": null,
            "location": null
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.asset_access.is_empty());
        assert!(user.permissions.is_empty());
    }

    #[test]
    fn test_role_tags() {
        assert_eq!(Role::AuctionManager.as_str(), "auction_manager");
        let role: Role = serde_json::from_str(r#""disposal_manager""#).unwrap();
        assert_eq!(role, Role::DisposalManager);
    }
}
