//! User model with role, badge tier, and ban state.

use serde::{Deserialize, Serialize};

/// Site-wide role of an account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// Membership badge tier. Bronze is quota-limited; gold posts without limit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    Bronze,
    Gold,
}

impl Default for Badge {
    fn default() -> Self {
        Badge::Bronze
    }
}

impl Badge {
    pub fn as_str(&self) -> &'static str {
        match self {
            Badge::Bronze => "bronze",
            Badge::Gold => "gold",
        }
    }
}

/// A registered forum user. The email is the natural key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub badge: Badge,
    #[serde(default)]
    pub banned: bool,
}

/// Response of the role lookup route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleResponse {
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let json = r#"{
            "_id": "u1",
            "name": "Alice",
            "email": "alice@example.com"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, Role::User);
        assert_eq!(user.badge, Badge::Bronze);
        assert!(!user.banned);
    }

    #[test]
    fn test_role_and_badge_wire_values() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(serde_json::to_string(&Badge::Gold).unwrap(), "\"gold\"");
        assert!(Role::Admin.is_admin());
        assert!(!Role::User.is_admin());
    }
}
