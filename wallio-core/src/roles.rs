//! Role-based permission checks.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl UserRole {
    pub fn can_access_admin_panel(self) -> bool {
        matches!(self, UserRole::Admin)
    }

    pub fn can_manage_users(self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Content management covers wallpaper deletion and generation.
    pub fn can_manage_content(self) -> bool {
        matches!(self, UserRole::Admin)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_has_all_permissions() {
        assert!(UserRole::Admin.can_access_admin_panel());
        assert!(UserRole::Admin.can_manage_users());
        assert!(UserRole::Admin.can_manage_content());
    }

    #[test]
    fn plain_user_has_none() {
        assert!(!UserRole::User.can_access_admin_panel());
        assert!(!UserRole::User.can_manage_users());
        assert!(!UserRole::User.can_manage_content());
    }

    #[test]
    fn role_deserializes_lowercase() {
        assert_eq!(
            serde_json::from_str::<UserRole>("\"admin\"").unwrap(),
            UserRole::Admin
        );
        assert_eq!(
            serde_json::from_str::<UserRole>("\"user\"").unwrap(),
            UserRole::User
        );
    }
}
