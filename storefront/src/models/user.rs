use serde::{Deserialize, Serialize};

/// A storefront account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Account id
    pub id: u64,
    /// First name
    pub name: String,
    /// Last name
    pub second_name: String,
    /// Patronymic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub third_name: Option<String>,
    /// Login email
    pub email: String,
    /// Contact phone
    pub phone_number: String,
    /// Saved payment details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_info: Option<String>,
    /// Id of [`User::role`]
    #[serde(rename = "roleID")]
    pub role_id: u64,
    /// Access role
    pub role: Role,
    /// Session token, when the backend embeds it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Refresh token, when the backend embeds it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

impl User {
    /// Overlay `updated` on this user.
    ///
    /// Optional fields missing from `updated` keep their current value.
    #[must_use]
    pub fn merged_with(self, updated: Self) -> Self {
        Self {
            third_name: updated.third_name.or(self.third_name),
            payment_info: updated.payment_info.or(self.payment_info),
            token: updated.token.or(self.token),
            refresh_token: updated.refresh_token.or(self.refresh_token),
            ..updated
        }
    }

    /// Whether the account has the `admin` role
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role.kind == "admin"
    }
}

/// Access role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Role id
    pub id: u64,
    /// Role name (`admin`, `user`, ...)
    #[serde(rename = "type")]
    pub kind: String,
    /// Human-readable description
    pub description: String,
}

/// Login/signup response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// The signed-in account
    pub user: User,
    /// Bearer token for later requests
    pub token: String,
    /// Token used to renew the session
    pub refresh_token: String,
}

/// Credentials for `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Login email
    pub email: String,
    /// Plain password
    pub password: String,
}

/// Payload for `POST /auth/signup`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Public nickname
    pub nickname: String,
    /// Login email
    pub email: String,
    /// Plain password
    pub password: String,
}

/// Partial profile update for `PATCH /users/{id}/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    /// New first name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New last name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_name: Option<String>,
    /// New patronymic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub third_name: Option<String>,
    /// New email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New phone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(token: Option<&str>) -> User {
        User {
            id: 7,
            name: "Ada".into(),
            second_name: "Lovelace".into(),
            third_name: None,
            email: "ada@example.com".into(),
            phone_number: "+100".into(),
            payment_info: Some("visa".into()),
            role_id: 2,
            role: Role {
                id: 2,
                kind: "user".into(),
                description: "Customer".into(),
            },
            token: token.map(str::to_owned),
            refresh_token: None,
        }
    }

    #[test]
    fn test_merge_keeps_fields_missing_from_update() {
        let stored = user(Some("t-1"));
        let mut updated = user(None);
        updated.name = "Augusta".into();
        updated.payment_info = None;

        let merged = stored.merged_with(updated);
        assert_eq!(merged.name, "Augusta");
        assert_eq!(merged.token.as_deref(), Some("t-1"));
        assert_eq!(merged.payment_info.as_deref(), Some("visa"));
    }

    #[test]
    fn test_user_update_skips_unset_fields() -> Result<(), serde_json::Error> {
        let update = UserUpdate {
            phone_number: Some("+200".into()),
            ..UserUpdate::default()
        };
        assert_eq!(serde_json::to_string(&update)?, r#"{"phoneNumber":"+200"}"#);
        Ok(())
    }

    #[test]
    fn test_role_type_field() -> Result<(), serde_json::Error> {
        let mut admin = user(None);
        admin.role = serde_json::from_str(r#"{"id":1,"type":"admin","description":"Staff"}"#)?;
        assert!(admin.is_admin());
        assert!(!user(None).is_admin());
        Ok(())
    }
}
