/// User model and submission payloads
///
/// Users are both manageable entities (the Usuarios page) and reference data
/// for task assignment. The password travels write-only: it appears in
/// create/update payloads but never in records served by the API.
///
/// # Wire format
///
/// ```json
/// {
///   "id": 7,
///   "user": "mgarcia",
///   "fullname": "María García",
///   "role": "admin",
///   "avatarUrl": "/uploads/avatars/7.png",
///   "tasks": [ { "id": 12, "title": "Fix login bug", "priority": "high" } ],
///   "createdAt": "2025-01-10T09:00:00Z",
///   "updatedAt": "2025-02-01T17:30:00Z"
/// }
/// ```
///
/// `tasks` is a derived view populated only in detail responses; the client
/// never submits it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::task::TaskSummary;

/// Known user roles, in the order the selector presents them
///
/// Records keep the role as a plain string so an unknown value coming from
/// the server still round-trips; this enum only drives the role selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
    Maintainer,
}

impl UserRole {
    /// String value as sent over the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
            UserRole::Maintainer => "maintainer",
        }
    }

    /// All selectable roles
    pub fn all() -> &'static [UserRole] {
        &[UserRole::Admin, UserRole::User, UserRole::Maintainer]
    }
}

/// User record as served by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-assigned identifier
    pub id: i64,

    /// Login handle, unique at the server
    pub user: String,

    /// Display name
    pub fullname: String,

    /// Role string (admin, user, maintainer)
    pub role: String,

    /// Server-relative avatar path, when one was uploaded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// Tasks currently assigned to this user (detail responses only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<TaskSummary>>,

    /// When the record was created (server-assigned)
    pub created_at: DateTime<Utc>,

    /// When the record was last updated (server-assigned)
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a user
///
/// The create schema: every field is required and the password must be at
/// least 6 characters.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    #[validate(length(min = 1, message = "El usuario es requerido"))]
    pub user: String,

    #[validate(length(min = 1, message = "El nombre completo es requerido"))]
    pub fullname: String,

    #[validate(length(min = 6, message = "La contraseña debe tener al menos 6 caracteres"))]
    pub password: String,

    #[validate(length(min = 1, message = "El rol es requerido"))]
    pub role: String,
}

/// Payload for updating a user
///
/// The edit schema relaxes the create schema: everything is optional. A
/// password left blank in the form is represented here as `None` and is
/// skipped during serialization, so the server reads it as "unchanged".
/// An empty-string password is never valid in this payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "El usuario es requerido"))]
    pub user: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "El nombre completo es requerido"))]
    pub fullname: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 6, message = "La contraseña debe tener al menos 6 caracteres"))]
    pub password: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "El rol es requerido"))]
    pub role: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate;
    use serde_json::json;
    use validator::Validate;

    #[test]
    fn test_role_wire_values() {
        assert_eq!(serde_json::to_value(UserRole::Admin).unwrap(), json!("admin"));
        assert_eq!(UserRole::Maintainer.as_str(), "maintainer");
        assert_eq!(UserRole::all().len(), 3);
    }

    #[test]
    fn test_user_deserializes_without_optional_fields() {
        let raw = json!({
            "id": 3,
            "user": "jlopez",
            "fullname": "Juan López",
            "role": "maintainer",
            "createdAt": "2025-01-10T09:00:00Z",
            "updatedAt": "2025-01-10T09:00:00Z"
        });

        let user: User = serde_json::from_value(raw).unwrap();
        assert_eq!(user.id, 3);
        assert!(user.avatar_url.is_none());
        assert!(user.tasks.is_none());
    }

    #[test]
    fn test_create_user_required_fields() {
        let payload = CreateUser {
            user: String::new(),
            fullname: String::new(),
            password: String::new(),
            role: String::new(),
        };

        let errors = validate::collect(&payload.validate().unwrap_err());
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"user"));
        assert!(fields.contains(&"fullname"));
        assert!(fields.contains(&"password"));
        assert!(fields.contains(&"role"));
    }

    #[test]
    fn test_create_user_short_password() {
        let payload = CreateUser {
            user: "mgarcia".to_string(),
            fullname: "María García".to_string(),
            password: "abc".to_string(),
            role: "admin".to_string(),
        };

        let errors = validate::collect(&payload.validate().unwrap_err());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "password");
        assert_eq!(errors[0].message, "La contraseña debe tener al menos 6 caracteres");
    }

    #[test]
    fn test_update_user_omits_absent_password() {
        let payload = UpdateUser {
            user: Some("mgarcia".to_string()),
            fullname: Some("María García".to_string()),
            password: None,
            role: Some("admin".to_string()),
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["fullname"], json!("María García"));
    }

    #[test]
    fn test_update_user_rejects_empty_password() {
        let payload = UpdateUser {
            password: Some(String::new()),
            ..UpdateUser::default()
        };

        assert!(payload.validate().is_err());
    }
}
