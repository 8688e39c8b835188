use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::utils::validation::{email, non_empty, rule, RuleCheck, Validate};

/// Platform user (stored in the `user` collection)
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,

    pub name: String,

    /// Unique-ish by convention only — uniqueness is not enforced
    pub email: String,

    /// Role name: user | admin
    #[serde(default = "default_role")]
    pub role: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// Free-form settings map
    #[serde(default)]
    #[schema(value_type = Object)]
    pub settings: serde_json::Map<String, serde_json::Value>,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_role() -> String {
    "user".to_string()
}

fn default_true() -> bool {
    true
}

impl Validate for User {
    fn rules(&self) -> Vec<RuleCheck> {
        vec![
            rule("name", non_empty(&self.name)),
            rule("email", email(&self.email)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied_on_deserialize() {
        let user: User =
            serde_json::from_str(r#"{"name": "Ada", "email": "ada@example.com"}"#).unwrap();
        assert_eq!(user.role, "user");
        assert!(user.is_active);
        assert!(user.settings.is_empty());
        assert!(user.id.is_none());
    }

    #[test]
    fn test_validation() {
        let user: User =
            serde_json::from_str(r#"{"name": "", "email": "not-an-email"}"#).unwrap();
        assert!(user.validate().is_err());

        let user: User =
            serde_json::from_str(r#"{"name": "Ada", "email": "ada@example.com"}"#).unwrap();
        assert!(user.validate().is_ok());
    }
}
