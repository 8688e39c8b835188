use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::utils::validation::{email, non_empty, rule, RuleCheck, Validate};

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ContactMessage {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,

    pub name: String,

    pub email: String,

    pub message: String,
}

impl Validate for ContactMessage {
    fn rules(&self) -> Vec<RuleCheck> {
        vec![
            rule("name", non_empty(&self.name)),
            rule("email", email(&self.email)),
            rule("message", non_empty(&self.message)),
        ]
    }
}
