use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Named permission set (stored in the `role` collection)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub name: String,

    /// Allowed actions; "*" is the wildcard
    #[serde(default)]
    pub permissions: Vec<String>,
}
