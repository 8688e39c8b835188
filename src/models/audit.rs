use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Audit trail entry; every side-effecting flow appends one
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Audit {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub action: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,

    /// info | warn | error | critical
    #[serde(default = "default_severity")]
    pub severity: String,

    #[serde(default)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

fn default_severity() -> String {
    "info".to_string()
}

impl Audit {
    pub fn record(
        action: &str,
        actor: Option<&str>,
        details: serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        Self {
            id: None,
            action: action.to_string(),
            actor: actor.map(str::to_string),
            severity: default_severity(),
            details,
        }
    }
}
