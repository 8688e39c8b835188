use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Background job record, e.g. a completed backtest run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Job type, e.g. "backtest", "render", "publish"
    pub kind: String,

    /// queued | running | completed | failed
    #[serde(default = "default_status")]
    pub status: String,

    #[serde(default)]
    pub payload: serde_json::Map<String, serde_json::Value>,

    /// Unchecked reference to a user email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_email: Option<String>,
}

fn default_status() -> String {
    "queued".to_string()
}
