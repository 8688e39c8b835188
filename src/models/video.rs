use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,

    /// draft | rendering | published
    #[serde(default = "default_status")]
    pub status: String,

    #[serde(default)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

fn default_status() -> String {
    "draft".to_string()
}
