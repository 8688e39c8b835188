use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::utils::validation::{non_empty, rule, RuleCheck, Validate};

/// Affiliate tracking link (stored in the `affiliate` collection)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Affiliate {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub network: String,

    pub link: String,

    #[serde(default)]
    pub clicks: i64,

    #[serde(default)]
    pub conversions: i64,
}

impl Validate for Affiliate {
    fn rules(&self) -> Vec<RuleCheck> {
        vec![
            rule("network", non_empty(&self.network)),
            rule("link", non_empty(&self.link)),
        ]
    }
}
