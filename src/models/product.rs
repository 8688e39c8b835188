use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::utils::validation::{min_f64, non_empty, rule, RuleCheck, Validate};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub price: f64,

    /// Product category, e.g. "digital"
    #[serde(default = "default_category")]
    pub category: String,

    #[serde(default = "default_true")]
    pub in_stock: bool,
}

fn default_category() -> String {
    "digital".to_string()
}

fn default_true() -> bool {
    true
}

impl Validate for Product {
    fn rules(&self) -> Vec<RuleCheck> {
        vec![
            rule("title", non_empty(&self.title)),
            rule("price", min_f64(self.price, 0.0)),
        ]
    }
}
