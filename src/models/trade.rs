use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::utils::validation::{gt_f64, non_empty, rule, RuleCheck, Validate};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Ticker or pair, e.g. "BTCUSDT"
    pub symbol: String,

    /// buy or sell
    pub side: String,

    pub qty: f64,

    /// pending | filled | canceled
    #[serde(default = "default_status")]
    pub status: String,

    /// Unchecked reference to a strategy name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pnl: Option<f64>,
}

fn default_status() -> String {
    "pending".to_string()
}

impl Validate for Trade {
    fn rules(&self) -> Vec<RuleCheck> {
        vec![
            rule("symbol", non_empty(&self.symbol)),
            rule("side", non_empty(&self.side)),
            rule("qty", gt_f64(self.qty, 0.0)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_qty_rejected() {
        let trade: Trade =
            serde_json::from_str(r#"{"symbol": "BTCUSDT", "side": "buy", "qty": 0.0}"#).unwrap();
        assert!(trade.validate().is_err());

        let trade: Trade =
            serde_json::from_str(r#"{"symbol": "BTCUSDT", "side": "buy", "qty": 0.25}"#).unwrap();
        assert!(trade.validate().is_ok());
        assert_eq!(trade.status, "pending");
    }
}
