use serde::{Deserialize, Serialize};

use crate::utils::validation::{non_empty, rule, RuleCheck, Validate};

/// Named strategy with free-form parameters. Embedded in backtest requests
/// and stored inside job payloads; the `strategy` collection itself only
/// gets touched by the self-heal routine.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Strategy {
    pub name: String,

    #[serde(default)]
    #[schema(value_type = Object)]
    pub params: serde_json::Map<String, serde_json::Value>,
}

impl Validate for Strategy {
    fn rules(&self) -> Vec<RuleCheck> {
        vec![rule("strategy.name", non_empty(&self.name))]
    }
}
