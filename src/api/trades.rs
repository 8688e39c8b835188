use actix_web::{web, HttpResponse};
use mongodb::bson::to_document;
use serde::{Deserialize, Serialize};

use crate::database::DocumentStore;
use crate::models::{Job, Strategy};
use crate::services::backtest_service;
use crate::utils::error::AppError;
use crate::utils::validation::{non_empty, rule, RuleCheck, Validate};

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct BacktestRequest {
    pub symbol: String,
    pub strategy: Strategy,
    /// Clamped to [5, 365]
    #[serde(default = "default_days")]
    pub days: i64,
}

fn default_days() -> i64 {
    30
}

impl Validate for BacktestRequest {
    fn rules(&self) -> Vec<RuleCheck> {
        let mut rules = vec![rule("symbol", non_empty(&self.symbol))];
        rules.extend(self.strategy.rules());
        rules
    }
}

/// POST /api/trades/backtest - Deterministic mock backtest; persists a
/// completed job record keyed to the request payload
#[utoipa::path(
    post,
    path = "/api/trades/backtest",
    tag = "Trading",
    request_body = BacktestRequest,
    responses(
        (status = 200, description = "Synthetic equity curve with summary stats", body = backtest_service::BacktestResult),
        (status = 422, description = "Validation failure with field detail"),
        (status = 503, description = "Store not configured")
    )
)]
pub async fn backtest(
    body: web::Json<BacktestRequest>,
    store: web::Data<DocumentStore>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    req.validate()?;

    let result = backtest_service::run_backtest(req.days);

    let payload = match serde_json::to_value(&req) {
        Ok(serde_json::Value::Object(map)) => map,
        _ => serde_json::Map::new(),
    };
    let job = Job {
        id: None,
        kind: "backtest".to_string(),
        status: "completed".to_string(),
        payload,
        owner_email: None,
    };
    store.create_document("job", to_document(&job)?).await?;

    Ok(HttpResponse::Ok().json(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    fn valid_body() -> serde_json::Value {
        serde_json::json!({
            "symbol": "BTCUSDT",
            "strategy": { "name": "momentum", "params": { "window": 14 } },
            "days": 1
        })
    }

    #[actix_web::test]
    async fn test_blank_symbol_rejected() {
        let store = web::Data::new(DocumentStore::disconnected());
        let app = test::init_service(
            App::new()
                .app_data(store)
                .route("/api/trades/backtest", web::post().to(backtest)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/trades/backtest")
            .set_json(serde_json::json!({
                "symbol": "",
                "strategy": { "name": "momentum" }
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(
            resp.status(),
            actix_web::http::StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[actix_web::test]
    async fn test_valid_request_without_store_returns_503() {
        let store = web::Data::new(DocumentStore::disconnected());
        let app = test::init_service(
            App::new()
                .app_data(store)
                .route("/api/trades/backtest", web::post().to(backtest)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/trades/backtest")
            .set_json(valid_body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(
            resp.status(),
            actix_web::http::StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[actix_web::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_backtest_clamps_days_and_reports_stats() {
        dotenv::dotenv().ok();
        let store = web::Data::new(DocumentStore::from_env().await);
        let app = test::init_service(
            App::new()
                .app_data(store)
                .route("/api/trades/backtest", web::post().to(backtest)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/trades/backtest")
            .set_json(valid_body())
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let series = body["series"].as_array().unwrap();
        assert_eq!(series.len(), 5); // days=1 clamped up
        assert_eq!(body["stats"]["start"], series[0]["equity"]);
        assert_eq!(body["stats"]["end"], series[4]["equity"]);
    }
}
