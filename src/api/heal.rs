use actix_web::{web, HttpResponse};

use crate::database::DocumentStore;
use crate::services::heal_service;
use crate::utils::error::AppError;

/// POST /api/heal - Idempotent self-heal: ensure collections, seed admin records
#[utoipa::path(
    post,
    path = "/api/heal",
    tag = "Health",
    responses(
        (status = 200, description = "Collections ensured and seeds in place"),
        (status = 503, description = "Store not configured")
    )
)]
pub async fn heal(store: web::Data<DocumentStore>) -> Result<HttpResponse, AppError> {
    let ensured = heal_service::run(&store).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "ensured": ensured,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_heal_without_store_returns_503() {
        let store = web::Data::new(DocumentStore::disconnected());
        let app = test::init_service(
            App::new()
                .app_data(store)
                .route("/api/heal", web::post().to(heal)),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/heal").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::SERVICE_UNAVAILABLE);
    }
}
