use actix_web::{web, HttpResponse};
use mongodb::bson::{doc, to_document};
use serde::Deserialize;

use crate::database::DocumentStore;
use crate::models::User;
use crate::utils::error::AppError;
use crate::utils::validation::Validate;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<i64>,
}

/// POST /api/users - Create a user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = User,
    responses(
        (status = 200, description = "Created; returns the new document id"),
        (status = 422, description = "Validation failure with field detail"),
        (status = 503, description = "Store not configured")
    )
)]
pub async fn create_user(
    body: web::Json<User>,
    store: web::Data<DocumentStore>,
) -> Result<HttpResponse, AppError> {
    let user = body.into_inner();
    user.validate()?;

    let id = store.create_document("user", to_document(&user)?).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "id": id })))
}

/// GET /api/users?limit= - List users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    params(
        ("limit" = Option<i64>, Query, description = "Max documents to return (default 20)")
    ),
    responses(
        (status = 200, description = "User documents with ids rendered as hex strings"),
        (status = 503, description = "Store not configured")
    )
)]
pub async fn list_users(
    query: web::Query<ListQuery>,
    store: web::Data<DocumentStore>,
) -> Result<HttpResponse, AppError> {
    let limit = query.limit.unwrap_or(20).clamp(1, 200);
    let users = store.get_documents("user", doc! {}, limit).await?;

    Ok(HttpResponse::Ok().json(users))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_invalid_user_rejected_with_field_detail() {
        let store = web::Data::new(DocumentStore::disconnected());
        let app = test::init_service(
            App::new()
                .app_data(store)
                .route("/api/users", web::post().to(create_user)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(serde_json::json!({ "name": "", "email": "nope" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(
            resp.status(),
            actix_web::http::StatusCode::UNPROCESSABLE_ENTITY
        );

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["fields"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_valid_user_without_store_returns_503() {
        let store = web::Data::new(DocumentStore::disconnected());
        let app = test::init_service(
            App::new()
                .app_data(store)
                .route("/api/users", web::post().to(create_user)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(serde_json::json!({ "name": "Ada", "email": "ada@example.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(
            resp.status(),
            actix_web::http::StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[actix_web::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_create_then_list() {
        dotenv::dotenv().ok();
        let store = web::Data::new(DocumentStore::from_env().await);
        let app = test::init_service(
            App::new()
                .app_data(store)
                .route("/api/users", web::post().to(create_user))
                .route("/api/users", web::get().to(list_users)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(serde_json::json!({ "name": "Ada", "email": "ada@example.com" }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert!(!body["id"].as_str().unwrap().is_empty());

        let req = test::TestRequest::get().uri("/api/users?limit=5").to_request();
        let listed: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        let listed = listed.as_array().unwrap();
        assert!(!listed.is_empty());
        assert!(listed.len() <= 5);
    }
}
