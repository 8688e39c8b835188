use actix_web::{web, HttpResponse, Responder};

use crate::database::DocumentStore;

/// GET /api/health - Backend, environment and store status
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service status; store failures are reported, never raised")
    )
)]
pub async fn health(store: web::Data<DocumentStore>) -> impl Responder {
    let (url_set, name_set) = store.env_flags();

    let mut database = if store.is_configured() { "ok" } else { "error" }.to_string();
    let mut collections: Vec<String> = Vec::new();

    if store.is_configured() {
        match store.list_collection_names().await {
            Ok(names) => collections = names,
            // Caught and reported, never propagated to the caller
            Err(e) => database = format!("error: {:.80}", e.to_string()),
        }
    }

    HttpResponse::Ok().json(serde_json::json!({
        "backend": "ok",
        "time": chrono::Utc::now().to_rfc3339(),
        "env": {
            "DATABASE_URL": url_set,
            "DATABASE_NAME": name_set,
        },
        "database": database,
        "collections": collections,
    }))
}

/// GET / - Liveness message
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Autonomous Asset Platform Backend"
    }))
}

/// GET /test - Store connectivity diagnostic
pub async fn test_database(store: web::Data<DocumentStore>) -> impl Responder {
    let (url_set, name_set) = store.env_flags();

    let mut database = "not_configured".to_string();
    let mut collections: Vec<String> = Vec::new();

    if store.is_configured() {
        match store.list_collection_names().await {
            Ok(names) => {
                database = "ok".to_string();
                collections = names;
            }
            Err(e) => database = format!("error: {:.80}", e.to_string()),
        }
    }

    HttpResponse::Ok().json(serde_json::json!({
        "backend": "ok",
        "database": database,
        "env": {
            "DATABASE_URL": url_set,
            "DATABASE_NAME": name_set,
        },
        "collections": collections,
    }))
}
