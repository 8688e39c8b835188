use actix_web::{web, HttpResponse};
use mongodb::bson::to_document;

use crate::database::DocumentStore;
use crate::models::{Audit, ContactMessage};
use crate::utils::error::AppError;
use crate::utils::validation::Validate;

/// POST /api/contact - Store a contact message and audit the submission
pub async fn submit_contact(
    body: web::Json<ContactMessage>,
    store: web::Data<DocumentStore>,
) -> Result<HttpResponse, AppError> {
    let msg = body.into_inner();
    msg.validate()?;

    let id = store
        .create_document("contactmessage", to_document(&msg)?)
        .await?;

    let mut details = serde_json::Map::new();
    details.insert("name".to_string(), serde_json::Value::from(msg.name.clone()));
    let audit = Audit::record("contact_submit", Some(&msg.email), details);
    store.create_document("audit", to_document(&audit)?).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "id": id })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_empty_message_rejected() {
        let store = web::Data::new(DocumentStore::disconnected());
        let app = test::init_service(
            App::new()
                .app_data(store)
                .route("/api/contact", web::post().to(submit_contact)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "message": ""
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(
            resp.status(),
            actix_web::http::StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
