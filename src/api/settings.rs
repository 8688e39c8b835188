use actix_web::{web, HttpResponse};
use mongodb::bson::{doc, to_bson, to_document};
use serde::Deserialize;

use crate::database::DocumentStore;
use crate::models::Audit;
use crate::utils::error::AppError;
use crate::utils::validation::{email, rule, RuleCheck, Validate};

#[derive(Debug, Deserialize)]
pub struct SettingsUpdate {
    pub email: String,
    pub settings: serde_json::Map<String, serde_json::Value>,
}

impl Validate for SettingsUpdate {
    fn rules(&self) -> Vec<RuleCheck> {
        vec![rule("email", email(&self.email))]
    }
}

/// POST /api/settings - Upsert a user's settings map by email.
/// Last writer wins; no optimistic concurrency control.
pub async fn update_settings(
    body: web::Json<SettingsUpdate>,
    store: web::Data<DocumentStore>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    req.validate()?;

    let users = store.collection("user")?;
    users
        .update_one(
            doc! { "email": &req.email },
            doc! { "$set": {
                "settings": to_bson(&req.settings)?,
                "updated_at": chrono::Utc::now().timestamp(),
            }},
        )
        .upsert(true)
        .await?;

    let audit = Audit::record("settings_update", Some(&req.email), serde_json::Map::new());
    store.create_document("audit", to_document(&audit)?).await?;

    // Return the resulting document with the internal id stripped
    let user = users
        .find_one(doc! { "email": &req.email })
        .projection(doc! { "_id": 0 })
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "user": user })))
}
