use actix_web::{web, HttpResponse};
use mongodb::bson::to_document;
use serde::{Deserialize, Serialize};

use crate::database::DocumentStore;
use crate::models::{Audit, Video};
use crate::services::script_service;
use crate::utils::error::AppError;
use crate::utils::validation::{non_empty, rule, RuleCheck, Validate};

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ScriptRequest {
    pub topic: String,

    #[serde(default = "default_style")]
    pub style: String,

    #[serde(default = "default_duration")]
    pub duration_min: i64,
}

fn default_style() -> String {
    "educational".to_string()
}

fn default_duration() -> i64 {
    3
}

impl Validate for ScriptRequest {
    fn rules(&self) -> Vec<RuleCheck> {
        vec![rule("topic", non_empty(&self.topic))]
    }
}

/// POST /api/youtube/script - Templated script draft; persists a draft
/// video record and an audit entry
#[utoipa::path(
    post,
    path = "/api/youtube/script",
    tag = "Videos",
    request_body = ScriptRequest,
    responses(
        (status = 200, description = "Draft id, five-entry outline and script body"),
        (status = 422, description = "Validation failure with field detail"),
        (status = 503, description = "Store not configured")
    )
)]
pub async fn generate_script(
    body: web::Json<ScriptRequest>,
    store: web::Data<DocumentStore>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    req.validate()?;

    let generated = script_service::generate_script(&req.topic, &req.style, req.duration_min);

    let video = Video {
        id: None,
        title: generated.title.clone(),
        script: Some(generated.script.clone()),
        status: "draft".to_string(),
        metadata: serde_json::Map::new(),
    };
    let video_id = store.create_document("video", to_document(&video)?).await?;

    let mut details = serde_json::Map::new();
    details.insert("topic".to_string(), serde_json::Value::from(req.topic));
    let audit = Audit::record("script_generate", Some("system"), details);
    store.create_document("audit", to_document(&audit)?).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "id": video_id,
        "outline": generated.outline,
        "script": generated.script,
    })))
}
