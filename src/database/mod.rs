use anyhow::Result;
use futures::stream::TryStreamExt;
use mongodb::bson::{Bson, Document};
use mongodb::{Client, Collection, Database};
use std::env;

use crate::utils::error::AppError;

/// Generic document-store adapter over a schema-less MongoDB database.
///
/// The handle is optional on purpose: an unconfigured deployment still boots
/// and serves the health/diagnostic endpoints, while every store-requiring
/// operation surfaces `AppError::StoreUnavailable`. Built once in `main` and
/// injected into handlers via `web::Data` — no module-level singleton.
#[derive(Clone)]
pub struct DocumentStore {
    db: Option<Database>,
    url_set: bool,
    name_set: bool,
}

impl DocumentStore {
    /// Build the store from `DATABASE_URL` / `DATABASE_NAME`.
    /// Connection failure is logged, not fatal.
    pub async fn from_env() -> Self {
        let url = env::var("DATABASE_URL").ok();
        let name = env::var("DATABASE_NAME").ok();
        let url_set = url.is_some();
        let name_set = name.is_some();

        let db = match url {
            Some(url) => {
                let name = name.unwrap_or_else(|| "asset_platform".to_string());
                match Self::connect(&url, &name).await {
                    Ok(db) => {
                        log::info!("✅ MongoDB connected: {}", name);
                        Some(db)
                    }
                    Err(e) => {
                        log::error!("❌ MongoDB connection failed: {}", e);
                        None
                    }
                }
            }
            None => {
                log::warn!("⚠️  DATABASE_URL not set — store endpoints will return 503");
                None
            }
        };

        Self {
            db,
            url_set,
            name_set,
        }
    }

    /// A store with no backing database, as seen by an unconfigured deployment.
    pub fn disconnected() -> Self {
        Self {
            db: None,
            url_set: false,
            name_set: false,
        }
    }

    async fn connect(url: &str, name: &str) -> Result<Database> {
        let mut options = mongodb::options::ClientOptions::parse(url).await?;

        options.max_pool_size = Some(20);
        options.min_pool_size = Some(5);
        options.max_idle_time = Some(std::time::Duration::from_secs(300));

        // Fail fast on an unreachable server
        options.connect_timeout = Some(std::time::Duration::from_secs(5));
        options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let client = Client::with_options(options)?;
        let db = client.database(name);

        // Probe the connection before handing the handle out
        db.list_collection_names().await?;

        Ok(db)
    }

    /// Which of the two selector variables were present in the environment
    pub fn env_flags(&self) -> (bool, bool) {
        (self.url_set, self.name_set)
    }

    pub fn is_configured(&self) -> bool {
        self.db.is_some()
    }

    pub fn collection(&self, name: &str) -> Result<Collection<Document>, AppError> {
        self.db
            .as_ref()
            .map(|db| db.collection::<Document>(name))
            .ok_or(AppError::StoreUnavailable)
    }

    pub async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        let db = self.db.as_ref().ok_or(AppError::StoreUnavailable)?;
        Ok(db.list_collection_names().await?)
    }

    /// Single-document insert — the only write primitive used outside the
    /// settings upsert. Stamps `created_at` and returns the hex ObjectId.
    pub async fn create_document(
        &self,
        collection: &str,
        mut doc: Document,
    ) -> Result<String, AppError> {
        doc.insert("created_at", chrono::Utc::now().timestamp());

        let result = self.collection(collection)?.insert_one(doc).await?;
        let id = result
            .inserted_id
            .as_object_id()
            .map(|id| id.to_hex())
            .unwrap_or_default();

        Ok(id)
    }

    /// Fetch up to `limit` documents matching `filter`, with `_id` rendered
    /// as a hex string under `id`.
    pub async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, AppError> {
        let mut cursor = self.collection(collection)?.find(filter).limit(limit).await?;

        let mut docs = Vec::new();
        while let Some(doc) = cursor.try_next().await? {
            docs.push(render_id(doc));
        }

        Ok(docs)
    }
}

fn render_id(mut doc: Document) -> Document {
    if let Some(Bson::ObjectId(oid)) = doc.remove("_id") {
        doc.insert("id", oid.to_hex());
    }
    doc
}
