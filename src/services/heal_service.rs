use mongodb::bson::{doc, to_document};

use crate::database::DocumentStore;
use crate::models::{Audit, Role, User};
use crate::utils::error::AppError;

/// Collections the platform depends on; heal touches each so they exist.
pub const CRITICAL_COLLECTIONS: [&str; 10] = [
    "user",
    "role",
    "product",
    "affiliate",
    "strategy",
    "trade",
    "video",
    "job",
    "audit",
    "contactmessage",
];

pub const ADMIN_EMAIL: &str = "admin@local";

/// Idempotent self-heal: force-create the critical collections, seed the
/// admin role/user when absent, append an audit record. Safe to call any
/// time; repeated sequential runs converge on the same end state. The
/// check-then-insert seeding can race under concurrent callers — accepted.
pub async fn run(store: &DocumentStore) -> Result<Vec<String>, AppError> {
    let mut ensured = Vec::with_capacity(CRITICAL_COLLECTIONS.len());

    for name in CRITICAL_COLLECTIONS {
        let collection = store.collection(name)?;

        // Insert-then-delete marker: a no-op whose side effect is collection
        // creation in a schema-less store
        collection
            .insert_one(doc! { "_ensure": true, "ts": chrono::Utc::now().timestamp() })
            .await?;
        collection.delete_many(doc! { "_ensure": true }).await?;

        ensured.push(name.to_string());
    }

    let roles = store.get_documents("role", doc! { "name": "admin" }, 1).await?;
    if roles.is_empty() {
        let role = Role {
            id: None,
            name: "admin".to_string(),
            permissions: vec!["*".to_string()],
        };
        store.create_document("role", to_document(&role)?).await?;
        log::info!("🌱 Seeded admin role");
    }

    let admins = store
        .get_documents("user", doc! { "email": ADMIN_EMAIL }, 1)
        .await?;
    if admins.is_empty() {
        let mut settings = serde_json::Map::new();
        settings.insert("theme".to_string(), serde_json::Value::from("dark"));

        let admin = User {
            id: None,
            name: "Administrator".to_string(),
            email: ADMIN_EMAIL.to_string(),
            role: "admin".to_string(),
            avatar_url: None,
            settings,
            is_active: true,
        };
        store.create_document("user", to_document(&admin)?).await?;
        log::info!("🌱 Seeded administrator user ({})", ADMIN_EMAIL);
    }

    let mut details = serde_json::Map::new();
    details.insert("ensured".to_string(), serde_json::json!(ensured));
    let audit = Audit::record("self_heal", Some("system"), details);
    store.create_document("audit", to_document(&audit)?).await?;

    Ok(ensured)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_list_is_fixed() {
        assert_eq!(CRITICAL_COLLECTIONS.len(), 10);
        assert!(CRITICAL_COLLECTIONS.contains(&"role"));
        assert!(CRITICAL_COLLECTIONS.contains(&"contactmessage"));
    }

    #[tokio::test]
    async fn test_unconfigured_store_rejected() {
        let store = DocumentStore::disconnected();
        assert!(matches!(run(&store).await, Err(AppError::StoreUnavailable)));
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_heal_twice_is_idempotent() {
        dotenv::dotenv().ok();
        let store = DocumentStore::from_env().await;
        assert!(store.is_configured());

        let first = run(&store).await.unwrap();
        let second = run(&store).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 10);

        let roles = store
            .collection("role")
            .unwrap()
            .count_documents(doc! { "name": "admin" })
            .await
            .unwrap();
        assert_eq!(roles, 1);

        let admins = store
            .collection("user")
            .unwrap()
            .count_documents(doc! { "email": ADMIN_EMAIL })
            .await
            .unwrap();
        assert_eq!(admins, 1);
    }
}
