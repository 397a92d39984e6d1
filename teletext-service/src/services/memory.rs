//! In-process document store.
//!
//! Mirrors [`MongoStore`](super::MongoStore) semantics closely enough to stand
//! in for it in tests: ObjectId identifiers, insertion-ordered reads, exact
//! top-level equality filters and collections that appear on first insert.

use super::store::{stamp_timestamps, DocumentStore};
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};
use service_core::error::AppError;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct MemoryState {
    collections: BTreeMap<String, Vec<Document>>,
    failure: Option<String>,
}

#[derive(Clone)]
pub struct MemoryStore {
    name: String,
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: Arc::new(RwLock::new(MemoryState::default())),
        }
    }

    /// A store whose every operation fails with `reason`.
    pub fn unavailable(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: Arc::new(RwLock::new(MemoryState {
                collections: BTreeMap::new(),
                failure: Some(reason.into()),
            })),
        }
    }

    /// Make subsequent operations fail with `reason`, or recover with `None`.
    pub async fn set_failure(&self, reason: Option<String>) {
        self.state.write().await.failure = reason;
    }

    fn check(state: &MemoryState) -> Result<(), AppError> {
        match &state.failure {
            Some(reason) => Err(AppError::DatabaseError(anyhow::anyhow!(reason.clone()))),
            None => Ok(()),
        }
    }
}

fn matches(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| document.get(key) == Some(expected))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn database_name(&self) -> &str {
        &self.name
    }

    async fn create_document(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<String, AppError> {
        let mut state = self.state.write().await;
        Self::check(&state)?;

        let id = match document.get("_id") {
            Some(Bson::ObjectId(oid)) => oid.to_hex(),
            Some(Bson::String(id)) => id.clone(),
            Some(other) => other.to_string(),
            None => {
                let oid = ObjectId::new();
                document.insert("_id", oid);
                oid.to_hex()
            }
        };
        stamp_timestamps(&mut document);

        state
            .collections
            .entry(collection.to_string())
            .or_default()
            .push(document);

        Ok(id)
    }

    async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> Result<Vec<Document>, AppError> {
        let state = self.state.read().await;
        Self::check(&state)?;

        // A zero or negative limit means "no limit", as in MongoDB.
        let limit = match limit {
            Some(n) if n > 0 => n as usize,
            _ => usize::MAX,
        };

        Ok(state
            .collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| matches(doc, &filter))
                    .take(limit)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        let state = self.state.read().await;
        Self::check(&state)?;
        Ok(state.collections.keys().cloned().collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Self::check(&*self.state.read().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[tokio::test]
    async fn create_assigns_object_id_and_timestamps() {
        let store = MemoryStore::new("teletext_test");

        let id = store
            .create_document("lead", doc! { "name": "Иван" })
            .await
            .expect("Insert failed");

        assert!(ObjectId::parse_str(&id).is_ok());
        let docs = store.get_documents("lead", doc! {}, None).await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].get_object_id("_id").unwrap().to_hex(), id);
        assert!(docs[0].get_datetime("created_at").is_ok());
        assert!(docs[0].get_datetime("updated_at").is_ok());
    }

    #[tokio::test]
    async fn reads_preserve_insertion_order_and_honor_limit() {
        let store = MemoryStore::new("teletext_test");
        for name in ["a", "b", "c"] {
            store
                .create_document("plan", doc! { "name": name })
                .await
                .unwrap();
        }

        let all = store.get_documents("plan", doc! {}, None).await.unwrap();
        let names: Vec<_> = all.iter().map(|d| d.get_str("name").unwrap()).collect();
        assert_eq!(names, ["a", "b", "c"]);

        let one = store.get_documents("plan", doc! {}, Some(1)).await.unwrap();
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].get_str("name").unwrap(), "a");
    }

    #[tokio::test]
    async fn filter_matches_top_level_equality() {
        let store = MemoryStore::new("teletext_test");
        store
            .create_document("lead", doc! { "source": "website" })
            .await
            .unwrap();
        store
            .create_document("lead", doc! { "source": "flyer" })
            .await
            .unwrap();

        let docs = store
            .get_documents("lead", doc! { "source": "flyer" }, None)
            .await
            .unwrap();
        assert_eq!(docs.len(), 1);
    }

    #[tokio::test]
    async fn collections_appear_on_first_insert() {
        let store = MemoryStore::new("teletext_test");
        assert!(store.list_collection_names().await.unwrap().is_empty());
        assert!(store
            .get_documents("plan", doc! {}, None)
            .await
            .unwrap()
            .is_empty());

        store.create_document("plan", doc! {}).await.unwrap();
        assert_eq!(store.list_collection_names().await.unwrap(), ["plan"]);
    }

    #[tokio::test]
    async fn unavailable_store_fails_every_operation() {
        let store = MemoryStore::unavailable("teletext_test", "connection refused");

        assert!(store.ping().await.is_err());
        assert!(store.list_collection_names().await.is_err());
        assert!(store.create_document("lead", doc! {}).await.is_err());

        store.set_failure(None).await;
        assert!(store.ping().await.is_ok());
    }
}
