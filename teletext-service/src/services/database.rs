use super::store::{stamp_timestamps, DocumentStore};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Bson, Document},
    options::FindOptions,
    Client as MongoClient, Database,
};
use service_core::error::AppError;

#[derive(Clone)]
pub struct MongoStore {
    client: MongoClient,
    db: Database,
}

impl MongoStore {
    /// Build a client for `uri`. The driver connects lazily, so an unreachable
    /// server surfaces on the first operation rather than here.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "MongoDB client ready");
        Ok(Self { client, db })
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    fn database_name(&self) -> &str {
        self.db.name()
    }

    async fn create_document(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<String, AppError> {
        stamp_timestamps(&mut document);

        let result = self
            .db
            .collection::<Document>(collection)
            .insert_one(document, None)
            .await
            .map_err(|e| {
                tracing::error!(collection = %collection, "Failed to insert document: {}", e);
                AppError::from(e)
            })?;

        Ok(match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            Bson::String(id) => id,
            other => other.to_string(),
        })
    }

    async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> Result<Vec<Document>, AppError> {
        let options = FindOptions::builder().limit(limit).build();

        let cursor = self
            .db
            .collection::<Document>(collection)
            .find(filter, options)
            .await
            .map_err(|e| {
                tracing::error!(collection = %collection, "Failed to query documents: {}", e);
                AppError::from(e)
            })?;

        cursor.try_collect().await.map_err(AppError::from)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        self.db
            .list_collection_names(None)
            .await
            .map_err(AppError::from)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }
}
