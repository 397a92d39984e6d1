use async_trait::async_trait;
use chrono::Utc;
use mongodb::bson::{DateTime as BsonDateTime, Document};
use service_core::error::AppError;
use std::sync::Arc;

/// Generic access to a schema-flexible document database.
///
/// Collections are addressed by name and hold raw documents; typing happens
/// in the callers (see [`crate::models::Plan::from_document`]).
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Name of the database this store writes to.
    fn database_name(&self) -> &str;

    /// Insert `document` into `collection` and return its generated id.
    ///
    /// `created_at` and `updated_at` are stamped on the stored copy.
    async fn create_document(&self, collection: &str, document: Document)
        -> Result<String, AppError>;

    /// Documents of `collection` matching `filter`, in store order.
    ///
    /// `limit` of `None` returns every match.
    async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> Result<Vec<Document>, AppError>;

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError>;

    async fn ping(&self) -> Result<(), AppError>;
}

/// Store handle threaded through request state. `None` when no database is
/// configured or the client could not be built.
pub type StoreHandle = Option<Arc<dyn DocumentStore>>;

pub(crate) fn stamp_timestamps(document: &mut Document) {
    let now = BsonDateTime::from_chrono(Utc::now());
    document.insert("created_at", now);
    document.insert("updated_at", now);
}
