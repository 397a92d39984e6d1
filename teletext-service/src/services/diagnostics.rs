use super::store::DocumentStore;
use crate::config::DatabaseConfig;
use crate::dtos::diagnostics::{
    setting_status, DiagnosticsResponse, CONNECTED, DATABASE_AVAILABLE, DATABASE_NOT_INITIALIZED,
    DATABASE_WORKING,
};
use service_core::error::truncate_message;

/// Collections listed in a diagnostics report.
pub const MAX_LISTED_COLLECTIONS: usize = 10;
/// Store error text kept in a diagnostics report.
pub const MAX_REPORTED_ERROR_CHARS: usize = 50;

/// Describe store availability without ever failing.
///
/// Errors from the store are folded into the `database` field.
pub async fn inspect_store(
    store: Option<&dyn DocumentStore>,
    database: &DatabaseConfig,
) -> DiagnosticsResponse {
    let mut report = DiagnosticsResponse::default();

    match store {
        Some(store) => {
            report.database = DATABASE_AVAILABLE.to_string();
            report.connection_status = CONNECTED.to_string();

            match store.list_collection_names().await {
                Ok(mut names) => {
                    names.truncate(MAX_LISTED_COLLECTIONS);
                    report.collections = names;
                    report.database = DATABASE_WORKING.to_string();
                }
                Err(e) => {
                    tracing::warn!(database = %store.database_name(), "Store check failed: {}", e);
                    report.database = format!(
                        "⚠️  Connected but Error: {}",
                        truncate_message(&e.detail(), MAX_REPORTED_ERROR_CHARS)
                    );
                }
            }
        }
        None => report.database = DATABASE_NOT_INITIALIZED.to_string(),
    }

    report.database_url = setting_status(database.url.is_some());
    report.database_name = setting_status(database.name.is_some());

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtos::diagnostics::{NOT_CONNECTED, SETTING_NOT_SET, SETTING_SET};
    use crate::services::MemoryStore;
    use mongodb::bson::doc;

    fn configured() -> DatabaseConfig {
        DatabaseConfig {
            url: Some("mongodb://localhost:27017".to_string()),
            name: Some("teletext".to_string()),
        }
    }

    #[tokio::test]
    async fn absent_store_is_reported() {
        let report = inspect_store(None, &DatabaseConfig::default()).await;

        assert_eq!(report.database, DATABASE_NOT_INITIALIZED);
        assert_eq!(report.connection_status, NOT_CONNECTED);
        assert_eq!(report.database_url, SETTING_NOT_SET);
        assert_eq!(report.database_name, SETTING_NOT_SET);
        assert!(report.collections.is_empty());
    }

    #[tokio::test]
    async fn working_store_lists_at_most_ten_collections() {
        let store = MemoryStore::new("teletext");
        for i in 0..12 {
            store
                .create_document(&format!("c{:02}", i), doc! {})
                .await
                .unwrap();
        }

        let report = inspect_store(Some(&store), &configured()).await;

        assert_eq!(report.database, DATABASE_WORKING);
        assert_eq!(report.connection_status, CONNECTED);
        assert_eq!(report.collections.len(), MAX_LISTED_COLLECTIONS);
        assert_eq!(report.database_url, SETTING_SET);
    }

    #[tokio::test]
    async fn failing_store_error_keeps_first_fifty_chars_of_cause() {
        let reason = "connection refused by 10.0.0.5:27017 after server selection timeout";
        let store = MemoryStore::unavailable("teletext", reason);

        let report = inspect_store(Some(&store), &configured()).await;

        let expected_cause: String = reason.chars().take(MAX_REPORTED_ERROR_CHARS).collect();
        assert_eq!(
            report.database,
            format!("⚠️  Connected but Error: {}", expected_cause)
        );
        assert_eq!(report.connection_status, CONNECTED);
    }

    #[tokio::test]
    async fn short_store_error_is_reported_whole() {
        let store = MemoryStore::unavailable("teletext", "not primary");

        let report = inspect_store(Some(&store), &configured()).await;

        assert_eq!(report.database, "⚠️  Connected but Error: not primary");
    }
}
