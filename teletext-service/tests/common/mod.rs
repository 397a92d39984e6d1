use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use teletext_service::config::{DatabaseConfig, SiteConfig, TeletextConfig};
use teletext_service::services::{MemoryStore, StoreHandle};
use teletext_service::startup::Application;

pub const TEST_DATABASE: &str = "teletext_test";

pub struct TestApp {
    pub address: String,
    pub store: MemoryStore,
    pub client: reqwest::Client,
}

pub fn test_config(database: DatabaseConfig) -> TeletextConfig {
    TeletextConfig {
        common: CoreConfig {
            port: 0, // Random port for testing
            ..CoreConfig::default()
        },
        database,
        site: SiteConfig::default(),
    }
}

pub fn configured_database() -> DatabaseConfig {
    DatabaseConfig {
        url: Some("mongodb://localhost:27017".to_string()),
        name: Some(TEST_DATABASE.to_string()),
    }
}

impl TestApp {
    /// Spawn the API backed by a fresh in-memory store.
    pub async fn spawn() -> Self {
        Self::spawn_with(MemoryStore::new(TEST_DATABASE)).await
    }

    pub async fn spawn_with(store: MemoryStore) -> Self {
        let handle: StoreHandle = Some(Arc::new(store.clone()));
        let address = launch(test_config(configured_database()), handle).await;

        TestApp {
            address,
            store,
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn seed_plans(&self) -> reqwest::Response {
        self.client
            .post(self.url("/seed/plans"))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_lead(&self, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(self.url("/lead"))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn stored(&self, collection: &str) -> Vec<mongodb::bson::Document> {
        use teletext_service::services::DocumentStore;

        self.store
            .get_documents(collection, mongodb::bson::doc! {}, None)
            .await
            .expect("Failed to read store")
    }
}

/// Bind on a random port, serve in the background and return the base URL.
pub async fn launch(config: TeletextConfig, store: StoreHandle) -> String {
    let app = Application::with_store(config, store)
        .await
        .expect("Failed to build test application");
    let address = format!("http://127.0.0.1:{}", app.port());

    tokio::spawn(async move {
        app.run_until_stopped().await.ok();
    });

    address
}
