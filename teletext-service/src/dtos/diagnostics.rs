use serde::{Deserialize, Serialize};

pub const BACKEND_RUNNING: &str = "✅ Running";
pub const DATABASE_NOT_AVAILABLE: &str = "❌ Not Available";
pub const DATABASE_NOT_INITIALIZED: &str = "⚠️  Available but not initialized";
pub const DATABASE_AVAILABLE: &str = "✅ Available";
pub const DATABASE_WORKING: &str = "✅ Connected & Working";
pub const SETTING_SET: &str = "✅ Set";
pub const SETTING_NOT_SET: &str = "❌ Not Set";
pub const CONNECTED: &str = "Connected";
pub const NOT_CONNECTED: &str = "Not Connected";

/// Body of `GET /test`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

impl Default for DiagnosticsResponse {
    fn default() -> Self {
        Self {
            backend: BACKEND_RUNNING.to_string(),
            database: DATABASE_NOT_AVAILABLE.to_string(),
            database_url: SETTING_NOT_SET.to_string(),
            database_name: SETTING_NOT_SET.to_string(),
            connection_status: NOT_CONNECTED.to_string(),
            collections: Vec::new(),
        }
    }
}

pub fn setting_status(present: bool) -> String {
    let status = if present { SETTING_SET } else { SETTING_NOT_SET };
    status.to_string()
}
