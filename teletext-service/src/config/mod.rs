use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

pub const DEFAULT_SERVICE_NAME: &str = "Teletext ISP API";
pub const DEFAULT_CITY: &str = "Nevinnomyssk";

#[derive(Debug, Clone)]
pub struct TeletextConfig {
    pub common: core_config::Config,
    pub database: DatabaseConfig,
    pub site: SiteConfig,
}

/// Connection settings for the document store.
///
/// Both values are optional: the API starts without a store and reports it
/// through `/test`.
#[derive(Debug, Clone, Default)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub service_name: String,
    pub city: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            city: DEFAULT_CITY.to_string(),
        }
    }
}

impl DatabaseConfig {
    /// The (url, name) pair when both are configured.
    pub fn connection(&self) -> Option<(&str, &str)> {
        match (self.url.as_deref(), self.name.as_deref()) {
            (Some(url), Some(name)) => Some((url, name)),
            _ => None,
        }
    }
}

impl TeletextConfig {
    pub fn load() -> Result<Self, AppError> {
        // Common config handles .env and the APP__ prefix.
        let common_config = core_config::Config::load()?;

        Ok(TeletextConfig {
            common: common_config,
            database: DatabaseConfig {
                url: optional_env("DATABASE_URL"),
                name: optional_env("DATABASE_NAME"),
            },
            site: SiteConfig {
                service_name: get_env("SITE_SERVICE_NAME", DEFAULT_SERVICE_NAME),
                city: get_env("SITE_CITY", DEFAULT_CITY),
            },
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn get_env(key: &str, default: &str) -> String {
    optional_env(key).unwrap_or_else(|| default.to_string())
}
