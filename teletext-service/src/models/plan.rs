//! Tariff plan model.

use mongodb::bson::{self, Bson, Document};
use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use validator::Validate;

/// Internet tariff plan shown on the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Plan {
    pub name: String,
    #[validate(range(min = 1, message = "Speed must be at least 1 Mbps"))]
    pub speed_mbps: i64,
    #[validate(range(min = 0, message = "Price cannot be negative"))]
    pub price_rub: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "default_unlimited")]
    pub unlimited: bool,
}

fn default_unlimited() -> bool {
    true
}

impl Plan {
    pub const COLLECTION: &'static str = "plan";

    pub fn new(
        name: impl Into<String>,
        speed_mbps: i64,
        price_rub: i64,
        description: Option<&str>,
    ) -> Self {
        Self {
            name: name.into(),
            speed_mbps,
            price_rub,
            description: description.map(str::to_string),
            featured: false,
            unlimited: default_unlimited(),
        }
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn to_document(&self) -> Result<Document, AppError> {
        bson::to_document(self).map_err(|e| {
            AppError::InternalError(anyhow::anyhow!("Failed to serialize plan: {}", e))
        })
    }

    /// Map a stored document onto a `Plan`.
    ///
    /// Never fails: stored documents are not trusted to match the schema, so
    /// every missing or mistyped field falls back to a default. Unknown fields
    /// (`_id`, timestamps) are ignored.
    pub fn from_document(doc: &Document) -> Self {
        Self {
            name: text_field(doc, "name").unwrap_or_default(),
            speed_mbps: integer_field(doc, "speed_mbps"),
            price_rub: integer_field(doc, "price_rub"),
            description: text_field(doc, "description"),
            featured: bool_field(doc, "featured", false),
            unlimited: bool_field(doc, "unlimited", default_unlimited()),
        }
    }
}

fn text_field(doc: &Document, key: &str) -> Option<String> {
    match doc.get(key) {
        Some(Bson::String(s)) => Some(s.clone()),
        _ => None,
    }
}

fn integer_field(doc: &Document, key: &str) -> i64 {
    match doc.get(key) {
        Some(Bson::Int32(v)) => i64::from(*v),
        Some(Bson::Int64(v)) => *v,
        Some(Bson::Boolean(b)) => i64::from(*b),
        Some(Bson::Double(v)) if v.is_finite() => v.trunc() as i64,
        Some(Bson::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

/// Stored flags are read by truthiness; only an absent key takes the default.
fn bool_field(doc: &Document, key: &str, default: bool) -> bool {
    match doc.get(key) {
        None => default,
        Some(Bson::Boolean(b)) => *b,
        Some(Bson::Null) | Some(Bson::Undefined) => false,
        Some(Bson::Int32(v)) => *v != 0,
        Some(Bson::Int64(v)) => *v != 0,
        Some(Bson::Double(v)) => *v != 0.0,
        Some(Bson::String(s)) => !s.is_empty(),
        Some(Bson::Array(items)) => !items.is_empty(),
        Some(Bson::Document(d)) => !d.is_empty(),
        Some(_) => true,
    }
}
