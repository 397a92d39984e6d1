//! Incoming contact request.

use mongodb::bson::{self, Document};
use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use validator::Validate;

pub const DEFAULT_LEAD_SOURCE: &str = "website";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Lead {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "Phone cannot be empty"))]
    pub phone: String,
    pub street_address: Option<String>,
    pub apartment: Option<String>,
    pub comment: Option<String>,
    /// Omitted source means the site form; an explicit `null` stays unset.
    #[serde(default = "default_source")]
    pub source: Option<String>,
}

fn default_source() -> Option<String> {
    Some(DEFAULT_LEAD_SOURCE.to_string())
}

impl Lead {
    pub const COLLECTION: &'static str = "lead";

    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            street_address: None,
            apartment: None,
            comment: None,
            source: default_source(),
        }
    }

    pub fn to_document(&self) -> Result<Document, AppError> {
        bson::to_document(self).map_err(|e| {
            AppError::InternalError(anyhow::anyhow!("Failed to serialize lead: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn omitted_source_defaults_to_website() {
        let lead: Lead =
            serde_json::from_value(json!({ "name": "Иван", "phone": "+7 900 123-45-67" }))
                .expect("Failed to parse lead");

        assert_eq!(lead.source.as_deref(), Some("website"));
        assert_eq!(lead.street_address, None);
    }

    #[test]
    fn explicit_null_source_is_kept_unset() {
        let lead: Lead = serde_json::from_value(json!({
            "name": "Иван",
            "phone": "+7 900 123-45-67",
            "source": null
        }))
        .expect("Failed to parse lead");

        assert_eq!(lead.source, None);
    }

    #[test]
    fn missing_phone_fails_to_parse() {
        let result = serde_json::from_value::<Lead>(json!({ "name": "Иван" }));
        assert!(result.is_err());
    }

    #[test]
    fn empty_required_fields_fail_validation() {
        let errors = Lead::new("", "").validate().expect_err("Expected errors");
        let fields = errors.field_errors();

        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("phone"));
    }

    #[test]
    fn to_document_carries_all_fields() {
        let mut lead = Lead::new("Мария", "89001234567");
        lead.street_address = Some("ул. Гагарина, 10".to_string());
        lead.apartment = Some("15".to_string());

        let stored = lead.to_document().expect("Failed to serialize lead");

        assert_eq!(stored.get_str("name").unwrap(), "Мария");
        assert_eq!(stored.get_str("street_address").unwrap(), "ул. Гагарина, 10");
        assert_eq!(stored.get_str("source").unwrap(), "website");
        assert!(stored.contains_key("comment"));
    }
}
