use super::metrics::record_lead_created;
use super::store::DocumentStore;
use crate::models::Lead;
use service_core::error::AppError;

/// Store a contact request as submitted and return its generated id.
pub async fn submit_lead(store: &dyn DocumentStore, lead: &Lead) -> Result<String, AppError> {
    let id = store
        .create_document(Lead::COLLECTION, lead.to_document()?)
        .await?;

    tracing::info!(lead_id = %id, source = ?lead.source, "Lead created");
    record_lead_created();

    Ok(id)
}
