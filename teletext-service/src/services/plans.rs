use super::metrics::record_plans_seeded;
use super::store::DocumentStore;
use crate::models::Plan;
use mongodb::bson::doc;
use service_core::error::AppError;
use validator::Validate;

/// Result of a seeding request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The plan collection already had at least one document.
    AlreadySeeded,
    Inserted(usize),
}

/// The tariff line-up published when the site first goes live.
pub fn default_plans() -> Vec<Plan> {
    vec![
        Plan::new("Старт", 50, 390, Some("Базовый тариф для общения и учебы")),
        Plan::new("Оптимум", 100, 590, Some("Комфортный интернет для семьи")).featured(true),
        Plan::new("Турбо", 300, 790, Some("Высокая скорость для игр и 4K")),
        Plan::new("Максимум", 500, 990, Some("Для всего и сразу")),
    ]
}

/// Insert [`default_plans`] in order if the plan collection is empty.
///
/// The emptiness check and the inserts are separate store calls with no lock
/// between them: two concurrent first calls can both see an empty collection
/// and insert the line-up twice. Sequential calls seed at most once.
pub async fn seed_default_plans(store: &dyn DocumentStore) -> Result<SeedOutcome, AppError> {
    let existing = store.get_documents(Plan::COLLECTION, doc! {}, Some(1)).await?;
    if !existing.is_empty() {
        tracing::info!("Plans already exist, skipping seed");
        return Ok(SeedOutcome::AlreadySeeded);
    }

    let plans = default_plans();
    for plan in &plans {
        plan.validate()?;
        store
            .create_document(Plan::COLLECTION, plan.to_document()?)
            .await?;
    }

    tracing::info!(inserted = plans.len(), "Seeded default plans");
    record_plans_seeded(plans.len());

    Ok(SeedOutcome::Inserted(plans.len()))
}

/// Every stored plan, in store order, mapped through [`Plan::from_document`].
pub async fn list_plans(store: &dyn DocumentStore) -> Result<Vec<Plan>, AppError> {
    let docs = store.get_documents(Plan::COLLECTION, doc! {}, None).await?;
    Ok(docs.iter().map(Plan::from_document).collect())
}
