use crate::services::plans::SeedOutcome;
use serde::{Deserialize, Serialize};

pub const SEED_STATUS_OK: &str = "ok";
pub const PLANS_ALREADY_EXIST: &str = "Plans already exist";

/// Body of `POST /seed/plans`: `message` when nothing was done, `inserted`
/// otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inserted: Option<usize>,
}

impl From<SeedOutcome> for SeedResponse {
    fn from(outcome: SeedOutcome) -> Self {
        let (message, inserted) = match outcome {
            SeedOutcome::AlreadySeeded => (Some(PLANS_ALREADY_EXIST.to_string()), None),
            SeedOutcome::Inserted(count) => (None, Some(count)),
        };
        Self {
            status: SEED_STATUS_OK.to_string(),
            message,
            inserted,
        }
    }
}
