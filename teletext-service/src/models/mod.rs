pub mod lead;
pub mod plan;

pub use lead::{Lead, DEFAULT_LEAD_SOURCE};
pub use plan::Plan;
