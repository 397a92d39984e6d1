pub mod diagnostics;
pub mod health;
pub mod leads;
pub mod plans;
pub mod site;

pub use diagnostics::database_diagnostics;
pub use health::{health_check, metrics_endpoint, not_found, readiness_check};
pub use leads::create_lead;
pub use plans::{list_plans, seed_plans};
pub use site::service_info;
