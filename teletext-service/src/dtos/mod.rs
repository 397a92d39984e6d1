pub mod diagnostics;
pub mod leads;
pub mod plans;
pub mod site;

pub use diagnostics::DiagnosticsResponse;
pub use leads::LeadCreatedResponse;
pub use plans::SeedResponse;
pub use site::ServiceInfoResponse;
