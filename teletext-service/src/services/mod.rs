pub mod database;
pub mod diagnostics;
pub mod leads;
pub mod memory;
pub mod metrics;
pub mod plans;
pub mod store;

pub use database::MongoStore;
pub use memory::MemoryStore;
pub use metrics::{get_metrics, init_metrics};
pub use store::{DocumentStore, StoreHandle};
