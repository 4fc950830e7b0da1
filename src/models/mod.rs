pub mod credentials;
pub mod record;
pub mod summary;

pub use credentials::Credentials;
pub use record::{Utilization, UtilizationRecord};
pub use summary::UsageSummary;
