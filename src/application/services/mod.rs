pub mod health;
pub mod pagination;

pub use health::{HealthCheckup, HealthReport, RuntimeEnvironment};
pub use pagination::PaginationValidator;
