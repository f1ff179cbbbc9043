pub mod services;

pub use services::{HealthCheckup, HealthReport, PaginationValidator, RuntimeEnvironment};
