//! # Finance Tracker core
//!
//! Decision logic behind the finance tracker's listing and health
//! endpoints, kept free of any HTTP framework or database.
//!
//! - **application**: pagination validator and health checkup services
//! - **support**: shared pagination types and error enums
//! - **config**: TOML configuration
//! - **logging**: tracing subscriber setup

pub mod application;
pub mod config;
pub mod logging;
pub mod support;

pub use application::{HealthCheckup, HealthReport, PaginationValidator, RuntimeEnvironment};
pub use config::{default_config_path, AppConfig};
pub use support::{
    AppError, ConfigError, PageQuery, PaginatedResponse, PaginationConfig, PaginationRequest,
    PaginationResult,
};
