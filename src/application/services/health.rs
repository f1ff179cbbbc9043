//! Health checkup

use std::path::Path;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::support::PaginationConfig;

/// Environment variables a container runtime sets for us.
const CONTAINER_ENV_VARS: [&str; 2] = ["RUNNING_IN_CONTAINER", "DOTNET_RUNNING_IN_CONTAINER"];

/// File Docker creates at the root of every container.
const DOCKER_MARKER: &str = "/.dockerenv";

/// Where the process is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    Container,
    Local,
}

impl RuntimeEnvironment {
    pub fn detect() -> Self {
        Self::detect_with(|key| std::env::var(key).ok(), Path::new(DOCKER_MARKER))
    }

    /// Detection with injectable environment lookup and marker file.
    pub fn detect_with<F>(lookup: F, marker: &Path) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let flagged = CONTAINER_ENV_VARS
            .iter()
            .filter_map(|key| lookup(key).map(|value| (*key, value)))
            .find(|(_, value)| is_truthy(value));

        if let Some((key, _)) = flagged {
            debug!("Container detected via {}", key);
            return RuntimeEnvironment::Container;
        }

        if marker.exists() {
            debug!("Container detected via {}", marker.display());
            return RuntimeEnvironment::Container;
        }

        RuntimeEnvironment::Local
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RuntimeEnvironment::Container => "container",
            RuntimeEnvironment::Local => "local",
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes"
    )
}

/// Service health response
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: String,
    pub version: String,
    pub environment: RuntimeEnvironment,
    pub uptime_seconds: u64,
    pub checked_at: DateTime<Utc>,
    pub pagination: PaginationConfig,
}

pub struct HealthCheckup {
    environment: RuntimeEnvironment,
    pagination: PaginationConfig,
    started_at: Instant,
}

impl HealthCheckup {
    pub fn new(environment: RuntimeEnvironment, pagination: PaginationConfig) -> Self {
        info!("Health checkup running in {} environment", environment.as_str());
        Self {
            environment,
            pagination,
            started_at: Instant::now(),
        }
    }

    pub fn report(&self) -> HealthReport {
        let uptime_seconds = self.started_at.elapsed().as_secs();
        debug!(
            environment = self.environment.as_str(),
            uptime_seconds, "Health checkup"
        );

        HealthReport {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: self.environment,
            uptime_seconds,
            checked_at: Utc::now(),
            pagination: self.pagination,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn missing_marker() -> std::path::PathBuf {
        let dir = tempfile::tempdir().unwrap();
        dir.path().join("no-such-marker")
    }

    #[test]
    fn local_when_nothing_set() {
        let env = RuntimeEnvironment::detect_with(lookup(&[]), &missing_marker());
        assert_eq!(env, RuntimeEnvironment::Local);
    }

    #[test]
    fn container_via_env_flag() {
        let env = RuntimeEnvironment::detect_with(
            lookup(&[("DOTNET_RUNNING_IN_CONTAINER", "True")]),
            &missing_marker(),
        );
        assert_eq!(env, RuntimeEnvironment::Container);

        let env = RuntimeEnvironment::detect_with(
            lookup(&[("RUNNING_IN_CONTAINER", "1")]),
            &missing_marker(),
        );
        assert_eq!(env, RuntimeEnvironment::Container);
    }

    #[test]
    fn falsy_flag_is_ignored() {
        let env = RuntimeEnvironment::detect_with(
            lookup(&[("RUNNING_IN_CONTAINER", "false")]),
            &missing_marker(),
        );
        assert_eq!(env, RuntimeEnvironment::Local);
    }

    #[test]
    fn container_via_marker_file() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join(".dockerenv");
        std::fs::write(&marker, b"").unwrap();

        let env = RuntimeEnvironment::detect_with(lookup(&[]), &marker);
        assert_eq!(env, RuntimeEnvironment::Container);
    }

    #[test]
    fn report_serializes_environment_lowercase() {
        let checkup =
            HealthCheckup::new(RuntimeEnvironment::Container, PaginationConfig::default());
        let report = checkup.report();
        assert_eq!(report.status, "ok");
        assert_eq!(report.version, env!("CARGO_PKG_VERSION"));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["environment"], "container");
        assert_eq!(json["pagination"]["default_page_size"], 20);
        assert_eq!(json["pagination"]["max_page_size"], 50);
        assert!(json["checked_at"].is_string());
    }
}
