//! Process and runtime facts reported by the health endpoint.

use std::time::Instant;

use chrono::Utc;
use serde::Serialize;
use sysinfo::{ProcessesToUpdate, System};

use crate::protocol::{API_VERSION, HealthResponse};

/// Memory usage snapshot, in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemorySnapshot {
    /// Resident set size of this process. Zero if the process could not be inspected.
    pub rss: u64,
    /// Virtual memory of this process. Zero if the process could not be inspected.
    #[serde(rename = "virtual")]
    pub virtual_memory: u64,
    /// Total memory of the host.
    pub system_total: u64,
    /// Memory in use on the host.
    pub system_used: u64,
}

/// Collects a memory snapshot for the current process.
pub fn memory_snapshot() -> MemorySnapshot {
    let mut system = System::new();
    system.refresh_memory();

    let mut snapshot = MemorySnapshot {
        system_total: system.total_memory(),
        system_used: system.used_memory(),
        ..Default::default()
    };

    if let Ok(pid) = sysinfo::get_current_pid() {
        system.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
        if let Some(process) = system.process(pid) {
            snapshot.rss = process.memory();
            snapshot.virtual_memory = process.virtual_memory();
        }
    }

    snapshot
}

/// Builds health reports from the server start time and environment name.
#[derive(Debug, Clone)]
pub struct HealthReporter {
    started_at: Instant,
    environment: String,
}

impl HealthReporter {
    /// Creates a reporter whose uptime counts from now.
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            started_at: Instant::now(),
            environment: environment.into(),
        }
    }

    /// Seconds since the reporter was created.
    pub fn uptime(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }

    /// Builds a health report. Reads process statistics, so call it off the
    /// async executor.
    pub fn report(&self) -> HealthResponse {
        HealthResponse {
            status: "healthy",
            uptime: self.uptime(),
            timestamp: Utc::now(),
            memory: memory_snapshot(),
            version: API_VERSION,
            environment: self.environment.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report() {
        let reporter = HealthReporter::new("test");
        let report = reporter.report();

        assert_eq!(report.status, "healthy");
        assert_eq!(report.version, "1.0.1");
        assert_eq!(report.environment, "test");
        assert!(report.uptime >= 0.0);
    }

    #[test]
    fn test_memory_snapshot_serializes() {
        let snapshot = MemorySnapshot {
            rss: 1,
            virtual_memory: 2,
            system_total: 3,
            system_used: 4,
        };
        let value = serde_json::to_value(snapshot).unwrap();

        assert_eq!(value["rss"], 1);
        assert_eq!(value["virtual"], 2);
        assert_eq!(value["systemTotal"], 3);
        assert_eq!(value["systemUsed"], 4);
    }
}
