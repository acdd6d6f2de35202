use serde::{Deserialize, Serialize};
use std::fmt;

/// Health of one connector or of the whole system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Failed,
    /// Not checked yet, or the last sample went stale.
    #[default]
    Unknown,
}

impl HealthStatus {
    /// Rank used by the roll-up; higher is worse.
    ///
    /// `failed > degraded > unknown > healthy`. Declaration order of the
    /// variants is not significant.
    pub fn severity(self) -> u8 {
        match self {
            HealthStatus::Healthy => 0,
            HealthStatus::Unknown => 1,
            HealthStatus::Degraded => 2,
            HealthStatus::Failed => 3,
        }
    }

    /// The worse of two statuses.
    pub fn most_severe(self, other: HealthStatus) -> HealthStatus {
        if other.severity() > self.severity() {
            other
        } else {
            self
        }
    }

    /// Healthy or degraded connectors still move records.
    pub fn is_operational(self) -> bool {
        matches!(self, HealthStatus::Healthy | HealthStatus::Degraded)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HealthStatus::Healthy => "healthy",
            HealthStatus::Degraded => "degraded",
            HealthStatus::Failed => "failed",
            HealthStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthStatus::Healthy => write!(f, "Healthy"),
            HealthStatus::Degraded => write!(f, "Degraded"),
            HealthStatus::Failed => write!(f, "Failed"),
            HealthStatus::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Throughput figures some connectors report alongside their status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetrics {
    pub requests_per_minute: f64,
    /// 0.0 to 1.0
    pub success_rate: f64,
    pub average_latency_ms: f64,
}

/// Point-in-time health sample for one connector. Timestamps are Unix ms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionHealth {
    pub id: String,
    pub connector_id: String,
    pub status: HealthStatus,
    pub last_checked: u64,
    #[serde(default, rename = "responseTime")]
    pub response_time_ms: Option<u64>,
    /// Percentage, 0.0 to 100.0
    #[serde(default)]
    pub uptime: Option<f64>,
    #[serde(default)]
    pub error_count: Option<u32>,
    #[serde(default)]
    pub last_error: Option<String>,
    #[serde(default)]
    pub metrics: Option<HealthMetrics>,
}

impl ConnectionHealth {
    pub fn new(
        id: impl Into<String>,
        connector_id: impl Into<String>,
        status: HealthStatus,
        last_checked: u64,
    ) -> Self {
        Self {
            id: id.into(),
            connector_id: connector_id.into(),
            status,
            last_checked,
            response_time_ms: None,
            uptime: None,
            error_count: None,
            last_error: None,
            metrics: None,
        }
    }

    pub fn with_response_time(mut self, response_time_ms: u64) -> Self {
        self.response_time_ms = Some(response_time_ms);
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error_count = Some(self.error_count.unwrap_or(0).saturating_add(1));
        self.last_error = Some(error.into());
        self
    }
}

/// Roll-up of a set of connection samples. Always derived, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemHealth {
    pub overall: HealthStatus,
    pub connections: Vec<ConnectionHealth>,
    pub last_updated: u64,
}

/// Per-status counts for the dashboard header
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HealthSummary {
    pub healthy: usize,
    pub degraded: usize,
    pub failed: usize,
    pub unknown: usize,
    pub average_response_time_ms: Option<u64>,
}

impl HealthSummary {
    pub fn total(&self) -> usize {
        self.healthy + self.degraded + self.failed + self.unknown
    }
}

impl SystemHealth {
    pub fn is_operational(&self) -> bool {
        self.overall.is_operational()
    }

    pub fn summary(&self) -> HealthSummary {
        let mut summary = HealthSummary::default();
        // Widened so externally reported times cannot overflow the sum
        let mut response_total = 0u128;
        let mut response_samples = 0u128;

        for connection in &self.connections {
            match connection.status {
                HealthStatus::Healthy => summary.healthy += 1,
                HealthStatus::Degraded => summary.degraded += 1,
                HealthStatus::Failed => summary.failed += 1,
                HealthStatus::Unknown => summary.unknown += 1,
            }
            if let Some(ms) = connection.response_time_ms {
                response_total += u128::from(ms);
                response_samples += 1;
            }
        }

        if response_samples > 0 {
            let average = response_total / response_samples;
            summary.average_response_time_ms = Some(u64::try_from(average).unwrap_or(u64::MAX));
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ranking() {
        assert!(HealthStatus::Failed.severity() > HealthStatus::Degraded.severity());
        assert!(HealthStatus::Degraded.severity() > HealthStatus::Unknown.severity());
        assert!(HealthStatus::Unknown.severity() > HealthStatus::Healthy.severity());
    }

    #[test]
    fn test_most_severe() {
        use HealthStatus::*;
        assert_eq!(Healthy.most_severe(Unknown), Unknown);
        assert_eq!(Unknown.most_severe(Degraded), Degraded);
        assert_eq!(Failed.most_severe(Degraded), Failed);
        assert_eq!(Healthy.most_severe(Healthy), Healthy);
    }

    #[test]
    fn test_operational_statuses() {
        assert!(HealthStatus::Healthy.is_operational());
        assert!(HealthStatus::Degraded.is_operational());
        assert!(!HealthStatus::Failed.is_operational());
        assert!(!HealthStatus::Unknown.is_operational());
    }

    #[test]
    fn test_sample_deserializes_camel_case() {
        let json = r#"{
            "id": "chk-1",
            "connectorId": "hubspot",
            "status": "degraded",
            "lastChecked": 1700000000000,
            "responseTime": 840,
            "errorCount": 2,
            "lastError": "rate limited"
        }"#;
        let sample: ConnectionHealth = serde_json::from_str(json).unwrap();
        assert_eq!(sample.connector_id, "hubspot");
        assert_eq!(sample.status, HealthStatus::Degraded);
        assert_eq!(sample.response_time_ms, Some(840));
        assert_eq!(sample.last_error.as_deref(), Some("rate limited"));
        assert!(sample.metrics.is_none());
    }

    #[test]
    fn test_summary_counts_and_average() {
        let health = SystemHealth {
            overall: HealthStatus::Failed,
            connections: vec![
                ConnectionHealth::new("1", "hubspot", HealthStatus::Healthy, 10).with_response_time(100),
                ConnectionHealth::new("2", "salesforce", HealthStatus::Failed, 20).with_error("401"),
                ConnectionHealth::new("3", "pipedrive", HealthStatus::Healthy, 30).with_response_time(300),
                ConnectionHealth::new("4", "slack", HealthStatus::Unknown, 40),
            ],
            last_updated: 40,
        };

        let summary = health.summary();
        assert_eq!(summary.healthy, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.unknown, 1);
        assert_eq!(summary.degraded, 0);
        assert_eq!(summary.total(), 4);
        assert_eq!(summary.average_response_time_ms, Some(200));
        assert!(!health.is_operational());
    }

    #[test]
    fn test_summary_with_extreme_response_times() {
        let samples: Vec<ConnectionHealth> = serde_json::from_str(
            r#"[
                {"id": "a", "connectorId": "hubspot", "status": "healthy", "lastChecked": 1, "responseTime": 18446744073709551615},
                {"id": "b", "connectorId": "stripe", "status": "healthy", "lastChecked": 2, "responseTime": 10}
            ]"#,
        )
        .unwrap();
        let health = crate::health::aggregate(&samples, 5);

        let summary = health.summary();
        assert_eq!(summary.healthy, 2);
        assert_eq!(summary.average_response_time_ms, Some(9_223_372_036_854_775_812));
    }

    #[test]
    fn test_error_count_saturates() {
        let mut sample = ConnectionHealth::new("1", "hubspot", HealthStatus::Failed, 10);
        sample.error_count = Some(u32::MAX);
        let sample = sample.with_error("timeout");
        assert_eq!(sample.error_count, Some(u32::MAX));
        assert_eq!(sample.last_error.as_deref(), Some("timeout"));
    }
}
