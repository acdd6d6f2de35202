//! Health probe seam
//!
//! A probe checks one connector through whatever backend or integration broker
//! the connector uses. The transport is outside this crate; probes only have to
//! turn a check into a [`ConnectionHealth`] sample.

use async_trait::async_trait;
use futures::future::join_all;
use tracing::warn;

use super::types::{ConnectionHealth, HealthStatus};
use crate::services::errors::ProbeError;

/// Checks the live connectivity of one connector
#[async_trait(?Send)]
pub trait HealthProbe {
    /// Connector this probe reports on
    fn connector_id(&self) -> &str;

    /// Run one check. `now_ms` is the timestamp to stamp the sample with.
    async fn check(&self, now_ms: u64) -> Result<ConnectionHealth, ProbeError>;
}

/// Runs every probe concurrently and returns one sample per probe, in probe order.
///
/// A probe that errors yields a `Failed` sample carrying the error text.
pub async fn poll_all(probes: &[Box<dyn HealthProbe>], now_ms: u64) -> Vec<ConnectionHealth> {
    let checks = probes.iter().map(|probe| async move {
        match probe.check(now_ms).await {
            Ok(sample) => sample,
            Err(error) => {
                warn!(
                    connector = probe.connector_id(),
                    transient = error.is_transient(),
                    "health probe failed: {}",
                    error
                );
                failed_sample(probe.connector_id(), now_ms, &error)
            }
        }
    });

    join_all(checks).await
}

/// Probe that always reports the same status.
///
/// Used on the marketing dashboard preview, where no live connections exist.
#[derive(Debug, Clone)]
pub struct StaticProbe {
    pub connector_id: String,
    pub status: HealthStatus,
    pub response_time_ms: Option<u64>,
}

impl StaticProbe {
    pub fn new(connector_id: impl Into<String>, status: HealthStatus) -> Self {
        Self {
            connector_id: connector_id.into(),
            status,
            response_time_ms: None,
        }
    }
}

#[async_trait(?Send)]
impl HealthProbe for StaticProbe {
    fn connector_id(&self) -> &str {
        &self.connector_id
    }

    async fn check(&self, now_ms: u64) -> Result<ConnectionHealth, ProbeError> {
        let mut sample = ConnectionHealth::new(
            format!("{}-{}", self.connector_id, now_ms),
            self.connector_id.clone(),
            self.status,
            now_ms,
        );
        sample.response_time_ms = self.response_time_ms;
        Ok(sample)
    }
}

fn failed_sample(connector_id: &str, now_ms: u64, error: &ProbeError) -> ConnectionHealth {
    ConnectionHealth::new(
        format!("{connector_id}-{now_ms}"),
        connector_id,
        HealthStatus::Failed,
        now_ms,
    )
    .with_error(error.to_string())
}
