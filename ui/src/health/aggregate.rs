//! Worst-case-wins roll-up of connection health.

use super::types::{ConnectionHealth, HealthStatus, SystemHealth};
use crate::utils::clock::now_ms;

/// Reduces connection samples into one [`SystemHealth`].
///
/// `overall` is the most severe status present, or `Unknown` when there are no
/// samples. `last_updated` is the newest `last_checked`, or `now_ms` when there
/// are no samples. Inputs are not modified.
pub fn aggregate(connections: &[ConnectionHealth], now_ms: u64) -> SystemHealth {
    let overall = connections
        .iter()
        .map(|connection| connection.status)
        .reduce(HealthStatus::most_severe)
        .unwrap_or(HealthStatus::Unknown);

    let last_updated = connections
        .iter()
        .map(|connection| connection.last_checked)
        .max()
        .unwrap_or(now_ms);

    SystemHealth {
        overall,
        connections: connections.to_vec(),
        last_updated,
    }
}

/// [`aggregate`] using the platform clock as aggregation time.
pub fn aggregate_now(connections: &[ConnectionHealth]) -> SystemHealth {
    aggregate(connections, now_ms())
}
