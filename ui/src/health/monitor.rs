//! Latest-sample view over polled connection health.

use tracing::{debug, warn};

use super::aggregate::aggregate;
use super::types::{ConnectionHealth, HealthStatus, SystemHealth};

/// Holds the newest sample per connector, in first-recorded order.
#[derive(Debug, Clone, Default)]
pub struct HealthMonitor {
    samples: Vec<ConnectionHealth>,
}

impl HealthMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a sample, replacing the held sample for the same connector.
    ///
    /// Returns `false` when the sample is older than the one already held and
    /// was dropped; out-of-order poll responses must not roll health back.
    pub fn record(&mut self, sample: ConnectionHealth) -> bool {
        match self
            .samples
            .iter_mut()
            .find(|held| held.connector_id == sample.connector_id)
        {
            Some(held) if sample.last_checked < held.last_checked => {
                debug!(
                    connector = %sample.connector_id,
                    sample_time = sample.last_checked,
                    held_time = held.last_checked,
                    "dropping out-of-order health sample"
                );
                false
            }
            Some(held) => {
                *held = sample;
                true
            }
            None => {
                self.samples.push(sample);
                true
            }
        }
    }

    pub fn record_all(&mut self, samples: impl IntoIterator<Item = ConnectionHealth>) -> usize {
        samples
            .into_iter()
            .map(|sample| self.record(sample))
            .filter(|accepted| *accepted)
            .count()
    }

    pub fn remove(&mut self, connector_id: &str) -> Option<ConnectionHealth> {
        let index = self
            .samples
            .iter()
            .position(|held| held.connector_id == connector_id)?;
        Some(self.samples.remove(index))
    }

    pub fn get(&self, connector_id: &str) -> Option<&ConnectionHealth> {
        self.samples
            .iter()
            .find(|held| held.connector_id == connector_id)
    }

    pub fn samples(&self) -> &[ConnectionHealth] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Downgrades samples not refreshed within `stale_after_ms` to `Unknown`.
    ///
    /// Returns how many samples were downgraded.
    pub fn mark_stale(&mut self, now_ms: u64, stale_after_ms: u64) -> usize {
        let mut downgraded = 0;
        for held in &mut self.samples {
            let age = now_ms.saturating_sub(held.last_checked);
            if age > stale_after_ms && held.status != HealthStatus::Unknown {
                warn!(
                    connector = %held.connector_id,
                    age_ms = age,
                    previous = held.status.as_str(),
                    "health sample went stale"
                );
                held.status = HealthStatus::Unknown;
                downgraded += 1;
            }
        }
        downgraded
    }

    pub fn system_health(&self, now_ms: u64) -> SystemHealth {
        aggregate(&self.samples, now_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(connector: &str, status: HealthStatus, last_checked: u64) -> ConnectionHealth {
        ConnectionHealth::new(format!("{connector}-{last_checked}"), connector, status, last_checked)
    }

    #[test]
    fn test_record_replaces_per_connector() {
        let mut monitor = HealthMonitor::new();
        assert!(monitor.record(sample("hubspot", HealthStatus::Healthy, 100)));
        assert!(monitor.record(sample("salesforce", HealthStatus::Healthy, 100)));
        assert!(monitor.record(sample("hubspot", HealthStatus::Failed, 200)));

        assert_eq!(monitor.len(), 2);
        assert_eq!(monitor.get("hubspot").unwrap().status, HealthStatus::Failed);
        // first-recorded order is kept
        assert_eq!(monitor.samples()[0].connector_id, "hubspot");
    }

    #[test]
    fn test_out_of_order_sample_dropped() {
        let mut monitor = HealthMonitor::new();
        monitor.record(sample("hubspot", HealthStatus::Failed, 300));
        assert!(!monitor.record(sample("hubspot", HealthStatus::Healthy, 250)));
        assert_eq!(monitor.get("hubspot").unwrap().status, HealthStatus::Failed);
    }

    #[test]
    fn test_record_all_counts_accepted() {
        let mut monitor = HealthMonitor::new();
        monitor.record(sample("close", HealthStatus::Healthy, 500));
        let accepted = monitor.record_all(vec![
            sample("close", HealthStatus::Degraded, 400),
            sample("copper", HealthStatus::Healthy, 400),
        ]);
        assert_eq!(accepted, 1);
    }

    #[test]
    fn test_mark_stale() {
        let mut monitor = HealthMonitor::new();
        monitor.record(sample("hubspot", HealthStatus::Healthy, 1_000));
        monitor.record(sample("stripe", HealthStatus::Healthy, 9_000));

        assert_eq!(monitor.mark_stale(10_000, 5_000), 1);
        assert_eq!(monitor.get("hubspot").unwrap().status, HealthStatus::Unknown);
        assert_eq!(monitor.get("stripe").unwrap().status, HealthStatus::Healthy);
        // already unknown samples are not counted again
        assert_eq!(monitor.mark_stale(10_000, 5_000), 0);
    }

    #[test]
    fn test_system_health_of_monitor() {
        let mut monitor = HealthMonitor::new();
        assert_eq!(monitor.system_health(77).overall, HealthStatus::Unknown);

        monitor.record(sample("hubspot", HealthStatus::Healthy, 10));
        monitor.record(sample("mailchimp", HealthStatus::Degraded, 20));
        let health = monitor.system_health(77);
        assert_eq!(health.overall, HealthStatus::Degraded);
        assert_eq!(health.last_updated, 20);

        monitor.remove("mailchimp");
        assert_eq!(monitor.system_health(77).overall, HealthStatus::Healthy);
    }
}
