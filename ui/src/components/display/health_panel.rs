use dioxus::prelude::*;

use crate::health::{HealthStatus, SystemHealth};

fn status_class(status: HealthStatus) -> &'static str {
    match status {
        HealthStatus::Healthy => "health-badge healthy",
        HealthStatus::Degraded => "health-badge degraded",
        HealthStatus::Failed => "health-badge failed",
        HealthStatus::Unknown => "health-badge unknown",
    }
}

fn status_icon(status: HealthStatus) -> &'static str {
    match status {
        HealthStatus::Healthy => "✓",
        HealthStatus::Degraded => "⚠",
        HealthStatus::Failed => "✕",
        HealthStatus::Unknown => "?",
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct SystemHealthPanelProps {
    pub health: SystemHealth,
}

#[component]
pub fn SystemHealthPanel(props: SystemHealthPanelProps) -> Element {
    let health = &props.health;
    let summary = health.summary();
    let overall = health.overall;
    let overall_icon = status_icon(overall);

    rsx! {
        div {
            class: "system-health-panel",

            div {
                class: "system-health-header",
                h4 { class: "system-health-title", "Connection Health" }
                span {
                    class: status_class(overall),
                    "{overall_icon} {overall}"
                }
            }

            div {
                class: "health-summary",
                span { class: "stat-value", "{summary.healthy} healthy" }
                span { class: "stat-value", "{summary.degraded} degraded" }
                span { class: "stat-value", "{summary.failed} failed" }
                span { class: "stat-value", "{summary.unknown} unknown" }
                if let Some(avg) = summary.average_response_time_ms {
                    span { class: "stat-value", "avg {avg} ms" }
                }
            }

            if health.connections.is_empty() {
                div {
                    class: "health-empty",
                    "No connections checked yet"
                }
            }

            ul {
                class: "health-connection-list",
                for connection in health.connections.iter() {
                    li {
                        key: "{connection.connector_id}",
                        class: "health-connection-item",
                        span {
                            class: status_class(connection.status),
                            {status_icon(connection.status)}
                        }
                        span { class: "health-connector-name", "{connection.connector_id}" }
                        if let Some(error) = &connection.last_error {
                            span { class: "health-connector-error", "{error}" }
                        }
                    }
                }
            }
        }
    }
}
