use std::rc::Rc;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::catalog::ConnectorCatalog;
use crate::components::display::{BusyIndicator, RunStatusFooter, SystemHealthPanel};
use crate::components::forms::ConnectorBrowser;
use crate::health::{aggregate, poll_all, HealthMonitor, HealthProbe, HealthStatus, StaticProbe};
use crate::migration::{play_demo_run, DemoRunPlan, MigrationRun};
use crate::services::config::DashboardConfig;
use crate::state::{BusyCoordinator, BusyState};
use crate::utils::now_ms;
use crate::{console_debug, console_error, console_info};

fn load_catalog() -> ConnectorCatalog {
    match ConnectorCatalog::builtin() {
        Ok(catalog) => {
            console_info!("[Dashboard] Loaded {} connectors", catalog.len());
            catalog
        }
        Err(e) => {
            console_error!("[Dashboard] Connector registry unavailable: {}", e);
            ConnectorCatalog::default()
        }
    }
}

/// Probes for the dashboard preview: every popular connector reports healthy.
fn preview_probes(catalog: &ConnectorCatalog) -> Vec<Box<dyn HealthProbe>> {
    catalog
        .popular()
        .into_iter()
        .map(|connector| {
            let mut probe = StaticProbe::new(connector.id.clone(), HealthStatus::Healthy);
            probe.response_time_ms = Some(120);
            Box::new(probe) as Box<dyn HealthProbe>
        })
        .collect()
}

#[derive(Props, PartialEq, Clone)]
pub struct MigrationDashboardProps {
    #[props(default)]
    pub config: DashboardConfig,
}

/// Root of the in-app dashboard. Owns the busy coordinator, the health
/// monitor and the migration run, and hands read-only values to components.
#[component]
pub fn MigrationDashboard(props: MigrationDashboardProps) -> Element {
    let config = props.config;

    // Busy coordinator, mirrored into a signal so the overlay re-renders
    let busy_state = use_signal(BusyState::default);
    let busy = use_hook(|| {
        let busy = BusyCoordinator::new();
        busy.on_change(move |state| {
            let mut signal = busy_state;
            signal.set(state.clone());
        });
        busy
    });
    use_context_provider(|| busy.clone());

    let catalog = use_hook(|| Rc::new(load_catalog()));

    // Connection health polling
    let mut monitor = use_signal(HealthMonitor::new);
    let mut health = use_signal(|| aggregate(&[], now_ms()));
    let health_config = config.health.clone();
    let probe_catalog = catalog.clone();
    let probe_busy = busy.clone();
    use_future(move || {
        let health_config = health_config.clone();
        let catalog = probe_catalog.clone();
        let busy = probe_busy.clone();
        async move {
            let probes = preview_probes(&catalog);
            let mut first_round = true;
            loop {
                let guard = first_round.then(|| busy.acquire(Some("Checking connections...")));
                let now = now_ms();
                let samples = poll_all(&probes, now).await;
                let snapshot = monitor.with_mut(|m| {
                    m.record_all(samples);
                    m.mark_stale(now, health_config.stale_after_ms);
                    m.system_health(now)
                });
                console_debug!(
                    "[Dashboard] Health round: {} connections, overall {}",
                    snapshot.connections.len(),
                    snapshot.overall
                );
                health.set(snapshot);
                drop(guard);
                first_round = false;

                TimeoutFuture::new(health_config.poll_interval_ms).await;
            }
        }
    });

    // Migration run, driven by the demo player
    let mut run = use_signal(MigrationRun::new);
    let mut demo_generation = use_signal(|| 0u32);
    let demo_config = config.demo.clone();
    let demo_busy = busy.clone();
    let start_demo = move |_: ()| {
        let generation = demo_generation() + 1;
        demo_generation.set(generation);

        let plan = DemoRunPlan::with_step_size(demo_config.step_size);
        let step_delay_ms = demo_config.step_delay_ms;
        let busy = demo_busy.clone();
        console_info!("[Dashboard] Starting demo migration run #{}", generation);

        spawn(async move {
            let _guard = busy.acquire(Some("Running demo migration..."));
            play_demo_run(&plan, step_delay_ms, |action| {
                // A newer demo or a reset supersedes this one
                if demo_generation() != generation {
                    return false;
                }
                run.with_mut(|r| r.reduce_in_place(action)).is_applied()
            })
            .await;
        });
    };

    rsx! {
        div {
            class: "migration-dashboard",

            BusyIndicator {
                state: busy_state(),
                default_message: config.busy.default_message.clone(),
            }

            SystemHealthPanel { health: health() }

            ConnectorBrowser {
                catalog: catalog.clone(),
                on_select: move |id: String| {
                    console_debug!("[Dashboard] Connector selected: {}", id);
                },
            }

            RunStatusFooter {
                run: run(),
                messages: config.messages.clone(),
                on_start: start_demo,
                on_reset: move |_: ()| {
                    run.with_mut(|r| r.reset());
                },
                on_view_report: move |_: ()| {
                    console_info!("[Dashboard] Migration report requested");
                },
            }
        }
    }
}
