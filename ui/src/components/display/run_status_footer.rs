use dioxus::prelude::*;

use crate::migration::{MigrationRun, MigrationStage, RunMessages, RunStatus};

#[derive(Props, PartialEq, Clone)]
pub struct RunStatusFooterProps {
    pub run: MigrationRun,
    pub messages: RunMessages,
    pub on_start: EventHandler<()>,
    pub on_reset: EventHandler<()>,
    pub on_view_report: EventHandler<()>,
}

#[component]
pub fn RunStatusFooter(props: RunStatusFooterProps) -> Element {
    let run = &props.run;
    let display = run.display(&props.messages);
    let status = run.status();
    let progress = run.progress();
    let stage_label = MigrationStage::for_progress(progress).label();
    let show_bar = matches!(status, RunStatus::Loading | RunStatus::Success);
    let on_start = props.on_start;
    let on_reset = props.on_reset;
    let on_view_report = props.on_view_report;

    rsx! {
        div {
            class: "run-status-footer {status}",

            if show_bar {
                div {
                    class: "progress-bar-container",
                    div {
                        class: "progress-bar-background",
                        div {
                            class: "progress-bar-fill",
                            style: format!("width: {}%", progress),
                        }
                    }
                    span {
                        class: "progress-percentage",
                        "{progress}%"
                    }
                }
            }

            div {
                class: "run-status-headline",
                "{display.headline}"
            }

            if let Some(detail) = &display.detail {
                div {
                    class: "run-status-detail",
                    "{detail}"
                }
            }

            if status == RunStatus::Loading {
                div {
                    class: "run-status-stage",
                    "{stage_label}"
                }
            }

            div {
                class: "button-section",
                if status == RunStatus::Idle {
                    button {
                        class: "validate-button",
                        onclick: move |_| on_start.call(()),
                        "Start migration"
                    }
                } else {
                    button {
                        class: "secondary-button",
                        onclick: move |_| on_reset.call(()),
                        if status == RunStatus::Loading { "Cancel" } else { "Start over" }
                    }
                }
                if display.show_report {
                    button {
                        class: "validate-button",
                        onclick: move |_| on_view_report.call(()),
                        "View report"
                    }
                }
            }
        }
    }
}
