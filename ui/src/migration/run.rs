//! Four-state migration run model driving the progress bar and footer.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, warn};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunStatus::Idle => write!(f, "idle"),
            RunStatus::Loading => write!(f, "loading"),
            RunStatus::Success => write!(f, "success"),
            RunStatus::Error => write!(f, "error"),
        }
    }
}

/// Outcome of a requested transition. Invalid transitions are ignored, not errors.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Transition {
    Applied,
    Ignored,
}

impl Transition {
    pub fn is_applied(self) -> bool {
        self == Transition::Applied
    }
}

// Action enum for run mutations
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunAction {
    Start,
    Progress(i64),
    Succeed,
    Fail(Option<String>),
    Reset,
}

/// Wording for each run state, configurable per deployment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunMessages {
    pub idle_prompt: String,
    pub in_progress: String,
    pub completed: String,
    pub generic_error: String,
}

impl Default for RunMessages {
    fn default() -> Self {
        Self {
            idle_prompt: "Ready to start your migration".to_string(),
            in_progress: "Migration in progress".to_string(),
            completed: "Migration completed successfully".to_string(),
            generic_error: "Something went wrong during the migration. Please try again."
                .to_string(),
        }
    }
}

/// Text the footer renders for the current run state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunDisplay {
    pub headline: String,
    pub detail: Option<String>,
    pub show_report: bool,
}

/// One migration run. Created idle; `reset` returns it to idle from any state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MigrationRun {
    status: RunStatus,
    progress: u8,
    error_message: Option<String>,
}

impl MigrationRun {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    /// Percentage in `0..=100`; meaningful while loading or after success.
    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_running(&self) -> bool {
        self.status == RunStatus::Loading
    }

    /// idle -> loading, with progress zeroed and any error cleared.
    pub fn start(&mut self) -> Transition {
        if self.status != RunStatus::Idle {
            return self.ignore("start");
        }
        self.status = RunStatus::Loading;
        self.progress = 0;
        self.error_message = None;
        info!("migration run started");
        Transition::Applied
    }

    /// loading -> loading. Values outside `0..=100` are clamped.
    pub fn update_progress(&mut self, progress: i64) -> Transition {
        if self.status != RunStatus::Loading {
            return self.ignore("update_progress");
        }
        self.progress = progress.clamp(0, 100) as u8;
        Transition::Applied
    }

    /// loading -> success, progress pinned to 100.
    pub fn succeed(&mut self) -> Transition {
        if self.status != RunStatus::Loading {
            return self.ignore("succeed");
        }
        self.status = RunStatus::Success;
        self.progress = 100;
        info!("migration run completed");
        Transition::Applied
    }

    /// loading -> error. The message is kept verbatim; progress is left as is.
    pub fn fail(&mut self, message: Option<String>) -> Transition {
        if self.status != RunStatus::Loading {
            return self.ignore("fail");
        }
        warn!(
            progress = self.progress,
            "migration run failed: {}",
            message.as_deref().unwrap_or("<no message>")
        );
        self.status = RunStatus::Error;
        self.error_message = message;
        Transition::Applied
    }

    /// Any state -> idle. Also cancels a run that is still loading.
    pub fn reset(&mut self) -> Transition {
        if self.status == RunStatus::Loading {
            info!(progress = self.progress, "migration run cancelled");
        }
        *self = Self::default();
        Transition::Applied
    }

    pub fn reduce_in_place(&mut self, action: RunAction) -> Transition {
        match action {
            RunAction::Start => self.start(),
            RunAction::Progress(progress) => self.update_progress(progress),
            RunAction::Succeed => self.succeed(),
            RunAction::Fail(message) => self.fail(message),
            RunAction::Reset => self.reset(),
        }
    }

    /// Display text, derived only from status, progress and the stored error.
    pub fn display(&self, messages: &RunMessages) -> RunDisplay {
        match self.status {
            RunStatus::Idle => RunDisplay {
                headline: messages.idle_prompt.clone(),
                detail: None,
                show_report: false,
            },
            RunStatus::Loading => RunDisplay {
                headline: messages.in_progress.clone(),
                detail: Some(format!("{}% complete", self.progress)),
                show_report: false,
            },
            RunStatus::Success => RunDisplay {
                headline: messages.completed.clone(),
                detail: None,
                show_report: true,
            },
            RunStatus::Error => RunDisplay {
                headline: self
                    .error_message
                    .as_deref()
                    .filter(|message| !message.trim().is_empty())
                    .unwrap_or(messages.generic_error.as_str())
                    .to_string(),
                detail: None,
                show_report: false,
            },
        }
    }

    fn ignore(&self, operation: &str) -> Transition {
        debug!(operation, status = %self.status, "ignoring invalid run transition");
        Transition::Ignored
    }
}
