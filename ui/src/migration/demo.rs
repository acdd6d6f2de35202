//! Demo migration run
//!
//! The marketing pages and the setup wizard let visitors watch a simulated
//! migration. The plan is deterministic so the same checkpoints are shown on
//! every play; [`play_demo_run`] walks it with browser timers.

use gloo_timers::future::TimeoutFuture;

use super::run::RunAction;
use super::stage::MigrationStage;

/// Deterministic progress plan for a demo run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoRunPlan {
    /// Percentage points added per step, 1..=100
    pub step_size: u8,
    /// Fail instead of completing once progress reaches this value
    pub fail_at: Option<u8>,
    pub failure_message: String,
}

impl Default for DemoRunPlan {
    fn default() -> Self {
        Self {
            step_size: 10,
            fail_at: None,
            failure_message: "Destination CRM rejected the batch: API rate limit exceeded"
                .to_string(),
        }
    }
}

impl DemoRunPlan {
    pub fn with_step_size(step_size: u8) -> Self {
        Self {
            step_size,
            ..Self::default()
        }
    }

    pub fn failing_at(mut self, progress: u8) -> Self {
        self.fail_at = Some(progress);
        self
    }

    /// Every action the demo dispatches, in order, starting with `Start`.
    pub fn actions(&self) -> Vec<RunAction> {
        let step = self.step_size.clamp(1, 100);
        let mut actions = vec![RunAction::Start];

        let mut progress = step;
        while progress < 100 {
            actions.push(RunAction::Progress(i64::from(progress)));
            if self.fail_at.is_some_and(|fail_at| progress >= fail_at) {
                actions.push(RunAction::Fail(Some(self.failure_message.clone())));
                return actions;
            }
            progress = progress.saturating_add(step);
        }

        // Completion reaches 100, so any threshold up to it fails here
        if self.fail_at.is_some_and(|fail_at| fail_at <= 100) {
            actions.push(RunAction::Fail(Some(self.failure_message.clone())));
            return actions;
        }

        actions.push(RunAction::Succeed);
        actions
    }

    /// Stage label to show alongside a progress action
    pub fn stage_label(action: &RunAction) -> Option<&'static str> {
        match action {
            RunAction::Start => Some(MigrationStage::ConnectSource.label()),
            RunAction::Progress(p) => {
                Some(MigrationStage::for_progress((*p).clamp(0, 100) as u8).label())
            }
            _ => None,
        }
    }
}

/// Plays a demo plan, pausing `step_delay_ms` between actions.
///
/// `dispatch` receives each action; it returns `false` to stop early (for
/// example after the user reset the run).
pub async fn play_demo_run<F>(plan: &DemoRunPlan, step_delay_ms: u32, mut dispatch: F)
where
    F: FnMut(RunAction) -> bool,
{
    for action in plan.actions() {
        if !dispatch(action) {
            return;
        }
        TimeoutFuture::new(step_delay_ms).await;
    }
}
