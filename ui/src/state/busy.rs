//! Reference-counted "work in progress" flag for the global processing indicator.
//!
//! Every asynchronous operation that should light up the indicator calls
//! [`BusyCoordinator::begin`] before it suspends and [`BusyCoordinator::end`]
//! once it finishes, or holds a [`BusyGuard`] from [`BusyCoordinator::acquire`]
//! which ends the slot on every exit path. The displayed message is the one
//! passed to the most recent `begin`.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::debug;

/// Snapshot of the busy counter and its display message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusyState {
    count: u32,
    message: Option<String>,
}

/// Reducer actions for [`BusyState`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusyAction {
    Begin(Option<String>),
    End,
}

impl BusyState {
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn is_busy(&self) -> bool {
        self.count > 0
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Applies an action in place. `End` at zero is absorbed.
    pub fn reduce_in_place(&mut self, action: BusyAction) {
        match action {
            BusyAction::Begin(message) => {
                self.count = self.count.saturating_add(1);
                if message.is_some() {
                    self.message = message;
                }
            }
            BusyAction::End => {
                if self.count == 0 {
                    debug!("busy end() with no outstanding begin; ignoring");
                    return;
                }
                self.count -= 1;
                if self.count == 0 {
                    self.message = None;
                }
            }
        }
    }
}

type Listener = Rc<dyn Fn(&BusyState)>;

#[derive(Default)]
struct Inner {
    state: BusyState,
    listener: Option<Listener>,
}

/// Shared handle to one busy counter.
///
/// Clones refer to the same counter; separately constructed coordinators are
/// fully independent. All mutations run to completion synchronously, which is
/// the only ordering guarantee the counter needs on the single-threaded
/// browser event loop.
#[derive(Clone, Default)]
pub struct BusyCoordinator {
    inner: Rc<RefCell<Inner>>,
}

impl BusyCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the single change listener, replacing any previous one.
    ///
    /// The listener runs after a mutation that changes `is_busy` or `message`,
    /// outside of any internal borrow, so it may read the coordinator again.
    pub fn on_change<F>(&self, listener: F)
    where
        F: Fn(&BusyState) + 'static,
    {
        self.inner.borrow_mut().listener = Some(Rc::new(listener));
    }

    pub fn begin(&self, message: Option<&str>) {
        self.apply(BusyAction::Begin(message.map(str::to_string)));
    }

    pub fn end(&self) {
        self.apply(BusyAction::End);
    }

    /// Begins a busy slot that ends when the returned guard is dropped.
    #[must_use = "dropping the guard immediately ends the busy slot"]
    pub fn acquire(&self, message: Option<&str>) -> BusyGuard {
        self.begin(message);
        BusyGuard {
            coordinator: self.clone(),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.inner.borrow().state.is_busy()
    }

    pub fn count(&self) -> u32 {
        self.inner.borrow().state.count()
    }

    pub fn message(&self) -> Option<String> {
        self.inner.borrow().state.message.clone()
    }

    pub fn snapshot(&self) -> BusyState {
        self.inner.borrow().state.clone()
    }

    fn apply(&self, action: BusyAction) {
        let notify = {
            let mut inner = self.inner.borrow_mut();
            let was_busy = inner.state.is_busy();
            let old_message = inner.state.message.clone();

            inner.state.reduce_in_place(action);

            let changed =
                was_busy != inner.state.is_busy() || old_message != inner.state.message;
            if changed {
                inner
                    .listener
                    .clone()
                    .map(|listener| (listener, inner.state.clone()))
            } else {
                None
            }
        };

        if let Some((listener, state)) = notify {
            listener(&state);
        }
    }
}

impl PartialEq for BusyCoordinator {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for BusyCoordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BusyCoordinator")
            .field("state", &self.inner.borrow().state)
            .finish()
    }
}

/// Scoped busy slot. Dropping it performs the matching `end()`.
#[derive(Debug)]
pub struct BusyGuard {
    coordinator: BusyCoordinator,
}

impl BusyGuard {
    /// Ends the slot now instead of at scope exit.
    pub fn release(self) {}
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.coordinator.end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_begin_end_counts() {
        let busy = BusyCoordinator::new();
        assert!(!busy.is_busy());

        busy.begin(None);
        busy.begin(None);
        assert_eq!(busy.count(), 2);
        assert!(busy.is_busy());

        busy.end();
        assert!(busy.is_busy());
        busy.end();
        assert!(!busy.is_busy());
    }

    #[test]
    fn test_extra_end_is_absorbed() {
        let busy = BusyCoordinator::new();
        busy.end();
        busy.end();
        assert_eq!(busy.count(), 0);

        busy.begin(Some("Saving"));
        assert_eq!(busy.count(), 1);
    }

    #[test]
    fn test_last_begin_message_wins() {
        let busy = BusyCoordinator::new();
        busy.begin(Some("Connecting to HubSpot"));
        busy.begin(Some("Loading field mappings"));
        assert_eq!(busy.message().as_deref(), Some("Loading field mappings"));

        // Ending one slot does not restore the earlier message
        busy.end();
        assert_eq!(busy.message().as_deref(), Some("Loading field mappings"));

        busy.end();
        assert_eq!(busy.message(), None);
    }

    #[test]
    fn test_begin_without_message_keeps_current() {
        let busy = BusyCoordinator::new();
        busy.begin(Some("Exporting contacts"));
        busy.begin(None);
        assert_eq!(busy.message().as_deref(), Some("Exporting contacts"));
    }

    #[test]
    fn test_instances_are_independent() {
        let a = BusyCoordinator::new();
        let b = BusyCoordinator::new();
        a.begin(None);
        assert!(a.is_busy());
        assert!(!b.is_busy());
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_guard_ends_on_drop() {
        let busy = BusyCoordinator::new();
        {
            let _guard = busy.acquire(Some("Syncing"));
            assert!(busy.is_busy());
        }
        assert!(!busy.is_busy());
        assert_eq!(busy.message(), None);
    }

    #[test]
    fn test_guard_release_ends_once() {
        let busy = BusyCoordinator::new();
        busy.begin(None);
        let guard = busy.acquire(None);
        assert_eq!(busy.count(), 2);
        guard.release();
        assert_eq!(busy.count(), 1);
    }

    #[test]
    fn test_guard_ends_on_early_return() {
        fn test_connection() -> Result<(), String> {
            Err("unauthorized".to_string())
        }

        fn failing_call(busy: &BusyCoordinator) -> Result<(), String> {
            let _guard = busy.acquire(Some("Testing connection"));
            test_connection()?;
            Ok(())
        }

        let busy = BusyCoordinator::new();
        assert!(failing_call(&busy).is_err());
        assert!(!busy.is_busy());
    }

    #[test]
    fn test_listener_fires_on_visible_changes_only() {
        let busy = BusyCoordinator::new();
        let calls = Rc::new(Cell::new(0));
        let seen = calls.clone();
        busy.on_change(move |_| seen.set(seen.get() + 1));

        busy.begin(Some("Working")); // idle -> busy
        busy.begin(Some("Working")); // same message, still busy
        busy.end(); // still busy
        busy.end(); // busy -> idle
        busy.end(); // absorbed

        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_listener_can_read_coordinator() {
        let busy = BusyCoordinator::new();
        let observed = Rc::new(Cell::new(false));
        let probe = busy.clone();
        let flag = observed.clone();
        busy.on_change(move |state| flag.set(probe.is_busy() == state.is_busy()));

        busy.begin(None);
        assert!(observed.get());
    }

    #[test]
    fn test_reducer_matches_coordinator() {
        let mut state = BusyState::default();
        state.reduce_in_place(BusyAction::Begin(Some("Importing".to_string())));
        state.reduce_in_place(BusyAction::End);
        state.reduce_in_place(BusyAction::End);
        assert_eq!(state, BusyState::default());
    }
}
