//! Post-transition hooks
//!
//! Anything interested in view changes registers a hook with the app shell;
//! hooks are notified in registration order after every completed
//! transition. The session itself never knows who is listening.

use crate::session::ViewChange;

/// Observer of completed view transitions
pub trait TransitionHook {
    /// Called after the session moved between views
    fn after_transition(&mut self, change: &ViewChange);
}

/// Notify every hook, in registration order
pub fn notify_all(hooks: &mut [Box<dyn TransitionHook>], change: &ViewChange) {
    for hook in hooks {
        hook.after_transition(change);
    }
}

/// Built-in hook that logs every transition
#[derive(Debug, Default)]
pub struct TransitionLog;

impl TransitionHook for TransitionLog {
    fn after_transition(&mut self, change: &ViewChange) {
        tracing::debug!(from = %change.from, to = %change.to, "view changed");
    }
}
