//! Delayed effects.
//!
//! Actions are queued with a due tick and fired once simulated time
//! reaches it. Nothing here runs on a real clock.

use yongland_core::types::secs_to_ticks;

/// Effects that happen some time after their cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayedAction {
    /// Bring in the giant after the last mini falls.
    SpawnGiant,
    /// Take down the centre-screen banner.
    HideBanner,
    /// Switch to the victory screen.
    FinishVictory,
}

/// A queued action and the tick it becomes due.
#[derive(Debug, Clone, Copy)]
pub struct ScheduledAction {
    pub due_tick: u64,
    pub action: DelayedAction,
}

/// Pending delayed actions for the current scene.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    pending: Vec<ScheduledAction>,
}

impl Scheduler {
    /// Queue `action` to fire `delay_secs` after `now_tick`.
    pub fn schedule_in(&mut self, now_tick: u64, delay_secs: f64, action: DelayedAction) {
        self.pending.push(ScheduledAction {
            due_tick: now_tick + secs_to_ticks(delay_secs),
            action,
        });
    }

    /// Remove and return every action due at or before `now_tick`,
    /// in the order they were scheduled.
    pub fn drain_due(&mut self, now_tick: u64) -> Vec<DelayedAction> {
        let mut due = Vec::new();
        self.pending.retain(|scheduled| {
            if scheduled.due_tick <= now_tick {
                due.push(scheduled.action);
                false
            } else {
                true
            }
        });
        due
    }

    pub fn is_scheduled(&self, action: DelayedAction) -> bool {
        self.pending.iter().any(|s| s.action == action)
    }
}
