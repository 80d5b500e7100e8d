//! Deferred work: a virtual-clock scheduler for debounce and settle timers.
//!
//! The widgets never spawn threads or sleep. Deferred work is modeled as
//! explicit [`Task`]s armed on a [`Scheduler`] whose millisecond clock the
//! host advances; [`Scheduler::advance`] returns the tasks that came due so
//! the host can route them back through the component registry. Tasks are
//! cancellable by handle, which is what gives the resize debounce its
//! at-most-one-in-flight guarantee.

use crate::dom::NodeId;

// ---------------------------------------------------------------------------
// Task
// ---------------------------------------------------------------------------

/// A unit of deferred widget work. Each task carries the widget root it
/// belongs to so the registry can drop tasks for roots that have been
/// detached in the meantime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// The resize quiet period elapsed; recompute display mode, geometry and
    /// overflow.
    ResizeSettled { root: NodeId },
    /// Enable the CSS transition class once initial layout has settled.
    EnableTransition { root: NodeId },
    /// Position the mobile overlay below the site header once layout has
    /// settled.
    PositionOverlay { root: NodeId },
}

impl Task {
    /// The widget root this task belongs to.
    pub fn root(&self) -> NodeId {
        match *self {
            Self::ResizeSettled { root }
            | Self::EnableTransition { root }
            | Self::PositionOverlay { root } => root,
        }
    }
}

// ---------------------------------------------------------------------------
// Scheduler
// ---------------------------------------------------------------------------

/// Handle to a scheduled task, usable for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

#[derive(Debug)]
struct Entry {
    id: TaskId,
    due: u64,
    task: Task,
}

/// Virtual-time task scheduler.
///
/// Time only moves when the host calls [`advance`](Scheduler::advance).
/// Due tasks fire in deadline order; ties fire in scheduling order.
#[derive(Debug, Default)]
pub struct Scheduler {
    now: u64,
    next_id: u64,
    entries: Vec<Entry>,
}

impl Scheduler {
    /// Create a scheduler at time zero with no pending tasks.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current virtual time in milliseconds.
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Schedule `task` to fire `delay_ms` from now. Returns a handle that
    /// can cancel it.
    pub fn schedule(&mut self, delay_ms: u64, task: Task) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            due: self.now + delay_ms,
            task,
        });
        id
    }

    /// Cancel a pending task. Returns whether it was still pending.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Advance the clock by `delta_ms` and return the tasks that came due,
    /// in deadline order (scheduling order for equal deadlines).
    pub fn advance(&mut self, delta_ms: u64) -> Vec<Task> {
        self.now += delta_ms;
        let now = self.now;

        let mut due: Vec<Entry> = Vec::new();
        let mut i = 0;
        while i < self.entries.len() {
            if self.entries[i].due <= now {
                due.push(self.entries.remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by_key(|e| (e.due, e.id.0));
        due.into_iter().map(|e| e.task).collect()
    }

    /// Number of pending tasks.
    pub fn pending_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is pending.
    pub fn is_idle(&self) -> bool {
        self.entries.is_empty()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
