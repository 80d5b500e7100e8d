//! The component registry: root element → attached widget instance.
//!
//! An explicit, injected service with a fixed lifecycle: created once by the
//! host, entries inserted only by [`attach`](ComponentRegistry::attach) and
//! removed only by [`detach`](ComponentRegistry::detach). It is also the
//! event fan-in: the host hands every UI event and every due scheduler task
//! to the registry, which routes them to the widgets that are still
//! attached — tasks whose root has been detached in the meantime are
//! silently dropped, which is what keeps fire-and-forget deferrals harmless
//! after teardown.

use crate::dom::{Dom, NodeId};
use crate::error::WidgetError;
use crate::event::input::UiEvent;
use crate::menu::{Menu, MenuConfig};
use crate::schedule::{Scheduler, Task};

// ---------------------------------------------------------------------------
// ComponentRegistry
// ---------------------------------------------------------------------------

/// Owner of every attached widget instance, keyed by root element.
///
/// Entries keep attach order, so event fan-out is deterministic. After
/// [`shutdown`](ComponentRegistry::shutdown) every lifecycle and dispatch
/// call fails with [`WidgetError::MissingHost`].
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    entries: Vec<Menu>,
    closed: bool,
}

impl ComponentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a menu widget to `root` and register the instance.
    ///
    /// Re-attaching to an already registered root replaces the previous
    /// instance.
    pub fn attach(
        &mut self,
        dom: &mut Dom,
        scheduler: &mut Scheduler,
        root: NodeId,
        config: MenuConfig,
    ) -> Result<(), WidgetError> {
        if self.closed {
            return Err(WidgetError::MissingHost);
        }
        let menu = Menu::attach(dom, scheduler, root, config)?;
        if let Some(existing) = self.entries.iter_mut().find(|m| m.root() == root) {
            *existing = menu;
        } else {
            self.entries.push(menu);
        }
        Ok(())
    }

    /// Detach the widget attached to `root`, reversing attach's marker and
    /// severing all event routing. Returns the detached instance.
    pub fn detach(&mut self, dom: &mut Dom, root: NodeId) -> Result<Menu, WidgetError> {
        if self.closed {
            return Err(WidgetError::MissingHost);
        }
        let idx = self
            .entries
            .iter()
            .position(|m| m.root() == root)
            .ok_or(WidgetError::NotAttached)?;
        let mut menu = self.entries.remove(idx);
        menu.teardown(dom);
        Ok(menu)
    }

    /// Whether a widget is attached to `root`.
    pub fn contains(&self, root: NodeId) -> bool {
        self.entries.iter().any(|m| m.root() == root)
    }

    /// The widget attached to `root`, if any.
    pub fn get(&self, root: NodeId) -> Option<&Menu> {
        self.entries.iter().find(|m| m.root() == root)
    }

    /// Mutable access to the widget attached to `root`, if any.
    pub fn get_mut(&mut self, root: NodeId) -> Option<&mut Menu> {
        self.entries.iter_mut().find(|m| m.root() == root)
    }

    /// Number of attached widgets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no widget is attached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mark the registry closed. Instances stay attached but can no longer
    /// be reached through the registry.
    pub fn shutdown(&mut self) {
        self.closed = true;
    }

    // ── Routing ──────────────────────────────────────────────────────

    /// Fan one host event out to every attached widget, in attach order.
    ///
    /// Every widget sees every event (document-level handlers depend on
    /// that); the first widget error is returned after all widgets ran.
    pub fn dispatch(
        &mut self,
        dom: &mut Dom,
        scheduler: &mut Scheduler,
        event: UiEvent,
    ) -> Result<(), WidgetError> {
        if self.closed {
            return Err(WidgetError::MissingHost);
        }
        let mut first_error = None;
        for menu in &mut self.entries {
            if let Err(err) = menu.handle_event(dom, scheduler, event) {
                first_error.get_or_insert(err);
            }
        }
        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Route a due scheduler task to its widget. Tasks for roots that are no
    /// longer registered are dropped.
    pub fn run_task(&mut self, dom: &mut Dom, scheduler: &mut Scheduler, task: Task) {
        if self.closed {
            return;
        }
        let Some(menu) = self.entries.iter_mut().find(|m| m.root() == task.root()) else {
            log::debug!("dropping task for detached root: {task:?}");
            return;
        };
        match task {
            Task::ResizeSettled { .. } => menu.on_resize_settled(dom, scheduler),
            Task::EnableTransition { .. } => menu.on_enable_transition(dom),
            Task::PositionOverlay { .. } => menu.on_position_overlay(dom),
        }
    }

    /// Advance the scheduler and route everything that came due. The usual
    /// host loop body.
    pub fn advance(&mut self, dom: &mut Dom, scheduler: &mut Scheduler, delta_ms: u64) {
        for task in scheduler.advance(delta_ms) {
            self.run_task(dom, scheduler, task);
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
