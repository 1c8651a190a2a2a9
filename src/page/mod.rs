//! The page context.
//!
//! [`Page`] is the explicit stand-in for the browser's implicit globals:
//! it owns the document tree, the host capabilities, the focus state, the
//! listener table and the one-shot timer queue, and it carries the
//! simulated clock. Components never touch a global - everything flows
//! through this object, which is what makes the enhancers testable against
//! a synthetic tree.
//!
//! Single-threaded by contract: the embedding host's event loop is the
//! only scheduler, so there are no locks anywhere in the page.

mod dispatch;
mod timer;

use crate::config::EnhanceConfig;
use crate::core::Platform;
use crate::dom::{Document, NodeId};
use crate::enhance::{self, BootReport};
use crate::event::{EventKind, Key, KeyPress, Listener, ListenerTarget, PageEvent, Subscription};
use crate::event::{Action, DispatchOutcome};
use crate::host::Host;

pub(crate) use timer::TimerAction;

/// Explicit page context: document + host + focus + listeners + clock.
#[derive(Debug)]
pub struct Page {
    doc: Document,
    config: EnhanceConfig,
    host: Host,
    platform: Platform,
    focused: Option<NodeId>,
    listeners: Vec<Listener>,
    next_listener: usize,
    timers: timer::TimerQueue,
    now: u64,
}

impl Page {
    /// Page over `doc` with an in-memory host.
    pub fn new(doc: Document, config: EnhanceConfig) -> Self {
        Self::with_host(doc, config, Host::memory())
    }

    /// Page with a caller-supplied host.
    pub fn with_host(doc: Document, config: EnhanceConfig, host: Host) -> Self {
        Self {
            doc,
            config,
            host,
            platform: Platform::current(),
            focused: None,
            listeners: Vec::new(),
            next_listener: 0,
            timers: timer::TimerQueue::default(),
            now: 0,
        }
    }

    /// Pin the accelerator platform (defaults to the build host's).
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn doc(&self) -> &Document {
        &self.doc
    }

    pub fn doc_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    pub fn config(&self) -> &EnhanceConfig {
        &self.config
    }

    pub fn host(&self) -> &Host {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut Host {
        &mut self.host
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Element currently holding focus.
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    pub fn focus(&mut self, id: NodeId) {
        if self.doc.element(id).is_some() {
            self.focused = Some(id);
        }
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// Current simulated time, in milliseconds since page construction.
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Scheduled, not-yet-fired one-shot timers.
    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    /// The search input, located fresh on every call.
    pub fn search_input(&self) -> Option<NodeId> {
        let search = &self.config.search;
        self.doc.find_first(|el| {
            el.tag == "input" && el.attr(&search.input_attr) == Some(search.input_value.as_str())
        })
    }

    // -------------------------------------------------------------------------
    // Boot & listeners
    // -------------------------------------------------------------------------

    /// Run all enhancer passes once (the DOM-ready hook).
    pub fn boot(&mut self) -> BootReport {
        enhance::boot(self)
    }

    pub(crate) fn add_listener(
        &mut self,
        target: ListenerTarget,
        kind: EventKind,
        action: Action,
    ) -> Subscription {
        let id = self.next_listener;
        self.next_listener += 1;
        self.listeners.push(Listener {
            id,
            target,
            kind,
            action,
        });
        Subscription(id)
    }

    /// Remove a document-level listener installed at boot.
    pub fn unsubscribe(&mut self, subscription: Subscription) {
        self.listeners.retain(|l| l.id != subscription.0);
    }

    // -------------------------------------------------------------------------
    // Clock
    // -------------------------------------------------------------------------

    /// Advance the simulated clock, firing every timer that comes due.
    pub fn advance(&mut self, ms: u64) {
        self.now += ms;
        for action in self.timers.take_due(self.now) {
            match action {
                TimerAction::SetLabel { target, label } => self.doc.set_text(target, &label),
            }
        }
    }

    pub(crate) fn schedule_in(&mut self, delay_ms: u64, action: TimerAction) {
        self.timers.schedule(self.now + delay_ms, action);
    }

    // -------------------------------------------------------------------------
    // Event conveniences
    // -------------------------------------------------------------------------

    /// Dispatch a click on `target`.
    pub fn click(&mut self, target: NodeId) -> DispatchOutcome {
        self.dispatch(PageEvent::Click { target })
    }

    /// Dispatch a key press to the document.
    pub fn key_down(&mut self, press: KeyPress) -> DispatchOutcome {
        self.dispatch(PageEvent::KeyDown { press })
    }

    /// Dispatch a plain character key press.
    pub fn key_char(&mut self, c: char) -> DispatchOutcome {
        self.key_down(KeyPress::new(Key::Char(c)))
    }

    pub fn pointer_enter(&mut self, target: NodeId) -> DispatchOutcome {
        self.dispatch(PageEvent::PointerEnter { target })
    }

    pub fn pointer_leave(&mut self, target: NodeId) -> DispatchOutcome {
        self.dispatch(PageEvent::PointerLeave { target })
    }

    /// Set an input's value and dispatch the matching input event.
    pub fn input(&mut self, target: NodeId, text: &str) -> DispatchOutcome {
        self.doc.set_attr(target, "value", text);
        self.dispatch(PageEvent::Input { target })
    }
}
