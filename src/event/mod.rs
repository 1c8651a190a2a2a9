//! Page events, key presses, listeners.
//!
//! Behavior wired onto the tree is data, not closures: a listener pairs an
//! event match (target + kind) with an [`Action`] the page executes on
//! dispatch. Dispatch order is registration order, and dispatch reports
//! whether any action suppressed the event's default, so hosts can apply
//! (or skip) their native handling.

use crate::core::Platform;
use crate::dom::NodeId;

// =============================================================================
// Key presses
// =============================================================================

/// Modifier keys held during a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        meta: false,
        shift: false,
        alt: false,
    };

    pub const fn ctrl() -> Self {
        Modifiers {
            ctrl: true,
            meta: false,
            shift: false,
            alt: false,
        }
    }

    pub const fn meta() -> Self {
        Modifiers {
            ctrl: false,
            meta: true,
            shift: false,
            alt: false,
        }
    }
}

/// Key identity of a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
}

/// A key press: key plus held modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyPress {
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    pub const fn with_modifiers(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Whether the platform accelerator is held: Command on Apple
    /// platforms, Control elsewhere.
    pub fn accelerator(&self, platform: Platform) -> bool {
        if platform.is_apple() {
            self.modifiers.meta
        } else {
            self.modifiers.ctrl
        }
    }
}

// =============================================================================
// Events
// =============================================================================

/// Event categories a listener can match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Click,
    KeyDown,
    Input,
    PointerEnter,
    PointerLeave,
}

/// An event delivered to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    Click { target: NodeId },
    KeyDown { press: KeyPress },
    Input { target: NodeId },
    PointerEnter { target: NodeId },
    PointerLeave { target: NodeId },
}

impl PageEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            PageEvent::Click { .. } => EventKind::Click,
            PageEvent::KeyDown { .. } => EventKind::KeyDown,
            PageEvent::Input { .. } => EventKind::Input,
            PageEvent::PointerEnter { .. } => EventKind::PointerEnter,
            PageEvent::PointerLeave { .. } => EventKind::PointerLeave,
        }
    }

    /// The node the event targets; key events target the document.
    pub fn target(&self) -> Option<NodeId> {
        match self {
            PageEvent::Click { target }
            | PageEvent::Input { target }
            | PageEvent::PointerEnter { target }
            | PageEvent::PointerLeave { target } => Some(*target),
            PageEvent::KeyDown { .. } => None,
        }
    }
}

/// What a dispatch did with the event's default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchOutcome {
    /// True when a handler suppressed the host's default action
    /// (fragment jump, browser search palette, ...).
    pub default_prevented: bool,
}

// =============================================================================
// Listeners
// =============================================================================

/// What a listener is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerTarget {
    Node(NodeId),
    Document,
}

/// Reaction executed when a listener's event arrives.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Action {
    /// Copy a code block's text and flash the control label.
    CopyBlock { block: NodeId, control: NodeId },
    /// Set the control's inline opacity (hover affordance).
    SetOpacity { target: NodeId, value: String },
    /// Intercept a same-page fragment link.
    FollowFragment { anchor: NodeId },
    /// Accelerator+k / Escape handling for the search input.
    SearchShortcut,
    /// Advisory classification of the typed search query.
    ObserveIntent { input: NodeId },
}

#[derive(Debug, Clone)]
pub(crate) struct Listener {
    pub id: usize,
    pub target: ListenerTarget,
    pub kind: EventKind,
    pub action: Action,
}

impl Listener {
    pub(crate) fn matches(&self, event: &PageEvent) -> bool {
        if self.kind != event.kind() {
            return false;
        }
        match (self.target, event.target()) {
            (ListenerTarget::Document, None) => true,
            (ListenerTarget::Node(node), Some(target)) => node == target,
            _ => false,
        }
    }
}

/// Handle to an installed document-level listener.
///
/// The listener lives for the page's lifetime; an embedding host that
/// needs teardown passes the handle to [`crate::page::Page::unsubscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(pub(crate) usize);
