//! Search keyboard shortcut and intent observer.
//!
//! Installs the page's one document-level key listener:
//!
//! - accelerator + `k` suppresses the host default and focuses the search
//!   input, which is looked up fresh on every key event (it may appear or
//!   disappear during the page's lifetime);
//! - Escape blurs the input, but only while the input holds focus.
//!
//! The returned [`Subscription`] lives for the page's duration; hosts that
//! need teardown hand it back to [`Page::unsubscribe`].
//!
//! When the search input exists at install time it also gets the advisory
//! intent observer, which classifies each typed query against the
//! short-form layer keywords and emits a diagnostic log line. The observer
//! never alters the query or any result.

use crate::event::{Action, EventKind, ListenerTarget, Subscription};
use crate::page::Page;

/// What the search pass wired up.
#[derive(Debug, Clone, Copy)]
pub struct SearchWiring {
    /// Handle to the document-level key listener.
    pub key_listener: Subscription,
    /// Whether the input existed and got the intent observer.
    pub intent_observer: bool,
}

/// Install the key listener and, if possible, the intent observer.
pub fn install(page: &mut Page) -> SearchWiring {
    let key_listener = page.add_listener(
        ListenerTarget::Document,
        EventKind::KeyDown,
        Action::SearchShortcut,
    );

    let intent_observer = match page.search_input() {
        Some(input) => {
            page.add_listener(
                ListenerTarget::Node(input),
                EventKind::Input,
                Action::ObserveIntent { input },
            );
            true
        }
        None => false,
    };

    SearchWiring {
        key_listener,
        intent_observer,
    }
}
