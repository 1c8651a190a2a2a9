//! Host platform capabilities.
//!
//! Everything the page needs from its embedding host sits behind this
//! bundle: clipboard writes, history updates, scroll requests. Tests and
//! the CLI use the in-memory host; an embedding host swaps in its own
//! clipboard.
//!
//! # Modules
//!
//! - `clipboard`: `Clipboard` trait, in-memory and OS-command backends
//! - `history`: fragment stack updated without navigation
//! - `scroll`: recorded scroll-into-view requests

mod clipboard;
mod history;
mod scroll;

pub use clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
pub use history::History;
pub use scroll::{ScrollBehavior, ScrollRequest, Scroller};

/// Capability bundle handed to a [`crate::page::Page`].
#[derive(Debug)]
pub struct Host {
    pub clipboard: Box<dyn Clipboard>,
    pub history: History,
    pub scroller: Scroller,
}

impl Host {
    /// Fully in-memory host (tests, CLI, dry runs).
    pub fn memory() -> Self {
        Self::with_clipboard(Box::new(MemoryClipboard::new()))
    }

    /// Host backed by the operating system clipboard.
    pub fn system() -> Self {
        Self::with_clipboard(Box::new(SystemClipboard::new()))
    }

    /// Host with a caller-supplied clipboard backend.
    pub fn with_clipboard(clipboard: Box<dyn Clipboard>) -> Self {
        Self {
            clipboard,
            history: History::default(),
            scroller: Scroller::default(),
        }
    }
}

impl Default for Host {
    fn default() -> Self {
        Self::memory()
    }
}
