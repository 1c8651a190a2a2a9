//! Page enhancement passes.
//!
//! Four independent, stateless passes wire the page's behavior at
//! DOM-ready. They share no state and communicate only through the tree;
//! the order they run in is cosmetic.
//!
//! # Modules
//!
//! - `copy`: copy controls on `<pre><code>` blocks
//! - `anchor`: intercepted same-page anchor navigation
//! - `layer`: architecture-layer tags on headings
//! - `search`: focus/blur keyboard shortcut + intent observer

pub mod anchor;
pub mod copy;
pub mod layer;
pub mod search;

use serde::Serialize;

use crate::event::Subscription;
use crate::page::Page;

/// What one boot pass wired up.
#[derive(Debug, Clone, Serialize)]
pub struct BootReport {
    /// Copy controls injected (blocks already bearing one are skipped).
    pub copy_controls: usize,
    /// Same-page anchor links wired for interception.
    pub anchor_links: usize,
    /// Headings that received a layer tag.
    pub tagged_headings: usize,
    /// Whether the search input existed and got an intent observer.
    pub intent_observer: bool,
    /// Handle to the document-level key listener.
    #[serde(skip)]
    pub key_listener: Subscription,
}

/// Run all four enhancer passes once (the DOM-ready hook).
pub fn boot(page: &mut Page) -> BootReport {
    let copy_controls = copy::install(page);
    let anchor_links = anchor::install(page);
    let tagged_headings = layer::install(page);
    let search = search::install(page);

    crate::debug!(
        "enhance";
        "boot: {copy_controls} copy controls, {anchor_links} anchors, {tagged_headings} tagged headings"
    );

    BootReport {
        copy_controls,
        anchor_links,
        tagged_headings,
        intent_observer: search.intent_observer,
        key_listener: search.key_listener,
    }
}
