//! Pagelift - a post-render enhancement engine for documentation pages.
//!
//! Pagelift takes a rendered documentation page and layers four independent
//! behaviors on top of it, the way a site's custom script would after page
//! load:
//!
//! - copy controls on `<pre><code>` blocks ([`enhance::copy`])
//! - intercepted same-page anchor navigation ([`enhance::anchor`])
//! - architecture-layer tags on section headings ([`enhance::layer`])
//! - a search focus/blur keyboard shortcut ([`enhance::search`])
//!
//! The page itself is an explicit [`Page`] context: a synthetic document
//! tree plus host capabilities (clipboard, history, scroll), a listener
//! table and a one-shot timer queue driven by a simulated clock. Embedding
//! hosts construct a `Page`, call [`Page::boot`] once at DOM-ready, then
//! feed events in through [`Page::dispatch`] and time through
//! [`Page::advance`]. Everything is single-threaded; the host's event loop
//! is the only scheduler.
//!
//! ```ignore
//! let doc = pagelift::dom::parse(&html)?;
//! let mut page = Page::new(doc, EnhanceConfig::default());
//! let report = page.boot();
//! page.click(some_anchor);
//! page.advance(2000);
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod dom;
pub mod enhance;
pub mod error;
pub mod event;
pub mod host;
pub mod logger;
pub mod page;
pub mod utils;

pub use crate::config::EnhanceConfig;
pub use crate::core::{Layer, Platform};
pub use crate::error::{EnhanceError, Result};
pub use crate::event::{Key, KeyPress, Modifiers, PageEvent, Subscription};
pub use crate::page::Page;
