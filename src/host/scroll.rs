//! Scroll requests.
//!
//! The page does not own a viewport; it records what it asked the host to
//! do. A request runs to completion or is superseded by the next one -
//! there is no cancellation.

use crate::dom::NodeId;

/// Scroll easing requested from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Auto,
}

/// A scroll-into-view request, aligned to the target's top edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollRequest {
    /// Element scrolled into view.
    pub target: NodeId,
    /// Fragment that produced the request (without `#`).
    pub fragment: String,
    pub behavior: ScrollBehavior,
}

/// Recorder for scroll requests issued by the page.
#[derive(Debug, Clone, Default)]
pub struct Scroller {
    requests: Vec<ScrollRequest>,
}

impl Scroller {
    pub fn scroll_into_view(&mut self, request: ScrollRequest) {
        self.requests.push(request);
    }

    /// The most recent request, if any.
    pub fn last(&self) -> Option<&ScrollRequest> {
        self.requests.last()
    }

    /// All requests, oldest first.
    pub fn requests(&self) -> &[ScrollRequest] {
        &self.requests
    }
}
