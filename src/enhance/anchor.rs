//! In-page anchor navigation.
//!
//! Every `<a href="#...">` present at install time is wired for click
//! interception. Resolution happens at click time, not install time: a
//! link whose target id exists gets smooth scrolling plus a history
//! fragment update with its default suppressed, while a link to a missing
//! id falls through to the host's default behavior. Links are wired
//! independently; several links to the same fragment each get their own
//! listener.

use crate::event::{Action, EventKind, ListenerTarget};
use crate::page::Page;

/// Wire click interception; returns how many links were wired.
pub fn install(page: &mut Page) -> usize {
    let links = page.doc().find_all(|el| {
        el.tag == "a" && el.attr("href").is_some_and(|href| href.starts_with('#'))
    });

    for anchor in &links {
        page.add_listener(
            ListenerTarget::Node(*anchor),
            EventKind::Click,
            Action::FollowFragment { anchor: *anchor },
        );
    }

    links.len()
}
