//! End-to-end enhancement behavior on a parsed page.

use pagelift::config::EnhanceConfig;
use pagelift::core::Platform;
use pagelift::dom::{self, NodeId};
use pagelift::event::{Key, KeyPress, Modifiers};
use pagelift::host::{Host, MemoryClipboard};
use pagelift::page::Page;

const SAMPLE: &str = r##"<!DOCTYPE html>
<html>
<body>
<nav><a href="#domain-services">Domain</a><a href="#missing">Nowhere</a></nav>
<h2 id="domain-services">Domain Services</h2>
<pre><code>let service = Service::new();</code></pre>
<h3>Storage Adapter</h3>
<h2>Changelog</h2>
<input data-md-component="search-query" type="text">
</body>
</html>"##;

fn booted_page() -> (Page, MemoryClipboard) {
    let clipboard = MemoryClipboard::new();
    let doc = dom::parse(SAMPLE).unwrap();
    let mut page = Page::with_host(
        doc,
        EnhanceConfig::default(),
        Host::with_clipboard(Box::new(clipboard.clone())),
    )
    .with_platform(Platform::Other);
    page.boot();
    (page, clipboard)
}

fn copy_control(page: &Page) -> NodeId {
    page.doc()
        .find_all(|el| el.has_class("copy-button"))
        .first()
        .copied()
        .expect("boot should inject a copy control")
}

#[test]
fn boot_report_counts() {
    let clipboard = MemoryClipboard::new();
    let doc = dom::parse(SAMPLE).unwrap();
    let mut page = Page::with_host(
        doc,
        EnhanceConfig::default(),
        Host::with_clipboard(Box::new(clipboard)),
    );
    let report = page.boot();

    assert_eq!(report.copy_controls, 1);
    assert_eq!(report.anchor_links, 2);
    assert_eq!(report.tagged_headings, 2); // "Changelog" stays untagged
    assert!(report.intent_observer);
}

#[test]
fn boot_twice_keeps_one_control_per_block() {
    let (mut page, _clipboard) = booted_page();
    page.boot();

    let controls = page.doc().find_all(|el| el.has_class("copy-button"));
    assert_eq!(controls.len(), 1);
}

#[test]
fn copy_label_round_trip() {
    let (mut page, clipboard) = booted_page();
    let control = copy_control(&page);

    page.click(control);
    assert_eq!(clipboard.last(), Some("let service = Service::new();".to_string()));
    assert_eq!(page.doc().text_content(control), "Copied!");

    page.advance(1999);
    assert_eq!(page.doc().text_content(control), "Copied!");

    page.advance(1);
    assert_eq!(page.doc().text_content(control), "Copy");
}

#[test]
fn rapid_double_activation_leaves_two_timers() {
    let (mut page, clipboard) = booted_page();
    let control = copy_control(&page);

    page.click(control);
    page.advance(500);
    page.click(control);

    // Both activations copied, both revert timers stay live.
    assert_eq!(clipboard.writes().len(), 2);
    assert_eq!(page.pending_timers(), 2);

    page.advance(1500); // first timer fires at t=2000
    assert_eq!(page.doc().text_content(control), "Copy");
    assert_eq!(page.pending_timers(), 1);

    page.advance(500); // second fires at t=2500
    assert_eq!(page.doc().text_content(control), "Copy");
    assert_eq!(page.pending_timers(), 0);
}

#[test]
fn clipboard_failure_is_silent() {
    #[derive(Debug)]
    struct RejectingClipboard;

    impl pagelift::host::Clipboard for RejectingClipboard {
        fn write_text(&mut self, _text: &str) -> pagelift::Result<()> {
            Err(pagelift::EnhanceError::Clipboard("denied".to_string()))
        }
    }

    let doc = dom::parse(SAMPLE).unwrap();
    let mut page = Page::with_host(
        doc,
        EnhanceConfig::default(),
        Host::with_clipboard(Box::new(RejectingClipboard)),
    );
    page.boot();

    let control = copy_control(&page);
    page.click(control);

    // Failure is unobserved: label stays at rest, no revert timer queued.
    assert_eq!(page.doc().text_content(control), "Copy");
    assert_eq!(page.pending_timers(), 0);
}

#[test]
fn hover_toggles_opacity() {
    let (mut page, _clipboard) = booted_page();
    let control = copy_control(&page);
    let opacity = |page: &Page| page.doc().element(control).unwrap().style("opacity");

    assert_eq!(opacity(&page), Some("0.7".to_string()));
    page.pointer_enter(control);
    assert_eq!(opacity(&page), Some("1".to_string()));
    page.pointer_leave(control);
    assert_eq!(opacity(&page), Some("0.7".to_string()));
}

#[test]
fn anchor_click_scrolls_and_pushes_fragment() {
    let (mut page, _clipboard) = booted_page();
    let links = page.doc().elements_by_tag("a");
    let heading = page.doc().element_by_id("domain-services").unwrap();

    let outcome = page.click(links[0]);
    assert!(outcome.default_prevented);
    assert_eq!(page.host().history.current(), Some("#domain-services"));
    assert_eq!(page.host().scroller.last().unwrap().target, heading);
}

#[test]
fn missing_anchor_target_fails_open() {
    let (mut page, _clipboard) = booted_page();
    let links = page.doc().elements_by_tag("a");

    let outcome = page.click(links[1]);
    assert!(!outcome.default_prevented);
    assert!(page.host().history.is_empty());
}

#[test]
fn layer_tags_follow_table_order() {
    let (page, _clipboard) = booted_page();
    let h2 = page.doc().element_by_id("domain-services").unwrap();
    let el = page.doc().element(h2).unwrap();
    assert!(el.has_class("architecture-layer"));
    assert!(el.has_class("domain-layer"));

    let h3 = page.doc().elements_by_tag("h3")[0];
    assert!(page.doc().element(h3).unwrap().has_class("adapters-layer"));
}

#[test]
fn accelerator_focuses_and_escape_scopes() {
    let (mut page, _clipboard) = booted_page();
    let input = page.search_input().unwrap();

    let outcome = page.key_down(KeyPress::with_modifiers(Key::Char('k'), Modifiers::ctrl()));
    assert!(outcome.default_prevented);
    assert_eq!(page.focused(), Some(input));

    page.key_down(KeyPress::new(Key::Escape));
    assert_eq!(page.focused(), None);

    // Escape with focus elsewhere leaves that focus alone
    let nav = page.doc().elements_by_tag("nav")[0];
    page.focus(nav);
    page.key_down(KeyPress::new(Key::Escape));
    assert_eq!(page.focused(), Some(nav));
}

#[test]
fn components_touch_disjoint_nodes() {
    // The copy control carries no layer classes; tagged headings carry no
    // copy wiring. Components only meet through the shared tree.
    let (page, _clipboard) = booted_page();
    let control = copy_control(&page);
    let el = page.doc().element(control).unwrap();
    assert!(!el.has_class("architecture-layer"));

    let h2 = page.doc().element_by_id("domain-services").unwrap();
    assert!(!page.doc().element(h2).unwrap().has_class("copy-button"));
}

#[test]
fn enhanced_page_serializes_with_injected_markup() {
    let (page, _clipboard) = booted_page();
    let html = dom::render(page.doc());

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("copy-button"));
    assert!(html.contains("architecture-layer domain-layer"));
    assert!(html.contains(r#"<pre style="position: relative">"#));
}
