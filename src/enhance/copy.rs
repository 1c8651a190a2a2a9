//! Copy controls for code blocks.
//!
//! Every `<pre><code>` block present at install time gets exactly one
//! copy control appended to its `<pre>` container. A container already
//! bearing a control (checked by the control class, scoped to the
//! container's direct children) is skipped, so re-running the pass never
//! duplicates controls.
//!
//! Activating a control writes the block's full text to the clipboard;
//! on success the label flips to the copied label and a one-shot timer
//! reverts it. Hover raises the control's opacity, pointer-leave restores
//! it.

use crate::config::CopyConfig;
use crate::dom::{Document, NodeId};
use crate::event::{Action, EventKind, ListenerTarget};
use crate::page::Page;

/// Static declarations applied to every injected control. Opacity is
/// appended separately since it is configurable.
const CONTROL_STYLE: &[(&str, &str)] = &[
    ("position", "absolute"),
    ("top", "0.5rem"),
    ("right", "0.5rem"),
    ("padding", "0.25rem 0.5rem"),
    ("background", "var(--md-primary-fg-color)"),
    ("color", "white"),
    ("border", "none"),
    ("border-radius", "0.25rem"),
    ("cursor", "pointer"),
    ("font-size", "0.75rem"),
    ("transition", "opacity 0.2s"),
];

/// Inject copy controls; returns how many were added.
pub fn install(page: &mut Page) -> usize {
    let cfg = page.config().copy.clone();
    let mut installed = 0;

    for (pre, code) in code_blocks(page.doc()) {
        if has_control(page.doc(), pre, &cfg.control_class) {
            continue; // Already has copy control
        }

        let control = build_control(page, &cfg);

        // The control is positioned over the container, which must
        // establish a positioning context of its own.
        if page.doc().element(pre).is_none_or(|el| el.style("position").is_none()) {
            page.doc_mut().set_style(pre, "position", "relative");
        }
        page.doc_mut().append_child(pre, control);

        page.add_listener(
            ListenerTarget::Node(control),
            EventKind::Click,
            Action::CopyBlock {
                block: code,
                control,
            },
        );
        page.add_listener(
            ListenerTarget::Node(control),
            EventKind::PointerEnter,
            Action::SetOpacity {
                target: control,
                value: opacity_value(cfg.hover_opacity),
            },
        );
        page.add_listener(
            ListenerTarget::Node(control),
            EventKind::PointerLeave,
            Action::SetOpacity {
                target: control,
                value: opacity_value(cfg.rest_opacity),
            },
        );

        installed += 1;
    }

    installed
}

/// All `<pre><code>` pairs in document order.
pub(crate) fn code_blocks(doc: &Document) -> Vec<(NodeId, NodeId)> {
    doc.elements_by_tag("code")
        .into_iter()
        .filter_map(|code| {
            let pre = doc.parent(code)?;
            doc.element(pre)
                .filter(|el| el.tag == "pre")
                .map(|_| (pre, code))
        })
        .collect()
}

/// Whether `container` already carries a control among its direct children.
fn has_control(doc: &Document, container: NodeId, control_class: &str) -> bool {
    doc.children(container)
        .iter()
        .any(|child| doc.element(*child).is_some_and(|el| el.has_class(control_class)))
}

/// Create a detached, fully styled control with its resting label.
fn build_control(page: &mut Page, cfg: &CopyConfig) -> NodeId {
    let control = page.doc_mut().create_element("button");
    page.doc_mut().add_class(control, &cfg.control_class);
    for (prop, value) in CONTROL_STYLE {
        page.doc_mut().set_style(control, prop, value);
    }
    page.doc_mut()
        .set_style(control, "opacity", &opacity_value(cfg.rest_opacity));
    let label = page.doc_mut().create_text(cfg.resting_label.clone());
    page.doc_mut().append_child(control, label);
    control
}

/// CSS-friendly opacity value (`0.7`, `1`).
fn opacity_value(opacity: f32) -> String {
    format!("{opacity}")
}
