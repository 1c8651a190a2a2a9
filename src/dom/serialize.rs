//! [`Document`] → HTML serialization.

use super::document::Document;
use super::node::{NodeData, NodeId};
use crate::utils::html::{escape, escape_attr, is_void_element};

/// Render a document back to HTML.
///
/// Attributes keep their source order; text and attribute values are
/// entity-escaped. A doctype captured at parse time is re-emitted.
pub fn render(doc: &Document) -> String {
    let mut out = String::new();
    if let Some(doctype) = &doc.doctype {
        out.push_str("<!DOCTYPE ");
        out.push_str(doctype);
        out.push('>');
        out.push('\n');
    }
    for child in doc.children(doc.root()) {
        render_node(doc, *child, &mut out);
    }
    out
}

fn render_node(doc: &Document, id: NodeId, out: &mut String) {
    match doc.data(id) {
        Some(NodeData::Text(text)) => out.push_str(&escape(text)),
        Some(NodeData::Comment(text)) => {
            out.push_str("<!--");
            out.push_str(text);
            out.push_str("-->");
        }
        Some(NodeData::Element(el)) => {
            out.push('<');
            out.push_str(&el.tag);
            for (name, value) in el.attrs() {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                out.push_str(&escape_attr(value));
                out.push('"');
            }
            out.push('>');
            if is_void_element(&el.tag) {
                return;
            }
            for child in doc.children(id) {
                render_node(doc, *child, out);
            }
            out.push_str("</");
            out.push_str(&el.tag);
            out.push('>');
        }
        None => {}
    }
}
