//! HTML → [`Document`] parsing.
//!
//! Rendered documentation pages are well-formed enough for an XML-grade
//! reader, with two HTML allowances layered on top:
//!
//! - void elements (`<input>`, `<br>`, ...) never open a nesting level,
//!   whether or not the source self-closes them;
//! - end tags that match nothing open are dropped instead of failing.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::document::Document;
use super::node::NodeId;
use crate::error::{EnhanceError, Result};
use crate::utils::html::is_void_element;

/// Parse an HTML string into a [`Document`].
pub fn parse(html: &str) -> Result<Document> {
    let mut reader = Reader::from_str(html);
    let config = reader.config_mut();
    config.check_end_names = false;
    config.allow_unmatched_ends = true;

    let mut doc = Document::new();
    let root = doc.root();
    // Stack of currently open elements; index 0 is the synthetic root.
    let mut open: Vec<NodeId> = vec![root];

    loop {
        let parent = open.last().copied().unwrap_or(root);
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                let id = append_element(&mut doc, &start, parent)?;
                let tag = tag_name(&start);
                if !is_void_element(&tag) {
                    open.push(id);
                }
            }
            Ok(Event::Empty(start)) => {
                append_element(&mut doc, &start, parent)?;
            }
            Ok(Event::End(end)) => {
                let tag = String::from_utf8_lossy(end.name().as_ref()).to_lowercase();
                // Close the innermost matching element; a stray end tag
                // (void or never opened) matches nothing and is dropped.
                if let Some(pos) = open
                    .iter()
                    .rposition(|id| doc.element(*id).is_some_and(|el| el.tag == tag))
                    && pos > 0
                {
                    open.truncate(pos);
                }
            }
            Ok(Event::Text(text)) => {
                let value = text
                    .unescape()
                    .map(|cow| cow.into_owned())
                    .unwrap_or_else(|_| String::from_utf8_lossy(&text).into_owned());
                let node = doc.create_text(value);
                doc.append_child(parent, node);
            }
            Ok(Event::CData(cdata)) => {
                let node = doc.create_text(String::from_utf8_lossy(&cdata).into_owned());
                doc.append_child(parent, node);
            }
            Ok(Event::Comment(comment)) => {
                let node = doc.create_comment(String::from_utf8_lossy(&comment).into_owned());
                doc.append_child(parent, node);
            }
            Ok(Event::DocType(doctype)) => {
                doc.doctype = Some(String::from_utf8_lossy(&doctype).trim().to_string());
            }
            Ok(Event::Eof) => break,
            Ok(_) => {} // declarations, processing instructions
            Err(e) => return Err(EnhanceError::Html(e.to_string())),
        }
    }

    Ok(doc)
}

/// Append an element for a start tag under `parent`, returning its id.
fn append_element(doc: &mut Document, start: &BytesStart<'_>, parent: NodeId) -> Result<NodeId> {
    let id = doc.create_element(tag_name(start));
    for attr in start.attributes() {
        let attr = attr.map_err(|e| EnhanceError::Html(e.to_string()))?;
        let name = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map(|cow| cow.into_owned())
            .unwrap_or_else(|_| String::from_utf8_lossy(&attr.value).into_owned());
        doc.set_attr(id, &name, &value);
    }
    doc.append_child(parent, id);
    Ok(id)
}

fn tag_name(start: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(start.name().as_ref()).to_lowercase()
}
