//! Synthetic document tree.
//!
//! The enhancement passes operate on an explicit, arena-backed document
//! tree instead of a live browser DOM. The tree carries exactly what the
//! passes need: elements with attributes, class lists and inline styles,
//! text and comment nodes, document-order traversal, and mutation.
//!
//! # Modules
//!
//! - `node`: node data (`NodeData`, `ElementData`) and `NodeId`
//! - `document`: the arena (`Document`) with queries and mutation
//! - `parse`: HTML → `Document` (quick-xml based, void-element tolerant)
//! - `serialize`: `Document` → HTML with entity escaping

mod document;
mod node;
mod parse;
mod serialize;

pub use document::Document;
pub use node::{ElementData, NodeData, NodeId};
pub use parse::parse;
pub use serialize::render;
